//! Alumni Probe - Main Entry Point
//!
//! Runs the fixed catalog of API checks against one deployment, prints the
//! report to stdout and exits with 0 only when every check passed.

use alumni_probe_application::{RunnerConfig, TestRunner};
use alumni_probe_domain::DEFAULT_BASE_URL;
use alumni_probe_infrastructure::{ConsoleReporter, ReqwestHttpClient, SystemClock};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "alumni-probe", version)]
#[command(about = "End-to-end checks for the Global Horizon Alumni Network API")]
struct Cli {
    /// Deployment to test
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = RunnerConfig::new(&cli.base_url)
        .with_context(|| format!("invalid --base-url {:?}", cli.base_url))?;
    let client = ReqwestHttpClient::new().context("failed to build HTTP client")?;
    info!(base_url = %config.base_url, "probing deployment");

    let mut runner = TestRunner::new(config, client, SystemClock::new(), ConsoleReporter::stdout());
    let summary = runner.run_all().await;

    std::process::exit(summary.exit_code());
}
