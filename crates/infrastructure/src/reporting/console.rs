//! Console reporter.
//!
//! Prints the run banner, one line per recorded result and the closing
//! summary. Lines are built by pure functions so their text can be checked
//! without a terminal.

use std::io::{self, Stdout, Write};

use alumni_probe_application::ports::Reporter;
use alumni_probe_domain::{RunSummary, TestResult};
use colored::Colorize;
use tracing::warn;

const RULE_WIDTH: usize = 60;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Lines printed before the first case runs.
#[must_use]
pub fn banner_lines(title: &str) -> Vec<String> {
    vec![format!("🚀 {title}"), rule()]
}

/// The line printed for one recorded result.
#[must_use]
pub fn result_line(result: &TestResult, colorize: bool) -> String {
    match (result.success, colorize) {
        (true, false) => format!("✅ {} - PASSED", result.name),
        (true, true) => format!("✅ {} - {}", result.name, "PASSED".green().bold()),
        (false, false) => format!("❌ {} - FAILED: {}", result.name, result.details),
        (false, true) => format!(
            "❌ {} - {} {}",
            result.name,
            "FAILED:".red().bold(),
            result.details
        ),
    }
}

/// Lines printed after the last case ran.
#[must_use]
pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let verdict = if summary.all_passed() {
        "🎉 All tests passed!".to_string()
    } else {
        format!("⚠️  {} tests failed", summary.failed)
    };
    vec![
        String::new(),
        rule(),
        format!(
            "📊 Test Summary: {}/{} tests passed",
            summary.passed, summary.total
        ),
        verdict,
    ]
}

/// Writes the report line by line as results arrive.
pub struct ConsoleReporter<W = Stdout> {
    out: W,
    colorize: bool,
}

impl ConsoleReporter<Stdout> {
    /// Reporter printing colored lines to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter writing to `out`; `colorize` toggles ANSI styling of the
    /// pass/fail markers.
    pub const fn new(out: W, colorize: bool) -> Self {
        Self { out, colorize }
    }

    /// Borrows the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.out
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: &str) {
        if let Err(error) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            warn!(%error, "failed to write report line");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn run_started(&mut self, title: &str) {
        for line in banner_lines(title) {
            self.emit(&line);
        }
    }

    fn result_recorded(&mut self, result: &TestResult) {
        let line = result_line(result, self.colorize);
        self.emit(&line);
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        for line in summary_lines(summary) {
            self.emit(&line);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_result_lines() {
        assert_eq!(
            result_line(&TestResult::pass("Root API", "Status: 200"), false),
            "✅ Root API - PASSED"
        );
        assert_eq!(
            result_line(
                &TestResult::fail("User Profile", "No authentication token"),
                false
            ),
            "❌ User Profile - FAILED: No authentication token"
        );
    }

    #[test]
    fn test_colored_line_keeps_name_and_details() {
        let line = result_line(&TestResult::fail("Donation", "Status: 500"), true);
        assert!(line.starts_with("❌ Donation - "));
        assert!(line.contains("FAILED:"));
        assert!(line.ends_with("Status: 500"));
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            banner_lines("Starting Global Horizon Alumni Network API Tests"),
            vec![
                "🚀 Starting Global Horizon Alumni Network API Tests".to_string(),
                "=".repeat(60),
            ]
        );
    }

    #[test]
    fn test_summary_all_passed() {
        assert_eq!(
            summary_lines(&RunSummary::new(15, 15)),
            vec![
                String::new(),
                "=".repeat(60),
                "📊 Test Summary: 15/15 tests passed".to_string(),
                "🎉 All tests passed!".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_with_failures() {
        let lines = summary_lines(&RunSummary::new(15, 12));
        assert_eq!(lines[2], "📊 Test Summary: 12/15 tests passed");
        assert_eq!(lines[3], "⚠️  3 tests failed");
    }

    #[test]
    fn test_reporter_writes_full_report() {
        let mut reporter = ConsoleReporter::new(Vec::new(), false);

        reporter.run_started("Title");
        reporter.result_recorded(&TestResult::pass("Root API", "Status: 200"));
        reporter.result_recorded(&TestResult::fail("Get Events", "Exception: request timed out"));
        reporter.run_finished(&RunSummary::new(2, 1));

        let output = String::from_utf8(reporter.into_inner()).unwrap();
        let expected = [
            "🚀 Title".to_string(),
            "=".repeat(60),
            "✅ Root API - PASSED".to_string(),
            "❌ Get Events - FAILED: Exception: request timed out".to_string(),
            String::new(),
            "=".repeat(60),
            "📊 Test Summary: 1/2 tests passed".to_string(),
            "⚠️  1 tests failed".to_string(),
        ]
        .join("\n")
            + "\n";
        assert_eq!(output, expected);
    }
}
