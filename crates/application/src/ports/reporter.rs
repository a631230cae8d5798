//! Reporter port for human-readable run output

use alumni_probe_domain::{RunSummary, TestResult};

/// Receives run progress as it happens.
pub trait Reporter {
    /// Called once before the first case with the run banner title.
    fn run_started(&mut self, title: &str);

    /// Called immediately after each result is recorded.
    fn result_recorded(&mut self, result: &TestResult);

    /// Called once after the last case.
    fn run_finished(&mut self, summary: &RunSummary);
}
