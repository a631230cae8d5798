//! Human-readable run reports.

mod console;

pub use console::{ConsoleReporter, banner_lines, result_line, summary_lines};
