//! Evaluation report output.

mod report;

pub use report::{print_report, write_report};
