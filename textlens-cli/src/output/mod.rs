//! Output module: report persistence and console formatting

use anyhow::Result;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single document report
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod report;
pub mod text;

pub use json::JsonFormatter;
pub use report::{Report, ReportStore};
pub use text::TextFormatter;
