//! Output formatting module

use anyhow::Result;
use byline_core::LineRecord;

/// Trait for output formatters
pub trait LineFormatter {
    /// Format and write a single line record
    fn write_record(&mut self, record: &LineRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
