//! JSON output formatter

use super::LineFormatter;
use anyhow::Result;
use byline_core::LineRecord;
use std::io::Write;

/// JSON formatter - collects records and writes one JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    records: Vec<LineRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records: Vec::new(),
        }
    }
}

impl<W: Write> LineFormatter for JsonFormatter<W> {
    fn write_record(&mut self, record: &LineRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
