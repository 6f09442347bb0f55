//! Plain text output formatter

use super::LineFormatter;
use anyhow::Result;
use byline_core::LineRecord;
use std::io::{self, Write};

/// Plain text formatter - numbered lines in `cat -n` style
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineFormatter for TextFormatter<W> {
    fn write_record(&mut self, record: &LineRecord) -> Result<()> {
        writeln!(self.writer, "{:>6}\t{}", record.number, record.line)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_output() {
        let mut buf = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buf);
            formatter
                .write_record(&LineRecord {
                    line: "hello".to_string(),
                    number: 1,
                })
                .unwrap();
            formatter
                .write_record(&LineRecord {
                    line: "".to_string(),
                    number: 2,
                })
                .unwrap();
            formatter.finish().unwrap();
        }

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out, "     1\thello\n     2\t\n");
    }
}
