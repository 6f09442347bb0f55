//! Number command implementation

use crate::commands::{build_reader, init_logging};
use crate::error::CliResult;
use crate::output::{JsonFormatter, LineFormatter, TextFormatter};
use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io;
use std::path::PathBuf;

/// Arguments for the number command
#[derive(Debug, Args)]
pub struct NumberArgs {
    /// Input file (use '-' for stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Chunk size in bytes for source reads
    #[arg(long, value_name = "BYTES", env = "BYLINE_CHUNK_SIZE")]
    pub chunk_size: Option<usize>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One numbered line per input line
    Text,
    /// JSON array of line records
    Json,
}

impl NumberArgs {
    /// Execute the number command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        log::info!("numbering lines of {}", self.input.display());

        let reader = build_reader(&self.input, self.chunk_size)?;
        let mut formatter = self.formatter()?;

        for record in reader {
            let record = record
                .with_context(|| format!("failed to read {}", self.input.display()))?;
            formatter.write_record(&record)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn formatter(&self) -> CliResult<Box<dyn LineFormatter>> {
        let writer: Box<dyn io::Write> = match &self.output {
            Some(path) => Box::new(
                File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        })
    }
}
