//! Count command implementation

use crate::commands::{build_reader, init_logging};
use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input file (use '-' for stdin)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

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

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> CliResult<()> {
        init_logging(self.quiet, self.verbose);

        let reader = build_reader(&self.input, self.chunk_size)?;

        let mut count = 0u64;
        for record in reader {
            record.with_context(|| format!("failed to read {}", self.input.display()))?;
            count += 1;
        }

        println!("{count}");
        Ok(())
    }
}
