//! CLI command implementations

use crate::error::{CliError, CliResult};
use byline_core::{Input, LineReader, ReaderConfig};
use clap::Subcommand;
use std::io;
use std::path::Path;

pub mod count;
pub mod number;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a file line by line with 1-based line numbers
    Number(number::NumberArgs),

    /// Count the lines in a file
    Count(count::CountArgs),
}

/// Initialize logging based on verbosity flags
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

/// Build a line reader over a file path, or stdin for `-`
pub(crate) fn build_reader(input: &Path, chunk_size: Option<usize>) -> CliResult<LineReader> {
    let mut config = ReaderConfig::new();
    if let Some(size) = chunk_size {
        if size == 0 {
            return Err(CliError::InvalidChunkSize(size).into());
        }
        config = config.chunk_size(size);
    }

    let input = if input == Path::new("-") {
        log::debug!("reading from stdin");
        Input::from_reader(io::stdin())
    } else {
        log::debug!("reading from {}", input.display());
        Input::from_file(input)
    };

    Ok(LineReader::with_config(input, config))
}
