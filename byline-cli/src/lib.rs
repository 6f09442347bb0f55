//! Byline CLI library
//!
//! This library provides the command-line interface over the lazy
//! line-numbered reader in `byline-core`.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
