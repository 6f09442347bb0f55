//! byline command-line entry point

use byline_cli::commands::Commands;
use clap::Parser;

/// Read files line by line, with 1-based line numbers
#[derive(Debug, Parser)]
#[command(name = "byline", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Number(args) => args.execute(),
        Commands::Count(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
