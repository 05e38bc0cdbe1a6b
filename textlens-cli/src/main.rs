//! textlens command-line entry point

use clap::Parser;
use textlens_cli::commands::Commands;

/// Descriptive statistics for plain-text documents
#[derive(Debug, Parser)]
#[command(name = "textlens", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
