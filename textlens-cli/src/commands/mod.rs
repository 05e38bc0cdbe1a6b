//! CLI command implementations

use clap::Subcommand;
use textlens_core::SourceKind;

pub mod analyze;
pub mod view;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze local or web text documents and store their reports
    Analyze(analyze::AnalyzeArgs),

    /// Print the stored report of a previously analyzed document
    View(view::ViewArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List reported metrics
    Metrics,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Analyze(args) => args.execute(),
            Commands::View(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the list command
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Metrics => textlens_core::METRICS
                .iter()
                .map(|(key, title)| format!("{:<28}{}", key, title))
                .collect(),
            ListCommands::Formats => vec![
                format!("{:<28}{}", "text", "One `title: value` line per metric"),
                format!("{:<28}{}", "json", "JSON array of reports"),
            ],
        }
    }

    fn execute(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // A logger may already be installed when commands run in-process.
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}

/// Prefix of every per-document log record
pub fn document_tag(kind: SourceKind, name: &str) -> String {
    format!("[{}] [{}]", kind, name)
}
