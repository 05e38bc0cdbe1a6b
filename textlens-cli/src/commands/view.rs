//! View command implementation

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use textlens_core::source::url_file_name;
use textlens_core::SourceKind;

use super::analyze::OutputFormat;
use crate::config::CliConfig;
use crate::output::ReportStore;

/// Arguments for the view command
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Document name, path or URL of a previously analyzed source
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Root directory the reports were written to
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Console output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ViewArgs {
    /// Execute the view command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(self.config.as_deref())?;
        let root = self
            .output_dir
            .clone()
            .unwrap_or(config.output.directory);
        let store = ReportStore::new(root, config.output.pretty_json);

        let report = store.load(&self.document_name())?;

        let mut formatter = self.format.stdout_formatter();
        formatter.format_report(&report)?;
        formatter.finish()
    }

    /// Name the report was stored under
    pub fn document_name(&self) -> String {
        if SourceKind::classify(&self.name).ok() == Some(SourceKind::WebResource) {
            if let Some(name) = url_file_name(&self.name) {
                return name.to_string();
            }
        }

        Path::new(&self.name)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }
}
