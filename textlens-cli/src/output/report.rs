//! Persisted analysis reports
//!
//! Layout under the output root:
//!
//! ```text
//! texts_analysis/analysis_results_<stem>.json
//! reversed/reversed_<name>
//! reversed_intact/reversed_words_intact_<name>
//! ```
//!
//! The two reversal strings can be as large as the document itself, so they
//! are written to their own files and the report only refers to them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use textlens_core::{Analysis, SourceKind};

use crate::error::CliError;

const REPORTS_DIR: &str = "texts_analysis";
const REVERSED_DIR: &str = "reversed";
const REVERSED_INTACT_DIR: &str = "reversed_intact";

const REVERSED_TEXT_KEY: &str = "reversed_text";
const REVERSED_WORDS_INTACT_KEY: &str = "reversed_words_intact";

/// Stored result of analyzing one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Name of the analyzed document
    pub file_name: String,
    /// Where the document came from
    pub source: SourceKind,
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    /// Analysis time in milliseconds
    pub processing_time_ms: f64,
    /// Reversed text file, relative to the output root
    pub reversed_text_file: String,
    /// Structurally reversed text file, relative to the output root
    pub reversed_words_intact_file: String,
    /// Metric key to value, in report order
    pub metrics: Map<String, Value>,
}

impl Report {
    /// Build a report, leaving the reversal strings out of the metrics
    pub fn from_analysis(analysis: &Analysis, source: SourceKind) -> Result<Self> {
        let mut metrics = match serde_json::to_value(&analysis.metrics)? {
            Value::Object(metrics) => metrics,
            other => anyhow::bail!("metrics serialized to a non-object value: {other}"),
        };
        metrics.shift_remove(REVERSED_TEXT_KEY);
        metrics.shift_remove(REVERSED_WORDS_INTACT_KEY);

        let name = &analysis.identifier;
        Ok(Self {
            file_name: name.clone(),
            source,
            generated_at: chrono::Local::now().to_rfc3339(),
            processing_time_ms: analysis.stats.processing_time_ms,
            reversed_text_file: format!("{REVERSED_DIR}/reversed_{name}"),
            reversed_words_intact_file: format!("{REVERSED_INTACT_DIR}/reversed_words_intact_{name}"),
            metrics,
        })
    }
}

/// File-system store of reports rooted at the output directory
#[derive(Debug, Clone)]
pub struct ReportStore {
    root: PathBuf,
    pretty: bool,
}

impl ReportStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            root: root.into(),
            pretty,
        }
    }

    /// Output root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the report for a document name
    pub fn report_path(&self, name: &str) -> PathBuf {
        let stem = Path::new(name)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| name.to_string());
        self.root
            .join(REPORTS_DIR)
            .join(format!("analysis_results_{stem}.json"))
    }

    /// Write the report and both reversal files
    ///
    /// Existing files for the same document name are overwritten.
    pub fn save(&self, analysis: &Analysis, source: SourceKind) -> Result<Report> {
        let report = Report::from_analysis(analysis, source)?;

        self.write(&report.reversed_text_file, &analysis.metrics.reversed_text)?;
        self.write(
            &report.reversed_words_intact_file,
            &analysis.metrics.reversed_words_intact,
        )?;

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)?
        } else {
            serde_json::to_string(&report)?
        };
        let path = self.report_path(&report.file_name);
        self.write_path(&path, &json)?;

        Ok(report)
    }

    /// Load the stored report for a document name
    pub fn load(&self, name: &str) -> Result<Report> {
        let path = self.report_path(name);
        if !path.exists() {
            return Err(CliError::ReportNotFound(name.to_string()).into());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read report: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse report: {}", path.display()))
    }

    fn write(&self, relative: &str, content: &str) -> Result<()> {
        self.write_path(&self.root.join(relative), content)
    }

    fn write_path(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))
    }
}
