//! Analyze command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use textlens_core::metrics::metric_title;
use textlens_core::{AnalyzerConfig, Input, StopWords, TextAnalyzer, TextSource};

use super::{document_tag, init_logging};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_sources, SourceSpec, WebFetcher};
use crate::output::{JsonFormatter, OutputFormatter, Report, ReportStore, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Local `.txt` files, glob patterns or `.txt` URLs
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Root directory for reports, reversed texts and downloads
    #[arg(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of entries in every top-N metric
    #[arg(short = 'n', long, value_name = "N")]
    pub top_n: Option<usize>,

    /// Number of worker threads (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Console output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Stop-word list in TOML format (default: embedded English list)
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported console output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `title: value` line per metric
    Text,
    /// JSON array of reports
    Json,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true).map_err(|_| {
            CliError::ConfigError(format!("unknown output format '{name}' (expected text or json)"))
                .into()
        })
    }

    /// Formatter writing to stdout
    pub fn stdout_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(std::io::stdout())),
        }
    }
}

/// Effective settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeSettings {
    pub top_n: usize,
    pub stopwords_file: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub pretty_json: bool,
    pub worker_threads: usize,
    pub fetch_timeout_secs: u64,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting text analysis");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = self.settings(config)?;
        let analyzer = build_analyzer(&settings)?;

        let resolved = resolve_sources(&self.sources)?;
        for error in &resolved.rejected {
            log::error!("{}", error);
        }
        if resolved.sources.is_empty() {
            anyhow::bail!("No supported sources to analyze");
        }

        let fetcher = WebFetcher::new(&settings.output_dir, settings.fetch_timeout_secs)?;
        let store = ReportStore::new(&settings.output_dir, settings.pretty_json);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(settings.worker_threads)
            .build()
            .context("Failed to create worker pool")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(resolved.sources.len() as u64);

        let start = Instant::now();
        let job = DocumentJob {
            analyzer: &analyzer,
            fetcher: &fetcher,
            store: &store,
            progress: &progress,
        };
        let results: Vec<Option<Report>> =
            pool.install(|| resolved.sources.par_iter().map(|spec| job.run(spec)).collect());
        progress.finish();

        let total = resolved.sources.len() + resolved.rejected.len();
        let reports: Vec<Report> = results.into_iter().flatten().collect();
        log::info!(
            "Analyzed {} of {} documents in {} ms",
            reports.len(),
            total,
            start.elapsed().as_millis()
        );

        let mut formatter = settings.format.stdout_formatter();
        for report in &reports {
            formatter.format_report(report)?;
        }
        formatter.finish()?;

        if reports.is_empty() {
            anyhow::bail!("All {} documents failed to be analyzed", total);
        }
        Ok(())
    }

    /// Merge configuration file values with command-line flags
    pub fn settings(&self, config: CliConfig) -> Result<AnalyzeSettings> {
        let top_n = self.top_n.unwrap_or(config.analysis.top_n);
        if top_n == 0 {
            return Err(CliError::ConfigError("top-n must be at least 1".to_string()).into());
        }

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.format)?,
        };

        let worker_threads = match self.threads.unwrap_or(config.performance.worker_threads) {
            0 => num_cpus::get(),
            n => n,
        };

        Ok(AnalyzeSettings {
            top_n,
            stopwords_file: self.stopwords.clone().or(config.analysis.stopwords_file),
            output_dir: self.output_dir.clone().unwrap_or(config.output.directory),
            format,
            pretty_json: config.output.pretty_json,
            worker_threads,
            fetch_timeout_secs: config.performance.fetch_timeout_secs,
        })
    }
}

fn build_analyzer(settings: &AnalyzeSettings) -> Result<TextAnalyzer> {
    let stop_words = match &settings.stopwords_file {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            let stop_words = StopWords::from_file(path)
                .with_context(|| format!("Failed to load stop words: {}", path.display()))?;
            log::info!(
                "Loaded {} stop words for '{}'",
                stop_words.len(),
                stop_words.language()
            );
            Arc::new(stop_words)
        }
        None => StopWords::english(),
    };

    let config = AnalyzerConfig::builder().top_n(settings.top_n).build()?;
    Ok(TextAnalyzer::with_config(config, stop_words))
}

/// Everything a worker needs to take one document from source to report
struct DocumentJob<'a> {
    analyzer: &'a TextAnalyzer,
    fetcher: &'a WebFetcher,
    store: &'a ReportStore,
    progress: &'a ProgressReporter,
}

impl DocumentJob<'_> {
    fn run(&self, spec: &SourceSpec) -> Option<Report> {
        let report = self.analyze(spec);
        self.progress.document_completed(&spec.display_name());
        report
    }

    fn analyze(&self, spec: &SourceSpec) -> Option<Report> {
        let kind = spec.kind();
        let source: Box<dyn TextSource> = match spec {
            SourceSpec::Local(path) => Box::new(Input::from_file(path.clone())),
            SourceSpec::Web(url) => match self.fetcher.source(url) {
                Ok(source) => Box::new(source),
                Err(e) => {
                    log::error!("{} {}", document_tag(kind, url), e);
                    return None;
                }
            },
        };

        let tag = document_tag(kind, source.identifier());
        log::info!("{} Generating report", tag);

        let analysis = match self.analyzer.analyze_source(source.as_ref()) {
            Ok(analysis) => analysis,
            Err(e) => {
                log::error!("{} {}", tag, e);
                return None;
            }
        };

        let report = match self.store.save(&analysis, kind) {
            Ok(report) => report,
            Err(e) => {
                log::error!("{} Failed to store report: {:#}", tag, e);
                return None;
            }
        };

        for (key, value) in &report.metrics {
            log::debug!("{} {}: {}", tag, metric_title(key).unwrap_or(key.as_str()), value);
        }
        log::info!(
            "{} Report saved to {}",
            tag,
            self.store.report_path(&report.file_name).display()
        );
        log::info!("{} Processing time: {:.3} ms", tag, analysis.stats.processing_time_ms);

        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(sources: &[&str]) -> AnalyzeArgs {
        AnalyzeArgs {
            sources: sources.iter().map(|s| s.to_string()).collect(),
            config: None,
            output_dir: None,
            top_n: None,
            threads: None,
            format: None,
            stopwords: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_settings_from_defaults() {
        let settings = args(&["a.txt"]).settings(CliConfig::default()).unwrap();

        assert_eq!(settings.top_n, 10);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert_eq!(settings.worker_threads, num_cpus::get());
        assert!(settings.stopwords_file.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let config = CliConfig::from_toml_str(
            "[analysis]\ntop_n = 3\n[output]\nformat = \"json\"\ndirectory = \"cfg\"\n[performance]\nworker_threads = 2\n",
        )
        .unwrap();

        let mut cli = args(&["a.txt"]);
        cli.top_n = Some(5);
        cli.format = Some(OutputFormat::Text);
        cli.output_dir = Some(PathBuf::from("flag"));
        cli.threads = Some(1);

        let settings = cli.settings(config).unwrap();
        assert_eq!(settings.top_n, 5);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.output_dir, PathBuf::from("flag"));
        assert_eq!(settings.worker_threads, 1);
    }

    #[test]
    fn test_config_values_used_without_flags() {
        let config = CliConfig::from_toml_str("[output]\nformat = \"JSON\"\n[performance]\nworker_threads = 2\n")
            .unwrap();
        let settings = args(&["a.txt"]).settings(config).unwrap();
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.worker_threads, 2);
    }

    #[test]
    fn test_invalid_settings() {
        let mut cli = args(&["a.txt"]);
        cli.top_n = Some(0);
        assert!(cli.settings(CliConfig::default()).is_err());

        let config = CliConfig::from_toml_str("[output]\nformat = \"yaml\"\n").unwrap();
        let error = args(&["a.txt"]).settings(config).unwrap_err();
        assert!(error.to_string().contains("unknown output format"));
    }

    #[test]
    fn test_build_analyzer_with_missing_stopwords_file() {
        let mut settings = args(&["a.txt"]).settings(CliConfig::default()).unwrap();
        settings.stopwords_file = Some(PathBuf::from("/nonexistent/stop.toml"));

        let error = build_analyzer(&settings).unwrap_err();
        assert!(error.to_string().contains("File not found"));
    }

    #[test]
    fn test_build_analyzer_defaults_to_english() {
        let settings = args(&["a.txt"]).settings(CliConfig::default()).unwrap();
        let analyzer = build_analyzer(&settings).unwrap();
        assert_eq!(analyzer.stop_words().language(), "english");
        assert_eq!(analyzer.config().top_n, 10);
    }
}
