//! Text statistics engine
//!
//! This crate turns plain-text documents into descriptive statistics: counts,
//! frequency tables, longest and shortest words and sentences, palindromes and
//! reversal transforms.
//!
//! # Architecture
//!
//! The pipeline runs strictly one way:
//! - **Source**: a [`TextSource`] materializes a document as [`RawText`]
//! - **Segmenter**: [`Segmenter`] derives an immutable [`SegmentedText`]
//! - **Metrics engine**: [`metrics::analyze`] computes a [`TextMetrics`] record
//!
//! Nothing is shared mutably between documents; the stop-word set is built
//! once and passed by reference.
//!
//! # Example
//!
//! ```rust
//! use textlens_core::TextAnalyzer;
//!
//! let analyzer = TextAnalyzer::new();
//! let analysis = analyzer.analyze_text("palindromes.txt", "Madam Anna sees a deed.");
//!
//! assert_eq!(analysis.metrics.words, 4);
//! assert!(analysis.metrics.is_all_words_palindromes);
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod segmenter;
pub mod source;

pub use config::{AnalyzerConfig, ConfigBuilder, StopWords, DEFAULT_TOP_N};
pub use error::{Result, TextError};
pub use metrics::{analyze, RankedTable, TextMetrics, METRICS};
pub use segmenter::{Paragraph, SegmentedText, Segmenter, Sentence};
pub use source::{Input, RawText, SourceKind, TextSource};

use std::sync::Arc;
use std::time::Instant;

/// Runtime statistics of one analysis
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ProcessingStats {
    /// Size of the document in bytes
    pub bytes_processed: usize,
    /// Wall-clock time of segmentation plus metrics, in milliseconds
    pub processing_time_ms: f64,
}

/// Result of analyzing one document
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Name of the analyzed document
    pub identifier: String,
    /// Computed statistics
    pub metrics: TextMetrics,
    /// Runtime statistics
    pub stats: ProcessingStats,
}

/// Entry point tying configuration, segmentation and metrics together
///
/// Cheap to clone; clones share the stop-word set.
#[derive(Debug, Clone)]
pub struct TextAnalyzer {
    config: AnalyzerConfig,
    stop_words: Arc<StopWords>,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextAnalyzer {
    /// Analyzer with default configuration and the English stop words
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default(), StopWords::english())
    }

    /// Analyzer with explicit configuration and stop words
    pub fn with_config(config: AnalyzerConfig, stop_words: Arc<StopWords>) -> Self {
        Self { config, stop_words }
    }

    /// Current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Stop words used by the segmenter
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Segment a document without computing metrics
    pub fn segment(&self, raw: &RawText) -> SegmentedText {
        Segmenter::new(&self.stop_words).segment(raw)
    }

    /// Load and analyze a document
    ///
    /// Fails only when the source cannot be loaded; the analysis itself
    /// never fails.
    pub fn analyze_source(&self, source: &dyn TextSource) -> Result<Analysis> {
        let raw = source.load()?;
        Ok(self.analyze_raw(&raw))
    }

    /// Analyze an already loaded document
    pub fn analyze_raw(&self, raw: &RawText) -> Analysis {
        let start = Instant::now();

        let segmented = self.segment(raw);
        let metrics = analyze(&segmented, self.config.top_n);

        Analysis {
            identifier: raw.identifier().to_string(),
            metrics,
            stats: ProcessingStats {
                bytes_processed: raw.len(),
                processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            },
        }
    }

    /// Analyze text directly (convenience method)
    pub fn analyze_text(&self, identifier: &str, text: &str) -> Analysis {
        self.analyze_raw(&RawText::new(identifier, text))
    }
}
