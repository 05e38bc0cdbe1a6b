//! Analyzer configuration and stop-word sets
//!
//! The stop-word set is built once and shared read-only by every segmenter.
//! The embedded English list is parsed from TOML on first access.

use crate::error::{Result, TextError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Default number of entries in every top-N metric
pub const DEFAULT_TOP_N: usize = 10;

static ENGLISH: OnceLock<Arc<StopWords>> = OnceLock::new();
const ENGLISH_TOML: &str = include_str!("../configs/stopwords/english.toml");

/// TOML schema of a stop-word file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopWordsConfig {
    pub metadata: StopWordsMetadata,
    pub stopwords: StopWordsList,
}

/// Stop-word file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopWordsMetadata {
    pub language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopWordsList {
    pub words: Vec<String>,
}

/// Read-only set of lower-cased stop words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    language: String,
    words: HashSet<String>,
}

impl StopWords {
    /// The embedded English stop-word list, shared across the process
    pub fn english() -> Arc<StopWords> {
        ENGLISH
            .get_or_init(|| {
                let stop_words = Self::from_toml_str(ENGLISH_TOML)
                    .expect("embedded English stop-word list is valid TOML");
                Arc::new(stop_words)
            })
            .clone()
    }

    /// A set that filters nothing
    pub fn empty() -> Self {
        Self {
            language: String::new(),
            words: HashSet::new(),
        }
    }

    /// Build a set from an explicit word list
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            language: language.into(),
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Parse a stop-word TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StopWordsConfig = toml::from_str(content)
            .map_err(|e| TextError::Config(format!("invalid stop-word file: {e}")))?;

        if config.metadata.language.trim().is_empty() {
            return Err(TextError::Config(
                "stop-word file must name its language".to_string(),
            ));
        }

        Ok(Self::from_words(
            config.metadata.language,
            config.stopwords.words,
        ))
    }

    /// Load a stop-word TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TextError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }

    /// Language this list was written for
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Configuration for a single analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Number of entries in each top-N metric
    pub top_n: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalyzerConfig {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: AnalyzerConfig,
}

impl ConfigBuilder {
    /// Set the size of top-N metrics
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.config.top_n = top_n;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AnalyzerConfig> {
        if self.config.top_n == 0 {
            return Err(TextError::Config("top_n must be at least 1".to_string()));
        }
        Ok(self.config)
    }
}
