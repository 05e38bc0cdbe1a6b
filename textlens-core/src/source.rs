//! Text sources and raw document content
//!
//! A [`TextSource`] is anything that can materialize a document as a
//! [`RawText`]. Acquisition failures surface as
//! [`TextError::SourceUnavailable`]; identifiers that do not look like a
//! supported source surface as [`TextError::UnsupportedSource`].

use crate::error::{Result, TextError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension every accepted source must carry
pub const TEXT_EXTENSION: &str = ".txt";

/// Original document content plus the name it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawText {
    identifier: String,
    text: String,
}

impl RawText {
    /// Create a raw text from an identifier and its content
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }

    /// File name or URL-derived name of the document
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Full document content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Size of the content in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the document has no content at all
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Provider of document content
pub trait TextSource {
    /// Name used in reports and log records
    fn identifier(&self) -> &str;

    /// Materialize the document
    fn load(&self) -> Result<RawText>;
}

impl TextSource for RawText {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn load(&self) -> Result<RawText> {
        Ok(self.clone())
    }
}

/// Where a source identifier points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// A `.txt` file on the local file system
    LocalFile,
    /// A `.txt` resource reachable over HTTP(S)
    WebResource,
}

impl SourceKind {
    /// Classify an identifier, rejecting anything that is not a `.txt` file or URL
    pub fn classify(identifier: &str) -> Result<Self> {
        let trimmed = identifier.trim();
        let lowered = trimmed.to_ascii_lowercase();

        if lowered.starts_with("http://") || lowered.starts_with("https://") {
            let path = strip_query(&lowered);
            let has_host = path
                .split_once("://")
                .map(|(_, rest)| rest.split('/').next().is_some_and(|host| !host.is_empty()))
                .unwrap_or(false);
            if has_host && path.ends_with(TEXT_EXTENSION) {
                return Ok(SourceKind::WebResource);
            }
            return Err(TextError::unsupported(identifier));
        }

        let is_named_file = Path::new(trimmed)
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.len() > TEXT_EXTENSION.len());
        if lowered.ends_with(TEXT_EXTENSION) && is_named_file {
            Ok(SourceKind::LocalFile)
        } else {
            Err(TextError::unsupported(identifier))
        }
    }

    /// Human readable label used in log records
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::LocalFile => "local file",
            SourceKind::WebResource => "web resource",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn strip_query(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Last path segment of a URL, used as the local name of a downloaded resource
pub fn url_file_name(url: &str) -> Option<&str> {
    strip_query(url)
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty() && !segment.contains("://"))
}

/// In-memory and local inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text already in memory
    Text {
        /// Name of the document
        identifier: String,
        /// Document content
        text: String,
    },
    /// Local file path; the file name is the document name
    File(PathBuf),
}

impl Input {
    /// Create input from text
    pub fn from_text(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Input::Text {
            identifier: identifier.into(),
            text: text.into(),
        }
    }

    /// Create input from a file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }
}

impl TextSource for Input {
    fn identifier(&self) -> &str {
        match self {
            Input::Text { identifier, .. } => identifier,
            Input::File(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or_default(),
        }
    }

    fn load(&self) -> Result<RawText> {
        let identifier = self.identifier().to_string();
        match self {
            Input::Text { text, .. } => Ok(RawText::new(identifier, text.clone())),
            Input::File(path) => fs::read_to_string(path)
                .map(|text| RawText::new(identifier, text))
                .map_err(|e| TextError::unavailable(path.display().to_string(), e)),
        }
    }
}
