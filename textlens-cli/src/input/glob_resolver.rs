//! Resolution of command-line inputs to analysis sources
//!
//! An input is either a URL, a glob pattern, or a plain local path. Every
//! resolved source must pass the `.txt` shape check; inputs that fail it are
//! returned separately so the caller can report them without aborting the
//! batch.

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::collections::HashSet;
use std::fmt::Display;
use std::path::PathBuf;
use textlens_core::{SourceKind, TextError};

/// A source that passed the shape check
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceSpec {
    /// Local `.txt` file
    Local(PathBuf),
    /// `.txt` resource on the web
    Web(String),
}

impl SourceSpec {
    /// Kind of the source
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceSpec::Local(_) => SourceKind::LocalFile,
            SourceSpec::Web(_) => SourceKind::WebResource,
        }
    }

    /// Name shown in logs
    pub fn display_name(&self) -> String {
        match self {
            SourceSpec::Local(path) => path.display().to_string(),
            SourceSpec::Web(url) => url.clone(),
        }
    }
}

/// Sources found for a set of inputs
#[derive(Debug, Default)]
pub struct ResolvedSources {
    /// Accepted sources, in input order without duplicates
    pub sources: Vec<SourceSpec>,
    /// Inputs rejected by the shape check, and glob entries that could not be read
    pub rejected: Vec<TextError>,
    /// Glob patterns that matched no file
    pub unmatched: Vec<String>,
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Resolve inputs to sources
///
/// Fails only on malformed glob patterns or when nothing at all was found.
pub fn resolve_sources(inputs: &[String]) -> Result<ResolvedSources> {
    let mut resolved = ResolvedSources::default();
    let mut seen = HashSet::new();

    for input in inputs {
        let kind = match SourceKind::classify(input) {
            Ok(kind) => Some(kind),
            Err(_) if is_glob_pattern(input) => None,
            Err(error) => {
                resolved.rejected.push(error);
                continue;
            }
        };

        let specs = match kind {
            Some(SourceKind::WebResource) => vec![SourceSpec::Web(input.trim().to_string())],
            Some(SourceKind::LocalFile) if !is_glob_pattern(input) => {
                vec![SourceSpec::Local(PathBuf::from(input.trim()))]
            }
            _ => {
                let specs = expand_pattern(input, &mut resolved.rejected)?;
                if specs.is_empty() {
                    log::warn!("Pattern '{}' did not match any .txt file", input);
                    resolved.unmatched.push(input.clone());
                }
                specs
            }
        };

        for spec in specs {
            if seen.insert(spec.clone()) {
                resolved.sources.push(spec);
            }
        }
    }

    if resolved.sources.is_empty() && resolved.rejected.is_empty() {
        anyhow::bail!("No sources found matching the provided inputs");
    }

    Ok(resolved)
}

fn expand_pattern(pattern: &str, rejected: &mut Vec<TextError>) -> Result<Vec<SourceSpec>> {
    let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.to_string()))?;
    Ok(collect_matches(pattern, paths, rejected))
}

/// Keep the `.txt` files among glob matches, sorted
///
/// Entries that cannot be read and files of other types are pushed to
/// `rejected`; the rest of the walk continues.
fn collect_matches<I, E>(pattern: &str, entries: I, rejected: &mut Vec<TextError>) -> Vec<SourceSpec>
where
    I: IntoIterator<Item = std::result::Result<PathBuf, E>>,
    E: Display,
{
    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(error) => {
                rejected.push(TextError::unavailable(pattern, error));
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }

        let display = path.display().to_string();
        match SourceKind::classify(&display) {
            Ok(_) => files.push(path),
            Err(error) => rejected.push(error),
        }
    }

    files.sort();
    files.into_iter().map(SourceSpec::Local).collect()
}
