//! Web resources as analysis sources
//!
//! A web resource is downloaded once, saved under the download directory
//! with the last segment of its URL as file name, and then analyzed like a
//! local file.

use reqwest::blocking::Client;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use textlens_core::source::url_file_name;
use textlens_core::{RawText, Result, TextError, TextSource};

use crate::error::CliError;

/// Directory under the output root receiving downloaded resources
pub const DOWNLOAD_DIR: &str = "text_files";

/// Shared HTTP client plus the download location
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
    download_dir: PathBuf,
}

impl WebFetcher {
    /// Create a fetcher saving downloads under `<output_root>/text_files`
    pub fn new(output_root: &Path, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| CliError::FetchError(e.to_string()))?;

        Ok(Self {
            client,
            download_dir: output_root.join(DOWNLOAD_DIR),
        })
    }

    /// Directory downloads are written to
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Source for one URL
    pub fn source(&self, url: &str) -> Result<WebSource> {
        let name = url_file_name(url).ok_or_else(|| TextError::unsupported(url))?;
        Ok(WebSource {
            url: url.to_string(),
            name: name.to_string(),
            fetcher: self.clone(),
        })
    }
}

/// A `.txt` resource reachable over HTTP(S)
#[derive(Debug, Clone)]
pub struct WebSource {
    url: String,
    name: String,
    fetcher: WebFetcher,
}

impl WebSource {
    /// URL of the resource
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Local path the resource is saved to
    pub fn local_path(&self) -> PathBuf {
        self.fetcher.download_dir.join(&self.name)
    }

    fn download(&self) -> std::result::Result<String, String> {
        let response = self
            .fetcher
            .client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|e| e.to_string())?;
        response.text().map_err(|e| e.to_string())
    }
}

impl TextSource for WebSource {
    fn identifier(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<RawText> {
        let text = self
            .download()
            .map_err(|reason| TextError::unavailable(&self.url, reason))?;

        let path = self.local_path();
        fs::create_dir_all(&self.fetcher.download_dir)
            .and_then(|_| fs::write(&path, &text))
            .map_err(|e| TextError::unavailable(&self.url, format!("cannot save {}: {e}", path.display())))?;

        Ok(RawText::new(self.name.clone(), text))
    }
}
