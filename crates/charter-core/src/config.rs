//! Configuration for the scraping pipeline
//!
//! Handles the remote endpoints, the header/footer sentinel convention used to
//! trim scraped pages, and HTTP client settings.

use crate::document::DocumentId;
use crate::error::{CharterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CATALOG_URL: &str =
    "https://www.constituteproject.org/service/constitutions?lang=en";
pub const DEFAULT_DOCUMENT_URL: &str =
    "https://www.constituteproject.org/constitution/{id}?lang=en";
pub const DEFAULT_FOOTER_SENTINEL: &str = "About Constitute\u{a0}\u{a0}";
pub const DEFAULT_HEADER_SENTINEL: &str = "Try a new topic or search term.";

/// Placeholder substituted with the document id in `document_url`
const ID_PLACEHOLDER: &str = "{id}";

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharterConfig {
    /// Catalog endpoint returning the JSON list of documents
    pub catalog_url: String,
    /// Per-document URL template, must contain `{id}`
    pub document_url: String,
    /// First line of the page footer; clauses end before it
    pub footer_sentinel: String,
    /// Last line of the page header/navigation block
    pub header_sentinel: String,
    /// Lines skipped after the header sentinel (the sentinel itself included)
    pub header_skip: usize,
    /// Minimum whitespace-separated tokens for a line to count as a clause
    pub min_clause_words: usize,
    /// Request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
    /// Optional User-Agent header
    pub user_agent: Option<String>,
    /// JSON lexicon merged into the built-in sentiment table
    pub sentiment_lexicon: Option<PathBuf>,
}

impl Default for CharterConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            document_url: DEFAULT_DOCUMENT_URL.to_string(),
            footer_sentinel: DEFAULT_FOOTER_SENTINEL.to_string(),
            header_sentinel: DEFAULT_HEADER_SENTINEL.to_string(),
            header_skip: 2,
            min_clause_words: 5,
            timeout_secs: None,
            user_agent: None,
            sentiment_lexicon: None,
        }
    }
}

impl CharterConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables keep their defaults. Recognized variables:
    /// - CHARTER_CATALOG_URL: catalog endpoint
    /// - CHARTER_DOCUMENT_URL: per-document template containing `{id}`
    /// - CHARTER_TIMEOUT_SECS: request timeout in whole seconds
    /// - CHARTER_USER_AGENT: User-Agent header value
    /// - CHARTER_SENTIMENT_LEXICON: path of a JSON sentiment lexicon
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup("CHARTER_CATALOG_URL") {
            config.catalog_url = url;
        }
        if let Some(url) = lookup("CHARTER_DOCUMENT_URL") {
            config.document_url = url;
        }
        if let Some(secs) = lookup("CHARTER_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|_| {
                CharterError::Config(format!("CHARTER_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.timeout_secs = Some(secs);
        }
        if let Some(agent) = lookup("CHARTER_USER_AGENT") {
            config.user_agent = Some(agent);
        }
        if let Some(path) = lookup("CHARTER_SENTIMENT_LEXICON") {
            config.sentiment_lexicon = Some(PathBuf::from(path));
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string; omitted keys keep defaults
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| CharterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.document_url.contains(ID_PLACEHOLDER) {
            return Err(CharterError::Config(format!(
                "document_url must contain {}: {}",
                ID_PLACEHOLDER, self.document_url
            )));
        }
        if self.footer_sentinel.is_empty() || self.header_sentinel.is_empty() {
            return Err(CharterError::Config("sentinel lines must not be empty".to_string()));
        }
        Ok(())
    }

    /// Build the retrieval URL for one document
    pub fn document_url_for(&self, id: &DocumentId) -> String {
        self.document_url.replace(ID_PLACEHOLDER, id.as_str())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
