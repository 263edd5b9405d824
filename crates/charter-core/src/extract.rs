//! Clause extraction from scraped page text
//!
//! Scraped pages carry a navigation header and an "About" footer around the
//! constitutional text. Both are located by exact sentinel lines:
//!
//! ```text
//! ... navigation ...
//! Try a new topic or search term.   <- header sentinel
//! <one more header line>            <- skipped (header_skip = 2)
//! Article 1. ...                    <- first candidate clause
//! ...
//! About Constitute\u{a0}\u{a0}      <- footer sentinel, excluded
//! ... footer ...
//! ```
//!
//! A clause that happens to equal a sentinel verbatim will truncate the text
//! at the wrong place; the convention offers no way to tell them apart.

use crate::config::CharterConfig;
use crate::error::{CharterError, Result};
use crate::fetch::DocumentTexts;
use crate::table::DocumentClauses;
use tracing::{debug, warn};

/// Lines treated as blank. Only these exact strings are dropped; other
/// whitespace-only lines (tabs, three spaces) are kept.
const BLANK_LINES: [&str; 3] = ["", " ", "  "];

/// Clause extraction policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseExtractor {
    footer_sentinel: String,
    header_sentinel: String,
    header_skip: usize,
    min_words: usize,
}

impl ClauseExtractor {
    pub fn new(config: &CharterConfig) -> Self {
        Self {
            footer_sentinel: config.footer_sentinel.clone(),
            header_sentinel: config.header_sentinel.clone(),
            header_skip: config.header_skip,
            min_words: config.min_clause_words,
        }
    }

    /// Segment one document's text into ordered clauses
    ///
    /// # Errors
    ///
    /// Returns `MissingSentinel` if the footer sentinel is absent, or if the
    /// header sentinel is absent from the text preceding the footer.
    pub fn extract(&self, text: &str) -> Result<Vec<String>> {
        let lines: Vec<&str> = text
            .lines()
            .filter(|line| !BLANK_LINES.contains(line))
            .collect();

        let footer = lines
            .iter()
            .position(|line| *line == self.footer_sentinel)
            .ok_or_else(|| CharterError::MissingSentinel(self.footer_sentinel.clone()))?;
        let body = &lines[..footer];

        let header = body
            .iter()
            .position(|line| *line == self.header_sentinel)
            .ok_or_else(|| CharterError::MissingSentinel(self.header_sentinel.clone()))?;
        let body = body.get(header + self.header_skip..).unwrap_or_default();

        Ok(body
            .iter()
            .filter(|line| word_count(line) >= self.min_words)
            .map(|line| line.to_string())
            .collect())
    }

    /// Extract clauses from every document, keeping document order
    ///
    /// Stops at the first document whose sentinels are missing.
    pub fn extract_documents(&self, texts: &DocumentTexts) -> Result<DocumentClauses> {
        let mut clauses = DocumentClauses::with_capacity(texts.len());
        for (id, text) in texts {
            let extracted = match self.extract(text) {
                Ok(extracted) => extracted,
                Err(e) => {
                    warn!(%id, "clause extraction failed: {}", e);
                    return Err(e);
                }
            };
            debug!(%id, clauses = extracted.len(), "extracted clauses");
            clauses.insert(id.clone(), extracted);
        }
        Ok(clauses)
    }
}

impl Default for ClauseExtractor {
    fn default() -> Self {
        Self::new(&CharterConfig::default())
    }
}

fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

/// Extract clauses using the default sentinel convention
pub fn extract_clauses(text: &str) -> Result<Vec<String>> {
    ClauseExtractor::default().extract(text)
}
