//! End-to-end scrape: catalog, documents, clauses, clause table
//!
//! Stages run strictly in sequence and the first error aborts the run.

use crate::analysis::{LexiconSentiment, PorterStemmer, SentimentScorer, Stemmer};
use crate::config::CharterConfig;
use crate::error::Result;
use crate::extract::ClauseExtractor;
use crate::fetch::{fetch_catalog, fetch_documents, HttpTransport, Transport};
use crate::table::{build_clause_table, ClauseTable};
use tracing::info;

/// Scraping pipeline with pluggable transport, sentiment scorer and stemmer
pub struct Pipeline<T, S = LexiconSentiment, M = PorterStemmer> {
    config: CharterConfig,
    transport: T,
    scorer: S,
    stemmer: M,
    limit: Option<usize>,
}

impl Pipeline<HttpTransport> {
    /// Pipeline over live HTTP with the default stemmer
    ///
    /// The scorer is the built-in lexicon, extended from
    /// `config.sentiment_lexicon` when set.
    pub fn from_config(config: CharterConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        let scorer = match &config.sentiment_lexicon {
            Some(path) => LexiconSentiment::new().extend_from_file(path)?,
            None => LexiconSentiment::new(),
        };
        Ok(Self::with_transport(config, transport).with_scorer(scorer))
    }
}

impl<T: Transport> Pipeline<T> {
    pub fn with_transport(config: CharterConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            scorer: LexiconSentiment::new(),
            stemmer: PorterStemmer::new(),
            limit: None,
        }
    }
}

impl<T, S, M> Pipeline<T, S, M>
where
    T: Transport,
    S: SentimentScorer,
    M: Stemmer,
{
    pub fn with_scorer<S2: SentimentScorer>(self, scorer: S2) -> Pipeline<T, S2, M> {
        Pipeline {
            config: self.config,
            transport: self.transport,
            scorer,
            stemmer: self.stemmer,
            limit: self.limit,
        }
    }

    pub fn with_stemmer<M2: Stemmer>(self, stemmer: M2) -> Pipeline<T, S, M2> {
        Pipeline {
            config: self.config,
            transport: self.transport,
            scorer: self.scorer,
            stemmer,
            limit: self.limit,
        }
    }

    /// Only fetch the first `limit` catalog documents
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn config(&self) -> &CharterConfig {
        &self.config
    }

    /// Run every stage and return the clause table
    pub fn run(&self) -> Result<ClauseTable> {
        let mut catalog = fetch_catalog(&self.transport, &self.config)?;
        if let Some(limit) = self.limit {
            catalog.truncate(limit);
            info!("Limiting run to {} documents", catalog.len());
        }

        let texts = fetch_documents(&self.transport, &self.config, &catalog.ids)?;
        let clauses = ClauseExtractor::new(&self.config).extract_documents(&texts)?;
        build_clause_table(&clauses, &catalog.metadata, &self.scorer, &self.stemmer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CharterError;

    #[test]
    fn test_from_config_reports_missing_lexicon() {
        let config = CharterConfig {
            sentiment_lexicon: Some("/nonexistent/lexicon.json".into()),
            ..CharterConfig::default()
        };
        assert!(matches!(
            Pipeline::from_config(config),
            Err(CharterError::Io(_))
        ));
    }
}
