//! Charter Core - scraping and clause-level analysis of constitutional texts
//!
//! This crate provides:
//! - Catalog and document retrieval over blocking HTTP
//! - Clause extraction using the page header/footer sentinel convention
//! - Clause table construction with stems and sentiment scores
//! - Topic-model term reporting and cross-document clause similarity
//! - Configuration management

pub mod analysis;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod search;
pub mod table;

// Re-export commonly used types
pub use analysis::{LexiconSentiment, PorterStemmer, Sentiment, SentimentScorer, Stemmer};
pub use config::CharterConfig;
pub use document::{DocumentId, DocumentMetadata};
pub use error::{CharterError, Result};
pub use extract::{extract_clauses, ClauseExtractor};
pub use fetch::{Catalog, DocumentTexts, HttpTransport, Transport};
pub use pipeline::Pipeline;
pub use search::{most_similar_clause, top_terms, SimilarClause, TopicModel, TopicTerms};
pub use table::{build_clause_table, ClauseRecord, ClauseTable, DocumentClauses};
