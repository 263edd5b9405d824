//! Search module - topic-model term reporting and cross-document clause similarity
//!
//! This module provides:
//! - Top-term reporting for an externally fitted topic model
//! - Cosine similarity over per-clause topic vectors
//! - Most-similar clause lookup restricted to other documents

pub mod similarity;
pub mod topics;

pub use similarity::{
    cosine_similarity, most_similar_clause, print_similar_clause, read_topic_vectors,
    report_similar_clause, SimilarClause,
};
pub use topics::{print_top_terms, top_terms, write_top_terms, TopicModel, TopicTerms};
