//! Per-clause text analysis - word tokenization, stemming and sentiment
//!
//! Stemming and sentiment scoring sit behind the `Stemmer` and
//! `SentimentScorer` traits so a caller can plug in another model; the
//! defaults are a Snowball English stemmer and a lexicon-based scorer.

pub mod lexicon;
pub mod sentiment;
pub mod stem;

pub use sentiment::{LexiconSentiment, Sentiment, SentimentScorer};
pub use stem::{stem_clause, PorterStemmer, Stemmer};

use unicode_segmentation::UnicodeSegmentation;

/// Split text into words, dropping punctuation and whitespace
pub fn words(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}
