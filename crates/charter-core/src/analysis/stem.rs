use crate::analysis::words;
use rust_stemmers::{Algorithm, Stemmer as SnowballStemmer};

/// Reduces a word to its stem
pub trait Stemmer {
    fn stem(&self, word: &str) -> String;
}

/// English Porter-family stemmer (Snowball English)
///
/// Input is lowercased before stemming.
pub struct PorterStemmer {
    inner: SnowballStemmer,
}

impl PorterStemmer {
    pub fn new() -> Self {
        Self {
            inner: SnowballStemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(&word.to_lowercase()).into_owned()
    }
}

/// Stem every word of a clause and rejoin with single spaces
pub fn stem_clause<S: Stemmer + ?Sized>(stemmer: &S, clause: &str) -> String {
    words(clause)
        .into_iter()
        .map(|word| stemmer.stem(word))
        .collect::<Vec<_>>()
        .join(" ")
}
