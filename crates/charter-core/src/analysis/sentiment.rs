use crate::analysis::lexicon::{INTENSIFIERS, NEGATIONS, SENTIMENT_WORDS};
use crate::analysis::words;
use crate::error::{CharterError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// Factor applied to polarity after a negation ("not good" is mildly bad)
const NEGATION_FACTOR: f64 = -0.5;

/// Polarity in [-1, 1] and subjectivity in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Scores the sentiment of a piece of text
///
/// Implementations must be deterministic: identical text yields identical
/// scores.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Sentiment;
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct LexiconEntry {
    polarity: f64,
    subjectivity: f64,
}

/// Lexicon-averaging sentiment scorer
///
/// Every word found in the lexicon contributes its polarity and subjectivity;
/// the result is the mean over contributing words. An intensifier directly
/// before a word scales it, a negation directly before it (or before its
/// intensifier) multiplies its polarity by -0.5. Text without lexicon words
/// scores `(0.0, 0.0)`.
///
/// # Coverage
///
/// The built-in table holds well under a hundred evaluative words. Most
/// constitutional clauses are procedural ("The Senate shall choose its
/// officers") and contain none of them, so with the built-in table alone the
/// bulk of a clause table scores `(0.0, 0.0)`. Load a full adjective lexicon
/// with [`LexiconSentiment::extend_from_file`] (or the `sentiment_lexicon`
/// config key) when the sentiment columns need real signal, or supply another
/// [`SentimentScorer`].
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    entries: HashMap<String, LexiconEntry>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl LexiconSentiment {
    /// Scorer backed by the built-in lexicon
    pub fn new() -> Self {
        Self {
            entries: SENTIMENT_WORDS
                .iter()
                .map(|&(word, polarity, subjectivity)| {
                    (word.to_string(), LexiconEntry { polarity, subjectivity })
                })
                .collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|&(word, factor)| (word.to_string(), factor))
                .collect(),
            negations: NEGATIONS.iter().map(|word| word.to_string()).collect(),
        }
    }

    /// Add or replace a lexicon entry
    pub fn with_entry(mut self, word: &str, polarity: f64, subjectivity: f64) -> Self {
        self.entries.insert(
            word.to_lowercase(),
            LexiconEntry {
                polarity,
                subjectivity,
            },
        );
        self
    }

    /// Merge entries from a JSON object mapping words to
    /// `[polarity, subjectivity]`, e.g. `{"inviolable": [0.5, 0.5]}`
    ///
    /// Loaded entries replace built-in ones with the same word.
    ///
    /// # Errors
    ///
    /// `Serialization` if the body is not such an object, `Config` if a score
    /// lies outside its range.
    pub fn extend_from_json(mut self, body: &str) -> Result<Self> {
        let loaded: HashMap<String, (f64, f64)> = serde_json::from_str(body)
            .map_err(|e| CharterError::Serialization(format!("sentiment lexicon: {}", e)))?;

        for (word, (polarity, subjectivity)) in loaded {
            if !(-1.0..=1.0).contains(&polarity) || !(0.0..=1.0).contains(&subjectivity) {
                return Err(CharterError::Config(format!(
                    "sentiment lexicon entry {:?} out of range: ({}, {})",
                    word, polarity, subjectivity
                )));
            }
            self = self.with_entry(&word, polarity, subjectivity);
        }

        Ok(self)
    }

    /// [`LexiconSentiment::extend_from_json`] with the contents of a file
    pub fn extend_from_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let body = fs::read_to_string(path.as_ref())?;
        let scorer = self.extend_from_json(&body)?;
        info!(
            "Loaded sentiment lexicon from {} ({} words)",
            path.as_ref().display(),
            scorer.len()
        );
        Ok(scorer)
    }

    /// Number of words carrying a score
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word) || word.ends_with("n't")
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for LexiconSentiment {
    fn score(&self, text: &str) -> Sentiment {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut scored = 0usize;

        let mut negated = false;
        let mut intensity = 1.0;

        for word in words(text) {
            let word = word.to_lowercase();

            if let Some(entry) = self.entries.get(&word) {
                let mut polarity = entry.polarity * intensity;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                polarity_sum += polarity;
                subjectivity_sum += (entry.subjectivity * intensity).min(1.0);
                scored += 1;
                negated = false;
                intensity = 1.0;
            } else if let Some(factor) = self.intensifiers.get(&word) {
                intensity *= factor;
            } else if self.is_negation(&word) {
                negated = true;
                intensity = 1.0;
            } else {
                negated = false;
                intensity = 1.0;
            }
        }

        if scored == 0 {
            return Sentiment::default();
        }

        let n = scored as f64;
        Sentiment {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        }
    }
}
