//! Top-term reporting for a fitted topic model
//!
//! A topic model is exposed as one term-weight vector per topic (`components`)
//! and a vocabulary whose positions line up with the weight positions. The
//! model itself is fitted outside this crate and loaded from JSON:
//!
//! ```json
//! { "components": [[0.1, 0.9, 0.3]], "vocabulary": ["a", "b", "c"] }
//! ```

use crate::error::{CharterError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Fitted topic model: per-topic term weights plus the shared vocabulary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicModel {
    pub components: Vec<Vec<f64>>,
    pub vocabulary: Vec<String>,
}

/// Highest-weighted terms of one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicTerms {
    /// 1-based topic number
    pub topic: usize,
    pub terms: Vec<String>,
}

impl TopicModel {
    pub fn new(components: Vec<Vec<f64>>, vocabulary: Vec<String>) -> Result<Self> {
        check_dimensions(&components, &vocabulary)?;
        Ok(Self {
            components,
            vocabulary,
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let model: Self =
            serde_json::from_str(s).map_err(|e| CharterError::Serialization(e.to_string()))?;
        check_dimensions(&model.components, &model.vocabulary)?;
        Ok(model)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn top_terms(&self, n: usize) -> Result<Vec<TopicTerms>> {
        top_terms(&self.components, &self.vocabulary, n)
    }
}

fn check_dimensions(components: &[Vec<f64>], vocabulary: &[String]) -> Result<()> {
    match components.iter().find(|c| c.len() != vocabulary.len()) {
        Some(component) => Err(CharterError::DimensionMismatch {
            expected: vocabulary.len(),
            found: component.len(),
        }),
        None => Ok(()),
    }
}

/// The `n` highest-weighted terms of every topic, heaviest first
///
/// Equal weights keep vocabulary order. NaN weights rank below every number.
/// If `n` exceeds the vocabulary size every term is returned.
pub fn top_terms(
    components: &[Vec<f64>],
    vocabulary: &[String],
    n: usize,
) -> Result<Vec<TopicTerms>> {
    check_dimensions(components, vocabulary)?;

    Ok(components
        .iter()
        .enumerate()
        .map(|(index, weights)| {
            let mut order: Vec<usize> = (0..weights.len()).collect();
            // Stable sort, so ties stay in vocabulary order
            order.sort_by(|&a, &b| rank_key(weights[b]).total_cmp(&rank_key(weights[a])));

            TopicTerms {
                topic: index + 1,
                terms: order
                    .into_iter()
                    .take(n)
                    .map(|term| vocabulary[term].clone())
                    .collect(),
            }
        })
        .collect())
}

fn rank_key(weight: f64) -> f64 {
    if weight.is_nan() {
        f64::NEG_INFINITY
    } else {
        weight
    }
}

/// Write `Topic {i}:` followed by its top terms, one line each
pub fn write_top_terms<W: Write>(
    mut writer: W,
    components: &[Vec<f64>],
    vocabulary: &[String],
    n: usize,
) -> Result<()> {
    for topic in top_terms(components, vocabulary, n)? {
        writeln!(writer, "Topic {}:", topic.topic)?;
        writeln!(writer, "{}", topic.terms.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Print top terms of every topic to stdout
pub fn print_top_terms(components: &[Vec<f64>], vocabulary: &[String], n: usize) -> Result<()> {
    write_top_terms(io::stdout().lock(), components, vocabulary, n)
}
