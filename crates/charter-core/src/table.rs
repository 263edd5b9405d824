//! Clause-level record table
//!
//! One row per clause, ordered by document then by clause position. The table
//! is the hand-off point to external analysis (topic fitting happens outside
//! this crate) and can be written to and read from JSON Lines.

use crate::analysis::{stem_clause, SentimentScorer, Stemmer};
use crate::document::{DocumentId, DocumentMetadata};
use crate::error::{CharterError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Extracted clauses per document, in fetch order
pub type DocumentClauses = IndexMap<DocumentId, Vec<String>>;

/// One analysed clause
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseRecord {
    pub document_id: DocumentId,
    pub clause: String,
    pub stemmed_clause: String,
    pub polarity: f64,
    pub subjectivity: f64,
    pub year_enacted: Option<i32>,
    pub year_amended: Option<i32>,
}

/// Ordered collection of clause records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClauseTable {
    rows: Vec<ClauseRecord>,
}

impl ClauseTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: ClauseRecord) {
        self.rows.push(record);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ClauseRecord> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[ClauseRecord] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClauseRecord> {
        self.rows.iter()
    }

    /// Row indices belonging to one document, wherever they sit in the table
    pub fn document_rows<'a>(&'a self, id: &'a DocumentId) -> impl Iterator<Item = usize> + 'a {
        self.rows
            .iter()
            .enumerate()
            .filter(move |(_, row)| &row.document_id == id)
            .map(|(index, _)| index)
    }

    /// Write one JSON object per row
    pub fn write_jsonl<W: Write>(&self, mut writer: W) -> Result<()> {
        for row in &self.rows {
            serde_json::to_writer(&mut writer, row)
                .map_err(|e| CharterError::Serialization(e.to_string()))?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read rows written by [`ClauseTable::write_jsonl`]; blank lines are skipped
    pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = Self::new();
        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let row = serde_json::from_str(&line).map_err(|e| {
                CharterError::Serialization(format!("line {}: {}", number + 1, e))
            })?;
            table.push(row);
        }
        Ok(table)
    }
}

impl<'a> IntoIterator for &'a ClauseTable {
    type Item = &'a ClauseRecord;
    type IntoIter = std::slice::Iter<'a, ClauseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Build the flat clause table
///
/// Rows follow the iteration order of `clauses`, then clause order within each
/// document. Every row of a document carries that document's metadata.
///
/// # Errors
///
/// Returns `MissingMetadata` if a document in `clauses` has no metadata entry.
pub fn build_clause_table<S, T>(
    clauses: &DocumentClauses,
    metadata: &HashMap<DocumentId, DocumentMetadata>,
    scorer: &S,
    stemmer: &T,
) -> Result<ClauseTable>
where
    S: SentimentScorer + ?Sized,
    T: Stemmer + ?Sized,
{
    let mut table = ClauseTable::new();

    for (id, document_clauses) in clauses {
        let meta = metadata
            .get(id)
            .ok_or_else(|| CharterError::MissingMetadata(id.clone()))?;

        if document_clauses.is_empty() {
            warn!(%id, "document produced no clauses");
        }

        for clause in document_clauses {
            let sentiment = scorer.score(clause);
            table.push(ClauseRecord {
                document_id: id.clone(),
                clause: clause.clone(),
                stemmed_clause: stem_clause(stemmer, clause),
                polarity: sentiment.polarity,
                subjectivity: sentiment.subjectivity,
                year_enacted: meta.year_enacted,
                year_amended: meta.year_amended,
            });
        }
    }

    info!(
        "Built clause table with {} rows from {} documents",
        table.len(),
        clauses.len()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{LexiconSentiment, PorterStemmer};
    use pretty_assertions::assert_eq;

    fn fixtures() -> (DocumentClauses, HashMap<DocumentId, DocumentMetadata>) {
        let mut clauses = DocumentClauses::new();
        clauses.insert(
            DocumentId::from("Norway_2020"),
            vec![
                "The Kingdom of Norway is a free, independent".to_string(),
                "The form of government is a limited and hereditary monarchy".to_string(),
            ],
        );
        clauses.insert(DocumentId::from("Empty_2000"), vec![]);
        clauses.insert(
            DocumentId::from("Iceland_2013"),
            vec!["Iceland is a Republic with a parliamentary government".to_string()],
        );

        let metadata = [
            ("Norway_2020", DocumentMetadata::new(Some(1814), Some(2020))),
            ("Empty_2000", DocumentMetadata::new(Some(2000), None)),
            ("Iceland_2013", DocumentMetadata::new(Some(1944), None)),
        ]
        .into_iter()
        .map(|(id, meta)| (DocumentId::from(id), meta))
        .collect();

        (clauses, metadata)
    }

    #[test]
    fn test_row_count_and_alignment() {
        let (clauses, metadata) = fixtures();
        let table = build_clause_table(
            &clauses,
            &metadata,
            &LexiconSentiment::new(),
            &PorterStemmer::new(),
        )
        .unwrap();

        let expected_rows: usize = clauses.values().map(Vec::len).sum();
        assert_eq!(table.len(), expected_rows);

        for row in &table {
            let meta = metadata[&row.document_id];
            assert_eq!(row.year_enacted, meta.year_enacted);
            assert_eq!(row.year_amended, meta.year_amended);
        }

        let order: Vec<&str> = table.iter().map(|r| r.document_id.as_str()).collect();
        assert_eq!(order, vec!["Norway_2020", "Norway_2020", "Iceland_2013"]);
        assert_eq!(table.get(1).unwrap().clause, clauses[0][1]);
    }

    #[test]
    fn test_stemmed_and_scored_columns() {
        let (clauses, metadata) = fixtures();
        let table = build_clause_table(
            &clauses,
            &metadata,
            &LexiconSentiment::new(),
            &PorterStemmer::new(),
        )
        .unwrap();

        let first = table.get(0).unwrap();
        assert!(first.stemmed_clause.starts_with("the kingdom of norway is a free"));
        assert!(first.polarity > 0.0);
        assert!(!first.stemmed_clause.contains(','));
    }

    #[test]
    fn test_missing_metadata() {
        let (clauses, mut metadata) = fixtures();
        metadata.remove(&DocumentId::from("Iceland_2013"));

        let err = build_clause_table(
            &clauses,
            &metadata,
            &LexiconSentiment::new(),
            &PorterStemmer::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CharterError::MissingMetadata(id) if id.as_str() == "Iceland_2013"));
    }

    #[test]
    fn test_jsonl_round_trip() {
        let (clauses, metadata) = fixtures();
        let table = build_clause_table(
            &clauses,
            &metadata,
            &LexiconSentiment::new(),
            &PorterStemmer::new(),
        )
        .unwrap();

        let mut buffer = Vec::new();
        table.write_jsonl(&mut buffer).unwrap();
        assert_eq!(buffer.iter().filter(|&&b| b == b'\n').count(), 3);

        let restored = ClauseTable::read_jsonl(buffer.as_slice()).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn test_read_jsonl_reports_line() {
        let input = b"\n{\"document_id\": 1}\n";
        let err = ClauseTable::read_jsonl(&input[..]).unwrap_err();
        assert!(matches!(err, CharterError::Serialization(msg) if msg.starts_with("line 2")));
    }

    #[test]
    fn test_document_rows_ignores_position() {
        let mut table = ClauseTable::new();
        for id in ["a", "b", "a"] {
            table.push(ClauseRecord {
                document_id: DocumentId::from(id),
                clause: String::new(),
                stemmed_clause: String::new(),
                polarity: 0.0,
                subjectivity: 0.0,
                year_enacted: None,
                year_amended: None,
            });
        }
        let id = DocumentId::from("a");
        assert_eq!(table.document_rows(&id).collect::<Vec<_>>(), vec![0, 2]);
    }
}
