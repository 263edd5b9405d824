//! Cross-document clause similarity over topic vectors
//!
//! Each table row has a topic vector computed outside this crate (one row of
//! a document-topic matrix). For a query row, the lookup scores every row by
//! cosine similarity and returns the best row belonging to a *different*
//! document. Rows are excluded by document id, so the table does not need to
//! keep a document's rows contiguous.
//!
//! # Example
//!
//! ```rust,no_run
//! use charter_core::search::similarity::{most_similar_clause, read_topic_vectors};
//! use charter_core::table::ClauseTable;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! # fn example() -> charter_core::error::Result<()> {
//! let table = ClauseTable::read_jsonl(BufReader::new(File::open("clauses.jsonl")?))?;
//! let vectors = read_topic_vectors(File::open("doc_topics.json")?)?;
//!
//! let found = most_similar_clause(&table, &vectors, 42)?;
//! println!("{} ({:.3})", found.record.clause, found.similarity);
//! # Ok(())
//! # }
//! ```

use crate::error::{CharterError, Result};
use crate::table::{ClauseRecord, ClauseTable};
use std::io::{self, Read, Write};
use tracing::debug;

/// Best match for a query row
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarClause<'a> {
    /// Row index of the match in the table
    pub index: usize,
    /// Cosine similarity between the query and the match
    pub similarity: f64,
    pub record: &'a ClauseRecord,
}

/// Cosine similarity of two equal-length vectors
///
/// A zero-norm vector has similarity 0.0 with everything.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Find the row most similar to `query` among rows of other documents
///
/// Ties go to the lowest row index. NaN similarities never match.
///
/// # Errors
///
/// - `QueryOutOfRange` if `query` is not a row of `table`
/// - `DimensionMismatch` if `topic_vectors` is not one vector per row, or a
///   vector's length differs from the query vector's
/// - `EmptyCandidateSet` if every row belongs to the query's document
pub fn most_similar_clause<'a>(
    table: &'a ClauseTable,
    topic_vectors: &[Vec<f64>],
    query: usize,
) -> Result<SimilarClause<'a>> {
    if topic_vectors.len() != table.len() {
        return Err(CharterError::DimensionMismatch {
            expected: table.len(),
            found: topic_vectors.len(),
        });
    }

    let query_row = table.get(query).ok_or(CharterError::QueryOutOfRange {
        index: query,
        rows: table.len(),
    })?;
    let query_vector = &topic_vectors[query];

    let mut best: Option<(usize, f64)> = None;
    let mut candidates = 0usize;

    for (index, (row, vector)) in table.iter().zip(topic_vectors).enumerate() {
        if vector.len() != query_vector.len() {
            return Err(CharterError::DimensionMismatch {
                expected: query_vector.len(),
                found: vector.len(),
            });
        }
        if row.document_id == query_row.document_id {
            continue;
        }

        candidates += 1;
        let similarity = cosine_similarity(query_vector, vector);
        if similarity.is_nan() {
            continue;
        }
        if best.map_or(true, |(_, top)| similarity > top) {
            best = Some((index, similarity));
        }
    }

    debug!(query, candidates, "scored similarity candidates");

    let (index, similarity) = best.ok_or_else(|| CharterError::EmptyCandidateSet {
        document_id: query_row.document_id.clone(),
    })?;

    Ok(SimilarClause {
        index,
        similarity,
        record: &table.rows()[index],
    })
}

/// Look up the most similar clause and write both rows to `writer`
///
/// Output is the query's document id, clause and topic vector, a blank line,
/// a heading, then the same three lines for the match.
pub fn report_similar_clause<'a, W: Write>(
    mut writer: W,
    table: &'a ClauseTable,
    topic_vectors: &[Vec<f64>],
    query: usize,
) -> Result<SimilarClause<'a>> {
    let found = most_similar_clause(table, topic_vectors, query)?;
    let query_row = &table.rows()[query];

    writeln!(writer, "{}", query_row.document_id)?;
    writeln!(writer, "{}", query_row.clause)?;
    writeln!(writer, "{:?}", topic_vectors[query])?;
    writeln!(writer)?;
    writeln!(writer, "Most Similar Clause from Another Country")?;
    writeln!(writer, "{}", found.record.document_id)?;
    writeln!(writer, "{}", found.record.clause)?;
    writeln!(writer, "{:?}", topic_vectors[found.index])?;
    writer.flush()?;

    Ok(found)
}

/// [`report_similar_clause`] to stdout
pub fn print_similar_clause<'a>(
    table: &'a ClauseTable,
    topic_vectors: &[Vec<f64>],
    query: usize,
) -> Result<SimilarClause<'a>> {
    report_similar_clause(io::stdout().lock(), table, topic_vectors, query)
}

/// Read a document-topic matrix stored as a JSON array of arrays
pub fn read_topic_vectors<R: Read>(reader: R) -> Result<Vec<Vec<f64>>> {
    serde_json::from_reader(reader).map_err(|e| CharterError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentId;
    use pretty_assertions::assert_eq;

    fn table(ids: &[&str]) -> ClauseTable {
        let mut table = ClauseTable::new();
        for (i, id) in ids.iter().enumerate() {
            table.push(ClauseRecord {
                document_id: DocumentId::from(*id),
                clause: format!("clause {} of {}", i, id),
                stemmed_clause: String::new(),
                polarity: 0.0,
                subjectivity: 0.0,
                year_enacted: Some(1900),
                year_amended: None,
            });
        }
        table
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_cosine_similarity() {
        assert!(approx(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]), 1.0));
        assert!(approx(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0));
        assert!(approx(cosine_similarity(&[1.0, 1.0], &[-1.0, -1.0]), -1.0));
        assert!(approx(cosine_similarity(&[2.0, 0.0], &[1.0, 1.0]), 1.0 / 2f64.sqrt()));
    }

    #[test]
    fn test_cosine_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn test_excludes_same_document_even_if_more_similar() {
        let table = table(&["us", "us", "fr"]);
        // Row 2 has similarity 0.7 with the query; row 1 is identical to it.
        let vectors = vec![
            vec![1.0, 0.0],
            vec![1.0, 0.0],
            vec![0.7, 0.51f64.sqrt()],
        ];

        let found = most_similar_clause(&table, &vectors, 0).unwrap();
        assert_eq!(found.index, 2);
        assert!(approx(found.similarity, 0.7));
        assert_eq!(found.record.document_id.as_str(), "fr");
    }

    #[test]
    fn test_excludes_non_contiguous_rows() {
        let table = table(&["us", "de", "us", "fr"]);
        let vectors = vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 0.2],
        ];

        let found = most_similar_clause(&table, &vectors, 0).unwrap();
        assert_eq!(found.index, 3);
    }

    #[test]
    fn test_ties_pick_lowest_row() {
        let table = table(&["us", "de", "fr", "jp"]);
        let vectors = vec![
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![1.0, 1.0],
            vec![1.0, 1.0],
        ];

        let found = most_similar_clause(&table, &vectors, 0).unwrap();
        assert_eq!(found.index, 2);
    }

    #[test]
    fn test_empty_candidate_set() {
        let table = table(&["us", "us"]);
        let vectors = vec![vec![1.0], vec![0.5]];
        let err = most_similar_clause(&table, &vectors, 1).unwrap_err();
        assert!(matches!(
            err,
            CharterError::EmptyCandidateSet { document_id } if document_id.as_str() == "us"
        ));
    }

    #[test]
    fn test_query_out_of_range() {
        let table = table(&["us"]);
        let err = most_similar_clause(&table, &[vec![1.0]], 3).unwrap_err();
        assert!(matches!(err, CharterError::QueryOutOfRange { index: 3, rows: 1 }));
    }

    #[test]
    fn test_vector_count_mismatch() {
        let table = table(&["us", "fr"]);
        let err = most_similar_clause(&table, &[vec![1.0]], 0).unwrap_err();
        assert!(matches!(err, CharterError::DimensionMismatch { expected: 2, found: 1 }));
    }

    #[test]
    fn test_report_format() {
        let table = table(&["us", "fr"]);
        let vectors = vec![vec![0.5, 0.5], vec![0.25, 0.75]];
        let mut out = Vec::new();

        let found = report_similar_clause(&mut out, &table, &vectors, 0).unwrap();

        assert_eq!(found.index, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "us\nclause 0 of us\n[0.5, 0.5]\n\nMost Similar Clause from Another Country\nfr\nclause 1 of fr\n[0.25, 0.75]\n"
        );
    }

    #[test]
    fn test_read_topic_vectors() {
        let vectors = read_topic_vectors(&b"[[0.1, 0.9], [1, 0]]"[..]).unwrap();
        assert_eq!(vectors, vec![vec![0.1, 0.9], vec![1.0, 0.0]]);
        assert!(read_topic_vectors(&b"{}"[..]).is_err());
    }
}
