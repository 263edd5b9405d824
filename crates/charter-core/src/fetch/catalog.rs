use crate::config::CharterConfig;
use crate::document::{DocumentId, DocumentMetadata};
use crate::error::{CharterError, Result};
use crate::fetch::Transport;
use serde::de::{self, Deserializer};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{info, warn};

/// One entry of the catalog listing; unknown fields are ignored
///
/// Both year keys must be present, though either may be null.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: DocumentId,
    #[serde(deserialize_with = "year")]
    year_enacted: Option<i32>,
    #[serde(deserialize_with = "year")]
    year_updated: Option<i32>,
}

/// A year sent as an integer, a numeric string or null
fn year<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawYear {
        Number(i32),
        Text(String),
    }

    match Option::<RawYear>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawYear::Number(year)) => Ok(Some(year)),
        Some(RawYear::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid year {:?}", text))),
    }
}

/// Documents available from the remote catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Identifiers in catalog order
    pub ids: Vec<DocumentId>,
    /// Enactment/amendment years per identifier
    pub metadata: HashMap<DocumentId, DocumentMetadata>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Keep only the first `limit` identifiers
    pub fn truncate(&mut self, limit: usize) {
        self.ids.truncate(limit);
    }
}

/// Parse a catalog response body
///
/// The body must be a JSON array of objects carrying `id`, `year_enacted`
/// and `year_updated`. Later duplicates of an id overwrite its metadata.
pub fn parse_catalog(body: &str) -> Result<Catalog> {
    let entries: Vec<CatalogEntry> = serde_json::from_str(body)
        .map_err(|e| CharterError::UnexpectedResponseShape(format!("catalog: {}", e)))?;

    let mut catalog = Catalog::default();
    for entry in entries {
        let metadata = DocumentMetadata::new(entry.year_enacted, entry.year_updated);
        if catalog.metadata.insert(entry.id.clone(), metadata).is_some() {
            warn!(id = %entry.id, "duplicate catalog id");
        }
        catalog.ids.push(entry.id);
    }

    Ok(catalog)
}

/// Fetch and parse the catalog listing
pub fn fetch_catalog<T: Transport>(transport: &T, config: &CharterConfig) -> Result<Catalog> {
    let body = transport.get_text(&config.catalog_url)?;
    let catalog = parse_catalog(&body)?;
    info!("Catalog lists {} documents", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FixedBody(&'static str);

    impl Transport for FixedBody {
        fn get_text(&self, _url: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_parse_catalog_preserves_order() {
        let body = r#"[
            {"id": "Zambia_2016", "year_enacted": 1991, "year_updated": 2016, "title": "Zambia"},
            {"id": "Albania_2016", "year_enacted": 1998, "year_updated": null}
        ]"#;

        let catalog = parse_catalog(body).unwrap();
        assert_eq!(
            catalog.ids,
            vec![DocumentId::from("Zambia_2016"), DocumentId::from("Albania_2016")]
        );
        assert_eq!(
            catalog.metadata[&DocumentId::from("Albania_2016")],
            DocumentMetadata::new(Some(1998), None)
        );
    }

    #[test]
    fn test_parse_catalog_integer_ids() {
        let catalog = parse_catalog(r#"[{"id": 7, "year_enacted": 1950, "year_updated": 2001}]"#)
            .unwrap();
        assert_eq!(catalog.ids, vec![DocumentId::from("7")]);
    }

    #[test]
    fn test_parse_catalog_rejects_object_body() {
        let result = parse_catalog(r#"{"constitutions": []}"#);
        assert!(matches!(result, Err(CharterError::UnexpectedResponseShape(_))));
    }

    #[test]
    fn test_parse_catalog_rejects_missing_id() {
        let result = parse_catalog(r#"[{"year_enacted": 1950}]"#);
        assert!(matches!(result, Err(CharterError::UnexpectedResponseShape(_))));
    }

    #[test]
    fn test_parse_catalog_string_years() {
        let catalog =
            parse_catalog(r#"[{"id": "US", "year_enacted": "1789", "year_updated": " 1992 "}]"#)
                .unwrap();
        assert_eq!(
            catalog.metadata[&DocumentId::from("US")],
            DocumentMetadata::new(Some(1789), Some(1992))
        );
    }

    #[test]
    fn test_parse_catalog_rejects_non_numeric_year() {
        let result =
            parse_catalog(r#"[{"id": "US", "year_enacted": "unknown", "year_updated": null}]"#);
        match result {
            Err(CharterError::UnexpectedResponseShape(msg)) => assert!(msg.contains("invalid year")),
            other => panic!("expected UnexpectedResponseShape, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_catalog_requires_year_keys() {
        let result = parse_catalog(r#"[{"id": "US", "year_enacted": 1789}]"#);
        match result {
            Err(CharterError::UnexpectedResponseShape(msg)) => assert!(msg.contains("year_updated")),
            other => panic!("expected UnexpectedResponseShape, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_catalog_null_years() {
        let catalog =
            parse_catalog(r#"[{"id": "US", "year_enacted": null, "year_updated": null}]"#).unwrap();
        assert_eq!(
            catalog.metadata[&DocumentId::from("US")],
            DocumentMetadata::default()
        );
    }

    #[test]
    fn test_fetch_catalog_uses_transport() {
        let transport =
            FixedBody(r#"[{"id": "Peru_2021", "year_enacted": 1993, "year_updated": 2021}]"#);
        let catalog = fetch_catalog(&transport, &CharterConfig::default()).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let mut catalog = parse_catalog(
            r#"[
                {"id": "a", "year_enacted": 1, "year_updated": null},
                {"id": "b", "year_enacted": 2, "year_updated": null}
            ]"#,
        )
        .unwrap();
        catalog.truncate(1);
        assert_eq!(catalog.ids, vec![DocumentId::from("a")]);
    }
}
