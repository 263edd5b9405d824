//! Remote retrieval - catalog listing and per-document page text
//!
//! This module provides:
//! - A blocking HTTP transport behind the `Transport` trait
//! - Catalog parsing into ordered ids plus enactment metadata
//! - Sequential document fetching with HTML-to-text extraction

pub mod catalog;
pub mod documents;
pub mod transport;

pub use catalog::{fetch_catalog, parse_catalog, Catalog};
pub use documents::{extract_visible_text, fetch_documents, DocumentTexts};
pub use transport::{HttpTransport, Transport};
