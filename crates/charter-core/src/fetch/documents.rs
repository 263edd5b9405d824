use crate::config::CharterConfig;
use crate::document::DocumentId;
use crate::error::Result;
use crate::fetch::Transport;
use indexmap::IndexMap;
use scraper::Html;
use tracing::{debug, info};

/// Full page text per document, in fetch order
pub type DocumentTexts = IndexMap<DocumentId, String>;

/// Concatenate every text node of an HTML document in document order
///
/// Markup is dropped but text inside `<head>`, `<script>` and `<style>` is
/// kept, so the result includes navigation and boilerplate that the clause
/// extractor later trims.
pub fn extract_visible_text(html: &str) -> String {
    Html::parse_document(html).root_element().text().collect()
}

/// Fetch each document page in order, one request at a time
///
/// The first failing request aborts the whole batch.
pub fn fetch_documents<T: Transport>(
    transport: &T,
    config: &CharterConfig,
    ids: &[DocumentId],
) -> Result<DocumentTexts> {
    let mut texts = DocumentTexts::with_capacity(ids.len());

    for id in ids {
        let url = config.document_url_for(id);
        let page = transport.get_text(&url)?;
        let text = extract_visible_text(&page);
        debug!(%id, chars = text.len(), "fetched document");
        texts.insert(id.clone(), text);
    }

    info!("Fetched {} documents", texts.len());
    Ok(texts)
}
