//! Canned-response transport and page fixtures

use charter_core::config::{CharterConfig, DEFAULT_FOOTER_SENTINEL, DEFAULT_HEADER_SENTINEL};
use charter_core::{CharterError, DocumentId, Result, Transport};
use std::cell::RefCell;
use std::collections::HashMap;

/// Serves fixed bodies by URL and records every request
#[derive(Default)]
pub struct StaticTransport {
    bodies: HashMap<String, String>,
    pub requests: RefCell<Vec<String>>,
}

impl StaticTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }

    pub fn with_document(self, config: &CharterConfig, id: &str, clauses: &[&str]) -> Self {
        let url = config.document_url_for(&DocumentId::from(id));
        self.with_body(&url, &document_page(id, clauses))
    }
}

impl Transport for StaticTransport {
    fn get_text(&self, url: &str) -> Result<String> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies.get(url).cloned().ok_or_else(|| CharterError::Network {
            url: url.to_string(),
            message: "404 Not Found".to_string(),
        })
    }
}

/// HTML page following the site's header/footer layout
pub fn document_page(title: &str, clauses: &[&str]) -> String {
    let mut body = String::new();
    for clause in clauses {
        body.push_str(&format!("<p>{}</p>\n", clause));
    }

    format!(
        "<html><head><title>{title}</title></head><body>\n\
         <nav>\nConstitute\n \nSearch\n{header}\n</nav>\n\
         <h1>{title}</h1>\n\
         {body}\
         <footer>{footer}\nThe Constitute Project\n</footer>\n\
         </body></html>",
        title = title,
        header = DEFAULT_HEADER_SENTINEL,
        body = body,
        footer = DEFAULT_FOOTER_SENTINEL,
    )
}
