use crate::config::CharterConfig;
use crate::error::{CharterError, Result};
use tracing::debug;

/// Source of response bodies for a URL
///
/// Implemented by [`HttpTransport`] for live runs; tests substitute canned
/// responses.
pub trait Transport {
    /// Issue a GET and return the response body as text
    fn get_text(&self, url: &str) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url)
    }
}

/// Blocking HTTP transport
///
/// Requests are issued one at a time and each waits for its full response.
/// Non-success status codes are reported as network errors.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &CharterConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder().timeout(config.timeout());

        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let client = builder
            .build()
            .map_err(|e| CharterError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &str) -> Result<String> {
        let network_error = |e: reqwest::Error| CharterError::Network {
            url: url.to_string(),
            message: e.to_string(),
        };

        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .map_err(network_error)?
            .error_for_status()
            .map_err(network_error)?;

        response.text().map_err(network_error)
    }
}
