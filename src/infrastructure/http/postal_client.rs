//! HTTP client for postal code lookup services.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, HeaderValue};
use std::time::Duration;
use tracing::debug;

use super::execute;
use crate::domain::gateways::{PostalProvider, RawResponse};
use crate::error::ProxyError;

/// Placeholder substituted with the normalized postal code.
pub const CODE_PLACEHOLDER: &str = "{code}";

/// Postal code provider addressed through a URL template.
///
/// The template contains [`CODE_PLACEHOLDER`], e.g.
/// `https://viacep.com.br/ws/{code}/json/`.
pub struct HttpPostalProvider {
    http: reqwest::Client,
    url_template: String,
}

impl HttpPostalProvider {
    /// Builds a provider with its own client and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(url_template: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, url_template))
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, url_template: impl Into<String>) -> Self {
        Self {
            http,
            url_template: url_template.into(),
        }
    }

    fn url_for(&self, code: &str) -> String {
        self.url_template.replace(CODE_PLACEHOLDER, code)
    }
}

#[async_trait]
impl PostalProvider for HttpPostalProvider {
    async fn lookup(&self, code: &str) -> Result<RawResponse, ProxyError> {
        let url = self.url_for(code);
        debug!("GET {url}");
        execute(
            self.http
                .get(url)
                .header(ACCEPT, HeaderValue::from_static("application/json")),
        )
        .await
    }
}
