//! HTTP client for the backend API.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::execute;
use crate::domain::gateways::{BackendGateway, RawResponse};
use crate::error::ProxyError;

/// reqwest-backed [`BackendGateway`].
///
/// Every request carries the timeout configured at construction, so a hung
/// backend surfaces as [`ProxyError::Transport`] instead of blocking the
/// request indefinitely.
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpBackendClient {
    /// Builds a client with its own connection pool and request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self {
            http,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ProxyError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ProxyError::validation(format!("invalid backend path '{path}': {e}")))
    }
}

/// Ensures the base path ends with `/` so relative joins append to it.
fn normalize_base_url(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

#[async_trait]
impl BackendGateway for HttpBackendClient {
    async fn get(&self, path: &str) -> Result<RawResponse, ProxyError> {
        let url = self.url(path)?;
        debug!("GET {url}");
        execute(self.http.get(url)).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<RawResponse, ProxyError> {
        let url = self.url(path)?;
        debug!("POST {url}");
        let request = self.http.post(url);
        let request = match body {
            Some(body) => request.json(&body),
            None => request,
        };
        execute(request).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<RawResponse, ProxyError> {
        let url = self.url(path)?;
        debug!("PUT {url}");
        execute(self.http.put(url).json(&body)).await
    }

    async fn delete(&self, path: &str) -> Result<RawResponse, ProxyError> {
        let url = self.url(path)?;
        debug!("DELETE {url}");
        execute(self.http.delete(url)).await
    }
}
