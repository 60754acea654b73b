//! Gateway trait for the backend API.

use async_trait::async_trait;
use serde_json::Value;

use super::RawResponse;
use crate::error::ProxyError;

/// JSON-over-HTTP access to the backend service of record.
///
/// Paths are relative to the configured base URL (e.g. `"empresas/3"`).
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpBackendClient`] - reqwest implementation
/// - Test mocks available with `cfg(test)`
///
/// # Errors
///
/// Every method returns [`ProxyError::Transport`] when no response was
/// received. Any response, whatever its status, is returned as `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BackendGateway: Send + Sync {
    async fn get(&self, path: &str) -> Result<RawResponse, ProxyError>;

    /// Sends a POST, with a JSON body when `body` is `Some`.
    async fn post(&self, path: &str, body: Option<Value>) -> Result<RawResponse, ProxyError>;

    async fn put(&self, path: &str, body: Value) -> Result<RawResponse, ProxyError>;

    async fn delete(&self, path: &str) -> Result<RawResponse, ProxyError>;
}
