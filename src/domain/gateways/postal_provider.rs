//! Gateway trait for postal code lookup services.

use async_trait::async_trait;

use super::RawResponse;
use crate::error::ProxyError;

/// A single postal code lookup service.
///
/// Providers disagree on response shapes; the provider only fetches, and
/// [`crate::application::services::PostalService`] interprets the body.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPostalProvider`] - URL-template based reqwest implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostalProvider: Send + Sync {
    /// Looks up an already normalized 8-digit code.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Transport`] on network failure or timeout.
    async fn lookup(&self, code: &str) -> Result<RawResponse, ProxyError>;
}
