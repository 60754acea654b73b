//! Gateway traits for the external collaborators.
//!
//! The backend and the postal code providers are reached over HTTP. These
//! traits abstract the transport so services can be tested with mocks.
//!
//! # Architecture
//!
//! - Traits define the contract and return raw status + body
//! - Implementations live in `crate::infrastructure::http`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! Interpreting status codes is the services' job, not the gateways'.

pub mod backend_gateway;
pub mod postal_provider;

pub use backend_gateway::BackendGateway;
pub use postal_provider::PostalProvider;

#[cfg(test)]
pub use backend_gateway::MockBackendGateway;
#[cfg(test)]
pub use postal_provider::MockPostalProvider;

/// Status and body of an HTTP response, as received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true when the status is one of `accepted`.
    pub fn status_in(&self, accepted: &[u16]) -> bool {
        accepted.contains(&self.status)
    }
}
