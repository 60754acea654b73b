//! reqwest implementations of the gateway traits.
//!
//! Both clients hand back status and body untouched; only the absence of a
//! response (connection failure, timeout) is an error.

mod backend_client;
mod postal_client;

pub use backend_client::HttpBackendClient;
pub use postal_client::{CODE_PLACEHOLDER, HttpPostalProvider};

use crate::domain::gateways::RawResponse;
use crate::error::ProxyError;

/// Sends a request and captures status and body.
async fn execute(request: reqwest::RequestBuilder) -> Result<RawResponse, ProxyError> {
    let response = request.send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(RawResponse { status, body })
}
