//! Error taxonomy for outbound proxy operations.
//!
//! Every service operation works with `Result<T, ProxyError>` internally and
//! converts the error into a user-facing [`crate::domain::Outcome`] at its
//! boundary, so nothing reaches the HTTP layer as an unhandled fault.

/// Failure of a single proxied operation.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// Structurally invalid input; the request never left this service.
    #[error("{0}")]
    Validation(String),

    /// The backend answered with an unexpected status.
    ///
    /// Displays the trimmed response body, or `status N` when the body is empty.
    #[error("{}", body_or_status(*status, body))]
    Backend { status: u16, body: String },

    /// The backend answered 404 on a path addressing a single record.
    #[error("not found")]
    NotFound,

    /// Network failure or timeout talking to the backend or a postal provider.
    #[error("transport failure: {0}")]
    Transport(String),

    /// A 2xx response whose body does not have the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ProxyError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Builds a [`ProxyError::Backend`] from a raw status and body.
    pub fn backend(status: u16, body: &str) -> Self {
        Self::Backend {
            status,
            body: body.trim().to_string(),
        }
    }
}

fn body_or_status(status: u16, body: &str) -> String {
    if body.is_empty() {
        format!("status {status}")
    } else {
        body.to_string()
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Transport(format!("request timed out: {e}"))
        } else {
            Self::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
