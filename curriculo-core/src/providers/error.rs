//! Error taxonomy for the enhancement pipeline

use thiserror::Error;

/// Result type for enhancement operations
pub type EnhanceResult<T> = Result<T, EnhanceError>;

/// Errors that can occur while enhancing a resume
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// Unknown provider id - a configuration error, fatal to the request
    #[error("unsupported provider '{id}'")]
    UnsupportedProvider { id: String },

    /// No API credential configured; the caller must collect one first
    #[error("no API credential configured")]
    MissingCredential,

    /// Network failure, non-success HTTP status or empty response body
    #[error("provider request failed: {message}")]
    Request {
        status: Option<u16>,
        message: String,
    },

    /// Sanitized model output was not a JSON object
    #[error("malformed model response: {0}")]
    MalformedResponse(String),

    /// The provider did not answer within the configured bound
    #[error("request timed out after {0} seconds")]
    Timeout(u64),
}

impl EnhanceError {
    /// Whether the orchestrator may degrade to the raw record.
    ///
    /// Only the preconditions block the flow; everything that happens
    /// after the request starts falls back gracefully.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::UnsupportedProvider { .. } | Self::MissingCredential
        )
    }
}

impl From<reqwest::Error> for EnhanceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(crate::http::DEFAULT_REQUEST_TIMEOUT_SECS)
        } else if err.is_connect() {
            Self::Request {
                status: None,
                message: format!("connection failed: {err}"),
            }
        } else {
            Self::Request {
                status: err.status().map(|s| s.as_u16()),
                message: err.to_string(),
            }
        }
    }
}
