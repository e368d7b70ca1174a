//! Provider error types.

use geoquiz_core::ResolveError;
use thiserror::Error;

/// Transport-level failures talking to a geocoding service.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl From<ProviderError> for ResolveError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Timeout(secs) => ResolveError::Timeout(secs),
            ProviderError::NetworkError(message) => ResolveError::NetworkError(message),
            other => ResolveError::NetworkError(other.to_string()),
        }
    }
}
