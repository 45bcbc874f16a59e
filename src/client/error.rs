use thiserror::Error;

/// Failures raised by [`ApiClient`](super::ApiClient).
///
/// Transport failures (DNS, connection refused, platform timeout) pass
/// through as [`ApiError::Http`] unchanged. Every non-2xx response is
/// normalized into [`ApiError::Status`] carrying the HTTP status code and
/// status text; a 404 is not distinguished from any other failure status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code when the error came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
