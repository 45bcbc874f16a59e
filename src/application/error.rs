use std::sync::Arc;

use thiserror::Error;

use crate::client::ApiError;
use crate::domain::DomainError;

/// Failure surfaced by a [`Portfolio`](super::Portfolio) operation.
///
/// Coalesced fetches share one outcome between callers, so API errors
/// arrive behind an `Arc`.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] Arc<ApiError>),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    pub(crate) fn api(error: ApiError) -> Self {
        Self::Api(Arc::new(error))
    }

    /// HTTP status code when the failure came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => err.status(),
            Self::Domain(_) => None,
        }
    }
}
