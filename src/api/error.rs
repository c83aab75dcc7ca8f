//! API Errors

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request url {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("backend answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}
