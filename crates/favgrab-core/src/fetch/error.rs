//! Normalize raw API failures into the kinds the UI understands.

use std::fmt;

use crate::api::ApiError;

/// High-level classification of a failed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestErrorKind {
    /// Connect/read timed out.
    Timeout,
    /// Network-level failure (DNS, refused, reset).
    Network,
    /// Service answered with a non-2xx status.
    Status(u32),
    /// Service answered 2xx but the body was unusable.
    Malformed,
}

/// A failed lookup as stored in `RequestState::Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub kind: RequestErrorKind,
    /// Human-readable text for the error banner.
    pub message: String,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequestError {}

impl From<&ApiError> for RequestError {
    fn from(e: &ApiError) -> Self {
        Self {
            kind: classify(e),
            message: e.to_string(),
        }
    }
}

impl From<ApiError> for RequestError {
    fn from(e: ApiError) -> Self {
        Self::from(&e)
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> RequestErrorKind {
    if e.is_operation_timedout() {
        return RequestErrorKind::Timeout;
    }
    RequestErrorKind::Network
}

/// Classify an API error into a request error kind.
pub fn classify(e: &ApiError) -> RequestErrorKind {
    match e {
        ApiError::Curl(ce) => classify_curl_error(ce),
        ApiError::Http { code, .. } => RequestErrorKind::Status(*code),
        ApiError::Malformed(_) => RequestErrorKind::Malformed,
    }
}
