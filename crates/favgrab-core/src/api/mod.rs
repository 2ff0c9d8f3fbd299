//! Favicon API collaborator.
//!
//! The remote service resolves favicons for a domain; we only consume it.
//! `GET {base}/{domain}` returns JSON favicon metadata on success and a JSON
//! body with a `message` field on failure.

mod client;
mod error;
mod response;

pub use client::CurlApi;
pub use error::ApiError;
pub use response::{FaviconEntry, ResponseInfo};

use crate::domain::Domain;

/// Anything that can look up favicon metadata for a domain.
///
/// Calls block the current thread; call from `spawn_blocking` if used from async code.
pub trait FaviconApi: Send + Sync {
    fn lookup(&self, domain: &Domain) -> Result<ResponseInfo, ApiError>;
}
