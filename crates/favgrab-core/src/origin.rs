//! Page origin used to build preview URLs.
//!
//! The origin is read once at startup and never changes afterwards. Before
//! that read it is simply absent, and previews render empty.

use anyhow::{Context, Result};

/// Protocol and host of the page serving favicons, e.g. `https:` + `fav.example`.
///
/// `protocol` keeps the trailing colon so URLs are built as `{protocol}//{host}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub protocol: String,
    pub host: String,
}

impl Origin {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
        }
    }

    /// Derive an origin from any absolute URL. Non-default ports stay part of the host.
    pub fn from_url(raw: &str) -> Result<Self> {
        let parsed = url::Url::parse(raw).with_context(|| format!("invalid origin URL: {raw}"))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| anyhow::anyhow!("origin URL has no host: {raw}"))?;
        let host = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self::new(format!("{}:", parsed.scheme()), host))
    }

    /// `{protocol}//{host}` with no trailing slash.
    pub fn base(&self) -> String {
        format!("{}//{}", self.protocol, self.host)
    }
}

/// Holds the origin once it is known. Goes from absent to present at most once.
#[derive(Debug, Default)]
pub struct OriginSlot {
    origin: Option<Origin>,
}

impl OriginSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the origin. Returns false (and keeps the first value) if already resolved.
    pub fn resolve(&mut self, origin: Origin) -> bool {
        if self.origin.is_some() {
            tracing::debug!(ignored = %origin.base(), "origin already resolved");
            return false;
        }
        tracing::debug!(origin = %origin.base(), "origin resolved");
        self.origin = Some(origin);
        true
    }

    pub fn get(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    pub fn is_known(&self) -> bool {
        self.origin.is_some()
    }
}
