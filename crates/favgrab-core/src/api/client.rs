//! libcurl-backed API client.

use std::time::Duration;

use super::{ApiError, FaviconApi, ResponseInfo};
use crate::config::FavgrabConfig;
use crate::domain::Domain;

/// Issues `GET {base_url}/{domain}` with the `curl` crate.
#[derive(Debug, Clone)]
pub struct CurlApi {
    base_url: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let defaults = FavgrabConfig::default();
        Self {
            base_url: base_url.into(),
            connect_timeout: Duration::from_secs(defaults.connect_timeout_secs),
            timeout: Duration::from_secs(defaults.timeout_secs),
        }
    }

    pub fn from_config(cfg: &FavgrabConfig) -> Self {
        Self {
            base_url: cfg.api_base_url.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }

    /// The domain is the only path segment after the base.
    pub fn url_for(&self, domain: &Domain) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), domain)
    }

    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut headers = curl::easy::List::new();
        headers.append("Accept: application/json")?;
        easy.http_headers(headers)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl FaviconApi for CurlApi {
    fn lookup(&self, domain: &Domain) -> Result<ResponseInfo, ApiError> {
        let url = self.url_for(domain);
        tracing::debug!(%url, "favicon lookup");
        let (code, body) = self.get(&url)?;
        if !(200..300).contains(&code) {
            return Err(ApiError::Http {
                code,
                message: error_message(&body),
            });
        }
        Ok(ResponseInfo::from_slice(&body)?)
    }
}

/// Pull `message` out of a JSON error body, if there is one.
fn error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_base_and_domain() {
        let d = Domain::parse("openai.com").unwrap();
        assert_eq!(
            CurlApi::new("https://api.fav.example/v1").url_for(&d),
            "https://api.fav.example/v1/openai.com"
        );
        assert_eq!(
            CurlApi::new("https://api.fav.example/").url_for(&d),
            "https://api.fav.example/openai.com"
        );
    }

    #[test]
    fn error_message_from_json_body() {
        assert_eq!(
            error_message(br#"{"message":"Domain not found"}"#).as_deref(),
            Some("Domain not found")
        );
        assert_eq!(error_message(br#"{"message":"  "}"#), None);
        assert_eq!(error_message(b"Bad Gateway"), None);
        assert_eq!(error_message(br#"{"error":"x"}"#), None);
    }

    #[test]
    fn from_config_uses_base_url() {
        let mut cfg = FavgrabConfig::default();
        cfg.api_base_url = "http://127.0.0.1:9/api".to_string();
        let api = CurlApi::from_config(&cfg);
        let d = Domain::parse("example.com").unwrap();
        assert_eq!(api.url_for(&d), "http://127.0.0.1:9/api/example.com");
    }
}
