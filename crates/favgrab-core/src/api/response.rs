//! Successful API payload.

use serde::Deserialize;
use serde_json::Value;

/// Favicon metadata returned by the API. The shape belongs to the service, so
/// the raw JSON is kept and a typed view is extracted on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseInfo {
    raw: Value,
}

/// One icon as listed by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FaviconEntry {
    #[serde(alias = "url", alias = "href")]
    pub src: String,
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
}

impl ResponseInfo {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_slice(body)?))
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Icons found at the top level or under `icons` / `favicons`.
    /// Entries that don't look like icons are skipped.
    pub fn favicons(&self) -> Vec<FaviconEntry> {
        let list = match &self.raw {
            Value::Array(items) => Some(items),
            Value::Object(map) => ["icons", "favicons"]
                .iter()
                .find_map(|k| map.get(*k).and_then(Value::as_array)),
            _ => None,
        };
        list.map(|items| {
            items
                .iter()
                .filter_map(|v| FaviconEntry::deserialize(v).ok())
                .collect()
        })
        .unwrap_or_default()
    }

    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }
}
