//! Localized strings.
//!
//! Keys are dotted paths (`frontend.home.default_size`). Values may contain
//! named placeholders like `{domain}` that are substituted at lookup time.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUILTIN_EN: &str = include_str!("en.toml");

/// Key-to-string lookup with named interpolation.
pub trait Translate {
    /// Resolve `key` and substitute every `{name}` from `args`.
    /// Unknown keys resolve to the key itself.
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String;

    fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}

/// Flat message catalog for one locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(locale: &str) -> Self {
        Self {
            locale: locale.to_string(),
            messages: HashMap::new(),
        }
    }

    /// The English catalog compiled into the binary.
    pub fn builtin() -> Self {
        let mut catalog = Self::new("en");
        // The embedded file is covered by tests; a parse failure leaves the catalog empty.
        if let Err(e) = catalog.merge_toml(BUILTIN_EN) {
            tracing::warn!("builtin catalog failed to parse: {:#}", e);
        }
        catalog
    }

    /// Builtin catalog with overrides from a user TOML file.
    pub fn with_overrides(path: &Path) -> Result<Self> {
        let mut catalog = Self::builtin();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read catalog {}", path.display()))?;
        catalog
            .merge_toml(&data)
            .with_context(|| format!("parse catalog {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded catalog overrides");
        Ok(catalog)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.messages.get(key)
    }

    /// Merge nested TOML tables as dotted keys. Later values win.
    pub fn merge_toml(&mut self, data: &str) -> Result<()> {
        let table: toml::Table = toml::from_str(data)?;
        flatten_into(&mut self.messages, "", &table);
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str, args: &[(&str, &str)]) -> String {
        match self.get(key) {
            Some(template) => interpolate(template, args),
            None => {
                tracing::debug!(key, locale = %self.locale, "missing translation");
                key.to_string()
            }
        }
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: &str, table: &toml::Table) {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::Table(inner) => flatten_into(out, &key, inner),
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            other => {
                out.insert(key, other.to_string());
            }
        }
    }
}

/// Replace `{name}` placeholders. Placeholders without a matching argument are left as-is.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, v)) => out.push_str(v),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_catalog_has_page_keys() {
        let c = Catalog::builtin();
        assert_eq!(c.locale(), "en");
        for key in [
            "frontend.home.h1",
            "frontend.home.get_favicons",
            "frontend.home.default_size",
            "frontend.home.larger_size_alt",
            "frontend.home.faq.title",
            "frontend.home.faq.qa5.answer",
        ] {
            assert!(c.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn translate_substitutes_named_args() {
        let c = Catalog::builtin();
        assert_eq!(
            c.translate("frontend.home.default_size_alt", &[("domain", "openai.com")]),
            "Favicon of openai.com"
        );
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let c = Catalog::new("en");
        assert_eq!(c.t("frontend.nope"), "frontend.nope");
    }

    #[test]
    fn interpolate_edge_cases() {
        assert_eq!(interpolate("no args", &[]), "no args");
        assert_eq!(interpolate("{a}-{b}", &[("a", "1"), ("b", "2")]), "1-2");
        assert_eq!(interpolate("keep {unknown}", &[("a", "1")]), "keep {unknown}");
        assert_eq!(interpolate("open { brace", &[]), "open { brace");
    }

    #[test]
    fn overrides_replace_builtin_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[frontend.home]\ndefault_size = \"Standard\"").unwrap();
        let c = Catalog::with_overrides(file.path()).unwrap();
        assert_eq!(c.t("frontend.home.default_size"), "Standard");
        assert_eq!(c.t("frontend.home.larger_size"), "Larger size");
    }
}
