//! Domain name validation.
//!
//! Accepts `label(.label)*.tld` where the TLD is 2-11 ASCII letters, the label
//! right before it is at least two characters and starts alphanumeric, and
//! every label is drawn from `[a-zA-Z0-9-_]`. Anything carrying a scheme
//! separator (`://`) is rejected outright.

use std::fmt;

/// Shortest and longest accepted TLD.
const TLD_MIN: usize = 2;
const TLD_MAX: usize = 11;

/// Message shown next to the input when the field holds an invalid domain.
pub const INVALID_DOMAIN_MESSAGE: &str = "Invalid domain name";

/// Why a candidate was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("domain is empty")]
    Empty,
    #[error("domain must not start with a scheme separator")]
    SchemePrefix,
    #[error("domain has no top-level label")]
    MissingTld,
    #[error("top-level label {0:?} must be 2-11 letters")]
    InvalidTld(String),
    #[error("label {0:?} contains invalid characters")]
    InvalidLabel(String),
}

impl DomainError {
    /// The inline message for the form; every reason maps to the same text.
    pub fn user_message(&self) -> &'static str {
        INVALID_DOMAIN_MESSAGE
    }
}

/// A domain that passed [`validate`]. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain(String);

impl Domain {
    /// Parse a candidate, returning the first rule it breaks.
    pub fn parse(candidate: &str) -> Result<Self, DomainError> {
        check(candidate)?;
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// True if `candidate` is an acceptable domain. Pure and deterministic.
pub fn validate(candidate: &str) -> bool {
    check(candidate).is_ok()
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

fn check(candidate: &str) -> Result<(), DomainError> {
    if candidate.is_empty() {
        return Err(DomainError::Empty);
    }
    if candidate.starts_with("://") {
        return Err(DomainError::SchemePrefix);
    }

    let labels: Vec<&str> = candidate.split('.').collect();
    let (tld, rest) = match labels.split_last() {
        Some((tld, rest)) if !rest.is_empty() => (*tld, rest),
        _ => return Err(DomainError::MissingTld),
    };

    if tld.len() < TLD_MIN || tld.len() > TLD_MAX || !tld.chars().all(|c| c.is_ascii_alphabetic())
    {
        return Err(DomainError::InvalidTld(tld.to_string()));
    }

    // rest is non-empty, so split_last always yields the second-level label.
    if let Some((second, leading)) = rest.split_last() {
        let starts_alnum = second
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        if second.len() < 2 || !starts_alnum || !second.chars().all(is_label_char) {
            return Err(DomainError::InvalidLabel(second.to_string()));
        }
        for label in leading {
            if label.is_empty() || !label.chars().all(is_label_char) {
                return Err(DomainError::InvalidLabel(label.to_string()));
            }
        }
    }

    Ok(())
}
