//! Raw failures from the API collaborator.

/// Error returned by a single API lookup (curl failure, HTTP error, or bad body).
/// The fetch controller normalizes these before storing them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Curl reported an error (timeout, connection, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Non-2xx status. `message` comes from the response body when it has one.
    #[error("{}", http_message(.code, .message))]
    Http { code: u32, message: Option<String> },
    /// 2xx response whose body is not valid JSON.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn http_message(code: &u32, message: &Option<String>) -> String {
    match message {
        Some(m) => m.clone(),
        None => format!("HTTP {code}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_display_prefers_body_message() {
        let e = ApiError::Http {
            code: 404,
            message: Some("Domain not found".to_string()),
        };
        assert_eq!(e.to_string(), "Domain not found");
        let e = ApiError::Http {
            code: 502,
            message: None,
        };
        assert_eq!(e.to_string(), "HTTP 502");
    }

    #[test]
    fn malformed_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = ApiError::from(json_err);
        assert!(e.to_string().starts_with("malformed response"));
    }
}
