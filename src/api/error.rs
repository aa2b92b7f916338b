use std::fmt;

/// Errors that can occur while running a fetch effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Server answered with a non-success status.
    Api { status: u16, message: String },
    /// Body was not JSON, or not the shape the completion expects.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status() {
        let err = FetchError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 404): not found");
    }

    #[test]
    fn test_display_network_and_parse() {
        assert_eq!(
            FetchError::Network("refused".to_string()).to_string(),
            "network error: refused"
        );
        assert!(FetchError::Parse("eof".to_string()).to_string().starts_with("parse error"));
    }
}
