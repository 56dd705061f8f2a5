//! Error types for comicfetch
//!
//! One crate-wide error enum; all public APIs return `Result<T, Error>`.
//! Nothing is recovered locally: a failed run aborts and is simply re-run
//! from offset zero, so every error propagates to the process boundary
//! unmodified.

use thiserror::Error;

/// The main error type for comicfetch
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors (detected before any network activity)
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing credential: set the {var} environment variable")]
    MissingCredential { var: String },

    // ============================================================================
    // Fetch Errors (mid-pagination, carry the failing offset)
    // ============================================================================
    #[error("Fetch failed at offset {offset}: {message}")]
    Fetch { offset: u64, message: String },

    #[error("Rate limited at offset {offset}, retry after {retry_after_seconds}s")]
    RateLimited {
        offset: u64,
        retry_after_seconds: u64,
    },

    #[error("Malformed response: {message}")]
    ResponseFormat { message: String },

    // ============================================================================
    // Ambient Errors
    // ============================================================================
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing credential error
    pub fn missing_credential(var: impl Into<String>) -> Self {
        Self::MissingCredential { var: var.into() }
    }

    /// Create a fetch error at the given offset
    pub fn fetch(offset: u64, message: impl Into<String>) -> Self {
        Self::Fetch {
            offset,
            message: message.into(),
        }
    }

    /// Create a response format error
    pub fn response_format(message: impl Into<String>) -> Self {
        Self::ResponseFormat {
            message: message.into(),
        }
    }

    /// Short name for the error class, written to diagnostic output on exit
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config { .. } | Error::MissingCredential { .. } => "configuration",
            Error::Fetch { .. } => "fetch",
            Error::RateLimited { .. } => "rate_limited",
            Error::ResponseFormat { .. } => "response_format",
            Error::Http(_) | Error::InvalidUrl(_) => "http",
            Error::Csv(_) => "csv",
            Error::Io(_) => "io",
        }
    }

    /// Check if this error is the distinguishable 429 subtype
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }

    /// The pagination offset this error occurred at, if any
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::Fetch { offset, .. } | Error::RateLimited { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

/// Result type alias for comicfetch
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("empty public key");
        assert_eq!(err.to_string(), "Configuration error: empty public key");

        let err = Error::missing_credential("PUBLIC_KEY");
        assert_eq!(
            err.to_string(),
            "Missing credential: set the PUBLIC_KEY environment variable"
        );

        let err = Error::fetch(500, "HTTP 503: unavailable");
        assert_eq!(
            err.to_string(),
            "Fetch failed at offset 500: HTTP 503: unavailable"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(Error::config("x").kind(), "configuration");
        assert_eq!(Error::missing_credential("PRIVATE_KEY").kind(), "configuration");
        assert_eq!(Error::fetch(0, "x").kind(), "fetch");
        assert_eq!(
            Error::RateLimited {
                offset: 100,
                retry_after_seconds: 30
            }
            .kind(),
            "rate_limited"
        );
        assert_eq!(Error::response_format("x").kind(), "response_format");
    }

    #[test]
    fn test_is_rate_limited() {
        assert!(Error::RateLimited {
            offset: 0,
            retry_after_seconds: 60
        }
        .is_rate_limited());
        assert!(!Error::fetch(0, "HTTP 500").is_rate_limited());
        assert!(!Error::config("x").is_rate_limited());
    }

    #[test]
    fn test_error_offset() {
        assert_eq!(Error::fetch(500, "boom").offset(), Some(500));
        assert_eq!(
            Error::RateLimited {
                offset: 200,
                retry_after_seconds: 10
            }
            .offset(),
            Some(200)
        );
        assert_eq!(Error::config("x").offset(), None);
    }
}
