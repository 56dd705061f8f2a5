//! Credentials and run configuration
//!
//! Environment-variable credential state maps to an explicit config struct
//! constructed once at process start and passed into the fetcher; the core
//! never performs ambient environment lookups.

use crate::error::{Error, Result};
use std::time::Duration;

/// Environment variable holding the public API key
pub const PUBLIC_KEY_VAR: &str = "PUBLIC_KEY";

/// Environment variable holding the private API key
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

/// Default catalog API base URL
pub const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com/v1/public";

/// Default records per page (the server maximum)
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// API credential pair, immutable for the duration of a run
#[derive(Clone)]
pub struct Credentials {
    public_key: String,
    private_key: String,
}

impl Credentials {
    /// Create credentials from a key pair
    ///
    /// Empty keys are rejected here so the failure is a clear configuration
    /// error instead of a cryptic server-side rejection on every call.
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Result<Self> {
        let public_key = public_key.into();
        let private_key = private_key.into();

        if public_key.is_empty() {
            return Err(Error::config("public key must not be empty"));
        }
        if private_key.is_empty() {
            return Err(Error::config("private key must not be empty"));
        }

        Ok(Self {
            public_key,
            private_key,
        })
    }

    /// Create credentials from the environment
    ///
    /// Reads `PUBLIC_KEY` and `PRIVATE_KEY`; either being absent fails
    /// before any network call is made.
    pub fn from_env() -> Result<Self> {
        let public_key = std::env::var(PUBLIC_KEY_VAR)
            .map_err(|_| Error::missing_credential(PUBLIC_KEY_VAR))?;
        let private_key = std::env::var(PRIVATE_KEY_VAR)
            .map_err(|_| Error::missing_credential(PRIVATE_KEY_VAR))?;

        Self::new(public_key, private_key)
    }

    /// Get the public key
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Get the private key
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "public_key",
                &format!(
                    "{}...",
                    &self.public_key[..4.min(self.public_key.len())]
                ),
            )
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for one extraction run
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL for all requests
    pub base_url: String,
    /// Resource endpoint under the base URL
    pub endpoint: String,
    /// Records requested per page
    pub page_size: u64,
    /// Optional cap on total records fetched
    pub max_records: Option<usize>,
    /// Request timeout
    pub timeout: Duration,
    /// Only fetch records modified since this ISO-8601 date
    pub modified_since: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint: "characters".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_records: None,
            timeout: Duration::from_secs(30),
            modified_since: None,
        }
    }
}

impl FetchConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Cap the total number of records fetched
    #[must_use]
    pub fn with_max_records(mut self, max: usize) -> Self {
        self.max_records = Some(max);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Only fetch records modified since this date
    #[must_use]
    pub fn with_modified_since(mut self, date: impl Into<String>) -> Self {
        self.modified_since = Some(date.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::config("page size must be positive"));
        }
        if self.base_url.is_empty() {
            return Err(Error::config("base URL must not be empty"));
        }
        // Catch malformed URLs up front rather than on the first request
        url::Url::parse(&self.base_url)?;
        Ok(())
    }
}
