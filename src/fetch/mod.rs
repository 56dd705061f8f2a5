//! Paginated character fetching
//!
//! The core of the tool: drives repeated authenticated GETs against the
//! catalog endpoint, advancing an offset cursor by the page size until the
//! server returns a short page (or the first-page total is reached), and
//! flattens all pages into one ordered [`ResultSet`].
//!
//! Pages are fetched strictly sequentially, one outstanding request at a
//! time, so the final record order is deterministic for a fixed
//! server-side dataset. Any failure aborts the run with the offset it
//! occurred at; no partial result set is ever returned and no retry is
//! attempted.

mod types;

pub use types::{CharacterRecord, OffsetCursor, PageData, ResultSet};

use crate::auth;
use crate::config::{Credentials, FetchConfig};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};

/// Fetches the complete character catalog for one run
pub struct Fetcher {
    client: HttpClient,
    credentials: Credentials,
    config: FetchConfig,
}

impl Fetcher {
    /// Create a fetcher, validating the configuration up front
    pub fn new(config: FetchConfig, credentials: Credentials) -> Result<Self> {
        config.validate()?;

        let client = HttpClient::with_config(
            HttpClientConfig::builder()
                .base_url(&config.base_url)
                .timeout(config.timeout)
                .build(),
        )?;

        Ok(Self {
            client,
            credentials,
            config,
        })
    }

    /// Fetch every page and return the flattened result set
    ///
    /// A zero-total first page is a valid "no matching characters" outcome
    /// and returns an empty set successfully.
    pub async fn fetch_all(&self) -> Result<ResultSet> {
        let mut cursor = OffsetCursor::new();
        let mut results = ResultSet::new();

        info!(endpoint = %self.config.endpoint, "starting extraction");

        loop {
            let page = self.fetch_page(cursor.offset()).await?;

            if let Some(total) = page.total {
                cursor.record_total(total);
            }

            results.append(page.results);
            cursor.advance(page.count, self.config.page_size);

            match cursor.total() {
                Some(total) => info!("fetched {} of {total} records", results.len()),
                None => info!("fetched {} records", results.len()),
            }

            if let Some(max) = self.config.max_records {
                if results.len() >= max {
                    results.truncate(max);
                    debug!("record cap {max} reached");
                    break;
                }
            }

            if cursor.is_done() {
                break;
            }
        }

        info!("extraction complete: {} records", results.len());
        Ok(results)
    }

    /// Fetch and parse a single page at the given offset
    async fn fetch_page(&self, offset: u64) -> Result<PageData> {
        // Fresh (ts, hash) pair per request; the server verifies the pair
        // together, so they must never be mixed across calls.
        let ts = auth::timestamp();
        let hash = auth::sign(
            &ts,
            self.credentials.public_key(),
            self.credentials.private_key(),
        )?;

        let mut query = vec![
            ("ts", ts),
            ("apikey", self.credentials.public_key().to_string()),
            ("hash", hash),
            ("offset", offset.to_string()),
            ("limit", self.config.page_size.to_string()),
        ];
        if let Some(since) = &self.config.modified_since {
            query.push(("modifiedSince", since.clone()));
        }

        let response = self
            .client
            .get(&self.config.endpoint, &query)
            .await
            .map_err(|e| Error::fetch(offset, e.to_string()))?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_seconds = extract_retry_after(&response);
            return Err(Error::RateLimited {
                offset,
                retry_after_seconds,
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::fetch(
                offset,
                format!("HTTP {}: {body}", status.as_u16()),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::response_format(format!("invalid JSON body: {e}")))?;

        PageData::from_body(&body)
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

/// Extract a Retry-After header value in seconds
fn extract_retry_after(response: &reqwest::Response) -> u64 {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
        .unwrap_or(60)
}
