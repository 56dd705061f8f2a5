//! # comicfetch
//!
//! A single-invocation extractor for a comics-catalog character API.
//! Fetches every character record through offset/limit pagination with
//! MD5-signed requests and materializes the result as a tabular dataset,
//! optionally persisted as a delimited file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use comicfetch::{Credentials, FetchConfig, Fetcher, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let credentials = Credentials::from_env()?;
//!     let fetcher = Fetcher::new(FetchConfig::default(), credentials)?;
//!
//!     let characters = fetcher.fetch_all().await?;
//!     println!("fetched {} characters", characters.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                     CLI / Runner                      │
//! └───────────────────────────┬───────────────────────────┘
//!                             │
//! ┌──────────┬────────────────┴──────────────┬────────────┐
//! │   Auth   │            Fetch              │   Output   │
//! ├──────────┼───────────────────────────────┼────────────┤
//! │ MD5 sign │ OffsetCursor state machine    │ Table      │
//! │ ts/hash  │ sequential page loop (HTTP)   │ CSV writer │
//! └──────────┴───────────────────────────────┴────────────┘
//! ```
//!
//! The fetch loop owns the growing [`ResultSet`](fetch::ResultSet) and
//! hands it off on completion; export is never coupled into the loop.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

/// Error types for comicfetch
pub mod error;

/// Credentials and run configuration
pub mod config;

/// Request signing (timestamp + keyed MD5 hash)
pub mod auth;

/// Thin HTTP client
pub mod http;

/// Paginated character fetching
pub mod fetch;

/// Table materialization and CSV export
pub mod output;

/// Command-line interface
pub mod cli;

pub use config::{Credentials, FetchConfig};
pub use error::{Error, Result};
pub use fetch::{Fetcher, ResultSet};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
