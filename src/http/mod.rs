//! Thin HTTP client
//!
//! One blocking-style GET at a time, no retries and no client-side rate
//! limiting: a failed request aborts the run, and any pause-and-resume
//! decision belongs to the operator. Timeouts come from the underlying
//! transport configuration.

mod client;

pub use client::{HttpClient, HttpClientConfig};

#[cfg(test)]
mod tests;
