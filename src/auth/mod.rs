//! Request signing
//!
//! Every catalog API call carries a `(ts, apikey, hash)` triple where
//! `hash = md5(ts + private_key + public_key)`, hex-encoded. The server
//! recomputes the hash from the submitted timestamp and the caller's keys,
//! so a token is only valid alongside the exact timestamp it was derived
//! from.

mod signer;

pub use signer::{sign, timestamp};
