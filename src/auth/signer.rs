//! MD5 request signer

use crate::error::{Error, Result};
use md5::{Digest, Md5};

/// Derive the authentication token for one request
///
/// Computes `md5(ts + private_key + public_key)` and hex-encodes the
/// digest. Deterministic: identical inputs always yield the identical
/// token.
///
/// Empty inputs are rejected up front; the server would otherwise reject
/// every call with an opaque authorization error.
pub fn sign(ts: &str, public_key: &str, private_key: &str) -> Result<String> {
    if ts.is_empty() {
        return Err(Error::config("timestamp must not be empty"));
    }
    if public_key.is_empty() {
        return Err(Error::config("public key must not be empty"));
    }
    if private_key.is_empty() {
        return Err(Error::config("private key must not be empty"));
    }

    let mut hasher = Md5::new();
    hasher.update(ts.as_bytes());
    hasher.update(private_key.as_bytes());
    hasher.update(public_key.as_bytes());

    Ok(hex::encode(hasher.finalize()))
}

/// Current Unix timestamp in seconds, as the string sent in the `ts` param
///
/// Each page request may derive a fresh timestamp; the paired hash is
/// recomputed alongside it.
pub fn timestamp() -> String {
    chrono::Utc::now().timestamp().to_string()
}
