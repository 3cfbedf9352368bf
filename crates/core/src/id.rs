// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Short model identifiers.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

use crate::error::Result;

/// Generate a model id from a seed and creation time.
///
/// Returns the first 8 hex characters of SHA-256(seed + RFC 3339 timestamp).
pub fn generate_id(seed: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", seed, created_at.to_rfc3339());
    let hash = Sha256::digest(input.as_bytes());
    hex::encode(&hash[..4])
}

/// Generate an id not yet taken, appending `-2`, `-3`, ... on collision.
pub fn generate_unique_id<F>(seed: &str, created_at: &DateTime<Utc>, mut exists: F) -> Result<String>
where
    F: FnMut(&str) -> Result<bool>,
{
    let base_id = generate_id(seed, created_at);
    if !exists(&base_id)? {
        return Ok(base_id);
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id)? {
            return Ok(id);
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
