//! Resolution Engine
//!
//! The one piece of non-trivial control flow: `get` tries an exact read
//! first, and on the specific not-found miss switches to a prefix scan
//! over the same key. The fallback is an explicit branch at the call site,
//! never applied to writes and never taken after a successful exact hit.

use serde_json::Value;

use crate::codec;
use crate::error::{KvPathError, Result};
use crate::store::Store;

/// Operations dispatched against an open store
#[derive(Debug, Clone)]
pub enum Operation {
    /// Exact lookup with prefix-scan fallback on miss
    Get,

    /// Write a value under the exact key
    Set { value: Value },

    /// Collect every value whose key carries the given prefix
    ListByPrefix,
}

/// Outcome of a resolution
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A single value: an exact hit, or the value just written
    Value(Value),

    /// An ordered listing from a prefix scan, possibly empty
    Listing(Vec<Value>),
}

/// Resolve one operation against the store
///
/// Empty keys are rejected before any storage access. For `Get`, an exact
/// hit wins even when the key also prefixes other keys; only the
/// `KeyNotFound` miss switches to scan mode, and an empty scan result is
/// returned as an empty listing, not an error.
pub fn resolve(store: &Store, key: &[u8], operation: Operation) -> Result<Resolved> {
    if key.is_empty() {
        return Err(KvPathError::Argument("path".to_string()));
    }

    match operation {
        Operation::Get => match try_exact(store, key) {
            Ok(value) => Ok(Resolved::Value(value)),
            // Miss on the exact key: switch to scan mode
            Err(KvPathError::KeyNotFound) => {
                tracing::debug!("exact miss, falling back to prefix scan");
                Ok(Resolved::Listing(scan_prefix(store, key)?))
            }
            Err(e) => Err(e),
        },
        Operation::ListByPrefix => Ok(Resolved::Listing(scan_prefix(store, key)?)),
        Operation::Set { value } => {
            let bytes = codec::encode(&value)?;
            store.put(key, &bytes)?;
            Ok(Resolved::Value(value))
        }
    }
}

/// Exact-match read, decoded
fn try_exact(store: &Store, key: &[u8]) -> Result<Value> {
    let bytes = store.get_exact(key)?;
    codec::decode(&bytes)
}

/// Prefix scan, each value decoded in the engine's key order
fn scan_prefix(store: &Store, prefix: &[u8]) -> Result<Vec<Value>> {
    store
        .scan_prefix(prefix)?
        .iter()
        .map(|bytes| codec::decode(bytes))
        .collect()
}
