//! # Replay Guard
//!
//! The grow-only set of consumed message digests.
//!
//! This set is a permanent audit record, not a cache: entries are never
//! evicted, because evicting one would re-authorize the signature it
//! retired. Memory growth is bounded by the number of successful
//! conversions over the component's lifetime.

use bridge_types::Hash;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Permanent set of consumed digests.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UsedDigests {
    used: HashSet<Hash>,
}

impl UsedDigests {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a digest has already been consumed.
    pub fn is_used(&self, digest: &Hash) -> bool {
        self.used.contains(digest)
    }

    /// Consume a digest. Must only be called after the effects of the
    /// conversion it belongs to have committed.
    pub fn mark_used(&mut self, digest: Hash) {
        self.used.insert(digest);
    }

    /// Number of digests consumed so far.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Whether no digest has been consumed yet.
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
