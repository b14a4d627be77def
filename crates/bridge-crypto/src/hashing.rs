//! # Keccak-256 Hashing
//!
//! One-shot and multi-part Keccak-256, the digest function of the
//! settlement domain this engine authorizes conversions against.

use bridge_types::Hash;
use sha3::{Digest, Keccak256};

/// Keccak-256 hash of a byte slice.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// Keccak-256 over the concatenation of several inputs.
///
/// Equivalent to hashing the packed encoding without materializing an
/// intermediate buffer.
pub fn keccak256_concat(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for input in inputs {
        hasher.update(input);
    }
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}
