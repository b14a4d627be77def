//! # Core Primitives
//!
//! Account addresses, digests, conversion identifiers, and value amounts.

use thiserror::Error;

/// 20-byte account address (last 20 bytes of keccak256(pubkey)).
pub type Address = [u8; 20];

/// 256-bit digest.
pub type Hash = [u8; 32];

/// Caller-chosen opaque 32-byte conversion identifier.
pub type ConversionId = [u8; 32];

/// Token or native-currency amount.
///
/// 128 bits cover every realistic token quantity; all arithmetic on
/// amounts in the engine is checked, never wrapping.
pub type Amount = u128;

/// The all-zero address. Never a valid beneficiary.
pub const ZERO_ADDRESS: Address = [0u8; 20];

/// Errors from primitive decoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TypeError {
    /// A label does not fit the fixed-width identifier encoding.
    #[error("label too long for a 32-byte identifier: {0} bytes")]
    LabelTooLong(usize),
}

/// Check whether an address is the zero address.
pub fn is_zero_address(address: &Address) -> bool {
    *address == ZERO_ADDRESS
}

/// Widen an amount to the canonical 32-byte big-endian encoding.
///
/// The settlement domain encodes amounts as 256-bit words; the upper
/// 16 bytes are always zero for a 128-bit amount.
pub fn encode_amount_be(amount: Amount) -> [u8; 32] {
    let mut out = [0u8; 32];
    out[16..].copy_from_slice(&amount.to_be_bytes());
    out
}

/// Build a conversion identifier from a short ASCII label, right-padded
/// with zero bytes.
///
/// Mirrors the fixed-width string convention used by off-chain tooling
/// when it mints human-readable conversion ids.
pub fn conversion_id_from_label(label: &str) -> Result<ConversionId, TypeError> {
    let bytes = label.as_bytes();
    if bytes.len() > 32 {
        return Err(TypeError::LabelTooLong(bytes.len()));
    }
    let mut id = [0u8; 32];
    id[..bytes.len()].copy_from_slice(bytes);
    Ok(id)
}

/// Abbreviated hex rendering for log lines (first four bytes).
pub fn short_hex(bytes: &[u8]) -> String {
    let head = &bytes[..bytes.len().min(4)];
    format!("0x{}..", hex::encode(head))
}
