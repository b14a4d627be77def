//! # Canonical Message Digests
//!
//! Deterministic packed encoding and keccak-256 digest of a conversion
//! request. The digest binds the direction tag, amount, counterparty,
//! conversion id, and the engine's own identity, so a signature is only
//! ever valid for one direction, one beneficiary, and one deployed
//! instance.

use super::entities::ConversionRequest;
use bridge_crypto::keccak256_concat;
use bridge_types::{encode_amount_be, Address, Hash};

/// Digest of a conversion request.
///
/// Layout of the packed preimage, in order:
/// direction tag, 32-byte big-endian amount, 20-byte counterparty,
/// 32-byte conversion id, 20-byte self identity. The attached native
/// payment is deliberately NOT part of the digest; the commission engine
/// validates it at call time against the active mode.
pub fn conversion_digest(request: &ConversionRequest, self_identity: &Address) -> Hash {
    let amount = encode_amount_be(request.amount);
    keccak256_concat(&[
        request.direction.wire_tag(),
        &amount,
        &request.counterparty,
        &request.conversion_id,
        self_identity,
    ])
}
