//! # Domain Entities
//!
//! Conversion requests and the receipts the engine hands back.

use bridge_types::{Address, Amount, ConversionId, Hash};
use serde::{Deserialize, Serialize};

/// Direction of a conversion relative to the managed ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionDirection {
    /// Tokens leave the managed ledger toward the settlement domain.
    Out,
    /// Tokens enter the managed ledger from the settlement domain.
    In,
}

impl ConversionDirection {
    /// Canonical ASCII tag bound into the message digest.
    ///
    /// These byte strings are wire constants shared with the off-chain
    /// authorizer; changing them invalidates every outstanding signature.
    pub fn wire_tag(&self) -> &'static [u8] {
        match self {
            ConversionDirection::Out => b"__conversionOut",
            ConversionDirection::In => b"__conversionIn",
        }
    }
}

/// A conversion request as seen by the digest codec.
///
/// `counterparty` is the caller for outbound conversions and the
/// recipient for inbound ones; binding it into the digest pins each
/// signature to one beneficiary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Conversion direction.
    pub direction: ConversionDirection,
    /// Gross token amount.
    pub amount: Amount,
    /// Account the conversion settles against.
    pub counterparty: Address,
    /// Caller-chosen opaque identifier.
    pub conversion_id: ConversionId,
    /// Native currency attached to the call (zero when none).
    pub native_payment: Amount,
}

/// Accounting summary returned by a successful conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReceipt {
    /// Digest consumed by this conversion.
    pub digest: Hash,
    /// Gross amount converted.
    pub amount: Amount,
    /// Token commission withheld.
    pub token_commission: Amount,
    /// Portion of the commission sent to the commission receiver.
    pub receiver_share: Amount,
    /// Portion of the commission sent to the bridge owner.
    pub bridge_owner_share: Amount,
    /// Native currency retained in the vault.
    pub native_accepted: Amount,
}
