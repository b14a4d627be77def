//! # Bridge Types
//!
//! Primitive types shared by every crate of the conversion engine.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: cross-crate primitives (addresses, hashes,
//!   conversion identifiers, amounts) are defined here and nowhere else.
//! - **Wire Compatibility**: the canonical byte encodings (20-byte accounts,
//!   32-byte identifiers, 32-byte big-endian amounts) match the settlement
//!   domain the engine bridges to.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entities;

pub use entities::{
    conversion_id_from_label, encode_amount_be, is_zero_address, short_hex, Address, Amount,
    ConversionId, Hash, TypeError, ZERO_ADDRESS,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
