//! # Domain Layer
//!
//! Pure types and rules of the conversion engine. Nothing here touches a
//! port, performs IO, or holds a lock.

pub mod commission;
pub mod entities;
pub mod errors;
pub mod invariants;
pub mod message;
pub mod replay;
pub mod value_objects;

pub use commission::{compute_commission, CommissionBreakdown};
pub use entities::{ConversionDirection, ConversionReceipt, ConversionRequest};
pub use errors::{ConversionError, LedgerError};
pub use message::conversion_digest;
pub use replay::UsedDigests;
pub use value_objects::{CommissionMode, CommissionSettings, ConversionLimits, Ownership};
