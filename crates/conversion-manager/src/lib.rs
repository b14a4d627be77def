//! # Conversion Manager
//!
//! Authorizes and accounts for bidirectional conversions of a fungible
//! token between a managed ledger and an external settlement domain,
//! gated by a single off-chain authorizer's recoverable signature.
//!
//! ## Purpose
//!
//! - Canonical message construction and collision-resistant digests
//! - Recoverable-signature authorization against a configured signer
//! - Permanent replay protection over consumed digests
//! - Amount and supply limit enforcement
//! - A three-mode commission engine with validated administrative updates
//! - A native-currency commission vault with receiver-gated claims
//!
//! ## Module Structure
//!
//! ```text
//! conversion-manager/
//! ├── domain/          # Request/limit/commission types, digests, invariants
//! ├── ports/           # ConversionApi (inbound), TokenLedger + EventSink (outbound)
//! ├── adapters/        # In-memory ledger and event recorder
//! └── service.rs       # The orchestrator and administrative surface
//! ```
//!
//! Every conversion call is atomic: ledger effects are applied as one
//! all-or-nothing batch, and the replay mark, vault accrual, and event
//! publication happen only after that batch commits.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod service;

// Re-exports
pub use domain::commission::{compute_commission, CommissionBreakdown};
pub use domain::entities::{ConversionDirection, ConversionReceipt, ConversionRequest};
pub use domain::errors::{ConversionError, LedgerError};
pub use domain::invariants::{
    check_amount_within_limits, check_limit_ordering, check_proportion_sum, check_supply_cap,
};
pub use domain::message::conversion_digest;
pub use domain::replay::UsedDigests;
pub use domain::value_objects::{CommissionMode, CommissionSettings, ConversionLimits, Ownership};
pub use events::ConversionEvent;
pub use ports::inbound::ConversionApi;
pub use ports::outbound::{EventSink, LedgerOp, TokenLedger};
pub use service::{ConversionService, ConverterConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
