//! # Ports
//!
//! Hexagonal boundaries: the inbound API this engine exposes and the
//! outbound dependencies it drives.

pub mod inbound;
pub mod outbound;

pub use inbound::ConversionApi;
pub use outbound::{EventSink, LedgerOp, TokenLedger};
