//! # Domain Events
//!
//! Events published after a conversion's effects commit. Transport is an
//! outbound concern ([`crate::ports::outbound::EventSink`]); these types
//! only define the payloads.

use bridge_types::{Address, Amount, ConversionId};
use serde::{Deserialize, Serialize};

/// Events emitted by the conversion engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionEvent {
    /// Tokens left the managed ledger.
    ConversionOut {
        /// Account whose tokens were pulled.
        account: Address,
        /// Gross amount converted.
        amount: Amount,
        /// Identifier of the authorized request.
        conversion_id: ConversionId,
    },
    /// Tokens entered the managed ledger.
    ConversionIn {
        /// Account the net amount was minted to.
        recipient: Address,
        /// Gross amount converted.
        amount: Amount,
        /// Identifier of the authorized request.
        conversion_id: ConversionId,
    },
}
