//! # Outbound Ports (Driven Ports / SPI)
//!
//! Traits for the dependencies this engine drives: the token ledger it
//! converts against and the sink its events go to.

use crate::domain::errors::LedgerError;
use crate::events::ConversionEvent;
use bridge_types::{Address, Amount};
use async_trait::async_trait;

/// One balance-affecting ledger operation.
///
/// Actor accounts (`spender`, `minter`) are explicit because the ledger
/// authorizes pulls by allowance and mints by role, and the engine acts
/// under its own identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LedgerOp {
    /// Pull tokens from an account under a previously granted allowance.
    TransferFrom {
        /// Account consuming the allowance.
        spender: Address,
        /// Account the tokens leave.
        from: Address,
        /// Account the tokens arrive at.
        to: Address,
        /// Amount moved.
        amount: Amount,
    },
    /// Move tokens out of an account's own balance.
    Transfer {
        /// Account the tokens leave.
        from: Address,
        /// Account the tokens arrive at.
        to: Address,
        /// Amount moved.
        amount: Amount,
    },
    /// Create new tokens. Requires the minter role.
    Mint {
        /// Account exercising the minter role.
        minter: Address,
        /// Account the tokens are created in.
        to: Address,
        /// Amount created.
        amount: Amount,
    },
}

/// Gateway to the fungible-token ledger.
///
/// `apply` is the engine's only balance-affecting entry point and MUST be
/// atomic: either every operation in the batch takes effect or none does.
/// The engine relies on this to guarantee that a failed conversion leaves
/// no partial transfer behind.
#[async_trait]
pub trait TokenLedger: Send + Sync {
    /// Current balance of an account.
    async fn balance_of(&self, account: Address) -> Result<Amount, LedgerError>;

    /// Cumulative amount ever minted on this ledger.
    async fn minted_total(&self) -> Result<Amount, LedgerError>;

    /// Apply a batch of operations atomically.
    async fn apply(&self, ops: &[LedgerOp]) -> Result<(), LedgerError>;
}

/// Sink for domain events.
///
/// Called only after the effects of the corresponding call have
/// committed; implementations must not fail the call.
pub trait EventSink: Send + Sync {
    /// Publish one event.
    fn publish(&self, event: ConversionEvent);
}
