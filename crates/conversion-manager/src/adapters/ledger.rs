//! # In-Memory Token Ledger
//!
//! Implements the [`TokenLedger`] port with balances, ERC-20-style
//! allowances, a pause switch, a minter-role grant, and a cumulative
//! supply counter. Batches apply atomically: every operation is executed
//! against a scratch copy of the state, which replaces the live state
//! only when the whole batch succeeds.

use crate::domain::errors::LedgerError;
use crate::ports::outbound::{LedgerOp, TokenLedger};
use bridge_types::{Address, Amount};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// In-memory fungible-token ledger.
pub struct InMemoryTokenLedger {
    state: RwLock<LedgerState>,
}

#[derive(Clone, Debug, Default)]
struct LedgerState {
    balances: HashMap<Address, Amount>,
    /// (owner, spender) -> approved amount.
    allowances: HashMap<(Address, Address), Amount>,
    minters: HashSet<Address>,
    minted_total: Amount,
    paused: bool,
}

impl InMemoryTokenLedger {
    /// Create an empty, unpaused ledger.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
        }
    }

    /// Mint a starting balance directly (test/deployment seeding).
    /// Counts toward the minted total like any other mint.
    pub fn seed_balance(&self, account: Address, amount: Amount) {
        let mut state = self.state.write();
        *state.balances.entry(account).or_insert(0) += amount;
        state.minted_total += amount;
    }

    /// Approve a spender to pull from an owner's balance.
    pub fn approve(&self, owner: Address, spender: Address, amount: Amount) {
        self.state.write().allowances.insert((owner, spender), amount);
    }

    /// Grant the minter role to an account.
    pub fn grant_minter(&self, account: Address) {
        self.state.write().minters.insert(account);
    }

    /// Suspend transfers and mints.
    pub fn pause(&self) {
        self.state.write().paused = true;
        debug!("[ledger] paused");
    }

    /// Resume transfers and mints.
    pub fn unpause(&self) {
        self.state.write().paused = false;
        debug!("[ledger] unpaused");
    }
}

impl Default for InMemoryTokenLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn debit(state: &mut LedgerState, account: &Address, amount: Amount) -> Result<(), LedgerError> {
    let available = state.balances.get(account).copied().unwrap_or(0);
    if available < amount {
        return Err(LedgerError::InsufficientBalance {
            account: *account,
            required: amount,
            available,
        });
    }
    state.balances.insert(*account, available - amount);
    Ok(())
}

fn credit(state: &mut LedgerState, account: &Address, amount: Amount) -> Result<(), LedgerError> {
    let balance = state.balances.entry(*account).or_insert(0);
    *balance = balance
        .checked_add(amount)
        .ok_or(LedgerError::SupplyOverflow)?;
    Ok(())
}

fn apply_one(state: &mut LedgerState, op: &LedgerOp) -> Result<(), LedgerError> {
    match *op {
        LedgerOp::TransferFrom {
            spender,
            from,
            to,
            amount,
        } => {
            let key = (from, spender);
            let approved = state.allowances.get(&key).copied().unwrap_or(0);
            if approved < amount {
                return Err(LedgerError::InsufficientAllowance {
                    owner: from,
                    spender,
                    required: amount,
                    approved,
                });
            }
            debit(state, &from, amount)?;
            credit(state, &to, amount)?;
            state.allowances.insert(key, approved - amount);
            Ok(())
        }
        LedgerOp::Transfer { from, to, amount } => {
            debit(state, &from, amount)?;
            credit(state, &to, amount)
        }
        LedgerOp::Mint { minter, to, amount } => {
            if !state.minters.contains(&minter) {
                return Err(LedgerError::NotMinter { account: minter });
            }
            state.minted_total = state
                .minted_total
                .checked_add(amount)
                .ok_or(LedgerError::SupplyOverflow)?;
            credit(state, &to, amount)
        }
    }
}

#[async_trait]
impl TokenLedger for InMemoryTokenLedger {
    async fn balance_of(&self, account: Address) -> Result<Amount, LedgerError> {
        Ok(self.state.read().balances.get(&account).copied().unwrap_or(0))
    }

    async fn minted_total(&self) -> Result<Amount, LedgerError> {
        Ok(self.state.read().minted_total)
    }

    async fn apply(&self, ops: &[LedgerOp]) -> Result<(), LedgerError> {
        let mut state = self.state.write();
        if state.paused {
            return Err(LedgerError::Paused);
        }

        // Scratch copy: the live state changes only if every op succeeds.
        let mut working = state.clone();
        for op in ops {
            apply_one(&mut working, op)?;
        }

        debug!("[ledger] applied batch of {} ops", ops.len());
        *state = working;
        Ok(())
    }
}
