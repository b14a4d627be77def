//! # Domain Value Objects
//!
//! Configuration state: conversion limits, commission settings, and the
//! two-step ownership record.

use super::errors::ConversionError;
use bridge_types::{Address, Amount};
use serde::{Deserialize, Serialize};

/// Per-transaction bounds and the cumulative supply cap.
///
/// Invariant: `min_amount <= max_amount <= max_supply`, enforced by every
/// update and at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionLimits {
    /// Smallest convertible amount.
    pub min_amount: Amount,
    /// Largest convertible amount.
    pub max_amount: Amount,
    /// Cap on cumulative minted supply for inbound conversions.
    pub max_supply: Amount,
}

/// The active commission mode. Exactly one variant is ever active;
/// switching variants structurally discards the parameters of the
/// previous mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommissionMode {
    /// No commission charged.
    #[default]
    Disabled,
    /// Commission as a fraction of the converted amount.
    PercentageOfTokens {
        /// Numerator of the fraction.
        percentage: Amount,
        /// Denominator of the fraction.
        offset_points: Amount,
    },
    /// Flat token commission, independent of the converted amount.
    FixedTokens {
        /// Commission withheld per conversion.
        amount: Amount,
    },
    /// Flat commission paid in the native currency, accrued in the vault.
    FixedNative {
        /// Required attached payment per conversion.
        amount: Amount,
    },
}

impl CommissionMode {
    /// Whether any commission is currently charged.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, CommissionMode::Disabled)
    }
}

/// Commission configuration: the active mode, the beneficiary split, and
/// the immutable native-commission ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionSettings {
    /// The active mode.
    pub mode: CommissionMode,
    /// Receiver share of token commissions, in percent.
    pub receiver_proportion: u8,
    /// Bridge-owner share of token commissions, in percent.
    pub bridge_owner_proportion: u8,
    /// Commission receiver (also the only account that may claim the
    /// native vault).
    pub receiver: Address,
    /// Bridge owner beneficiary.
    pub bridge_owner: Address,
    /// Ceiling for the fixed native commission. Set once at
    /// construction, never zero, never updated.
    pub fixed_native_limit: Amount,
}

/// Two-step ownership: a transfer stages a pending owner, who must
/// accept before gaining control. Direct owner mutation does not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    owner: Address,
    pending: Option<Address>,
}

impl Ownership {
    /// Start with an initial owner and no pending transfer.
    pub fn new(owner: Address) -> Self {
        Self {
            owner,
            pending: None,
        }
    }

    /// Current owner.
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Staged owner, if a transfer is in flight.
    pub fn pending(&self) -> Option<Address> {
        self.pending
    }

    /// Gate an administrative call on the current owner.
    pub fn ensure_owner(&self, caller: &Address) -> Result<(), ConversionError> {
        if *caller != self.owner {
            return Err(ConversionError::CallerIsNotOwner);
        }
        Ok(())
    }

    /// Stage a transfer to a new owner. Owner-gated; overwrites any
    /// previously staged transfer.
    pub fn begin_transfer(
        &mut self,
        caller: &Address,
        new_owner: Address,
    ) -> Result<(), ConversionError> {
        self.ensure_owner(caller)?;
        self.pending = Some(new_owner);
        Ok(())
    }

    /// Complete a staged transfer. Only the pending owner may accept.
    pub fn accept(&mut self, caller: &Address) -> Result<(), ConversionError> {
        match self.pending {
            Some(pending) if pending == *caller => {
                self.owner = pending;
                self.pending = None;
                Ok(())
            }
            _ => Err(ConversionError::CallerIsNotPendingOwner),
        }
    }
}
