//! # Domain Invariants
//!
//! Pure predicate checks over configuration snapshots. Each returns the
//! named failure of the rule it guards.

use super::errors::ConversionError;
use super::value_objects::ConversionLimits;
use bridge_types::Amount;

/// Invariant: limit ordering.
///
/// Every limits update must satisfy `min <= max <= max_supply`.
pub fn check_limit_ordering(
    min: Amount,
    max: Amount,
    max_supply: Amount,
) -> Result<(), ConversionError> {
    if min > max || max > max_supply {
        return Err(ConversionError::InvalidUpdateConfigurations {
            min,
            max,
            max_supply,
        });
    }
    Ok(())
}

/// Invariant: per-transaction amount bounds.
pub fn check_amount_within_limits(
    amount: Amount,
    limits: &ConversionLimits,
) -> Result<(), ConversionError> {
    if amount < limits.min_amount || amount > limits.max_amount {
        return Err(ConversionError::ViolationOfTxAmountLimits {
            amount,
            min: limits.min_amount,
            max: limits.max_amount,
        });
    }
    Ok(())
}

/// Invariant: cumulative supply cap (inbound conversions only).
///
/// The boundary `minted + amount == max_supply` is allowed; one unit more
/// is not. A sum that overflows the amount type cannot fit under any cap.
pub fn check_supply_cap(
    minted: Amount,
    amount: Amount,
    limits: &ConversionLimits,
) -> Result<(), ConversionError> {
    let exceeded = match minted.checked_add(amount) {
        Some(total) => total > limits.max_supply,
        None => true,
    };
    if exceeded {
        return Err(ConversionError::MintingMoreThanMaxSupply {
            minted,
            amount,
            max_supply: limits.max_supply,
        });
    }
    Ok(())
}

/// Invariant: beneficiary proportions sum to exactly 100.
pub fn check_proportion_sum(receiver: u8, bridge_owner: u8) -> Result<(), ConversionError> {
    if u16::from(receiver) + u16::from(bridge_owner) != 100 {
        return Err(ConversionError::InvalidProportionSum {
            receiver,
            bridge_owner,
        });
    }
    Ok(())
}
