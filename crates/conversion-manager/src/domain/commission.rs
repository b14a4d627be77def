//! # Commission Engine
//!
//! Pure computation of the fee a conversion owes and how it splits
//! between the two beneficiaries, under exactly one active mode.

use super::errors::ConversionError;
use super::value_objects::{CommissionMode, CommissionSettings};
use bridge_types::Amount;
use serde::{Deserialize, Serialize};

/// Result of a commission computation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    /// Token commission withheld from the conversion.
    pub token_commission: Amount,
    /// Native payment accepted into the vault (the full attached value).
    pub native_accepted: Amount,
    /// Receiver's portion of the token commission.
    pub receiver_share: Amount,
    /// Bridge owner's portion of the token commission.
    pub bridge_owner_share: Amount,
}

/// Compute the commission a conversion owes.
///
/// Shares are floor divisions; the truncation remainder accrues to the
/// bridge owner. This rounding bias is a documented property of the
/// split, not corrected.
///
/// In native mode the token commission is zero and the attached payment
/// must cover the configured amount; underpayment fails
/// [`ConversionError::InsufficientNativeCommission`]. Overpayment is
/// accepted and the full attached value is retained.
pub fn compute_commission(
    settings: &CommissionSettings,
    gross: Amount,
    native_payment: Amount,
) -> Result<CommissionBreakdown, ConversionError> {
    let token_commission = match settings.mode {
        CommissionMode::Disabled => 0,
        CommissionMode::PercentageOfTokens {
            percentage,
            offset_points,
        } => {
            if offset_points == 0 {
                return Err(ConversionError::ArithmeticOverflow);
            }
            gross
                .checked_mul(percentage)
                .ok_or(ConversionError::ArithmeticOverflow)?
                / offset_points
        }
        CommissionMode::FixedTokens { amount } => amount,
        CommissionMode::FixedNative { amount } => {
            if native_payment < amount {
                return Err(ConversionError::InsufficientNativeCommission {
                    attached: native_payment,
                    required: amount,
                });
            }
            0
        }
    };

    let receiver_share = token_commission
        .checked_mul(Amount::from(settings.receiver_proportion))
        .ok_or(ConversionError::ArithmeticOverflow)?
        / 100;
    let bridge_owner_share = token_commission - receiver_share;

    Ok(CommissionBreakdown {
        token_commission,
        native_accepted: native_payment,
        receiver_share,
        bridge_owner_share,
    })
}
