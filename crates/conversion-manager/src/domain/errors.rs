//! # Domain Errors
//!
//! Every failure of the conversion engine. All errors are terminal for the
//! call that raised them; nothing is retried internally, and a failed call
//! leaves no partial state behind.

use bridge_types::{Address, Amount};
use thiserror::Error;

/// Failures raised by the ledger collaborator.
///
/// These surface to callers wrapped in
/// [`ConversionError::ConversionFailed`] /
/// [`ConversionError::ConversionMintFailed`] with the original error as
/// source, so the collaborator's diagnosis is never lost.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// The ledger is paused; transfers and mints are suspended.
    #[error("Ledger is paused")]
    Paused,

    /// An account holds less than the operation requires.
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        /// Account short of funds.
        account: Address,
        /// Amount the operation needed.
        required: Amount,
        /// Amount actually held.
        available: Amount,
    },

    /// The spender's allowance does not cover the pull.
    #[error("Insufficient allowance: required {required}, approved {approved}")]
    InsufficientAllowance {
        /// Account whose funds were to be pulled.
        owner: Address,
        /// Account doing the pulling.
        spender: Address,
        /// Amount the operation needed.
        required: Amount,
        /// Amount actually approved.
        approved: Amount,
    },

    /// The minting account has not been granted the minter role.
    #[error("Account lacks the minter role")]
    NotMinter {
        /// The account that attempted to mint.
        account: Address,
    },

    /// Minting would overflow the ledger's supply counter.
    #[error("Supply counter overflow")]
    SupplyOverflow,
}

/// Failures of conversion and administrative operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The request was not signed by the configured authorizer, or the
    /// signature is malformed.
    #[error("Request is not authorized by the conversion authorizer")]
    InvalidRequestOrSignature,

    /// The signed request's digest has already been consumed.
    #[error("Signature already used")]
    UsedSignature,

    /// Amount outside the configured per-transaction bounds.
    #[error("Amount {amount} violates tx limits [{min}, {max}]")]
    ViolationOfTxAmountLimits {
        /// Requested amount.
        amount: Amount,
        /// Configured minimum.
        min: Amount,
        /// Configured maximum.
        max: Amount,
    },

    /// Minting the requested amount would exceed the supply cap.
    #[error("Minting {amount} over {minted} already minted exceeds max supply {max_supply}")]
    MintingMoreThanMaxSupply {
        /// Supply already minted.
        minted: Amount,
        /// Requested amount.
        amount: Amount,
        /// Configured cap.
        max_supply: Amount,
    },

    /// Fixed native commission above the construction-time limit.
    #[error("Fixed native commission {amount} exceeds limit {limit}")]
    ViolationOfFixedNativeTokensLimit {
        /// Requested commission.
        amount: Amount,
        /// Immutable limit.
        limit: Amount,
    },

    /// Limit update violating `min <= max <= max_supply`.
    #[error("Invalid configurations: min {min}, max {max}, max supply {max_supply}")]
    InvalidUpdateConfigurations {
        /// Proposed minimum.
        min: Amount,
        /// Proposed maximum.
        max: Amount,
        /// Proposed supply cap.
        max_supply: Amount,
    },

    /// Beneficiary proportions that do not sum to 100.
    #[error("Proportions {receiver} + {bridge_owner} must sum to 100")]
    InvalidProportionSum {
        /// Receiver share in percent.
        receiver: u8,
        /// Bridge-owner share in percent.
        bridge_owner: u8,
    },

    /// Percentage commission above the 100% cap.
    #[error("Percentage {percentage}/{offset_points} exceeds the commission cap")]
    PercentageLimitExceeded {
        /// Proposed numerator.
        percentage: Amount,
        /// Proposed offset points.
        offset_points: Amount,
    },

    /// Enabling percentage commission with a zero parameter.
    #[error("Enabling zero token percentage commission")]
    EnablingZeroTokenPercentageCommission,

    /// Enabling native commission with a zero amount.
    #[error("Enabling zero fixed native token commission")]
    EnablingZeroFixedNativeTokenCommission,

    /// Construction with a zero native commission limit.
    #[error("Zero fixed native tokens commission limit")]
    ZeroFixedNativeTokensCommissionLimit,

    /// A beneficiary address must not be the zero address.
    #[error("Zero address")]
    ZeroAddress,

    /// Attached native payment below the configured commission.
    #[error("Insufficient native commission: attached {attached}, required {required}")]
    InsufficientNativeCommission {
        /// Payment attached to the call.
        attached: Amount,
        /// Commission the active mode requires.
        required: Amount,
    },

    /// A flat token commission larger than the converted amount.
    #[error("Commission {commission} exceeds converted amount {amount}")]
    CommissionExceedsAmount {
        /// Computed token commission.
        commission: Amount,
        /// Gross conversion amount.
        amount: Amount,
    },

    /// Checked arithmetic overflowed.
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,

    /// The ledger collaborator rejected the outbound transfer batch.
    #[error("Conversion failed: {0}")]
    ConversionFailed(#[source] LedgerError),

    /// The ledger collaborator rejected the inbound mint batch.
    #[error("Conversion mint failed: {0}")]
    ConversionMintFailed(#[source] LedgerError),

    /// Claiming from an empty native vault.
    #[error("Not enough balance")]
    NotEnoughBalance,

    /// Native commission claimed by anyone but the configured receiver.
    #[error("Unauthorized commission receiver")]
    UnauthorizedCommissionReceiver,

    /// An administrative call from a non-owner.
    #[error("Caller is not the owner")]
    CallerIsNotOwner,

    /// Ownership acceptance from an account that is not the pending owner.
    #[error("Caller is not the pending owner")]
    CallerIsNotPendingOwner,
}
