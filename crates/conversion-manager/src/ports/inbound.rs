//! # Inbound Ports (Driving Ports / API)
//!
//! The public surface of the conversion engine: the two conversion
//! operations, the owner-gated administrative mutators, and the read
//! accessors.
//!
//! Caller identity is an explicit parameter on every operation; the
//! hosting environment supplies it, and the engine gates on it (owner for
//! administration, receiver for the native claim, authorizer signature
//! for conversions).

use crate::domain::entities::ConversionReceipt;
use crate::domain::errors::ConversionError;
use crate::domain::value_objects::{CommissionSettings, ConversionLimits};
use bridge_crypto::EcdsaSignature;
use bridge_types::{Address, Amount, ConversionId};
use async_trait::async_trait;

/// Primary conversion API.
///
/// Implementations must be thread-safe (`Send + Sync`) and must execute
/// each call atomically: all state changes of a call commit together or
/// not at all.
#[async_trait]
pub trait ConversionApi: Send + Sync {
    // =========================================================================
    // Conversions
    // =========================================================================

    /// Convert tokens out of the managed ledger.
    ///
    /// Pulls `amount` from `caller`, withholds the active commission, and
    /// consumes the authorizer-signed digest binding
    /// (out, amount, caller, conversion_id, self).
    async fn conversion_out(
        &self,
        caller: Address,
        amount: Amount,
        conversion_id: ConversionId,
        signature: EcdsaSignature,
        native_payment: Amount,
    ) -> Result<ConversionReceipt, ConversionError>;

    /// Convert tokens into the managed ledger.
    ///
    /// Mints `amount` less the active token commission to `recipient`.
    /// The digest binds the recipient, not the caller, so a relayer may
    /// submit on a beneficiary's behalf.
    async fn conversion_in(
        &self,
        caller: Address,
        recipient: Address,
        amount: Amount,
        conversion_id: ConversionId,
        signature: EcdsaSignature,
        native_payment: Amount,
    ) -> Result<ConversionReceipt, ConversionError>;

    // =========================================================================
    // Native commission vault
    // =========================================================================

    /// Claim the entire accrued native commission balance.
    ///
    /// Only the configured commission receiver may claim; returns the
    /// amount released.
    async fn claim_fixed_native_tokens_commission(
        &self,
        caller: Address,
    ) -> Result<Amount, ConversionError>;

    // =========================================================================
    // Administration (owner-gated)
    // =========================================================================

    /// Replace the conversion authorizer.
    async fn update_authorizer(
        &self,
        caller: Address,
        authorizer: Address,
    ) -> Result<(), ConversionError>;

    /// Replace the per-transaction bounds and supply cap.
    async fn update_configurations(
        &self,
        caller: Address,
        min: Amount,
        max: Amount,
        max_supply: Amount,
    ) -> Result<(), ConversionError>;

    /// Replace the beneficiary split proportions.
    async fn update_commission_proportions(
        &self,
        caller: Address,
        receiver: u8,
        bridge_owner: u8,
    ) -> Result<(), ConversionError>;

    /// Replace the commission receiver address.
    async fn update_receiver_commission(
        &self,
        caller: Address,
        receiver: Address,
    ) -> Result<(), ConversionError>;

    /// Replace the bridge owner address.
    async fn update_bridge_owner(
        &self,
        caller: Address,
        bridge_owner: Address,
    ) -> Result<(), ConversionError>;

    /// Activate percentage commission, discarding the other modes'
    /// parameters.
    async fn enable_and_update_percentage_tokens_commission(
        &self,
        caller: Address,
        percentage: Amount,
        offset_points: Amount,
    ) -> Result<(), ConversionError>;

    /// Activate flat token commission, discarding the other modes'
    /// parameters.
    async fn enable_and_update_fixed_tokens_commission(
        &self,
        caller: Address,
        amount: Amount,
    ) -> Result<(), ConversionError>;

    /// Activate flat native commission, discarding the other modes'
    /// parameters.
    async fn enable_and_update_fixed_native_tokens_commission(
        &self,
        caller: Address,
        amount: Amount,
    ) -> Result<(), ConversionError>;

    /// Disable commission entirely.
    async fn disable_commission(&self, caller: Address) -> Result<(), ConversionError>;

    /// Stage an ownership transfer to `new_owner`.
    async fn transfer_ownership(
        &self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ConversionError>;

    /// Complete a staged ownership transfer.
    async fn accept_ownership(&self, caller: Address) -> Result<(), ConversionError>;

    // =========================================================================
    // Read accessors
    // =========================================================================

    /// The configured conversion authorizer.
    async fn conversion_authorizer(&self) -> Address;

    /// Current limits (min, max, max supply).
    async fn conversion_configurations(&self) -> ConversionLimits;

    /// Current commission settings.
    async fn commission_settings(&self) -> CommissionSettings;

    /// Current beneficiary addresses (receiver, bridge owner).
    async fn commission_receiver_addresses(&self) -> (Address, Address);

    /// Accrued native commission held by the vault.
    async fn native_vault_balance(&self) -> Amount;

    /// Current owner.
    async fn owner(&self) -> Address;

    /// Staged pending owner, if any.
    async fn pending_owner(&self) -> Option<Address>;
}
