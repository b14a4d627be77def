//! # Conversion Service
//!
//! Application service implementing the [`ConversionApi`] port: it
//! sequences digest construction, signature verification, replay and
//! limit checks, and commission accounting around atomic batches against
//! the ledger collaborator, and owns the configuration store and the
//! native commission vault.
//!
//! ## Atomicity
//!
//! Every fallible step of a conversion runs before the first effect. The
//! ledger batch is all-or-nothing by the port contract; the replay mark
//! and vault accrual are applied only after the batch commits; the event
//! is published last. A single async mutex serializes calls per service
//! instance, supplying the total ordering the hosting ledger's
//! transaction scheduler provided in the original deployment.

use crate::domain::commission::compute_commission;
use crate::domain::entities::{ConversionDirection, ConversionReceipt, ConversionRequest};
use crate::domain::errors::ConversionError;
use crate::domain::invariants::{
    check_amount_within_limits, check_limit_ordering, check_proportion_sum, check_supply_cap,
};
use crate::domain::message::conversion_digest;
use crate::domain::replay::UsedDigests;
use crate::domain::value_objects::{CommissionMode, CommissionSettings, ConversionLimits, Ownership};
use crate::events::ConversionEvent;
use crate::ports::inbound::ConversionApi;
use crate::ports::outbound::{EventSink, LedgerOp, TokenLedger};
use bridge_crypto::{signed_message_hash, verify_signer, EcdsaSignature};
use bridge_types::{is_zero_address, short_hex, Address, Amount, ConversionId};
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

/// Construction-time configuration of a conversion service.
#[derive(Clone, Copy, Debug)]
pub struct ConverterConfig {
    /// Initial owner of the administrative surface.
    pub owner: Address,
    /// Initial conversion authorizer.
    pub authorizer: Address,
    /// Initial per-transaction bounds and supply cap.
    pub limits: ConversionLimits,
    /// Receiver share of token commissions, in percent.
    pub receiver_proportion: u8,
    /// Bridge-owner share of token commissions, in percent.
    pub bridge_owner_proportion: u8,
    /// Immutable ceiling for the fixed native commission. Never zero.
    pub fixed_native_limit: Amount,
    /// Commission receiver address.
    pub receiver: Address,
    /// Bridge owner address.
    pub bridge_owner: Address,
}

/// Mutable state behind the call-serializing mutex.
struct ManagerState {
    authorizer: Address,
    limits: ConversionLimits,
    commission: CommissionSettings,
    ownership: Ownership,
    used: UsedDigests,
    native_vault: Amount,
}

/// The conversion engine.
pub struct ConversionService<L, E> {
    self_identity: Address,
    ledger: L,
    events: E,
    state: Mutex<ManagerState>,
}

impl<L: TokenLedger, E: EventSink> ConversionService<L, E> {
    /// Build a service, validating the configuration invariants.
    ///
    /// Commission starts disabled; a mode is activated through the
    /// administrative surface.
    pub fn new(
        self_identity: Address,
        ledger: L,
        events: E,
        config: ConverterConfig,
    ) -> Result<Self, ConversionError> {
        if config.fixed_native_limit == 0 {
            return Err(ConversionError::ZeroFixedNativeTokensCommissionLimit);
        }
        check_proportion_sum(config.receiver_proportion, config.bridge_owner_proportion)?;
        if is_zero_address(&config.receiver) || is_zero_address(&config.bridge_owner) {
            return Err(ConversionError::ZeroAddress);
        }
        check_limit_ordering(
            config.limits.min_amount,
            config.limits.max_amount,
            config.limits.max_supply,
        )?;

        Ok(Self {
            self_identity,
            ledger,
            events,
            state: Mutex::new(ManagerState {
                authorizer: config.authorizer,
                limits: config.limits,
                commission: CommissionSettings {
                    mode: CommissionMode::Disabled,
                    receiver_proportion: config.receiver_proportion,
                    bridge_owner_proportion: config.bridge_owner_proportion,
                    receiver: config.receiver,
                    bridge_owner: config.bridge_owner,
                    fixed_native_limit: config.fixed_native_limit,
                },
                ownership: Ownership::new(config.owner),
                used: UsedDigests::new(),
                native_vault: 0,
            }),
        })
    }

    /// The identity this service acts under on the ledger.
    pub fn self_identity(&self) -> Address {
        self.self_identity
    }

    /// The ledger collaborator.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// The event sink.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Number of digests consumed over this service's lifetime.
    pub async fn used_digest_count(&self) -> usize {
        self.state.lock().await.used.len()
    }

    /// Verify, replay-check, and bound-check a request; returns its digest.
    fn authorize(
        state: &ManagerState,
        request: &ConversionRequest,
        self_identity: &Address,
        signature: &EcdsaSignature,
    ) -> Result<bridge_types::Hash, ConversionError> {
        let digest = conversion_digest(request, self_identity);

        if !verify_signer(&signed_message_hash(&digest), signature, &state.authorizer) {
            return Err(ConversionError::InvalidRequestOrSignature);
        }
        if state.used.is_used(&digest) {
            return Err(ConversionError::UsedSignature);
        }
        check_amount_within_limits(request.amount, &state.limits)?;

        Ok(digest)
    }
}

#[async_trait]
impl<L: TokenLedger, E: EventSink> ConversionApi for ConversionService<L, E> {
    async fn conversion_out(
        &self,
        caller: Address,
        amount: Amount,
        conversion_id: ConversionId,
        signature: EcdsaSignature,
        native_payment: Amount,
    ) -> Result<ConversionReceipt, ConversionError> {
        let mut state = self.state.lock().await;

        let request = ConversionRequest {
            direction: ConversionDirection::Out,
            amount,
            counterparty: caller,
            conversion_id,
            native_payment,
        };
        let digest = Self::authorize(&state, &request, &self.self_identity, &signature)?;

        let breakdown = compute_commission(&state.commission, amount, native_payment)?;
        let vault_after = state
            .native_vault
            .checked_add(breakdown.native_accepted)
            .ok_or(ConversionError::ArithmeticOverflow)?;

        let mut ops = vec![LedgerOp::TransferFrom {
            spender: self.self_identity,
            from: caller,
            to: self.self_identity,
            amount,
        }];
        if breakdown.receiver_share > 0 {
            ops.push(LedgerOp::Transfer {
                from: self.self_identity,
                to: state.commission.receiver,
                amount: breakdown.receiver_share,
            });
        }
        if breakdown.bridge_owner_share > 0 {
            ops.push(LedgerOp::Transfer {
                from: self.self_identity,
                to: state.commission.bridge_owner,
                amount: breakdown.bridge_owner_share,
            });
        }

        self.ledger
            .apply(&ops)
            .await
            .map_err(ConversionError::ConversionFailed)?;

        state.used.mark_used(digest);
        state.native_vault = vault_after;

        info!(
            "[converter] conversion out: account {} amount {} id {}",
            short_hex(&caller),
            amount,
            short_hex(&conversion_id)
        );
        self.events.publish(ConversionEvent::ConversionOut {
            account: caller,
            amount,
            conversion_id,
        });

        Ok(ConversionReceipt {
            digest,
            amount,
            token_commission: breakdown.token_commission,
            receiver_share: breakdown.receiver_share,
            bridge_owner_share: breakdown.bridge_owner_share,
            native_accepted: breakdown.native_accepted,
        })
    }

    async fn conversion_in(
        &self,
        caller: Address,
        recipient: Address,
        amount: Amount,
        conversion_id: ConversionId,
        signature: EcdsaSignature,
        native_payment: Amount,
    ) -> Result<ConversionReceipt, ConversionError> {
        let mut state = self.state.lock().await;

        // The digest binds the recipient, not the submitter, so a relayer
        // may deliver a beneficiary's authorized request.
        let request = ConversionRequest {
            direction: ConversionDirection::In,
            amount,
            counterparty: recipient,
            conversion_id,
            native_payment,
        };
        let digest = Self::authorize(&state, &request, &self.self_identity, &signature)?;

        let minted = self
            .ledger
            .minted_total()
            .await
            .map_err(ConversionError::ConversionMintFailed)?;
        check_supply_cap(minted, amount, &state.limits)?;

        let breakdown = compute_commission(&state.commission, amount, native_payment)?;
        let net = amount.checked_sub(breakdown.token_commission).ok_or(
            ConversionError::CommissionExceedsAmount {
                commission: breakdown.token_commission,
                amount,
            },
        )?;
        let vault_after = state
            .native_vault
            .checked_add(breakdown.native_accepted)
            .ok_or(ConversionError::ArithmeticOverflow)?;

        let mut ops = vec![LedgerOp::Mint {
            minter: self.self_identity,
            to: recipient,
            amount: net,
        }];
        if breakdown.receiver_share > 0 {
            ops.push(LedgerOp::Mint {
                minter: self.self_identity,
                to: state.commission.receiver,
                amount: breakdown.receiver_share,
            });
        }
        if breakdown.bridge_owner_share > 0 {
            ops.push(LedgerOp::Mint {
                minter: self.self_identity,
                to: state.commission.bridge_owner,
                amount: breakdown.bridge_owner_share,
            });
        }

        self.ledger
            .apply(&ops)
            .await
            .map_err(ConversionError::ConversionMintFailed)?;

        state.used.mark_used(digest);
        state.native_vault = vault_after;

        info!(
            "[converter] conversion in: recipient {} amount {} id {} submitted by {}",
            short_hex(&recipient),
            amount,
            short_hex(&conversion_id),
            short_hex(&caller)
        );
        self.events.publish(ConversionEvent::ConversionIn {
            recipient,
            amount,
            conversion_id,
        });

        Ok(ConversionReceipt {
            digest,
            amount,
            token_commission: breakdown.token_commission,
            receiver_share: breakdown.receiver_share,
            bridge_owner_share: breakdown.bridge_owner_share,
            native_accepted: breakdown.native_accepted,
        })
    }

    async fn claim_fixed_native_tokens_commission(
        &self,
        caller: Address,
    ) -> Result<Amount, ConversionError> {
        let mut state = self.state.lock().await;

        if caller != state.commission.receiver {
            return Err(ConversionError::UnauthorizedCommissionReceiver);
        }
        if state.native_vault == 0 {
            return Err(ConversionError::NotEnoughBalance);
        }

        let claimed = state.native_vault;
        state.native_vault = 0;

        info!(
            "[converter] native commission claimed: receiver {} amount {}",
            short_hex(&caller),
            claimed
        );
        Ok(claimed)
    }

    async fn update_authorizer(
        &self,
        caller: Address,
        authorizer: Address,
    ) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.ensure_owner(&caller)?;

        state.authorizer = authorizer;
        info!(
            "[converter] authorizer updated to {}",
            short_hex(&authorizer)
        );
        Ok(())
    }

    async fn update_configurations(
        &self,
        caller: Address,
        min: Amount,
        max: Amount,
        max_supply: Amount,
    ) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.ensure_owner(&caller)?;

        check_limit_ordering(min, max, max_supply)?;
        state.limits = ConversionLimits {
            min_amount: min,
            max_amount: max,
            max_supply,
        };
        info!(
            "[converter] limits updated: min {} max {} max supply {}",
            min, max, max_supply
        );
        Ok(())
    }

    async fn update_commission_proportions(
        &self,
        caller: Address,
        receiver: u8,
        bridge_owner: u8,
    ) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.ensure_owner(&caller)?;

        check_proportion_sum(receiver, bridge_owner)?;
        state.commission.receiver_proportion = receiver;
        state.commission.bridge_owner_proportion = bridge_owner;
        info!(
            "[converter] proportions updated: receiver {}% bridge owner {}%",
            receiver, bridge_owner
        );
        Ok(())
    }

    async fn update_receiver_commission(
        &self,
        caller: Address,
        receiver: Address,
    ) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.ensure_owner(&caller)?;

        if is_zero_address(&receiver) {
            return Err(ConversionError::ZeroAddress);
        }
        state.commission.receiver = receiver;
        info!(
            "[converter] commission receiver updated to {}",
            short_hex(&receiver)
        );
        Ok(())
    }

    async fn update_bridge_owner(
        &self,
        caller: Address,
        bridge_owner: Address,
    ) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.ensure_owner(&caller)?;

        if is_zero_address(&bridge_owner) {
            return Err(ConversionError::ZeroAddress);
        }
        state.commission.bridge_owner = bridge_owner;
        info!(
            "[converter] bridge owner updated to {}",
            short_hex(&bridge_owner)
        );
        Ok(())
    }

    async fn enable_and_update_percentage_tokens_commission(
        &self,
        caller: Address,
        percentage: Amount,
        offset_points: Amount,
    ) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.ensure_owner(&caller)?;

        if percentage == 0 || offset_points == 0 {
            return Err(ConversionError::EnablingZeroTokenPercentageCommission);
        }
        // Cap the fraction at 100%.
        if percentage > offset_points {
            return Err(ConversionError::PercentageLimitExceeded {
                percentage,
                offset_points,
            });
        }
        state.commission.mode = CommissionMode::PercentageOfTokens {
            percentage,
            offset_points,
        };
        info!(
            "[converter] percentage commission enabled: {}/{}",
            percentage, offset_points
        );
        Ok(())
    }

    async fn enable_and_update_fixed_tokens_commission(
        &self,
        caller: Address,
        amount: Amount,
    ) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.ensure_owner(&caller)?;

        state.commission.mode = CommissionMode::FixedTokens { amount };
        info!("[converter] fixed token commission enabled: {}", amount);
        Ok(())
    }

    async fn enable_and_update_fixed_native_tokens_commission(
        &self,
        caller: Address,
        amount: Amount,
    ) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.ensure_owner(&caller)?;

        if amount == 0 {
            return Err(ConversionError::EnablingZeroFixedNativeTokenCommission);
        }
        if amount > state.commission.fixed_native_limit {
            return Err(ConversionError::ViolationOfFixedNativeTokensLimit {
                amount,
                limit: state.commission.fixed_native_limit,
            });
        }
        state.commission.mode = CommissionMode::FixedNative { amount };
        info!("[converter] fixed native commission enabled: {}", amount);
        Ok(())
    }

    async fn disable_commission(&self, caller: Address) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.ensure_owner(&caller)?;

        state.commission.mode = CommissionMode::Disabled;
        info!("[converter] commission disabled");
        Ok(())
    }

    async fn transfer_ownership(
        &self,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.begin_transfer(&caller, new_owner)?;
        info!(
            "[converter] ownership transfer staged for {}",
            short_hex(&new_owner)
        );
        Ok(())
    }

    async fn accept_ownership(&self, caller: Address) -> Result<(), ConversionError> {
        let mut state = self.state.lock().await;
        state.ownership.accept(&caller)?;
        info!("[converter] ownership accepted by {}", short_hex(&caller));
        Ok(())
    }

    async fn conversion_authorizer(&self) -> Address {
        self.state.lock().await.authorizer
    }

    async fn conversion_configurations(&self) -> ConversionLimits {
        self.state.lock().await.limits
    }

    async fn commission_settings(&self) -> CommissionSettings {
        self.state.lock().await.commission
    }

    async fn commission_receiver_addresses(&self) -> (Address, Address) {
        let state = self.state.lock().await;
        (state.commission.receiver, state.commission.bridge_owner)
    }

    async fn native_vault_balance(&self) -> Amount {
        self.state.lock().await.native_vault
    }

    async fn owner(&self) -> Address {
        self.state.lock().await.ownership.owner()
    }

    async fn pending_owner(&self) -> Option<Address> {
        self.state.lock().await.ownership.pending()
    }
}
