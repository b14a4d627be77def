//! # Administrative Surface Tests
//!
//! Owner gating, two-step ownership, and every validated configuration
//! update.

#[cfg(test)]
mod tests {
    use crate::helpers::*;
    use bridge_types::ZERO_ADDRESS;
    use conversion_manager::adapters::{InMemoryTokenLedger, RecordingEventSink};
    use conversion_manager::{
        CommissionMode, ConversionApi, ConversionError, ConversionLimits, ConversionService,
        ConverterConfig,
    };

    const NEW_OWNER: [u8; 20] = [0x44; 20];

    #[tokio::test]
    async fn test_update_authorizer() {
        let harness = Harness::new();
        let new_authorizer = [0x99; 20];

        harness
            .service
            .update_authorizer(OWNER, new_authorizer)
            .await
            .unwrap();
        assert_eq!(harness.service.conversion_authorizer().await, new_authorizer);

        assert_eq!(
            harness
                .service
                .update_authorizer(INTRUDER, new_authorizer)
                .await,
            Err(ConversionError::CallerIsNotOwner)
        );
    }

    #[tokio::test]
    async fn test_update_configurations_and_rejections() {
        let harness = Harness::new();

        harness
            .service
            .update_configurations(OWNER, 100, 500, 1000)
            .await
            .unwrap();
        assert_eq!(
            harness.service.conversion_configurations().await,
            ConversionLimits {
                min_amount: 100,
                max_amount: 500,
                max_supply: 1000,
            }
        );

        // The new owner inherits the surface after the two-step transfer.
        harness
            .service
            .transfer_ownership(OWNER, NEW_OWNER)
            .await
            .unwrap();
        harness.service.accept_ownership(NEW_OWNER).await.unwrap();

        assert!(matches!(
            harness
                .service
                .update_configurations(NEW_OWNER, 500, 100, 0)
                .await,
            Err(ConversionError::InvalidUpdateConfigurations { .. })
        ));
        assert_eq!(
            harness
                .service
                .update_configurations(INTRUDER, 100, 500, 1000)
                .await,
            Err(ConversionError::CallerIsNotOwner)
        );
    }

    #[tokio::test]
    async fn test_update_commission_proportions() {
        let harness = Harness::new();

        harness
            .service
            .update_commission_proportions(OWNER, 10, 90)
            .await
            .unwrap();
        let settings = harness.service.commission_settings().await;
        assert_eq!(settings.receiver_proportion, 10);
        assert_eq!(settings.bridge_owner_proportion, 90);

        assert!(matches!(
            harness
                .service
                .update_commission_proportions(OWNER, 100, 100)
                .await,
            Err(ConversionError::InvalidProportionSum { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_beneficiary_addresses() {
        let harness = Harness::new();
        let new_receiver = [0x77; 20];
        let new_bridge_owner = [0x88; 20];

        harness
            .service
            .update_receiver_commission(OWNER, new_receiver)
            .await
            .unwrap();
        harness
            .service
            .update_bridge_owner(OWNER, new_bridge_owner)
            .await
            .unwrap();
        assert_eq!(
            harness.service.commission_receiver_addresses().await,
            (new_receiver, new_bridge_owner)
        );

        assert_eq!(
            harness
                .service
                .update_receiver_commission(OWNER, ZERO_ADDRESS)
                .await,
            Err(ConversionError::ZeroAddress)
        );
        assert_eq!(
            harness
                .service
                .update_bridge_owner(OWNER, ZERO_ADDRESS)
                .await,
            Err(ConversionError::ZeroAddress)
        );
        assert_eq!(
            harness
                .service
                .update_bridge_owner(INTRUDER, new_bridge_owner)
                .await,
            Err(ConversionError::CallerIsNotOwner)
        );
    }

    #[tokio::test]
    async fn test_percentage_commission_activation_guards() {
        let harness = Harness::new();

        for (pct, offset) in [(0u128, 100u128), (100, 0)] {
            assert_eq!(
                harness
                    .service
                    .enable_and_update_percentage_tokens_commission(OWNER, pct, offset)
                    .await,
                Err(ConversionError::EnablingZeroTokenPercentageCommission)
            );
        }

        assert_eq!(
            harness
                .service
                .enable_and_update_percentage_tokens_commission(OWNER, 100, 10)
                .await,
            Err(ConversionError::PercentageLimitExceeded {
                percentage: 100,
                offset_points: 10,
            })
        );

        // A 0.1% commission is fine.
        harness
            .service
            .enable_and_update_percentage_tokens_commission(OWNER, 10, 10_000)
            .await
            .unwrap();
        assert_eq!(
            harness.service.commission_settings().await.mode,
            CommissionMode::PercentageOfTokens {
                percentage: 10,
                offset_points: 10_000,
            }
        );
    }

    #[tokio::test]
    async fn test_fixed_native_activation_guards() {
        let harness = Harness::new();

        assert_eq!(
            harness
                .service
                .enable_and_update_fixed_native_tokens_commission(OWNER, 0)
                .await,
            Err(ConversionError::EnablingZeroFixedNativeTokenCommission)
        );
        assert_eq!(
            harness
                .service
                .enable_and_update_fixed_native_tokens_commission(OWNER, FIXED_NATIVE_LIMIT + 1)
                .await,
            Err(ConversionError::ViolationOfFixedNativeTokensLimit {
                amount: FIXED_NATIVE_LIMIT + 1,
                limit: FIXED_NATIVE_LIMIT,
            })
        );
        assert_eq!(
            harness
                .service
                .enable_and_update_fixed_native_tokens_commission(INTRUDER, 1)
                .await,
            Err(ConversionError::CallerIsNotOwner)
        );

        harness
            .service
            .enable_and_update_fixed_native_tokens_commission(OWNER, 1)
            .await
            .unwrap();
        assert_eq!(
            harness.service.commission_settings().await.mode,
            CommissionMode::FixedNative { amount: 1 }
        );
    }

    #[tokio::test]
    async fn test_disable_commission() {
        let harness = Harness::new();

        harness
            .service
            .enable_and_update_fixed_tokens_commission(OWNER, 100)
            .await
            .unwrap();
        harness.service.disable_commission(OWNER).await.unwrap();
        assert_eq!(
            harness.service.commission_settings().await.mode,
            CommissionMode::Disabled
        );
    }

    #[tokio::test]
    async fn test_ownership_two_step() {
        let harness = Harness::new();

        assert_eq!(harness.service.owner().await, OWNER);
        assert_eq!(harness.service.pending_owner().await, None);

        harness
            .service
            .transfer_ownership(OWNER, NEW_OWNER)
            .await
            .unwrap();
        assert_eq!(harness.service.pending_owner().await, Some(NEW_OWNER));

        // Nobody but the pending owner completes the transfer.
        assert_eq!(
            harness.service.accept_ownership(INTRUDER).await,
            Err(ConversionError::CallerIsNotPendingOwner)
        );

        harness.service.accept_ownership(NEW_OWNER).await.unwrap();
        assert_eq!(harness.service.owner().await, NEW_OWNER);
        assert_eq!(harness.service.pending_owner().await, None);
    }

    #[tokio::test]
    async fn test_construction_rejects_zero_native_limit() {
        let result = ConversionService::new(
            SELF_ID,
            InMemoryTokenLedger::new(),
            RecordingEventSink::new(),
            ConverterConfig {
                owner: OWNER,
                authorizer: [0x02; 20],
                limits: ConversionLimits::default(),
                receiver_proportion: 0,
                bridge_owner_proportion: 100,
                fixed_native_limit: 0,
                receiver: RECEIVER,
                bridge_owner: BRIDGE_OWNER,
            },
        );

        assert!(matches!(
            result.err(),
            Some(ConversionError::ZeroFixedNativeTokensCommissionLimit)
        ));
    }
}
