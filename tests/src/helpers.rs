//! # Test Harness
//!
//! A deployed conversion service wired to the in-memory ledger and event
//! recorder, with an authorizer keypair and signing shortcuts. The setup
//! mirrors a production deployment: the holder is funded, the service
//! holds the minter role, and limits are configured before any
//! conversion runs.

use bridge_crypto::{signed_message_hash, EcdsaSignature, Secp256k1KeyPair};
use bridge_types::{conversion_id_from_label, Address, Amount, ConversionId};
use conversion_manager::adapters::{InMemoryTokenLedger, RecordingEventSink};
use conversion_manager::{
    conversion_digest, ConversionDirection, ConversionLimits, ConversionRequest,
    ConversionService, ConverterConfig, TokenLedger,
};

/// The conversion service's own ledger identity.
pub const SELF_ID: Address = [0x5E; 20];
/// Administrative owner.
pub const OWNER: Address = [0x01; 20];
/// Funded token holder.
pub const HOLDER: Address = [0xAA; 20];
/// Commission receiver.
pub const RECEIVER: Address = [0xCE; 20];
/// Bridge owner beneficiary.
pub const BRIDGE_OWNER: Address = [0xB0; 20];
/// An account with no standing whatsoever.
pub const INTRUDER: Address = [0xEE; 20];

/// Holder's starting balance.
pub const INITIAL_BALANCE: Amount = 1_000_000_000_000;
/// Default per-transaction minimum.
pub const MIN_AMOUNT: Amount = 100_000_000;
/// Default per-transaction maximum.
pub const MAX_AMOUNT: Amount = 100_000_000_000;
/// Default supply cap.
pub const MAX_SUPPLY: Amount = 1_000_000_000_000_000;
/// Default ceiling for the fixed native commission.
pub const FIXED_NATIVE_LIMIT: Amount = 10_000_000_000;

/// Opt-in log capture; safe to call from every test.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A deployed service plus its authorizer key.
pub struct Harness {
    /// The off-chain authorizer.
    pub authorizer: Secp256k1KeyPair,
    /// The deployed engine.
    pub service: ConversionService<InMemoryTokenLedger, RecordingEventSink>,
}

impl Harness {
    /// Deploy with the default 20/80 beneficiary split.
    pub fn new() -> Self {
        Self::with_proportions(20, 80)
    }

    /// Deploy with a custom beneficiary split.
    pub fn with_proportions(receiver: u8, bridge_owner: u8) -> Self {
        init_logging();

        let authorizer = Secp256k1KeyPair::generate();
        let service = ConversionService::new(
            SELF_ID,
            InMemoryTokenLedger::new(),
            RecordingEventSink::new(),
            ConverterConfig {
                owner: OWNER,
                authorizer: authorizer.address(),
                limits: ConversionLimits {
                    min_amount: MIN_AMOUNT,
                    max_amount: MAX_AMOUNT,
                    max_supply: MAX_SUPPLY,
                },
                receiver_proportion: receiver,
                bridge_owner_proportion: bridge_owner,
                fixed_native_limit: FIXED_NATIVE_LIMIT,
                receiver: RECEIVER,
                bridge_owner: BRIDGE_OWNER,
            },
        )
        .expect("harness configuration is valid");

        service.ledger().seed_balance(HOLDER, INITIAL_BALANCE);
        service.ledger().grant_minter(SELF_ID);

        Harness {
            authorizer,
            service,
        }
    }

    /// Approve the service to pull from an account.
    pub fn approve(&self, owner: Address, amount: Amount) {
        self.service.ledger().approve(owner, SELF_ID, amount);
    }

    /// Current token balance of an account.
    pub async fn balance(&self, account: Address) -> Amount {
        self.service.ledger().balance_of(account).await.unwrap()
    }

    /// Sign an outbound conversion for `counterparty`.
    pub fn sign_out(
        &self,
        amount: Amount,
        counterparty: Address,
        label: &str,
    ) -> (ConversionId, EcdsaSignature) {
        self.sign(ConversionDirection::Out, amount, counterparty, label)
    }

    /// Sign an inbound conversion for `recipient`.
    pub fn sign_in(
        &self,
        amount: Amount,
        recipient: Address,
        label: &str,
    ) -> (ConversionId, EcdsaSignature) {
        self.sign(ConversionDirection::In, amount, recipient, label)
    }

    fn sign(
        &self,
        direction: ConversionDirection,
        amount: Amount,
        counterparty: Address,
        label: &str,
    ) -> (ConversionId, EcdsaSignature) {
        let conversion_id = conversion_id_from_label(label).expect("label fits");
        let request = ConversionRequest {
            direction,
            amount,
            counterparty,
            conversion_id,
            native_payment: 0,
        };
        let digest = conversion_digest(&request, &SELF_ID);
        let signature = self
            .authorizer
            .sign_recoverable(&signed_message_hash(&digest))
            .expect("authorizer signing succeeds");
        (conversion_id, signature)
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}
