//! # Bridge Crypto
//!
//! Cryptographic primitives for conversion authorization.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | Canonical message digests |
//! | `ecdsa` | secp256k1 (recoverable) | Authorizer signatures |
//!
//! ## Security Properties
//!
//! - Low-S normalization on signing and strict low-S rejection on recovery
//!   (malleability protection)
//! - Scalar range validation in constant time
//! - Recovery-id acceptance limited to 0, 1, 27, 28
//! - Secret key material zeroized on drop

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

pub use ecdsa::{
    address_from_pubkey, recover_signer, signed_message_hash, verify_signer, EcdsaSignature,
    Secp256k1KeyPair,
};
pub use errors::CryptoError;
pub use hashing::{keccak256, keccak256_concat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
