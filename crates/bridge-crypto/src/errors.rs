//! # Crypto Errors
//!
//! Error types for signature handling.

use thiserror::Error;

/// Errors from signature parsing, signing, and recovery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The signature components are out of range or malformed.
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has a high S value (malleable form is rejected).
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28).
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover a public key from the signature.
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The private key bytes do not form a valid scalar.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// The signing operation itself failed.
    #[error("Signing failed")]
    SigningFailed,
}
