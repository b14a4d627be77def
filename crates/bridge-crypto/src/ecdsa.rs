//! # Recoverable ECDSA (secp256k1)
//!
//! Signature type, signer recovery, and the authorizer keypair.
//!
//! ## Security Notes
//!
//! - **Malleability Prevention**: S must be strictly less than half the
//!   curve order; the high-S form of every signature is rejected.
//! - **Scalar Range Validation**: R and S must be in `[1, n-1]`.
//! - **Constant-Time Checks**: range comparisons use the `subtle` crate.
//! - Uses the `k256` crate for all curve operations.

use crate::errors::CryptoError;
use crate::hashing::keccak256;
use bridge_types::{Address, Hash};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// secp256k1 curve order n.
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order (malleability boundary).
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Prefix applied to a digest before signing, per the signed-message
/// convention of the settlement domain's wallets.
const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Recoverable ECDSA signature on the secp256k1 curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

/// Hash a digest under the signed-message prefix.
///
/// Off-chain signers never sign a raw digest; they sign
/// `keccak256(prefix || digest)`. Recovery therefore runs over the
/// prefixed hash while replay tracking keys on the raw digest.
pub fn signed_message_hash(digest: &Hash) -> Hash {
    let mut buf = Vec::with_capacity(SIGNED_MESSAGE_PREFIX.len() + 32);
    buf.extend_from_slice(SIGNED_MESSAGE_PREFIX);
    buf.extend_from_slice(digest);
    keccak256(&buf)
}

/// Recover the signer's address from a prehashed message.
///
/// Validates scalar ranges and the low-S requirement before attempting
/// recovery; a malleable or out-of-range signature never reaches the
/// curve operation.
pub fn recover_signer(
    message_hash: &Hash,
    signature: &EcdsaSignature,
) -> Result<Address, CryptoError> {
    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(CryptoError::InvalidFormat);
    }
    if !is_low_s(&signature.s) {
        return Err(CryptoError::MalleableSignature);
    }

    let recovery_id = parse_recovery_id(signature.v)?;

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);

    let sig = match Signature::from_slice(&sig_bytes) {
        Ok(s) => {
            sig_bytes.zeroize();
            s
        }
        Err(_) => {
            sig_bytes.zeroize();
            return Err(CryptoError::InvalidFormat);
        }
    };

    let recovered_key = VerifyingKey::recover_from_prehash(message_hash, &sig, recovery_id)
        .map_err(|_| CryptoError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Recover and compare against an expected signer.
///
/// Returns `false` for any recovery failure; callers that need the
/// failure detail use [`recover_signer`] directly.
pub fn verify_signer(message_hash: &Hash, signature: &EcdsaSignature, expected: &Address) -> bool {
    match recover_signer(message_hash, signature) {
        Ok(recovered) => recovered == *expected,
        Err(_) => false,
    }
}

/// Derive an address from a public key: last 20 bytes of the keccak-256
/// of the uncompressed point (without the 0x04 prefix byte).
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let point = public_key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// secp256k1 keypair producing low-S-normalized recoverable signatures.
///
/// This is the authorizer's signing side; the engine itself only ever
/// recovers.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Generate a random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key = SigningKey::from_bytes((&bytes).into())
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// The address this keypair signs as.
    pub fn address(&self) -> Address {
        address_from_pubkey(self.signing_key.verifying_key())
    }

    /// Sign a prehashed message, normalizing S to the low half and
    /// adjusting the recovery id accordingly (v is 27 or 28).
    pub fn sign_recoverable(&self, message_hash: &Hash) -> Result<EcdsaSignature, CryptoError> {
        let (sig, recid) = self
            .signing_key
            .sign_prehash_recoverable(message_hash)
            .map_err(|_| CryptoError::SigningFailed)?;

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        let v = if is_low_s(&s) {
            recid.to_byte() + 27
        } else {
            // Inverting S flips the parity the recovery id encodes.
            s = invert_s(&s);
            if recid.to_byte() == 0 {
                28
            } else {
                27
            }
        };

        Ok(EcdsaSignature { r, s, v })
    }
}

impl Drop for Secp256k1KeyPair {
    fn drop(&mut self) {
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        bytes.zeroize();
    }
}

/// Check S is strictly in the lower half of the curve order.
///
/// Constant time: the comparison runs over all 32 bytes regardless of
/// where the values diverge.
fn is_low_s(s: &[u8; 32]) -> bool {
    ct_less_than(s, &SECP256K1_HALF_ORDER).into()
}

/// Check a scalar is in `[1, n-1]`.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }
    let in_range = ct_less_than(scalar, &SECP256K1_ORDER);
    (!is_zero & in_range).into()
}

/// Constant-time big-endian `a < b` over 32-byte values.
fn ct_less_than(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let not_decided = !(less | greater);
        let byte_less = Choice::from((a[i] < b[i]) as u8);
        let byte_greater = Choice::from((a[i] > b[i]) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    less
}

/// Compute `n - s`, the high-S twin of a signature's S component.
pub(crate) fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}

/// Parse a recovery id from v. Accepts 0, 1, 27, 28.
fn parse_recovery_id(v: u8) -> Result<RecoveryId, CryptoError> {
    let id = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(CryptoError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| CryptoError::InvalidRecoveryId(v))
}
