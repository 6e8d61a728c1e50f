//! Recipient credentials and deterministic encryption-key derivation.

use sha2::{Digest, Sha256};
use x25519_dalek::{PublicKey, StaticSecret};
use zeroize::Zeroize;

use crate::error::{CryptoError, CryptoResult};

/// Decoded length of an identity public key.
pub const IDENTITY_KEY_SIZE: usize = 32;

/// Decoded length of a private credential.
pub const PRIVATE_CREDENTIAL_SIZE: usize = 64;

/// The caller's identity as supplied to a decryption run.
///
/// Holds the base58 identity text and its decoded 32 bytes. The private
/// credential is checked for presence and length only; its bytes never enter
/// any cryptographic computation and are wiped as soon as the check is done.
#[derive(Clone)]
pub struct RecipientCredential {
    identity_b58: String,
    identity_bytes: [u8; IDENTITY_KEY_SIZE],
}

impl RecipientCredential {
    /// Decodes and validates a base58 identity / private credential pair.
    pub fn from_base58(identity_b58: &str, private_b58: &str) -> CryptoResult<Self> {
        let decoded = bs58::decode(identity_b58).into_vec().map_err(|e| {
            CryptoError::InvalidEncoding {
                field: "identity public key",
                reason: e.to_string(),
            }
        })?;
        let identity_bytes: [u8; IDENTITY_KEY_SIZE] =
            decoded
                .as_slice()
                .try_into()
                .map_err(|_| CryptoError::InvalidLength {
                    field: "identity public key",
                    expected: IDENTITY_KEY_SIZE,
                    actual: decoded.len(),
                })?;

        let mut private_bytes = bs58::decode(private_b58).into_vec().map_err(|e| {
            CryptoError::InvalidEncoding {
                field: "private credential",
                reason: e.to_string(),
            }
        })?;
        let private_len = private_bytes.len();
        private_bytes.zeroize();
        if private_len != PRIVATE_CREDENTIAL_SIZE {
            return Err(CryptoError::InvalidLength {
                field: "private credential",
                expected: PRIVATE_CREDENTIAL_SIZE,
                actual: private_len,
            });
        }

        Ok(Self {
            identity_b58: identity_b58.to_string(),
            identity_bytes,
        })
    }

    /// The identity in its base58 text form.
    pub fn identity_b58(&self) -> &str {
        &self.identity_b58
    }

    /// The decoded identity public key.
    pub fn identity_bytes(&self) -> &[u8; IDENTITY_KEY_SIZE] {
        &self.identity_bytes
    }
}

impl std::fmt::Debug for RecipientCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shown: String = self.identity_b58.chars().take(20).collect();
        write!(f, "RecipientCredential({shown}..)")
    }
}

/// Derives the X25519 public key that stands in for an identity in the
/// envelope scheme.
///
/// The construction is fixed: SHA-256 of the 32-byte identity public key
/// becomes an X25519 private-scalar seed, and only the resulting public
/// point is returned. Pure and deterministic — the same input always yields
/// the same 32 bytes, and it must reproduce the encrypting side bit-for-bit
/// (same hash, same RFC 7748 clamping).
pub fn derive_encryption_pubkey(identity_pubkey: &[u8]) -> CryptoResult<[u8; 32]> {
    let identity: [u8; IDENTITY_KEY_SIZE] =
        identity_pubkey
            .try_into()
            .map_err(|_| CryptoError::InvalidLength {
                field: "identity public key",
                expected: IDENTITY_KEY_SIZE,
                actual: identity_pubkey.len(),
            })?;

    let seed: [u8; 32] = Sha256::digest(identity).into();
    let secret = StaticSecret::from(seed);
    Ok(*PublicKey::from(&secret).as_bytes())
}
