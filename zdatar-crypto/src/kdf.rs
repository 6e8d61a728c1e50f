//! Wrapping-key derivation.

use sha2::{Digest, Sha256};

use crate::error::{CryptoError, CryptoResult};

/// Domain-separation label for the content-key wrap KDF.
pub const KDF_INFO: &str = "zdatar:ck-wrap";

/// Number of identity characters mixed into the info string.
const IDENTITY_PREFIX_LEN: usize = 8;

/// Derives the per-recipient wrapping key from the envelope's ephemeral
/// value and the recipient's derived X25519 public key.
///
/// The chain is a fixed two-round SHA-256, in this exact order:
///
/// ```text
/// hash1 = SHA-256(ephemeral || derived_pubkey)
/// key   = SHA-256(hash1 || "zdatar:ck-wrap:<first 8 chars of identity>")
/// ```
///
/// Mixing the identity prefix keeps wrapping keys distinct per recipient
/// even if an ephemeral value were ever reused across wraps.
pub fn derive_wrapping_key(
    ephemeral: &[u8],
    derived_pubkey: &[u8; 32],
    identity_b58: &str,
) -> CryptoResult<[u8; 32]> {
    if ephemeral.len() != 32 {
        return Err(CryptoError::InvalidLength {
            field: "ephemeral secret",
            expected: 32,
            actual: ephemeral.len(),
        });
    }

    let mut hasher = Sha256::new();
    hasher.update(ephemeral);
    hasher.update(derived_pubkey);
    let first_hash = hasher.finalize();

    let prefix: String = identity_b58.chars().take(IDENTITY_PREFIX_LEN).collect();
    let info = format!("{KDF_INFO}:{prefix}");

    let mut hasher = Sha256::new();
    hasher.update(first_hash);
    hasher.update(info.as_bytes());
    Ok(hasher.finalize().into())
}
