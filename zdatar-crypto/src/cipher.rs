//! AES-256-GCM content-key unwrap and payload decryption.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::envelope::{Envelope, KeyWrap};
use crate::error::{CryptoError, CryptoResult};

/// AES-GCM nonce size (96 bits).
pub const NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag size.
pub const TAG_SIZE: usize = 16;

/// Symmetric key size (256 bits).
pub const KEY_SIZE: usize = 32;

pub(crate) fn decode_b64(field: &'static str, value: &str) -> CryptoResult<Vec<u8>> {
    STANDARD
        .decode(value)
        .map_err(|e| CryptoError::InvalidEncoding {
            field,
            reason: e.to_string(),
        })
}

/// Decrypts the wrapped content key with the derived wrapping key.
///
/// `wrapped_ck` carries its 16-byte tag inline, per the envelope convention,
/// and no associated data is used. A tag mismatch — wrong wrapping key,
/// corrupted data, or tampering — yields the uniform decryption error.
pub fn unwrap_content_key(wrap: &KeyWrap, wrapping_key: &[u8; KEY_SIZE]) -> CryptoResult<Vec<u8>> {
    let wrapped = decode_b64("wrapped_ck", &wrap.wrapped_ck)?;
    let nonce = decode_b64("wrap_nonce", &wrap.wrap_nonce)?;
    if nonce.len() != NONCE_SIZE {
        return Err(CryptoError::InvalidLength {
            field: "wrap_nonce",
            expected: NONCE_SIZE,
            actual: nonce.len(),
        });
    }

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(wrapping_key));
    cipher
        .decrypt(Nonce::from_slice(&nonce), wrapped.as_ref())
        .map_err(|_| CryptoError::Decryption)
}

/// Decrypts the envelope's embedded payload ciphertext with the content key.
///
/// GCM expects ciphertext and tag concatenated, so `cipher_tag` is appended
/// to `ciphertext` before decryption. No associated data is used.
pub fn decrypt_payload(envelope: &Envelope, content_key: &[u8]) -> CryptoResult<Vec<u8>> {
    let key: [u8; KEY_SIZE] = content_key
        .try_into()
        .map_err(|_| CryptoError::InvalidLength {
            field: "content key",
            expected: KEY_SIZE,
            actual: content_key.len(),
        })?;

    let ciphertext = decode_b64("ciphertext", &envelope.ciphertext)?;
    let iv = decode_b64("cipher_iv", &envelope.cipher_iv)?;
    let tag = decode_b64("cipher_tag", &envelope.cipher_tag)?;
    if iv.len() != NONCE_SIZE {
        return Err(CryptoError::InvalidLength {
            field: "cipher_iv",
            expected: NONCE_SIZE,
            actual: iv.len(),
        });
    }

    let mut buf = Vec::with_capacity(ciphertext.len() + tag.len());
    buf.extend_from_slice(&ciphertext);
    buf.extend_from_slice(&tag);

    let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key));
    cipher
        .decrypt(Nonce::from_slice(&iv), buf.as_ref())
        .map_err(|_| CryptoError::Decryption)
}
