//! Shared test fixtures: the encrypting side of the envelope scheme.
//!
//! Runs the same derivation chain as the library in the sealing direction so
//! round-trip and tamper tests have a matching counterpart to decrypt.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};
use zdatar_crypto::{derive_encryption_pubkey, derive_wrapping_key, TAG_SIZE};

pub const IDENTITY_BYTES: [u8; 32] = [7u8; 32];
pub const PRIVATE_BYTES: [u8; 64] = [9u8; 64];
pub const CONTENT_KEY: [u8; 32] = [0x42u8; 32];
pub const WRAP_NONCE: [u8; 12] = [1u8; 12];
pub const CIPHER_IV: [u8; 12] = [2u8; 12];

pub fn identity_b58() -> String {
    bs58::encode(IDENTITY_BYTES).into_string()
}

pub fn private_b58() -> String {
    bs58::encode(PRIVATE_BYTES).into_string()
}

/// Builds one key wrap for the given identity using the library's own
/// derivation chain in the encrypting direction.
pub fn seal_wrap(identity_b58: &str, identity_bytes: &[u8; 32], ephemeral: &[u8; 32]) -> Value {
    let derived = derive_encryption_pubkey(identity_bytes).unwrap();
    let wrapping_key = derive_wrapping_key(ephemeral, &derived, identity_b58).unwrap();

    let wrapped_ck = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&wrapping_key))
        .encrypt(Nonce::from_slice(&WRAP_NONCE), CONTENT_KEY.as_ref())
        .unwrap();

    json!({
        "recipient_solana_pub58": identity_b58,
        "eph_pub": STANDARD.encode(ephemeral),
        "wrapped_ck": STANDARD.encode(&wrapped_ck),
        "wrap_nonce": STANDARD.encode(WRAP_NONCE),
    })
}

/// Builds a complete envelope document sealing `plaintext` for `wraps`.
pub fn seal_document(plaintext: &[u8], wraps: Vec<Value>) -> Value {
    let mut payload = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&CONTENT_KEY))
        .encrypt(Nonce::from_slice(&CIPHER_IV), plaintext)
        .unwrap();
    let tag = payload.split_off(payload.len() - TAG_SIZE);

    json!({
        "algo": "AES-256-GCM",
        "cipher_iv": STANDARD.encode(CIPHER_IV),
        "cipher_tag": STANDARD.encode(&tag),
        "ciphertext": STANDARD.encode(&payload),
        "wraps": wraps,
    })
}

/// Single-recipient envelope for the default test identity.
pub fn seal_envelope(plaintext: &[u8], ephemeral: &[u8; 32]) -> Value {
    let wrap = seal_wrap(&identity_b58(), &IDENTITY_BYTES, ephemeral);
    seal_document(plaintext, vec![wrap])
}

/// Base64-wraps a document for `parse_envelope`.
pub fn encode_document(doc: &Value) -> String {
    STANDARD.encode(doc.to_string())
}

/// Flips one bit inside a base64 string field of the document.
pub fn flip_bit(doc: &mut Value, pointer: &str) {
    let field = doc.pointer_mut(pointer).unwrap();
    let mut bytes = STANDARD.decode(field.as_str().unwrap()).unwrap();
    bytes[0] ^= 0x01;
    *field = Value::String(STANDARD.encode(bytes));
}
