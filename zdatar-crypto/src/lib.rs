//! Envelope decryption for ZDatar datasets.
//!
//! Datasets are encrypted once with a random content key (AES-256-GCM), and
//! that content key is wrapped separately for every recipient inside a
//! base64-wrapped JSON envelope. Recovering the plaintext takes four steps:
//!
//! 1. Parse the envelope and locate the key wrap addressed to the caller.
//! 2. Derive the recipient's X25519 encryption public key from their base58
//!    identity key (SHA-256 seed expansion, deterministic).
//! 3. Derive the wrapping key with a fixed double-SHA-256 chain and use it
//!    to unwrap the content key.
//! 4. Decrypt the envelope's embedded payload ciphertext with the content key.
//!
//! # A note on the key agreement
//!
//! The scheme deliberately departs from standard X25519 ECDH: the encryption
//! public key is derived from the recipient's *public* identity key alone, so
//! any holder of the public identifier can reproduce the chain. The private
//! credential is validated for presence and length but its bytes never enter
//! the computation. Every byte-layout and hashing-order decision below must
//! match the encrypting side exactly; a divergence surfaces only as an AEAD
//! authentication failure, never as a derivation error.
//!
//! The core is synchronous and stateless: all key material is scoped to a
//! single [`DatasetDecryptor::decrypt_dataset`] call and wiped after use.

mod cipher;
mod decryptor;
mod envelope;
mod error;
mod identity;
mod kdf;

pub use cipher::{decrypt_payload, unwrap_content_key, KEY_SIZE, NONCE_SIZE, TAG_SIZE};
pub use decryptor::DatasetDecryptor;
pub use envelope::{find_wrap, parse_envelope, Envelope, KeyWrap, SUPPORTED_ALGO};
pub use error::{CryptoError, CryptoResult};
pub use identity::{
    derive_encryption_pubkey, RecipientCredential, IDENTITY_KEY_SIZE, PRIVATE_CREDENTIAL_SIZE,
};
pub use kdf::{derive_wrapping_key, KDF_INFO};
