//! Error types for envelope decryption.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while decrypting a dataset envelope.
///
/// None of these are transient; a failed decryption attempt is never retried.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The envelope failed base64/UTF-8/JSON decoding or structural
    /// validation (missing field, unsupported algorithm).
    #[error("failed to parse encryption envelope: {0}")]
    EnvelopeParse(String),

    /// No key wrap in the envelope is addressed to the caller's identity.
    /// Both the requested identity and the listing are truncated for display.
    #[error("no key wrap found for recipient {recipient}; available recipients: {available:?}")]
    RecipientNotFound {
        recipient: String,
        available: Vec<String>,
    },

    /// A key, nonce, or identity field decoded to the wrong length.
    #[error("invalid {field} length: {actual} (expected {expected} bytes)")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A base64 or base58 field failed to decode.
    #[error("invalid {field} encoding: {reason}")]
    InvalidEncoding {
        field: &'static str,
        reason: String,
    },

    /// AEAD authentication failed. The message does not distinguish a wrong
    /// key from corrupted ciphertext or tampering.
    #[error("decryption failed (wrong key or tampered data)")]
    Decryption,
}
