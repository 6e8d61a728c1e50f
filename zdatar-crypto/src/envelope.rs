//! Envelope wire format: parsing, validation, and wrap lookup.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{CryptoError, CryptoResult};

/// The only payload algorithm the envelope format supports.
pub const SUPPORTED_ALGO: &str = "AES-256-GCM";

/// Identities quoted in error messages are cut to this many characters.
const IDENTITY_DISPLAY_LEN: usize = 20;

/// Top-level encryption envelope, transported as base64-wrapped JSON.
///
/// Carries the payload ciphertext itself alongside one key wrap per
/// intended recipient. Wrap order is irrelevant.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    /// Payload algorithm identifier; must equal [`SUPPORTED_ALGO`].
    pub algo: String,
    /// Base64 payload nonce (12 bytes decoded).
    pub cipher_iv: String,
    /// Base64 payload authentication tag (16 bytes decoded).
    pub cipher_tag: String,
    /// Base64 payload ciphertext, tag not included.
    pub ciphertext: String,
    /// One wrap per intended recipient.
    pub wraps: Vec<KeyWrap>,
}

/// Per-recipient content-key wrap.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyWrap {
    /// Base58 identity this wrap is addressed to.
    pub recipient_solana_pub58: String,
    /// Base64 ephemeral secret (32 bytes decoded).
    pub eph_pub: String,
    /// Base64 wrapped content key, 16-byte tag appended.
    pub wrapped_ck: String,
    /// Base64 AES-GCM nonce for the wrap (12 bytes decoded).
    pub wrap_nonce: String,
}

/// Decodes and validates a base64-wrapped envelope document.
///
/// Every failure mode — bad base64, bad UTF-8, malformed JSON, missing
/// field, unsupported algorithm — is reported as a single envelope-parse
/// error with the underlying cause attached, never a silent default.
pub fn parse_envelope(envelope_b64: &str) -> CryptoResult<Envelope> {
    let raw = STANDARD
        .decode(envelope_b64.trim())
        .map_err(|e| CryptoError::EnvelopeParse(format!("invalid base64: {e}")))?;
    let text = String::from_utf8(raw)
        .map_err(|e| CryptoError::EnvelopeParse(format!("invalid UTF-8: {e}")))?;
    let envelope: Envelope = serde_json::from_str(&text)
        .map_err(|e| CryptoError::EnvelopeParse(format!("malformed document: {e}")))?;

    if envelope.algo != SUPPORTED_ALGO {
        return Err(CryptoError::EnvelopeParse(format!(
            "unsupported algorithm: {}",
            envelope.algo
        )));
    }

    Ok(envelope)
}

/// Finds the key wrap addressed to `identity_b58`.
///
/// Linear scan, first exact match wins. The not-found error enumerates the
/// envelope's recipients truncated for display; full identities never appear
/// in error text.
pub fn find_wrap<'a>(envelope: &'a Envelope, identity_b58: &str) -> CryptoResult<&'a KeyWrap> {
    envelope
        .wraps
        .iter()
        .find(|w| w.recipient_solana_pub58 == identity_b58)
        .ok_or_else(|| CryptoError::RecipientNotFound {
            recipient: truncate_identity(identity_b58),
            available: envelope
                .wraps
                .iter()
                .map(|w| truncate_identity(&w.recipient_solana_pub58))
                .collect(),
        })
}

fn truncate_identity(identity: &str) -> String {
    if identity.chars().count() <= IDENTITY_DISPLAY_LEN {
        return identity.to_string();
    }
    let cut: String = identity.chars().take(IDENTITY_DISPLAY_LEN).collect();
    format!("{cut}...")
}
