//! End-to-end dataset decryption.

use tracing::debug;
use zeroize::Zeroize;

use crate::cipher::{decode_b64, decrypt_payload, unwrap_content_key};
use crate::envelope::{find_wrap, parse_envelope};
use crate::error::CryptoResult;
use crate::identity::{derive_encryption_pubkey, RecipientCredential};
use crate::kdf::derive_wrapping_key;

/// Decrypts multi-recipient dataset envelopes for a single recipient.
///
/// Holds only the credential and the encryption public key derived from it.
/// Everything else (wrapping key, content key) is scoped to one
/// [`decrypt_dataset`](Self::decrypt_dataset) call and wiped before it
/// returns, so a decryptor is safe to share across parallel calls.
pub struct DatasetDecryptor {
    credential: RecipientCredential,
    derived_pubkey: [u8; 32],
}

impl DatasetDecryptor {
    /// Builds a decryptor for the given credential.
    pub fn new(credential: RecipientCredential) -> CryptoResult<Self> {
        let derived_pubkey = derive_encryption_pubkey(credential.identity_bytes())?;
        debug!(
            recipient = %truncated(credential.identity_b58()),
            "derived encryption public key from identity"
        );
        Ok(Self {
            credential,
            derived_pubkey,
        })
    }

    /// The credential this decryptor was built for.
    pub fn credential(&self) -> &RecipientCredential {
        &self.credential
    }

    /// Recovers the plaintext dataset from a base64 envelope.
    ///
    /// Sequences parse → wrap lookup → wrapping-key derivation → content-key
    /// unwrap → payload decryption, decrypting the envelope's own embedded
    /// ciphertext. Each step's failure propagates unchanged; none are
    /// transient, so nothing is retried.
    pub fn decrypt_dataset(&self, envelope_b64: &str) -> CryptoResult<Vec<u8>> {
        let envelope = parse_envelope(envelope_b64)?;
        debug!(wraps = envelope.wraps.len(), "parsed encryption envelope");

        let wrap = find_wrap(&envelope, self.credential.identity_b58())?;
        debug!("found key wrap for recipient");

        let mut ephemeral = decode_b64("eph_pub", &wrap.eph_pub)?;
        let wrapping_key = derive_wrapping_key(
            &ephemeral,
            &self.derived_pubkey,
            self.credential.identity_b58(),
        );
        ephemeral.zeroize();
        let mut wrapping_key = wrapping_key?;
        debug!("derived wrapping key");

        let content_key = unwrap_content_key(wrap, &wrapping_key);
        wrapping_key.zeroize();
        let mut content_key = content_key?;
        debug!(len = content_key.len(), "content key recovered");

        let plaintext = decrypt_payload(&envelope, &content_key);
        content_key.zeroize();
        let plaintext = plaintext?;
        debug!(len = plaintext.len(), "dataset decrypted");

        Ok(plaintext)
    }
}

fn truncated(identity: &str) -> String {
    identity.chars().take(20).collect()
}
