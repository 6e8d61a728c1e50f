//! Input loading for decryption runs.
//!
//! The envelope and the private credential can each be passed inline or read
//! from a file; the loaders resolve either form to plain text for the core.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use zdatar_crypto::RecipientCredential;

use crate::error::DatasetResult;

/// A text input supplied either inline or as a file path.
#[derive(Clone, Debug)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
}

impl TextSource {
    /// Resolves the source to its text content, trimmed of surrounding
    /// whitespace (key and envelope files commonly end in a newline).
    pub fn resolve(&self) -> DatasetResult<String> {
        match self {
            TextSource::Inline(value) => Ok(value.trim().to_string()),
            TextSource::File(path) => {
                let text = fs::read_to_string(path)?;
                debug!(path = %path.display(), "loaded input file");
                Ok(text.trim().to_string())
            }
        }
    }
}

/// Loads and validates the recipient credential.
pub fn load_credential(
    identity_b58: &str,
    private_source: &TextSource,
) -> DatasetResult<RecipientCredential> {
    let private_b58 = private_source.resolve()?;
    Ok(RecipientCredential::from_base58(
        identity_b58.trim(),
        &private_b58,
    )?)
}

/// Reads the externally supplied encrypted dataset file.
///
/// The payload ciphertext actually decrypted lives inside the envelope; the
/// external file is read for interface parity with the producing system and
/// its size reported, nothing more.
pub fn read_encrypted_file(path: &Path) -> DatasetResult<Vec<u8>> {
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "read encrypted dataset file");
    Ok(bytes)
}
