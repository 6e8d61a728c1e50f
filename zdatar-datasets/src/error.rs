//! Error types for dataset loading and output.

use thiserror::Error;

/// All errors that can occur around a decryption run.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("crypto error: {0}")]
    Crypto(#[from] zdatar_crypto::CryptoError),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type DatasetResult<T> = Result<T, DatasetError>;
