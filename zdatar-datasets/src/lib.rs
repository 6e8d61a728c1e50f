//! Loading, format detection, and output glue around `zdatar-crypto`.
//!
//! The cryptographic core operates on in-memory buffers only. This crate
//! owns the surrounding plumbing: resolving envelope and credential inputs
//! from inline values or files, auto-detecting the decrypted dataset's
//! format, and writing the plaintext to its destination.

mod error;
mod format;
mod loader;
mod output;

pub use error::{DatasetError, DatasetResult};
pub use format::{detect_format, DataFormat};
pub use loader::{load_credential, read_encrypted_file, TextSource};
pub use output::{preview, write_output, WrittenOutput, PREVIEW_LEN};
