//! Output sink for decrypted datasets.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::DatasetResult;
use crate::format::{detect_format, DataFormat};

/// How many plaintext bytes the preview exposes.
pub const PREVIEW_LEN: usize = 500;

/// Result of writing a decrypted dataset.
#[derive(Clone, Copy, Debug)]
pub struct WrittenOutput {
    pub format: DataFormat,
    pub bytes_written: usize,
}

/// Writes plaintext to `path`, resolving the format (`None` = auto-detect).
pub fn write_output(
    path: &Path,
    plaintext: &[u8],
    requested: Option<DataFormat>,
) -> DatasetResult<WrittenOutput> {
    let format = requested.unwrap_or_else(|| detect_format(plaintext));
    fs::write(path, plaintext)?;
    debug!(
        path = %path.display(),
        len = plaintext.len(),
        format = %format,
        "wrote decrypted dataset"
    );

    Ok(WrittenOutput {
        format,
        bytes_written: plaintext.len(),
    })
}

/// Lossy UTF-8 preview of the first [`PREVIEW_LEN`] bytes.
pub fn preview(plaintext: &[u8]) -> String {
    let cut = plaintext.len().min(PREVIEW_LEN);
    String::from_utf8_lossy(&plaintext[..cut]).into_owned()
}
