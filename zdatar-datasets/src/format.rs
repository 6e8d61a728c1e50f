//! Best-effort output format detection.

use serde_json::Value;

/// Detected format of decrypted dataset bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataFormat {
    Csv,
    Json,
    Unknown,
}

impl DataFormat {
    /// Conventional file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
            DataFormat::Unknown => "bin",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataFormat::Csv => "csv",
            DataFormat::Json => "json",
            DataFormat::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guesses whether decrypted bytes look like CSV or JSON.
///
/// Heuristic only, not part of the cryptographic contract: a `#`-prefixed
/// or comma-bearing first line reads as CSV; text starting with `{` or `[`
/// must additionally parse as JSON. A comma inside a JSON document will
/// still read as CSV, which callers can override. Non-UTF-8 data is
/// `Unknown`; everything else defaults to CSV.
pub fn detect_format(data: &[u8]) -> DataFormat {
    let Ok(text) = std::str::from_utf8(data) else {
        return DataFormat::Unknown;
    };

    let first_line = text.lines().next().unwrap_or("");
    if text.starts_with('#') || first_line.contains(',') {
        return DataFormat::Csv;
    }

    let trimmed = text.trim();
    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && serde_json::from_str::<Value>(trimmed).is_ok()
    {
        return DataFormat::Json;
    }

    DataFormat::Csv
}
