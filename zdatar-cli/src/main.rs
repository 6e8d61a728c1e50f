//! `zdatar-decrypt` — decrypt a multi-recipient ZDatar dataset envelope.
//!
//! The envelope (base64 JSON) and the recipient credential can each be
//! passed inline or as file paths. The decrypted dataset is written to
//! `--output` with CSV/JSON auto-detection unless a format is forced.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use zdatar_crypto::DatasetDecryptor;
use zdatar_datasets::{
    load_credential, preview, read_encrypted_file, write_output, DataFormat, TextSource,
};

#[derive(Parser)]
#[command(
    name = "zdatar-decrypt",
    version,
    about = "Decrypt a ZDatar dataset encrypted with AES-256-GCM multi-recipient envelopes"
)]
struct Cli {
    /// Path to the encrypted dataset file
    #[arg(long)]
    encrypted_file: PathBuf,

    /// Base64-encoded encryption envelope (from the backend API)
    #[arg(long, conflicts_with = "encrypted_key_file")]
    encrypted_key: Option<String>,

    /// File containing the base64-encoded encryption envelope
    #[arg(long)]
    encrypted_key_file: Option<PathBuf>,

    /// Your identity public key (base58)
    #[arg(long)]
    recipient_pubkey: String,

    /// Your private key (base58, 64 bytes decoded)
    #[arg(long, conflicts_with = "private_key_file")]
    recipient_private_key: Option<String>,

    /// File containing your private key
    #[arg(long)]
    private_key_file: Option<PathBuf>,

    /// Path for the decrypted output
    #[arg(long)]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
    Auto,
}

fn text_source(
    inline: Option<String>,
    file: Option<PathBuf>,
    what: &str,
) -> Result<TextSource> {
    match (inline, file) {
        (Some(value), None) => Ok(TextSource::Inline(value)),
        (None, Some(path)) => Ok(TextSource::File(path)),
        _ => bail!("either --{what} or --{what}-file is required"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let envelope_source = text_source(cli.encrypted_key, cli.encrypted_key_file, "encrypted-key")?;
    let private_source = text_source(
        cli.recipient_private_key,
        cli.private_key_file,
        "recipient-private-key",
    )?;

    // The payload ciphertext is embedded in the envelope itself; the external
    // file is read to confirm it exists and report its size.
    let encrypted = read_encrypted_file(&cli.encrypted_file)?;
    info!(len = encrypted.len(), "encrypted dataset file present");

    let envelope_b64 = envelope_source.resolve()?;
    let credential = load_credential(&cli.recipient_pubkey, &private_source)?;

    let decryptor = DatasetDecryptor::new(credential)?;
    let plaintext = decryptor
        .decrypt_dataset(&envelope_b64)
        .context("dataset decryption failed")?;

    let requested = match cli.format {
        OutputFormat::Auto => None,
        OutputFormat::Csv => Some(DataFormat::Csv),
        OutputFormat::Json => Some(DataFormat::Json),
    };
    let written = write_output(&cli.output, &plaintext, requested)?;

    println!(
        "Decrypted {} bytes to {} (format: {})",
        written.bytes_written,
        cli.output.display(),
        written.format
    );
    println!("--- preview ---");
    println!("{}", preview(&plaintext));

    Ok(())
}
