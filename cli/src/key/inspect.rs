use std::fmt::Write;

use clap::Args;
use pubkey::{MpiLength, ParseOptions, RsaPublicKey, options::DEFAULT_MAX_INPUT_LEN};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::output::OutputFormat;
use crate::utils::{armor_body, format_colon_hex, read_input};

#[derive(Args)]
pub(crate) struct Config {
    /// Path to the armored key file. If not specified, reads from stdin
    file: Option<String>,

    /// Output format (json, text)
    #[arg(short, long, default_value = "text")]
    output: OutputFormat,

    /// Size integers by dividing their bit length by 8, dropping partial bytes
    #[arg(long)]
    legacy_mpi_length: bool,

    /// Reject armored input longer than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LEN)]
    max_input_bytes: usize,
}

impl Config {
    fn options(&self) -> ParseOptions {
        let mpi_length = if self.legacy_mpi_length {
            MpiLength::Truncate
        } else {
            MpiLength::Ceil
        };
        ParseOptions::new()
            .with_max_input_len(self.max_input_bytes)
            .with_mpi_length(mpi_length)
    }
}

#[derive(Serialize)]
struct Inspection<'a> {
    key_size: u64,
    modulus_bytes: usize,
    #[serde(flatten)]
    key: &'a RsaPublicKey,
}

pub(crate) fn execute(config: Config) -> Result<()> {
    let input_bytes = read_input(config.file.as_deref())?;
    let contents = String::from_utf8(input_bytes)?;

    let key = pubkey::read_public_key_with(armor_body(&contents), &config.options())?;
    info!(key_size = key.key_size(), "read public key");

    match config.output {
        OutputFormat::Json => {
            let inspection = Inspection {
                key_size: key.key_size(),
                modulus_bytes: key.modulus_len(),
                key: &key,
            };
            println!("{}", serde_json::to_string_pretty(&inspection)?);
        }
        OutputFormat::Text => print!("{}", format_text(&key)?),
    }

    Ok(())
}

fn format_text(key: &RsaPublicKey) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "RSA Public Key (OpenPGP)")?;
    writeln!(output, "Modulus (n): {} bits", key.key_size())?;
    writeln!(output, "  Size: {} bytes", key.modulus_len())?;
    writeln!(
        output,
        "{}",
        format_colon_hex(&key.modulus().to_bytes_be(), 16, "    ")
    )?;
    writeln!(
        output,
        "Public Exponent (e): {}",
        key.exponent_u64()
            .map(|e| format!("{} (0x{:x})", e, e))
            .unwrap_or_else(|| format!("{} bits", key.exponent().bits()))
    )?;

    Ok(output)
}
