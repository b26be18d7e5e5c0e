use std::{fs, path::PathBuf};

use colored::Colorize;
use hwcrypto_api::HardwareCrypto;
use hwcrypto_crypto::hex_encode;

use super::{alias_or_default, message_bytes};
use crate::error::CliResult;

pub fn handle(
    core: &HardwareCrypto,
    alias: Option<String>,
    message: Option<String>,
    file: Option<PathBuf>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let alias = alias_or_default(core, alias);
    let message = message_bytes(core, message, file)?;
    tracing::debug!(%alias, len = message.len(), "signing");

    let signature = core.sign(&alias, &message)?;

    if let Some(output) = output {
        fs::write(&output, &signature)?;
        eprintln!("{} Signature saved to: {}", "✓".green(), output.display());
    }
    println!("{}", hex_encode(&signature));
    Ok(())
}
