use std::{fs, path::PathBuf};

use colored::Colorize;
use hwcrypto_api::HardwareCrypto;
use hwcrypto_crypto::hex_encode;

use super::alias_or_default;
use crate::error::CliResult;

pub fn handle(
    core: &HardwareCrypto,
    alias: Option<String>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let alias = alias_or_default(core, alias);
    let public_key = core.export_public_key(&alias)?;

    if let Some(output) = output {
        fs::write(&output, &public_key)?;
        eprintln!("{} Public key saved to: {}", "✓".green(), output.display());
    }
    println!("{}", hex_encode(&public_key));
    Ok(())
}
