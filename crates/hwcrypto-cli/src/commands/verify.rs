use std::{path::PathBuf, process::ExitCode};

use colored::Colorize;
use hwcrypto_api::HardwareCrypto;
use hwcrypto_crypto::hex_decode;

use super::{alias_or_default, message_bytes};
use crate::error::CliResult;

pub fn handle(
    core: &HardwareCrypto,
    alias: Option<String>,
    public_key: Option<String>,
    message: Option<String>,
    file: Option<PathBuf>,
    signature: String,
) -> CliResult<ExitCode> {
    let public_key = match public_key {
        Some(hex) => hex_decode(&hex)?,
        None => core.export_public_key(&alias_or_default(core, alias))?,
    };
    let message = message_bytes(core, message, file)?;
    let signature = hex_decode(&signature)?;

    if core.verify(&public_key, &message, &signature) {
        println!("{} Signature is valid", "✓".green());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} Signature is invalid", "✗".red());
        Ok(ExitCode::FAILURE)
    }
}
