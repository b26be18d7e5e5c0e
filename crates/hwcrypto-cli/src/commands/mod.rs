pub mod delete;
pub mod export;
pub mod generate;
pub mod import;
pub mod list;
pub mod sign;
pub mod supported;
pub mod verify;

use std::{fs, path::PathBuf};

use hwcrypto_api::HardwareCrypto;

use crate::error::CliResult;

/// The given alias, or the configured default
fn alias_or_default(core: &HardwareCrypto, alias: Option<String>) -> String {
    alias.unwrap_or_else(|| core.default_alias().to_string())
}

/// Message text, file contents, or the configured default challenge
fn message_bytes(
    core: &HardwareCrypto,
    message: Option<String>,
    file: Option<PathBuf>,
) -> CliResult<Vec<u8>> {
    Ok(match (message, file) {
        (Some(message), _) => message.into_bytes(),
        (None, Some(file)) => fs::read(file)?,
        (None, None) => core.default_message().to_vec(),
    })
}
