use colored::Colorize;
use hwcrypto_api::HardwareCrypto;

use super::alias_or_default;
use crate::error::CliResult;

pub fn handle(core: &HardwareCrypto, alias: Option<String>) -> CliResult<()> {
    let alias = alias_or_default(core, alias);
    if core.delete_key_pair(&alias)? {
        println!("{} Deleted key pair: {}", "✓".green(), alias);
    } else {
        println!("{} No key pair named {}", "-".yellow(), alias);
    }
    Ok(())
}
