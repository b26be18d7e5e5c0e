use colored::Colorize;
use hwcrypto_api::HardwareCrypto;
use hwcrypto_crypto::hex_encode;

use super::alias_or_default;
use crate::error::CliResult;

pub fn handle(core: &HardwareCrypto, alias: Option<String>) -> CliResult<()> {
    let alias = alias_or_default(core, alias);
    println!("{}", format!("Generating P-256 key pair: {}", alias).cyan());

    core.generate_key_pair(&alias)?;
    let public_key = core.export_public_key(&alias)?;

    println!("{} Key pair stored", "✓".green());
    println!("  Public key: {}", hex_encode(&public_key));
    Ok(())
}
