use colored::Colorize;
use hwcrypto_api::HardwareCrypto;

use crate::error::CliResult;

pub fn handle(core: &HardwareCrypto) -> CliResult<()> {
    if core.is_supported() {
        println!("{} supported", "✓".green());
    } else {
        println!("{} not supported", "✗".red());
    }
    Ok(())
}
