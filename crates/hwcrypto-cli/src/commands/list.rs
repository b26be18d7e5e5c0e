use hwcrypto_api::HardwareCrypto;

use crate::error::CliResult;

pub fn handle(core: &HardwareCrypto) -> CliResult<()> {
    for alias in core.list_key_pairs()? {
        println!("{}", alias);
    }
    Ok(())
}
