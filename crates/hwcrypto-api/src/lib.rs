//! Hardware Crypto API
//!
//! [`HardwareCrypto`] is the object every boundary layer drives: it exposes
//! `is_supported`, `generate_key_pair`, `delete_key_pair` and `sign`, plus
//! public key export, PEM import and listing.

pub mod error;
pub mod hardware;
pub mod settings;

pub use error::{ApiError, ErrorCode, Result};
pub use hardware::HardwareCrypto;
pub use settings::{Settings, SigningCfg, StorageCfg, DEFAULT_ALIAS, DEFAULT_MESSAGE};
