//! # Hardware Crypto
//!
//! Key custody and ECDSA signing over NIST P-256
//!
//! ## Modules
//!
//! - `hwcrypto_crypto` - P-256 primitives and signature encodings
//! - `hwcrypto_key` - key storage
//! - `hwcrypto_api` - the `HardwareCrypto` core object

// Re-export all sub-crates
pub use hwcrypto_api;
pub use hwcrypto_crypto;
pub use hwcrypto_key;

pub use hwcrypto_api::{ApiError, ErrorCode, HardwareCrypto, Settings};
