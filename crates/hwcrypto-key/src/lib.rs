//! Key custody for the hardware crypto core
//!
//! Private keys are stored one per [`KeyIdentifier`] behind the [`KeyStore`]
//! trait. [`FileKeyStore`] keeps them in a per-user directory,
//! [`MemoryKeyStore`] keeps them for the lifetime of the process.

pub mod error;
pub mod store;

pub use error::{Error, Result};
pub use store::{
    create_key_store, default_storage_root, resolve_storage_root, FileKeyStore, KeyIdentifier,
    KeyStore, KeyStoreConfig, MemoryKeyStore, MAX_IDENTIFIER_LEN, STORAGE_DIR_NAME,
};
