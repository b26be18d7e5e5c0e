mod file;
mod memory;

pub use file::FileKeyStore;
pub use memory::MemoryKeyStore;

use std::{
    fmt,
    path::{Path, PathBuf},
};

use hwcrypto_crypto::PrivateKey;

use crate::error::{Error, Result};

/// Name of the per-user directory holding the stored keys
pub const STORAGE_DIR_NAME: &str = "hardware_crypto";

/// Longest accepted identifier
pub const MAX_IDENTIFIER_LEN: usize = 128;

/// Name of a key slot
///
/// Restricted to `[A-Za-z0-9._-]`, at most [`MAX_IDENTIFIER_LEN`] characters
/// and not starting with `.`, so it is always a plain file name directly
/// under the storage root.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyIdentifier(String);

impl KeyIdentifier {
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        let identifier = identifier.into();
        if identifier.is_empty() || identifier.len() > MAX_IDENTIFIER_LEN {
            return Err(Error::InvalidIdentifier(format!(
                "'{}' must be 1 to {} characters long",
                identifier, MAX_IDENTIFIER_LEN
            )));
        }
        if identifier.starts_with('.') {
            return Err(Error::InvalidIdentifier(format!(
                "'{}' must not start with '.'",
                identifier
            )));
        }
        if let Some(c) = identifier
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')))
        {
            return Err(Error::InvalidIdentifier(format!(
                "'{}' contains {:?}",
                identifier, c
            )));
        }
        Ok(Self(identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for KeyIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for KeyIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Trait for key storage backends (synchronous)
///
/// One private key per identifier. Implementations persist PKCS#8 DER and
/// revalidate the key on every load.
pub trait KeyStore: Send + Sync {
    /// Persist a key, replacing any key already stored under the identifier
    fn save(&self, identifier: &KeyIdentifier, key: &PrivateKey) -> Result<()>;

    /// Load and validate a key
    fn load(&self, identifier: &KeyIdentifier) -> Result<PrivateKey>;

    /// Remove a key, returning whether one was stored
    fn delete(&self, identifier: &KeyIdentifier) -> Result<bool>;

    /// Check if a key is stored under the identifier
    fn exists(&self, identifier: &KeyIdentifier) -> Result<bool>;

    /// Identifiers of all stored keys, sorted
    fn list(&self) -> Result<Vec<KeyIdentifier>>;
}

/// Key storage configuration
#[derive(Clone, Debug, Default)]
pub enum KeyStoreConfig {
    Memory,
    /// Files under `root`, or under [`default_storage_root`] when `None`
    File { root: Option<PathBuf> },
    #[default]
    Default,
}

/// Factory function to create a key store based on configuration
pub fn create_key_store(config: KeyStoreConfig) -> Result<Box<dyn KeyStore>> {
    match config {
        KeyStoreConfig::Memory => Ok(Box::new(MemoryKeyStore::new())),
        KeyStoreConfig::File { root } => Ok(Box::new(FileKeyStore::open(root.as_deref())?)),
        KeyStoreConfig::Default => Ok(Box::new(FileKeyStore::open(None)?)),
    }
}

/// `<data-local-dir>/hardware_crypto`, e.g. `~/.local/share/hardware_crypto`
pub fn default_storage_root() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join(STORAGE_DIR_NAME))
        .ok_or_else(|| {
            Error::StorageUnavailable("cannot determine the user data directory".to_string())
        })
}

/// Resolve the storage root and make sure it exists
///
/// A directory created here is restricted to the current user on unix.
pub fn resolve_storage_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => default_storage_root()?,
    };

    if !root.is_dir() {
        std::fs::create_dir_all(&root).map_err(|e| {
            Error::StorageUnavailable(format!("cannot create {}: {}", root.display(), e))
        })?;
        restrict_permissions(&root, 0o700).map_err(|e| {
            Error::StorageUnavailable(format!("cannot restrict {}: {}", root.display(), e))
        })?;
        tracing::info!(root = %root.display(), "created key storage root");
    }

    Ok(root)
}

#[cfg(unix)]
pub(crate) fn restrict_permissions(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
pub(crate) fn restrict_permissions(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
