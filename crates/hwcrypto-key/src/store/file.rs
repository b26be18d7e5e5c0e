use std::{
    collections::HashMap,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use hwcrypto_crypto::PrivateKey;
use zeroize::Zeroizing;

use super::{resolve_storage_root, KeyIdentifier, KeyStore};
use crate::error::{Error, Result};

/// Prefix of the transient files written before a key is renamed into place
const TEMP_PREFIX: &str = ".tmp";

/// File-based key store
///
/// Each key lives in `root/<identifier>` as PKCS#8 DER. Operations on the
/// same identifier are serialized in-process; writes land in a temporary
/// file in the root and are renamed over the target, so readers never see a
/// partial key.
pub struct FileKeyStore {
    root: PathBuf,
    locks: Mutex<HashMap<KeyIdentifier, Arc<Mutex<()>>>>,
}

impl FileKeyStore {
    /// Use `root` as is; the directory must already exist
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve (and create if needed) the storage root, then open the store
    pub fn open(root: Option<&Path>) -> Result<Self> {
        Ok(Self::new(resolve_storage_root(root)?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, identifier: &KeyIdentifier) -> PathBuf {
        self.root.join(identifier.as_str())
    }

    /// Run `f` holding the lock for `identifier`
    ///
    /// The map only holds identifiers with an operation in flight: the last
    /// holder removes the entry on the way out.
    fn with_lock<T>(&self, identifier: &KeyIdentifier, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(locks.entry(identifier.clone()).or_default())
        };

        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            f()
        };

        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // One reference in the map, one here
        if Arc::strong_count(&lock) == 2 {
            locks.remove(identifier);
        }
        result
    }
}

impl KeyStore for FileKeyStore {
    fn save(&self, identifier: &KeyIdentifier, key: &PrivateKey) -> Result<()> {
        let document = key.to_pkcs8_der()?;

        self.with_lock(identifier, || {
            let mut temp = tempfile::Builder::new()
                .prefix(TEMP_PREFIX)
                .tempfile_in(&self.root)
                .map_err(|e| Error::write(identifier, e))?;
            temp.write_all(document.as_bytes())
                .map_err(|e| Error::write(identifier, e))?;
            temp.as_file()
                .sync_all()
                .map_err(|e| Error::write(identifier, e))?;
            temp.persist(self.key_path(identifier))
                .map_err(|e| Error::write(identifier, e.error))?;
            Ok(())
        })?;

        tracing::debug!(%identifier, "stored key");
        Ok(())
    }

    fn load(&self, identifier: &KeyIdentifier) -> Result<PrivateKey> {
        let der = self.with_lock(identifier, || match std::fs::read(self.key_path(identifier)) {
            Ok(der) => Ok(Zeroizing::new(der)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(Error::KeyNotFound(identifier.to_string()))
            }
            Err(e) => Err(Error::StorageUnavailable(format!(
                "cannot read key '{}': {}",
                identifier, e
            ))),
        })?;

        let key = PrivateKey::from_pkcs8_der(&der).map_err(|e| {
            tracing::warn!(%identifier, error = %e, "stored key failed to load");
            Error::corrupted(identifier, e)
        })?;

        tracing::debug!(%identifier, "loaded key");
        Ok(key)
    }

    fn delete(&self, identifier: &KeyIdentifier) -> Result<bool> {
        self.with_lock(identifier, || match std::fs::remove_file(self.key_path(identifier)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::write(identifier, e)),
        })
    }

    fn exists(&self, identifier: &KeyIdentifier) -> Result<bool> {
        Ok(self.key_path(identifier).is_file())
    }

    fn list(&self) -> Result<Vec<KeyIdentifier>> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| {
            Error::StorageUnavailable(format!("cannot list {}: {}", self.root.display(), e))
        })?;

        let mut identifiers = Vec::new();
        for entry in entries.flatten() {
            if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                // Temporary files start with '.', which identifiers never do
                if let Ok(identifier) = KeyIdentifier::new(name) {
                    identifiers.push(identifier);
                }
            }
        }

        identifiers.sort();
        Ok(identifiers)
    }
}
