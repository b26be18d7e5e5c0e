use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

use hwcrypto_crypto::PrivateKey;
use zeroize::Zeroizing;

use super::{KeyIdentifier, KeyStore};
use crate::error::{Error, Result};

/// In-memory key store implementation
///
/// Holds PKCS#8 DER like the file store, and decodes plus revalidates on
/// every load. Entries are wiped when overwritten, deleted or dropped.
#[derive(Default)]
pub struct MemoryKeyStore {
    keys: RwLock<HashMap<KeyIdentifier, Zeroizing<Vec<u8>>>>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for MemoryKeyStore {
    fn save(&self, identifier: &KeyIdentifier, key: &PrivateKey) -> Result<()> {
        let document = key.to_pkcs8_der()?;
        let mut keys = self.keys.write().unwrap_or_else(PoisonError::into_inner);
        keys.insert(
            identifier.clone(),
            Zeroizing::new(document.as_bytes().to_vec()),
        );
        Ok(())
    }

    fn load(&self, identifier: &KeyIdentifier) -> Result<PrivateKey> {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        let der = keys
            .get(identifier)
            .ok_or_else(|| Error::KeyNotFound(identifier.to_string()))?;
        PrivateKey::from_pkcs8_der(der.as_slice()).map_err(|e| Error::corrupted(identifier, e))
    }

    fn delete(&self, identifier: &KeyIdentifier) -> Result<bool> {
        let mut keys = self.keys.write().unwrap_or_else(PoisonError::into_inner);
        Ok(keys.remove(identifier).is_some())
    }

    fn exists(&self, identifier: &KeyIdentifier) -> Result<bool> {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        Ok(keys.contains_key(identifier))
    }

    fn list(&self) -> Result<Vec<KeyIdentifier>> {
        let keys = self.keys.read().unwrap_or_else(PoisonError::into_inner);
        let mut identifiers: Vec<KeyIdentifier> = keys.keys().cloned().collect();
        identifiers.sort();
        Ok(identifiers)
    }
}

#[cfg(test)]
mod tests {
    use hwcrypto_crypto::generate_key_pair;

    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryKeyStore::new();
        let alice = KeyIdentifier::new("alice").unwrap();
        let bob = KeyIdentifier::new("bob").unwrap();
        let (private_key, _) = generate_key_pair().unwrap();

        store.save(&bob, &private_key).unwrap();
        store.save(&alice, &private_key).unwrap();
        assert_eq!(store.list().unwrap(), vec![alice.clone(), bob.clone()]);
        assert_eq!(store.load(&alice).unwrap(), private_key);

        assert!(store.delete(&alice).unwrap());
        assert!(!store.delete(&alice).unwrap());
        assert!(!store.exists(&alice).unwrap());
        assert!(store.exists(&bob).unwrap());
        assert!(matches!(store.load(&alice), Err(Error::KeyNotFound(_))));
    }

    #[test]
    fn test_entries_hold_wiped_der() {
        let store = MemoryKeyStore::new();
        let slot = KeyIdentifier::new("slot").unwrap();
        let (first, _) = generate_key_pair().unwrap();
        let (second, _) = generate_key_pair().unwrap();

        store.save(&slot, &first).unwrap();
        store.save(&slot, &second).unwrap();

        let keys = store.keys.read().unwrap();
        let entry: &Zeroizing<Vec<u8>> = keys.get(&slot).unwrap();
        assert_eq!(entry.as_slice(), second.to_pkcs8_der().unwrap().as_bytes());
        assert_eq!(keys.len(), 1);
    }
}
