use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ApiError, Result};

/// Alias used when the caller names no key
pub const DEFAULT_ALIAS: &str = "test";

/// Challenge signed when the caller supplies no message
pub const DEFAULT_MESSAGE: &str = "Hello world!";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub storage: StorageCfg,
    pub signing: SigningCfg,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageCfg {
    /// Key storage root; `<data-local-dir>/hardware_crypto` when unset
    pub root: Option<PathBuf>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigningCfg {
    pub default_alias: String,
    pub default_message: String,
    /// Deadline for a single operation; no deadline when unset
    pub operation_timeout_ms: Option<u64>,
}

impl Default for SigningCfg {
    fn default() -> Self {
        Self {
            default_alias: DEFAULT_ALIAS.to_string(),
            default_message: DEFAULT_MESSAGE.to_string(),
            operation_timeout_ms: None,
        }
    }
}

impl Settings {
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let path = config_path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ApiError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ApiError::Configuration(e.to_string()))
    }
}
