//! Configuration file management.
//!
//! Handles reading and validating `.vaultdiff.toml`, which maps short store
//! aliases (such as `dev` or `stage`) to store locators.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Store aliases loaded from a configuration file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Map of alias names to store locators
    #[serde(default)]
    pub stores: BTreeMap<String, String>,
}

/// A store reference after alias lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRef {
    /// Name shown in reports
    pub name: String,
    /// Locator passed to the store backend
    pub locator: String,
}

impl Config {
    /// Path to the configuration file in the current directory
    pub fn local_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Path to the per-user configuration file, if a config dir exists
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| {
            d.join(constants::CONFIG_DIR)
                .join(constants::GLOBAL_CONFIG_FILE)
        })
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `.vaultdiff.toml` in the
    /// current directory is tried, then the per-user config file. If neither
    /// exists the configuration is empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the explicit file cannot be read,
    /// `ConfigError::Parse` if TOML is malformed, or `ConfigError::Invalid`
    /// if an alias is empty.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let candidates = std::iter::once(Self::local_path()).chain(Self::global_path());
        for path in candidates {
            if path.is_file() {
                return Self::load_from(&path);
            }
        }

        debug!("no config file found");
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::parse(&contents)?;

        debug!(stores = config.stores.len(), "config loaded");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate aliases and locators.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` for an empty alias name or locator.
    pub fn validate(&self) -> Result<()> {
        for (name, locator) in &self.stores {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid("store alias cannot be empty".to_string()).into());
            }
            if locator.trim().is_empty() {
                return Err(
                    ConfigError::Invalid(format!("store '{}' has an empty locator", name)).into(),
                );
            }
        }
        Ok(())
    }

    /// Resolve a store argument to a name and locator.
    ///
    /// A known alias expands to its configured locator; anything else is
    /// used as the locator itself.
    pub fn resolve(&self, store: &str) -> StoreRef {
        match self.stores.get(store) {
            Some(locator) => {
                debug!(alias = store, locator = %locator, "resolved store alias");
                StoreRef {
                    name: store.to_string(),
                    locator: locator.clone(),
                }
            }
            None => StoreRef {
                name: store.to_string(),
                locator: store.to_string(),
            },
        }
    }
}
