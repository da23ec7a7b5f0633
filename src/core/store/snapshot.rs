//! Snapshot-file secret store.
//!
//! Reads an exported store from a TOML file:
//!
//! ```toml
//! [secrets]
//! API_KEY = "sk-123"
//! DATABASE_URL = "postgres://localhost/app"
//! ```
//!
//! An entry whose value is not a string is listed but cannot be resolved.

use std::path::Path;

use tracing::debug;

use super::SecretStore;
use crate::error::{Result, StoreError};

/// A store loaded from a TOML snapshot file.
#[derive(Debug, Clone)]
pub struct Snapshot {
    name: String,
    secrets: toml::Table,
}

impl Snapshot {
    /// Load a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Enumerate` if the file cannot be read or is not a
    /// valid snapshot.
    pub fn load(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let name = name.into();
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|e| StoreError::Enumerate {
            store: name.clone(),
            reason: format!("{}: {}", path.display(), e),
        })?;

        Self::parse(name, &contents)
    }

    /// Parse a snapshot from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Enumerate` if the text is not valid TOML or
    /// `secrets` is not a table.
    pub fn parse(name: impl Into<String>, contents: &str) -> Result<Self> {
        let name = name.into();
        let fail = |reason: String| StoreError::Enumerate {
            store: name.clone(),
            reason,
        };

        let mut doc: toml::Table = contents
            .parse()
            .map_err(|e: toml::de::Error| fail(e.to_string()))?;

        let secrets = match doc.remove("secrets") {
            Some(toml::Value::Table(t)) => t,
            None => toml::Table::new(),
            Some(_) => return Err(fail("`secrets` must be a table".to_string()).into()),
        };

        debug!(store = %name, count = secrets.len(), "snapshot loaded");
        Ok(Self { name, secrets })
    }
}

impl SecretStore for Snapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn list(&self) -> Result<Vec<String>> {
        Ok(self.secrets.keys().cloned().collect())
    }

    fn resolve(&self, id: &str) -> Result<String> {
        let fail = |reason: &str| StoreError::Resolve {
            store: self.name.clone(),
            id: id.to_string(),
            reason: reason.to_string(),
        };

        match self.secrets.get(id) {
            Some(toml::Value::String(v)) => Ok(v.clone()),
            Some(_) => Err(fail("value is not a string").into()),
            None => Err(fail("not found").into()),
        }
    }
}
