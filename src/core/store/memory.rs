//! In-memory secret store.

use std::collections::{BTreeMap, BTreeSet};

use super::SecretStore;
use crate::error::{Result, StoreError};

/// A store held entirely in memory.
///
/// Individual secrets can be marked as unreadable, and the whole store can be
/// made unavailable, to exercise partial and total failures.
#[derive(Debug, Clone, Default)]
pub struct Memory {
    name: String,
    secrets: BTreeMap<String, String>,
    failing: BTreeSet<String>,
    unavailable: Option<String>,
}

impl Memory {
    /// Create an empty store.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a readable secret.
    pub fn with_secret(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(id.into(), value.into());
        self
    }

    /// Add a secret that is listed but cannot be read.
    pub fn with_failing(mut self, id: impl Into<String>) -> Self {
        self.failing.insert(id.into());
        self
    }

    /// Make listing fail with the given reason.
    pub fn unavailable(mut self, reason: impl Into<String>) -> Self {
        self.unavailable = Some(reason.into());
        self
    }
}

impl SecretStore for Memory {
    fn name(&self) -> &str {
        &self.name
    }

    fn list(&self) -> Result<Vec<String>> {
        if let Some(reason) = &self.unavailable {
            return Err(StoreError::Enumerate {
                store: self.name.clone(),
                reason: reason.clone(),
            }
            .into());
        }
        let ids: BTreeSet<&String> = self.secrets.keys().chain(self.failing.iter()).collect();
        Ok(ids.into_iter().cloned().collect())
    }

    fn resolve(&self, id: &str) -> Result<String> {
        let fail = |reason: &str| StoreError::Resolve {
            store: self.name.clone(),
            id: id.to_string(),
            reason: reason.to_string(),
        };

        if self.failing.contains(id) {
            return Err(fail("access denied").into());
        }
        self.secrets
            .get(id)
            .cloned()
            .ok_or_else(|| fail("not found").into())
    }
}
