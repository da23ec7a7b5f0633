//! Inventory type.
//!
//! A snapshot of every secret identifier seen in one store, each mapped to
//! its value outcome.

use std::collections::BTreeMap;

use serde::Serialize;

use super::SecretValue;

/// One identifier and its value outcome, as produced by a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRecord {
    id: String,
    value: SecretValue,
}

impl SecretRecord {
    /// Create a new record.
    pub fn new(id: impl Into<String>, value: SecretValue) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// A record whose value could not be read.
    pub fn unresolved(id: impl Into<String>) -> Self {
        Self::new(id, SecretValue::Unresolved)
    }

    /// Secret identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Value outcome.
    pub fn value(&self) -> &SecretValue {
        &self.value
    }
}

/// All secrets of one store at one point in time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Inventory {
    store: String,
    secrets: BTreeMap<String, SecretValue>,
}

/// Summary figures for a single inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total: usize,
    pub resolved: usize,
    pub unresolved: usize,
    /// Percentage of identifiers whose value was read, `0.0` when empty.
    pub success_rate: f64,
    /// Longest resolved value, in characters.
    pub max_length: usize,
    /// Mean resolved value length in characters, `0.0` when nothing resolved.
    pub avg_length: f64,
}

impl Inventory {
    /// Create an empty inventory for the named store.
    pub fn new(store: impl Into<String>) -> Self {
        Self {
            store: store.into(),
            secrets: BTreeMap::new(),
        }
    }

    /// Build an inventory from resolved pairs.
    pub fn from_pairs<K, V>(store: impl Into<String>, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut inventory = Self::new(store);
        for (k, v) in pairs {
            inventory.insert(SecretRecord::new(k, SecretValue::Resolved(v.into())));
        }
        inventory
    }

    /// Record a secret. Returns `false` if the identifier was already present,
    /// in which case the first record is kept.
    pub fn insert(&mut self, record: SecretRecord) -> bool {
        if self.contains(record.id()) {
            return false;
        }
        self.secrets.insert(record.id, record.value);
        true
    }

    /// Name of the store this inventory was taken from.
    pub fn store(&self) -> &str {
        &self.store
    }

    /// Value outcome for an identifier, `None` if the store does not have it.
    pub fn get(&self, id: &str) -> Option<&SecretValue> {
        self.secrets.get(id)
    }

    /// Whether the store has this identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.secrets.contains_key(id)
    }

    /// Identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.secrets.keys().map(String::as_str)
    }

    /// All entries in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SecretValue)> {
        self.secrets.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of identifiers seen.
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Whether the store had no secrets.
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    /// Number of identifiers whose value could not be read.
    pub fn unresolved_count(&self) -> usize {
        self.secrets.values().filter(|v| !v.is_resolved()).count()
    }

    /// Identifiers whose value could not be read.
    pub fn unresolved(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, v)| !v.is_resolved())
            .map(|(k, _)| k)
            .collect()
    }

    /// Partial-failure summary, `None` when every value was read.
    pub fn warning(&self) -> Option<String> {
        let failed = self.unresolved_count();
        if failed == 0 {
            return None;
        }
        Some(format!(
            "{} of {} secrets could not be retrieved",
            failed,
            self.len()
        ))
    }

    /// Compute summary statistics.
    pub fn stats(&self) -> InventoryStats {
        let total = self.len();
        let lengths: Vec<usize> = self
            .secrets
            .values()
            .filter_map(SecretValue::as_resolved)
            .map(|v| v.chars().count())
            .collect();
        let resolved = lengths.len();
        let sum: usize = lengths.iter().sum();

        InventoryStats {
            total,
            resolved,
            unresolved: total - resolved,
            success_rate: percent(resolved, total),
            max_length: lengths.iter().copied().max().unwrap_or(0),
            avg_length: if resolved == 0 {
                0.0
            } else {
                sum as f64 / resolved as f64
            },
        }
    }
}

/// `part / whole` as a percentage, `0.0` when `whole` is zero.
pub(crate) fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 * 100.0 / whole as f64
    }
}
