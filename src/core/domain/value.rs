//! Secret value outcome.
//!
//! A secret seen during enumeration is either resolved to its value or
//! unresolved. Absence from a store is not a value at all: it is modeled by
//! the identifier missing from the [`Inventory`](super::Inventory).

use serde::Serialize;

/// The result of reading one secret's current value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum SecretValue {
    /// The value was read. May be the empty string.
    Resolved(String),
    /// The secret exists but its value could not be read.
    Unresolved,
}

impl SecretValue {
    /// Whether the value was read.
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The value, if it was read.
    pub fn as_resolved(&self) -> Option<&str> {
        match self {
            Self::Resolved(v) => Some(v),
            Self::Unresolved => None,
        }
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self::Resolved(value)
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        Self::Resolved(value.to_string())
    }
}
