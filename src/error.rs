//! Error types.
//!
//! A top-level [`Error`] wraps one enum per concern. Only failures that abort
//! a command live here: a secret that cannot be read during a fetch is
//! recorded in the inventory instead of being returned as an error.

use thiserror::Error;

/// Failures talking to a secret store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be listed at all.
    #[error("cannot list secrets in {store}: {reason}")]
    Enumerate { store: String, reason: String },

    /// A single secret could not be read.
    #[error("cannot read secret {id} from {store}: {reason}")]
    Resolve {
        store: String,
        id: String,
        reason: String,
    },

    /// A store locator that names nothing usable.
    #[error("invalid store locator: {0}")]
    InvalidLocator(String),
}

/// Failures loading the store alias configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
