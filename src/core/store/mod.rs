//! Secret store handles.
//!
//! A store is anything that can list its secret identifiers and read one
//! secret's current value. Handles are plain values passed to the fetcher;
//! authentication, if any, happens before a handle is built.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `azure.rs`, `aws.rs`)
//! 3. Teach [`open`] to recognize its locator
//!
//! ## Example
//!
//! ```ignore
//! struct Cloud { /* ... */ }
//!
//! impl SecretStore for Cloud {
//!     fn name(&self) -> &str {
//!         "cloud"
//!     }
//!     fn list(&self) -> Result<Vec<String>> {
//!         // Page through the remote listing
//!     }
//!     fn resolve(&self, id: &str) -> Result<String> {
//!         // Fetch one secret's current version
//!     }
//! }
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::{Result, StoreError};

mod dir;
mod memory;
mod snapshot;

pub use dir::Directory;
pub use memory::Memory;
pub use snapshot::Snapshot;

/// A key-value secret store.
pub trait SecretStore {
    /// Human-readable store name, used in messages and reports.
    fn name(&self) -> &str;

    /// List every secret identifier currently in the store.
    ///
    /// Order is whatever the store provides.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Enumerate` if the store cannot be listed at all.
    fn list(&self) -> Result<Vec<String>>;

    /// Read one secret's current value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Resolve` if this secret cannot be read.
    fn resolve(&self, id: &str) -> Result<String>;
}

impl<S: SecretStore + ?Sized> SecretStore for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn list(&self) -> Result<Vec<String>> {
        (**self).list()
    }

    fn resolve(&self, id: &str) -> Result<String> {
        (**self).resolve(id)
    }
}

/// Open a store from a locator.
///
/// An existing directory opens as a [`Directory`] store; anything else is
/// read as a [`Snapshot`] file.
///
/// # Arguments
///
/// * `name` - Display name for the store
/// * `locator` - Filesystem path of the store
///
/// # Errors
///
/// Returns `StoreError::InvalidLocator` for an empty locator, or
/// `StoreError::Enumerate` if a snapshot file cannot be loaded.
pub fn open(name: &str, locator: &str) -> Result<Box<dyn SecretStore>> {
    if locator.trim().is_empty() {
        return Err(StoreError::InvalidLocator("empty locator".to_string()).into());
    }

    let path = Path::new(locator);
    if path.is_dir() {
        debug!(store = name, path = %path.display(), "opening directory store");
        return Ok(Box::new(Directory::new(name, path)));
    }

    debug!(store = name, path = %path.display(), "opening snapshot store");
    Ok(Box::new(Snapshot::load(name, path)?))
}
