//! Inventory fetcher.
//!
//! Lists a store and reads every secret in it. A secret that cannot be read
//! is recorded as unresolved and the fetch carries on; only a failure to list
//! the store aborts.

use tracing::{debug, warn};

use crate::core::domain::{Inventory, SecretRecord, SecretValue};
use crate::core::store::SecretStore;
use crate::error::Result;

/// Take an inventory of a store.
///
/// # Errors
///
/// Returns `StoreError::Enumerate` if the store cannot be listed. Failures to
/// read individual secrets are never returned; they show up as
/// `SecretValue::Unresolved` entries and in [`Inventory::warning`].
pub fn fetch(store: &dyn SecretStore) -> Result<Inventory> {
    let name = store.name();
    debug!(store = name, "listing secrets");

    let ids = store.list()?;
    let mut inventory = Inventory::new(name);

    for id in ids {
        if inventory.contains(&id) {
            debug!(store = name, id = %id, "skipping duplicate identifier");
            continue;
        }

        let value = match store.resolve(&id) {
            Ok(v) => SecretValue::Resolved(v),
            Err(e) => {
                warn!(store = name, id = %id, error = %e, "could not retrieve secret");
                SecretValue::Unresolved
            }
        };
        inventory.insert(SecretRecord::new(id, value));
    }

    if let Some(summary) = inventory.warning() {
        warn!(store = name, "{}", summary);
    }
    debug!(store = name, count = inventory.len(), "inventory complete");

    Ok(inventory)
}
