//! Domain types.

mod inventory;
mod value;

pub(crate) use inventory::percent;
pub use inventory::{Inventory, InventoryStats, SecretRecord};
pub use value::SecretValue;
