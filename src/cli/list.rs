//! List command - show every secret in one store.

use serde::Serialize;

use crate::cli::output::{self, Table};
use crate::core::domain::{Inventory, InventoryStats};
use crate::core::fetch::fetch;
use crate::core::format::{format_value, is_marker};
use crate::core::store::SecretStore;
use crate::error::Result;

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    inventory: &'a Inventory,
    stats: InventoryStats,
    warning: Option<String>,
}

/// Fetch and print one store's inventory.
pub fn execute(store: &dyn SecretStore, json: bool) -> Result<()> {
    if !json {
        output::progress(&format!("Fetching secrets from {}", store.name()));
    }
    let inventory = match fetch(store) {
        Ok(inv) => {
            if !json {
                output::progress_done(true);
            }
            inv
        }
        Err(e) => {
            if !json {
                output::progress_done(false);
            }
            return Err(e);
        }
    };

    if json {
        let report = Report {
            inventory: &inventory,
            stats: inventory.stats(),
            warning: inventory.warning(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    render(&inventory);
    Ok(())
}

/// Print an inventory as a numbered table followed by statistics.
pub fn render(inventory: &Inventory) {
    if inventory.is_empty() {
        output::dimmed("no secrets stored");
    } else {
        let mut table = Table::new(&["#", "Secret Name", "Value"]);
        for (i, (id, value)) in inventory.iter().enumerate() {
            let shown = format_value(Some(value));
            let cell = if is_marker(Some(value)) {
                output::marker(shown, !value.is_resolved())
            } else {
                output::single_line(shown)
            };
            table.row(vec![(i + 1).to_string(), output::key(id), cell]);
        }
        table.print(&format!("Secrets from {}", inventory.store()));
    }

    let stats = inventory.stats();
    output::section("Statistics");
    output::kv("Total secrets", stats.total);
    output::kv(
        "Success rate",
        format!(
            "{:.1}% ({}/{})",
            stats.success_rate, stats.resolved, stats.total
        ),
    );
    output::kv("Max value length", format!("{} characters", stats.max_length));
    output::kv(
        "Avg value length",
        format!("{:.1} characters", stats.avg_length),
    );

    if let Some(warning) = inventory.warning() {
        println!();
        output::warn(&warning);
    }
}
