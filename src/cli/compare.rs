//! Compare command - show differences between two stores.

use serde::Serialize;

use crate::cli::output::{self, Table};
use crate::core::diff::{Comparison, Verdict};
use crate::core::domain::{Inventory, SecretValue};
use crate::core::fetch::fetch;
use crate::core::format::{format_value, is_marker};
use crate::core::store::SecretStore;
use crate::error::Result;

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    comparison: &'a Comparison,
    source_warning: Option<String>,
    target_warning: Option<String>,
}

/// Fetch both stores and print their comparison.
pub fn execute(source: &dyn SecretStore, target: &dyn SecretStore, json: bool) -> Result<()> {
    let source = fetch_one(source, json)?;
    let target = fetch_one(target, json)?;

    let comparison = Comparison::compute(&source, &target);

    if json {
        let report = Report {
            comparison: &comparison,
            source_warning: source.warning(),
            target_warning: target.warning(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for inv in [&source, &target] {
        if let Some(warning) = inv.warning() {
            output::warn(&format!("{}: {}", inv.store(), warning));
        }
    }
    render(&comparison);
    Ok(())
}

fn fetch_one(store: &dyn SecretStore, json: bool) -> Result<Inventory> {
    if json {
        return fetch(store);
    }
    output::progress(&format!("Fetching secrets from {}", store.name()));
    let result = fetch(store);
    output::progress_done(result.is_ok());
    result
}

fn cell(value: Option<&SecretValue>) -> String {
    let shown = format_value(value);
    if is_marker(value) {
        let missing = !value.is_some_and(SecretValue::is_resolved);
        output::marker(shown, missing)
    } else {
        output::single_line(shown)
    }
}

/// Print comparison statistics and the table of differences.
pub fn render(comparison: &Comparison) {
    let stats = comparison.stats();

    output::section("Comparison Statistics");
    output::kv("Total secrets", stats.total);
    output::kv("Matching secrets", stats.matching);
    output::kv("Different values", stats.differing);
    output::kv(
        &format!("{}-only secrets", comparison.source()),
        stats.source_only,
    );
    output::kv(
        &format!("{}-only secrets", comparison.target()),
        stats.target_only,
    );
    output::kv("Match rate", format!("{:.1}%", stats.match_rate));

    let differences = comparison.differences();
    if differences.is_empty() {
        println!();
        output::success("No differences found between stores");
        return;
    }

    let source_col = format!("{} Value", comparison.source());
    let target_col = format!("{} Value", comparison.target());
    let mut table = Table::new(&["Secret Name", &source_col, &target_col]);
    for entry in differences {
        let (s, t) = match entry.verdict() {
            Verdict::Differ { source, target } => (Some(source), Some(target)),
            Verdict::SourceOnly { source } => (Some(source), None),
            Verdict::TargetOnly { target } => (None, Some(target)),
            Verdict::Match => continue,
        };
        table.row(vec![output::key(entry.id()), cell(s), cell(t)]);
    }
    table.print("Differences Found");
}
