//! Comparison engine.
//!
//! Classifies every identifier in the union of two inventories as matching,
//! differing, or present on one side only.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::domain::{percent, Inventory, SecretValue};

/// The outcome of comparing one identifier across two inventories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// Both sides hold the same value outcome.
    Match,
    /// Both sides hold the identifier with different value outcomes.
    Differ {
        source: SecretValue,
        target: SecretValue,
    },
    /// Only the source store has the identifier.
    SourceOnly { source: SecretValue },
    /// Only the target store has the identifier.
    TargetOnly { target: SecretValue },
}

impl Verdict {
    /// Classify one identifier from its lookups on each side.
    ///
    /// `None` means the identifier is not in that inventory, which is distinct
    /// from `Some(SecretValue::Unresolved)`.
    pub fn classify(source: Option<&SecretValue>, target: Option<&SecretValue>) -> Option<Self> {
        match (source, target) {
            (Some(s), None) => Some(Self::SourceOnly { source: s.clone() }),
            (None, Some(t)) => Some(Self::TargetOnly { target: t.clone() }),
            (Some(s), Some(t)) if s == t => Some(Self::Match),
            (Some(s), Some(t)) => Some(Self::Differ {
                source: s.clone(),
                target: t.clone(),
            }),
            (None, None) => None,
        }
    }

    /// Whether this is a match.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// A single entry in a comparison.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonEntry {
    id: String,
    #[serde(flatten)]
    verdict: Verdict,
}

impl ComparisonEntry {
    /// The secret identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The verdict for this identifier.
    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }
}

/// Aggregate counts over a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonStats {
    pub total: usize,
    pub matching: usize,
    pub differing: usize,
    pub source_only: usize,
    pub target_only: usize,
    /// Percentage of `total` that matched, `0.0` when `total` is zero.
    pub match_rate: f64,
}

/// The full comparison between a source and a target inventory.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    source: String,
    target: String,
    entries: Vec<ComparisonEntry>,
    stats: ComparisonStats,
}

impl Comparison {
    /// Compare two fully fetched inventories.
    ///
    /// Entries are sorted by identifier.
    pub fn compute(source: &Inventory, target: &Inventory) -> Self {
        let all_ids: BTreeSet<&str> = source.ids().chain(target.ids()).collect();

        let mut entries = Vec::with_capacity(all_ids.len());
        let (mut matching, mut differing, mut source_only, mut target_only) = (0, 0, 0, 0);

        for id in all_ids {
            let Some(verdict) = Verdict::classify(source.get(id), target.get(id)) else {
                continue;
            };
            match verdict {
                Verdict::Match => matching += 1,
                Verdict::Differ { .. } => differing += 1,
                Verdict::SourceOnly { .. } => source_only += 1,
                Verdict::TargetOnly { .. } => target_only += 1,
            }
            entries.push(ComparisonEntry {
                id: id.to_string(),
                verdict,
            });
        }

        let total = entries.len();
        let stats = ComparisonStats {
            total,
            matching,
            differing,
            source_only,
            target_only,
            match_rate: percent(matching, total),
        };

        Self {
            source: source.store().to_string(),
            target: target.store().to_string(),
            entries,
            stats,
        }
    }

    /// Source store name.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Target store name.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// All entries.
    pub fn entries(&self) -> &[ComparisonEntry] {
        &self.entries
    }

    /// Verdict for one identifier, `None` if neither side has it.
    pub fn verdict(&self, id: &str) -> Option<&Verdict> {
        self.entries
            .binary_search_by(|e| e.id.as_str().cmp(id))
            .ok()
            .map(|i| &self.entries[i].verdict)
    }

    /// Entries that are not a match.
    pub fn differences(&self) -> Vec<&ComparisonEntry> {
        self.entries
            .iter()
            .filter(|e| !e.verdict.is_match())
            .collect()
    }

    /// Whether both sides hold exactly the same secrets.
    pub fn is_identical(&self) -> bool {
        self.entries.iter().all(|e| e.verdict.is_match())
    }

    /// Aggregate counts.
    pub fn stats(&self) -> &ComparisonStats {
        &self.stats
    }
}
