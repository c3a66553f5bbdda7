//! Frequency tables over piece keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::key::{ColorId, PieceKey};

/// Aggregated quantity per (design, colour) key.
///
/// Quantities accumulate: adding the same key twice sums the counts, saturating
/// at `u64::MAX`. Iteration order is sorted by key so reports are stable across
/// runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceTable {
    counts: BTreeMap<PieceKey, u64>,
}

/// A user's owned quantities.
pub type Inventory = PieceTable;

/// A single set's required quantities.
pub type Requirements = PieceTable;

/// One row of a [`PieceTable`], used for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceCount {
    pub design_id: String,
    pub color: ColorId,
    pub count: u64,
}

impl PieceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to the entry for `key`.
    pub fn add(&mut self, key: PieceKey, quantity: u64) {
        let count = self.counts.entry(key).or_insert(0);
        *count = count.saturating_add(quantity);
    }

    /// Quantity held for `key`; absent keys count as zero.
    pub fn quantity(&self, key: &PieceKey) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PieceKey, u64)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }

    /// Sum of all quantities.
    pub fn total_pieces(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, q| acc.saturating_add(*q))
    }

    /// Multiset containment: every required quantity is at most what `self` holds.
    pub fn covers(&self, requirements: &PieceTable) -> bool {
        requirements
            .iter()
            .all(|(key, required)| required <= self.quantity(key))
    }

    /// Per-key shortfall of `self` against `requirements` (`required - owned`).
    ///
    /// Only keys that are short appear in the result.
    pub fn missing(&self, requirements: &PieceTable) -> PieceTable {
        let counts = requirements
            .iter()
            .filter_map(|(key, required)| {
                let owned = self.quantity(key);
                (required > owned).then(|| (key.clone(), required - owned))
            })
            .collect();
        PieceTable { counts }
    }

    /// Regroup the table as design -> colour -> quantity.
    pub fn by_design(&self) -> BTreeMap<&str, BTreeMap<&ColorId, u64>> {
        let mut grouped: BTreeMap<&str, BTreeMap<&ColorId, u64>> = BTreeMap::new();
        for (key, quantity) in self.iter() {
            grouped
                .entry(key.design_id.as_str())
                .or_default()
                .insert(&key.color, quantity);
        }
        grouped
    }

    pub fn to_counts(&self) -> Vec<PieceCount> {
        self.iter()
            .map(|(key, count)| PieceCount {
                design_id: key.design_id.clone(),
                color: key.color.clone(),
                count,
            })
            .collect()
    }
}

impl FromIterator<(PieceKey, u64)> for PieceTable {
    fn from_iter<I: IntoIterator<Item = (PieceKey, u64)>>(iter: I) -> Self {
        let mut table = PieceTable::new();
        for (key, quantity) in iter {
            table.add(key, quantity);
        }
        table
    }
}

/// The buildability verdict for one set.
pub fn is_buildable(inventory: &Inventory, requirements: &Requirements) -> bool {
    inventory.covers(requirements)
}
