//! Modified-cell tracking for user-entered scores.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::{AlternativeId, FactorId};

/// The set of cells whose score was explicitly entered by the user, as
/// opposed to the neutral default. The set is always a subset of the live
/// (factor, alternative) cross-product; structural edits prune it in
/// lockstep with matrix reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiedCells {
    cells: HashSet<(FactorId, AlternativeId)>,
}

impl ModifiedCells {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a cell as user-modified.
    pub fn mark(&mut self, factor_id: FactorId, alternative_id: AlternativeId) {
        self.cells.insert((factor_id, alternative_id));
    }

    /// Returns true if the cell was user-modified.
    pub fn contains(&self, factor_id: &FactorId, alternative_id: &AlternativeId) -> bool {
        self.cells
            .iter()
            .any(|(f, a)| f == factor_id && a == alternative_id)
    }

    /// Drops every entry whose factor or alternative is no longer live.
    pub fn retain_valid(&mut self, factor_ids: &[FactorId], alternative_ids: &[AlternativeId]) {
        let factors: HashSet<&FactorId> = factor_ids.iter().collect();
        let alternatives: HashSet<&AlternativeId> = alternative_ids.iter().collect();
        self.cells
            .retain(|(f, a)| factors.contains(f) && alternatives.contains(a));
    }

    /// Returns the number of modified cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cell is marked.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the marked (factor, alternative) pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(FactorId, AlternativeId)> {
        self.cells.iter()
    }
}
