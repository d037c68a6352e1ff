//! Sparse score storage keyed by factor and alternative ids.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{AlternativeId, FactorId, Score};

/// Scores for every (factor, alternative) pair, stored as nested maps
/// keyed by id. Absent pairs read as neutral; stale ids are "entry
/// absent", never a fault.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreMatrix {
    rows: HashMap<FactorId, HashMap<AlternativeId, Score>>,
}

impl ScoreMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the score for a pair, or neutral if no entry exists.
    pub fn get(&self, factor_id: &FactorId, alternative_id: &AlternativeId) -> Score {
        self.stored(factor_id, alternative_id)
            .unwrap_or(Score::NEUTRAL)
    }

    /// Returns the stored score for a pair, if any.
    pub fn stored(&self, factor_id: &FactorId, alternative_id: &AlternativeId) -> Option<Score> {
        self.rows
            .get(factor_id)
            .and_then(|row| row.get(alternative_id))
            .copied()
    }

    /// Writes a score for a pair, creating the row if needed.
    pub fn set(&mut self, factor_id: FactorId, alternative_id: AlternativeId, score: Score) {
        self.rows
            .entry(factor_id)
            .or_default()
            .insert(alternative_id, score);
    }

    /// Writes a raw value for a pair, clamping it to the score range.
    pub fn set_raw(&mut self, factor_id: FactorId, alternative_id: AlternativeId, value: f64) {
        self.set(factor_id, alternative_id, Score::new(value));
    }

    /// Returns true if an entry exists for the pair.
    pub fn contains(&self, factor_id: &FactorId, alternative_id: &AlternativeId) -> bool {
        self.stored(factor_id, alternative_id).is_some()
    }

    /// Returns the row for a factor, if any.
    pub fn row(&self, factor_id: &FactorId) -> Option<&HashMap<AlternativeId, Score>> {
        self.rows.get(factor_id)
    }

    /// Returns the ids of factors that have a row.
    pub fn factor_ids(&self) -> impl Iterator<Item = &FactorId> {
        self.rows.keys()
    }

    /// Returns the total number of stored cells.
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    /// Returns true if no cells are stored.
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Iterates over every stored (factor, alternative, score) triple.
    pub fn iter(&self) -> impl Iterator<Item = (&FactorId, &AlternativeId, Score)> {
        self.rows.iter().flat_map(|(factor_id, row)| {
            row.iter()
                .map(move |(alternative_id, score)| (factor_id, alternative_id, *score))
        })
    }
}
