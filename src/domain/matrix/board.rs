//! Decision board aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AlternativeId, DomainError, FactorId, Score, Weight};

use super::collections::splice_move;
use super::{reconcile, Alternative, Factor, ModifiedCells, ScoreMatrix};

/// The aggregate root for one decision: ordered alternatives and factors,
/// the score matrix joining them, and the modified-cell set.
///
/// Every structural command reconciles the matrix and prunes the
/// modified-cell set before returning, so the matrix always covers the
/// exact live cross-product and never holds stale ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionBoard {
    alternatives: Vec<Alternative>,
    factors: Vec<Factor>,
    scores: ScoreMatrix,
    modified: ModifiedCells,
}

impl DecisionBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the alternatives in display order.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// Returns the factors in display order.
    pub fn factors(&self) -> &[Factor] {
        &self.factors
    }

    /// Returns the alternative ids in display order.
    pub fn alternative_ids(&self) -> Vec<AlternativeId> {
        self.alternatives.iter().map(|a| a.id().clone()).collect()
    }

    /// Returns the factor ids in display order.
    pub fn factor_ids(&self) -> Vec<FactorId> {
        self.factors.iter().map(|f| f.id().clone()).collect()
    }

    /// Returns the score matrix.
    pub fn scores(&self) -> &ScoreMatrix {
        &self.scores
    }

    /// Returns the modified-cell set.
    pub fn modified(&self) -> &ModifiedCells {
        &self.modified
    }

    /// Finds an alternative by id.
    pub fn find_alternative(&self, id: &AlternativeId) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.id() == id)
    }

    /// Finds a factor by id.
    pub fn find_factor(&self, id: &FactorId) -> Option<&Factor> {
        self.factors.iter().find(|f| f.id() == id)
    }

    /// Returns the score for a cell, neutral when the pair is absent.
    pub fn score(&self, factor_id: &FactorId, alternative_id: &AlternativeId) -> Score {
        self.scores.get(factor_id, alternative_id)
    }

    /// Returns true if a cell's score was explicitly entered by the user.
    pub fn is_modified(&self, factor_id: &FactorId, alternative_id: &AlternativeId) -> bool {
        self.modified.contains(factor_id, alternative_id)
    }

    /// Adds an alternative and fills its column with neutral defaults.
    ///
    /// Scores already stored for other alternatives are untouched.
    pub fn add_alternative(&mut self, alternative: Alternative) -> Result<(), DomainError> {
        if self.find_alternative(alternative.id()).is_some() {
            return Err(DomainError::duplicate_id(
                "Alternative",
                alternative.id().as_str(),
            ));
        }
        self.alternatives.push(alternative);
        self.reconcile_state();
        Ok(())
    }

    /// Adds a factor and fills its row with neutral defaults.
    pub fn add_factor(&mut self, factor: Factor) -> Result<(), DomainError> {
        if self.find_factor(factor.id()).is_some() {
            return Err(DomainError::duplicate_id("Factor", factor.id().as_str()));
        }
        self.factors.push(factor);
        self.reconcile_state();
        Ok(())
    }

    /// Removes an alternative, cascading across every factor row.
    pub fn remove_alternative(&mut self, id: &AlternativeId) -> Result<Alternative, DomainError> {
        let position = self
            .alternatives
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| DomainError::alternative_not_found(id.as_str()))?;
        let removed = self.alternatives.remove(position);
        self.reconcile_state();
        Ok(removed)
    }

    /// Removes a factor, dropping its entire row.
    pub fn remove_factor(&mut self, id: &FactorId) -> Result<Factor, DomainError> {
        let position = self
            .factors
            .iter()
            .position(|f| f.id() == id)
            .ok_or_else(|| DomainError::factor_not_found(id.as_str()))?;
        let removed = self.factors.remove(position);
        self.reconcile_state();
        Ok(removed)
    }

    /// Renames an alternative. Scores and modified flags are untouched.
    pub fn rename_alternative(
        &mut self,
        id: &AlternativeId,
        label: impl Into<String>,
    ) -> Result<(), DomainError> {
        let alternative = self
            .alternatives
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| DomainError::alternative_not_found(id.as_str()))?;
        alternative.rename(label)?;
        Ok(())
    }

    /// Renames a factor. Scores and modified flags are untouched.
    pub fn rename_factor(
        &mut self,
        id: &FactorId,
        label: impl Into<String>,
    ) -> Result<(), DomainError> {
        let factor = self
            .factors
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or_else(|| DomainError::factor_not_found(id.as_str()))?;
        factor.rename(label)?;
        Ok(())
    }

    /// Replaces an alternative's weight.
    pub fn set_alternative_weight(
        &mut self,
        id: &AlternativeId,
        weight: Weight,
    ) -> Result<(), DomainError> {
        let alternative = self
            .alternatives
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| DomainError::alternative_not_found(id.as_str()))?;
        alternative.set_weight(weight);
        Ok(())
    }

    /// Replaces a factor's weight.
    pub fn set_factor_weight(&mut self, id: &FactorId, weight: Weight) -> Result<(), DomainError> {
        let factor = self
            .factors
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or_else(|| DomainError::factor_not_found(id.as_str()))?;
        factor.set_weight(weight);
        Ok(())
    }

    /// Moves an alternative to a new display position.
    ///
    /// Ordering is presentation state; the score matrix is untouched.
    pub fn reorder_alternatives(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        splice_move(&mut self.alternatives, from, to)
    }

    /// Moves a factor to a new display position.
    pub fn reorder_factors(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        splice_move(&mut self.factors, from, to)
    }

    /// Writes a score for a live cell, clamping the raw value and marking
    /// the cell modified in the same step.
    pub fn set_score(
        &mut self,
        factor_id: &FactorId,
        alternative_id: &AlternativeId,
        value: f64,
    ) -> Result<Score, DomainError> {
        if self.find_factor(factor_id).is_none() {
            return Err(DomainError::factor_not_found(factor_id.as_str()));
        }
        if self.find_alternative(alternative_id).is_none() {
            return Err(DomainError::alternative_not_found(alternative_id.as_str()));
        }
        let score = Score::new(value);
        self.scores
            .set(factor_id.clone(), alternative_id.clone(), score);
        self.modified.mark(factor_id.clone(), alternative_id.clone());
        Ok(score)
    }

    /// Rebuilds the matrix to the live cross-product and prunes dead
    /// modified-cell entries.
    fn reconcile_state(&mut self) {
        let factor_ids = self.factor_ids();
        let alternative_ids = self.alternative_ids();
        self.scores = reconcile(&self.scores, &factor_ids, &alternative_ids);
        self.modified.retain_valid(&factor_ids, &alternative_ids);
    }
}
