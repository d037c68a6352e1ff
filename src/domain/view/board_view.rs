use serde::Serialize;

use crate::domain::analysis::{build_rank_lookup, Rank, WaddCalculator};
use crate::domain::foundation::Timestamp;
use crate::domain::matrix::DecisionBoard;

/// Snapshot of the whole board for the presentation layer - alternatives
/// with computed scores and ranks, factors, and dense score rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardOverview {
    /// Alternatives in display order, with WADD score and rank
    pub alternatives: Vec<AlternativeView>,

    /// Factors in display order
    pub factors: Vec<FactorView>,

    /// Dense score rows, one per factor, cells in alternative order
    pub rows: Vec<RowView>,

    /// When this snapshot was generated
    pub generated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeView {
    pub id: String,
    pub label: String,
    pub weight: f64,
    /// WADD score on the 0-10 scale
    pub wadd_score: f64,
    /// Rank among alternatives (1 = best)
    pub rank: usize,
    pub rank_total: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorView {
    pub id: String,
    pub label: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub factor_id: String,
    pub cells: Vec<CellView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    /// Raw score in [-1, 1]
    pub score: f64,
    /// True when the user entered this score explicitly
    pub modified: bool,
}

impl BoardOverview {
    /// Builds a snapshot of the given board, computing WADD scores and
    /// ranks on the way.
    pub fn from_board(board: &DecisionBoard) -> Self {
        let wadd =
            WaddCalculator::compute_scores(board.alternatives(), board.factors(), board.scores());
        let ranks = build_rank_lookup(&board.alternative_ids(), &wadd);
        let total = board.alternatives().len();

        let alternatives = board
            .alternatives()
            .iter()
            .map(|alternative| {
                let id = alternative.id().as_str();
                let rank = ranks
                    .get(id)
                    .copied()
                    .unwrap_or(Rank { rank: 0, total });
                AlternativeView {
                    id: id.to_string(),
                    label: alternative.label().to_string(),
                    weight: alternative.weight().value(),
                    wadd_score: wadd.get(id).copied().unwrap_or(0.0),
                    rank: rank.rank,
                    rank_total: rank.total,
                }
            })
            .collect();

        let factors = board
            .factors()
            .iter()
            .map(|factor| FactorView {
                id: factor.id().as_str().to_string(),
                label: factor.label().to_string(),
                weight: factor.weight().value(),
            })
            .collect();

        let rows = board
            .factors()
            .iter()
            .map(|factor| RowView {
                factor_id: factor.id().as_str().to_string(),
                cells: board
                    .alternatives()
                    .iter()
                    .map(|alternative| CellView {
                        score: board.score(factor.id(), alternative.id()).value(),
                        modified: board.is_modified(factor.id(), alternative.id()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            alternatives,
            factors,
            rows,
            generated_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
#[path = "board_view_test.rs"]
mod board_view_test;
