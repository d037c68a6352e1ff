//! Rank assignment from computed scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::AlternativeId;

/// An alternative's position among its peers: "rank 2 of 5".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rank {
    pub rank: usize,
    pub total: usize,
}

/// Assigns a 1-based rank to each alternative by descending score.
///
/// The sort is stable: equal scores keep their insertion order, so ties
/// rank earlier-added alternatives first. Alternatives with no computed
/// score are ranked as if they scored 0.
pub fn build_rank_lookup(
    ordered_ids: &[AlternativeId],
    scores: &HashMap<String, f64>,
) -> HashMap<String, Rank> {
    let total = ordered_ids.len();
    let mut pairs: Vec<(&AlternativeId, f64)> = ordered_ids
        .iter()
        .map(|id| (id, scores.get(id.as_str()).copied().unwrap_or(0.0)))
        .collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    pairs
        .into_iter()
        .enumerate()
        .map(|(index, (id, _))| {
            (
                id.as_str().to_string(),
                Rank {
                    rank: index + 1,
                    total,
                },
            )
        })
        .collect()
}
