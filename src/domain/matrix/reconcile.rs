//! Id-keyed matrix reconciliation after structural edits.

use crate::domain::foundation::{AlternativeId, FactorId, Score};

use super::ScoreMatrix;

/// Rebuilds the matrix so it covers exactly the (factor, alternative)
/// cross-product of the given ids.
///
/// Pairs present in both `previous` and the new id sets keep their stored
/// score, matched by id and not by position. New pairs start neutral.
/// Removed ids produce no entries. The operation is idempotent and
/// insensitive to the ordering of either id list.
pub fn reconcile(
    previous: &ScoreMatrix,
    factor_ids: &[FactorId],
    alternative_ids: &[AlternativeId],
) -> ScoreMatrix {
    let mut next = ScoreMatrix::new();
    for factor_id in factor_ids {
        for alternative_id in alternative_ids {
            let score = previous
                .stored(factor_id, alternative_id)
                .unwrap_or(Score::NEUTRAL);
            next.set(factor_id.clone(), alternative_id.clone(), score);
        }
    }
    next
}
