//! WADD Calculator - Weighted-additive score computation.

use std::collections::HashMap;

use crate::domain::matrix::{Alternative, Factor, ScoreMatrix};

/// Weighted-additive (WADD) scoring functions.
pub struct WaddCalculator;

impl WaddCalculator {
    /// Computes the WADD score for each alternative, keyed by id.
    ///
    /// # Algorithm
    /// For each alternative with weight `aw`:
    /// - each factor with weight `fw` contributes utility
    ///   `(score + 1) / 2` at combined weight `fw * aw`
    /// - score = weighted mean of utilities, scaled to 0-10 and rounded
    ///   to two decimal places
    ///
    /// # Edge Cases
    /// - No alternatives: Returns empty HashMap
    /// - No factors: Returns 0 for all alternatives
    /// - Zero-weight factor: Skipped entirely, contributes to neither the
    ///   weighted total nor the weight sum
    /// - Zero-weight alternative: Scores exactly 0
    /// - Missing cells: Treated as neutral (0)
    pub fn compute_scores(
        alternatives: &[Alternative],
        factors: &[Factor],
        scores: &ScoreMatrix,
    ) -> HashMap<String, f64> {
        let mut results = HashMap::new();

        for alternative in alternatives {
            let alt_weight = alternative.weight().value();
            let mut weighted_total = 0.0;
            let mut weight_sum = 0.0;

            for factor in factors {
                let factor_weight = factor.weight().value();
                if factor_weight == 0.0 || alt_weight == 0.0 {
                    continue;
                }

                let utility = scores.get(factor.id(), alternative.id()).utility();
                let combined = factor_weight * alt_weight;
                weighted_total += utility * combined;
                weight_sum += combined;
            }

            let score = if weight_sum > 0.0 {
                Self::round2(weighted_total / weight_sum * 10.0)
            } else {
                0.0
            };
            results.insert(alternative.id().as_str().to_string(), score);
        }

        results
    }

    fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AlternativeId, FactorId, Weight};
    use proptest::prelude::*;

    fn alt(id: &str, weight: f64) -> Alternative {
        Alternative::with_id(AlternativeId::new(id).unwrap(), id, Weight::new(weight)).unwrap()
    }

    fn factor(id: &str, weight: f64) -> Factor {
        Factor::with_id(FactorId::new(id).unwrap(), id, Weight::new(weight)).unwrap()
    }

    fn set(matrix: &mut ScoreMatrix, f: &str, a: &str, value: f64) {
        matrix.set_raw(FactorId::new(f).unwrap(), AlternativeId::new(a).unwrap(), value);
    }

    #[test]
    fn empty_board_yields_empty_results() {
        let results = WaddCalculator::compute_scores(&[], &[], &ScoreMatrix::new());
        assert!(results.is_empty());
    }

    #[test]
    fn all_neutral_scores_yield_five() {
        let alternatives = [alt("a1", 1.0), alt("a2", 1.5)];
        let factors = [factor("cost", 1.0), factor("noise", 2.0)];
        let results = WaddCalculator::compute_scores(&alternatives, &factors, &ScoreMatrix::new());
        assert_eq!(results["a1"], 5.0);
        assert_eq!(results["a2"], 5.0);
    }

    #[test]
    fn single_max_cell_yields_ten() {
        let alternatives = [alt("a1", 1.0)];
        let factors = [factor("cost", 1.0)];
        let mut matrix = ScoreMatrix::new();
        set(&mut matrix, "cost", "a1", 1.0);
        let results = WaddCalculator::compute_scores(&alternatives, &factors, &matrix);
        assert_eq!(results["a1"], 10.0);
    }

    #[test]
    fn single_min_cell_yields_zero() {
        let alternatives = [alt("a1", 1.0)];
        let factors = [factor("cost", 1.0)];
        let mut matrix = ScoreMatrix::new();
        set(&mut matrix, "cost", "a1", -1.0);
        let results = WaddCalculator::compute_scores(&alternatives, &factors, &matrix);
        assert_eq!(results["a1"], 0.0);
    }

    #[test]
    fn zero_weight_alternative_scores_zero() {
        let alternatives = [alt("a1", 0.0)];
        let factors = [factor("cost", 1.0)];
        let mut matrix = ScoreMatrix::new();
        set(&mut matrix, "cost", "a1", 1.0);
        let results = WaddCalculator::compute_scores(&alternatives, &factors, &matrix);
        assert_eq!(results["a1"], 0.0);
    }

    #[test]
    fn zero_weight_factor_changes_nothing() {
        let alternatives = [alt("a1", 1.0)];
        let mut matrix = ScoreMatrix::new();
        set(&mut matrix, "cost", "a1", 0.5);
        set(&mut matrix, "irrelevant", "a1", -1.0);

        let with_factor = WaddCalculator::compute_scores(
            &alternatives,
            &[factor("cost", 1.0), factor("irrelevant", 0.0)],
            &matrix,
        );
        let without_factor =
            WaddCalculator::compute_scores(&alternatives, &[factor("cost", 1.0)], &matrix);
        assert_eq!(with_factor["a1"], without_factor["a1"]);
    }

    #[test]
    fn no_factors_yields_zero_filled_results() {
        let alternatives = [alt("a1", 1.0), alt("a2", 2.0)];
        let results = WaddCalculator::compute_scores(&alternatives, &[], &ScoreMatrix::new());
        assert_eq!(results["a1"], 0.0);
        assert_eq!(results["a2"], 0.0);
    }

    #[test]
    fn missing_cells_read_as_neutral() {
        let alternatives = [alt("a1", 1.0)];
        let factors = [factor("cost", 1.0), factor("noise", 1.0)];
        let mut matrix = ScoreMatrix::new();
        set(&mut matrix, "cost", "a1", 1.0);
        // noise cell absent: utility 0.5 at weight 1 -> (1.0 + 0.5) / 2 * 10
        let results = WaddCalculator::compute_scores(&alternatives, &factors, &matrix);
        assert_eq!(results["a1"], 7.5);
    }

    #[test]
    fn factor_weights_shift_the_mean() {
        let alternatives = [alt("a1", 1.0)];
        let factors = [factor("cost", 2.0), factor("noise", 1.0)];
        let mut matrix = ScoreMatrix::new();
        set(&mut matrix, "cost", "a1", 1.0);
        set(&mut matrix, "noise", "a1", -1.0);
        // (1.0 * 2 + 0.0 * 1) / 3 * 10
        let results = WaddCalculator::compute_scores(&alternatives, &factors, &matrix);
        assert_eq!(results["a1"], 6.67);
    }

    #[test]
    fn results_round_to_two_decimals() {
        let alternatives = [alt("a1", 1.0)];
        let factors = [factor("f1", 1.0), factor("f2", 1.0), factor("f3", 1.0)];
        let mut matrix = ScoreMatrix::new();
        set(&mut matrix, "f1", "a1", 1.0);
        // (1.0 + 0.5 + 0.5) / 3 * 10 = 6.666...
        let results = WaddCalculator::compute_scores(&alternatives, &factors, &matrix);
        assert_eq!(results["a1"], 6.67);
    }

    proptest! {
        #[test]
        fn scores_stay_within_zero_to_ten(
            cells in proptest::collection::vec(-1.0f64..=1.0, 1..12),
            factor_weights in proptest::collection::vec(0.0f64..4.0, 1..12),
            alt_weight in 0.0f64..4.0,
        ) {
            let n = cells.len().min(factor_weights.len());
            let alternatives = [alt("a1", alt_weight)];
            let factors: Vec<Factor> = (0..n)
                .map(|i| factor(&format!("f{}", i), factor_weights[i]))
                .collect();
            let mut matrix = ScoreMatrix::new();
            for (i, value) in cells.iter().take(n).enumerate() {
                set(&mut matrix, &format!("f{}", i), "a1", *value);
            }

            let results = WaddCalculator::compute_scores(&alternatives, &factors, &matrix);
            let score = results["a1"];
            prop_assert!((0.0..=10.0).contains(&score));
        }
    }
}
