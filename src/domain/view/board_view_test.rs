#[cfg(test)]
mod tests {
    use crate::domain::foundation::{AlternativeId, FactorId, Weight};
    use crate::domain::matrix::{Alternative, DecisionBoard, Factor};
    use crate::domain::view::board_view::BoardOverview;

    fn sample_board() -> DecisionBoard {
        let mut board = DecisionBoard::new();
        board
            .add_factor(
                Factor::with_id(FactorId::new("cost").unwrap(), "Cost", Weight::ONE).unwrap(),
            )
            .unwrap();
        board
            .add_factor(
                Factor::with_id(FactorId::new("noise").unwrap(), "Noise", Weight::new(2.0))
                    .unwrap(),
            )
            .unwrap();
        board
            .add_alternative(
                Alternative::with_id(AlternativeId::new("a1").unwrap(), "First", Weight::ONE)
                    .unwrap(),
            )
            .unwrap();
        board
            .add_alternative(
                Alternative::with_id(AlternativeId::new("a2").unwrap(), "Second", Weight::ONE)
                    .unwrap(),
            )
            .unwrap();
        board
    }

    #[test]
    fn overview_serializes_with_camel_case_fields() {
        let overview = BoardOverview::from_board(&sample_board());

        let json = serde_json::to_string(&overview).unwrap();
        assert!(json.contains("waddScore"));
        assert!(json.contains("rankTotal"));
        assert!(json.contains("factorId"));
        assert!(json.contains("generatedAt"));
    }

    #[test]
    fn overview_preserves_display_order() {
        let overview = BoardOverview::from_board(&sample_board());

        assert_eq!(overview.alternatives[0].id, "a1");
        assert_eq!(overview.alternatives[1].id, "a2");
        assert_eq!(overview.factors[0].id, "cost");
        assert_eq!(overview.rows[0].factor_id, "cost");
        assert_eq!(overview.rows[1].factor_id, "noise");
    }

    #[test]
    fn overview_rows_are_dense_per_alternative() {
        let mut board = sample_board();
        board
            .set_score(
                &FactorId::new("cost").unwrap(),
                &AlternativeId::new("a2").unwrap(),
                0.5,
            )
            .unwrap();

        let overview = BoardOverview::from_board(&board);
        assert_eq!(overview.rows.len(), 2);
        for row in &overview.rows {
            assert_eq!(row.cells.len(), 2);
        }
        let cost_row = &overview.rows[0];
        assert_eq!(cost_row.cells[0].score, 0.0);
        assert!(!cost_row.cells[0].modified);
        assert_eq!(cost_row.cells[1].score, 0.5);
        assert!(cost_row.cells[1].modified);
    }

    #[test]
    fn overview_ranks_follow_wadd_scores() {
        let mut board = sample_board();
        board
            .set_score(
                &FactorId::new("cost").unwrap(),
                &AlternativeId::new("a2").unwrap(),
                1.0,
            )
            .unwrap();

        let overview = BoardOverview::from_board(&board);
        let first = &overview.alternatives[0];
        let second = &overview.alternatives[1];
        assert!(second.wadd_score > first.wadd_score);
        assert_eq!(second.rank, 1);
        assert_eq!(first.rank, 2);
        assert_eq!(first.rank_total, 2);
    }

    #[test]
    fn overview_of_empty_board_is_empty() {
        let overview = BoardOverview::from_board(&DecisionBoard::new());
        assert!(overview.alternatives.is_empty());
        assert!(overview.factors.is_empty());
        assert!(overview.rows.is_empty());
    }
}
