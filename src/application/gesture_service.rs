//! GestureService - translates direct-manipulation gestures into domain
//! commands.

use std::collections::HashMap;

use tracing::debug;

use crate::config::{LayoutConfig, ScoringConfig};
use crate::domain::analysis::{build_rank_lookup, Rank, WaddCalculator};
use crate::domain::foundation::{
    AlternativeId, DomainError, ErrorCode, FactorId, Score, Weight,
};
use crate::domain::layout::{
    rescale_weight_from_delta, resolve_reorder_target, AxisAllocation, AxisSpacing, DragState,
    GestureKind, SpaceAllocator,
};
use crate::domain::matrix::DecisionBoard;
use crate::domain::view::BoardOverview;

use super::coalescer::FrameCoalescer;

/// Orchestrates drag gestures over one decision board.
///
/// Rows are factors, columns are alternatives. A gesture begins by
/// snapshotting the board, applies synchronous domain commands on every
/// pointer move, and either commits on end or restores the snapshot on
/// cancel. Structural edits between gestures go straight to the board via
/// [`board_mut`](GestureService::board_mut).
#[derive(Debug, Clone)]
pub struct GestureService {
    board: DecisionBoard,
    drag: DragState<DecisionBoard>,
    coalescer: FrameCoalescer,
    layout: LayoutConfig,
    scoring: ScoringConfig,
}

impl GestureService {
    /// Creates a service over an empty board.
    pub fn new(layout: LayoutConfig, scoring: ScoringConfig) -> Self {
        Self::with_board(DecisionBoard::new(), layout, scoring)
    }

    /// Creates a service over an existing board.
    pub fn with_board(board: DecisionBoard, layout: LayoutConfig, scoring: ScoringConfig) -> Self {
        Self {
            board,
            drag: DragState::new(),
            coalescer: FrameCoalescer::new(),
            layout,
            scoring,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &DecisionBoard {
        &self.board
    }

    /// Returns the board for structural edits between gestures.
    pub fn board_mut(&mut self) -> &mut DecisionBoard {
        &mut self.board
    }

    /// Returns the in-flight gesture kind, if any.
    pub fn active_gesture(&self) -> Option<GestureKind> {
        self.drag.kind()
    }

    /// Starts a gesture, snapshotting the board for cancellation.
    ///
    /// Fails while another gesture is in flight.
    pub fn begin_gesture(&mut self, kind: GestureKind) -> Result<(), DomainError> {
        self.drag.begin(kind, self.board.clone())?;
        debug!(gesture = %kind, "gesture started");
        Ok(())
    }

    /// Applies a row-resize move: the factor at `index` takes the weight
    /// implied by dragging its extent from `start_extent` to `new_extent`.
    ///
    /// Repeated moves rescale from the gesture-origin weight, so the
    /// update never compounds across pointer events.
    pub fn update_resize_row(
        &mut self,
        index: usize,
        start_extent: f64,
        new_extent: f64,
    ) -> Result<Weight, DomainError> {
        let (factor_id, weight) = {
            let origin = self.require_gesture(GestureKind::ResizeRow)?;
            let factor = origin.factors().get(index).ok_or_else(|| {
                DomainError::index_out_of_bounds("factors", index, origin.factors().len())
            })?;
            let weight = rescale_weight_from_delta(
                factor.weight(),
                start_extent,
                new_extent,
                self.scoring.weight_min,
                self.scoring.weight_max,
            );
            (factor.id().clone(), weight)
        };
        self.board.set_factor_weight(&factor_id, weight)?;
        debug!(factor_id = %factor_id, weight = weight.value(), "row resized");
        Ok(weight)
    }

    /// Applies a column-resize move for the alternative at `index`.
    pub fn update_resize_column(
        &mut self,
        index: usize,
        start_extent: f64,
        new_extent: f64,
    ) -> Result<Weight, DomainError> {
        let (alternative_id, weight) = {
            let origin = self.require_gesture(GestureKind::ResizeColumn)?;
            let alternative = origin.alternatives().get(index).ok_or_else(|| {
                DomainError::index_out_of_bounds(
                    "alternatives",
                    index,
                    origin.alternatives().len(),
                )
            })?;
            let weight = rescale_weight_from_delta(
                alternative.weight(),
                start_extent,
                new_extent,
                self.scoring.weight_min,
                self.scoring.weight_max,
            );
            (alternative.id().clone(), weight)
        };
        self.board.set_alternative_weight(&alternative_id, weight)?;
        debug!(alternative_id = %alternative_id, weight = weight.value(), "column resized");
        Ok(weight)
    }

    /// Applies a row-reorder move: the factor at `from` is dragged so its
    /// center sits at `dragged_center` along an axis of `available`
    /// pixels. Returns the index the factor now occupies.
    pub fn update_reorder_row(
        &mut self,
        from: usize,
        dragged_center: f64,
        available: f64,
    ) -> Result<usize, DomainError> {
        self.require_gesture(GestureKind::ReorderRow)?;
        let weights: Vec<Weight> = self.board.factors().iter().map(|f| f.weight()).collect();
        if from >= weights.len() {
            return Err(DomainError::index_out_of_bounds(
                "factors",
                from,
                weights.len(),
            ));
        }
        let allocation = SpaceAllocator::allocate(&weights, &self.row_spacing(), available);
        let target = Self::reorder_target(&allocation, from, dragged_center);
        if target != from {
            self.board.reorder_factors(from, target)?;
            debug!(from, target, "row reordered");
        }
        Ok(target)
    }

    /// Applies a column-reorder move for the alternative at `from`.
    pub fn update_reorder_column(
        &mut self,
        from: usize,
        dragged_center: f64,
        available: f64,
    ) -> Result<usize, DomainError> {
        self.require_gesture(GestureKind::ReorderColumn)?;
        let weights: Vec<Weight> = self
            .board
            .alternatives()
            .iter()
            .map(|a| a.weight())
            .collect();
        if from >= weights.len() {
            return Err(DomainError::index_out_of_bounds(
                "alternatives",
                from,
                weights.len(),
            ));
        }
        let allocation = SpaceAllocator::allocate(&weights, &self.column_spacing(), available);
        let target = Self::reorder_target(&allocation, from, dragged_center);
        if target != from {
            self.board.reorder_alternatives(from, target)?;
            debug!(from, target, "column reordered");
        }
        Ok(target)
    }

    /// Applies a score-paint move: the cell takes the raw value, clamped
    /// to the score range and marked modified.
    pub fn update_paint_score(
        &mut self,
        factor_id: &FactorId,
        alternative_id: &AlternativeId,
        value: f64,
    ) -> Result<Score, DomainError> {
        self.require_gesture(GestureKind::PaintScore)?;
        let score = self.board.set_score(factor_id, alternative_id, value)?;
        debug!(
            factor_id = %factor_id,
            alternative_id = %alternative_id,
            score = score.value(),
            "score painted"
        );
        Ok(score)
    }

    /// Ends the gesture, committing the in-flight updates.
    pub fn end_gesture(&mut self) -> Result<GestureKind, DomainError> {
        let (kind, _origin) = self.drag.end()?;
        debug!(gesture = %kind, "gesture committed");
        Ok(kind)
    }

    /// Cancels the gesture, restoring the board to its origin snapshot.
    pub fn cancel_gesture(&mut self) -> Result<GestureKind, DomainError> {
        let kind = self.drag.active_kind()?;
        self.board = self.drag.cancel()?;
        debug!(gesture = %kind, "gesture cancelled, origin restored");
        Ok(kind)
    }

    /// Marks a recompute pending; true means the caller must schedule a
    /// flush.
    pub fn request_frame(&mut self) -> bool {
        self.coalescer.request()
    }

    /// Consumes the pending flag at frame time.
    pub fn take_frame(&mut self) -> bool {
        self.coalescer.take()
    }

    /// Computes row geometry (one entry per factor) for the given
    /// available extent.
    pub fn layout_rows(&self, available: f64) -> AxisAllocation {
        let weights: Vec<Weight> = self.board.factors().iter().map(|f| f.weight()).collect();
        SpaceAllocator::allocate(&weights, &self.row_spacing(), available)
    }

    /// Computes column geometry (one entry per alternative) for the given
    /// available extent.
    pub fn layout_columns(&self, available: f64) -> AxisAllocation {
        let weights: Vec<Weight> = self
            .board
            .alternatives()
            .iter()
            .map(|a| a.weight())
            .collect();
        SpaceAllocator::allocate(&weights, &self.column_spacing(), available)
    }

    /// Computes the WADD score per alternative id.
    pub fn wadd_scores(&self) -> HashMap<String, f64> {
        WaddCalculator::compute_scores(
            self.board.alternatives(),
            self.board.factors(),
            self.board.scores(),
        )
    }

    /// Computes the rank per alternative id from the current WADD scores.
    pub fn rank_lookup(&self) -> HashMap<String, Rank> {
        build_rank_lookup(&self.board.alternative_ids(), &self.wadd_scores())
    }

    /// Builds a presentation snapshot of the board.
    pub fn overview(&self) -> BoardOverview {
        BoardOverview::from_board(&self.board)
    }

    fn row_spacing(&self) -> AxisSpacing {
        AxisSpacing {
            min_extent: self.layout.row_min_extent,
            gap: self.layout.item_gap,
            origin: self.layout.origin,
        }
    }

    fn column_spacing(&self) -> AxisSpacing {
        AxisSpacing {
            min_extent: self.layout.column_min_extent,
            gap: self.layout.item_gap,
            origin: self.layout.origin,
        }
    }

    fn reorder_target(allocation: &AxisAllocation, from: usize, dragged_center: f64) -> usize {
        let mut other_offsets = Vec::with_capacity(allocation.len().saturating_sub(1));
        let mut other_extents = Vec::with_capacity(allocation.len().saturating_sub(1));
        for i in 0..allocation.len() {
            if i != from {
                other_offsets.push(allocation.offsets[i]);
                other_extents.push(allocation.extents[i]);
            }
        }
        resolve_reorder_target(dragged_center, from, &other_offsets, &other_extents)
    }

    /// Checks that the expected gesture is in flight and hands back its
    /// origin snapshot.
    fn require_gesture(&self, expected: GestureKind) -> Result<&DecisionBoard, DomainError> {
        let active = self.drag.active_kind()?;
        if active != expected {
            return Err(DomainError::new(
                ErrorCode::GestureMismatch,
                format!(
                    "Gesture '{}' is in flight, expected '{}'",
                    active, expected
                ),
            )
            .with_detail("active", active.to_string())
            .with_detail("expected", expected.to_string()));
        }
        self.drag.origin().ok_or_else(|| {
            DomainError::new(ErrorCode::NoActiveGesture, "No gesture is in flight")
        })
    }
}

#[cfg(test)]
#[path = "gesture_service_test.rs"]
mod gesture_service_test;
