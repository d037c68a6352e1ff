//! Drag-gesture state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode};

/// The kind of direct-manipulation gesture in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    ResizeRow,
    ResizeColumn,
    ReorderRow,
    ReorderColumn,
    PaintScore,
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GestureKind::ResizeRow => "resize_row",
            GestureKind::ResizeColumn => "resize_column",
            GestureKind::ReorderRow => "reorder_row",
            GestureKind::ReorderColumn => "reorder_column",
            GestureKind::PaintScore => "paint_score",
        };
        write!(f, "{}", s)
    }
}

/// Exclusive drag state: at most one gesture is in flight at a time.
///
/// `begin` captures an origin snapshot of type `S`; `cancel` hands it
/// back so the caller can restore pre-drag state, while `end` discards
/// it and commits whatever the in-flight updates produced.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState<S> {
    Idle,
    Dragging { kind: GestureKind, origin: S },
}

impl<S> DragState<S> {
    /// Creates an idle state.
    pub fn new() -> Self {
        DragState::Idle
    }

    /// Returns true if a gesture is in flight.
    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Returns the in-flight gesture kind, if any.
    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { kind, .. } => Some(*kind),
        }
    }

    /// Returns the origin snapshot of the in-flight gesture, if any.
    pub fn origin(&self) -> Option<&S> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { origin, .. } => Some(origin),
        }
    }

    /// Starts a gesture, capturing the origin snapshot.
    ///
    /// Fails while another gesture is in flight; the caller must end or
    /// cancel it first.
    pub fn begin(&mut self, kind: GestureKind, origin: S) -> Result<(), DomainError> {
        if let DragState::Dragging { kind: active, .. } = self {
            return Err(DomainError::new(
                ErrorCode::GestureAlreadyActive,
                format!("Gesture '{}' is already in flight", active),
            )
            .with_detail("active", active.to_string())
            .with_detail("requested", kind.to_string()));
        }
        *self = DragState::Dragging { kind, origin };
        Ok(())
    }

    /// Returns the in-flight kind, failing when idle.
    ///
    /// Update paths call this before applying a move event.
    pub fn active_kind(&self) -> Result<GestureKind, DomainError> {
        self.kind().ok_or_else(|| {
            DomainError::new(ErrorCode::NoActiveGesture, "No gesture is in flight")
        })
    }

    /// Ends the gesture, committing in-flight updates.
    ///
    /// The discarded origin snapshot is returned for bookkeeping.
    pub fn end(&mut self) -> Result<(GestureKind, S), DomainError> {
        match std::mem::replace(self, DragState::Idle) {
            DragState::Dragging { kind, origin } => Ok((kind, origin)),
            DragState::Idle => Err(DomainError::new(
                ErrorCode::NoActiveGesture,
                "No gesture is in flight",
            )),
        }
    }

    /// Cancels the gesture, returning the origin snapshot to restore.
    pub fn cancel(&mut self) -> Result<S, DomainError> {
        self.end().map(|(_, origin)| origin)
    }
}

impl<S> Default for DragState<S> {
    fn default() -> Self {
        Self::new()
    }
}
