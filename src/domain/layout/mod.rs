//! Layout Module - Proportional space allocation and drag geometry.
//!
//! Pure geometry services for direct-manipulation editing:
//!
//! - `SpaceAllocator` - Turns ordered weights into pixel extents/offsets
//! - `rescale_weight_from_delta` - Inverse mapping from drag-resize pixels
//!   back to a weight update
//! - `resolve_reorder_target` - Insertion index for a dragged item
//! - `DragState` - Exclusive drag-gesture state machine with cancel
//!
//! The allocator is applied once per axis; rows and columns never share a
//! weight pool, spacing, or available extent.

mod allocator;
mod drag;
mod gesture;

pub use allocator::{AxisAllocation, AxisSpacing, SpaceAllocator};
pub use drag::{rescale_weight_from_delta, resolve_reorder_target};
pub use gesture::{DragState, GestureKind};
