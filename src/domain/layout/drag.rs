//! Pixel-to-domain mappings for drag gestures.

use crate::domain::foundation::Weight;

/// Converts an observed resize from `start_extent` to `new_extent` back
/// into a weight update: the weight scales by the same ratio as the
/// extent, clamped to the supported weight band.
///
/// A degenerate `start_extent` (zero or negative) keeps the start weight;
/// there is no ratio to derive from a collapsed item.
pub fn rescale_weight_from_delta(
    start_weight: Weight,
    start_extent: f64,
    new_extent: f64,
    weight_min: f64,
    weight_max: f64,
) -> Weight {
    if start_extent <= 0.0 {
        return start_weight;
    }
    let scaled = start_weight.value() * (new_extent / start_extent);
    Weight::new(scaled.clamp(weight_min, weight_max))
}

/// Resolves the insertion index for a dragged item from its current
/// center position and the static geometry of every other item.
///
/// The target is the count of other items whose center lies before the
/// dragged center, minus one when that count exceeds the item's original
/// index. The adjustment keeps the index stable while dragging past
/// exactly one neighbor; changing it reintroduces drag jitter.
pub fn resolve_reorder_target(
    dragged_center: f64,
    original_index: usize,
    other_offsets: &[f64],
    other_extents: &[f64],
) -> usize {
    let passed = other_offsets
        .iter()
        .zip(other_extents)
        .filter(|(offset, extent)| *offset + *extent / 2.0 < dragged_center)
        .count();
    if passed > original_index {
        passed - 1
    } else {
        passed
    }
}
