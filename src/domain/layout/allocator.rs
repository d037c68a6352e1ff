//! Proportional space allocation for one axis.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Weight;

/// Guards the proportional share against an all-zero weight pool.
const MIN_TOTAL_WEIGHT: f64 = 1e-9;

/// Per-axis spacing parameters. Rows and columns each carry their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpacing {
    /// Smallest extent an item may occupy before compression kicks in.
    pub min_extent: f64,
    /// Fixed gap trailing each item.
    pub gap: f64,
    /// Offset of the first item.
    pub origin: f64,
}

impl AxisSpacing {
    /// Creates spacing with the given minimum extent, no gap, origin 0.
    pub fn with_min_extent(min_extent: f64) -> Self {
        Self {
            min_extent,
            gap: 0.0,
            origin: 0.0,
        }
    }
}

/// Pixel geometry for one axis: an extent and a cumulative offset per item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisAllocation {
    pub extents: Vec<f64>,
    pub offsets: Vec<f64>,
}

impl AxisAllocation {
    /// Returns the number of items on the axis.
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Returns true if the axis holds no items.
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Returns the center position of an item, if it exists.
    pub fn center(&self, index: usize) -> Option<f64> {
        let extent = self.extents.get(index)?;
        let offset = self.offsets.get(index)?;
        Some(offset + extent / 2.0)
    }

    /// Returns the summed extent of all items, gaps excluded.
    pub fn total_extent(&self) -> f64 {
        self.extents.iter().sum()
    }
}

/// Proportional geometry allocation functions.
pub struct SpaceAllocator;

impl SpaceAllocator {
    /// Distributes an available pixel extent across weighted items.
    ///
    /// # Algorithm
    /// Every item is floored at `min_extent`; the space left over is
    /// split proportionally to weight. When the minimums alone exceed the
    /// available extent, all items shrink by the identical ratio
    /// `available / (min_extent * n)`. A final uniform scale-down pass
    /// absorbs floating-point accumulation and the fixed per-item gap so
    /// the consumed total never exceeds the available extent. Offsets are
    /// cumulative from `origin`, each item followed by its gap.
    ///
    /// # Edge Cases
    /// - No items: Returns an empty allocation
    /// - All-zero weights: Free space stays undistributed, items sit at
    ///   the uniform minimum
    /// - Negative available extent: Treated as 0
    pub fn allocate(weights: &[Weight], spacing: &AxisSpacing, available: f64) -> AxisAllocation {
        let n = weights.len();
        if n == 0 {
            return AxisAllocation::default();
        }
        let available = available.max(0.0);

        let total_weight: f64 = weights
            .iter()
            .map(|w| w.value())
            .sum::<f64>()
            .max(MIN_TOTAL_WEIGHT);
        let base_extent = spacing.min_extent * n as f64;
        let free_extent = (available - base_extent).max(0.0);
        let compression = if base_extent > available {
            available / base_extent
        } else {
            1.0
        };

        let mut extents: Vec<f64> = weights
            .iter()
            .map(|w| {
                (spacing.min_extent + free_extent * (w.value() / total_weight)) * compression
            })
            .collect();

        let extent_sum: f64 = extents.iter().sum();
        let consumed = extent_sum + spacing.gap * n as f64;
        if consumed > available && extent_sum > 0.0 {
            let target = (available - spacing.gap * n as f64).max(0.0);
            let scale = target / extent_sum;
            for extent in &mut extents {
                *extent *= scale;
            }
        }

        let mut offsets = Vec::with_capacity(n);
        let mut cursor = spacing.origin;
        for extent in &extents {
            offsets.push(cursor);
            cursor += extent + spacing.gap;
        }

        AxisAllocation { extents, offsets }
    }
}
