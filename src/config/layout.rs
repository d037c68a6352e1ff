//! Layout geometry configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Geometry knobs for the board layout
///
/// Minimum extents keep rows and columns usable at any weight; the gap
/// is the fixed spacing appended after each item along an axis.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Minimum row extent in pixels
    #[serde(default = "default_row_min_extent")]
    pub row_min_extent: f64,

    /// Minimum column extent in pixels
    #[serde(default = "default_column_min_extent")]
    pub column_min_extent: f64,

    /// Fixed gap after each item in pixels
    #[serde(default = "default_item_gap")]
    pub item_gap: f64,

    /// Offset of the first item along each axis
    #[serde(default = "default_origin")]
    pub origin: f64,
}

impl LayoutConfig {
    /// Validate layout configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.row_min_extent <= 0.0 || self.column_min_extent <= 0.0 {
            return Err(ValidationError::InvalidMinExtent);
        }
        if self.item_gap < 0.0 {
            return Err(ValidationError::InvalidItemGap);
        }
        if !self.origin.is_finite() {
            return Err(ValidationError::InvalidOrigin);
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_min_extent: default_row_min_extent(),
            column_min_extent: default_column_min_extent(),
            item_gap: default_item_gap(),
            origin: default_origin(),
        }
    }
}

fn default_row_min_extent() -> f64 {
    56.0
}

fn default_column_min_extent() -> f64 {
    88.0
}

fn default_item_gap() -> f64 {
    8.0
}

fn default_origin() -> f64 {
    0.0
}
