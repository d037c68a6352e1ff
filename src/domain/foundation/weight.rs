//! Weight value object (non-negative multiplier).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Multiplicative importance of a factor or alternative in scoring and
/// layout. Weights are non-negative; a zero weight removes the item from
/// weighted aggregation without removing it from the board.
///
/// Negative or non-finite input is floored to zero, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    /// A weight that excludes its item from aggregation.
    pub const ZERO: Self = Self(0.0);

    /// The default unit weight.
    pub const ONE: Self = Self(1.0);

    /// Creates a Weight, flooring negative or non-finite input to zero.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() || value < 0.0 {
            return Self::ZERO;
        }
        Self(value)
    }

    /// Creates a Weight, returning error if negative or non-finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ValidationError::out_of_range(
                "weight",
                0.0,
                f64::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Maps a 1-5 importance step onto the 1.0-2.0 weight band:
    /// `1 + (importance - 1) / 4`. Steps outside 1-5 are clamped first.
    pub fn from_importance(importance: u8) -> Self {
        let step = importance.clamp(1, 5);
        Self(1.0 + f64::from(step - 1) / 4.0)
    }

    /// Returns the raw non-negative value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if this weight excludes its item from aggregation.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
