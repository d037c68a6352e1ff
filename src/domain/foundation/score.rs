//! Score value object (-1 to +1 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// How favorably an alternative performs on a factor: -1 (least favorable)
/// to +1 (most favorable), 0 neutral.
///
/// Out-of-range values supplied externally are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// The neutral midpoint score.
    pub const NEUTRAL: Self = Self(0.0);

    /// The most favorable score.
    pub const MAX: Self = Self(1.0);

    /// The least favorable score.
    pub const MIN: Self = Self(-1.0);

    /// Creates a Score, clamping to [-1, 1]. Non-finite input collapses
    /// to neutral.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::NEUTRAL;
        }
        Self(value.clamp(-1.0, 1.0))
    }

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(-1.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("score", -1.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value in [-1, 1].
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Maps the score to a utility in [0, 1]: `(value + 1) / 2`.
    pub fn utility(&self) -> f64 {
        (self.0 + 1.0) / 2.0
    }

    /// Returns true if this is the neutral midpoint.
    pub fn is_neutral(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_new_accepts_in_range_values() {
        assert_eq!(Score::new(-1.0).value(), -1.0);
        assert_eq!(Score::new(0.0).value(), 0.0);
        assert_eq!(Score::new(0.5).value(), 0.5);
        assert_eq!(Score::new(1.0).value(), 1.0);
    }

    #[test]
    fn score_new_clamps_out_of_range_values() {
        assert_eq!(Score::new(3.0).value(), 1.0);
        assert_eq!(Score::new(-7.5).value(), -1.0);
    }

    #[test]
    fn score_new_collapses_non_finite_to_neutral() {
        assert_eq!(Score::new(f64::NAN).value(), 0.0);
        assert_eq!(Score::new(f64::INFINITY).value(), 0.0);
        assert_eq!(Score::new(f64::NEG_INFINITY).value(), 0.0);
    }

    #[test]
    fn score_try_new_rejects_out_of_range() {
        assert!(Score::try_new(1.01).is_err());
        assert!(Score::try_new(-2.0).is_err());
        assert!(Score::try_new(f64::NAN).is_err());
        assert!(Score::try_new(0.25).is_ok());
    }

    #[test]
    fn score_utility_maps_to_unit_interval() {
        assert_eq!(Score::MIN.utility(), 0.0);
        assert_eq!(Score::NEUTRAL.utility(), 0.5);
        assert_eq!(Score::MAX.utility(), 1.0);
        assert_eq!(Score::new(0.5).utility(), 0.75);
    }

    #[test]
    fn score_default_is_neutral() {
        assert_eq!(Score::default(), Score::NEUTRAL);
        assert!(Score::default().is_neutral());
    }

    #[test]
    fn score_displays_with_sign() {
        assert_eq!(format!("{}", Score::new(0.5)), "+0.50");
        assert_eq!(format!("{}", Score::new(-1.0)), "-1.00");
    }

    #[test]
    fn score_serializes_as_plain_number() {
        let json = serde_json::to_string(&Score::new(0.25)).unwrap();
        assert_eq!(json, "0.25");
    }

    #[test]
    fn score_deserializes_from_json() {
        let score: Score = serde_json::from_str("-0.5").unwrap();
        assert_eq!(score.value(), -0.5);
    }
}
