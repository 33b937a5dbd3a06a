//! Weight value object (1 to 5 importance scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Importance of a statement: 1 (low) to 5 (high).
///
/// Every construction path clamps into range, including deserialization of
/// persisted data, so a stored `0` or `9` comes back as `1` or `5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Weight(u8);

impl Weight {
    /// Lowest weight.
    pub const MIN: Self = Self(1);

    /// Highest weight.
    pub const MAX: Self = Self(5);

    /// Weight given to new impact statements and priorities.
    pub const NEUTRAL: Self = Self(3);

    /// Creates a Weight, clamping to 1..=5.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(1, 5) as u8)
    }

    /// Creates a Weight, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(1..=5).contains(&value) {
            return Err(ValidationError::out_of_range(
                "weight",
                1,
                5,
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as f64 for averaging.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns the slider label for this weight.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Low",
            2 => "Below Average",
            3 => "Moderate",
            4 => "Above Average",
            _ => "High",
        }
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<i64> for Weight {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_new_accepts_valid_values() {
        for v in 1..=5 {
            assert_eq!(Weight::new(v).value(), v as u8);
        }
    }

    #[test]
    fn weight_new_clamps_out_of_range() {
        assert_eq!(Weight::new(0).value(), 1);
        assert_eq!(Weight::new(-7).value(), 1);
        assert_eq!(Weight::new(6).value(), 5);
        assert_eq!(Weight::new(i64::MAX).value(), 5);
    }

    #[test]
    fn weight_try_new_rejects_out_of_range() {
        match Weight::try_new(8) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "weight");
                assert_eq!(min, 1);
                assert_eq!(max, 5);
                assert_eq!(actual, 8);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(Weight::try_new(0).is_err());
        assert!(Weight::try_new(3).is_ok());
    }

    #[test]
    fn weight_default_is_neutral() {
        assert_eq!(Weight::default(), Weight::NEUTRAL);
        assert_eq!(Weight::default().value(), 3);
    }

    #[test]
    fn weight_label_spans_low_to_high() {
        assert_eq!(Weight::MIN.label(), "Low");
        assert_eq!(Weight::NEUTRAL.label(), "Moderate");
        assert_eq!(Weight::MAX.label(), "High");
    }

    #[test]
    fn weight_serializes_as_number() {
        let json = serde_json::to_string(&Weight::new(4)).unwrap();
        assert_eq!(json, "4");
    }

    #[test]
    fn weight_deserialization_clamps() {
        let low: Weight = serde_json::from_str("0").unwrap();
        let high: Weight = serde_json::from_str("12").unwrap();
        let mid: Weight = serde_json::from_str("2").unwrap();
        assert_eq!(low, Weight::MIN);
        assert_eq!(high, Weight::MAX);
        assert_eq!(mid.value(), 2);
    }

    #[test]
    fn weight_ordering_works() {
        assert!(Weight::MIN < Weight::NEUTRAL);
        assert!(Weight::NEUTRAL < Weight::MAX);
    }
}
