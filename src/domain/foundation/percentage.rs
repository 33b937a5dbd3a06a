//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// Fifty percent, the neutral split.
    pub const HALF: Self = Self(50);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Rounds a raw percentage (e.g. `73.33`) half up and clamps to 0..=100.
    ///
    /// NaN maps to zero.
    pub fn from_rounded(raw: f64) -> Self {
        if raw.is_nan() {
            return Self::ZERO;
        }
        let rounded = (raw + 0.5).floor();
        Self(rounded.clamp(0.0, 100.0) as u8)
    }

    /// Returns `100 - self`.
    pub fn complement(&self) -> Self {
        Self(100u8.saturating_sub(self.0))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Percentage {
    fn from(value: i64) -> Self {
        Self(value.clamp(0, 100) as u8)
    }
}

impl From<Percentage> for u8 {
    fn from(pct: Percentage) -> Self {
        pct.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "percentage");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            _ => panic!("Expected OutOfRange error"),
        }
        assert!(Percentage::try_new(100).is_ok());
    }

    #[test]
    fn from_rounded_rounds_half_up() {
        assert_eq!(Percentage::from_rounded(73.33).value(), 73);
        assert_eq!(Percentage::from_rounded(12.5).value(), 13);
        assert_eq!(Percentage::from_rounded(66.666).value(), 67);
    }

    #[test]
    fn from_rounded_clamps() {
        assert_eq!(Percentage::from_rounded(-4.0), Percentage::ZERO);
        assert_eq!(Percentage::from_rounded(140.0), Percentage::HUNDRED);
        assert_eq!(Percentage::from_rounded(f64::NAN), Percentage::ZERO);
    }

    #[test]
    fn complement_sums_to_hundred() {
        let p = Percentage::new(80);
        assert_eq!(p.complement().value(), 20);
        assert_eq!(Percentage::HALF.complement(), Percentage::HALF);
    }

    #[test]
    fn percentage_as_fraction_converts_correctly() {
        assert!((Percentage::new(50).as_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
        assert_eq!(format!("{}", Percentage::ZERO), "0%");
    }

    #[test]
    fn percentage_serializes_to_json() {
        assert_eq!(serde_json::to_string(&Percentage::new(42)).unwrap(), "42");
        let pct: Percentage = serde_json::from_str("75").unwrap();
        assert_eq!(pct.value(), 75);
    }

    #[test]
    fn deserializing_out_of_range_clamps() {
        let high: Percentage = serde_json::from_str("200").unwrap();
        assert_eq!(high, Percentage::HUNDRED);
        assert_eq!(high.complement(), Percentage::ZERO);

        let huge: Percentage = serde_json::from_str("1000").unwrap();
        assert_eq!(huge.value(), 100);

        let negative: Percentage = serde_json::from_str("-5").unwrap();
        assert_eq!(negative, Percentage::ZERO);
    }
}
