//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

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

    /// Computes `round(part / whole * 100)` with round-half-up, clamped to 100.
    ///
    /// Integer arithmetic keeps exact halves (e.g. 2/400) from drifting
    /// under floating point. A zero `whole` yields zero.
    pub fn from_ratio(part: u32, whole: u32) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = u64::from(part);
        let whole = u64::from(whole);
        let rounded = (part * 200 + whole) / (whole * 2);
        Self(rounded.min(100) as u8)
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

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Percentage::new(100).value(), 100);
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn from_ratio_rounds_to_nearest() {
        assert_eq!(Percentage::from_ratio(17, 400).value(), 4);
        assert_eq!(Percentage::from_ratio(7, 240).value(), 3);
        assert_eq!(Percentage::from_ratio(44, 1040).value(), 4);
    }

    #[test]
    fn from_ratio_rounds_exact_halves_up() {
        // 2 / 400 = 0.5%
        assert_eq!(Percentage::from_ratio(2, 400).value(), 1);
        // 6 / 400 = 1.5%
        assert_eq!(Percentage::from_ratio(6, 400).value(), 2);
        // 1 / 8 = 12.5%
        assert_eq!(Percentage::from_ratio(1, 8).value(), 13);
    }

    #[test]
    fn from_ratio_handles_extremes() {
        assert_eq!(Percentage::from_ratio(0, 400), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(400, 400), Percentage::HUNDRED);
        assert_eq!(Percentage::from_ratio(900, 400), Percentage::HUNDRED);
        assert_eq!(Percentage::from_ratio(5, 0), Percentage::ZERO);
    }

    #[test]
    fn as_fraction_converts_correctly() {
        assert!((Percentage::new(50).as_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", Percentage::new(83)), "83%");
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Percentage::new(42)).unwrap(), "42");
        let pct: Percentage = serde_json::from_str("75").unwrap();
        assert_eq!(pct.value(), 75);
    }
}
