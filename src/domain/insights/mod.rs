//! Narrative insights derived from a scored assessment.
//!
//! Every generator is a pure function of a [`ScoreBreakdown`] plus the
//! classified type and/or family. Text is picked by [`InsightLevel`].
//!
//! [`ScoreBreakdown`]: crate::domain::scoring::ScoreBreakdown

mod growth;
mod narrative;

pub use growth::{growth_recommendations, one_move};
pub use narrative::{
    bed_profile_insight, because_statement, culture_dimension_insight, culture_ripple_insight,
    eq_pillar_insight, pressure_pattern_insight, BedInsight,
};

use crate::domain::foundation::Percentage;

/// Three-band reading used to pick insight text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InsightLevel {
    Developing,
    Moderate,
    High,
}

impl InsightLevel {
    const HIGH_FLOOR: u32 = 75;
    const MODERATE_FLOOR: u32 = 50;

    /// Bands a value against 75 and 50.
    ///
    /// Category readings pass a percentage. Single-metric readings pass the
    /// raw metric total (0..=80) unscaled.
    pub fn from_value(value: u32) -> Self {
        if value >= Self::HIGH_FLOOR {
            InsightLevel::High
        } else if value >= Self::MODERATE_FLOOR {
            InsightLevel::Moderate
        } else {
            InsightLevel::Developing
        }
    }

    pub fn from_percentage(percentage: Percentage) -> Self {
        Self::from_value(u32::from(percentage.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_at_seventy_five_and_fifty() {
        assert_eq!(InsightLevel::from_value(100), InsightLevel::High);
        assert_eq!(InsightLevel::from_value(75), InsightLevel::High);
        assert_eq!(InsightLevel::from_value(74), InsightLevel::Moderate);
        assert_eq!(InsightLevel::from_value(50), InsightLevel::Moderate);
        assert_eq!(InsightLevel::from_value(49), InsightLevel::Developing);
        assert_eq!(InsightLevel::from_value(0), InsightLevel::Developing);
    }

    #[test]
    fn percentage_uses_its_value() {
        assert_eq!(
            InsightLevel::from_percentage(Percentage::new(80)),
            InsightLevel::High
        );
        assert_eq!(
            InsightLevel::from_percentage(Percentage::ZERO),
            InsightLevel::Developing
        );
    }
}
