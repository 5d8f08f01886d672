//! Qualitative bands for percentage scores.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::metric::max_per_metric;
use crate::domain::catalog::SCENARIO_COUNT;
use crate::domain::foundation::Percentage;

/// Band a percentage falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLevel {
    Foundational,
    Emerging,
    Developing,
    Strong,
    Exceptional,
}

impl ScoreLevel {
    /// Maps a percentage to its band.
    pub fn from_percentage(percentage: Percentage) -> Self {
        match percentage.value() {
            90..=100 => ScoreLevel::Exceptional,
            75..=89 => ScoreLevel::Strong,
            60..=74 => ScoreLevel::Developing,
            40..=59 => ScoreLevel::Emerging,
            _ => ScoreLevel::Foundational,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreLevel::Exceptional => "Exceptional",
            ScoreLevel::Strong => "Strong",
            ScoreLevel::Developing => "Developing",
            ScoreLevel::Emerging => "Emerging",
            ScoreLevel::Foundational => "Foundational",
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Percentage of the best possible total for a single metric.
pub fn metric_percentage(total: u32) -> Percentage {
    Percentage::from_ratio(total, max_per_metric(SCENARIO_COUNT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        let level = |v| ScoreLevel::from_percentage(Percentage::new(v));
        assert_eq!(level(100), ScoreLevel::Exceptional);
        assert_eq!(level(90), ScoreLevel::Exceptional);
        assert_eq!(level(89), ScoreLevel::Strong);
        assert_eq!(level(75), ScoreLevel::Strong);
        assert_eq!(level(74), ScoreLevel::Developing);
        assert_eq!(level(60), ScoreLevel::Developing);
        assert_eq!(level(59), ScoreLevel::Emerging);
        assert_eq!(level(40), ScoreLevel::Emerging);
        assert_eq!(level(39), ScoreLevel::Foundational);
        assert_eq!(level(0), ScoreLevel::Foundational);
    }

    #[test]
    fn metric_percentage_uses_eighty_point_ceiling() {
        assert_eq!(metric_percentage(80).value(), 100);
        assert_eq!(metric_percentage(69).value(), 86);
        assert_eq!(metric_percentage(0).value(), 0);
    }

    #[test]
    fn levels_order_from_lowest_to_highest() {
        assert!(ScoreLevel::Foundational < ScoreLevel::Exceptional);
        assert_eq!(ScoreLevel::Strong.to_string(), "Strong");
    }
}
