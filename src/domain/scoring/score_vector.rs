//! Per-choice score vectors and their running totals.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use super::metric::{Metric, MetricCategory, MAX_SCORE_PER_CHOICE, METRIC_COUNT};
use crate::domain::foundation::ValidationError;

/// The fixed 13-score contribution of one choice, in canonical metric order.
///
/// # Invariants
///
/// - exactly 13 entries
/// - every entry is in `0..=4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct ScoreVector([u8; METRIC_COUNT]);

impl ScoreVector {
    /// Creates a score vector, rejecting any entry above the per-choice max.
    pub fn new(scores: [u8; METRIC_COUNT]) -> Result<Self, ValidationError> {
        for (metric, score) in Metric::ALL.iter().zip(scores) {
            if score > MAX_SCORE_PER_CHOICE {
                return Err(ValidationError::out_of_range(
                    metric.code(),
                    0,
                    i32::from(MAX_SCORE_PER_CHOICE),
                    i32::from(score),
                ));
            }
        }
        Ok(Self(scores))
    }

    /// All-zero vector.
    pub fn zero() -> Self {
        Self([0; METRIC_COUNT])
    }

    /// Returns the score for one metric.
    pub fn get(&self, metric: Metric) -> u8 {
        self.0[metric.index()]
    }

    /// Returns the raw scores.
    pub fn as_array(&self) -> &[u8; METRIC_COUNT] {
        &self.0
    }

    /// Sum of all 13 scores.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&s| u32::from(s)).sum()
    }
}

impl TryFrom<Vec<u8>> for ScoreVector {
    type Error = ValidationError;

    fn try_from(scores: Vec<u8>) -> Result<Self, Self::Error> {
        let array: [u8; METRIC_COUNT] = scores.try_into().map_err(|v: Vec<u8>| {
            ValidationError::invalid_format(
                "scores",
                format!("expected {} scores, got {}", METRIC_COUNT, v.len()),
            )
        })?;
        Self::new(array)
    }
}

impl From<ScoreVector> for Vec<u8> {
    fn from(vector: ScoreVector) -> Self {
        vector.0.to_vec()
    }
}

/// Element-wise sums of score vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTotals([u32; METRIC_COUNT]);

impl ScoreTotals {
    /// All-zero totals.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Builds totals from raw per-metric sums.
    pub fn from_array(totals: [u32; METRIC_COUNT]) -> Self {
        Self(totals)
    }

    /// Adds one vector into the totals.
    pub fn accumulate(&mut self, vector: &ScoreVector) {
        for (total, &score) in self.0.iter_mut().zip(vector.as_array()) {
            *total += u32::from(score);
        }
    }

    /// Returns the total for one metric.
    pub fn get(&self, metric: Metric) -> u32 {
        self.0[metric.index()]
    }

    /// Sum of the metrics in one category.
    pub fn category_total(&self, category: MetricCategory) -> u32 {
        self.0[category.range()].iter().sum()
    }

    /// Sum of all 13 totals.
    pub fn grand_total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Returns the raw totals in canonical order.
    pub fn as_array(&self) -> &[u32; METRIC_COUNT] {
        &self.0
    }
}

impl<'a> FromIterator<&'a ScoreVector> for ScoreTotals {
    fn from_iter<I: IntoIterator<Item = &'a ScoreVector>>(iter: I) -> Self {
        let mut totals = ScoreTotals::zero();
        for vector in iter {
            totals.accumulate(vector);
        }
        totals
    }
}

impl Add for ScoreTotals {
    type Output = ScoreTotals;

    fn add(mut self, rhs: ScoreTotals) -> ScoreTotals {
        self += rhs;
        self
    }
}

impl AddAssign for ScoreTotals {
    fn add_assign(&mut self, rhs: ScoreTotals) {
        for (lhs, rhs) in self.0.iter_mut().zip(rhs.0) {
            *lhs += rhs;
        }
    }
}
