//! Scoring module - metrics, score vectors, and aggregation.
//!
//! All functions are pure. Aggregation consumes a response log and yields a
//! [`ScoreBreakdown`] that downstream classifiers read raw totals from.

mod aggregator;
mod level;
mod metric;
mod score_vector;

pub use aggregator::{
    BedScores, CultureScores, EqScores, OverallScores, ScoreAggregator, ScoreBreakdown,
};
pub use level::{metric_percentage, ScoreLevel};
pub use metric::{
    max_per_metric, Metric, MetricCategory, MAX_SCORE_PER_CHOICE, METRIC_COUNT,
};
pub use score_vector::{ScoreTotals, ScoreVector};
