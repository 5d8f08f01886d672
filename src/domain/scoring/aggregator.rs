//! Score aggregation - sums response vectors into a categorized breakdown.

use serde::{Deserialize, Serialize};

use super::metric::{Metric, MetricCategory, METRIC_COUNT};
use super::score_vector::{ScoreTotals, ScoreVector};
use crate::domain::assessment::Response;
use crate::domain::catalog::SCENARIO_COUNT;
use crate::domain::foundation::Percentage;

/// Emotional readiness totals (EQ pillars).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqScores {
    #[serde(rename = "SA")]
    pub sa: u32,
    #[serde(rename = "SR")]
    pub sr: u32,
    #[serde(rename = "M")]
    pub m: u32,
    #[serde(rename = "E")]
    pub e: u32,
    #[serde(rename = "SS")]
    pub ss: u32,
    pub total: u32,
    pub percentage: Percentage,
}

/// Behavioral reality totals (B.E.D. factors).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedScores {
    #[serde(rename = "B")]
    pub b: u32,
    #[serde(rename = "EX")]
    pub ex: u32,
    #[serde(rename = "D")]
    pub d: u32,
    pub total: u32,
    pub percentage: Percentage,
}

/// Cultural influence totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultureScores {
    #[serde(rename = "T")]
    pub t: u32,
    #[serde(rename = "PS")]
    pub ps: u32,
    #[serde(rename = "CQ")]
    pub cq: u32,
    #[serde(rename = "TS")]
    pub ts: u32,
    #[serde(rename = "ER")]
    pub er: u32,
    pub total: u32,
    pub percentage: Percentage,
}

/// Grand total across every metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScores {
    pub total: u32,
    pub percentage: Percentage,
    pub max_possible: u32,
}

/// Derived snapshot of a response log.
///
/// Always recomputed from responses, never mutated in place.
/// `eq.total + bed.total + culture.total == overall.total` holds by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub eq: EqScores,
    pub bed: BedScores,
    pub culture: CultureScores,
    pub overall: OverallScores,
}

impl ScoreBreakdown {
    /// Builds the breakdown from raw per-metric totals.
    ///
    /// Percentages are taken against the full-assessment maximum even when
    /// fewer than every scenario contributed.
    pub fn from_totals(totals: &ScoreTotals) -> Self {
        let category = |c: MetricCategory| {
            let total = totals.category_total(c);
            (total, Percentage::from_ratio(total, c.max_score(SCENARIO_COUNT)))
        };

        let (eq_total, eq_pct) = category(MetricCategory::Eq);
        let (bed_total, bed_pct) = category(MetricCategory::Bed);
        let (culture_total, culture_pct) = category(MetricCategory::Culture);

        let overall_total = eq_total + bed_total + culture_total;
        let max_possible = MetricCategory::ALL
            .iter()
            .map(|c| c.max_score(SCENARIO_COUNT))
            .sum();

        Self {
            eq: EqScores {
                sa: totals.get(Metric::SelfAwareness),
                sr: totals.get(Metric::SelfRegulation),
                m: totals.get(Metric::Motivation),
                e: totals.get(Metric::Empathy),
                ss: totals.get(Metric::SocialSkill),
                total: eq_total,
                percentage: eq_pct,
            },
            bed: BedScores {
                b: totals.get(Metric::Beliefs),
                ex: totals.get(Metric::Excuses),
                d: totals.get(Metric::Decisions),
                total: bed_total,
                percentage: bed_pct,
            },
            culture: CultureScores {
                t: totals.get(Metric::Trust),
                ps: totals.get(Metric::PsychologicalSafety),
                cq: totals.get(Metric::CommunicationQuality),
                ts: totals.get(Metric::TeamStability),
                er: totals.get(Metric::EmotionalRipple),
                total: culture_total,
                percentage: culture_pct,
            },
            overall: OverallScores {
                total: overall_total,
                percentage: Percentage::from_ratio(overall_total, max_possible),
                max_possible,
            },
        }
    }

    /// Raw total for one metric.
    pub fn get(&self, metric: Metric) -> u32 {
        match metric {
            Metric::SelfAwareness => self.eq.sa,
            Metric::SelfRegulation => self.eq.sr,
            Metric::Motivation => self.eq.m,
            Metric::Empathy => self.eq.e,
            Metric::SocialSkill => self.eq.ss,
            Metric::Beliefs => self.bed.b,
            Metric::Excuses => self.bed.ex,
            Metric::Decisions => self.bed.d,
            Metric::Trust => self.culture.t,
            Metric::PsychologicalSafety => self.culture.ps,
            Metric::CommunicationQuality => self.culture.cq,
            Metric::TeamStability => self.culture.ts,
            Metric::EmotionalRipple => self.culture.er,
        }
    }

    /// Flattens the per-metric totals back into canonical order.
    pub fn totals(&self) -> ScoreTotals {
        let mut raw = [0u32; METRIC_COUNT];
        for metric in Metric::ALL {
            raw[metric.index()] = self.get(metric);
        }
        ScoreTotals::from_array(raw)
    }

    /// Category total and percentage.
    pub fn category(&self, category: MetricCategory) -> (u32, Percentage) {
        match category {
            MetricCategory::Eq => (self.eq.total, self.eq.percentage),
            MetricCategory::Bed => (self.bed.total, self.bed.percentage),
            MetricCategory::Culture => (self.culture.total, self.culture.percentage),
        }
    }
}

/// Stateless aggregation over response logs.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Sums every response's vector and normalizes into a breakdown.
    ///
    /// # Edge Cases
    /// - Empty log: all totals and percentages are zero
    /// - Partial log: percentages stay relative to the full assessment
    pub fn aggregate(responses: &[Response]) -> ScoreBreakdown {
        Self::aggregate_vectors(responses.iter().map(|r| &r.scores))
    }

    /// Aggregates bare score vectors.
    pub fn aggregate_vectors<'a, I>(vectors: I) -> ScoreBreakdown
    where
        I: IntoIterator<Item = &'a ScoreVector>,
    {
        let totals: ScoreTotals = vectors.into_iter().collect();
        ScoreBreakdown::from_totals(&totals)
    }
}
