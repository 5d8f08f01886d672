//! The 13 scored metrics and the three categories they roll up into.
//!
//! The canonical order `SA, SR, M, E, SS, B, EX, D, T, PS, CQ, TS, ER` is
//! fixed by [`Metric::ALL`]; every score vector and total uses it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Highest score a single choice can award a single metric.
pub const MAX_SCORE_PER_CHOICE: u8 = 4;

/// Number of metrics in a score vector.
pub const METRIC_COUNT: usize = 13;

/// A single scored dimension.
///
/// Discriminants are the canonical vector positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "SA")]
    SelfAwareness = 0,
    #[serde(rename = "SR")]
    SelfRegulation = 1,
    #[serde(rename = "M")]
    Motivation = 2,
    #[serde(rename = "E")]
    Empathy = 3,
    #[serde(rename = "SS")]
    SocialSkill = 4,
    #[serde(rename = "B")]
    Beliefs = 5,
    #[serde(rename = "EX")]
    Excuses = 6,
    #[serde(rename = "D")]
    Decisions = 7,
    #[serde(rename = "T")]
    Trust = 8,
    #[serde(rename = "PS")]
    PsychologicalSafety = 9,
    #[serde(rename = "CQ")]
    CommunicationQuality = 10,
    #[serde(rename = "TS")]
    TeamStability = 11,
    #[serde(rename = "ER")]
    EmotionalRipple = 12,
}

impl Metric {
    /// All metrics in canonical order.
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::SelfAwareness,
        Metric::SelfRegulation,
        Metric::Motivation,
        Metric::Empathy,
        Metric::SocialSkill,
        Metric::Beliefs,
        Metric::Excuses,
        Metric::Decisions,
        Metric::Trust,
        Metric::PsychologicalSafety,
        Metric::CommunicationQuality,
        Metric::TeamStability,
        Metric::EmotionalRipple,
    ];

    /// Position of this metric in a score vector.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short code used in score payloads (`SA`, `EX`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Metric::SelfAwareness => "SA",
            Metric::SelfRegulation => "SR",
            Metric::Motivation => "M",
            Metric::Empathy => "E",
            Metric::SocialSkill => "SS",
            Metric::Beliefs => "B",
            Metric::Excuses => "EX",
            Metric::Decisions => "D",
            Metric::Trust => "T",
            Metric::PsychologicalSafety => "PS",
            Metric::CommunicationQuality => "CQ",
            Metric::TeamStability => "TS",
            Metric::EmotionalRipple => "ER",
        }
    }

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Metric::SelfAwareness => "Self-Awareness",
            Metric::SelfRegulation => "Self-Regulation",
            Metric::Motivation => "Motivation",
            Metric::Empathy => "Empathy",
            Metric::SocialSkill => "Social Skill",
            Metric::Beliefs => "Beliefs",
            Metric::Excuses => "Excuses",
            Metric::Decisions => "Decisions",
            Metric::Trust => "Trust-Building",
            Metric::PsychologicalSafety => "Psychological Safety",
            Metric::CommunicationQuality => "Communication Quality",
            Metric::TeamStability => "Team Stability",
            Metric::EmotionalRipple => "Emotional Ripple",
        }
    }

    /// One-line description shown next to the metric in reports.
    pub fn description(self) -> &'static str {
        match self {
            Metric::SelfAwareness => "Recognition of own emotions, triggers, and patterns",
            Metric::SelfRegulation => "Control of emotional responses and impulses",
            Metric::Motivation => "Internal drive and persistence toward goals",
            Metric::Empathy => "Understanding and responding to others' emotions",
            Metric::SocialSkill => "Managing relationships and building influence",
            Metric::Beliefs => "Stories you tell yourself that shape your lens on pressure",
            Metric::Excuses => "Protection patterns or rationalizations under tension",
            Metric::Decisions => "How boldly, clearly, and consistently you choose direction",
            Metric::Trust => "Ability to establish and maintain credibility",
            Metric::PsychologicalSafety => "Creating space for risk-taking without fear",
            Metric::CommunicationQuality => "Clarity and effectiveness of messaging",
            Metric::TeamStability => "Consistency and reliability in team dynamics",
            Metric::EmotionalRipple => "Impact of your emotional state on others",
        }
    }

    /// Category this metric rolls up into.
    pub fn category(self) -> MetricCategory {
        match self.index() {
            0..=4 => MetricCategory::Eq,
            5..=7 => MetricCategory::Bed,
            _ => MetricCategory::Culture,
        }
    }

    /// Looks up a metric by its short code.
    pub fn from_code(code: &str) -> Option<Metric> {
        Metric::ALL.into_iter().find(|m| m.code() == code)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The three layers of the assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricCategory {
    /// Emotional readiness: the five EQ pillars.
    Eq,
    /// Behavioral reality: Beliefs, Excuses, Decisions.
    Bed,
    /// Cultural influence: the five team-impact dimensions.
    Culture,
}

impl MetricCategory {
    /// All categories in vector order.
    pub const ALL: [MetricCategory; 3] =
        [MetricCategory::Eq, MetricCategory::Bed, MetricCategory::Culture];

    /// Index range this category occupies in a score vector.
    pub fn range(self) -> Range<usize> {
        match self {
            MetricCategory::Eq => 0..5,
            MetricCategory::Bed => 5..8,
            MetricCategory::Culture => 8..13,
        }
    }

    /// Metrics in this category, in canonical order.
    pub fn metrics(self) -> &'static [Metric] {
        &Metric::ALL[self.range()]
    }

    /// Highest achievable category total over a full assessment.
    pub fn max_score(self, scenario_count: usize) -> u32 {
        max_per_metric(scenario_count) * self.metrics().len() as u32
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            MetricCategory::Eq => "EQ Pillars",
            MetricCategory::Bed => "B.E.D. Factors",
            MetricCategory::Culture => "Culture Index",
        }
    }
}

/// Highest achievable total for one metric over `scenario_count` scenarios.
pub fn max_per_metric(scenario_count: usize) -> u32 {
    u32::from(MAX_SCORE_PER_CHOICE) * scenario_count as u32
}
