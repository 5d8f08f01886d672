//! Leadership family classification.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::scoring::ScoreBreakdown;

/// One of the four top-level leadership archetypes.
///
/// Declaration order is the tie-break order used by [`LeadershipFamily::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadershipFamily {
    Regulators,
    Connectors,
    Drivers,
    Strategists,
}

/// Composite scores each family is judged on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyComposites {
    /// SR + SA
    pub regulation: u32,
    /// E + SS + T
    pub connection: u32,
    /// M + D
    pub drive: u32,
    /// SA + B
    pub strategy: u32,
}

impl FamilyComposites {
    /// Derives the four composites from raw metric totals.
    pub fn from_scores(scores: &ScoreBreakdown) -> Self {
        Self {
            regulation: scores.eq.sr + scores.eq.sa,
            connection: scores.eq.e + scores.eq.ss + scores.culture.t,
            drive: scores.eq.m + scores.bed.d,
            strategy: scores.eq.sa + scores.bed.b,
        }
    }

    /// Composite for one family.
    pub fn for_family(&self, family: LeadershipFamily) -> u32 {
        match family {
            LeadershipFamily::Regulators => self.regulation,
            LeadershipFamily::Connectors => self.connection,
            LeadershipFamily::Drivers => self.drive,
            LeadershipFamily::Strategists => self.strategy,
        }
    }
}

impl LeadershipFamily {
    /// All families in tie-break order.
    pub const ALL: [LeadershipFamily; 4] = [
        LeadershipFamily::Regulators,
        LeadershipFamily::Connectors,
        LeadershipFamily::Drivers,
        LeadershipFamily::Strategists,
    ];

    /// Picks the family with the strictly largest composite.
    ///
    /// A later family only displaces the current leader when its composite is
    /// strictly greater, so ties go to the earliest family in [`Self::ALL`].
    pub fn classify(scores: &ScoreBreakdown) -> Self {
        let composites = FamilyComposites::from_scores(scores);

        let mut leader = LeadershipFamily::Regulators;
        let mut best = composites.regulation;
        for family in Self::ALL {
            let score = composites.for_family(family);
            if score > best {
                leader = family;
                best = score;
            }
        }
        leader
    }

    /// Wire code, e.g. `REGULATORS`.
    pub fn code(&self) -> &'static str {
        match self {
            LeadershipFamily::Regulators => "REGULATORS",
            LeadershipFamily::Connectors => "CONNECTORS",
            LeadershipFamily::Drivers => "DRIVERS",
            LeadershipFamily::Strategists => "STRATEGISTS",
        }
    }

    /// Parses a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }
}

impl fmt::Display for LeadershipFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
