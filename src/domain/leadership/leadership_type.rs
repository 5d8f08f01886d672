//! Leadership type classification within a family.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::family::LeadershipFamily;
use crate::domain::scoring::ScoreBreakdown;

/// One of the twenty specific leadership identities, five per family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadershipType {
    // Regulators
    GroundedCommander,
    Anchor,
    Stabilizer,
    Responder,
    Guardian,
    // Connectors
    EmpathicStrategist,
    BridgeBuilder,
    Mentor,
    Harmonizer,
    CulturalArchitect,
    // Drivers
    Catalyst,
    Enforcer,
    Optimizer,
    Accelerator,
    StandardBearer,
    // Strategists
    Visionary,
    Architect,
    Analyst,
    Navigator,
    Integrator,
}

impl LeadershipType {
    pub const ALL: [LeadershipType; 20] = [
        LeadershipType::GroundedCommander,
        LeadershipType::Anchor,
        LeadershipType::Stabilizer,
        LeadershipType::Responder,
        LeadershipType::Guardian,
        LeadershipType::EmpathicStrategist,
        LeadershipType::BridgeBuilder,
        LeadershipType::Mentor,
        LeadershipType::Harmonizer,
        LeadershipType::CulturalArchitect,
        LeadershipType::Catalyst,
        LeadershipType::Enforcer,
        LeadershipType::Optimizer,
        LeadershipType::Accelerator,
        LeadershipType::StandardBearer,
        LeadershipType::Visionary,
        LeadershipType::Architect,
        LeadershipType::Analyst,
        LeadershipType::Navigator,
        LeadershipType::Integrator,
    ];

    /// Classifies within an already chosen family.
    ///
    /// Each family evaluates four conditions in a fixed order over raw
    /// totals; the first that holds wins, otherwise the family's fallback is
    /// returned. The order is part of the contract.
    pub fn classify(scores: &ScoreBreakdown, family: LeadershipFamily) -> Self {
        let (eq, bed, culture) = (&scores.eq, &scores.bed, &scores.culture);

        match family {
            LeadershipFamily::Regulators => {
                if eq.sr >= eq.sa && eq.m > eq.e {
                    LeadershipType::GroundedCommander
                } else if eq.sa >= eq.sr && eq.sr > eq.e {
                    LeadershipType::Anchor
                } else if eq.sr > eq.sa && eq.ss > eq.e {
                    LeadershipType::Guardian
                } else if eq.sr > eq.e && bed.d > bed.b {
                    LeadershipType::Responder
                } else {
                    LeadershipType::Stabilizer
                }
            }
            LeadershipFamily::Connectors => {
                if eq.e >= eq.ss && eq.sa > eq.sr {
                    LeadershipType::EmpathicStrategist
                } else if eq.e > eq.sa && eq.ss > eq.sr {
                    LeadershipType::BridgeBuilder
                } else if eq.e > eq.ss && bed.d > bed.ex {
                    LeadershipType::Mentor
                } else if eq.e > eq.sa && eq.e > eq.ss && eq.e > eq.sr {
                    LeadershipType::Harmonizer
                } else {
                    LeadershipType::CulturalArchitect
                }
            }
            LeadershipFamily::Drivers => {
                if eq.m >= bed.d && eq.m > eq.e {
                    LeadershipType::Catalyst
                } else if eq.m > eq.e && bed.d < eq.m {
                    LeadershipType::Enforcer
                } else if bed.d > eq.m && eq.sr > eq.e {
                    LeadershipType::Optimizer
                } else if eq.m > eq.sr && bed.d > bed.b {
                    LeadershipType::Accelerator
                } else {
                    LeadershipType::StandardBearer
                }
            }
            LeadershipFamily::Strategists => {
                if eq.sa >= eq.m && eq.m > eq.e {
                    LeadershipType::Visionary
                } else if eq.sa > eq.ss && bed.b > bed.d {
                    LeadershipType::Architect
                } else if eq.sa > eq.e && bed.d > eq.m {
                    LeadershipType::Analyst
                } else if eq.sa > eq.sr && culture.ts < culture.cq {
                    LeadershipType::Navigator
                } else {
                    LeadershipType::Integrator
                }
            }
        }
    }

    /// Family this type belongs to.
    pub fn family(&self) -> LeadershipFamily {
        use LeadershipType::*;
        match self {
            GroundedCommander | Anchor | Stabilizer | Responder | Guardian => {
                LeadershipFamily::Regulators
            }
            EmpathicStrategist | BridgeBuilder | Mentor | Harmonizer | CulturalArchitect => {
                LeadershipFamily::Connectors
            }
            Catalyst | Enforcer | Optimizer | Accelerator | StandardBearer => {
                LeadershipFamily::Drivers
            }
            Visionary | Architect | Analyst | Navigator | Integrator => {
                LeadershipFamily::Strategists
            }
        }
    }

    /// Type returned when none of a family's conditions hold.
    pub fn fallback_for(family: LeadershipFamily) -> Self {
        match family {
            LeadershipFamily::Regulators => LeadershipType::Stabilizer,
            LeadershipFamily::Connectors => LeadershipType::CulturalArchitect,
            LeadershipFamily::Drivers => LeadershipType::StandardBearer,
            LeadershipFamily::Strategists => LeadershipType::Integrator,
        }
    }

    /// Wire code, e.g. `GROUNDED_COMMANDER`.
    pub fn code(&self) -> &'static str {
        match self {
            LeadershipType::GroundedCommander => "GROUNDED_COMMANDER",
            LeadershipType::Anchor => "ANCHOR",
            LeadershipType::Stabilizer => "STABILIZER",
            LeadershipType::Responder => "RESPONDER",
            LeadershipType::Guardian => "GUARDIAN",
            LeadershipType::EmpathicStrategist => "EMPATHIC_STRATEGIST",
            LeadershipType::BridgeBuilder => "BRIDGE_BUILDER",
            LeadershipType::Mentor => "MENTOR",
            LeadershipType::Harmonizer => "HARMONIZER",
            LeadershipType::CulturalArchitect => "CULTURAL_ARCHITECT",
            LeadershipType::Catalyst => "CATALYST",
            LeadershipType::Enforcer => "ENFORCER",
            LeadershipType::Optimizer => "OPTIMIZER",
            LeadershipType::Accelerator => "ACCELERATOR",
            LeadershipType::StandardBearer => "STANDARD_BEARER",
            LeadershipType::Visionary => "VISIONARY",
            LeadershipType::Architect => "ARCHITECT",
            LeadershipType::Analyst => "ANALYST",
            LeadershipType::Navigator => "NAVIGATOR",
            LeadershipType::Integrator => "INTEGRATOR",
        }
    }

    /// Parses a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for LeadershipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
