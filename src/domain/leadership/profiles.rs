//! Descriptive metadata for families and types.

use serde::Serialize;

use super::family::LeadershipFamily;
use super::leadership_type::LeadershipType;

/// Presentation data for a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
}

/// Presentation data for a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProfile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub blind_spots: &'static [&'static str],
    pub stress_behaviors: &'static [&'static str],
    pub best_utilization: &'static str,
}

impl LeadershipFamily {
    pub fn profile(&self) -> &'static FamilyProfile {
        match self {
            LeadershipFamily::Regulators => &REGULATORS,
            LeadershipFamily::Connectors => &CONNECTORS,
            LeadershipFamily::Drivers => &DRIVERS,
            LeadershipFamily::Strategists => &STRATEGISTS,
        }
    }
}

impl LeadershipType {
    pub fn profile(&self) -> &'static TypeProfile {
        match self {
            LeadershipType::GroundedCommander => &GROUNDED_COMMANDER,
            LeadershipType::Anchor => &ANCHOR,
            LeadershipType::Stabilizer => &STABILIZER,
            LeadershipType::Responder => &RESPONDER,
            LeadershipType::Guardian => &GUARDIAN,
            LeadershipType::EmpathicStrategist => &EMPATHIC_STRATEGIST,
            LeadershipType::BridgeBuilder => &BRIDGE_BUILDER,
            LeadershipType::Mentor => &MENTOR,
            LeadershipType::Harmonizer => &HARMONIZER,
            LeadershipType::CulturalArchitect => &CULTURAL_ARCHITECT,
            LeadershipType::Catalyst => &CATALYST,
            LeadershipType::Enforcer => &ENFORCER,
            LeadershipType::Optimizer => &OPTIMIZER,
            LeadershipType::Accelerator => &ACCELERATOR,
            LeadershipType::StandardBearer => &STANDARD_BEARER,
            LeadershipType::Visionary => &VISIONARY,
            LeadershipType::Architect => &ARCHITECT,
            LeadershipType::Analyst => &ANALYST,
            LeadershipType::Navigator => &NAVIGATOR,
            LeadershipType::Integrator => &INTEGRATOR,
        }
    }
}

static REGULATORS: FamilyProfile = FamilyProfile {
    name: "Regulators",
    tagline: "Composure, Steadiness, Emotional Grounding",
    description: "They stabilize teams.",
};

static CONNECTORS: FamilyProfile = FamilyProfile {
    name: "Connectors",
    tagline: "Empathy, Trust, Human Intelligence",
    description: "They humanize leadership.",
};

static DRIVERS: FamilyProfile = FamilyProfile {
    name: "Drivers",
    tagline: "Action, Standards, Momentum",
    description: "They create results and standards.",
};

static STRATEGISTS: FamilyProfile = FamilyProfile {
    name: "Strategists",
    tagline: "Awareness, Vision, Intentionality",
    description: "They shape direction and intelligence.",
};

// Regulators

static GROUNDED_COMMANDER: TypeProfile = TypeProfile {
    name: "The Grounded Commander",
    tagline: "High Self-Regulation + High Motivation",
    description: "Calm under fire, confident decision-maker.",
    strengths: &["Crisis management", "Decisive action", "Emotional steadiness"],
    blind_spots: &["May appear detached", "Can miss emotional nuances"],
    stress_behaviors: &["Becomes more directive", "Narrows focus"],
    best_utilization: "Leading through high-stakes situations and organizational change.",
};

static ANCHOR: TypeProfile = TypeProfile {
    name: "The Anchor",
    tagline: "High Awareness + High Regulation",
    description: "Emotionally consistent, prevents escalation.",
    strengths: &["Stability under pressure", "De-escalation", "Predictable presence"],
    blind_spots: &["May resist necessary change", "Can seem inflexible"],
    stress_behaviors: &["Doubles down on routines", "Avoids confrontation"],
    best_utilization: "Maintaining team morale during uncertainty and transition.",
};

static STABILIZER: TypeProfile = TypeProfile {
    name: "The Stabilizer",
    tagline: "Balanced across regulation skills",
    description: "Keeps teams focused, protects psychological safety.",
    strengths: &["Team cohesion", "Conflict prevention", "Consistent leadership"],
    blind_spots: &["May avoid necessary conflict", "Can plateau on innovation"],
    stress_behaviors: &["Over-focuses on harmony", "Delays difficult decisions"],
    best_utilization: "Building and maintaining high-performing team environments.",
};

static RESPONDER: TypeProfile = TypeProfile {
    name: "The Responder",
    tagline: "High Regulation + Mid Empathy",
    description: "Composed, reliable, systematic.",
    strengths: &["Process adherence", "Reliable execution", "Calm presence"],
    blind_spots: &["May miss emotional cues", "Can seem mechanical"],
    stress_behaviors: &["Retreats to process", "Becomes overly procedural"],
    best_utilization: "Operational leadership requiring consistent, methodical approach.",
};

static GUARDIAN: TypeProfile = TypeProfile {
    name: "The Guardian",
    tagline: "High Regulation + High Social Skill",
    description: "Strong protector of team stability.",
    strengths: &["Team protection", "Boundary setting", "Loyal leadership"],
    blind_spots: &["May be overprotective", "Can resist outside input"],
    stress_behaviors: &["Circles the wagons", "Becomes defensive"],
    best_utilization: "Protecting teams from external pressures while maintaining performance.",
};

// Connectors

static EMPATHIC_STRATEGIST: TypeProfile = TypeProfile {
    name: "The Empathic Strategist",
    tagline: "High Empathy + High Awareness",
    description: "Sees emotional patterns, drives trust quickly.",
    strengths: &["Reading rooms", "Building rapport", "Strategic empathy"],
    blind_spots: &["May over-empathize", "Can delay tough decisions"],
    stress_behaviors: &["Absorbs others' stress", "Becomes indecisive"],
    best_utilization: "Navigating complex stakeholder relationships and change management.",
};

static BRIDGE_BUILDER: TypeProfile = TypeProfile {
    name: "The Bridge Builder",
    tagline: "Empathy + Social Skill",
    description: "Connects disconnected people, creates psychological safety.",
    strengths: &["Conflict resolution", "Cross-functional collaboration", "Trust building"],
    blind_spots: &["May avoid taking sides", "Can spread too thin"],
    stress_behaviors: &["Over-mediates", "Loses own voice"],
    best_utilization: "Unifying divided teams and departments.",
};

static MENTOR: TypeProfile = TypeProfile {
    name: "The Mentor",
    tagline: "High Empathy + High Decisions",
    description: "Grows people, spots talent early.",
    strengths: &["Talent development", "Coaching", "Patient guidance"],
    blind_spots: &["May over-invest in individuals", "Can enable dependency"],
    stress_behaviors: &["Takes on others' problems", "Neglects own needs"],
    best_utilization: "Developing next-generation leaders and high-potential talent.",
};

static HARMONIZER: TypeProfile = TypeProfile {
    name: "The Harmonizer",
    tagline: "Very High Empathy",
    description: "Excellent one-on-one relationships.",
    strengths: &["Deep connections", "Emotional intelligence", "Supportive presence"],
    blind_spots: &["May struggle with group dynamics", "Can be conflict-averse"],
    stress_behaviors: &["Withdraws from conflict", "Becomes passive"],
    best_utilization: "Building deep trust in key relationships and sensitive negotiations.",
};

static CULTURAL_ARCHITECT: TypeProfile = TypeProfile {
    name: "The Cultural Architect",
    tagline: "High Empathy + Awareness + Social Skill",
    description: "Shapes culture intentionally.",
    strengths: &["Culture design", "Values alignment", "Organizational influence"],
    blind_spots: &["May focus on culture over results", "Can be idealistic"],
    stress_behaviors: &["Becomes preachy", "Over-focuses on values"],
    best_utilization: "Transforming organizational culture and building values-driven teams.",
};

// Drivers

static CATALYST: TypeProfile = TypeProfile {
    name: "The Catalyst",
    tagline: "High Motivation + High Decisions",
    description: "Moves fast, inspires action.",
    strengths: &["Speed of execution", "Energy creation", "Momentum building"],
    blind_spots: &["May move too fast", "Can burn out teams"],
    stress_behaviors: &["Pushes harder", "Becomes impatient"],
    best_utilization: "Launching initiatives and driving rapid organizational change.",
};

static ENFORCER: TypeProfile = TypeProfile {
    name: "The Enforcer",
    tagline: "High Motivation + Low Empathy",
    description: "Gets results regardless, sets clear expectations.",
    strengths: &["Accountability", "Clear standards", "Results focus"],
    blind_spots: &["May damage relationships", "Can create fear"],
    stress_behaviors: &["Becomes demanding", "Ignores emotional impact"],
    best_utilization: "Turnaround situations requiring tough accountability.",
};

static OPTIMIZER: TypeProfile = TypeProfile {
    name: "The Optimizer",
    tagline: "High Standards + Process Focus",
    description: "Drives efficiency and excellence.",
    strengths: &["Process improvement", "Quality standards", "Systematic thinking"],
    blind_spots: &["May over-engineer", "Can slow innovation"],
    stress_behaviors: &["Micro-manages", "Obsesses over details"],
    best_utilization: "Improving operational efficiency and quality systems.",
};

static ACCELERATOR: TypeProfile = TypeProfile {
    name: "The Accelerator",
    tagline: "High Energy + High Pace",
    description: "Creates urgency and forward motion.",
    strengths: &["Speed", "Energy", "Deadline orientation"],
    blind_spots: &["May sacrifice quality", "Can exhaust teams"],
    stress_behaviors: &["Races faster", "Skips steps"],
    best_utilization: "Time-sensitive projects and competitive situations.",
};

static STANDARD_BEARER: TypeProfile = TypeProfile {
    name: "The Standard Bearer",
    tagline: "High Accountability + High Consistency",
    description: "Maintains excellence across teams.",
    strengths: &["Consistent excellence", "Role modeling", "Standards enforcement"],
    blind_spots: &["May be inflexible", "Can resist adaptation"],
    stress_behaviors: &["Becomes rigid", "Judges others harshly"],
    best_utilization: "Establishing and maintaining organizational standards.",
};

// Strategists

static VISIONARY: TypeProfile = TypeProfile {
    name: "The Visionary",
    tagline: "High Awareness + High Motivation",
    description: "Sees future possibilities, inspires direction.",
    strengths: &["Future thinking", "Inspiration", "Strategic clarity"],
    blind_spots: &["May disconnect from present", "Can seem unrealistic"],
    stress_behaviors: &["Retreats to big picture", "Avoids tactical details"],
    best_utilization: "Setting long-term direction and inspiring organizational vision.",
};

static ARCHITECT: TypeProfile = TypeProfile {
    name: "The Architect",
    tagline: "High Awareness + Systems Thinking",
    description: "Designs organizational structures.",
    strengths: &["System design", "Structural thinking", "Long-term planning"],
    blind_spots: &["May over-complicate", "Can ignore human factors"],
    stress_behaviors: &["Retreats to planning", "Analysis paralysis"],
    best_utilization: "Designing organizational structures and systems.",
};

static ANALYST: TypeProfile = TypeProfile {
    name: "The Analyst",
    tagline: "High Awareness + Data-Driven",
    description: "Makes decisions based on evidence and patterns.",
    strengths: &["Data analysis", "Pattern recognition", "Objective decision-making"],
    blind_spots: &["May ignore intuition", "Can seem cold"],
    stress_behaviors: &["Demands more data", "Delays decisions"],
    best_utilization: "Complex problem-solving requiring analytical rigor.",
};

static NAVIGATOR: TypeProfile = TypeProfile {
    name: "The Navigator",
    tagline: "High Awareness + Adaptability",
    description: "Guides through complexity and change.",
    strengths: &["Adaptability", "Course correction", "Change navigation"],
    blind_spots: &["May lack commitment", "Can seem inconsistent"],
    stress_behaviors: &["Over-pivots", "Loses direction"],
    best_utilization: "Leading through ambiguity and rapid change.",
};

static INTEGRATOR: TypeProfile = TypeProfile {
    name: "The Integrator",
    tagline: "Balanced Awareness across all dimensions",
    description: "Synthesizes competing priorities.",
    strengths: &["Holistic thinking", "Priority balancing", "Integration"],
    blind_spots: &["May lack specialization", "Can seem uncommitted"],
    stress_behaviors: &["Over-balances", "Avoids strong positions"],
    best_utilization: "Leading cross-functional initiatives requiring balanced perspective.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_type_has_populated_profile() {
        for t in LeadershipType::ALL {
            let profile = t.profile();
            assert!(profile.name.starts_with("The "));
            assert!(!profile.strengths.is_empty());
            assert!(!profile.blind_spots.is_empty());
            assert!(!profile.stress_behaviors.is_empty());
            assert!(!profile.best_utilization.is_empty());
        }
    }

    #[test]
    fn family_profiles_have_names() {
        assert_eq!(LeadershipFamily::Connectors.profile().name, "Connectors");
        assert_eq!(
            LeadershipFamily::Drivers.profile().tagline,
            "Action, Standards, Momentum"
        );
    }

    #[test]
    fn profile_serializes_camel_case() {
        let json = serde_json::to_value(LeadershipType::Mentor.profile()).unwrap();
        assert_eq!(json["name"], "The Mentor");
        assert_eq!(json["blindSpots"][1], "Can enable dependency");
    }
}
