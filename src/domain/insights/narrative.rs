//! Report narratives: culture ripple, B.E.D. profile, pressure pattern, the
//! "because" statement, and per-metric readings.

use serde::Serialize;

use super::InsightLevel;
use crate::domain::foundation::Percentage;
use crate::domain::leadership::{LeadershipFamily, LeadershipType};
use crate::domain::scoring::{Metric, ScoreBreakdown};

/// Self-awareness total at which the pressure narrative credits early
/// recognition of stress patterns.
const AWARENESS_RECOGNITION_FLOOR: u32 = 70;

/// Readings for each B.E.D. factor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BedInsight {
    pub beliefs: String,
    pub excuses: String,
    pub decisions: String,
}

/// How the respondent's emotional presence spreads through the team.
///
/// Banded on the culture percentage, with one extra sentence for strong
/// trust-building or, failing that, weak psychological safety.
pub fn culture_ripple_insight(scores: &ScoreBreakdown, family: LeadershipFamily) -> String {
    let profile = family.profile();
    let tagline = profile.tagline.to_lowercase();
    let percentage = scores.culture.percentage.value();

    let mut text = match InsightLevel::from_percentage(scores.culture.percentage) {
        InsightLevel::High => format!(
            "Your emotional presence creates a strong positive ripple across your team. As a {} leader, your {} naturally fosters an environment where people feel valued and heard. Your high Cultural Influence score ({}%) indicates that your emotional state significantly elevates team morale and productivity.",
            profile.name, tagline, percentage
        ),
        InsightLevel::Moderate => format!(
            "Your emotional influence on team culture is developing well. As a {} leader, you bring {} to your interactions. With a Cultural Influence score of {}%, you have solid foundations but opportunity to amplify your positive impact on psychological safety and trust-building.",
            profile.name, tagline, percentage
        ),
        InsightLevel::Developing => format!(
            "Your cultural ripple is an area for focused growth. As a {} leader, you have the potential to leverage {} more consistently. Your Cultural Influence score of {}% suggests that being more intentional about your emotional presence could significantly improve team dynamics.",
            profile.name, tagline, percentage
        ),
    };

    if InsightLevel::from_value(scores.culture.t) == InsightLevel::High {
        text.push_str(" Your strength in trust-building creates lasting bonds with team members.");
    } else if InsightLevel::from_value(scores.culture.ps) == InsightLevel::Developing {
        text.push_str(
            " Focus on creating more psychological safety to help your team take healthy risks.",
        );
    }
    text
}

/// One reading per B.E.D. factor, each banded on its own total.
pub fn bed_profile_insight(scores: &ScoreBreakdown, leadership_type: LeadershipType) -> BedInsight {
    let name = leadership_type.profile().name;

    let beliefs = match InsightLevel::from_value(scores.bed.b) {
        InsightLevel::High => format!("Your belief patterns are empowering. You operate from a mindset of possibility and growth, which aligns with your identity as {}. You tend to see challenges as opportunities and maintain constructive narratives even under pressure.", name),
        InsightLevel::Moderate => format!("Your belief patterns show a balance of optimism and caution. As {}, you generally maintain constructive thinking but may occasionally slip into limiting narratives when stressed. Building awareness of these moments can strengthen your leadership presence.", name),
        InsightLevel::Developing => format!("Your belief patterns may be holding you back. Consider examining the stories you tell yourself about your capabilities and circumstances. As {}, shifting toward more empowering beliefs could unlock significant leadership potential.", name),
    };

    let excuses = match InsightLevel::from_value(scores.bed.ex) {
        InsightLevel::High => "You demonstrate strong accountability and rarely fall into excuse-making patterns. This ownership mentality is a key strength that builds trust with your team and drives results.",
        InsightLevel::Moderate => "You generally take ownership but may occasionally defer responsibility under pressure. Recognizing these moments and choosing accountability can strengthen your leadership credibility.",
        InsightLevel::Developing => "Under pressure, you may tend toward protective excuse patterns. This is common but worth addressing. Building habits of radical ownership, even in difficult situations, will significantly elevate your leadership impact.",
    }
    .to_string();

    let decisions = match InsightLevel::from_value(scores.bed.d) {
        InsightLevel::High => "You make bold, timely decisions even with incomplete information. This decisiveness inspires confidence in your team and keeps momentum strong during uncertainty.".to_string(),
        InsightLevel::Moderate => "Your decision-making is generally sound but may slow under pressure. Trust your judgment more and remember that a good decision now often beats a perfect decision later.".to_string(),
        InsightLevel::Developing => format!("Decision hesitancy may be limiting your leadership effectiveness. As {}, leaning into your natural strengths and trusting your instincts more can help you make faster, more confident choices.", name),
    };

    BedInsight {
        beliefs,
        excuses,
        decisions,
    }
}

/// Behavior under pressure: a self-regulation reading, the type's stress
/// behaviors, and a self-awareness note.
pub fn pressure_pattern_insight(scores: &ScoreBreakdown, leadership_type: LeadershipType) -> String {
    let profile = leadership_type.profile();

    let response = match InsightLevel::from_value(scores.eq.sr) {
        InsightLevel::High => "When pressure rises, you maintain remarkable composure. Your ability to regulate your emotional state keeps you grounded when others might react impulsively.",
        InsightLevel::Moderate => "Under pressure, you generally maintain composure but may experience moments of emotional reactivity. Building stronger regulation habits will help you stay centered in high-stakes moments.",
        InsightLevel::Developing => "Pressure tends to trigger emotional responses that may not serve you well. Developing stronger self-regulation practices will help you respond rather than react in challenging situations.",
    };

    let awareness = if scores.eq.sa >= AWARENESS_RECOGNITION_FLOOR {
        "Your strong self-awareness helps you recognize these patterns early, giving you the chance to course-correct."
    } else {
        "Building greater self-awareness will help you catch these patterns earlier and choose more effective responses."
    };

    format!(
        "{} As {}, your typical stress behaviors include: {}. {}",
        response,
        profile.name,
        profile.stress_behaviors.join(", ").to_lowercase(),
        awareness
    )
}

/// First-person "I lead BECAUSE" statement.
///
/// Tone is high when either motivation or beliefs is high, developing only
/// when both are developing, and moderate otherwise.
pub fn because_statement(
    scores: &ScoreBreakdown,
    leadership_type: LeadershipType,
    family: LeadershipFamily,
) -> String {
    let profile = leadership_type.profile();
    let reason = match family {
        LeadershipFamily::Regulators => "you believe stability creates the foundation for others to thrive",
        LeadershipFamily::Connectors => "you know that people perform best when they feel genuinely seen and valued",
        LeadershipFamily::Drivers => "you understand that momentum and decisive action move teams forward",
        LeadershipFamily::Strategists => "you see patterns others miss and know that insight drives transformation",
    };

    let motivation = InsightLevel::from_value(scores.eq.m);
    let beliefs = InsightLevel::from_value(scores.bed.b);
    let tone = if motivation == InsightLevel::High || beliefs == InsightLevel::High {
        InsightLevel::High
    } else if motivation == InsightLevel::Developing && beliefs == InsightLevel::Developing {
        InsightLevel::Developing
    } else {
        InsightLevel::Moderate
    };

    match tone {
        InsightLevel::High => format!(
            "I lead BECAUSE {}. As {}, I show up every day because my {} creates impact that matters. I refuse to quit because I've seen what's possible when leadership is done with emotional intelligence.",
            reason,
            profile.name,
            profile.tagline.to_lowercase()
        ),
        InsightLevel::Moderate => format!(
            "I lead BECAUSE {}. Even when it's hard, I show up as {} because I believe in the power of emotionally intelligent leadership. I'm building toward a version of myself that leads with both strength and heart.",
            reason, profile.name
        ),
        InsightLevel::Developing => format!(
            "I lead BECAUSE {}. I may still be discovering my full potential as {}, but I refuse to quit because I know that every step forward in emotional intelligence creates ripples of positive change.",
            reason, profile.name
        ),
    }
}

/// Reading for one EQ pillar at a given percentage.
///
/// Metrics outside the EQ category get a generic sentence.
pub fn eq_pillar_insight(metric: Metric, percentage: Percentage) -> String {
    use InsightLevel::{Developing, High, Moderate};

    let text = match (metric, InsightLevel::from_percentage(percentage)) {
        (Metric::SelfAwareness, High) => "Your self-awareness is a significant strength. You recognize your emotions and their impact, giving you the ability to lead with intention.",
        (Metric::SelfAwareness, Moderate) => "Your self-awareness is developing. Continue building the habit of checking in with your emotional state throughout the day.",
        (Metric::SelfAwareness, Developing) => "Growing your self-awareness will unlock other areas of emotional intelligence. Start by naming your emotions as you experience them.",
        (Metric::SelfRegulation, High) => "You demonstrate excellent emotional control. This allows you to remain composed when others look to you for stability.",
        (Metric::SelfRegulation, Moderate) => "Your self-regulation is solid but has room to grow. Notice the moments when emotions drive your responses rather than inform them.",
        (Metric::SelfRegulation, Developing) => "Building self-regulation skills will transform your leadership presence. Practice pausing before responding in emotional moments.",
        (Metric::Motivation, High) => "Your inner drive is powerful. This intrinsic motivation keeps you moving forward even when external recognition is absent.",
        (Metric::Motivation, Moderate) => "Your motivation is present but could be more consistent. Reconnecting with your core purpose will help sustain your drive.",
        (Metric::Motivation, Developing) => "Strengthening your motivation will fuel all other aspects of your leadership. Identify what truly matters to you about your work.",
        (Metric::Empathy, High) => "Your empathy is a gift. You naturally understand others' perspectives, creating deeper connections and trust.",
        (Metric::Empathy, Moderate) => "Your empathy is present but could go deeper. Practice being curious about others' experiences before offering solutions.",
        (Metric::Empathy, Developing) => "Developing empathy will enhance your relationships and influence. Start by asking more questions and listening without planning your response.",
        (Metric::SocialSkill, High) => "Your social skills create influence. You navigate relationships and group dynamics with natural ease.",
        (Metric::SocialSkill, Moderate) => "Your social skills serve you well but can expand further. Focus on adapting your communication style to different audiences.",
        (Metric::SocialSkill, Developing) => "Building social skills will multiply your leadership reach. Start by being more intentional about how you engage in group settings.",
        _ => {
            return format!(
                "Your {} score reflects your current capacity in this area.",
                metric.code()
            )
        }
    };
    text.to_string()
}

/// Reading for one culture dimension at a given percentage.
///
/// Metrics outside the culture category get a generic sentence.
pub fn culture_dimension_insight(metric: Metric, percentage: Percentage) -> String {
    use InsightLevel::{Developing, High, Moderate};

    let text = match (metric, InsightLevel::from_percentage(percentage)) {
        (Metric::Trust, High) => "Trust flows naturally from your leadership. People believe in your intentions and follow your direction with confidence.",
        (Metric::Trust, Moderate) => "You've built solid trust foundations. Consistency in your words and actions will deepen this further.",
        (Metric::Trust, Developing) => "Building trust is your growth edge. Focus on following through on commitments, no matter how small.",
        (Metric::PsychologicalSafety, High) => "You create psychological safety. Team members feel comfortable taking risks and speaking up around you.",
        (Metric::PsychologicalSafety, Moderate) => "Your team feels reasonably safe, but there's room to create more openness. Invite dissenting opinions more often.",
        (Metric::PsychologicalSafety, Developing) => "Psychological safety needs attention. Your team may hesitate to share concerns. Practice responding with curiosity, not judgment.",
        (Metric::CommunicationQuality, High) => "Your communication creates clarity. People understand your message and feel informed about what matters.",
        (Metric::CommunicationQuality, Moderate) => "Your communication is effective but could be more consistent. Ensure your message reaches all levels equally.",
        (Metric::CommunicationQuality, Developing) => "Communication is a growth area. Focus on being more explicit about expectations and more frequent with updates.",
        (Metric::TeamStability, High) => "You bring stability to your team. People feel secure and can focus on their work without unnecessary anxiety.",
        (Metric::TeamStability, Moderate) => "Your team experiences reasonable stability. Work on being more predictable in your responses to change.",
        (Metric::TeamStability, Developing) => "Team stability needs focus. Your emotional variability may create uncertainty. Aim for more consistency in your presence.",
        (Metric::EmotionalRipple, High) => "Your emotional presence lifts others. People feel better after interacting with you and carry that energy forward.",
        (Metric::EmotionalRipple, Moderate) => "Your emotional ripple is positive but not yet maximized. Be more intentional about the energy you bring to interactions.",
        (Metric::EmotionalRipple, Developing) => "Your emotional ripple needs attention. Notice how your mood affects others and work on bringing consistent positive energy.",
        _ => {
            return format!(
                "Your {} score reflects your current impact in this area.",
                metric.code()
            )
        }
    };
    text.to_string()
}
