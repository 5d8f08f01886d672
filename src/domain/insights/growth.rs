//! "Your move" recommendations aimed at the weakest metrics.

use crate::domain::leadership::{LeadershipFamily, LeadershipType};
use crate::domain::scoring::{Metric, ScoreBreakdown};

const EQ_PILLARS: [Metric; 5] = [
    Metric::SelfAwareness,
    Metric::SelfRegulation,
    Metric::Motivation,
    Metric::Empathy,
    Metric::SocialSkill,
];

const PERSONAL_METRICS: [Metric; 8] = [
    Metric::SelfAwareness,
    Metric::SelfRegulation,
    Metric::Motivation,
    Metric::Empathy,
    Metric::SocialSkill,
    Metric::Beliefs,
    Metric::Excuses,
    Metric::Decisions,
];

/// Lowest-scoring metric; the earliest listed wins ties.
fn lowest(scores: &ScoreBreakdown, metrics: &[Metric]) -> Metric {
    metrics
        .iter()
        .copied()
        .min_by_key(|m| scores.get(*m))
        .unwrap_or(Metric::SelfAwareness)
}

/// Four recommendations: weakest EQ pillar, B.E.D. pattern, the type's
/// primary blind spot, and family advice.
pub fn growth_recommendations(
    scores: &ScoreBreakdown,
    leadership_type: LeadershipType,
    family: LeadershipFamily,
) -> Vec<String> {
    let mut recommendations = Vec::with_capacity(4);

    let pillar_action = match lowest(scores, &EQ_PILLARS) {
        Metric::SelfRegulation => "Develop a pause practice. When triggered, take three deep breaths before responding to create space between stimulus and response.",
        Metric::Motivation => "Reconnect with your core purpose. Write down why your work matters and review it weekly to maintain intrinsic drive.",
        Metric::Empathy => "Practice active listening. In your next three conversations, focus entirely on understanding before responding.",
        Metric::SocialSkill => "Invest in relationship building. Schedule one informal connection conversation with a team member each week.",
        _ => "Practice daily reflection. Spend 5 minutes each evening reviewing your emotional responses and their impact on others.",
    };
    recommendations.push(pillar_action.to_string());

    let bed = &scores.bed;
    let bed_action = if bed.b < bed.ex && bed.b < bed.d {
        "Challenge limiting beliefs. When you notice negative self-talk, write it down and actively reframe it with evidence-based alternatives."
    } else if bed.ex < bed.d {
        "Practice radical ownership. For the next week, eliminate phrases like \"I had to\" or \"They made me\" from your vocabulary."
    } else {
        "Build decision momentum. Start each day by making one clear decision quickly, building your confidence in faster decision-making."
    };
    recommendations.push(bed_action.to_string());

    if let Some(blind_spot) = leadership_type.profile().blind_spots.first() {
        recommendations.push(format!(
            "Address your primary blind spot: {}. Ask a trusted colleague for feedback on this specific area.",
            blind_spot
        ));
    }

    let family_action = match family {
        LeadershipFamily::Regulators => "Balance your stability with flexibility. Challenge yourself to embrace one change or new approach this week.",
        LeadershipFamily::Connectors => "Set boundaries around emotional investment. Schedule recovery time after intense relational work.",
        LeadershipFamily::Drivers => "Slow down to speed up. Take time to bring others along rather than pushing ahead alone.",
        LeadershipFamily::Strategists => "Move from planning to action. Identify one insight you can implement immediately rather than continuing to analyze.",
    };
    recommendations.push(family_action.to_string());

    recommendations
}

/// The single highest-leverage shift, aimed at the weakest of the EQ
/// pillars and B.E.D. factors.
pub fn one_move(scores: &ScoreBreakdown, leadership_type: LeadershipType) -> String {
    let name = leadership_type.profile().name;

    match lowest(scores, &PERSONAL_METRICS) {
        Metric::SelfRegulation => "Your one move: Create a \"pause protocol.\" When you feel emotional intensity rising, physically step back, take three breaths, and ask: \"What response serves the outcome I want?\" This shift from reaction to response will unlock your leadership potential.".to_string(),
        Metric::Motivation => format!("Your one move: Reconnect with your \"why\" weekly. Set a 15-minute calendar block each Monday to write down one thing that matters about your work this week. As {}, this practice will reignite your natural drive.", name),
        Metric::Empathy => "Your one move: Practice \"listen-first\" leadership. In your next five important conversations, commit to understanding before being understood. Ask one follow-up question before offering your perspective.".to_string(),
        Metric::SocialSkill => format!("Your one move: Initiate one meaningful conversation each week with someone outside your immediate circle. As {}, expanding your relational influence will multiply your leadership impact.", name),
        Metric::Beliefs => "Your one move: Challenge one limiting belief this week. When you notice negative self-talk, write it down and ask: \"What evidence contradicts this story?\" Rewriting your internal narrative will shift your external results.".to_string(),
        Metric::Excuses => "Your one move: Adopt radical ownership for 30 days. When something goes wrong, ask \"What could I have done differently?\" before looking at external factors. This mindset shift will transform how others trust your leadership.".to_string(),
        Metric::Decisions => "Your one move: Make one decisive choice each morning before 9 AM. Build the muscle of swift decision-making in low-stakes situations so it becomes natural when the stakes rise.".to_string(),
        _ => format!("Your one move: Start a daily \"emotional check-in\" practice. Before your first meeting each day, ask yourself: \"What emotion am I carrying right now, and how might it show up?\" This simple pause will transform how you show up as {}.", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::ScoreTotals;

    fn scores(raw: [u32; 13]) -> ScoreBreakdown {
        ScoreBreakdown::from_totals(&ScoreTotals::from_array(raw))
    }

    #[test]
    fn recommendations_target_weakest_pillar() {
        let recs = growth_recommendations(
            &scores([10, 10, 10, 2, 10, 5, 5, 5, 0, 0, 0, 0, 0]),
            LeadershipType::Mentor,
            LeadershipFamily::Connectors,
        );
        assert_eq!(recs.len(), 4);
        assert!(recs[0].starts_with("Practice active listening"));
        assert!(recs[2].contains("May over-invest in individuals"));
        assert!(recs[3].starts_with("Set boundaries"));
    }

    #[test]
    fn pillar_ties_go_to_first_listed() {
        let recs = growth_recommendations(
            &scores([0; 13]),
            LeadershipType::Stabilizer,
            LeadershipFamily::Regulators,
        );
        assert!(recs[0].starts_with("Practice daily reflection"));
    }

    #[test]
    fn bed_pattern_selection() {
        let bed = |b, ex, d| {
            growth_recommendations(
                &scores([5, 5, 5, 5, 5, b, ex, d, 0, 0, 0, 0, 0]),
                LeadershipType::Catalyst,
                LeadershipFamily::Drivers,
            )[1]
                .clone()
        };
        assert!(bed(1, 5, 5).starts_with("Challenge limiting beliefs"));
        assert!(bed(5, 2, 6).starts_with("Practice radical ownership"));
        assert!(bed(5, 6, 2).starts_with("Build decision momentum"));
        // beliefs tied for lowest falls through to the excuses check
        assert!(bed(2, 2, 6).starts_with("Practice radical ownership"));
    }

    #[test]
    fn one_move_targets_weakest_personal_metric() {
        let text = one_move(
            &scores([9, 9, 9, 9, 9, 9, 1, 9, 0, 0, 0, 0, 0]),
            LeadershipType::Anchor,
        );
        assert!(text.contains("radical ownership for 30 days"));
    }

    #[test]
    fn one_move_ignores_culture_metrics() {
        let text = one_move(
            &scores([9, 9, 3, 9, 9, 9, 9, 9, 0, 0, 0, 0, 0]),
            LeadershipType::Visionary,
        );
        assert!(text.contains("As The Visionary"));
        assert!(text.contains("\"why\""));
    }
}
