//! Encouragement shown at progress milestones.

use serde::Serialize;

use crate::domain::foundation::Percentage;

/// Milestone that triggers a coach message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CoachTrigger {
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "25%")]
    Quarter,
    #[serde(rename = "50%")]
    Half,
    #[serde(rename = "75%")]
    ThreeQuarters,
    #[serde(rename = "complete")]
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoachMessage {
    pub trigger: CoachTrigger,
    pub message: &'static str,
}

impl CoachMessage {
    /// Message for a trigger.
    pub fn for_trigger(trigger: CoachTrigger) -> Self {
        let message = match trigger {
            CoachTrigger::Start => {
                "Let's discover the leader you already are, and the one you're becoming."
            }
            CoachTrigger::Quarter => "You're making great progress. Trust your instincts.",
            CoachTrigger::Half => "Halfway there. Your patterns are revealing themselves.",
            CoachTrigger::ThreeQuarters => {
                "Almost done. The insights waiting for you are worth it."
            }
            CoachTrigger::Complete => {
                "You showed up. Now let's show you what you've been building."
            }
        };
        Self { trigger, message }
    }

    /// Picks the message for a progress value, if any.
    ///
    /// Zero progress yields the start message; 1-24% yields nothing.
    pub fn for_progress(progress: Percentage) -> Option<Self> {
        let trigger = match progress.value() {
            0 => CoachTrigger::Start,
            1..=24 => return None,
            25..=49 => CoachTrigger::Quarter,
            50..=74 => CoachTrigger::Half,
            75..=99 => CoachTrigger::ThreeQuarters,
            _ => CoachTrigger::Complete,
        };
        Some(Self::for_trigger(trigger))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger_at(value: u8) -> Option<CoachTrigger> {
        CoachMessage::for_progress(Percentage::new(value)).map(|m| m.trigger)
    }

    #[test]
    fn milestones_map_to_triggers() {
        assert_eq!(trigger_at(0), Some(CoachTrigger::Start));
        assert_eq!(trigger_at(5), None);
        assert_eq!(trigger_at(24), None);
        assert_eq!(trigger_at(25), Some(CoachTrigger::Quarter));
        assert_eq!(trigger_at(50), Some(CoachTrigger::Half));
        assert_eq!(trigger_at(80), Some(CoachTrigger::ThreeQuarters));
        assert_eq!(trigger_at(100), Some(CoachTrigger::Complete));
    }

    #[test]
    fn trigger_serializes_as_label() {
        let json = serde_json::to_value(CoachMessage::for_trigger(CoachTrigger::Half)).unwrap();
        assert_eq!(json["trigger"], "50%");
    }
}
