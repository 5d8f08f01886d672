//! A single recorded answer.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Choice, ChoiceLetter};
use crate::domain::foundation::Timestamp;
use crate::domain::scoring::ScoreVector;

/// One answer in a session's response log.
///
/// The score vector is copied from the catalog at answer time so the log is
/// self-contained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub scenario_id: String,
    pub selected_choice: ChoiceLetter,
    pub scores: ScoreVector,
    pub timestamp: Timestamp,
}

impl Response {
    /// Records `choice` as the answer to `scenario_id`, stamped now.
    pub fn new(scenario_id: impl Into<String>, choice: &Choice) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            selected_choice: choice.letter,
            scores: choice.scores,
            timestamp: Timestamp::now(),
        }
    }
}
