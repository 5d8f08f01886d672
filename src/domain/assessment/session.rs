//! Assessment session state machine.
//!
//! A session collects one response per scenario while in progress and feeds
//! that log to the aggregator. Precondition violations (answering before
//! starting, completing twice, starting without a profile) are guarded no-ops
//! that return `false` and leave state untouched.

use serde::{Deserialize, Serialize};

use super::response::Response;
use super::result::AssessmentResult;
use super::user_profile::UserProfile;
use crate::domain::catalog::{catalog, ChoiceLetter, Scenario, SCENARIO_COUNT};
use crate::domain::foundation::{
    AssessmentStatus, DomainError, ErrorCode, Percentage, SessionId, StateMachine, Timestamp,
    UserId,
};
use crate::domain::scoring::{ScoreAggregator, ScoreBreakdown};

const LAST_SCENARIO_INDEX: usize = SCENARIO_COUNT - 1;

/// Working state of one assessment attempt.
///
/// # Invariants
///
/// - at most one response per scenario id
/// - `current_scenario_index` is in `0..=19`
/// - `completed_at` is set iff status is `Completed`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentSession {
    id: SessionId,
    user: Option<UserProfile>,
    status: AssessmentStatus,
    current_scenario_index: usize,
    responses: Vec<Response>,
    started_at: Option<Timestamp>,
    completed_at: Option<Timestamp>,
    last_saved_at: Option<Timestamp>,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    /// Creates an empty, not-started session with no user.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            user: None,
            status: AssessmentStatus::NotStarted,
            current_scenario_index: 0,
            responses: Vec::new(),
            started_at: None,
            completed_at: None,
            last_saved_at: None,
        }
    }

    /// Creates a not-started session for a registered user.
    pub fn for_user(user: UserProfile) -> Self {
        let mut session = Self::new();
        session.user = Some(user);
        session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user.as_ref().map(|u| &u.id)
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn current_scenario_index(&self) -> usize {
        self.current_scenario_index
    }

    /// Responses in the order scenarios were first answered.
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    pub fn started_at(&self) -> Option<&Timestamp> {
        self.started_at.as_ref()
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn last_saved_at(&self) -> Option<&Timestamp> {
        self.last_saved_at.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Scenario at the current index.
    pub fn current_scenario(&self) -> Option<&'static Scenario> {
        catalog().at(self.current_scenario_index)
    }

    /// Share of scenarios answered, rounded.
    pub fn progress(&self) -> Percentage {
        Percentage::from_ratio(self.responses.len() as u32, catalog().len() as u32)
    }

    pub fn response_for(&self, scenario_id: &str) -> Option<&Response> {
        self.responses.iter().find(|r| r.scenario_id == scenario_id)
    }

    pub fn is_answered(&self, scenario_id: &str) -> bool {
        self.response_for(scenario_id).is_some()
    }

    /// True when the current scenario has an answer.
    pub fn can_proceed(&self) -> bool {
        self.current_scenario()
            .map(|s| self.is_answered(&s.id))
            .unwrap_or(false)
    }

    /// True when an in-progress attempt has at least one answer.
    pub fn has_saved_progress(&self) -> bool {
        self.status == AssessmentStatus::InProgress && !self.responses.is_empty()
    }

    /// Fresh breakdown of the current response log.
    pub fn score_breakdown(&self) -> ScoreBreakdown {
        ScoreAggregator::aggregate(&self.responses)
    }

    /// Scores and classifies a completed attempt.
    ///
    /// Returns `None` unless the session is completed and has a user.
    pub fn calculate_result(&self) -> Option<AssessmentResult> {
        if self.status != AssessmentStatus::Completed {
            return None;
        }
        let user_id = self.user_id()?.clone();
        Some(AssessmentResult::calculate(self.id, user_id, &self.responses))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers (or replaces) the respondent.
    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    /// Begins a fresh attempt.
    ///
    /// Requires a user. Any previous attempt, including a completed one, is
    /// discarded: the session gets a new id, an empty log and index 0.
    pub fn start(&mut self) -> bool {
        let Some(user) = self.user.take() else {
            return false;
        };

        *self = Self {
            id: SessionId::new(),
            user: Some(user),
            status: AssessmentStatus::InProgress,
            current_scenario_index: 0,
            responses: Vec::new(),
            started_at: Some(Timestamp::now()),
            completed_at: None,
            last_saved_at: None,
        };
        true
    }

    /// Records an answer, replacing any earlier answer to the same scenario.
    ///
    /// Does not move the current index.
    ///
    /// # Errors
    ///
    /// - `ScenarioNotFound` if the scenario id is not in the catalog
    /// - `ChoiceNotFound` if the scenario has no such choice
    ///
    /// Returns `Ok(false)` when the session is not in progress.
    pub fn answer(
        &mut self,
        scenario_id: &str,
        letter: ChoiceLetter,
    ) -> Result<bool, DomainError> {
        if !self.status.accepts_answers() {
            return Ok(false);
        }

        let scenario = catalog()
            .get(scenario_id)
            .ok_or_else(|| scenario_not_found(scenario_id))?;
        let choice = scenario
            .choice(letter)
            .ok_or_else(|| choice_not_found(scenario_id, letter))?;

        let response = Response::new(scenario.id.clone(), choice);
        match self
            .responses
            .iter_mut()
            .find(|r| r.scenario_id == response.scenario_id)
        {
            Some(existing) => *existing = response,
            None => self.responses.push(response),
        }
        self.last_saved_at = Some(Timestamp::now());
        Ok(true)
    }

    /// Advances one scenario, stopping at the last.
    pub fn next(&mut self) -> usize {
        self.go_to(self.current_scenario_index.saturating_add(1))
    }

    /// Steps back one scenario, stopping at the first.
    pub fn previous(&mut self) -> usize {
        self.go_to(self.current_scenario_index.saturating_sub(1))
    }

    /// Jumps to a scenario, clamping out-of-range targets.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.current_scenario_index = index.min(LAST_SCENARIO_INDEX);
        self.current_scenario_index
    }

    /// Marks the attempt completed.
    ///
    /// Does not require every scenario to be answered. Returns `false` when
    /// the session is not in progress.
    pub fn complete(&mut self) -> bool {
        self.try_complete().is_ok()
    }

    /// Like [`complete`](Self::complete), but reports why completion was
    /// refused.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` unless the session is in progress.
    pub fn try_complete(&mut self) -> Result<(), DomainError> {
        let status = self
            .status
            .transition_to(AssessmentStatus::Completed)
            .map_err(|e| {
                DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
                    .with_detail("from", self.status.to_string())
                    .with_detail("to", AssessmentStatus::Completed.to_string())
            })?;
        self.status = status;
        self.completed_at = Some(Timestamp::now());
        Ok(())
    }

    /// Discards everything, including the user.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Restoration
    // ─────────────────────────────────────────────────────────────────────────

    /// Re-checks a session read back from storage against the catalog.
    ///
    /// An out-of-range index is clamped. Everything else that breaks an
    /// invariant rejects the whole session.
    ///
    /// # Errors
    ///
    /// - `ProfileRequired` if a started session has no user
    /// - `InvalidStateTransition` if `completed_at` disagrees with the status
    /// - `ScenarioNotFound` / `ChoiceNotFound` for responses outside the catalog
    /// - `ValidationFailed` for a repeated scenario or scores that differ
    ///   from the catalog's vector for the chosen answer
    pub fn restored(mut self) -> Result<Self, DomainError> {
        if self.status != AssessmentStatus::NotStarted && self.user.is_none() {
            return Err(DomainError::new(
                ErrorCode::ProfileRequired,
                format!("Session {} has no user", self.id),
            ));
        }

        let completed = self.status == AssessmentStatus::Completed;
        if completed != self.completed_at.is_some() {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Session {} is {} but completedAt is {}",
                    self.id,
                    self.status,
                    if self.completed_at.is_some() { "set" } else { "missing" }
                ),
            ));
        }

        let mut seen = [false; SCENARIO_COUNT];
        for response in &self.responses {
            let index = catalog()
                .index_of(&response.scenario_id)
                .ok_or_else(|| scenario_not_found(&response.scenario_id))?;
            if std::mem::replace(&mut seen[index], true) {
                return Err(DomainError::validation(
                    "responses",
                    format!("Scenario '{}' is answered more than once", response.scenario_id),
                )
                .with_detail("scenario_id", response.scenario_id.as_str()));
            }

            let choice = catalog()
                .at(index)
                .and_then(|s| s.choice(response.selected_choice))
                .ok_or_else(|| choice_not_found(&response.scenario_id, response.selected_choice))?;
            if response.scores != choice.scores {
                return Err(DomainError::validation(
                    "responses",
                    format!(
                        "Scores for scenario '{}' choice {} do not match the catalog",
                        response.scenario_id, response.selected_choice
                    ),
                )
                .with_detail("scenario_id", response.scenario_id.as_str())
                .with_detail("choice", response.selected_choice.as_str()));
            }
        }

        self.go_to(self.current_scenario_index);
        Ok(self)
    }
}

fn scenario_not_found(scenario_id: &str) -> DomainError {
    DomainError::new(
        ErrorCode::ScenarioNotFound,
        format!("Scenario '{}' does not exist", scenario_id),
    )
    .with_detail("scenario_id", scenario_id)
}

fn choice_not_found(scenario_id: &str, letter: ChoiceLetter) -> DomainError {
    DomainError::new(
        ErrorCode::ChoiceNotFound,
        format!("Scenario '{}' has no choice {}", scenario_id, letter),
    )
    .with_detail("scenario_id", scenario_id)
    .with_detail("choice", letter.as_str())
}
