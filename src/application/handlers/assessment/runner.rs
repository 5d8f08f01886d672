//! AssessmentRunner - Drives a session and keeps its checkpoint current.
//!
//! Every mutation of an in-progress session writes a checkpoint keyed by the
//! session's user. Completion and reset remove it. Checkpoint failures are
//! logged and swallowed; the in-memory session stays authoritative.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::assessment::{AssessmentResult, AssessmentSession, SessionCheckpoint, UserProfile};
use crate::domain::catalog::ChoiceLetter;
use crate::domain::foundation::{AssessmentStatus, DomainError, UserId};
use crate::ports::CheckpointStore;

/// Owns one session and its checkpoint lifecycle.
pub struct AssessmentRunner {
    session: AssessmentSession,
    checkpoints: Arc<dyn CheckpointStore>,
}

impl AssessmentRunner {
    pub fn new(checkpoints: Arc<dyn CheckpointStore>) -> Self {
        Self {
            session: AssessmentSession::new(),
            checkpoints,
        }
    }

    /// Wraps an existing session without touching storage.
    pub fn with_session(session: AssessmentSession, checkpoints: Arc<dyn CheckpointStore>) -> Self {
        Self {
            session,
            checkpoints,
        }
    }

    pub fn session(&self) -> &AssessmentSession {
        &self.session
    }

    pub fn into_session(self) -> AssessmentSession {
        self.session
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers the respondent.
    pub async fn register(&mut self, user: UserProfile) {
        debug!(user_id = %user.id, "Respondent registered");
        self.session.set_user(user);
        self.checkpoint().await;
    }

    /// Begins a fresh attempt. Returns `false` without a registered user.
    pub async fn start(&mut self) -> bool {
        if !self.session.start() {
            debug!("Start ignored: no registered user");
            return false;
        }
        info!(
            session_id = %self.session.id(),
            user_id = ?self.session.user_id().map(UserId::as_str),
            "Assessment started"
        );
        self.checkpoint().await;
        true
    }

    /// Records an answer.
    ///
    /// # Errors
    ///
    /// Propagates `ScenarioNotFound` / `ChoiceNotFound` from the session;
    /// nothing is checkpointed in that case.
    pub async fn answer(
        &mut self,
        scenario_id: &str,
        letter: ChoiceLetter,
    ) -> Result<bool, DomainError> {
        let recorded = self.session.answer(scenario_id, letter)?;
        if recorded {
            debug!(
                session_id = %self.session.id(),
                scenario_id,
                choice = %letter,
                answered = self.session.answered_count(),
                "Answer recorded"
            );
            self.checkpoint().await;
        }
        Ok(recorded)
    }

    pub async fn next(&mut self) -> usize {
        let index = self.session.next();
        self.navigated(index).await
    }

    pub async fn previous(&mut self) -> usize {
        let index = self.session.previous();
        self.navigated(index).await
    }

    pub async fn go_to(&mut self, index: usize) -> usize {
        let index = self.session.go_to(index);
        self.navigated(index).await
    }

    /// Completes the attempt and drops its checkpoint.
    pub async fn complete(&mut self) -> bool {
        if let Err(e) = self.session.try_complete() {
            debug!(status = %self.session.status(), error = %e, "Complete ignored");
            return false;
        }
        info!(
            session_id = %self.session.id(),
            answered = self.session.answered_count(),
            "Assessment completed"
        );
        if let Some(user_id) = self.session.user_id().cloned() {
            self.clear_checkpoint(&user_id).await;
        }
        true
    }

    /// Scores and classifies the completed attempt.
    pub fn result(&self) -> Option<AssessmentResult> {
        let result = self.session.calculate_result()?;
        info!(
            session_id = %result.session_id,
            leadership_family = %result.leadership_family,
            leadership_type = %result.leadership_type,
            overall = result.scores.overall.percentage.value(),
            "Assessment result calculated"
        );
        Some(result)
    }

    /// Discards the session, its user and its checkpoint.
    pub async fn reset(&mut self) {
        if let Some(user_id) = self.session.user_id().cloned() {
            self.clear_checkpoint(&user_id).await;
        }
        self.session.reset();
        info!("Assessment reset");
    }

    /// Restores a user's in-progress checkpoint.
    ///
    /// Returns `true` if a session was restored. Checkpoints that are not in
    /// progress are stale and get removed, as are checkpoints whose session
    /// fails [`AssessmentSession::restored`].
    pub async fn resume(&mut self, user_id: &UserId) -> bool {
        let checkpoint = match self.checkpoints.load(user_id).await {
            Ok(Some(checkpoint)) => checkpoint,
            Ok(None) => return false,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Failed to load checkpoint");
                return false;
            }
        };

        if !checkpoint.is_resumable() {
            debug!(user_id = %user_id, "Discarding stale checkpoint");
            self.clear_checkpoint(user_id).await;
            return false;
        }

        if checkpoint.user_id() != Some(user_id) {
            warn!(user_id = %user_id, "Discarding checkpoint filed under another user");
            self.clear_checkpoint(user_id).await;
            return false;
        }

        self.session = match checkpoint.session.restored() {
            Ok(session) => session,
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Discarding invalid checkpoint");
                self.clear_checkpoint(user_id).await;
                return false;
            }
        };
        info!(
            session_id = %self.session.id(),
            user_id = %user_id,
            index = self.session.current_scenario_index(),
            answered = self.session.answered_count(),
            "Assessment resumed"
        );
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checkpointing
    // ─────────────────────────────────────────────────────────────────────────

    async fn navigated(&mut self, index: usize) -> usize {
        debug!(session_id = %self.session.id(), index, "Navigated");
        self.checkpoint().await;
        index
    }

    async fn checkpoint(&self) {
        if self.session.status() != AssessmentStatus::InProgress {
            return;
        }
        let Some(user_id) = self.session.user_id() else {
            return;
        };

        match self
            .checkpoints
            .save(&SessionCheckpoint::new(self.session.clone()))
            .await
        {
            Ok(()) => debug!(user_id = %user_id, "Checkpoint saved"),
            Err(e) => warn!(user_id = %user_id, error = %e, "Failed to save checkpoint"),
        }
    }

    async fn clear_checkpoint(&self, user_id: &UserId) {
        if let Err(e) = self.checkpoints.clear(user_id).await {
            warn!(user_id = %user_id, error = %e, "Failed to clear checkpoint");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryCheckpointStore;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::StorageError;
    use async_trait::async_trait;

    struct FailingCheckpointStore;

    #[async_trait]
    impl CheckpointStore for FailingCheckpointStore {
        async fn save(&self, _checkpoint: &SessionCheckpoint) -> Result<(), StorageError> {
            Err(StorageError::IoError("disk full".to_string()))
        }

        async fn load(&self, _user_id: &UserId) -> Result<Option<SessionCheckpoint>, StorageError> {
            Err(StorageError::IoError("disk gone".to_string()))
        }

        async fn clear(&self, _user_id: &UserId) -> Result<(), StorageError> {
            Err(StorageError::IoError("disk gone".to_string()))
        }
    }

    fn user() -> UserProfile {
        UserProfile::register("run@example.com", "Riley", "Chen").unwrap()
    }

    async fn started(store: &InMemoryCheckpointStore) -> (AssessmentRunner, UserId) {
        let mut runner = AssessmentRunner::new(Arc::new(store.clone()));
        let user = user();
        let user_id = user.id.clone();
        runner.register(user).await;
        assert!(runner.start().await);
        (runner, user_id)
    }

    #[tokio::test]
    async fn start_without_user_is_refused_and_not_checkpointed() {
        let store = InMemoryCheckpointStore::new();
        let mut runner = AssessmentRunner::new(Arc::new(store.clone()));

        assert!(!runner.start().await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn register_before_start_writes_nothing() {
        let store = InMemoryCheckpointStore::new();
        let mut runner = AssessmentRunner::new(Arc::new(store.clone()));
        runner.register(user()).await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn answers_and_navigation_are_checkpointed() {
        let store = InMemoryCheckpointStore::new();
        let (mut runner, user_id) = started(&store).await;

        runner.answer("scenario-1", ChoiceLetter::B).await.unwrap();
        runner.next().await;

        let checkpoint = store.load(&user_id).await.unwrap().unwrap();
        assert_eq!(checkpoint.session.answered_count(), 1);
        assert_eq!(checkpoint.session.current_scenario_index(), 1);
    }

    #[tokio::test]
    async fn unknown_scenario_is_an_error_and_not_checkpointed() {
        let store = InMemoryCheckpointStore::new();
        let (mut runner, user_id) = started(&store).await;
        let before = store.load(&user_id).await.unwrap().unwrap();

        let err = runner
            .answer("scenario-99", ChoiceLetter::A)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ScenarioNotFound);
        let after = store.load(&user_id).await.unwrap().unwrap();
        assert_eq!(after.session, before.session);
    }

    #[tokio::test]
    async fn complete_clears_checkpoint_and_yields_result() {
        let store = InMemoryCheckpointStore::new();
        let (mut runner, user_id) = started(&store).await;
        runner.answer("scenario-1", ChoiceLetter::C).await.unwrap();

        assert!(runner.complete().await);
        assert!(!store.exists(&user_id).await.unwrap());

        let result = runner.result().unwrap();
        assert_eq!(result.user_id, user_id);
        assert_eq!(result.scores.overall.total, 44);
        assert!(!runner.complete().await);
    }

    #[tokio::test]
    async fn reset_clears_checkpoint_and_user() {
        let store = InMemoryCheckpointStore::new();
        let (mut runner, user_id) = started(&store).await;
        runner.answer("scenario-1", ChoiceLetter::A).await.unwrap();

        runner.reset().await;

        assert!(!store.exists(&user_id).await.unwrap());
        assert!(runner.session().user().is_none());
        assert_eq!(runner.session().status(), AssessmentStatus::NotStarted);
    }

    #[tokio::test]
    async fn resume_restores_in_progress_session() {
        let store = InMemoryCheckpointStore::new();
        let (mut runner, user_id) = started(&store).await;
        runner.answer("scenario-1", ChoiceLetter::D).await.unwrap();
        runner.answer("scenario-2", ChoiceLetter::C).await.unwrap();
        runner.go_to(2).await;
        let original = runner.into_session();

        let mut resumed = AssessmentRunner::new(Arc::new(store.clone()));
        assert!(resumed.resume(&user_id).await);

        assert_eq!(resumed.session().id(), original.id());
        assert_eq!(resumed.session().current_scenario_index(), 2);
        assert_eq!(resumed.session().responses(), original.responses());
    }

    #[tokio::test]
    async fn resume_discards_stale_checkpoint() {
        let store = InMemoryCheckpointStore::new();
        let mut session = AssessmentSession::for_user(user());
        session.start();
        session.complete();
        let user_id = session.user_id().unwrap().clone();
        store.save(&SessionCheckpoint::new(session)).await.unwrap();

        let mut runner = AssessmentRunner::new(Arc::new(store.clone()));

        assert!(!runner.resume(&user_id).await);
        assert!(!store.exists(&user_id).await.unwrap());
        assert_eq!(runner.session().status(), AssessmentStatus::NotStarted);
    }

    #[tokio::test]
    async fn resume_discards_checkpoint_with_repeated_scenario() {
        let store = InMemoryCheckpointStore::new();
        let (mut runner, user_id) = started(&store).await;
        runner.answer("scenario-1", ChoiceLetter::C).await.unwrap();
        runner.answer("scenario-2", ChoiceLetter::A).await.unwrap();

        let mut json = serde_json::to_value(runner.session()).unwrap();
        json["responses"][1]["scenarioId"] = "scenario-1".into();
        json["currentScenarioIndex"] = 57.into();
        let tampered: AssessmentSession = serde_json::from_value(json).unwrap();
        store.save(&SessionCheckpoint::new(tampered)).await.unwrap();

        let mut resumed = AssessmentRunner::new(Arc::new(store.clone()));

        assert!(!resumed.resume(&user_id).await);
        assert!(!store.exists(&user_id).await.unwrap());
        assert_eq!(resumed.session().status(), AssessmentStatus::NotStarted);
    }

    #[tokio::test]
    async fn resume_discards_checkpoint_with_forged_scores() {
        let store = InMemoryCheckpointStore::new();
        let (mut runner, user_id) = started(&store).await;
        runner.answer("scenario-1", ChoiceLetter::B).await.unwrap();

        let mut json = serde_json::to_value(runner.session()).unwrap();
        json["responses"][0]["scores"] = serde_json::json!([4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4]);
        let tampered: AssessmentSession = serde_json::from_value(json).unwrap();
        store.save(&SessionCheckpoint::new(tampered)).await.unwrap();

        let mut resumed = AssessmentRunner::new(Arc::new(store.clone()));

        assert!(!resumed.resume(&user_id).await);
        assert!(!store.exists(&user_id).await.unwrap());
    }

    #[tokio::test]
    async fn resume_clamps_out_of_range_index() {
        let store = InMemoryCheckpointStore::new();
        let (mut runner, user_id) = started(&store).await;
        runner.answer("scenario-1", ChoiceLetter::C).await.unwrap();

        let mut json = serde_json::to_value(runner.session()).unwrap();
        json["currentScenarioIndex"] = 57.into();
        let tampered: AssessmentSession = serde_json::from_value(json).unwrap();
        store.save(&SessionCheckpoint::new(tampered)).await.unwrap();

        let mut resumed = AssessmentRunner::new(Arc::new(store.clone()));

        assert!(resumed.resume(&user_id).await);
        assert_eq!(resumed.session().current_scenario_index(), 19);
        assert_eq!(resumed.session().score_breakdown().eq.total, 17);
    }

    #[tokio::test]
    async fn resume_without_checkpoint_is_false() {
        let mut runner = AssessmentRunner::new(Arc::new(InMemoryCheckpointStore::new()));
        assert!(!runner.resume(&UserId::new("nobody").unwrap()).await);
    }

    #[tokio::test]
    async fn storage_failures_never_interrupt_the_session() {
        let mut runner = AssessmentRunner::new(Arc::new(FailingCheckpointStore));
        runner.register(user()).await;

        assert!(runner.start().await);
        assert!(runner.answer("scenario-1", ChoiceLetter::A).await.unwrap());
        assert_eq!(runner.next().await, 1);
        assert!(runner.complete().await);
        assert!(runner.result().is_some());

        let user_id = runner.session().user_id().unwrap().clone();
        assert!(!runner.resume(&user_id).await);
        runner.reset().await;
    }
}
