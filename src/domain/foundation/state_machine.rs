//! State machine trait for lifecycle status enums.
//!
//! Status enums declare their legal edges once; validated transitions and
//! terminal-state checks come for free.

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for AssessmentStatus {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (NotStarted, InProgress) | (InProgress, Completed))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             NotStarted => vec![InProgress],
///             InProgress => vec![Completed],
///             Completed => vec![],
///         }
///     }
/// }
///
/// let next = AssessmentStatus::InProgress.transition_to(AssessmentStatus::Completed)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Off,
        On,
        Burnt,
    }

    impl StateMachine for Light {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Light::Off => vec![Light::On],
                Light::On => vec![Light::Off, Light::Burnt],
                Light::Burnt => vec![],
            }
        }
    }

    #[test]
    fn transition_to_returns_target_when_edge_exists() {
        assert_eq!(Light::Off.transition_to(Light::On), Ok(Light::On));
    }

    #[test]
    fn transition_to_reports_both_states_when_rejected() {
        let err = Light::Off.transition_to(Light::Burnt).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Off"));
        assert!(message.contains("Burnt"));
    }

    #[test]
    fn terminal_state_has_no_outgoing_edges() {
        assert!(Light::Burnt.is_terminal());
        assert!(!Light::On.is_terminal());
    }
}
