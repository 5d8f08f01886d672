//! Assessment module - the session state machine and what it produces.
//!
//! # Components
//!
//! - `AssessmentSession` - collects responses, drives navigation and completion
//! - `Response` - one answer with its copied score vector
//! - `AssessmentResult` - breakdown plus family and type for a finished attempt
//! - `SessionCheckpoint` - resumable snapshot of an in-progress session
//! - `CoachMessage` - progress milestone encouragement

mod checkpoint;
mod coach;
mod response;
mod result;
mod session;
mod user_profile;

pub use checkpoint::SessionCheckpoint;
pub use coach::{CoachMessage, CoachTrigger};
pub use response::Response;
pub use result::AssessmentResult;
pub use session::AssessmentSession;
pub use user_profile::UserProfile;
