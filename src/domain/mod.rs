//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `scoring` - Metrics, score vectors, and aggregation into a breakdown
//! - `catalog` - The embedded, validated scenario catalog
//! - `leadership` - Family and type classification plus profile metadata
//! - `assessment` - Session state machine, responses, and results
//! - `insights` - Narrative feedback and growth recommendations derived from a result

pub mod assessment;
pub mod catalog;
pub mod foundation;
pub mod insights;
pub mod leadership;
pub mod scoring;
