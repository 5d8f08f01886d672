//! Leadership module - family and type classification.
//!
//! Both classifiers are first-match decision lists over raw metric totals.
//! A family is chosen first; the type is then chosen among that family's
//! five members.

mod family;
mod leadership_type;
mod profiles;

pub use family::{FamilyComposites, LeadershipFamily};
pub use leadership_type::LeadershipType;
pub use profiles::{FamilyProfile, TypeProfile};
