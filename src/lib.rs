//! EQUIP 360 - Scenario-based Leadership Assessment
//!
//! Scores twenty workplace scenarios across thirteen emotional-intelligence,
//! behavioral and cultural metrics, then classifies the respondent into one
//! of four leadership families and twenty leadership types.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
