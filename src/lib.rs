//! PawMatch - Dog adoption catalog and recommendation service
//!
//! This library provides the preference-matching engine that ranks adoptable
//! dogs against an adopter's lifestyle profile, plus the catalog storage and
//! HTTP surface built around it.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_match_score, MatchError, Matcher};
pub use models::{Dog, ScoredDog, ScoringWeights, UserPreferences};
