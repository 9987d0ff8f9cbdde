//! Calma Algo - Professional matching engine for the Calma mental-wellness platform
//!
//! This library provides the core matching algorithm used by the Calma
//! platform: it ranks mental-health professionals against a user's stated
//! preferences and self-assessment results, and independently resolves a
//! mood label to a coping suggestion. Transport, persistence, and
//! credential handling belong to the surrounding service, which hands the
//! engine already-fetched collections.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    adjust_threshold, normalize, MatchError, MatchOutcome, MatchPolicy, Matcher, MoodError,
    MoodQuadrant, MoodResolver,
};
pub use crate::models::{
    Condition, HistoricalAverages, MatchPreferences, ProfessionalRecord, ScoredProfessional,
    SelfAssessment, UserAssessment,
};
