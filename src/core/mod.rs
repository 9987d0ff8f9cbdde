// Core algorithm exports
pub mod matcher;
pub mod mood;
pub mod normalize;
pub mod scoring;
pub mod threshold;
pub mod vector;

pub use matcher::{MatchOutcome, MatchPolicy, Matcher};
pub use mood::{MoodError, MoodQuadrant, MoodResolver};
pub use normalize::normalize;
pub use scoring::{additive_score, weighted_distance};
pub use threshold::adjust_threshold;
pub use vector::{FeatureVector, FeatureWeights, ScoringParams, FEATURE_COUNT};

use thiserror::Error;

/// Errors surfaced by the matching pipeline.
#[derive(Debug, Error)]
pub enum MatchError {
    /// No professional passed the selection policy for this user.
    #[error("no professionals match the user preferences and needs")]
    NoMatch,
    /// Normalization bounds are degenerate; the deployment is misconfigured.
    #[error("invalid normalization range: min {min} == max {max}")]
    InvalidRange { min: f64, max: f64 },
    /// The assessment failed boundary validation.
    #[error("invalid assessment: {0}")]
    InvalidAssessment(String),
}
