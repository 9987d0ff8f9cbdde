// Model exports
pub mod domain;

pub use domain::{
    Condition, ConditionNeeds, HistoricalAverages, MatchPreferences, ProfessionalRecord,
    ScoredProfessional, ScreeningThresholds, ScreeningValue, SelfAssessment, SpecializationLevel,
    UserAssessment,
};
