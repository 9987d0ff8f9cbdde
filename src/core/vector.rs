use crate::core::threshold::adjust_threshold;
use crate::core::{normalize, MatchError};
use crate::models::{
    Condition, ConditionNeeds, HistoricalAverages, MatchPreferences, ProfessionalRecord,
    ScreeningThresholds, SelfAssessment, SpecializationLevel, UserAssessment,
};

/// Number of dimensions in a feature vector.
///
/// Layout: normalized age, gender flag, availability flag, three
/// normalized screening totals, three specialization-need flags, in
/// `Condition::ALL` order.
pub const FEATURE_COUNT: usize = 9;

/// A fixed-order feature vector; user and candidate vectors share this
/// layout by construction.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Elementwise weights applied during distance scoring.
pub type FeatureWeights = [f64; FEATURE_COUNT];

const IDX_AGE: usize = 0;
const IDX_GENDER: usize = 1;
const IDX_AVAILABILITY: usize = 2;
const IDX_SCREENING: usize = 3;
const IDX_NEED: usize = 6;

/// Age assumed for candidates whose record omits one.
const DEFAULT_CANDIDATE_AGE: f64 = 18.0;

/// Scoring parameters for one deployment.
#[derive(Debug, Clone, Copy)]
pub struct ScoringParams {
    /// Normalization range for professional/preferred age.
    pub age_min: f64,
    pub age_max: f64,
    /// Normalization range shared by the three screening totals.
    pub screening_min: f64,
    pub screening_max: f64,
    /// Baseline thresholds fed into the dynamic adjustment.
    pub thresholds: ScreeningThresholds,
    /// Feature weights for distance scoring.
    pub weights: FeatureWeights,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            age_min: 18.0,
            age_max: 80.0,
            screening_min: 1.0,
            screening_max: 25.0,
            thresholds: ScreeningThresholds::default(),
            weights: [1.0; FEATURE_COUNT],
        }
    }
}

/// Interpretation label that means "no need" for a condition; any other
/// label flags the need.
fn no_need_label(condition: Condition) -> &'static str {
    match condition {
        Condition::Anxiety => "Minimal or no anxiety",
        Condition::Depression => "Minimal or no depression",
        Condition::Stress => "Low stress",
    }
}

/// Derive need flags from qualitative interpretation labels (rule-based
/// mode). A screening that carries only a raw total sets no flag here.
pub fn needs_from_interpretations(scores: &SelfAssessment) -> ConditionNeeds {
    let mut needs = ConditionNeeds::default();
    for condition in Condition::ALL {
        let needed = scores
            .value(condition)
            .interpretation()
            .map_or(false, |label| label != no_need_label(condition));
        needs.set(condition, needed);
    }
    needs
}

/// Derive need flags by comparing raw totals against dynamically adjusted
/// thresholds (score-based mode). Each condition uses its own baseline and
/// its own slice of the user's history.
pub fn needs_from_totals(
    scores: &SelfAssessment,
    history: &HistoricalAverages,
    thresholds: &ScreeningThresholds,
) -> ConditionNeeds {
    let mut needs = ConditionNeeds::default();
    for condition in Condition::ALL {
        let needed = scores.value(condition).total().map_or(false, |total| {
            let adjusted =
                adjust_threshold(total, history.get(condition), thresholds.get(condition));
            total > adjusted
        });
        needs.set(condition, needed);
    }
    needs
}

// The gender dimension encodes "is male" on both sides rather than
// agreement with the stated preference. The encoding is asymmetric for
// non-male preferences and is kept verbatim pending product sign-off.
fn gender_flag(gender: &str) -> f64 {
    if gender.eq_ignore_ascii_case("male") {
        1.0
    } else {
        0.0
    }
}

/// Build the user-side feature vector for score-based matching.
pub fn user_vector(
    assessment: &UserAssessment,
    history: &HistoricalAverages,
    params: &ScoringParams,
) -> Result<FeatureVector, MatchError> {
    let mut v = [0.0; FEATURE_COUNT];
    let prefs = &assessment.preferences;

    v[IDX_AGE] = normalize(
        Some(f64::from(prefs.preferred_age)),
        params.age_min,
        params.age_max,
    )?;
    v[IDX_GENDER] = gender_flag(&prefs.preferred_gender);
    // The user always wants their preferred slot covered.
    v[IDX_AVAILABILITY] = 1.0;

    let needs = needs_from_totals(&assessment.scores, history, &params.thresholds);
    for (i, condition) in Condition::ALL.iter().enumerate() {
        v[IDX_SCREENING + i] = normalize(
            assessment.scores.value(*condition).total(),
            params.screening_min,
            params.screening_max,
        )?;
        v[IDX_NEED + i] = if needs.get(*condition) { 1.0 } else { 0.0 };
    }

    Ok(v)
}

/// Build a candidate-side feature vector over the same layout.
///
/// Missing optional fields take documented defaults: age 18, gender empty
/// (flag 0), availability and specialization empty maps (flags 0).
pub fn professional_vector(
    record: &ProfessionalRecord,
    prefs: &MatchPreferences,
    params: &ScoringParams,
) -> Result<FeatureVector, MatchError> {
    let mut v = [0.0; FEATURE_COUNT];

    let age = record.age.map_or(DEFAULT_CANDIDATE_AGE, f64::from);
    v[IDX_AGE] = normalize(Some(age), params.age_min, params.age_max)?;
    v[IDX_GENDER] = gender_flag(record.gender.as_deref().unwrap_or(""));
    v[IDX_AVAILABILITY] = if record.available_in(&prefs.preferred_slot) {
        1.0
    } else {
        0.0
    };

    for (i, condition) in Condition::ALL.iter().enumerate() {
        v[IDX_SCREENING + i] = match record.specialization.get(condition.key()) {
            Some(SpecializationLevel::Score(score)) => {
                normalize(Some(*score), params.screening_min, params.screening_max)?
            }
            Some(SpecializationLevel::Flag(true)) => 1.0,
            Some(SpecializationLevel::Flag(false)) | None => 0.0,
        };
        v[IDX_NEED + i] = if record.specializes_in(*condition) {
            1.0
        } else {
            0.0
        };
    }

    Ok(v)
}
