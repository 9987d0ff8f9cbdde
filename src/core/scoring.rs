use crate::core::vector::{FeatureVector, FeatureWeights};
use crate::models::{Condition, ConditionNeeds, MatchPreferences, ProfessionalRecord};

/// Points for a candidate age within ±5 of the preferred age.
const AGE_CLOSE_POINTS: f64 = 5.0;
/// Points for a candidate age within ±10 of the preferred age.
const AGE_NEAR_POINTS: f64 = 2.0;
/// Points for a case-insensitive gender match.
const GENDER_POINTS: f64 = 3.0;
/// Points when the preferred slot is available.
const AVAILABILITY_POINTS: f64 = 3.0;
/// Points per flagged need the candidate specializes in.
const SPECIALIZATION_POINTS: f64 = 4.0;

/// Rule-based additive match score; higher is better.
///
/// The total is the sum of five independent contributions: age proximity,
/// gender match, availability, and up to three specialization matches. A
/// candidate with no age on record earns no age points.
pub fn additive_score(
    record: &ProfessionalRecord,
    prefs: &MatchPreferences,
    needs: &ConditionNeeds,
) -> f64 {
    let mut score = 0.0;

    if let Some(age) = record.age {
        let diff = (i32::from(age) - i32::from(prefs.preferred_age)).abs();
        if diff <= 5 {
            score += AGE_CLOSE_POINTS;
        } else if diff <= 10 {
            score += AGE_NEAR_POINTS;
        }
    }

    if record
        .gender
        .as_deref()
        .map_or(false, |g| g.eq_ignore_ascii_case(&prefs.preferred_gender))
    {
        score += GENDER_POINTS;
    }

    if record.available_in(&prefs.preferred_slot) {
        score += AVAILABILITY_POINTS;
    }

    for condition in Condition::ALL {
        if needs.get(condition) && record.specializes_in(condition) {
            score += SPECIALIZATION_POINTS;
        }
    }

    score
}

/// Weighted Euclidean distance between two feature vectors; lower is
/// better. Vectors share a fixed layout, so the sum is elementwise.
#[inline]
pub fn weighted_distance(
    user: &FeatureVector,
    candidate: &FeatureVector,
    weights: &FeatureWeights,
) -> f64 {
    user.iter()
        .zip(candidate.iter())
        .zip(weights.iter())
        .map(|((u, c), w)| ((u - c) * w).powi(2))
        .sum::<f64>()
        .sqrt()
}
