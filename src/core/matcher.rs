use crate::core::scoring::{additive_score, weighted_distance};
use crate::core::vector::{
    needs_from_interpretations, professional_vector, user_vector, ScoringParams,
};
use crate::core::MatchError;
use crate::models::{HistoricalAverages, ProfessionalRecord, ScoredProfessional, UserAssessment};
use tracing::{debug, warn};
use validator::Validate;

/// Number of nearest neighbors returned when the caller does not say.
pub const DEFAULT_K: usize = 5;

/// Ranking policy for one deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Rule-based point scoring; every positive-score candidate is
    /// returned, best first.
    Additive,
    /// Weighted-distance k-nearest-neighbor selection; the k closest
    /// candidates are returned, nearest first.
    Nearest { k: usize },
}

/// Result of the matching process.
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<ScoredProfessional>,
    pub total_candidates: usize,
}

/// Main matching orchestrator.
///
/// Stateless across requests: candidates and history arrive as in-memory
/// collections from the caller, and every invocation builds its own
/// vectors and thresholds.
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: MatchPolicy,
    params: ScoringParams,
}

impl Matcher {
    pub fn new(policy: MatchPolicy, params: ScoringParams) -> Self {
        Self { policy, params }
    }

    /// Rule-based matcher with default parameters.
    pub fn additive() -> Self {
        Self::new(MatchPolicy::Additive, ScoringParams::default())
    }

    /// k-nearest-neighbor matcher with default parameters.
    pub fn nearest(k: usize) -> Self {
        Self::new(MatchPolicy::Nearest { k }, ScoringParams::default())
    }

    /// Match professionals to one user's assessment.
    ///
    /// `history` is the user's per-condition screening averages; `None`
    /// means no prior records and is treated as all zeros. Candidates with
    /// a blank id are skipped with a warning rather than aborting the
    /// batch; all other optional fields take documented defaults.
    ///
    /// # Errors
    /// `MatchError::NoMatch` when no candidate passes the selection
    /// policy (including when zero candidates are supplied),
    /// `MatchError::InvalidAssessment` when boundary validation fails, and
    /// `MatchError::InvalidRange` for misconfigured normalization bounds.
    pub fn match_professionals(
        &self,
        assessment: &UserAssessment,
        candidates: &[ProfessionalRecord],
        history: Option<&HistoricalAverages>,
    ) -> Result<MatchOutcome, MatchError> {
        assessment
            .validate()
            .map_err(|e| MatchError::InvalidAssessment(e.to_string()))?;

        let history = history.copied().unwrap_or_default();
        let total_candidates = candidates.len();

        let matches = match self.policy {
            MatchPolicy::Additive => self.rank_additive(assessment, candidates),
            MatchPolicy::Nearest { k } => self.rank_nearest(assessment, candidates, &history, k)?,
        };

        debug!(
            "matched {} of {} candidates for user {:?}",
            matches.len(),
            total_candidates,
            assessment.user_id
        );

        if matches.is_empty() {
            return Err(MatchError::NoMatch);
        }

        Ok(MatchOutcome {
            matches,
            total_candidates,
        })
    }

    fn rank_additive(
        &self,
        assessment: &UserAssessment,
        candidates: &[ProfessionalRecord],
    ) -> Vec<ScoredProfessional> {
        let needs = needs_from_interpretations(&assessment.scores);
        let prefs = &assessment.preferences;

        let scored = candidates
            .iter()
            .filter(|record| keep_candidate(record))
            .map(|record| {
                let score = additive_score(record, prefs, &needs);
                scored_professional(record, score)
            })
            .collect();

        select_positive(scored)
    }

    fn rank_nearest(
        &self,
        assessment: &UserAssessment,
        candidates: &[ProfessionalRecord],
        history: &HistoricalAverages,
        k: usize,
    ) -> Result<Vec<ScoredProfessional>, MatchError> {
        let user = user_vector(assessment, history, &self.params)?;
        let prefs = &assessment.preferences;

        let mut scored = Vec::with_capacity(candidates.len());
        for record in candidates.iter().filter(|record| keep_candidate(record)) {
            let candidate = professional_vector(record, prefs, &self.params)?;
            let distance = weighted_distance(&user, &candidate, &self.params.weights);
            scored.push(scored_professional(record, distance));
        }

        Ok(select_nearest(scored, k))
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::additive()
    }
}

/// Structurally required fields only: a record without an id cannot be
/// reported back, so it is skipped and the batch continues.
fn keep_candidate(record: &ProfessionalRecord) -> bool {
    if record.id.trim().is_empty() {
        warn!("skipping professional record with blank id");
        return false;
    }
    true
}

fn scored_professional(record: &ProfessionalRecord, score: f64) -> ScoredProfessional {
    ScoredProfessional {
        id: record.id.clone(),
        name: record.display_name(),
        match_score: score,
        age: record.age,
        gender: record.gender.clone(),
        rating: record.rating,
        profile_image: record.profile_image.clone(),
    }
}

/// Additive selection: positive scores only, best first. The sort is
/// stable, so tied candidates keep their original iteration order.
fn select_positive(mut scored: Vec<ScoredProfessional>) -> Vec<ScoredProfessional> {
    scored.retain(|m| m.match_score > 0.0);
    scored.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}

/// Nearest selection: the k smallest distances, nearest first. Asking for
/// more than exist returns everything; ties keep iteration order.
fn select_nearest(mut scored: Vec<ScoredProfessional>, k: usize) -> Vec<ScoredProfessional> {
    scored.sort_by(|a, b| {
        a.match_score
            .partial_cmp(&b.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(k);
    scored
}
