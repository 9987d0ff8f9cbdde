use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// The three screened conditions a professional can specialize in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Anxiety,
    Depression,
    Stress,
}

impl Condition {
    /// Fixed condition order; feature vectors and need flags follow it.
    pub const ALL: [Condition; 3] = [Condition::Anxiety, Condition::Depression, Condition::Stress];

    /// Key used in professional specialization maps.
    pub fn key(&self) -> &'static str {
        match self {
            Condition::Anxiety => "anxiety",
            Condition::Depression => "depression",
            Condition::Stress => "stress",
        }
    }
}

/// A self-assessment result for one condition.
///
/// Screenings arrive either as a raw numeric total (score-based
/// deployments) or as a categorical interpretation label (rule-based
/// deployments), so both shapes deserialize from the same field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScreeningValue {
    Total(f64),
    Interpretation(String),
}

impl ScreeningValue {
    /// Raw numeric total, if this result carries one.
    pub fn total(&self) -> Option<f64> {
        match self {
            ScreeningValue::Total(t) => Some(*t),
            ScreeningValue::Interpretation(_) => None,
        }
    }

    /// Interpretation label, if this result carries one.
    pub fn interpretation(&self) -> Option<&str> {
        match self {
            ScreeningValue::Total(_) => None,
            ScreeningValue::Interpretation(label) => Some(label.as_str()),
        }
    }
}

/// Self-assessment screening results (GAD-7, PHQ-9, PSS).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfAssessment {
    pub gad7: ScreeningValue,
    pub phq9: ScreeningValue,
    pub pss: ScreeningValue,
}

impl SelfAssessment {
    /// Screening result for the given condition.
    pub fn value(&self, condition: Condition) -> &ScreeningValue {
        match condition {
            Condition::Anxiety => &self.gad7,
            Condition::Depression => &self.phq9,
            Condition::Stress => &self.pss,
        }
    }
}

/// User preferences for the professional being matched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchPreferences {
    #[serde(rename = "preferredProfAge")]
    #[validate(range(min = 18, max = 80))]
    pub preferred_age: u8,
    #[serde(rename = "preferredProfGender")]
    #[validate(length(min = 1))]
    pub preferred_gender: String,
    #[serde(rename = "preferredProfAvailability")]
    #[validate(length(min = 1))]
    pub preferred_slot: String,
}

/// One user's matching input: preferences plus screening results.
///
/// Immutable for the duration of a request. The optional `user_id` keys
/// the caller's history lookup; the engine itself never resolves it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserAssessment {
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
    #[validate(nested)]
    pub preferences: MatchPreferences,
    #[serde(rename = "selfAssessmentScores")]
    pub scores: SelfAssessment,
}

/// Rolling per-condition means of a user's prior screening totals.
///
/// Supplied by the caller's history provider. `Default` is all zeros,
/// meaning no adjustment signal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HistoricalAverages {
    #[serde(default)]
    pub anxiety: f64,
    #[serde(default)]
    pub depression: f64,
    #[serde(default)]
    pub stress: f64,
}

impl HistoricalAverages {
    pub fn get(&self, condition: Condition) -> f64 {
        match condition {
            Condition::Anxiety => self.anxiety,
            Condition::Depression => self.depression,
            Condition::Stress => self.stress,
        }
    }
}

/// A professional's declared level for one specialization.
///
/// Directory documents store either a plain flag or a numeric
/// self-assessment-style score, so both deserialize here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecializationLevel {
    Flag(bool),
    Score(f64),
}

impl SpecializationLevel {
    /// Whether this level counts as an active specialization.
    pub fn is_set(&self) -> bool {
        match self {
            SpecializationLevel::Flag(flag) => *flag,
            SpecializationLevel::Score(score) => *score > 0.0,
        }
    }
}

/// A professional's directory record, read-only for one request.
///
/// Optional fields default at deserialization: age is absent rather than
/// guessed, gender defaults to none, availability and specialization to
/// empty maps, rating to 0. Only the id is structurally required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfessionalRecord {
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "middleName", default)]
    pub middle_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub availability: HashMap<String, bool>,
    #[serde(default)]
    pub specialization: HashMap<String, SpecializationLevel>,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "profileImage", default)]
    pub profile_image: Option<String>,
}

impl ProfessionalRecord {
    /// Display name composed from the name parts, "Unknown" if all blank.
    pub fn display_name(&self) -> String {
        let mut name = String::new();
        for part in [&self.first_name, &self.middle_name, &self.last_name] {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if !name.is_empty() {
                name.push(' ');
            }
            name.push_str(part);
        }
        if name.is_empty() {
            "Unknown".to_string()
        } else {
            name
        }
    }

    /// Whether the record declares an active specialization for a condition.
    pub fn specializes_in(&self, condition: Condition) -> bool {
        self.specialization
            .get(condition.key())
            .map_or(false, SpecializationLevel::is_set)
    }

    /// Whether the professional is available in the given slot.
    pub fn available_in(&self, slot: &str) -> bool {
        self.availability.get(slot).copied().unwrap_or(false)
    }
}

/// One ranked match in a response.
///
/// `match_score` holds additive points in rule-based deployments and a
/// weighted distance in nearest-neighbor deployments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProfessional {
    pub id: String,
    pub name: String,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub rating: f64,
    #[serde(rename = "profileImage")]
    pub profile_image: Option<String>,
}

/// Per-condition need flags derived from a user's screening results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionNeeds {
    pub anxiety: bool,
    pub depression: bool,
    pub stress: bool,
}

impl ConditionNeeds {
    pub fn get(&self, condition: Condition) -> bool {
        match condition {
            Condition::Anxiety => self.anxiety,
            Condition::Depression => self.depression,
            Condition::Stress => self.stress,
        }
    }

    pub fn set(&mut self, condition: Condition, needed: bool) {
        match condition {
            Condition::Anxiety => self.anxiety = needed,
            Condition::Depression => self.depression = needed,
            Condition::Stress => self.stress = needed,
        }
    }
}

/// Baseline clinical-score thresholds, one per condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreeningThresholds {
    #[serde(default = "default_anxiety_threshold")]
    pub anxiety: f64,
    #[serde(default = "default_depression_threshold")]
    pub depression: f64,
    #[serde(default = "default_stress_threshold")]
    pub stress: f64,
}

impl Default for ScreeningThresholds {
    fn default() -> Self {
        Self {
            anxiety: default_anxiety_threshold(),
            depression: default_depression_threshold(),
            stress: default_stress_threshold(),
        }
    }
}

fn default_anxiety_threshold() -> f64 {
    10.0
}
fn default_depression_threshold() -> f64 {
    10.0
}
fn default_stress_threshold() -> f64 {
    20.0
}

impl ScreeningThresholds {
    pub fn get(&self, condition: Condition) -> f64 {
        match condition {
            Condition::Anxiety => self.anxiety,
            Condition::Depression => self.depression,
            Condition::Stress => self.stress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_record(id: &str) -> ProfessionalRecord {
        ProfessionalRecord {
            id: id.to_string(),
            first_name: String::new(),
            middle_name: String::new(),
            last_name: String::new(),
            age: None,
            gender: None,
            availability: HashMap::new(),
            specialization: HashMap::new(),
            rating: 0.0,
            profile_image: None,
        }
    }

    #[test]
    fn test_display_name_full() {
        let mut record = bare_record("p1");
        record.first_name = "Ana".to_string();
        record.middle_name = "Reyes".to_string();
        record.last_name = "Cruz".to_string();

        assert_eq!(record.display_name(), "Ana Reyes Cruz");
    }

    #[test]
    fn test_display_name_skips_blank_middle() {
        let mut record = bare_record("p1");
        record.first_name = "Ana".to_string();
        record.middle_name = "  ".to_string();
        record.last_name = "Cruz".to_string();

        assert_eq!(record.display_name(), "Ana Cruz");
    }

    #[test]
    fn test_display_name_all_blank_falls_back() {
        assert_eq!(bare_record("p1").display_name(), "Unknown");
    }

    #[test]
    fn test_sparse_record_deserializes_with_defaults() {
        let record: ProfessionalRecord =
            serde_json::from_str(r#"{"id": "p9", "firstName": "Leo"}"#).unwrap();

        assert_eq!(record.id, "p9");
        assert_eq!(record.age, None);
        assert_eq!(record.gender, None);
        assert!(record.availability.is_empty());
        assert!(record.specialization.is_empty());
        assert_eq!(record.rating, 0.0);
    }

    #[test]
    fn test_specialization_level_untagged() {
        let record: ProfessionalRecord = serde_json::from_str(
            r#"{"id": "p2", "specialization": {"anxiety": true, "stress": 14.0}}"#,
        )
        .unwrap();

        assert!(record.specializes_in(Condition::Anxiety));
        assert!(record.specializes_in(Condition::Stress));
        assert!(!record.specializes_in(Condition::Depression));
    }

    #[test]
    fn test_screening_value_untagged() {
        let assessment: SelfAssessment = serde_json::from_str(
            r#"{"gad7": 12.0, "phq9": "Minimal or no depression", "pss": 21.0}"#,
        )
        .unwrap();

        assert_eq!(assessment.gad7.total(), Some(12.0));
        assert_eq!(
            assessment.phq9.interpretation(),
            Some("Minimal or no depression")
        );
        assert_eq!(assessment.value(Condition::Stress).total(), Some(21.0));
    }

    #[test]
    fn test_preferences_validation() {
        let prefs = MatchPreferences {
            preferred_age: 30,
            preferred_gender: "female".to_string(),
            preferred_slot: "morning".to_string(),
        };
        assert!(prefs.validate().is_ok());

        let empty_gender = MatchPreferences {
            preferred_gender: String::new(),
            ..prefs
        };
        assert!(empty_gender.validate().is_err());
    }
}
