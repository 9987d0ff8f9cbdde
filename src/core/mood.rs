use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the mood suggestion resolver.
#[derive(Debug, Error)]
pub enum MoodError {
    /// The mood label matched nothing in any quadrant or category.
    #[error("no suggestions found for mood '{0}'")]
    NoSuggestion(String),
}

/// One named grouping of moods and coping suggestions.
///
/// `suggestions` maps an individual mood straight to its suggestions;
/// `categories` lists the member moods of each broader category, and
/// `category_suggestions` the suggestions shared by that category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodQuadrant {
    pub name: String,
    #[serde(default)]
    pub suggestions: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub categories: HashMap<String, Vec<String>>,
    #[serde(rename = "categorySuggestions", default)]
    pub category_suggestions: HashMap<String, Vec<String>>,
}

/// Looks a mood label up across quadrants and returns one applicable
/// suggestion, chosen uniformly at random among everything that matched.
///
/// Independent of the matching pipeline; shares no state with it.
#[derive(Debug, Clone)]
pub struct MoodResolver {
    quadrants: Vec<MoodQuadrant>,
}

impl MoodResolver {
    /// Build a resolver over quadrants in their fixed priority order.
    pub fn new(quadrants: Vec<MoodQuadrant>) -> Self {
        Self { quadrants }
    }

    /// Resolve a mood with the thread-local RNG.
    ///
    /// The draw is intentionally non-deterministic so repeated lookups
    /// vary; use [`MoodResolver::resolve_with`] with a seeded RNG for
    /// reproducible results.
    pub fn resolve(&self, mood: &str) -> Result<String, MoodError> {
        self.resolve_with(mood, &mut rand::thread_rng())
    }

    /// Resolve a mood, drawing the suggestion from the supplied RNG.
    pub fn resolve_with<R: Rng + ?Sized>(
        &self,
        mood: &str,
        rng: &mut R,
    ) -> Result<String, MoodError> {
        let collected = self.collect_suggestions(mood);

        debug!(
            "collected {} suggestions for mood '{}' across {} quadrants",
            collected.len(),
            mood,
            self.quadrants.len()
        );

        collected
            .choose(rng)
            .cloned()
            .ok_or_else(|| MoodError::NoSuggestion(mood.to_string()))
    }

    /// Every suggestion applicable to the mood, scanning quadrants in
    /// priority order: direct mood mappings first, then any category whose
    /// member list contains the mood.
    fn collect_suggestions(&self, mood: &str) -> Vec<String> {
        let mut collected = Vec::new();

        for quadrant in &self.quadrants {
            if let Some(direct) = quadrant.suggestions.get(mood) {
                collected.extend(direct.iter().cloned());
            }

            for (category, members) in &quadrant.categories {
                if members.iter().any(|member| member == mood) {
                    if let Some(shared) = quadrant.category_suggestions.get(category) {
                        collected.extend(shared.iter().cloned());
                    }
                }
            }
        }

        collected
    }
}
