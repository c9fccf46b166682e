use thiserror::Error;

use crate::core::scoring::calculate_match_score;
use crate::models::{Dog, ScoredDog, ScoringWeights, UserPreferences};

/// Errors raised by the matching engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Ranks dogs against an adopter's preference profile
///
/// The matcher is a pure function of its inputs: it never filters by adoption
/// status, touches storage, or mutates the dogs it is given. Callers decide
/// which candidates to supply.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Match percentage (0-100) of a single dog
    pub fn score(&self, dog: &Dog, preferences: &UserPreferences) -> u8 {
        calculate_match_score(dog, preferences, &self.weights)
    }

    /// Score every candidate and order them by descending match percentage
    ///
    /// Dogs with equal scores keep their relative input order. An empty
    /// candidate list yields an empty ranking.
    ///
    /// # Errors
    /// `MatchError::InvalidInput` when no preference profile is supplied.
    /// Nothing is scored in that case.
    pub fn rank(
        &self,
        candidates: &[Dog],
        preferences: Option<&UserPreferences>,
    ) -> Result<Vec<ScoredDog>, MatchError> {
        let preferences = preferences.ok_or_else(|| {
            MatchError::InvalidInput("a preference profile is required to rank dogs".to_string())
        })?;

        let mut ranked: Vec<ScoredDog> = candidates
            .iter()
            .map(|dog| ScoredDog {
                dog: dog.clone(),
                match_percentage: self.score(dog, preferences),
            })
            .collect();

        // sort_by is stable, so ties keep candidate order
        ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));

        tracing::debug!(
            "Ranked {} dogs for user {} (top score: {:?})",
            ranked.len(),
            preferences.user_id,
            ranked.first().map(|s| s.match_percentage)
        );

        Ok(ranked)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
