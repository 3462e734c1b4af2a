//! War-deck search configuration.

use serde::{Deserialize, Serialize};

use crate::evaluation::ScoringConfig;

/// How a built deck is scored during the search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckScoreSource {
    /// Sum of the builder's per-card contribution scores.
    #[default]
    CardContribution,
    /// Overall score from the deck scoring engine.
    Evaluation,
}

/// War-deck search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarDeckConfig {
    pub score_source: DeckScoreSource,

    /// Totals closer than this are tied and fall back to the minimum
    /// per-deck score (default: 1e-4).
    pub tie_tolerance: f64,

    /// Reuse decks built for the same archetype and used-card set.
    pub memoize: bool,

    /// Scoring parameters for `DeckScoreSource::Evaluation`.
    pub scoring: ScoringConfig,
}

impl Default for WarDeckConfig {
    fn default() -> Self {
        Self {
            score_source: DeckScoreSource::CardContribution,
            tie_tolerance: 1e-4,
            memoize: true,
            scoring: ScoringConfig::default(),
        }
    }
}

impl WarDeckConfig {
    pub fn with_score_source(mut self, source: DeckScoreSource) -> Self {
        self.score_source = source;
        self
    }

    pub fn with_tie_tolerance(mut self, tolerance: f64) -> Self {
        self.tie_tolerance = tolerance.abs();
        self
    }

    pub fn with_memoize(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = WarDeckConfig::default();
        assert_eq!(config.score_source, DeckScoreSource::CardContribution);
        assert!((config.tie_tolerance - 1e-4).abs() < f64::EPSILON);
        assert!(config.memoize);
    }

    #[test]
    fn test_config_builder() {
        let config = WarDeckConfig::default()
            .with_score_source(DeckScoreSource::Evaluation)
            .with_tie_tolerance(-0.01)
            .with_memoize(false);
        assert_eq!(config.score_source, DeckScoreSource::Evaluation);
        assert_eq!(config.tie_tolerance, 0.01);
        assert!(!config.memoize);
    }

    #[test]
    fn test_config_serialization() {
        let config = WarDeckConfig::default().with_score_source(DeckScoreSource::Evaluation);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"evaluation\""));
        let deserialized: WarDeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
