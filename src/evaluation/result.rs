//! Evaluation output.

use serde::{Deserialize, Serialize};

use crate::cards::CardCandidate;
use crate::core::{Archetype, Scoreable};
use crate::synergy::DeckSynergyAnalysis;

use super::archetype::ArchetypeDetection;
use super::rating::{CategoryScore, Rating};

/// Full evaluation of one deck. A plain value; nothing mutates it after
/// the evaluator returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// The resolved cards, in input order.
    pub cards: Vec<CardCandidate>,

    pub attack: CategoryScore,
    pub defense: CategoryScore,
    pub synergy: CategoryScore,
    pub versatility: CategoryScore,
    pub f2p_friendly: CategoryScore,
    pub playability: CategoryScore,

    pub archetype: ArchetypeDetection,
    pub synergy_report: DeckSynergyAnalysis,

    pub avg_elixir: f64,
    /// Weighted category mean in [0, 10].
    pub overall_score: f64,
    pub overall_rating: Rating,
}

impl EvaluationResult {
    /// Card names in deck order.
    #[must_use]
    pub fn deck(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[must_use]
    pub fn detected_archetype(&self) -> Archetype {
        self.archetype.primary
    }

    #[must_use]
    pub fn archetype_confidence(&self) -> f64 {
        self.archetype.confidence
    }

    /// Categories in weight order: attack, defense, synergy, versatility,
    /// f2p, playability.
    #[must_use]
    pub fn categories(&self) -> [(&'static str, &CategoryScore); 6] {
        [
            ("attack", &self.attack),
            ("defense", &self.defense),
            ("synergy", &self.synergy),
            ("versatility", &self.versatility),
            ("f2p_friendly", &self.f2p_friendly),
            ("playability", &self.playability),
        ]
    }
}

impl Scoreable for EvaluationResult {
    fn overall_score(&self) -> f64 {
        self.overall_score
    }
}
