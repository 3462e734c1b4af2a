//! Single-deck builder output.

use serde::{Deserialize, Serialize};

use crate::cards::{CardRole, Rarity};
use crate::core::{Scoreable, DECK_SIZE};

use super::strategy::Strategy;

/// Per-card detail in a recommendation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDetail {
    pub name: String,
    pub level: u8,
    pub max_level: u8,
    pub rarity: Rarity,
    pub elixir: u8,
    pub role: CardRole,
    /// Contribution score at selection time, truncated to three decimals.
    pub score: f64,
    pub evolution_level: u8,
}

/// A built deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckRecommendation {
    pub strategy: Strategy,
    /// Card names in selection order.
    pub cards: Vec<String>,
    pub details: Vec<CardDetail>,
    /// Two decimals, truncated.
    pub avg_elixir: f64,
    /// Cards granted an evolution slot, in priority order.
    pub evolution_slots: Vec<String>,
    pub notes: Vec<String>,
}

impl DeckRecommendation {
    /// Sum of per-card contribution scores.
    #[must_use]
    pub fn total_score(&self) -> f64 {
        self.details.iter().map(|d| d.score).sum()
    }

    /// Case-insensitive membership test.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c.eq_ignore_ascii_case(name))
    }

    /// Exactly [`DECK_SIZE`] distinct names.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        if self.cards.len() != DECK_SIZE {
            return false;
        }
        let mut names: Vec<String> = self.cards.iter().map(|c| c.to_lowercase()).collect();
        names.sort_unstable();
        names.dedup();
        names.len() == DECK_SIZE
    }

    #[must_use]
    pub fn count_role(&self, role: CardRole) -> usize {
        self.details.iter().filter(|d| d.role == role).count()
    }
}

impl Scoreable for DeckRecommendation {
    fn overall_score(&self) -> f64 {
        self.total_score()
    }
}
