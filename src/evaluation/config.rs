//! Scoring engine configuration.

use serde::{Deserialize, Serialize};

/// Relative weight of each category in the overall score.
///
/// Weights need not sum to 1; the overall score divides by their total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub attack: f64,
    pub defense: f64,
    pub synergy: f64,
    pub versatility: f64,
    pub f2p: f64,
    pub playability: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            attack: 0.20,
            defense: 0.20,
            synergy: 0.20,
            versatility: 0.15,
            f2p: 0.10,
            playability: 0.15,
        }
    }
}

impl CategoryWeights {
    /// Sum of the non-negative weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.as_array().iter().map(|w| w.max(0.0)).sum()
    }

    /// Weights in category order: attack, defense, synergy, versatility,
    /// f2p, playability.
    #[must_use]
    pub fn as_array(&self) -> [f64; 6] {
        [self.attack, self.defense, self.synergy, self.versatility, self.f2p, self.playability]
    }
}

/// Scoring engine parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: CategoryWeights,

    /// Share of attack and defense driven by combat stats (0 = roles only).
    pub combat_weight: f64,

    /// Pairwise synergy total that maps to a synergy score of 10.
    pub synergy_saturation: f64,

    /// Average elixir band with no playability penalty.
    pub elixir_sweet_spot: (f64, f64),

    /// Cards of one role allowed before playability is penalized.
    pub max_role_share: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: CategoryWeights::default(),
            combat_weight: 0.30,
            synergy_saturation: 6.0,
            elixir_sweet_spot: (2.8, 4.2),
            max_role_share: 4,
        }
    }
}

impl ScoringConfig {
    #[must_use]
    pub fn with_weights(mut self, weights: CategoryWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the combat-stat share, clamped to [0, 1].
    #[must_use]
    pub fn with_combat_weight(mut self, weight: f64) -> Self {
        self.combat_weight = weight.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_synergy_saturation(mut self, saturation: f64) -> Self {
        self.synergy_saturation = saturation;
        self
    }

    #[must_use]
    pub fn with_elixir_sweet_spot(mut self, min: f64, max: f64) -> Self {
        self.elixir_sweet_spot = (min.min(max), min.max(max));
        self
    }

    #[must_use]
    pub fn with_max_role_share(mut self, share: u8) -> Self {
        self.max_role_share = share;
        self
    }
}
