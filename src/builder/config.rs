//! Single-deck builder configuration.

use serde::{Deserialize, Serialize};

use crate::cards::RoleTable;
use crate::core::Result;

use super::strategy::{Strategy, StrategyProfile};

/// Builder parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    pub strategy: Strategy,

    /// Cards placed before quota filling, in order.
    pub include: Vec<String>,

    /// Cards never selected. Wins over `include`.
    pub exclude: Vec<String>,

    /// Evolution slots handed out (default 2).
    pub evolution_slot_limit: usize,

    /// Weight of the synergy bonus; `None` disables it.
    pub synergy_weight: Option<f64>,

    /// Share of a card's base score taken from combat efficiency.
    pub combat_weight: f64,

    /// Role quotas replacing the strategy's own.
    pub quotas: Option<RoleTable<u8>>,

    /// Per-card elixir band replacing the strategy's own.
    pub target_elixir: Option<(f64, f64)>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Balanced,
            include: Vec::new(),
            exclude: Vec::new(),
            evolution_slot_limit: 2,
            synergy_weight: None,
            combat_weight: 0.25,
            quotas: None,
            target_elixir: None,
        }
    }
}

impl BuilderConfig {
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the strategy from its key, failing on unknown keys.
    pub fn with_strategy_key(self, key: &str) -> Result<Self> {
        Ok(self.with_strategy(key.parse()?))
    }

    #[must_use]
    pub fn with_include<I, S>(mut self, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include.extend(cards.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_exclude<I, S>(mut self, cards: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(cards.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_evolution_slots(mut self, limit: usize) -> Self {
        self.evolution_slot_limit = limit;
        self
    }

    /// Enable the synergy bonus (weight clamped to [0, 1]).
    #[must_use]
    pub fn with_synergy(mut self, weight: f64) -> Self {
        self.synergy_weight = Some(weight.clamp(0.0, 1.0));
        self
    }

    #[must_use]
    pub fn with_combat_weight(mut self, weight: f64) -> Self {
        self.combat_weight = weight.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn with_quotas(mut self, quotas: RoleTable<u8>) -> Self {
        self.quotas = Some(quotas);
        self
    }

    #[must_use]
    pub fn with_target_elixir(mut self, min: f64, max: f64) -> Self {
        self.target_elixir = Some((min.min(max), min.max(max)));
        self
    }

    /// The strategy profile with any overrides applied.
    #[must_use]
    pub fn profile(&self) -> StrategyProfile {
        let mut profile = self.strategy.profile();
        if let Some(quotas) = self.quotas {
            profile.quotas = quotas;
        }
        if let Some(band) = self.target_elixir {
            profile.target_elixir = band;
        }
        profile
    }
}
