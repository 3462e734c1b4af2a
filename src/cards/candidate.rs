//! Normalized per-card candidates used by scoring and building.

use serde::{Deserialize, Serialize};

use super::analysis::CardLevelData;
use super::catalog::{CardCatalog, DEFAULT_ELIXIR};
use super::definition::CardDefinition;
use super::rarity::Rarity;
use super::role::CardRole;
use super::stats::CombatStats;
use crate::core::MAX_CARD_LEVEL;

/// A card as seen by the scoring engine and the builders.
///
/// Built fresh from catalog data plus the player's level data; never
/// mutated once constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardCandidate {
    pub name: String,
    pub level: u8,
    pub max_level: u8,
    pub rarity: Rarity,
    pub elixir: u8,
    pub role: CardRole,
    pub stats: Option<CombatStats>,
    pub evolution_level: u8,
    pub max_evolution_level: u8,
    pub score_boost: f64,
}

impl CardCandidate {
    /// Combine a player's level data with catalog knowledge.
    ///
    /// Reported elixir and rarity win over the catalog; the role always
    /// comes from the catalog, or from elixir cost for unknown cards.
    #[must_use]
    pub fn from_level_data(name: &str, data: &CardLevelData, catalog: &CardCatalog) -> Self {
        let definition = catalog.get(name);
        let elixir = data
            .elixir
            .or_else(|| definition.map(|d| d.elixir))
            .unwrap_or(DEFAULT_ELIXIR);
        let max_evolution_level = if data.max_evolution_level > 0 {
            data.max_evolution_level
        } else {
            definition.map_or(0, |d| d.max_evolution_level)
        };

        Self {
            name: name.to_string(),
            level: data.level,
            max_level: data.max_level,
            rarity: data
                .rarity
                .or_else(|| definition.map(|d| d.rarity))
                .unwrap_or_default(),
            elixir,
            role: definition.map_or_else(|| CardRole::from_elixir(elixir), |d| d.role),
            stats: definition.and_then(|d| d.stats),
            evolution_level: data.evolution_level,
            max_evolution_level,
            score_boost: data.score_boost,
        }
    }

    /// A fully levelled copy of a catalog card.
    #[must_use]
    pub fn from_definition(definition: &CardDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            level: MAX_CARD_LEVEL,
            max_level: MAX_CARD_LEVEL,
            rarity: definition.rarity,
            elixir: definition.elixir,
            role: definition.role,
            stats: definition.stats,
            evolution_level: 0,
            max_evolution_level: definition.max_evolution_level,
            score_boost: 0.0,
        }
    }

    /// Resolve a bare name through the catalog, falling back to a neutral
    /// 4-elixir support card for unknown names.
    #[must_use]
    pub fn from_name(name: &str, catalog: &CardCatalog) -> Self {
        match catalog.get(name) {
            Some(definition) => Self::from_definition(definition),
            None => Self::from_level_data(name, &CardLevelData::new(MAX_CARD_LEVEL, MAX_CARD_LEVEL), catalog),
        }
    }

    /// Progress toward max level in [0, 1], blending in evolution progress
    /// when the card has one.
    #[must_use]
    pub fn level_ratio(&self) -> f64 {
        if self.max_level == 0 {
            return 0.0;
        }
        let ratio = (f64::from(self.level) / f64::from(self.max_level)).clamp(0.0, 1.0);
        if self.max_evolution_level > 0 && self.evolution_level > 0 {
            0.7 * ratio + 0.3 * self.evolution_ratio()
        } else {
            ratio
        }
    }

    /// Evolution progress in [0, 1].
    #[must_use]
    pub fn evolution_ratio(&self) -> f64 {
        if self.max_evolution_level == 0 {
            0.0
        } else {
            (f64::from(self.evolution_level) / f64::from(self.max_evolution_level)).min(1.0)
        }
    }

    #[must_use]
    pub fn is_evolved(&self) -> bool {
        self.evolution_level > 0
    }

    #[must_use]
    pub fn hits_air(&self) -> bool {
        self.stats.is_some_and(|s| s.targets.hits_air())
    }

    #[must_use]
    pub fn hits_ground(&self) -> bool {
        self.stats.is_some_and(|s| s.targets.hits_ground())
    }
}
