//! Card definitions: static per-card data.
//!
//! A `CardDefinition` holds what is true of a card for every player:
//! elixir cost, rarity, role and combat stats. Player-specific data
//! (level, evolution progress) lives in `CardAnalysis`.

use serde::{Deserialize, Serialize};

use super::rarity::Rarity;
use super::role::CardRole;
use super::stats::{CombatStats, Targets};

/// Static card definition.
///
/// ## Example
///
/// ```
/// use rust_deckforge::cards::{CardDefinition, CardRole, Rarity, Targets};
///
/// let musketeer = CardDefinition::new("Musketeer", 4, Rarity::Rare, CardRole::Support)
///     .with_stats(720, 181, 1.0, 6.0, Targets::AirAndGround)
///     .with_evolution(1);
///
/// assert!(musketeer.hits_air());
/// assert_eq!(musketeer.max_evolution_level, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    pub name: String,
    pub elixir: u8,
    pub rarity: Rarity,
    pub role: CardRole,

    /// Combat stats; spells have none.
    pub stats: Option<CombatStats>,

    /// Evolution levels the card supports (0 = cannot evolve).
    pub max_evolution_level: u8,
}

impl CardDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, elixir: u8, rarity: Rarity, role: CardRole) -> Self {
        Self {
            name: name.into(),
            elixir,
            rarity,
            role,
            stats: None,
            max_evolution_level: 0,
        }
    }

    /// Attach combat stats (builder pattern).
    #[must_use]
    pub fn with_stats(
        mut self,
        hitpoints: u32,
        damage_per_second: u32,
        hit_speed: f64,
        range: f64,
        targets: Targets,
    ) -> Self {
        self.stats = Some(CombatStats::new(hitpoints, damage_per_second, hit_speed, range, targets));
        self
    }

    /// Mark the card as evolvable up to `levels`.
    #[must_use]
    pub fn with_evolution(mut self, levels: u8) -> Self {
        self.max_evolution_level = levels;
        self
    }

    #[must_use]
    pub fn hits_air(&self) -> bool {
        self.stats.is_some_and(|s| s.targets.hits_air())
    }

    #[must_use]
    pub fn can_evolve(&self) -> bool {
        self.max_evolution_level > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let card = CardDefinition::new("Cannon", 3, Rarity::Common, CardRole::Building)
            .with_stats(824, 212, 0.9, 5.5, Targets::Ground);

        assert_eq!(card.name, "Cannon");
        assert!(!card.hits_air());
        assert!(!card.can_evolve());
        assert_eq!(card.stats.map(|s| s.hitpoints), Some(824));
    }

    #[test]
    fn test_spell_has_no_stats() {
        let zap = CardDefinition::new("Zap", 2, Rarity::Common, CardRole::SpellSmall);
        assert!(zap.stats.is_none());
        assert!(!zap.hits_air());
    }
}
