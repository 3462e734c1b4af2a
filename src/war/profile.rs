//! Archetype-constrained deck building.
//!
//! Each [`ArchetypeProfile`] steers the single-deck builder toward one
//! archetype: preferred cards get a score boost, off-archetype cards are
//! excluded, and the strategy's elixir band is replaced by the
//! archetype's. Small collections retry with only the strongly
//! incompatible cards excluded.

use tracing::debug;

use crate::builder::{BuilderConfig, DeckBuilder, DeckRecommendation, Strategy};
use crate::cards::{CardAnalysis, CardCatalog, CardRole};
use crate::core::{Archetype, DeckError, Result};
use crate::synergy::SynergyDatabase;

/// Score boost applied to an archetype's preferred cards.
pub const PREFERRED_BOOST: f64 = 0.2;

/// Average-elixir slack before a deck is flagged as off-archetype.
pub const ELIXIR_TOLERANCE: f64 = 0.3;

/// Build constraints for one archetype.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchetypeProfile {
    pub archetype: Archetype,
    pub strategy: Strategy,
    /// Target average elixir.
    pub elixir: (f64, f64),
    /// Minimum role counts a matching deck holds.
    pub required_roles: &'static [(CardRole, usize)],
    pub preferred: &'static [&'static str],
    pub excluded: &'static [&'static str],
    /// Exclusions kept on the relaxed retry.
    pub incompatible: &'static [&'static str],
}

static PROFILES: [ArchetypeProfile; 7] = [
    ArchetypeProfile {
        archetype: Archetype::Beatdown,
        strategy: Strategy::Aggro,
        elixir: (4.0, 5.5),
        required_roles: &[(CardRole::WinCondition, 1), (CardRole::Support, 2)],
        preferred: &[
            "Golem", "Giant", "Lava Hound", "Electro Giant", "Baby Dragon", "Night Witch",
            "Mega Minion", "Lumberjack", "Lightning", "Tornado", "Arrows",
        ],
        excluded: &["X-Bow", "Mortar", "Hog Rider", "Miner", "Goblin Barrel"],
        incompatible: &["X-Bow", "Mortar"],
    },
    ArchetypeProfile {
        archetype: Archetype::Control,
        strategy: Strategy::Control,
        elixir: (3.5, 4.5),
        required_roles: &[(CardRole::Building, 1), (CardRole::SpellBig, 1), (CardRole::SpellSmall, 1)],
        preferred: &[
            "Inferno Tower", "Cannon", "Bomb Tower", "Tesla", "Valkyrie", "Wizard", "Musketeer",
            "Archers", "Fireball", "Poison", "The Log", "Arrows",
        ],
        excluded: &["Golem", "Giant", "Lava Hound"],
        incompatible: &[],
    },
    ArchetypeProfile {
        archetype: Archetype::Cycle,
        strategy: Strategy::Cycle,
        elixir: (2.5, 3.5),
        required_roles: &[(CardRole::WinCondition, 1), (CardRole::Cycle, 3), (CardRole::SpellSmall, 1)],
        preferred: &[
            "Hog Rider", "Miner", "Skeletons", "Ice Spirit", "Ice Golem", "Cannon", "Musketeer",
            "The Log", "Fireball", "Electro Spirit", "Bats",
        ],
        excluded: &["Golem", "Lava Hound", "Giant", "Electro Giant", "P.E.K.K.A", "Mega Knight"],
        incompatible: &["Golem", "Lava Hound", "Electro Giant"],
    },
    ArchetypeProfile {
        archetype: Archetype::Siege,
        strategy: Strategy::Control,
        elixir: (3.0, 4.0),
        required_roles: &[(CardRole::WinCondition, 1), (CardRole::Building, 1), (CardRole::Cycle, 2)],
        preferred: &[
            "X-Bow", "Mortar", "Tesla", "Cannon", "Archers", "Skeletons", "Ice Spirit", "Knight",
            "Fireball", "The Log", "Rocket",
        ],
        excluded: &["Golem", "Giant", "Lava Hound", "Hog Rider", "Mega Knight", "P.E.K.K.A"],
        incompatible: &["Golem", "Giant", "Lava Hound", "Mega Knight"],
    },
    ArchetypeProfile {
        archetype: Archetype::BridgeSpam,
        strategy: Strategy::Aggro,
        elixir: (3.0, 4.0),
        required_roles: &[(CardRole::WinCondition, 1), (CardRole::Support, 2)],
        preferred: &[
            "Battle Ram", "Hog Rider", "Bandit", "Royal Ghost", "Electro Wizard", "Magic Archer",
            "Dark Prince", "Poison", "Fireball", "Zap", "The Log",
        ],
        excluded: &["Golem", "Lava Hound", "Giant", "X-Bow", "Mortar"],
        incompatible: &[],
    },
    ArchetypeProfile {
        archetype: Archetype::Bait,
        strategy: Strategy::Spell,
        elixir: (2.8, 3.8),
        required_roles: &[(CardRole::WinCondition, 1), (CardRole::SpellSmall, 1)],
        preferred: &[
            "Goblin Barrel", "Princess", "Goblin Gang", "Skeleton Army", "Rocket", "The Log", "Zap",
            "Arrows", "Knight", "Ice Spirit", "Inferno Tower",
        ],
        excluded: &["Golem", "Giant", "Lava Hound", "X-Bow", "Mortar"],
        incompatible: &[],
    },
    ArchetypeProfile {
        archetype: Archetype::Hybrid,
        strategy: Strategy::Balanced,
        elixir: (3.0, 4.0),
        required_roles: &[(CardRole::WinCondition, 1), (CardRole::SpellBig, 1), (CardRole::SpellSmall, 1)],
        preferred: &[
            "Hog Rider", "Royal Giant", "Royal Hogs", "Valkyrie", "Musketeer", "Mega Minion",
            "Knight", "Archers", "Fireball", "Zap", "The Log", "Arrows",
        ],
        excluded: &[],
        incompatible: &[],
    },
];

impl ArchetypeProfile {
    /// The profile for `archetype`.
    #[must_use]
    pub fn of(archetype: Archetype) -> &'static ArchetypeProfile {
        &PROFILES[archetype.ordinal()]
    }

    #[must_use]
    pub fn all() -> &'static [ArchetypeProfile] {
        &PROFILES
    }

    #[must_use]
    pub fn is_preferred(&self, name: &str) -> bool {
        self.preferred.iter().any(|p| p.eq_ignore_ascii_case(name.trim()))
    }

    /// Average elixir inside the band widened by [`ELIXIR_TOLERANCE`], and
    /// every required role present.
    #[must_use]
    pub fn matches(&self, deck: &DeckRecommendation) -> bool {
        let (min, max) = self.elixir;
        let elixir_ok = deck.avg_elixir >= min - ELIXIR_TOLERANCE && deck.avg_elixir <= max + ELIXIR_TOLERANCE;
        elixir_ok
            && self
                .required_roles
                .iter()
                .all(|&(role, count)| deck.count_role(role) >= count)
    }
}

/// Builds decks for archetypes on top of [`DeckBuilder`].
#[derive(Clone, Debug)]
pub struct ArchetypeDeckBuilder<'a> {
    base: BuilderConfig,
    catalog: &'a CardCatalog,
    synergy: &'a SynergyDatabase,
}

impl Default for ArchetypeDeckBuilder<'static> {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl ArchetypeDeckBuilder<'static> {
    /// Uses the built-in catalog and synergy table. Strategy, elixir band
    /// and exclusions in `base` are replaced per archetype; the rest
    /// (evolution slots, synergy and combat weights, includes) carries over.
    #[must_use]
    pub fn new(base: BuilderConfig) -> Self {
        Self::with_data(base, CardCatalog::builtin(), SynergyDatabase::builtin())
    }
}

impl<'a> ArchetypeDeckBuilder<'a> {
    #[must_use]
    pub fn with_data(base: BuilderConfig, catalog: &'a CardCatalog, synergy: &'a SynergyDatabase) -> Self {
        Self {
            base,
            catalog,
            synergy,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &'a CardCatalog {
        self.catalog
    }

    #[must_use]
    pub fn synergy(&self) -> &'a SynergyDatabase {
        self.synergy
    }

    /// Build a deck for `archetype` from the cards in `analysis`.
    pub fn build(&self, archetype: Archetype, analysis: &CardAnalysis) -> Result<DeckRecommendation> {
        let profile = ArchetypeProfile::of(archetype);
        let boosted = analysis.boosted(profile.preferred, PREFERRED_BOOST);

        let mut deck = match self.build_excluding(profile, &boosted, profile.excluded) {
            Err(DeckError::InsufficientCards { available, .. }) => {
                debug!(%archetype, available, "retrying with relaxed exclusions");
                self.build_excluding(profile, &boosted, profile.incompatible)?
            }
            other => other?,
        };

        let (min, max) = profile.elixir;
        if deck.avg_elixir < min {
            deck.notes
                .push(format!("Low elixir for {archetype} (target: {min:.1}-{max:.1})"));
        } else if deck.avg_elixir > max {
            deck.notes
                .push(format!("High elixir for {archetype} (target: {min:.1}-{max:.1})"));
        }
        if !profile.preferred.is_empty() {
            let shown: Vec<&str> = profile.preferred.iter().take(3).copied().collect();
            deck.notes
                .push(format!("Preferred for {archetype}: {}", shown.join(", ")));
        }
        if !profile.matches(&deck) {
            deck.notes.push(format!(
                "Limited collection - deck may not perfectly match {archetype} archetype"
            ));
        }
        Ok(deck)
    }

    fn build_excluding(
        &self,
        profile: &ArchetypeProfile,
        analysis: &CardAnalysis,
        excluded: &[&str],
    ) -> Result<DeckRecommendation> {
        let config = self
            .base
            .clone()
            .with_strategy(profile.strategy)
            .with_target_elixir(profile.elixir.0, profile.elixir.1)
            .with_exclude(excluded.iter().copied());
        DeckBuilder::with_data(config, self.catalog, self.synergy).build(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardLevelData;

    fn analysis(names: &[&str]) -> CardAnalysis {
        let mut analysis = CardAnalysis::new();
        for name in names {
            analysis.insert(*name, CardLevelData::new(14, 16));
        }
        analysis
    }

    #[test]
    fn test_profiles_in_ordinal_order() {
        for archetype in Archetype::ALL {
            assert_eq!(ArchetypeProfile::of(archetype).archetype, archetype);
        }
    }

    #[test]
    fn test_profile_cards_are_catalogued() {
        let catalog = CardCatalog::builtin();
        for profile in ArchetypeProfile::all() {
            for name in profile.preferred.iter().chain(profile.excluded).chain(profile.incompatible) {
                assert!(catalog.contains(name), "{}: {name}", profile.archetype);
            }
            for name in profile.incompatible {
                assert!(profile.excluded.contains(name), "{}: {name}", profile.archetype);
            }
        }
    }

    #[test]
    fn test_excluded_cards_never_selected() {
        let cards = analysis(&[
            "Golem", "Hog Rider", "Giant", "Baby Dragon", "Night Witch", "Mega Minion", "Lumberjack",
            "Lightning", "Tornado", "Arrows", "Musketeer", "Valkyrie", "Knight", "Skeletons",
        ]);
        let deck = ArchetypeDeckBuilder::default().build(Archetype::Cycle, &cards).unwrap();
        assert!(!deck.contains("Golem"));
        assert!(!deck.contains("Giant"));
        assert!(deck.contains("Hog Rider"));
    }

    #[test]
    fn test_relaxed_retry_on_small_collection() {
        let cards = analysis(&[
            "Giant", "Hog Rider", "Musketeer", "Valkyrie", "Knight", "Skeletons", "Fireball", "Zap",
        ]);
        let deck = ArchetypeDeckBuilder::default().build(Archetype::Cycle, &cards).unwrap();
        assert!(deck.contains("Giant"));
        assert!(deck.is_complete());
    }

    #[test]
    fn test_retry_still_fails_without_enough_cards() {
        let cards = analysis(&["Golem", "Hog Rider", "Musketeer", "Valkyrie", "Knight", "Skeletons", "Zap", "Arrows"]);
        let err = ArchetypeDeckBuilder::default().build(Archetype::Cycle, &cards).unwrap_err();
        assert!(matches!(err, DeckError::InsufficientCards { available: 7, .. }));
    }

    #[test]
    fn test_preferred_note() {
        let cards = analysis(&[
            "Golem", "Baby Dragon", "Night Witch", "Mega Minion", "Lumberjack", "Lightning", "Tornado",
            "Arrows", "Valkyrie", "Knight",
        ]);
        let deck = ArchetypeDeckBuilder::default().build(Archetype::Beatdown, &cards).unwrap();
        assert!(deck.contains("Golem"));
        assert!(deck
            .notes
            .iter()
            .any(|n| n == "Preferred for beatdown: Golem, Giant, Lava Hound"));
    }
}
