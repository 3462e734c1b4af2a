//! Deck-building strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{CardRole, RoleTable};
use crate::core::DeckError;

/// A named building strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Balanced,
    Aggro,
    Control,
    Cycle,
    Splash,
    Spell,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Balanced,
        Strategy::Aggro,
        Strategy::Control,
        Strategy::Cycle,
        Strategy::Splash,
        Strategy::Spell,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::Aggro => "aggro",
            Strategy::Control => "control",
            Strategy::Cycle => "cycle",
            Strategy::Splash => "splash",
            Strategy::Spell => "spell",
        }
    }

    /// Elixir band, role quotas and role multipliers for this strategy.
    #[must_use]
    pub fn profile(self) -> StrategyProfile {
        use CardRole::*;

        let base = StrategyProfile::default();
        match self {
            Strategy::Balanced => base,
            Strategy::Aggro => StrategyProfile {
                target_elixir: (3.5, 4.0),
                quotas: RoleTable::new([2, 0, 1, 1, 3, 1]),
                multipliers: RoleTable::splat(1.0)
                    .with(WinCondition, 2.0)
                    .with(Support, 1.2)
                    .with(Building, 0.3),
            },
            Strategy::Control => StrategyProfile {
                target_elixir: (3.5, 4.2),
                quotas: RoleTable::new([1, 2, 2, 0, 2, 1]),
                multipliers: RoleTable::splat(1.0)
                    .with(Building, 2.0)
                    .with(SpellBig, 1.5)
                    .with(SpellSmall, 0.3)
                    .with(Cycle, 0.5)
                    .with(WinCondition, 0.5),
            },
            Strategy::Cycle => StrategyProfile {
                target_elixir: (2.5, 3.0),
                quotas: RoleTable::new([1, 1, 0, 1, 1, 4]),
                multipliers: RoleTable::splat(1.0)
                    .with(Cycle, 2.0)
                    .with(SpellSmall, 1.2)
                    .with(SpellBig, 0.3),
            },
            Strategy::Splash => StrategyProfile {
                target_elixir: (3.2, 3.8),
                quotas: RoleTable::new([1, 1, 1, 1, 3, 1]),
                multipliers: RoleTable::splat(1.0)
                    .with(Support, 2.0)
                    .with(SpellBig, 1.2)
                    .with(Cycle, 0.5),
            },
            Strategy::Spell => StrategyProfile {
                target_elixir: (3.2, 3.8),
                quotas: RoleTable::new([1, 0, 2, 1, 3, 1]),
                multipliers: RoleTable::splat(1.0)
                    .with(SpellBig, 2.0)
                    .with(SpellSmall, 1.5)
                    .with(Building, 0.1),
            },
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DeckError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| DeckError::InvalidStrategy(s.to_string()))
    }
}

/// What a strategy asks of a deck.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyProfile {
    /// Per-card elixir band outside which cards are penalized.
    pub target_elixir: (f64, f64),
    /// Cards to pick per role before backfilling.
    pub quotas: RoleTable<u8>,
    /// Score multiplier per role.
    pub multipliers: RoleTable<f64>,
}

impl Default for StrategyProfile {
    fn default() -> Self {
        Self {
            target_elixir: (3.0, 3.5),
            quotas: RoleTable::new([1, 1, 1, 1, 2, 2]),
            multipliers: RoleTable::splat(1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DECK_SIZE;

    #[test]
    fn test_parse() {
        assert_eq!(" Cycle ".parse::<Strategy>().unwrap(), Strategy::Cycle);
        assert_eq!("SPELL".parse::<Strategy>().unwrap(), Strategy::Spell);
    }

    #[test]
    fn test_parse_invalid() {
        let err = "turbo".parse::<Strategy>().unwrap_err();
        assert_eq!(err, DeckError::InvalidStrategy("turbo".into()));
        assert!(err.to_string().contains("must be one of"));
    }

    #[test]
    fn test_quotas_fill_a_deck() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.profile().quotas.total(), DECK_SIZE, "{strategy}");
        }
    }

    #[test]
    fn test_cycle_targets_lower_elixir_than_control() {
        let cycle = Strategy::Cycle.profile();
        let control = Strategy::Control.profile();
        assert!(cycle.target_elixir.1 < control.target_elixir.0);
    }
}
