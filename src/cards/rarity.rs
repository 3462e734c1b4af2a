//! Card rarity tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rarity tier, ordered from most to least common.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
    Champion,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Champion,
    ];

    /// Parse a rarity name case-insensitively. Unknown names are Common.
    #[must_use]
    pub fn parse(name: &str) -> Rarity {
        let name = name.trim();
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(name))
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Champion => "Champion",
        }
    }

    /// Small multiplier reflecting card power by tier.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.05,
            Rarity::Epic => 1.1,
            Rarity::Legendary => 1.15,
            Rarity::Champion => 1.2,
        }
    }

    /// Multiplier applied to the level ratio when scoring a card for
    /// selection. Levelled-up high rarities are the scarcest investment.
    #[must_use]
    pub const fn priority_bonus(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.3,
            Rarity::Epic => 1.7,
            Rarity::Legendary => 2.2,
            Rarity::Champion => 2.5,
        }
    }

    /// Cost of this tier for free-to-play players.
    #[must_use]
    pub const fn f2p_penalty(self) -> f64 {
        match self {
            Rarity::Common | Rarity::Rare => 0.0,
            Rarity::Epic => 2.0,
            Rarity::Legendary => 3.0,
            Rarity::Champion => 4.0,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
