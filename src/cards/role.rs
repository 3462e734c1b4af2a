//! Functional card roles and role inference.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// A card's functional category inside a deck.
///
/// Declaration order is the order quotas are filled in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardRole {
    #[serde(rename = "win_conditions")]
    WinCondition,
    #[serde(rename = "buildings")]
    Building,
    #[serde(rename = "spells_big")]
    SpellBig,
    #[serde(rename = "spells_small")]
    SpellSmall,
    #[serde(rename = "support")]
    Support,
    #[serde(rename = "cycle")]
    Cycle,
}

impl CardRole {
    /// All roles in quota order.
    pub const ALL: [CardRole; 6] = [
        CardRole::WinCondition,
        CardRole::Building,
        CardRole::SpellBig,
        CardRole::SpellSmall,
        CardRole::Support,
        CardRole::Cycle,
    ];

    /// Fallback role for cards missing from the catalog, by elixir cost.
    #[must_use]
    pub const fn from_elixir(elixir: u8) -> CardRole {
        match elixir {
            0..=2 => CardRole::Cycle,
            3..=5 => CardRole::Support,
            _ => CardRole::WinCondition,
        }
    }

    /// Ranking used when handing out evolution slots. Lower goes first.
    #[must_use]
    pub const fn evolution_priority(self) -> u8 {
        match self {
            CardRole::WinCondition => 1,
            CardRole::Building => 2,
            CardRole::SpellBig => 3,
            CardRole::Support => 4,
            CardRole::SpellSmall => 5,
            CardRole::Cycle => 6,
        }
    }

    #[must_use]
    pub const fn is_spell(self) -> bool {
        matches!(self, CardRole::SpellBig | CardRole::SpellSmall)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardRole::WinCondition => "win_conditions",
            CardRole::Building => "buildings",
            CardRole::SpellBig => "spells_big",
            CardRole::SpellSmall => "spells_small",
            CardRole::Support => "support",
            CardRole::Cycle => "cycle",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CardRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per role, indexable by [`CardRole`].
///
/// Used for quotas, score multipliers and per-role counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleTable<T>([T; 6]);

impl<T: Copy> RoleTable<T> {
    /// A table with every role set to `value`.
    #[must_use]
    pub const fn splat(value: T) -> Self {
        Self([value; 6])
    }

    /// Build from values listed in [`CardRole::ALL`] order.
    #[must_use]
    pub const fn new(values: [T; 6]) -> Self {
        Self(values)
    }

    /// Iterate `(role, value)` pairs in quota order.
    pub fn iter(&self) -> impl Iterator<Item = (CardRole, T)> + '_ {
        CardRole::ALL.into_iter().map(move |r| (r, self.0[r.index()]))
    }

    /// Replace a single entry (builder style).
    #[must_use]
    pub fn with(mut self, role: CardRole, value: T) -> Self {
        self.0[role.index()] = value;
        self
    }
}

impl RoleTable<u8> {
    /// Sum of all entries.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&v| v as usize).sum()
    }

    /// Count roles from an iterator of roles.
    pub fn count<I: IntoIterator<Item = CardRole>>(roles: I) -> Self {
        let mut table = Self::default();
        for role in roles {
            table[role] = table[role].saturating_add(1);
        }
        table
    }

    /// Number of roles with a non-zero entry.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&v| v > 0).count()
    }
}

impl<T> Index<CardRole> for RoleTable<T> {
    type Output = T;

    fn index(&self, role: CardRole) -> &T {
        &self.0[role.index()]
    }
}

impl<T> IndexMut<CardRole> for RoleTable<T> {
    fn index_mut(&mut self, role: CardRole) -> &mut T {
        &mut self.0[role.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elixir_fallback() {
        assert_eq!(CardRole::from_elixir(1), CardRole::Cycle);
        assert_eq!(CardRole::from_elixir(2), CardRole::Cycle);
        assert_eq!(CardRole::from_elixir(3), CardRole::Support);
        assert_eq!(CardRole::from_elixir(5), CardRole::Support);
        assert_eq!(CardRole::from_elixir(6), CardRole::WinCondition);
        assert_eq!(CardRole::from_elixir(9), CardRole::WinCondition);
    }

    #[test]
    fn test_evolution_priority_order() {
        let mut roles = CardRole::ALL.to_vec();
        roles.sort_by_key(|r| r.evolution_priority());
        assert_eq!(roles[0], CardRole::WinCondition);
        assert_eq!(roles[5], CardRole::Cycle);
        assert!(CardRole::Support.evolution_priority() < CardRole::SpellSmall.evolution_priority());
    }

    #[test]
    fn test_role_table_count() {
        let counts = RoleTable::count([CardRole::Cycle, CardRole::Cycle, CardRole::Support]);
        assert_eq!(counts[CardRole::Cycle], 2);
        assert_eq!(counts[CardRole::Support], 1);
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.distinct(), 2);
    }

    #[test]
    fn test_role_table_with() {
        let table = RoleTable::splat(1.0).with(CardRole::Building, 2.0);
        assert_eq!(table[CardRole::Building], 2.0);
        assert_eq!(table[CardRole::Cycle], 1.0);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CardRole::WinCondition).unwrap();
        assert_eq!(json, "\"win_conditions\"");
    }
}
