//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every known card definition by name and
//! resolves roles for cards it has never seen.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::builtin::{ALIASES, CARDS};
use super::definition::CardDefinition;
use super::role::CardRole;
use crate::core::normalize_name;

/// Elixir assumed for cards with no recorded cost.
pub const DEFAULT_ELIXIR: u8 = 4;

static BUILTIN: Lazy<CardCatalog> = Lazy::new(CardCatalog::from_builtin_rows);

/// Catalog of card definitions.
///
/// Lookups try the exact name first, then a case-insensitive match, then
/// registered aliases.
///
/// ## Example
///
/// ```
/// use rust_deckforge::cards::{CardCatalog, CardDefinition, CardRole, Rarity};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardDefinition::new("Knight", 3, Rarity::Common, CardRole::Cycle));
///
/// assert_eq!(catalog.get("knight").map(|c| c.elixir), Some(3));
/// assert_eq!(catalog.role_of("Unknown Card", Some(7)), CardRole::WinCondition);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<String, CardDefinition>,
    folded: FxHashMap<String, String>,
}

impl CardCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared built-in catalog, constructed on first use.
    #[must_use]
    pub fn builtin() -> &'static CardCatalog {
        &BUILTIN
    }

    fn from_builtin_rows() -> Self {
        let mut catalog = Self::new();
        for &(name, elixir, rarity, role, stats, evolution) in CARDS {
            let mut card = CardDefinition::new(name, elixir, rarity, role).with_evolution(evolution);
            if let Some((hp, dps, hit_speed, range, targets)) = stats {
                card = card.with_stats(hp, dps, hit_speed, range, targets);
            }
            catalog.register(card);
        }
        for &(alias, name) in ALIASES {
            catalog.alias(alias, name);
        }
        catalog
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same name already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.name) {
            panic!("Card {:?} already registered", card.name);
        }
        self.folded.insert(normalize_name(&card.name), card.name.clone());
        self.cards.insert(card.name.clone(), card);
    }

    /// Make `alias` resolve to the registered card `name`.
    pub fn alias(&mut self, alias: &str, name: &str) {
        self.folded.insert(normalize_name(alias), name.to_string());
    }

    /// Get a card definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name).or_else(|| {
            self.folded
                .get(&normalize_name(name))
                .and_then(|canonical| self.cards.get(canonical))
        })
    }

    /// Canonical spelling of a card name, if known.
    #[must_use]
    pub fn canonical_name(&self, name: &str) -> Option<&str> {
        self.get(name).map(|c| c.name.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards matching a predicate (unordered).
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }

    /// Elixir cost for a card: catalog value, else the hint, else
    /// [`DEFAULT_ELIXIR`].
    #[must_use]
    pub fn elixir_of(&self, name: &str, hint: Option<u8>) -> u8 {
        self.get(name)
            .map(|c| c.elixir)
            .or(hint)
            .unwrap_or(DEFAULT_ELIXIR)
    }

    /// Role for a card: catalog value, else inferred from elixir cost.
    #[must_use]
    pub fn role_of(&self, name: &str, elixir_hint: Option<u8>) -> CardRole {
        match self.get(name) {
            Some(card) => card.role,
            None => CardRole::from_elixir(elixir_hint.unwrap_or(DEFAULT_ELIXIR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rarity::Rarity;

    #[test]
    fn test_builtin_has_core_cards() {
        let catalog = CardCatalog::builtin();
        for name in ["Hog Rider", "Fireball", "Zap", "Musketeer", "Mini P.E.K.K.A", "Valkyrie", "Skeletons", "Archers"] {
            assert!(catalog.contains(name), "missing {name}");
        }
        assert!(catalog.len() > 90);
    }

    #[test]
    fn test_builtin_roles() {
        let catalog = CardCatalog::builtin();
        assert_eq!(catalog.role_of("Hog Rider", None), CardRole::WinCondition);
        assert_eq!(catalog.role_of("Inferno Tower", None), CardRole::Building);
        assert_eq!(catalog.role_of("Rocket", None), CardRole::SpellBig);
        assert_eq!(catalog.role_of("The Log", None), CardRole::SpellSmall);
        assert_eq!(catalog.role_of("Musketeer", None), CardRole::Support);
        assert_eq!(catalog.role_of("Ice Spirit", None), CardRole::Cycle);
    }

    #[test]
    fn test_aliases_and_case() {
        let catalog = CardCatalog::builtin();
        assert_eq!(catalog.canonical_name("log"), Some("The Log"));
        assert_eq!(catalog.canonical_name("HOG RIDER"), Some("Hog Rider"));
        assert_eq!(catalog.canonical_name("Mini PEKKA"), Some("Mini P.E.K.K.A"));
    }

    #[test]
    fn test_unknown_card_fallbacks() {
        let catalog = CardCatalog::builtin();
        assert_eq!(catalog.elixir_of("Mystery", None), DEFAULT_ELIXIR);
        assert_eq!(catalog.elixir_of("Mystery", Some(2)), 2);
        assert_eq!(catalog.role_of("Mystery", Some(2)), CardRole::Cycle);
        assert_eq!(catalog.role_of("Mystery", None), CardRole::Support);
        assert_eq!(catalog.role_of("Mystery", Some(6)), CardRole::WinCondition);
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_register_panics() {
        let mut catalog = CardCatalog::new();
        catalog.register(CardDefinition::new("Knight", 3, Rarity::Common, CardRole::Cycle));
        catalog.register(CardDefinition::new("Knight", 3, Rarity::Common, CardRole::Cycle));
    }

    #[test]
    fn test_find() {
        let catalog = CardCatalog::builtin();
        let champions = catalog.find(|c| c.rarity == Rarity::Champion).count();
        assert!(champions >= 5);
    }
}
