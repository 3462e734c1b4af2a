//! Synergy database: a static weighted graph over card pairs.
//!
//! Pairs are unordered. Each card name is interned to a small integer once
//! at construction so a lookup is two name probes and one pair probe, with
//! no allocation for exactly-spelled names.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::pairs::PAIRS;
use crate::core::normalize_name;

static BUILTIN: Lazy<SynergyDatabase> = Lazy::new(|| {
    SynergyDatabase::from_pairs(
        PAIRS
            .iter()
            .map(|&(a, b, category, score, description)| SynergyPair::new(a, b, category, score, description)),
    )
});

/// Tactical pattern a synergy pair belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynergyCategory {
    TankSupport,
    Bait,
    SpellCombo,
    WinCondition,
    Defensive,
    Cycle,
    BridgeSpam,
    /// Cards that work against each other; scores are negative.
    AntiSynergy,
}

impl SynergyCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            SynergyCategory::TankSupport => "tank_support",
            SynergyCategory::Bait => "bait",
            SynergyCategory::SpellCombo => "spell_combo",
            SynergyCategory::WinCondition => "win_condition",
            SynergyCategory::Defensive => "defensive",
            SynergyCategory::Cycle => "cycle",
            SynergyCategory::BridgeSpam => "bridge_spam",
            SynergyCategory::AntiSynergy => "anti_synergy",
        }
    }
}

impl fmt::Display for SynergyCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known synergy between two cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynergyPair {
    pub card1: String,
    pub card2: String,
    pub category: SynergyCategory,
    /// Signed weight in [-1, 1].
    pub score: f64,
    pub description: String,
}

impl SynergyPair {
    /// Scores outside [-1, 1] are clamped.
    #[must_use]
    pub fn new(
        card1: impl Into<String>,
        card2: impl Into<String>,
        category: SynergyCategory,
        score: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            card1: card1.into(),
            card2: card2.into(),
            category,
            score: score.clamp(-1.0, 1.0),
            description: description.into(),
        }
    }

    /// True if `name` is one side of the pair.
    #[must_use]
    pub fn involves(&self, name: &str) -> bool {
        self.card1.eq_ignore_ascii_case(name) || self.card2.eq_ignore_ascii_case(name)
    }

    /// The other side of the pair from `name`.
    #[must_use]
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        if self.card1.eq_ignore_ascii_case(name) {
            Some(&self.card2)
        } else if self.card2.eq_ignore_ascii_case(name) {
            Some(&self.card1)
        } else {
            None
        }
    }
}

type CardKey = u16;

/// Read-only synergy graph.
///
/// Built once and never mutated, so shared references are safe to use from
/// any number of threads.
///
/// ## Example
///
/// ```
/// use rust_deckforge::synergy::SynergyDatabase;
///
/// let db = SynergyDatabase::builtin();
/// assert_eq!(db.lookup("Hog Rider", "Fireball"), db.lookup("Fireball", "Hog Rider"));
/// assert_eq!(db.lookup("Hog Rider", "Not A Card"), 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SynergyDatabase {
    pairs: Vec<SynergyPair>,
    keys: FxHashMap<String, CardKey>,
    index: FxHashMap<(CardKey, CardKey), usize>,
}

impl SynergyDatabase {
    /// The shared built-in database, constructed on first use.
    #[must_use]
    pub fn builtin() -> &'static SynergyDatabase {
        &BUILTIN
    }

    /// Build from explicit pairs.
    ///
    /// Self-pairs are ignored. When the same unordered pair appears more
    /// than once, the first definition is kept.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = SynergyPair>,
    {
        let mut db = Self::default();
        for pair in pairs {
            let a = db.intern(&pair.card1);
            let b = db.intern(&pair.card2);
            if a == b {
                continue;
            }
            let key = ordered(a, b);
            if db.index.contains_key(&key) {
                continue;
            }
            db.index.insert(key, db.pairs.len());
            db.pairs.push(pair);
        }
        db
    }

    fn intern(&mut self, name: &str) -> CardKey {
        if let Some(&key) = self.keys.get(name) {
            return key;
        }
        let folded = normalize_name(name);
        let key = match self.keys.get(&folded) {
            Some(&key) => key,
            None => self.keys.len() as CardKey,
        };
        self.keys.insert(name.to_string(), key);
        self.keys.insert(folded, key);
        key
    }

    fn key_of(&self, name: &str) -> Option<CardKey> {
        self.keys
            .get(name)
            .or_else(|| self.keys.get(&normalize_name(name)))
            .copied()
    }

    /// The full record for a pair, in either order.
    #[must_use]
    pub fn pair(&self, a: &str, b: &str) -> Option<&SynergyPair> {
        let ka = self.key_of(a)?;
        let kb = self.key_of(b)?;
        self.index.get(&ordered(ka, kb)).map(|&i| &self.pairs[i])
    }

    /// Signed synergy weight for two cards. Symmetric; 0 when unknown.
    #[must_use]
    pub fn lookup(&self, a: &str, b: &str) -> f64 {
        self.pair(a, b).map_or(0.0, |p| p.score)
    }

    /// Sum of lookups over every unordered pair of `names`.
    #[must_use]
    pub fn deck_total<S: AsRef<str>>(&self, names: &[S]) -> f64 {
        let mut total = 0.0;
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                total += self.lookup(a.as_ref(), b.as_ref());
            }
        }
        total
    }

    /// Every recorded pair that falls inside `names`.
    #[must_use]
    pub fn pairs_within<S: AsRef<str>>(&self, names: &[S]) -> Vec<&SynergyPair> {
        let mut found = Vec::new();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                if let Some(pair) = self.pair(a.as_ref(), b.as_ref()) {
                    found.push(pair);
                }
            }
        }
        found
    }

    /// Pairs recorded for one card.
    pub fn pairs_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SynergyPair> + 'a {
        self.pairs.iter().filter(move |p| p.involves(name))
    }

    /// Pairs in one category, in definition order.
    pub fn pairs_in(&self, category: SynergyCategory) -> impl Iterator<Item = &SynergyPair> {
        self.pairs.iter().filter(move |p| p.category == category)
    }

    /// All pairs in definition order.
    #[must_use]
    pub fn pairs(&self) -> &[SynergyPair] {
        &self.pairs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn ordered(a: CardKey, b: CardKey) -> (CardKey, CardKey) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardCatalog;

    #[test]
    fn test_builtin_lookup() {
        let db = SynergyDatabase::builtin();
        assert_eq!(db.lookup("Hog Rider", "Fireball"), 0.8);
        assert_eq!(db.lookup("Fireball", "Hog Rider"), 0.8);
        assert_eq!(db.lookup("Golem", "Night Witch"), 0.95);
        assert_eq!(db.lookup("Knight", "Rocket"), 0.0);
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let db = SynergyDatabase::builtin();
        assert_eq!(db.lookup("hog rider", "FIREBALL"), 0.8);
    }

    #[test]
    fn test_anti_synergy_is_negative() {
        let db = SynergyDatabase::builtin();
        assert!(db.lookup("Golem", "X-Bow") < 0.0);
        assert!(db.pairs_in(SynergyCategory::AntiSynergy).all(|p| p.score < 0.0));
    }

    #[test]
    fn test_self_pair_is_neutral() {
        let db = SynergyDatabase::builtin();
        assert_eq!(db.lookup("Hog Rider", "Hog Rider"), 0.0);
    }

    #[test]
    fn test_first_definition_wins() {
        let db = SynergyDatabase::from_pairs([
            SynergyPair::new("A", "B", SynergyCategory::Cycle, 0.5, "first"),
            SynergyPair::new("b", "a", SynergyCategory::Cycle, 0.9, "second"),
            SynergyPair::new("A", "A", SynergyCategory::Cycle, 1.0, "self"),
        ]);
        assert_eq!(db.len(), 1);
        assert_eq!(db.lookup("B", "A"), 0.5);
    }

    #[test]
    fn test_scores_clamped() {
        let pair = SynergyPair::new("A", "B", SynergyCategory::Bait, 3.0, "");
        assert_eq!(pair.score, 1.0);
    }

    #[test]
    fn test_deck_total_counts_each_pair_once() {
        let db = SynergyDatabase::builtin();
        let deck = ["Hog Rider", "Fireball", "Valkyrie"];
        let expected = db.lookup("Hog Rider", "Fireball")
            + db.lookup("Hog Rider", "Valkyrie")
            + db.lookup("Fireball", "Valkyrie");
        assert!((db.deck_total(&deck) - expected).abs() < 1e-12);
        assert_eq!(db.pairs_within(&deck).len(), 2);
    }

    #[test]
    fn test_every_builtin_card_is_cataloged() {
        let catalog = CardCatalog::builtin();
        for pair in SynergyDatabase::builtin().pairs() {
            assert!(catalog.contains(&pair.card1), "unknown card {}", pair.card1);
            assert!(catalog.contains(&pair.card2), "unknown card {}", pair.card2);
        }
    }

    #[test]
    fn test_partner_of() {
        let db = SynergyDatabase::builtin();
        let pair = db.pair("Fireball", "Hog Rider").unwrap();
        assert_eq!(pair.partner_of("hog rider"), Some("Fireball"));
        assert_eq!(pair.partner_of("Zap"), None);
    }
}
