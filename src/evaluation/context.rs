//! Player context: what the evaluating player owns and at what level.

use rustc_hash::FxHashMap;

use crate::cards::{CardAnalysis, CardCandidate, CardCatalog, CardLevelData};
use crate::core::normalize_name;

/// A player's collection, used to resolve deck names to real levels and
/// to judge whether a deck is playable for them.
#[derive(Clone, Debug, Default)]
pub struct PlayerContext {
    collection: FxHashMap<String, (String, CardLevelData)>,
    pub player_name: Option<String>,
}

impl PlayerContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_analysis(analysis: &CardAnalysis) -> Self {
        Self {
            collection: analysis
                .iter()
                .map(|(name, data)| (normalize_name(name), (name.to_string(), data.clone())))
                .collect(),
            player_name: analysis.player_name.clone(),
        }
    }

    #[must_use]
    pub fn owns(&self, name: &str) -> bool {
        self.collection.contains_key(&normalize_name(name))
    }

    #[must_use]
    pub fn level_data(&self, name: &str) -> Option<&CardLevelData> {
        self.collection.get(&normalize_name(name)).map(|(_, data)| data)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Resolve a name to a candidate at the player's level, or the catalog's
    /// max-level card when the player does not own it.
    #[must_use]
    pub fn resolve(&self, name: &str, catalog: &CardCatalog) -> CardCandidate {
        match self.collection.get(&normalize_name(name)) {
            Some((owned_name, data)) => CardCandidate::from_level_data(owned_name, data, catalog),
            None => CardCandidate::from_name(name, catalog),
        }
    }

    /// Names in `deck` the player does not own.
    #[must_use]
    pub fn missing<'a>(&self, deck: &'a [CardCandidate]) -> Vec<&'a str> {
        deck.iter()
            .map(|c| c.name.as_str())
            .filter(|name| !self.owns(name))
            .collect()
    }
}
