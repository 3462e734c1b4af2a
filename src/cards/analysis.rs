//! Player-scoped card analysis: the inbound view of a collection.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::rarity::Rarity;
use crate::core::normalize_name;

/// Level and evolution data for one owned card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardLevelData {
    pub level: u8,
    pub max_level: u8,

    #[serde(default)]
    pub rarity: Option<Rarity>,

    /// Elixir cost as reported by the source; the catalog fills gaps.
    #[serde(default)]
    pub elixir: Option<u8>,

    #[serde(default)]
    pub evolution_level: u8,

    #[serde(default)]
    pub max_evolution_level: u8,

    /// Multiplicative selection boost (0.2 = +20%).
    #[serde(default)]
    pub score_boost: f64,
}

impl CardLevelData {
    #[must_use]
    pub fn new(level: u8, max_level: u8) -> Self {
        Self {
            level,
            max_level,
            rarity: None,
            elixir: None,
            evolution_level: 0,
            max_evolution_level: 0,
            score_boost: 0.0,
        }
    }

    #[must_use]
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    #[must_use]
    pub fn with_elixir(mut self, elixir: u8) -> Self {
        self.elixir = Some(elixir);
        self
    }

    #[must_use]
    pub fn with_evolution(mut self, level: u8, max_level: u8) -> Self {
        self.evolution_level = level;
        self.max_evolution_level = max_level;
        self
    }

    #[must_use]
    pub fn with_score_boost(mut self, boost: f64) -> Self {
        self.score_boost = boost;
        self
    }
}

/// Mapping from card name to the player's level data.
///
/// Backed by a `BTreeMap` so iteration order is stable across runs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardAnalysis {
    pub card_levels: BTreeMap<String, CardLevelData>,

    #[serde(default)]
    pub player_name: Option<String>,

    #[serde(default)]
    pub player_tag: Option<String>,
}

impl CardAnalysis {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card (builder pattern).
    #[must_use]
    pub fn with_card(mut self, name: impl Into<String>, data: CardLevelData) -> Self {
        self.insert(name, data);
        self
    }

    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>, tag: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self.player_tag = Some(tag.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, data: CardLevelData) {
        self.card_levels.insert(name.into(), data);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardLevelData> {
        self.card_levels.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.card_levels.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.card_levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.card_levels.is_empty()
    }

    /// Iterate cards in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CardLevelData)> {
        self.card_levels.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// A view keeping only the cards `keep` accepts.
    #[must_use]
    pub fn filtered<F>(&self, keep: F) -> CardAnalysis
    where
        F: Fn(&str, &CardLevelData) -> bool,
    {
        CardAnalysis {
            card_levels: self
                .card_levels
                .iter()
                .filter(|(name, data)| keep(name, data))
                .map(|(name, data)| (name.clone(), data.clone()))
                .collect(),
            player_name: self.player_name.clone(),
            player_tag: self.player_tag.clone(),
        }
    }

    /// A view without the named cards. Names match case-insensitively.
    #[must_use]
    pub fn without<I, S>(&self, names: I) -> CardAnalysis
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded: FxHashSet<String> = names.into_iter().map(|n| normalize_name(n.as_ref())).collect();
        if excluded.is_empty() {
            return self.clone();
        }
        self.filtered(|name, _| !excluded.contains(&normalize_name(name)))
    }

    /// Distinct cards left once `excluded` names are removed. Names
    /// compare case-insensitively, so case variants count once.
    #[must_use]
    pub fn eligible_count<I, S>(&self, excluded: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let excluded: FxHashSet<String> = excluded.into_iter().map(|n| normalize_name(n.as_ref())).collect();
        self.card_levels
            .keys()
            .map(|name| normalize_name(name))
            .filter(|key| !excluded.contains(key))
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// A copy where the named cards carry `boost` as their score boost.
    /// Names match case-insensitively; unknown names are ignored.
    #[must_use]
    pub fn boosted<I, S>(&self, names: I, boost: f64) -> CardAnalysis
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets: FxHashSet<String> = names.into_iter().map(|n| normalize_name(n.as_ref())).collect();
        let mut copy = self.clone();
        for (name, data) in copy.card_levels.iter_mut() {
            if targets.contains(&normalize_name(name)) {
                data.score_boost = boost;
            }
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CardAnalysis {
        CardAnalysis::new()
            .with_card("Knight", CardLevelData::new(14, 16))
            .with_card("Archers", CardLevelData::new(13, 16).with_evolution(1, 1))
            .with_card("Zap", CardLevelData::new(15, 16))
    }

    #[test]
    fn test_iteration_is_sorted() {
        let names: Vec<_> = sample().iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(names, vec!["Archers", "Knight", "Zap"]);
    }

    #[test]
    fn test_without_is_case_insensitive() {
        let view = sample().without(["knight", " ZAP "]);
        assert_eq!(view.len(), 1);
        assert!(view.contains("Archers"));
    }

    #[test]
    fn test_eligible_count() {
        assert_eq!(sample().eligible_count(["ZAP", "Missing"]), 2);
        assert_eq!(sample().eligible_count(Vec::<&str>::new()), 3);
    }

    #[test]
    fn test_eligible_count_merges_case_variants() {
        let mut analysis = sample();
        analysis.insert("knight", CardLevelData::new(9, 16));
        assert_eq!(analysis.len(), 4);
        assert_eq!(analysis.eligible_count(Vec::<&str>::new()), 3);
        assert_eq!(analysis.eligible_count(["KNIGHT"]), 2);
    }

    #[test]
    fn test_boosted_marks_named_cards() {
        let view = sample().boosted(["knight", "Unknown"], 0.2);
        assert_eq!(view.get("Knight").map(|d| d.score_boost), Some(0.2));
        assert_eq!(view.get("Zap").map(|d| d.score_boost), Some(0.0));
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_without_nothing_is_identity() {
        let analysis = sample();
        assert_eq!(analysis.without(Vec::<String>::new()), analysis);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{"card_levels": {"Hog Rider": {"level": 14, "max_level": 16}}}"#;
        let analysis: CardAnalysis = serde_json::from_str(json).unwrap();
        let hog = analysis.get("Hog Rider").unwrap();
        assert_eq!(hog.evolution_level, 0);
        assert_eq!(hog.score_boost, 0.0);
        assert!(analysis.player_name.is_none());
    }
}
