//! Deck-level synergy reports and card suggestions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::database::{SynergyCategory, SynergyDatabase, SynergyPair};

/// Highlights kept in a deck report.
pub const TOP_SYNERGIES: usize = 5;

/// Synergy breakdown for a set of cards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckSynergyAnalysis {
    /// Signed sum over every recorded pair.
    pub total: f64,
    /// Mean score of the recorded pairs (0 when none).
    pub average: f64,
    /// Best positive pairs, strongest first.
    pub top_synergies: Vec<SynergyPair>,
    /// Negative pairs, worst first.
    pub conflicts: Vec<SynergyPair>,
    pub category_counts: BTreeMap<SynergyCategory, usize>,
    /// Cards with no positive partner in the deck.
    pub isolated_cards: Vec<String>,
}

impl DeckSynergyAnalysis {
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.category_counts.values().sum()
    }
}

/// A card suggested for its synergy with a deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynergySuggestion {
    pub card: String,
    pub total: f64,
    pub synergies: Vec<SynergyPair>,
    pub reason: String,
}

impl SynergyDatabase {
    /// Report on the recorded pairs inside `names`.
    #[must_use]
    pub fn analyze_deck<S: AsRef<str>>(&self, names: &[S]) -> DeckSynergyAnalysis {
        let found = self.pairs_within(names);
        if found.is_empty() {
            return DeckSynergyAnalysis {
                isolated_cards: names.iter().map(|n| n.as_ref().to_string()).collect(),
                ..DeckSynergyAnalysis::default()
            };
        }

        let total: f64 = found.iter().map(|p| p.score).sum();
        let mut category_counts = BTreeMap::new();
        for pair in &found {
            *category_counts.entry(pair.category).or_insert(0) += 1;
        }

        let mut positive: Vec<SynergyPair> = found.iter().filter(|p| p.score > 0.0).map(|&p| p.clone()).collect();
        positive.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut conflicts: Vec<SynergyPair> = found.iter().filter(|p| p.score < 0.0).map(|&p| p.clone()).collect();
        conflicts.sort_by(|a, b| a.score.total_cmp(&b.score));

        let isolated_cards = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !positive.iter().any(|p| p.involves(name)))
            .map(str::to_string)
            .collect();

        positive.truncate(TOP_SYNERGIES);

        DeckSynergyAnalysis {
            total,
            average: total / found.len() as f64,
            top_synergies: positive,
            conflicts,
            category_counts,
            isolated_cards,
        }
    }

    /// Rank `available` cards outside the deck by total synergy with it.
    ///
    /// Cards whose total is not positive are skipped. Ties keep the order
    /// of `available`.
    #[must_use]
    pub fn suggest<S, T>(&self, deck: &[S], available: &[T], limit: usize) -> Vec<SynergySuggestion>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut suggestions: Vec<SynergySuggestion> = available
            .iter()
            .map(AsRef::as_ref)
            .filter(|card| !deck.iter().any(|d| d.as_ref().eq_ignore_ascii_case(card)))
            .filter_map(|card| {
                let synergies: Vec<SynergyPair> = deck
                    .iter()
                    .filter_map(|d| self.pair(card, d.as_ref()))
                    .cloned()
                    .collect();
                let total: f64 = synergies.iter().map(|p| p.score).sum();
                if total <= 0.0 {
                    return None;
                }
                let reason = suggestion_reason(card, &synergies);
                Some(SynergySuggestion {
                    card: card.to_string(),
                    total,
                    synergies,
                    reason,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| b.total.total_cmp(&a.total));
        suggestions.truncate(limit);
        suggestions
    }
}

fn suggestion_reason(card: &str, synergies: &[SynergyPair]) -> String {
    let partners: Vec<&str> = synergies
        .iter()
        .filter(|p| p.score > 0.0)
        .filter_map(|p| p.partner_of(card))
        .collect();
    match partners.as_slice() {
        [] => "No direct synergies".to_string(),
        [only] => format!("Strong synergy with {only}"),
        [first, rest @ ..] => format!("Synergizes with {first} and {} more", rest.len()),
    }
}
