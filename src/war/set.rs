//! War-deck search results.

use serde::{Deserialize, Serialize};

use crate::builder::DeckRecommendation;
use crate::core::{Archetype, Scoreable};

use super::stats::SearchStats;

/// One archetype's deck within a war set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarDeckCandidate {
    pub archetype: Archetype,
    pub deck: DeckRecommendation,
    pub score: f64,
}

impl Scoreable for WarDeckCandidate {
    fn overall_score(&self) -> f64 {
        self.score
    }
}

/// The best set of disjoint decks found by a search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WarDeckSet {
    /// Decks in the order the winning permutation built them.
    pub decks: Vec<WarDeckCandidate>,
    pub total_score: f64,
    /// Weakest deck's score; the tie-break between equal totals.
    pub min_score: f64,
    pub stats: SearchStats,
}

impl WarDeckSet {
    pub(crate) fn from_decks(decks: Vec<WarDeckCandidate>) -> Self {
        let total_score = decks.iter().map(|d| d.score).sum();
        let min_score = decks.iter().map(|d| d.score).fold(f64::INFINITY, f64::min);
        Self {
            decks,
            total_score,
            min_score: if min_score.is_finite() { min_score } else { 0.0 },
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    /// Archetypes in build order.
    pub fn archetypes(&self) -> impl Iterator<Item = Archetype> + '_ {
        self.decks.iter().map(|d| d.archetype)
    }

    /// Every card across the set.
    pub fn cards(&self) -> impl Iterator<Item = &str> {
        self.decks.iter().flat_map(|d| d.deck.cards.iter().map(String::as_str))
    }

    /// The deck built for `archetype`, if it was fielded.
    #[must_use]
    pub fn deck_for(&self, archetype: Archetype) -> Option<&WarDeckCandidate> {
        self.decks.iter().find(|d| d.archetype == archetype)
    }

    /// Strictly better than `other`: higher total, or a total within
    /// `tolerance` and a higher minimum.
    #[must_use]
    pub fn beats(&self, other: &WarDeckSet, tolerance: f64) -> bool {
        if (self.total_score - other.total_score).abs() <= tolerance {
            self.min_score > other.min_score + tolerance
        } else {
            self.total_score > other.total_score
        }
    }
}

impl Scoreable for WarDeckSet {
    fn overall_score(&self) -> f64 {
        self.total_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-4;

    fn scored(total_score: f64, min_score: f64) -> WarDeckSet {
        WarDeckSet {
            decks: Vec::new(),
            total_score,
            min_score,
            stats: SearchStats::default(),
        }
    }

    #[test]
    fn test_equal_totals_prefer_higher_minimum() {
        let incumbent = scored(30.0, 8.0);
        let fairer = scored(30.0, 9.5);
        assert!(fairer.beats(&incumbent, TOL));
        assert!(!incumbent.beats(&fairer, TOL));
    }

    #[test]
    fn test_totals_within_tolerance_are_equal() {
        let incumbent = scored(30.0, 8.0);
        let fairer = scored(30.0 - TOL / 2.0, 9.0);
        assert!(fairer.beats(&incumbent, TOL));
    }

    #[test]
    fn test_exact_tie_keeps_incumbent() {
        let incumbent = scored(30.0, 9.0);
        let same = scored(30.0, 9.0);
        assert!(!same.beats(&incumbent, TOL));
        assert!(!incumbent.beats(&same, TOL));

        let nearly = scored(30.0, 9.0 + TOL / 2.0);
        assert!(!nearly.beats(&incumbent, TOL));
    }

    #[test]
    fn test_higher_total_wins_over_fairness() {
        let incumbent = scored(30.0, 9.9);
        let stronger = scored(30.01, 2.0);
        assert!(stronger.beats(&incumbent, TOL));
        assert!(!incumbent.beats(&stronger, TOL));
    }

    #[test]
    fn test_from_decks_totals_and_minimum() {
        assert_eq!(WarDeckSet::from_decks(Vec::new()).min_score, 0.0);
        assert!(WarDeckSet::from_decks(Vec::new()).is_empty());
    }
}
