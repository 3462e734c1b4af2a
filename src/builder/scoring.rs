//! Per-card contribution scores used to rank selection candidates.

use crate::cards::CardCandidate;

use super::strategy::StrategyProfile;

/// Average elixir the strategy bands are measured against.
const OPTIMAL_ELIXIR: f64 = 3.0;
/// Cards above this cost are penalized harder by low-elixir strategies.
const CYCLE_PENALTY_THRESHOLD: f64 = 4.0;
const EVOLUTION_WEIGHT: f64 = 0.15;

/// Scores a card's value to a deck under one strategy.
#[derive(Clone, Copy, Debug)]
pub struct CardScorer<'a> {
    profile: &'a StrategyProfile,
    combat_weight: f64,
}

impl<'a> CardScorer<'a> {
    #[must_use]
    pub fn new(profile: &'a StrategyProfile, combat_weight: f64) -> Self {
        Self {
            profile,
            combat_weight: combat_weight.clamp(0.0, 1.0),
        }
    }

    /// Level, rarity, elixir efficiency and evolution, optionally blended
    /// with combat efficiency; no strategy adjustments.
    #[must_use]
    pub fn base_score(&self, card: &CardCandidate) -> f64 {
        let level = card.level_ratio() * 1.2 * card.rarity.priority_bonus();
        let elixir = 1.0 - (f64::from(card.elixir) - OPTIMAL_ELIXIR).abs() / 9.0;
        let evolution = if card.is_evolved() {
            EVOLUTION_WEIGHT * card.evolution_ratio()
        } else {
            0.0
        };
        let base = level + elixir * 0.15 + 0.05 + evolution;

        match card.stats {
            Some(stats) if self.combat_weight > 0.0 => {
                base * (1.0 - self.combat_weight) + stats.efficiency(card.elixir) * self.combat_weight
            }
            _ => base,
        }
    }

    /// Full contribution score: base, role multiplier, elixir band
    /// penalty, then the card's score boost.
    #[must_use]
    pub fn score(&self, card: &CardCandidate) -> f64 {
        let base = self.base_score(card);
        let multiplier = self.profile.multipliers[card.role];
        let adjusted = base + base * (multiplier - 1.0) + self.elixir_adjustment(card.elixir);
        adjusted * (1.0 + card.score_boost)
    }

    /// Non-positive penalty for cards outside the strategy's elixir band.
    #[must_use]
    pub fn elixir_adjustment(&self, elixir: u8) -> f64 {
        let cost = f64::from(elixir);
        let (min, max) = self.profile.target_elixir;
        if cost >= min && cost <= max {
            return 0.0;
        }
        let distance = if cost < min { min - cost } else { cost - max };
        if max <= OPTIMAL_ELIXIR && cost > CYCLE_PENALTY_THRESHOLD {
            -0.3 * distance
        } else {
            -0.15 * distance
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::strategy::Strategy;
    use crate::cards::{CardCatalog, CardLevelData};

    fn card(name: &str, level: u8) -> CardCandidate {
        CardCandidate::from_level_data(name, &CardLevelData::new(level, 16), CardCatalog::builtin())
    }

    #[test]
    fn test_higher_level_scores_higher() {
        let profile = Strategy::Balanced.profile();
        let scorer = CardScorer::new(&profile, 0.0);
        assert!(scorer.score(&card("Knight", 14)) > scorer.score(&card("Knight", 9)));
    }

    #[test]
    fn test_role_multiplier() {
        let balanced = Strategy::Balanced.profile();
        let control = Strategy::Control.profile();
        let cannon = card("Cannon", 14);
        assert!(CardScorer::new(&control, 0.0).score(&cannon) > CardScorer::new(&balanced, 0.0).score(&cannon));
    }

    #[test]
    fn test_cycle_penalizes_expensive_cards_harder() {
        let cycle = Strategy::Cycle.profile();
        let scorer = CardScorer::new(&cycle, 0.0);
        assert_eq!(scorer.elixir_adjustment(3), 0.0);
        assert!((scorer.elixir_adjustment(4) + 0.15).abs() < 1e-9);
        assert!((scorer.elixir_adjustment(6) + 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_score_boost_multiplies() {
        let profile = Strategy::Balanced.profile();
        let scorer = CardScorer::new(&profile, 0.0);
        let plain = card("Knight", 14);
        let mut boosted = plain.clone();
        boosted.score_boost = 0.2;
        assert!((scorer.score(&boosted) - scorer.score(&plain) * 1.2).abs() < 1e-9);
    }

    #[test]
    fn test_combat_weight_blends_stats() {
        let profile = Strategy::Balanced.profile();
        let knight = card("Knight", 14);
        let with = CardScorer::new(&profile, 0.5).base_score(&knight);
        let without = CardScorer::new(&profile, 0.0).base_score(&knight);
        assert_ne!(with, without);

        let zap = card("Zap", 14);
        assert_eq!(
            CardScorer::new(&profile, 0.5).base_score(&zap),
            CardScorer::new(&profile, 0.0).base_score(&zap)
        );
    }
}
