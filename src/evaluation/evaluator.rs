//! The deck scoring engine.

use crate::cards::{CardCandidate, CardCatalog};
use crate::core::round_to;
use crate::synergy::SynergyDatabase;

use super::archetype::detect_archetype;
use super::categories::{
    average_elixir, score_attack, score_defense, score_f2p, score_playability, score_synergy,
    score_versatility,
};
use super::config::{CategoryWeights, ScoringConfig};
use super::context::PlayerContext;
use super::rating::{CategoryScore, Rating};
use super::result::EvaluationResult;

/// Scores decks against a fixed configuration and synergy graph.
///
/// Holds only shared references and plain configuration, so one evaluator
/// can serve any number of threads.
///
/// ## Example
///
/// ```
/// use rust_deckforge::evaluation::{Evaluator, ScoringConfig};
///
/// let evaluator = Evaluator::builtin(ScoringConfig::default());
/// let result = evaluator.evaluate_names(
///     &["Hog Rider", "Fireball", "Zap", "Musketeer", "Mini P.E.K.K.A", "Valkyrie", "Skeletons", "Archers"],
///     None,
/// );
/// assert!((0.0..=10.0).contains(&result.overall_score));
/// ```
#[derive(Clone, Debug)]
pub struct Evaluator<'a> {
    config: ScoringConfig,
    synergy: &'a SynergyDatabase,
    catalog: &'a CardCatalog,
}

impl Evaluator<'static> {
    /// An evaluator over the built-in catalog and synergy table.
    #[must_use]
    pub fn builtin(config: ScoringConfig) -> Self {
        Self::new(config, SynergyDatabase::builtin(), CardCatalog::builtin())
    }
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::builtin(ScoringConfig::default())
    }
}

impl<'a> Evaluator<'a> {
    #[must_use]
    pub fn new(config: ScoringConfig, synergy: &'a SynergyDatabase, catalog: &'a CardCatalog) -> Self {
        Self { config, synergy, catalog }
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    #[must_use]
    pub fn synergy(&self) -> &'a SynergyDatabase {
        self.synergy
    }

    /// Evaluate resolved candidates. Never fails; degenerate decks simply
    /// score low.
    #[must_use]
    pub fn evaluate(&self, cards: &[CardCandidate], context: Option<&PlayerContext>) -> EvaluationResult {
        let attack = score_attack(cards, &self.config);
        let defense = score_defense(cards, &self.config);
        let synergy = score_synergy(cards, self.synergy, &self.config);
        let versatility = score_versatility(cards);
        let f2p_friendly = score_f2p(cards);
        let playability = score_playability(cards, &self.config, context);

        let overall_score = overall(
            &self.config.weights,
            [&attack, &defense, &synergy, &versatility, &f2p_friendly, &playability],
        );

        let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();

        EvaluationResult {
            cards: cards.to_vec(),
            attack,
            defense,
            synergy,
            versatility,
            f2p_friendly,
            playability,
            archetype: detect_archetype(cards),
            synergy_report: self.synergy.analyze_deck(&names),
            avg_elixir: round_to(average_elixir(cards), 2),
            overall_score,
            overall_rating: Rating::from_score(overall_score),
        }
    }

    /// Evaluate plain card names, resolved through the player's collection
    /// when a context is given, otherwise through the catalog at max level.
    #[must_use]
    pub fn evaluate_names<S: AsRef<str>>(&self, names: &[S], context: Option<&PlayerContext>) -> EvaluationResult {
        let cards: Vec<CardCandidate> = names
            .iter()
            .map(|n| match context {
                Some(ctx) => ctx.resolve(n.as_ref(), self.catalog),
                None => CardCandidate::from_name(n.as_ref(), self.catalog),
            })
            .collect();
        self.evaluate(&cards, context)
    }
}

/// Evaluate with default configuration against `synergy` and the built-in
/// catalog.
#[must_use]
pub fn evaluate(
    cards: &[CardCandidate],
    synergy: &SynergyDatabase,
    context: Option<&PlayerContext>,
) -> EvaluationResult {
    Evaluator::new(ScoringConfig::default(), synergy, CardCatalog::builtin()).evaluate(cards, context)
}

fn overall(weights: &CategoryWeights, scores: [&CategoryScore; 6]) -> f64 {
    let total = weights.total();
    if total <= 0.0 {
        return 0.0;
    }
    let sum: f64 = weights
        .as_array()
        .iter()
        .zip(scores)
        .map(|(w, s)| w.max(0.0) * s.score)
        .sum();
    round_to((sum / total).clamp(0.0, 10.0), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardAnalysis, CardLevelData, CardRole};
    use crate::core::{Archetype, Scoreable};

    const HOG: [&str; 8] = [
        "Hog Rider", "Fireball", "Zap", "Musketeer", "Mini P.E.K.K.A", "Valkyrie", "Skeletons", "Archers",
    ];

    #[test]
    fn test_hog_deck_example() {
        let result = Evaluator::default().evaluate_names(&HOG, None);

        assert!(result.cards.iter().any(|c| c.role == CardRole::WinCondition));
        assert!((0.0..=10.0).contains(&result.overall_score));
        assert_eq!(result.avg_elixir, 3.25);
        assert_eq!(result.detected_archetype(), Archetype::Cycle);
        assert_eq!(result.deck(), HOG.to_vec());
        assert_eq!(result.overall_score(), result.overall_score);
    }

    #[test]
    fn test_empty_deck_is_total() {
        let result = Evaluator::default().evaluate(&[], None);
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.avg_elixir, 0.0);
    }

    #[test]
    fn test_weights_change_overall() {
        let attack_only = CategoryWeights {
            attack: 1.0,
            defense: 0.0,
            synergy: 0.0,
            versatility: 0.0,
            f2p: 0.0,
            playability: 0.0,
        };
        let evaluator = Evaluator::builtin(ScoringConfig::default().with_weights(attack_only));
        let result = evaluator.evaluate_names(&HOG, None);
        assert!((result.overall_score - result.attack.score).abs() < 0.01);
    }

    #[test]
    fn test_zero_weights_yield_zero() {
        let zero = CategoryWeights {
            attack: 0.0,
            defense: 0.0,
            synergy: 0.0,
            versatility: 0.0,
            f2p: 0.0,
            playability: 0.0,
        };
        let result = Evaluator::builtin(ScoringConfig::default().with_weights(zero)).evaluate_names(&HOG, None);
        assert_eq!(result.overall_score, 0.0);
    }

    #[test]
    fn test_context_resolves_levels() {
        let mut analysis = CardAnalysis::new();
        for name in HOG {
            analysis.insert(name, CardLevelData::new(8, 16));
        }
        let context = PlayerContext::from_analysis(&analysis);
        let evaluator = Evaluator::default();

        let low = evaluator.evaluate_names(&HOG, Some(&context));
        let maxed = evaluator.evaluate_names(&HOG, None);
        assert!(low.cards.iter().all(|c| c.level == 8));
        assert!(low.f2p_friendly.score < maxed.f2p_friendly.score);
    }

    #[test]
    fn test_combat_weight_is_per_evaluator() {
        let roles_only = Evaluator::builtin(ScoringConfig::default().with_combat_weight(0.0));
        let stats_only = Evaluator::builtin(ScoringConfig::default().with_combat_weight(1.0));
        let a = roles_only.evaluate_names(&HOG, None);
        let b = stats_only.evaluate_names(&HOG, None);
        assert_ne!(a.defense.score, b.defense.score);
    }
}
