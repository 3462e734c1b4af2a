//! Quota-driven single-deck construction.
//!
//! The builder ranks every eligible card by its contribution score, places
//! forced includes, fills each role's quota with the best remaining cards,
//! then backfills to a full deck with the strongest leftovers. Every
//! comparison falls back to card name, so identical inputs always produce
//! identical decks.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::cards::{CardAnalysis, CardCandidate, CardCatalog, CardRole, RoleTable};
use crate::core::{normalize_name, truncate_to, DeckError, Result, DECK_SIZE};
use crate::synergy::SynergyDatabase;

use super::config::BuilderConfig;
use super::recommendation::{CardDetail, DeckRecommendation};
use super::scoring::CardScorer;
use super::strategy::StrategyProfile;

const HIGH_ELIXIR_NOTE: f64 = 3.8;
const LOW_ELIXIR_NOTE: f64 = 2.8;

/// A candidate with its contribution score.
#[derive(Clone, Debug)]
struct Ranked {
    card: CardCandidate,
    key: String,
    score: f64,
}

/// Builds one deck from a player's collection.
///
/// ## Example
///
/// ```
/// use rust_deckforge::builder::{BuilderConfig, DeckBuilder, Strategy};
/// use rust_deckforge::cards::{CardAnalysis, CardLevelData};
///
/// let mut analysis = CardAnalysis::new();
/// for name in [
///     "Hog Rider", "Cannon", "Fireball", "The Log", "Musketeer",
///     "Valkyrie", "Ice Spirit", "Skeletons", "Knight", "Zap",
/// ] {
///     analysis.insert(name, CardLevelData::new(14, 16));
/// }
///
/// let builder = DeckBuilder::new(BuilderConfig::default().with_strategy(Strategy::Cycle));
/// let deck = builder.build(&analysis).unwrap();
/// assert!(deck.is_complete());
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder<'a> {
    config: BuilderConfig,
    profile: StrategyProfile,
    catalog: &'a CardCatalog,
    synergy: &'a SynergyDatabase,
}

impl DeckBuilder<'static> {
    /// Builder over the built-in catalog and synergy table.
    #[must_use]
    pub fn new(config: BuilderConfig) -> Self {
        Self::with_data(config, CardCatalog::builtin(), SynergyDatabase::builtin())
    }

    /// Default configuration under the strategy named by `key`.
    pub fn for_strategy(key: &str) -> Result<Self> {
        Ok(Self::new(BuilderConfig::default().with_strategy_key(key)?))
    }
}

impl<'a> DeckBuilder<'a> {
    #[must_use]
    pub fn with_data(config: BuilderConfig, catalog: &'a CardCatalog, synergy: &'a SynergyDatabase) -> Self {
        let profile = config.profile();
        Self {
            config,
            profile,
            catalog,
            synergy,
        }
    }

    #[must_use]
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    #[must_use]
    pub fn profile(&self) -> &StrategyProfile {
        &self.profile
    }

    /// Build a deck from the player's collection.
    ///
    /// Fails with [`DeckError::InsufficientCards`] when fewer than eight
    /// cards remain after exclusions.
    pub fn build(&self, analysis: &CardAnalysis) -> Result<DeckRecommendation> {
        let pool = self.rank(analysis);
        if pool.len() < DECK_SIZE {
            debug!(
                strategy = %self.config.strategy,
                available = pool.len(),
                "not enough eligible cards"
            );
            return Err(DeckError::insufficient(pool.len()));
        }

        let mut notes = Vec::new();
        let mut taken = vec![false; pool.len()];
        let mut picks: Vec<(usize, f64)> = Vec::with_capacity(DECK_SIZE);
        let mut quotas = self.profile.quotas;

        for name in &self.config.include {
            if picks.len() == DECK_SIZE {
                notes.push(format!("No room left for requested card {name}."));
                continue;
            }
            let key = normalize_name(name);
            match pool.iter().position(|r| r.key == key) {
                Some(index) if taken[index] => {}
                Some(index) => {
                    taken[index] = true;
                    picks.push((index, pool[index].score));
                    let role = pool[index].card.role;
                    if quotas[role] > 0 {
                        quotas[role] -= 1;
                    } else {
                        self.shrink_cheapest_quota(&pool, &taken, &mut quotas);
                    }
                }
                None => notes.push(format!("Requested card {name} is not available.")),
            }
        }
        if !picks.is_empty() {
            debug!(forced = picks.len(), ?quotas, "placed included cards");
        }

        for role in CardRole::ALL {
            for _ in 0..quotas[role] {
                if picks.len() == DECK_SIZE {
                    break;
                }
                match self.best_remaining(&pool, &taken, &picks, Some(role)) {
                    Some((index, score)) => {
                        trace!(card = %pool[index].card.name, %role, score, "quota pick");
                        taken[index] = true;
                        picks.push((index, score));
                    }
                    None => break,
                }
            }
        }

        debug!(strategy = %self.config.strategy, picked = picks.len(), "role quotas filled");

        while picks.len() < DECK_SIZE {
            match self.best_remaining(&pool, &taken, &picks, None) {
                Some((index, score)) => {
                    trace!(card = %pool[index].card.name, score, "backfill pick");
                    taken[index] = true;
                    picks.push((index, score));
                }
                None => break,
            }
        }

        let recommendation = self.finish(&pool, &picks, notes);
        debug!(
            strategy = %recommendation.strategy,
            avg_elixir = recommendation.avg_elixir,
            total = recommendation.total_score(),
            "built deck"
        );
        Ok(recommendation)
    }

    /// Every eligible card with its score, best first, names breaking ties.
    /// Case variants of one name collapse to a single entry.
    fn rank(&self, analysis: &CardAnalysis) -> Vec<Ranked> {
        let excluded: FxHashSet<String> = self.config.exclude.iter().map(|n| normalize_name(n)).collect();
        let scorer = CardScorer::new(&self.profile, self.config.combat_weight);

        let mut pool: Vec<Ranked> = analysis
            .iter()
            .filter_map(|(name, data)| {
                let key = normalize_name(name);
                if excluded.contains(&key) {
                    return None;
                }
                let card = CardCandidate::from_level_data(name, data, self.catalog);
                let score = scorer.score(&card);
                Some(Ranked { card, key, score })
            })
            .collect();

        pool.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.card.name.cmp(&b.card.name)));
        // Names differing only in case are one card; keep its best entry.
        let mut seen = FxHashSet::default();
        pool.retain(|r| seen.insert(r.key.clone()));
        pool
    }

    /// An include overflowed its role; give up the open slot whose best
    /// available filler scores lowest.
    fn shrink_cheapest_quota(&self, pool: &[Ranked], taken: &[bool], quotas: &mut RoleTable<u8>) {
        let mut cheapest: Option<(CardRole, f64)> = None;
        for (role, quota) in quotas.iter() {
            if quota == 0 {
                continue;
            }
            let marginal = pool
                .iter()
                .zip(taken)
                .filter(|(r, t)| !**t && r.card.role == role)
                .nth(usize::from(quota) - 1)
                .map_or(f64::NEG_INFINITY, |(r, _)| r.score);
            if cheapest.map_or(true, |(_, s)| marginal < s) {
                cheapest = Some((role, marginal));
            }
        }
        if let Some((role, _)) = cheapest {
            quotas[role] -= 1;
        }
    }

    /// Best unpicked card, optionally restricted to one role, with the
    /// synergy bonus against the cards picked so far.
    fn best_remaining(
        &self,
        pool: &[Ranked],
        taken: &[bool],
        picks: &[(usize, f64)],
        role: Option<CardRole>,
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (index, ranked) in pool.iter().enumerate() {
            if taken[index] || role.is_some_and(|r| r != ranked.card.role) {
                continue;
            }
            let score = ranked.score + self.synergy_bonus(pool, picks, &ranked.card.name);
            let better = match best {
                None => true,
                Some((b, s)) => score > s || (score == s && ranked.card.name < pool[b].card.name),
            };
            if better {
                best = Some((index, score));
            }
        }
        best
    }

    fn synergy_bonus(&self, pool: &[Ranked], picks: &[(usize, f64)], name: &str) -> f64 {
        let Some(weight) = self.config.synergy_weight else {
            return 0.0;
        };
        if picks.is_empty() {
            return 0.0;
        }
        let positive: f64 = picks
            .iter()
            .map(|&(i, _)| self.synergy.lookup(name, &pool[i].card.name).max(0.0))
            .sum();
        (positive / picks.len() as f64).min(1.0) * weight
    }

    fn finish(&self, pool: &[Ranked], picks: &[(usize, f64)], mut notes: Vec<String>) -> DeckRecommendation {
        let details: Vec<CardDetail> = picks
            .iter()
            .map(|&(i, score)| {
                let card = &pool[i].card;
                CardDetail {
                    name: card.name.clone(),
                    level: card.level,
                    max_level: card.max_level,
                    rarity: card.rarity,
                    elixir: card.elixir,
                    role: card.role,
                    score: truncate_to(score, 3),
                    evolution_level: card.evolution_level,
                }
            })
            .collect();

        let total_elixir: u32 = details.iter().map(|d| u32::from(d.elixir)).sum();
        let avg_elixir = if details.is_empty() {
            0.0
        } else {
            truncate_to(f64::from(total_elixir) / details.len() as f64, 2)
        };

        let roles = RoleTable::count(details.iter().map(|d| d.role));
        if roles[CardRole::WinCondition] == 0 {
            notes.push("No win condition found; selected highest power cards instead.".to_string());
        }
        if roles[CardRole::Building] == 0 {
            notes.push("No defensive building available; play troops high to kite.".to_string());
        }
        if roles[CardRole::SpellBig] + roles[CardRole::SpellSmall] == 0 {
            notes.push("No spell picked; beware of swarm matchups.".to_string());
        }
        if avg_elixir > HIGH_ELIXIR_NOTE {
            notes.push("High average elixir; play patiently and build pushes.".to_string());
        } else if avg_elixir < LOW_ELIXIR_NOTE {
            notes.push("Low average elixir; pressure often and out-cycle counters.".to_string());
        }

        let evolution_slots = self.evolution_slots(&details);
        if !evolution_slots.is_empty() {
            notes.push(format!("Evolution slots: {}", evolution_slots.join(", ")));
        }

        DeckRecommendation {
            strategy: self.config.strategy,
            cards: details.iter().map(|d| d.name.clone()).collect(),
            details,
            avg_elixir,
            evolution_slots,
            notes,
        }
    }

    /// Evolved cards ordered by role priority, then score, then name.
    fn evolution_slots(&self, details: &[CardDetail]) -> Vec<String> {
        let mut evolved: Vec<&CardDetail> = details.iter().filter(|d| d.evolution_level > 0).collect();
        evolved.sort_by(|a, b| {
            a.role
                .evolution_priority()
                .cmp(&b.role.evolution_priority())
                .then_with(|| b.score.total_cmp(&a.score))
                .then_with(|| a.name.cmp(&b.name))
        });
        evolved
            .into_iter()
            .take(self.config.evolution_slot_limit)
            .map(|d| d.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Strategy;
    use crate::cards::CardLevelData;

    const COLLECTION: &[&str] = &[
        "Hog Rider", "Golem", "Miner", "Cannon", "Inferno Tower", "Fireball", "Poison",
        "The Log", "Zap", "Arrows", "Musketeer", "Valkyrie", "Baby Dragon", "Wizard",
        "Mega Minion", "Knight", "Skeletons", "Ice Spirit", "Ice Golem", "Bats",
    ];

    fn collection(level: u8) -> CardAnalysis {
        let mut analysis = CardAnalysis::new();
        for name in COLLECTION {
            analysis.insert(*name, CardLevelData::new(level, 16));
        }
        analysis
    }

    fn build(config: BuilderConfig, analysis: &CardAnalysis) -> DeckRecommendation {
        DeckBuilder::new(config).build(analysis).unwrap()
    }

    #[test]
    fn test_full_deck_of_distinct_cards() {
        for strategy in Strategy::ALL {
            let deck = build(BuilderConfig::default().with_strategy(strategy), &collection(14));
            assert!(deck.is_complete(), "{strategy}: {:?}", deck.cards);
            assert_eq!(deck.details.len(), DECK_SIZE);
        }
    }

    #[test]
    fn test_quotas_respected_when_supply_allows() {
        let deck = build(BuilderConfig::default(), &collection(14));
        assert_eq!(deck.count_role(CardRole::WinCondition), 1);
        assert_eq!(deck.count_role(CardRole::Building), 1);
        assert_eq!(deck.count_role(CardRole::SpellBig), 1);
        assert_eq!(deck.count_role(CardRole::SpellSmall), 1);
        assert_eq!(deck.count_role(CardRole::Support), 2);
        assert_eq!(deck.count_role(CardRole::Cycle), 2);
    }

    #[test]
    fn test_insufficient_cards() {
        let analysis = collection(14).filtered(|name, _| name.starts_with('H') || name.starts_with('G'));
        let err = DeckBuilder::new(BuilderConfig::default()).build(&analysis).unwrap_err();
        assert_eq!(err, DeckError::insufficient(analysis.len()));
    }

    #[test]
    fn test_case_variants_count_once() {
        let mut analysis = CardAnalysis::new();
        for name in [
            "Hog Rider", "hog rider", "Cannon", "Fireball", "The Log", "Musketeer", "Skeletons", "Ice Spirit",
        ] {
            analysis.insert(name, CardLevelData::new(14, 16));
        }
        let err = DeckBuilder::new(BuilderConfig::default()).build(&analysis).unwrap_err();
        assert_eq!(err, DeckError::insufficient(7));

        analysis.insert("Valkyrie", CardLevelData::new(14, 16));
        let deck = build(BuilderConfig::default(), &analysis);
        assert!(deck.is_complete(), "{:?}", deck.cards);
    }

    #[test]
    fn test_exclusions_reduce_pool() {
        let analysis = collection(14);
        let excluded: Vec<&str> = COLLECTION[..13].to_vec();
        let err = DeckBuilder::new(BuilderConfig::default().with_exclude(excluded))
            .build(&analysis)
            .unwrap_err();
        assert!(matches!(err, DeckError::InsufficientCards { available: 7, .. }));
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let deck = build(BuilderConfig::default().with_exclude(["hog rider", "MINER"]), &collection(14));
        assert!(!deck.contains("Hog Rider"));
        assert!(!deck.contains("Miner"));
    }

    #[test]
    fn test_includes_are_placed() {
        let config = BuilderConfig::default().with_include(["Golem", "Wizard", "Missing Card"]);
        let deck = build(config, &collection(14));
        assert!(deck.contains("Golem"));
        assert!(deck.contains("Wizard"));
        assert_eq!(deck.cards[0], "Golem");
        assert!(deck.notes.iter().any(|n| n.contains("Missing Card")));
        assert!(deck.is_complete());
    }

    #[test]
    fn test_overflowing_includes_still_fit() {
        let config = BuilderConfig::default().with_include(["Hog Rider", "Golem", "Miner"]);
        let deck = build(config, &collection(14));
        assert!(deck.is_complete());
        assert_eq!(deck.count_role(CardRole::WinCondition), 3);
    }

    #[test]
    fn test_cycle_is_cheaper_than_control() {
        let analysis = collection(14);
        let cycle = build(BuilderConfig::default().with_strategy(Strategy::Cycle), &analysis);
        let control = build(BuilderConfig::default().with_strategy(Strategy::Control), &analysis);
        assert!(cycle.avg_elixir < control.avg_elixir);
    }

    #[test]
    fn test_deterministic() {
        let analysis = collection(13);
        let config = BuilderConfig::default().with_synergy(0.15);
        assert_eq!(build(config.clone(), &analysis), build(config, &analysis));
    }

    #[test]
    fn test_evolution_slots_limited() {
        let mut analysis = collection(14);
        for name in ["Knight", "Skeletons", "Bats", "Valkyrie", "Cannon"] {
            analysis.insert(name, CardLevelData::new(14, 16).with_evolution(1, 1));
        }
        let deck = build(BuilderConfig::default(), &analysis);
        assert!(deck.evolution_slots.len() <= 2);
        for name in &deck.evolution_slots {
            assert!(deck.contains(name));
        }
        let none = build(BuilderConfig::default().with_evolution_slots(0), &analysis);
        assert!(none.evolution_slots.is_empty());
    }

    #[test]
    fn test_missing_role_notes() {
        let mut analysis = CardAnalysis::new();
        for name in ["Knight", "Skeletons", "Ice Spirit", "Bats", "Musketeer", "Valkyrie", "Wizard", "Ice Golem"] {
            analysis.insert(name, CardLevelData::new(14, 16));
        }
        let deck = build(BuilderConfig::default(), &analysis);
        assert!(deck.is_complete());
        assert!(deck.notes.iter().any(|n| n.starts_with("No win condition")));
        assert!(deck.notes.iter().any(|n| n.starts_with("No defensive building")));
        assert!(deck.notes.iter().any(|n| n.starts_with("No spell")));
    }

    #[test]
    fn test_details_match_cards() {
        let deck = build(BuilderConfig::default(), &collection(14));
        let names: Vec<&str> = deck.details.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, deck.cards.iter().map(String::as_str).collect::<Vec<_>>());
        let elixir: u32 = deck.details.iter().map(|d| u32::from(d.elixir)).sum();
        assert!((deck.avg_elixir - truncate_to(f64::from(elixir) / 8.0, 2)).abs() < 1e-9);
    }
}
