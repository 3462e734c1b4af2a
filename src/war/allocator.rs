//! War-deck allocation: N decks, no shared cards, best total score.

use std::time::Instant;

use tracing::debug;

use crate::cards::CardAnalysis;
use crate::core::{parse_archetypes, Archetype, DeckError, Result, DECK_SIZE};
use crate::evaluation::{Evaluator, PlayerContext};

use super::config::{DeckScoreSource, WarDeckConfig};
use super::profile::ArchetypeDeckBuilder;
use super::search::{Archetypes, Frame, Search};
use super::set::WarDeckSet;
use super::stats::SearchStats;

/// Most decks one search may field.
pub const MAX_WAR_DECKS: usize = Archetype::ALL.len();

/// Searches archetype orderings for the best set of disjoint decks.
///
/// Decks are built in order, each from the cards the earlier decks left
/// over, so the same archetypes in a different order can yield a different
/// set. The allocator tries every ordering and keeps the highest total,
/// breaking near-ties by the weakest deck's score. Among equal sets the
/// first ordering found wins, which makes results reproducible.
///
/// ## Example
///
/// ```
/// use rust_deckforge::cards::{CardAnalysis, CardLevelData};
/// use rust_deckforge::core::{Archetype, DeckError};
/// use rust_deckforge::war::WarDeckAllocator;
///
/// let mut analysis = CardAnalysis::new();
/// for name in ["Hog Rider", "Cannon", "Fireball", "The Log", "Musketeer", "Skeletons", "Ice Spirit", "Knight", "Zap"] {
///     analysis.insert(name, CardLevelData::new(14, 16));
/// }
///
/// let err = WarDeckAllocator::default()
///     .allocate(&analysis, &[Archetype::Cycle, Archetype::Control])
///     .unwrap_err();
/// assert_eq!(err, DeckError::NoWarDeckSolution { count: 2, available: 9 });
/// ```
#[derive(Clone, Debug)]
pub struct WarDeckAllocator<'a> {
    config: WarDeckConfig,
    builder: ArchetypeDeckBuilder<'a>,
    evaluator: Evaluator<'a>,
}

impl WarDeckAllocator<'static> {
    #[must_use]
    pub fn new(config: WarDeckConfig) -> Self {
        Self::with_builder(config, ArchetypeDeckBuilder::default())
    }
}

impl Default for WarDeckAllocator<'static> {
    fn default() -> Self {
        Self::new(WarDeckConfig::default())
    }
}

impl<'a> WarDeckAllocator<'a> {
    /// Allocator over a custom archetype builder. Evaluation scoring uses
    /// the builder's catalog and synergy table.
    #[must_use]
    pub fn with_builder(config: WarDeckConfig, builder: ArchetypeDeckBuilder<'a>) -> Self {
        let evaluator = Evaluator::new(config.scoring.clone(), builder.synergy(), builder.catalog());
        Self {
            config,
            builder,
            evaluator,
        }
    }

    #[must_use]
    pub fn config(&self) -> &WarDeckConfig {
        &self.config
    }

    /// One deck per listed archetype, searching every ordering of the
    /// list. Repeated archetypes are allowed.
    pub fn allocate(&self, analysis: &CardAnalysis, archetypes: &[Archetype]) -> Result<WarDeckSet> {
        self.check(analysis, archetypes.len(), MAX_WAR_DECKS)?;
        let remaining: Archetypes = archetypes.iter().copied().collect();
        self.search(analysis, remaining, archetypes.len())
    }

    /// [`allocate`](Self::allocate) from archetype keys such as `"cycle"`.
    pub fn allocate_keys<S: AsRef<str>>(&self, analysis: &CardAnalysis, keys: &[S]) -> Result<WarDeckSet> {
        let archetypes = parse_archetypes(keys)?;
        self.allocate(analysis, &archetypes)
    }

    /// `count` decks whose archetypes the search picks from `pool`,
    /// exploring every ordered selection.
    pub fn allocate_from_pool(
        &self,
        analysis: &CardAnalysis,
        pool: &[Archetype],
        count: usize,
    ) -> Result<WarDeckSet> {
        self.check(analysis, count, pool.len().min(MAX_WAR_DECKS))?;
        let remaining: Archetypes = pool.iter().copied().collect();
        self.search(analysis, remaining, count)
    }

    /// [`allocate`](Self::allocate) with the first placement fanned out
    /// across threads. Partitions are reduced in first-archetype order with
    /// [`WarDeckSet::beats`], so exact ties resolve as in the sequential
    /// search. The tolerance comparison is not transitive: when several sets
    /// sit within `tie_tolerance` of each other, the reduction may keep a
    /// different one of those near-equal sets than the sequential search.
    #[cfg(feature = "parallel")]
    pub fn allocate_parallel(&self, analysis: &CardAnalysis, archetypes: &[Archetype]) -> Result<WarDeckSet> {
        use rayon::prelude::*;

        self.check(analysis, archetypes.len(), MAX_WAR_DECKS)?;
        let start = Instant::now();
        let depth = archetypes.len();
        let remaining: Archetypes = archetypes.iter().copied().collect();
        let context = self.context(analysis);

        let mut firsts = Archetypes::new();
        for &archetype in archetypes {
            if !firsts.contains(&archetype) {
                firsts.push(archetype);
            }
        }

        let partitions: Vec<(Option<WarDeckSet>, SearchStats)> = firsts
            .into_vec()
            .into_par_iter()
            .map(|first| {
                Search::new(&self.builder, &self.evaluator, context.as_ref(), analysis, &self.config, depth)
                    .run(Frame::partition(remaining.clone(), first))
            })
            .collect();

        let mut stats = SearchStats::new();
        let mut best: Option<WarDeckSet> = None;
        for (set, partition_stats) in partitions {
            stats.merge(&partition_stats);
            if let Some(set) = set {
                if best.as_ref().map_or(true, |b| set.beats(b, self.config.tie_tolerance)) {
                    best = Some(set);
                }
            }
        }
        stats.time_us = start.elapsed().as_micros() as u64;
        self.finish(analysis, depth, best, stats)
    }

    /// Sequential fallback when the `parallel` feature is off.
    #[cfg(not(feature = "parallel"))]
    pub fn allocate_parallel(&self, analysis: &CardAnalysis, archetypes: &[Archetype]) -> Result<WarDeckSet> {
        self.allocate(analysis, archetypes)
    }

    fn check(&self, analysis: &CardAnalysis, count: usize, max: usize) -> Result<()> {
        if count == 0 || count > max {
            return Err(DeckError::InvalidDeckCount { requested: count, max });
        }
        let available = analysis.eligible_count(std::iter::empty::<&str>());
        if available < DECK_SIZE * count {
            debug!(count, available, "collection too small for war decks");
            return Err(DeckError::NoWarDeckSolution { count, available });
        }
        Ok(())
    }

    fn context(&self, analysis: &CardAnalysis) -> Option<PlayerContext> {
        (self.config.score_source == DeckScoreSource::Evaluation).then(|| PlayerContext::from_analysis(analysis))
    }

    fn search(&self, analysis: &CardAnalysis, remaining: Archetypes, depth: usize) -> Result<WarDeckSet> {
        let start = Instant::now();
        let context = self.context(analysis);
        let (best, mut stats) =
            Search::new(&self.builder, &self.evaluator, context.as_ref(), analysis, &self.config, depth)
                .run(Frame::root(remaining));
        stats.time_us = start.elapsed().as_micros() as u64;
        self.finish(analysis, depth, best, stats)
    }

    fn finish(
        &self,
        analysis: &CardAnalysis,
        depth: usize,
        best: Option<WarDeckSet>,
        stats: SearchStats,
    ) -> Result<WarDeckSet> {
        debug!(
            decks = depth,
            placements = stats.placements,
            completed = stats.completed,
            pruned = stats.pruned,
            builds = stats.builds,
            cache_hits = stats.cache_hits,
            time_us = stats.time_us,
            "war-deck search finished"
        );
        let mut set = best.ok_or_else(|| DeckError::NoWarDeckSolution {
            count: depth,
            available: analysis.eligible_count(std::iter::empty::<&str>()),
        })?;
        set.stats = stats;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardLevelData;
    use rustc_hash::FxHashSet;

    const COLLECTION: &[(&str, u8)] = &[
        ("Hog Rider", 14), ("Golem", 12), ("Miner", 13), ("X-Bow", 12), ("Goblin Barrel", 14),
        ("Giant", 13), ("Cannon", 14), ("Tesla", 13), ("Inferno Tower", 12), ("Bomb Tower", 12),
        ("Fireball", 14), ("Poison", 13), ("Rocket", 12), ("Lightning", 11), ("The Log", 13),
        ("Zap", 14), ("Arrows", 14), ("Tornado", 12), ("Musketeer", 14), ("Valkyrie", 13),
        ("Baby Dragon", 13), ("Wizard", 12), ("Mega Minion", 14), ("Princess", 12),
        ("Night Witch", 11), ("Dark Prince", 13), ("Knight", 14), ("Skeletons", 14),
        ("Ice Spirit", 14), ("Ice Golem", 13), ("Bats", 13), ("Goblin Gang", 14),
    ];

    fn collection() -> CardAnalysis {
        let mut analysis = CardAnalysis::new();
        for &(name, level) in COLLECTION {
            analysis.insert(name, CardLevelData::new(level, 16));
        }
        analysis
    }

    fn assert_no_repeats(set: &WarDeckSet) {
        let cards: FxHashSet<String> = set.cards().map(|c| c.to_lowercase()).collect();
        assert_eq!(cards.len(), DECK_SIZE * set.len());
        for deck in &set.decks {
            assert!(deck.deck.is_complete());
        }
    }

    #[test]
    fn test_invalid_deck_count() {
        let allocator = WarDeckAllocator::default();
        let err = allocator.allocate(&collection(), &[]).unwrap_err();
        assert_eq!(err, DeckError::InvalidDeckCount { requested: 0, max: MAX_WAR_DECKS });

        let err = allocator
            .allocate_from_pool(&collection(), &[Archetype::Cycle, Archetype::Bait], 3)
            .unwrap_err();
        assert_eq!(err, DeckError::InvalidDeckCount { requested: 3, max: 2 });
        assert!(err.is_configuration());
    }

    #[test]
    fn test_case_variants_do_not_pad_collection() {
        let mut analysis = CardAnalysis::new();
        for &(name, level) in &COLLECTION[..15] {
            analysis.insert(name, CardLevelData::new(level, 16));
        }
        analysis.insert("hog rider", CardLevelData::new(14, 16));
        assert_eq!(analysis.len(), 16);

        let err = WarDeckAllocator::default()
            .allocate(&analysis, &[Archetype::Cycle, Archetype::Control])
            .unwrap_err();
        assert_eq!(err, DeckError::NoWarDeckSolution { count: 2, available: 15 });
    }

    #[test]
    fn test_unknown_archetype_key() {
        let err = WarDeckAllocator::default()
            .allocate_keys(&collection(), &["cycle", "turtle"])
            .unwrap_err();
        assert!(matches!(err, DeckError::UnknownArchetype(_)));
    }

    #[test]
    fn test_two_decks_share_no_cards() {
        let set = WarDeckAllocator::default()
            .allocate(&collection(), &[Archetype::Cycle, Archetype::Control])
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_no_repeats(&set);

        let mut fielded: Vec<Archetype> = set.archetypes().collect();
        fielded.sort();
        assert_eq!(fielded, vec![Archetype::Control, Archetype::Cycle]);
        assert_eq!(set.stats.completed, 2);
    }

    #[test]
    fn test_totals_are_consistent() {
        let set = WarDeckAllocator::default()
            .allocate(&collection(), &[Archetype::Beatdown, Archetype::Siege, Archetype::Bait])
            .unwrap();
        assert_no_repeats(&set);
        let total: f64 = set.decks.iter().map(|d| d.score).sum();
        assert!((set.total_score - total).abs() < 1e-9);
        for deck in &set.decks {
            assert!(set.min_score <= deck.score);
            assert!((deck.score - deck.deck.total_score()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_duplicate_archetypes_explored_once() {
        let set = WarDeckAllocator::default()
            .allocate(&collection(), &[Archetype::Cycle, Archetype::Cycle])
            .unwrap();
        assert_no_repeats(&set);
        assert_eq!(set.stats.completed, 1);
        assert_eq!(set.stats.placements, 2);
    }

    #[test]
    fn test_memoization_does_not_change_result() {
        let archetypes = [Archetype::Cycle, Archetype::Control, Archetype::Bait];
        let memo = WarDeckAllocator::default().allocate(&collection(), &archetypes).unwrap();
        let plain = WarDeckAllocator::new(WarDeckConfig::default().with_memoize(false))
            .allocate(&collection(), &archetypes)
            .unwrap();
        assert_eq!(memo.decks, plain.decks);
        assert_eq!(plain.stats.cache_hits, 0);
        assert_eq!(memo.stats.builds + memo.stats.cache_hits, plain.stats.builds);
    }

    #[test]
    fn test_deterministic() {
        let archetypes = [Archetype::Hybrid, Archetype::Cycle, Archetype::Beatdown];
        let first = WarDeckAllocator::default().allocate(&collection(), &archetypes).unwrap();
        let second = WarDeckAllocator::default().allocate(&collection(), &archetypes).unwrap();
        assert_eq!(first.decks, second.decks);
        assert_eq!(first.total_score, second.total_score);
    }

    #[test]
    fn test_pool_search_is_at_least_as_good() {
        let analysis = collection();
        let allocator = WarDeckAllocator::default();
        let fixed = allocator
            .allocate(&analysis, &[Archetype::Cycle, Archetype::Siege])
            .unwrap();
        let pooled = allocator
            .allocate_from_pool(&analysis, &[Archetype::Cycle, Archetype::Siege, Archetype::Bait], 2)
            .unwrap();
        assert_eq!(pooled.len(), 2);
        assert_no_repeats(&pooled);
        assert!(pooled.total_score + 1e-3 >= fixed.total_score);
    }

    #[test]
    fn test_evaluation_score_source() {
        let allocator = WarDeckAllocator::new(WarDeckConfig::default().with_score_source(DeckScoreSource::Evaluation));
        let set = allocator
            .allocate(&collection(), &[Archetype::Cycle, Archetype::Beatdown])
            .unwrap();
        for deck in &set.decks {
            assert!((0.0..=10.0).contains(&deck.score));
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let archetypes = [Archetype::Cycle, Archetype::Control, Archetype::Siege];
        let allocator = WarDeckAllocator::default();
        let sequential = allocator.allocate(&collection(), &archetypes).unwrap();
        let parallel = allocator.allocate_parallel(&collection(), &archetypes).unwrap();
        assert_eq!(sequential.decks, parallel.decks);
    }
}
