//! Explicit backtracking over archetype orderings.
//!
//! Each [`Frame`] holds the cards used so far, the partial deck list and
//! the archetypes still to place. Frames live on a heap-allocated stack, so
//! depth is bounded by the deck count rather than the call stack. The used
//! set is an `im::OrdSet`; child frames share structure with their parent
//! and the set doubles as the memo key.

use im::OrdSet;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::builder::DeckRecommendation;
use crate::cards::CardAnalysis;
use crate::core::{normalize_name, Archetype};
use crate::evaluation::{Evaluator, PlayerContext};

use super::config::{DeckScoreSource, WarDeckConfig};
use super::profile::ArchetypeDeckBuilder;
use super::set::{WarDeckCandidate, WarDeckSet};
use super::stats::SearchStats;

pub(crate) type Archetypes = SmallVec<[Archetype; 8]>;

type MemoKey = (Archetype, OrdSet<String>);

/// One node of the search tree.
#[derive(Clone, Debug)]
pub(crate) struct Frame {
    used: OrdSet<String>,
    decks: Vec<WarDeckCandidate>,
    remaining: Archetypes,
    cursor: usize,
    /// Archetypes already placed at this depth; equal archetypes later in
    /// `remaining` would only repeat the same subtree.
    tried: Archetypes,
}

impl Frame {
    pub(crate) fn root(remaining: Archetypes) -> Self {
        Self {
            used: OrdSet::new(),
            decks: Vec::new(),
            remaining,
            cursor: 0,
            tried: Archetypes::new(),
        }
    }

    /// A root whose first placement is restricted to `first`.
    #[cfg(feature = "parallel")]
    pub(crate) fn partition(remaining: Archetypes, first: Archetype) -> Self {
        let mut frame = Self::root(remaining);
        for &archetype in &frame.remaining {
            if archetype != first && !frame.tried.contains(&archetype) {
                frame.tried.push(archetype);
            }
        }
        frame
    }

    /// Next untried archetype at this depth, with its index in `remaining`.
    fn next_choice(&mut self) -> Option<(usize, Archetype)> {
        while self.cursor < self.remaining.len() {
            let index = self.cursor;
            self.cursor += 1;
            let archetype = self.remaining[index];
            if self.tried.contains(&archetype) {
                continue;
            }
            self.tried.push(archetype);
            return Some((index, archetype));
        }
        None
    }

    fn child(&self, index: usize, candidate: WarDeckCandidate) -> Self {
        let mut used = self.used.clone();
        for card in &candidate.deck.cards {
            used.insert(normalize_name(card));
        }
        let mut decks = self.decks.clone();
        decks.push(candidate);
        let mut remaining = self.remaining.clone();
        remaining.remove(index);
        Self {
            used,
            decks,
            remaining,
            cursor: 0,
            tried: Archetypes::new(),
        }
    }
}

/// Single-threaded search state: memo table, counters and collaborators.
pub(crate) struct Search<'s, 'a> {
    builder: &'s ArchetypeDeckBuilder<'a>,
    evaluator: &'s Evaluator<'a>,
    context: Option<&'s PlayerContext>,
    analysis: &'s CardAnalysis,
    config: &'s WarDeckConfig,
    depth: usize,
    memo: FxHashMap<MemoKey, Option<(DeckRecommendation, f64)>>,
    stats: SearchStats,
}

impl<'s, 'a> Search<'s, 'a> {
    pub(crate) fn new(
        builder: &'s ArchetypeDeckBuilder<'a>,
        evaluator: &'s Evaluator<'a>,
        context: Option<&'s PlayerContext>,
        analysis: &'s CardAnalysis,
        config: &'s WarDeckConfig,
        depth: usize,
    ) -> Self {
        Self {
            builder,
            evaluator,
            context,
            analysis,
            config,
            depth,
            memo: FxHashMap::default(),
            stats: SearchStats::new(),
        }
    }

    /// Explore every ordering reachable from `root`, keeping the first set
    /// no later set beats.
    pub(crate) fn run(mut self, root: Frame) -> (Option<WarDeckSet>, SearchStats) {
        let tolerance = self.config.tie_tolerance;
        let mut best: Option<WarDeckSet> = None;
        let mut stack = vec![root];

        while let Some(frame) = stack.last_mut() {
            if frame.decks.len() == self.depth {
                let Some(done) = stack.pop() else { break };
                self.stats.completed += 1;
                let set = WarDeckSet::from_decks(done.decks);
                if best.as_ref().map_or(true, |b| set.beats(b, tolerance)) {
                    debug!(total = set.total_score, min = set.min_score, "new best war set");
                    best = Some(set);
                }
                continue;
            }

            let Some((index, archetype)) = frame.next_choice() else {
                stack.pop();
                continue;
            };
            self.stats.placements += 1;

            let used = frame.used.clone();
            match self.place(archetype, used) {
                Some((deck, score)) => {
                    let child = frame.child(index, WarDeckCandidate { archetype, deck, score });
                    stack.push(child);
                }
                None => self.stats.pruned += 1,
            }
        }

        (best, self.stats)
    }

    fn place(&mut self, archetype: Archetype, used: OrdSet<String>) -> Option<(DeckRecommendation, f64)> {
        if !self.config.memoize {
            return self.build(archetype, &used);
        }
        let key = (archetype, used);
        if let Some(hit) = self.memo.get(&key) {
            self.stats.cache_hits += 1;
            return hit.clone();
        }
        let built = self.build(archetype, &key.1);
        self.memo.insert(key, built.clone());
        built
    }

    fn build(&mut self, archetype: Archetype, used: &OrdSet<String>) -> Option<(DeckRecommendation, f64)> {
        self.stats.builds += 1;
        let view = self.analysis.without(used.iter());
        let deck = match self.builder.build(archetype, &view) {
            Ok(deck) => deck,
            Err(err) => {
                trace!(%archetype, used = used.len(), %err, "placement failed");
                return None;
            }
        };
        if deck.cards.iter().any(|card| used.contains(&normalize_name(card))) {
            trace!(%archetype, "placement overlaps used cards");
            return None;
        }
        let score = match self.config.score_source {
            DeckScoreSource::CardContribution => deck.total_score(),
            DeckScoreSource::Evaluation => self.evaluator.evaluate_names(&deck.cards, self.context).overall_score,
        };
        Some((deck, score))
    }
}
