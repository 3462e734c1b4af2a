//! War-deck search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during a war-deck search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Archetype placements attempted (one per search-tree edge).
    pub placements: u64,

    /// Orderings that produced a full set of disjoint decks.
    pub completed: u64,

    /// Placements abandoned because the build failed or overlapped.
    pub pruned: u64,

    /// Single-deck builder invocations.
    pub builds: u64,

    /// Placements answered from the memo table.
    pub cache_hits: u64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fold another partition's counters into these. Time is not summed;
    /// the caller measures wall time for the whole search.
    pub fn merge(&mut self, other: &SearchStats) {
        self.placements += other.placements;
        self.completed += other.completed;
        self.pruned += other.pruned;
        self.builds += other.builds;
        self.cache_hits += other.cache_hits;
    }

    /// Builder invocations per second.
    #[must_use]
    pub fn builds_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.builds as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Share of placements served from the memo table.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        let lookups = self.builds + self.cache_hits;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.builds, 0);
        assert_eq!(stats.cache_hit_rate(), 0.0);
    }

    #[test]
    fn test_stats_rates() {
        let mut stats = SearchStats::new();
        stats.builds = 500;
        stats.cache_hits = 500;
        stats.time_us = 1_000_000;

        assert_eq!(stats.builds_per_second(), 500.0);
        assert_eq!(stats.cache_hit_rate(), 0.5);
    }

    #[test]
    fn test_stats_merge_and_reset() {
        let mut stats = SearchStats::new();
        stats.completed = 2;
        stats.time_us = 10;
        let other = SearchStats {
            completed: 3,
            pruned: 4,
            time_us: 99,
            ..SearchStats::default()
        };

        stats.merge(&other);
        assert_eq!(stats.completed, 5);
        assert_eq!(stats.pruned, 4);
        assert_eq!(stats.time_us, 10);

        stats.reset();
        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.placements = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
