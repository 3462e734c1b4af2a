//! War-deck allocation.
//!
//! Builds N decks for one player such that no card appears in more than
//! one deck. [`ArchetypeDeckBuilder`] steers the single-deck builder toward
//! an archetype; [`WarDeckAllocator`] searches archetype orderings with an
//! explicit backtracking stack and keeps the best [`WarDeckSet`].

mod allocator;
mod config;
mod profile;
mod search;
mod set;
mod stats;

pub use allocator::{WarDeckAllocator, MAX_WAR_DECKS};
pub use config::{DeckScoreSource, WarDeckConfig};
pub use profile::{ArchetypeDeckBuilder, ArchetypeProfile, ELIXIR_TOLERANCE, PREFERRED_BOOST};
pub use set::{WarDeckCandidate, WarDeckSet};
pub use stats::SearchStats;
