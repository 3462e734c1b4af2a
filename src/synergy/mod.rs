//! Synergy graph over card pairs.
//!
//! - `SynergyDatabase`: symmetric signed lookups, built once from fixed data
//! - `DeckSynergyAnalysis`: per-deck breakdown (totals, highlights, conflicts)
//! - `SynergySuggestion`: cards that would pair well with a deck

pub mod analysis;
pub mod database;
mod pairs;

pub use analysis::{DeckSynergyAnalysis, SynergySuggestion, TOP_SYNERGIES};
pub use database::{SynergyCategory, SynergyDatabase, SynergyPair};
