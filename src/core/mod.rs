//! Core types shared by every module.
//!
//! - `error`: `DeckError` and the crate `Result` alias
//! - `archetype`: the `Archetype` enum and its parser
//! - `scoreable`: the `Scoreable` capability for ranked results

pub mod archetype;
pub mod error;
pub mod scoreable;

pub use archetype::{parse_archetypes, Archetype};
pub use error::{DeckError, Result};
pub use scoreable::{best_of, rank_by_score, Scoreable};

/// Cards in a complete deck.
pub const DECK_SIZE: usize = 8;

/// Highest card level a player can reach.
pub const MAX_CARD_LEVEL: u8 = 16;

/// Round to a fixed number of decimal places.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Truncate toward zero at a fixed number of decimal places.
#[must_use]
pub fn truncate_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).trunc() / factor
}

/// Normalize a card name for set membership checks.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
