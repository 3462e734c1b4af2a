//! Crate-wide error type.
//!
//! Errors fall into two groups: configuration errors (unrecognized
//! strategy or archetype identifiers, bad deck counts) raised at the parse
//! boundary, and insufficient-data errors raised by the builders when a
//! collection cannot supply the requested decks. Scoring never fails.

use thiserror::Error;

use super::DECK_SIZE;

/// Errors produced by deck building and war-deck allocation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Strategy key did not match any known strategy.
    #[error("invalid strategy '{0}': must be one of [balanced, aggro, control, cycle, splash, spell]")]
    InvalidStrategy(String),

    /// Archetype key did not match any known archetype.
    #[error(
        "unknown archetype '{0}': must be one of [beatdown, control, cycle, siege, bridge_spam, bait, hybrid]"
    )]
    UnknownArchetype(String),

    /// Fewer eligible cards than a single deck needs.
    #[error("insufficient cards: need {required} eligible cards, found {available}")]
    InsufficientCards { required: usize, available: usize },

    /// Requested war-deck count is zero or exceeds the archetype pool.
    #[error("invalid deck count {requested}: must be between 1 and {max}")]
    InvalidDeckCount { requested: usize, max: usize },

    /// No ordering of archetypes produced a full set of disjoint decks.
    #[error("cannot build {count} no-repeat decks from {available} available cards")]
    NoWarDeckSolution { count: usize, available: usize },
}

impl DeckError {
    /// Shorthand for an insufficient-cards error against a full deck.
    #[must_use]
    pub fn insufficient(available: usize) -> Self {
        Self::InsufficientCards {
            required: DECK_SIZE,
            available,
        }
    }

    /// True for errors caused by the caller's configuration rather than
    /// the collection contents.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidStrategy(_) | Self::UnknownArchetype(_) | Self::InvalidDeckCount { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_surface_verbatim() {
        let err = DeckError::InvalidStrategy("turbo".into());
        assert_eq!(
            err.to_string(),
            "invalid strategy 'turbo': must be one of [balanced, aggro, control, cycle, splash, spell]"
        );

        let err = DeckError::NoWarDeckSolution { count: 2, available: 9 };
        assert_eq!(err.to_string(), "cannot build 2 no-repeat decks from 9 available cards");
    }

    #[test]
    fn test_insufficient_uses_deck_size() {
        let err = DeckError::insufficient(5);
        assert_eq!(err, DeckError::InsufficientCards { required: 8, available: 5 });
        assert_eq!(err.to_string(), "insufficient cards: need 8 eligible cards, found 5");
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_configuration_errors() {
        assert!(DeckError::UnknownArchetype("x".into()).is_configuration());
        assert!(DeckError::InvalidDeckCount { requested: 0, max: 3 }.is_configuration());
    }
}
