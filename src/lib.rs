//! # rust-deckforge
//!
//! A deck analysis and optimization engine for an eight-card collectible
//! card battler.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Identical inputs always produce identical scores,
//!    decks and war-deck sets. Every ranking breaks ties by card name or
//!    search order; no randomness anywhere.
//!
//! 2. **Configuration Over Globals**: Category weights, combat-stat blend,
//!    synergy saturation and search tolerances live on explicit config
//!    values passed to constructors.
//!
//! 3. **Total Scoring**: Evaluation never fails. Degenerate decks score
//!    low, so search loops need no error handling around scoring.
//!
//! ## Architecture
//!
//! - **Declarative Tables**: Cards, synergy pairs, archetype signatures and
//!   archetype build profiles are static tables loaded once.
//!
//! - **Persistent Data Structures**: The war-deck search keeps its used-card
//!   set in an `im::OrdSet`, so backtracking frames share structure and the
//!   set doubles as a memo key.
//!
//! ## Modules
//!
//! - `core`: Archetypes, errors, the `Scoreable` capability
//! - `cards`: Card catalog, roles, rarities, combat stats, player collections
//! - `synergy`: Pairwise synergy database and deck synergy reports
//! - `evaluation`: Six-category deck scoring and archetype detection
//! - `builder`: Strategy-driven single-deck builder
//! - `war`: Disjoint multi-deck allocation

pub mod builder;
pub mod cards;
pub mod core;
pub mod evaluation;
pub mod synergy;
pub mod war;

// Re-export commonly used types
pub use crate::core::{Archetype, DeckError, Result, Scoreable, DECK_SIZE};

pub use crate::cards::{
    CardAnalysis, CardCandidate, CardCatalog, CardDefinition, CardLevelData, CardRole, Rarity,
};

pub use crate::synergy::{DeckSynergyAnalysis, SynergyCategory, SynergyDatabase, SynergyPair};

pub use crate::evaluation::{
    evaluate, ArchetypeDetection, CategoryScore, CategoryWeights, EvaluationResult, Evaluator,
    PlayerContext, Rating, ScoringConfig,
};

pub use crate::builder::{BuilderConfig, DeckBuilder, DeckRecommendation, Strategy};

pub use crate::war::{
    ArchetypeDeckBuilder, DeckScoreSource, SearchStats, WarDeckAllocator, WarDeckConfig, WarDeckSet,
};
