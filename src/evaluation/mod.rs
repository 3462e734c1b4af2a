//! Deck scoring engine.
//!
//! `Evaluator::evaluate` scores any set of cards along six categories
//! (attack, defense, synergy, versatility, f2p friendliness, playability),
//! detects the deck's archetype from a signature table, and combines the
//! categories into an overall score. Evaluation is total: it never fails.

pub mod archetype;
pub mod categories;
pub mod config;
pub mod context;
pub mod evaluator;
pub mod rating;
pub mod result;

pub use archetype::{
    confidence_for, detect_archetype, ArchetypeDetection, ArchetypeScore, ArchetypeSignature, ElixirBand,
    SignatureGate, SIGNATURES,
};
pub use categories::average_elixir;
pub use config::{CategoryWeights, ScoringConfig};
pub use context::PlayerContext;
pub use evaluator::{evaluate, Evaluator};
pub use rating::{stars_for, CategoryScore, Rating};
pub use result::EvaluationResult;
