//! Single-deck builder.
//!
//! A [`DeckBuilder`] turns a player's collection into one eight-card deck
//! under a [`Strategy`]: every card gets a contribution score from
//! [`CardScorer`], role quotas are filled best-first, and the remainder is
//! backfilled by raw score.

mod config;
mod deck_builder;
mod recommendation;
mod scoring;
mod strategy;

pub use config::BuilderConfig;
pub use deck_builder::DeckBuilder;
pub use recommendation::{CardDetail, DeckRecommendation};
pub use scoring::CardScorer;
pub use strategy::{Strategy, StrategyProfile};
