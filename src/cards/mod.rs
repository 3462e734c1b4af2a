//! Card model: definitions, catalog, player analysis and candidates.
//!
//! ## Key Types
//!
//! - `CardRole`: Functional category (win condition, building, spells, support, cycle)
//! - `Rarity`: Rarity tier with its weighting tables
//! - `CombatStats`: Hitpoints, DPS, range and targets of a unit
//! - `CardDefinition`: Static card data
//! - `CardCatalog`: Definition lookup and role inference
//! - `CardAnalysis`: A player's levels per card
//! - `CardCandidate`: Catalog data merged with player data, ready to score

mod builtin;

pub mod analysis;
pub mod candidate;
pub mod catalog;
pub mod definition;
pub mod rarity;
pub mod role;
pub mod stats;

pub use analysis::{CardAnalysis, CardLevelData};
pub use candidate::CardCandidate;
pub use catalog::{CardCatalog, DEFAULT_ELIXIR};
pub use definition::CardDefinition;
pub use rarity::Rarity;
pub use role::{CardRole, RoleTable};
pub use stats::{CombatStats, Targets};
