//! Shared fixtures for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use rust_deckforge::cards::{CardAnalysis, CardLevelData};
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize test logging once. Level comes from `TEST_LOG`, then
/// `RUST_LOG`, then `"warn"`.
pub fn init_tracing() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// The example deck used throughout the scoring tests.
pub const HOG_DECK: [&str; 8] = [
    "Hog Rider",
    "Fireball",
    "Zap",
    "Musketeer",
    "Mini P.E.K.K.A",
    "Valkyrie",
    "Skeletons",
    "Archers",
];

/// A mid-game collection with at least two cards in every role.
pub const COLLECTION: &[(&str, u8)] = &[
    ("Hog Rider", 14),
    ("Golem", 12),
    ("Miner", 13),
    ("X-Bow", 12),
    ("Goblin Barrel", 14),
    ("Giant", 13),
    ("Royal Giant", 12),
    ("Cannon", 14),
    ("Tesla", 13),
    ("Inferno Tower", 12),
    ("Bomb Tower", 12),
    ("Fireball", 14),
    ("Poison", 13),
    ("Rocket", 12),
    ("Lightning", 11),
    ("The Log", 13),
    ("Zap", 14),
    ("Arrows", 14),
    ("Tornado", 12),
    ("Musketeer", 14),
    ("Valkyrie", 13),
    ("Mini P.E.K.K.A", 13),
    ("Archers", 14),
    ("Baby Dragon", 13),
    ("Wizard", 12),
    ("Mega Minion", 14),
    ("Princess", 12),
    ("Night Witch", 11),
    ("Dark Prince", 13),
    ("Knight", 14),
    ("Skeletons", 14),
    ("Ice Spirit", 14),
    ("Ice Golem", 13),
    ("Bats", 13),
    ("Goblin Gang", 14),
    ("Electro Spirit", 12),
];

pub fn collection() -> CardAnalysis {
    let mut analysis = CardAnalysis::new().with_player("Tester", "#TEST");
    for &(name, level) in COLLECTION {
        analysis.insert(name, CardLevelData::new(level, 16));
    }
    analysis
}

/// The first `n` fixture cards.
pub fn small_collection(n: usize) -> CardAnalysis {
    let mut analysis = CardAnalysis::new();
    for &(name, level) in COLLECTION.iter().take(n) {
        analysis.insert(name, CardLevelData::new(level, 16));
    }
    analysis
}
