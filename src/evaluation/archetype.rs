//! Archetype detection from a declarative signature table.
//!
//! Each archetype is one `ArchetypeSignature` row: key cards, role-count
//! minimums, an elixir band, a gate and component weights. Every row is
//! scored the same way; the best score wins, and ties go to the lowest
//! archetype ordinal.

use serde::{Deserialize, Serialize};

use crate::cards::{CardCandidate, CardRole, RoleTable};
use crate::core::Archetype;

use super::categories::average_elixir;

/// Precondition a deck must meet before a signature scores at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignatureGate {
    None,
    /// At least one key card present.
    KeyCard,
    /// Every role minimum met.
    RoleMinimums,
}

/// Average-elixir band. Decks within `tolerance` outside it get partial
/// credit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElixirBand {
    pub min: f64,
    pub max: f64,
    pub tolerance: f64,
}

impl ElixirBand {
    /// Fit in [0, 10].
    #[must_use]
    pub fn fit(&self, avg: f64) -> f64 {
        let distance = (self.min - avg).max(avg - self.max).max(0.0);
        if distance == 0.0 {
            10.0
        } else if distance <= self.tolerance {
            10.0 - 5.0 * distance / self.tolerance
        } else {
            (5.0 - (distance - self.tolerance) * 5.0).max(0.0)
        }
    }
}

/// One row of the detection table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchetypeSignature {
    pub archetype: Archetype,
    pub key_cards: &'static [&'static str],
    /// Key-card matches that earn full key credit.
    pub key_target: u8,
    pub role_minimums: &'static [(CardRole, u8)],
    pub elixir: ElixirBand,
    pub gate: SignatureGate,
    pub key_weight: f64,
    pub role_weight: f64,
    pub elixir_weight: f64,
    /// Highest score the row can produce.
    pub ceiling: f64,
}

const fn band(min: f64, max: f64, tolerance: f64) -> ElixirBand {
    ElixirBand { min, max, tolerance }
}

/// The detection table, in archetype ordinal order.
pub const SIGNATURES: [ArchetypeSignature; 7] = [
    ArchetypeSignature {
        archetype: Archetype::Beatdown,
        key_cards: &["Golem", "Lava Hound", "Electro Giant", "Giant", "Goblin Giant", "Giant Skeleton", "Mega Knight"],
        key_target: 1,
        role_minimums: &[(CardRole::WinCondition, 1), (CardRole::Support, 2)],
        elixir: band(3.6, 4.6, 0.4),
        gate: SignatureGate::None,
        key_weight: 0.45,
        role_weight: 0.25,
        elixir_weight: 0.30,
        ceiling: 10.0,
    },
    ArchetypeSignature {
        archetype: Archetype::Control,
        key_cards: &["Graveyard", "Poison", "Lightning", "Rocket", "Tesla", "Inferno Tower", "Bomb Tower", "Executioner"],
        key_target: 2,
        role_minimums: &[(CardRole::Building, 1), (CardRole::SpellBig, 2)],
        elixir: band(3.3, 4.3, 0.4),
        gate: SignatureGate::None,
        key_weight: 0.30,
        role_weight: 0.45,
        elixir_weight: 0.25,
        ceiling: 10.0,
    },
    ArchetypeSignature {
        archetype: Archetype::Cycle,
        key_cards: &["Hog Rider", "Royal Hogs", "Skeletons", "Ice Spirit", "Ice Golem", "Electro Spirit", "Fire Spirit"],
        key_target: 3,
        role_minimums: &[(CardRole::Cycle, 3)],
        elixir: band(2.4, 3.2, 0.3),
        gate: SignatureGate::None,
        key_weight: 0.30,
        role_weight: 0.30,
        elixir_weight: 0.40,
        ceiling: 10.0,
    },
    ArchetypeSignature {
        archetype: Archetype::Siege,
        key_cards: &["X-Bow", "Mortar"],
        key_target: 1,
        role_minimums: &[(CardRole::SpellSmall, 1), (CardRole::Cycle, 1)],
        elixir: band(2.8, 3.6, 0.4),
        gate: SignatureGate::KeyCard,
        key_weight: 0.60,
        role_weight: 0.20,
        elixir_weight: 0.20,
        ceiling: 10.0,
    },
    ArchetypeSignature {
        archetype: Archetype::BridgeSpam,
        key_cards: &["Battle Ram", "Bandit", "Royal Ghost", "P.E.K.K.A", "Ram Rider", "Prince", "Dark Prince", "Wall Breakers"],
        key_target: 2,
        role_minimums: &[(CardRole::WinCondition, 1), (CardRole::Support, 2)],
        elixir: band(3.2, 4.0, 0.4),
        gate: SignatureGate::None,
        key_weight: 0.50,
        role_weight: 0.25,
        elixir_weight: 0.25,
        ceiling: 10.0,
    },
    ArchetypeSignature {
        archetype: Archetype::Bait,
        key_cards: &["Goblin Barrel", "Princess", "Goblin Gang", "Dart Goblin", "Skeleton Army", "Goblin Drill", "Skeleton Barrel"],
        key_target: 2,
        role_minimums: &[(CardRole::SpellSmall, 1), (CardRole::Cycle, 1)],
        elixir: band(2.8, 3.6, 0.4),
        gate: SignatureGate::KeyCard,
        key_weight: 0.55,
        role_weight: 0.20,
        elixir_weight: 0.25,
        ceiling: 10.0,
    },
    ArchetypeSignature {
        archetype: Archetype::Hybrid,
        key_cards: &[],
        key_target: 1,
        role_minimums: &[(CardRole::WinCondition, 2), (CardRole::Support, 2)],
        elixir: band(3.2, 4.2, 0.4),
        gate: SignatureGate::RoleMinimums,
        key_weight: 0.0,
        role_weight: 0.50,
        elixir_weight: 0.50,
        ceiling: 7.0,
    },
];

impl ArchetypeSignature {
    /// The table row for an archetype.
    #[must_use]
    pub fn of(archetype: Archetype) -> &'static ArchetypeSignature {
        &SIGNATURES[archetype.ordinal()]
    }

    fn key_matches(&self, cards: &[CardCandidate]) -> usize {
        cards
            .iter()
            .filter(|c| self.key_cards.iter().any(|k| k.eq_ignore_ascii_case(&c.name)))
            .count()
    }

    /// Score a deck against this row, in [0, ceiling].
    #[must_use]
    pub fn score(&self, cards: &[CardCandidate]) -> f64 {
        if cards.is_empty() {
            return 0.0;
        }

        let matches = self.key_matches(cards);
        let counts = RoleTable::count(cards.iter().map(|c| c.role));
        let minimums_met = self.role_minimums.iter().all(|&(role, min)| counts[role] >= min);

        let gated_out = match self.gate {
            SignatureGate::None => false,
            SignatureGate::KeyCard => matches == 0,
            SignatureGate::RoleMinimums => !minimums_met,
        };
        if gated_out {
            return 0.0;
        }

        let key_score = if matches == 0 || self.key_target == 0 {
            0.0
        } else {
            10.0 * matches.min(self.key_target as usize) as f64 / f64::from(self.key_target)
        };

        let role_score = if self.role_minimums.is_empty() {
            10.0
        } else {
            let credit: f64 = self
                .role_minimums
                .iter()
                .map(|&(role, min)| {
                    if counts[role] >= min {
                        1.0
                    } else {
                        0.5 * f64::from(counts[role]) / f64::from(min.max(1))
                    }
                })
                .sum();
            credit / self.role_minimums.len() as f64 * 10.0
        };

        let elixir_score = self.elixir.fit(average_elixir(cards));

        let weight = self.key_weight + self.role_weight + self.elixir_weight;
        if weight <= 0.0 {
            return 0.0;
        }
        let raw = (key_score * self.key_weight + role_score * self.role_weight + elixir_score * self.elixir_weight)
            / weight;
        (raw * self.ceiling / 10.0).clamp(0.0, self.ceiling)
    }
}

/// Signature score of one archetype.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeScore {
    pub archetype: Archetype,
    pub score: f64,
}

/// Detection outcome.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeDetection {
    pub primary: Archetype,
    /// In [0, 1].
    pub confidence: f64,
    pub secondary: Option<Archetype>,
    pub secondary_confidence: f64,
    /// Every signature score, in ordinal order.
    pub scores: Vec<ArchetypeScore>,
}

/// Map a 0-10 signature score to a confidence in [0, 1].
#[must_use]
pub fn confidence_for(score: f64) -> f64 {
    if score <= 0.0 || score.is_nan() {
        return 0.0;
    }
    let x = score.min(10.0) / 10.0;
    1.0 / (1.0 + (-5.0 * (x - 0.5)).exp())
}

/// Score every signature and pick the best.
#[must_use]
pub fn detect_archetype(cards: &[CardCandidate]) -> ArchetypeDetection {
    let scores: Vec<ArchetypeScore> = SIGNATURES
        .iter()
        .map(|sig| ArchetypeScore {
            archetype: sig.archetype,
            score: sig.score(cards),
        })
        .collect();

    let mut best: Option<ArchetypeScore> = None;
    let mut runner_up: Option<ArchetypeScore> = None;
    for &entry in &scores {
        match best {
            Some(b) if entry.score <= b.score => {
                if entry.score > 0.0 && runner_up.map_or(true, |r| entry.score > r.score) {
                    runner_up = Some(entry);
                }
            }
            _ => {
                if best.is_some_and(|b| b.score > 0.0) {
                    runner_up = best;
                }
                best = Some(entry);
            }
        }
    }

    let best = best.unwrap_or(ArchetypeScore {
        archetype: Archetype::Hybrid,
        score: 0.0,
    });

    ArchetypeDetection {
        primary: best.archetype,
        confidence: confidence_for(best.score),
        secondary: runner_up.map(|r| r.archetype),
        secondary_confidence: runner_up.map_or(0.0, |r| confidence_for(r.score)),
        scores,
    }
}
