//! The six category scorers.
//!
//! Every scorer is total: it accepts any slice (including empty or
//! oversized decks) and returns a `CategoryScore` clamped to [0, 10].

use crate::cards::{CardCandidate, CardRole, RoleTable};
use crate::core::DECK_SIZE;
use crate::synergy::SynergyDatabase;

use super::config::ScoringConfig;
use super::context::PlayerContext;
use super::rating::CategoryScore;

/// DPS total (level-scaled) at which offensive support saturates.
const ATTACK_DPS_CEILING: f64 = 900.0;
/// Hitpoint and DPS totals at which the defensive core saturates.
const DEFENSE_HP_CEILING: f64 = 6000.0;
const DEFENSE_DPS_CEILING: f64 = 1000.0;
const EVOLUTION_BONUS_PER_LEVEL: f64 = 0.15;
const EVOLUTION_BONUS_CAP: f64 = 1.0;

/// Mean elixir cost, 0 for an empty deck.
#[must_use]
pub fn average_elixir(cards: &[CardCandidate]) -> f64 {
    if cards.is_empty() {
        return 0.0;
    }
    cards.iter().map(|c| f64::from(c.elixir)).sum::<f64>() / cards.len() as f64
}

fn of_role(cards: &[CardCandidate], role: CardRole) -> impl Iterator<Item = &CardCandidate> {
    cards.iter().filter(move |c| c.role == role)
}

fn mean_ratio<'a>(cards: impl Iterator<Item = &'a CardCandidate>) -> f64 {
    let (sum, n) = cards.fold((0.0, 0usize), |(s, n), c| (s + c.level_ratio(), n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

fn evolution_bonus<'a>(cards: impl Iterator<Item = &'a CardCandidate>) -> f64 {
    let levels: f64 = cards.map(|c| f64::from(c.evolution_level)).sum();
    (levels * EVOLUTION_BONUS_PER_LEVEL).min(EVOLUTION_BONUS_CAP)
}

/// Offense: win conditions, big spells, and support DPS.
#[must_use]
pub fn score_attack(cards: &[CardCandidate], config: &ScoringConfig) -> CategoryScore {
    if cards.is_empty() {
        return CategoryScore::new(0.0, "Empty deck");
    }

    let win_conditions: Vec<&CardCandidate> = of_role(cards, CardRole::WinCondition).collect();
    let wc_quality = mean_ratio(win_conditions.iter().copied());
    let wc_score = match win_conditions.len() {
        0 => 2.0,
        1 => 6.0 + 3.0 * wc_quality,
        _ => 9.0 + wc_quality,
    };

    let big_spells = of_role(cards, CardRole::SpellBig).count();
    let spell_quality = mean_ratio(of_role(cards, CardRole::SpellBig));
    let spell_score = match big_spells {
        0 if of_role(cards, CardRole::SpellSmall).next().is_some() => 4.0,
        0 => 2.0,
        1 => 7.0 + 2.0 * spell_quality,
        _ => 10.0,
    };

    let structural = wc_score * 0.6 + spell_score * 0.4;

    let attackers: Vec<&CardCandidate> = cards
        .iter()
        .filter(|c| matches!(c.role, CardRole::Support | CardRole::WinCondition) && c.stats.is_some())
        .collect();
    let base = if attackers.is_empty() {
        structural
    } else {
        let dps: f64 = attackers
            .iter()
            .filter_map(|c| c.stats.map(|s| f64::from(s.damage_per_second) * c.level_ratio()))
            .sum();
        let dps_score = (dps / ATTACK_DPS_CEILING).min(1.0) * 10.0;
        structural * (1.0 - config.combat_weight) + dps_score * config.combat_weight
    };

    let evolved = cards
        .iter()
        .filter(|c| matches!(c.role, CardRole::WinCondition | CardRole::SpellBig | CardRole::Support));
    let score = base + evolution_bonus(evolved);

    let assessment = match win_conditions.as_slice() {
        [] => "No clear win condition; offense relies on chip damage.".to_string(),
        [only] => format!("Single win condition ({}) carries the offense.", only.name),
        many => format!("{} win conditions give flexible pressure.", many.len()),
    };
    CategoryScore::new(score, assessment)
}

/// Defense: anti-air coverage, buildings, and defender HP/DPS.
#[must_use]
pub fn score_defense(cards: &[CardCandidate], config: &ScoringConfig) -> CategoryScore {
    if cards.is_empty() {
        return CategoryScore::new(0.0, "Empty deck");
    }

    let anti_air = cards.iter().filter(|c| c.hits_air()).count();
    let aa_score = match anti_air {
        0 => 0.0,
        1 => 3.0,
        2 => 5.5,
        3 => 8.0,
        _ => 10.0,
    };

    let buildings = of_role(cards, CardRole::Building).count();
    let building_quality = mean_ratio(of_role(cards, CardRole::Building));
    let building_score = match buildings {
        0 => 3.0,
        1 => 6.0 + 2.0 * building_quality,
        _ => 9.0 + building_quality,
    };

    let defenders: Vec<&CardCandidate> = cards
        .iter()
        .filter(|c| matches!(c.role, CardRole::Building | CardRole::Support | CardRole::Cycle) && c.stats.is_some())
        .collect();

    let base = if cards.iter().all(|c| c.stats.is_none()) {
        building_score
    } else {
        let (hp, dps) = defenders.iter().fold((0.0, 0.0), |(hp, dps), c| match c.stats {
            Some(s) => (
                hp + f64::from(s.hitpoints) * c.level_ratio(),
                dps + f64::from(s.damage_per_second) * c.level_ratio(),
            ),
            None => (hp, dps),
        });
        let aggregate =
            (hp / DEFENSE_HP_CEILING).min(1.0) * 5.0 + (dps / DEFENSE_DPS_CEILING).min(1.0) * 5.0;
        let structural = aa_score * 0.55 + building_score * 0.45;
        structural * (1.0 - config.combat_weight) + aggregate * config.combat_weight
    };

    let evolved = cards
        .iter()
        .filter(|c| matches!(c.role, CardRole::Building | CardRole::Support | CardRole::Cycle));
    let score = base + evolution_bonus(evolved);

    let assessment = match (anti_air, buildings) {
        (0, _) => "No anti-air coverage; vulnerable to air pushes.".to_string(),
        (1, _) => "Thin anti-air; a single answer to air threats.".to_string(),
        (_, 0) => format!("{anti_air} air defenders but no building to pull tanks."),
        _ => format!("{anti_air} air defenders and {buildings} defensive building(s)."),
    };
    CategoryScore::new(score, assessment)
}

/// Synergy: pairwise lookups over the deck, normalized by saturation.
#[must_use]
pub fn score_synergy(cards: &[CardCandidate], synergy: &SynergyDatabase, config: &ScoringConfig) -> CategoryScore {
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    let pairs = synergy.pairs_within(&names);
    let total: f64 = pairs.iter().map(|p| p.score).sum();

    let score = if config.synergy_saturation > 0.0 {
        total / config.synergy_saturation * 10.0
    } else {
        0.0
    };

    let positive = pairs.iter().filter(|p| p.score > 0.0).count();
    let strongest = pairs.iter().filter(|p| p.score > 0.0).max_by(|a, b| a.score.total_cmp(&b.score));
    let assessment = match strongest {
        None => "No known synergies between these cards.".to_string(),
        Some(best) => format!(
            "{positive} synergy pair(s); strongest is {} + {}.",
            best.card1, best.card2
        ),
    };
    CategoryScore::new(score, assessment)
}

/// Versatility: role diversity, elixir-cost spread, target coverage.
#[must_use]
pub fn score_versatility(cards: &[CardCandidate]) -> CategoryScore {
    if cards.is_empty() {
        return CategoryScore::new(0.0, "Empty deck");
    }

    let roles = RoleTable::count(cards.iter().map(|c| c.role)).distinct();
    let role_score = (roles as f64 / 5.0).min(1.0) * 10.0;

    let mut costs: Vec<u8> = cards.iter().map(|c| c.elixir).collect();
    costs.sort_unstable();
    costs.dedup();
    let spread_score = (costs.len() as f64 / 5.0).min(1.0) * 10.0;

    let coverage_score = if cards.iter().any(|c| c.stats.is_some()) {
        let air = cards.iter().filter(|c| c.hits_air()).count() as f64;
        let ground = cards.iter().filter(|c| c.hits_ground()).count() as f64;
        (air / 3.0).min(1.0) * 5.0 + (ground / 4.0).min(1.0) * 5.0
    } else {
        5.0
    };

    let score = role_score * 0.35 + spread_score * 0.30 + coverage_score * 0.35;
    let assessment = format!("{roles} roles across {} distinct elixir costs.", costs.len());
    CategoryScore::new(score, assessment)
}

/// Free-to-play friendliness: rarity cost and level gap to max.
#[must_use]
pub fn score_f2p(cards: &[CardCandidate]) -> CategoryScore {
    if cards.is_empty() {
        return CategoryScore::new(0.0, "Empty deck");
    }

    let n = cards.len() as f64;
    let mean_penalty = cards.iter().map(|c| c.rarity.f2p_penalty()).sum::<f64>() / n;
    let rarity_score = 10.0 - mean_penalty * 2.5;
    let level_score = mean_ratio(cards.iter()) * 10.0;
    let score = rarity_score * 0.6 + level_score * 0.4;

    let expensive = cards.iter().filter(|c| c.rarity.f2p_penalty() >= 3.0).count();
    let assessment = match expensive {
        0 => "No legendary or champion cards; easy to max.".to_string(),
        1 => "One legendary or champion card to upgrade.".to_string(),
        n => format!("{n} legendary or champion cards; slow to max."),
    };
    CategoryScore::new(score, assessment)
}

/// Playability: elixir sweet spot, role concentration, deck size and,
/// with a player context, ownership.
#[must_use]
pub fn score_playability(
    cards: &[CardCandidate],
    config: &ScoringConfig,
    context: Option<&PlayerContext>,
) -> CategoryScore {
    if cards.is_empty() {
        return CategoryScore::new(0.0, "Empty deck");
    }

    let mut notes: Vec<String> = Vec::new();
    let mut penalty = 0.0;

    let avg = average_elixir(cards);
    let (low, high) = config.elixir_sweet_spot;
    let distance = (low - avg).max(avg - high).max(0.0);
    if distance > 0.0 {
        penalty += distance * 4.0;
        notes.push(format!("average elixir {avg:.2} is outside {low:.1}-{high:.1}"));
    }

    let counts = RoleTable::count(cards.iter().map(|c| c.role));
    for (role, count) in counts.iter() {
        if count > config.max_role_share {
            penalty += f64::from(count - config.max_role_share) * 1.5;
            notes.push(format!("{count} {role} cards"));
        }
    }

    let size_gap = cards.len().abs_diff(DECK_SIZE);
    if size_gap > 0 {
        penalty += size_gap as f64;
        notes.push(format!("{} cards instead of {DECK_SIZE}", cards.len()));
    }

    if let Some(context) = context {
        let missing = context.missing(cards);
        if !missing.is_empty() {
            penalty += missing.len() as f64 * 1.25;
            notes.push(format!("missing {}", missing.join(", ")));
        }
    }

    let assessment = if notes.is_empty() {
        "Comfortable elixir curve and balanced roles.".to_string()
    } else {
        let mut text = notes.join("; ");
        if let Some(first) = text.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        text.push('.');
        text
    };
    CategoryScore::new(10.0 - penalty, assessment)
}
