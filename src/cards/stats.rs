//! Combat statistics attached to troops and buildings.

use serde::{Deserialize, Serialize};

/// What a unit is able to attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Targets {
    Ground,
    Air,
    #[serde(rename = "Air & Ground")]
    AirAndGround,
    Buildings,
}

impl Targets {
    /// Parse the display form used by card data ("Air & Ground").
    #[must_use]
    pub fn parse(s: &str) -> Option<Targets> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ground" => Some(Targets::Ground),
            "air" => Some(Targets::Air),
            "air & ground" | "air and ground" | "air_and_ground" => Some(Targets::AirAndGround),
            "buildings" => Some(Targets::Buildings),
            _ => None,
        }
    }

    #[must_use]
    pub const fn hits_air(self) -> bool {
        matches!(self, Targets::Air | Targets::AirAndGround)
    }

    /// Buildings-only units do not count as ground defense.
    #[must_use]
    pub const fn hits_ground(self) -> bool {
        matches!(self, Targets::Ground | Targets::AirAndGround)
    }

    /// Coverage factor used by the efficiency score.
    #[must_use]
    pub const fn coverage(self) -> f64 {
        match self {
            Targets::AirAndGround => 1.0,
            Targets::Air | Targets::Ground => 0.7,
            Targets::Buildings => 0.5,
        }
    }
}

/// Per-card combat numbers at tournament level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub hitpoints: u32,
    pub damage: u32,
    pub damage_per_second: u32,
    /// Seconds between attacks.
    pub hit_speed: f64,
    /// Attack range in tiles (melee is about 1).
    pub range: f64,
    pub targets: Targets,
}

impl CombatStats {
    /// Stats from the core figures. Damage per hit is derived from DPS and
    /// hit speed.
    #[must_use]
    pub fn new(hitpoints: u32, damage_per_second: u32, hit_speed: f64, range: f64, targets: Targets) -> Self {
        Self {
            hitpoints,
            damage: (damage_per_second as f64 * hit_speed).round() as u32,
            damage_per_second,
            hit_speed,
            range,
            targets,
        }
    }

    #[must_use]
    pub fn dps_per_elixir(&self, elixir: u8) -> f64 {
        self.damage_per_second as f64 / f64::from(elixir.max(1))
    }

    #[must_use]
    pub fn hp_per_elixir(&self, elixir: u8) -> f64 {
        self.hitpoints as f64 / f64::from(elixir.max(1))
    }

    /// Cost efficiency in [0, 1]: DPS and HP per elixir, target coverage
    /// and range, each capped at a practical ceiling.
    #[must_use]
    pub fn efficiency(&self, elixir: u8) -> f64 {
        let dps = (self.dps_per_elixir(elixir) / 50.0).min(1.0);
        let hp = (self.hp_per_elixir(elixir) / 400.0).min(1.0);
        let range = (self.range / 6.0).min(1.0);
        dps * 0.35 + hp * 0.35 + self.targets.coverage() * 0.15 + range * 0.15
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_flags() {
        assert!(Targets::AirAndGround.hits_air());
        assert!(Targets::AirAndGround.hits_ground());
        assert!(!Targets::Buildings.hits_ground());
        assert!(!Targets::Ground.hits_air());
    }

    #[test]
    fn test_parse_targets() {
        assert_eq!(Targets::parse("Air & Ground"), Some(Targets::AirAndGround));
        assert_eq!(Targets::parse("buildings"), Some(Targets::Buildings));
        assert_eq!(Targets::parse("water"), None);
    }

    #[test]
    fn test_efficiency_bounded() {
        let huge = CombatStats::new(100_000, 10_000, 1.0, 20.0, Targets::AirAndGround);
        assert!((huge.efficiency(1) - 1.0).abs() < 1e-9);

        let musketeer = CombatStats::new(720, 181, 1.0, 6.0, Targets::AirAndGround);
        let eff = musketeer.efficiency(4);
        assert!(eff > 0.0 && eff < 1.0);
    }

    #[test]
    fn test_zero_elixir_does_not_divide_by_zero() {
        let stats = CombatStats::new(100, 50, 1.0, 1.0, Targets::Ground);
        assert_eq!(stats.dps_per_elixir(0), 50.0);
    }
}
