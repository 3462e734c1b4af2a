//! Built-in card data at tournament-standard levels.

use super::rarity::Rarity::{self, *};
use super::role::CardRole::{self, *};
use super::stats::Targets::{self, *};

type Stats = Option<(u32, u32, f64, f64, Targets)>;

/// name, elixir, rarity, role, (hp, dps, hit speed, range, targets), max evolution
pub(super) type Row = (&'static str, u8, Rarity, CardRole, Stats, u8);

pub(super) const CARDS: &[Row] = &[
    // Win conditions
    ("Hog Rider", 4, Rare, WinCondition, Some((1697, 199, 1.6, 1.2, Buildings)), 0),
    ("Giant", 5, Rare, WinCondition, Some((4091, 169, 1.5, 1.2, Buildings)), 0),
    ("Royal Giant", 6, Common, WinCondition, Some((3164, 208, 1.7, 5.0, Buildings)), 1),
    ("Golem", 8, Epic, WinCondition, Some((5120, 173, 2.5, 1.2, Buildings)), 0),
    ("Lava Hound", 7, Legendary, WinCondition, Some((3581, 34, 1.3, 2.0, Buildings)), 0),
    ("Balloon", 5, Epic, WinCondition, Some((1679, 213, 3.0, 1.0, Buildings)), 0),
    ("Miner", 3, Legendary, WinCondition, Some((1210, 160, 1.2, 1.0, Ground)), 0),
    ("Goblin Barrel", 3, Epic, WinCondition, None, 1),
    ("Graveyard", 5, Legendary, WinCondition, None, 0),
    ("X-Bow", 6, Epic, WinCondition, Some((1600, 113, 0.3, 11.5, Ground)), 0),
    ("Mortar", 4, Common, WinCondition, Some((1369, 53, 5.0, 11.5, Ground)), 1),
    ("P.E.K.K.A", 7, Epic, WinCondition, Some((3760, 455, 1.8, 1.2, Ground)), 1),
    ("Giant Skeleton", 6, Epic, WinCondition, Some((3400, 169, 1.4, 1.0, Ground)), 0),
    ("Royal Hogs", 5, Rare, WinCondition, Some((3348, 296, 1.2, 0.7, Buildings)), 0),
    ("Battle Ram", 4, Rare, WinCondition, Some((967, 143, 1.0, 0.5, Buildings)), 1),
    ("Ram Rider", 5, Legendary, WinCondition, Some((1461, 150, 1.8, 0.8, Buildings)), 0),
    ("Electro Giant", 7, Epic, WinCondition, Some((3855, 120, 2.1, 1.0, Buildings)), 0),
    ("Goblin Drill", 4, Epic, WinCondition, Some((1100, 96, 1.1, 0.5, Ground)), 0),
    ("Wall Breakers", 2, Epic, WinCondition, Some((330, 390, 1.0, 0.5, Buildings)), 1),
    ("Three Musketeers", 9, Rare, WinCondition, Some((2160, 543, 1.0, 6.0, AirAndGround)), 0),
    ("Skeleton Barrel", 3, Common, WinCondition, Some((532, 98, 1.0, 0.5, Buildings)), 0),
    ("Elixir Golem", 3, Rare, WinCondition, Some((2300, 120, 1.3, 0.25, Buildings)), 0),
    ("Goblin Giant", 6, Epic, WinCondition, Some((3085, 140, 1.7, 1.2, Buildings)), 0),
    // Buildings
    ("Cannon", 3, Common, Building, Some((824, 212, 0.9, 5.5, Ground)), 1),
    ("Tesla", 4, Common, Building, Some((954, 223, 1.1, 5.5, AirAndGround)), 1),
    ("Inferno Tower", 5, Rare, Building, Some((1452, 400, 0.4, 6.0, AirAndGround)), 0),
    ("Bomb Tower", 4, Rare, Building, Some((1126, 138, 1.8, 6.0, Ground)), 0),
    ("Goblin Cage", 4, Rare, Building, Some((1002, 120, 1.1, 1.2, Ground)), 1),
    ("Tombstone", 3, Rare, Building, Some((529, 50, 1.0, 1.0, Ground)), 0),
    ("Goblin Hut", 5, Rare, Building, Some((1210, 60, 1.0, 5.5, AirAndGround)), 0),
    ("Barbarian Hut", 6, Rare, Building, Some((1936, 100, 1.0, 1.0, Ground)), 0),
    ("Furnace", 4, Rare, Building, Some((1003, 80, 1.0, 2.5, AirAndGround)), 1),
    // Big spells
    ("Fireball", 4, Rare, SpellBig, None, 0),
    ("Poison", 4, Epic, SpellBig, None, 0),
    ("Lightning", 6, Epic, SpellBig, None, 0),
    ("Rocket", 6, Rare, SpellBig, None, 0),
    // Small spells
    ("Zap", 2, Common, SpellSmall, None, 1),
    ("Arrows", 3, Common, SpellSmall, None, 0),
    ("Giant Snowball", 2, Common, SpellSmall, None, 1),
    ("Barbarian Barrel", 2, Epic, SpellSmall, None, 0),
    ("Freeze", 4, Epic, SpellSmall, None, 0),
    ("The Log", 2, Legendary, SpellSmall, None, 0),
    ("Tornado", 3, Epic, SpellSmall, None, 0),
    ("Earthquake", 3, Rare, SpellSmall, None, 0),
    ("Rage", 2, Epic, SpellSmall, None, 0),
    ("Royal Delivery", 3, Common, SpellSmall, None, 0),
    // Support
    ("Archers", 3, Common, Support, Some((608, 238, 0.9, 5.0, AirAndGround)), 1),
    ("Bomber", 2, Common, Support, Some((332, 126, 1.8, 4.5, Ground)), 1),
    ("Musketeer", 4, Rare, Support, Some((720, 181, 1.0, 6.0, AirAndGround)), 1),
    ("Wizard", 5, Rare, Support, Some((720, 200, 1.4, 5.5, AirAndGround)), 1),
    ("Mega Minion", 3, Rare, Support, Some((695, 167, 1.6, 2.0, AirAndGround)), 0),
    ("Valkyrie", 4, Rare, Support, Some((1908, 178, 1.5, 1.2, Ground)), 1),
    ("Baby Dragon", 4, Epic, Support, Some((1152, 107, 1.5, 3.5, AirAndGround)), 1),
    ("Skeleton Dragons", 4, Common, Support, Some((880, 126, 1.9, 3.5, AirAndGround)), 0),
    ("Mini P.E.K.K.A", 4, Rare, Support, Some((1361, 450, 1.6, 0.8, Ground)), 0),
    ("Witch", 5, Epic, Support, Some((838, 84, 1.1, 5.0, AirAndGround)), 1),
    ("Night Witch", 4, Legendary, Support, Some((906, 210, 1.3, 1.0, Ground)), 0),
    ("Electro Wizard", 4, Legendary, Support, Some((713, 192, 1.8, 5.0, AirAndGround)), 0),
    ("Ice Wizard", 3, Legendary, Support, Some((688, 63, 1.7, 5.5, AirAndGround)), 0),
    ("Executioner", 5, Epic, Support, Some((1150, 118, 2.4, 4.5, AirAndGround)), 1),
    ("Bowler", 5, Epic, Support, Some((1978, 141, 2.5, 4.0, Ground)), 0),
    ("Hunter", 4, Epic, Support, Some((839, 348, 2.2, 4.0, AirAndGround)), 1),
    ("Magic Archer", 4, Legendary, Support, Some((532, 113, 1.1, 7.0, AirAndGround)), 0),
    ("Princess", 3, Legendary, Support, Some((261, 47, 3.0, 9.0, AirAndGround)), 0),
    ("Dart Goblin", 3, Rare, Support, Some((260, 156, 0.8, 6.5, AirAndGround)), 1),
    ("Lumberjack", 4, Legendary, Support, Some((1282, 300, 0.8, 0.7, Ground)), 1),
    ("Bandit", 3, Legendary, Support, Some((906, 193, 1.0, 0.75, Ground)), 0),
    ("Royal Ghost", 3, Legendary, Support, Some((1210, 261, 1.0, 1.2, Ground)), 0),
    ("Dark Prince", 4, Epic, Support, Some((1200, 192, 1.3, 1.2, Ground)), 0),
    ("Prince", 5, Epic, Support, Some((1920, 245, 1.4, 1.6, Ground)), 0),
    ("Inferno Dragon", 4, Legendary, Support, Some((1070, 300, 0.4, 3.5, AirAndGround)), 0),
    ("Mega Knight", 7, Legendary, Support, Some((3300, 130, 1.7, 1.2, Ground)), 1),
    ("Fisherman", 3, Legendary, Support, Some((1140, 120, 1.3, 1.2, Ground)), 0),
    ("Mother Witch", 4, Legendary, Support, Some((532, 133, 1.0, 5.5, AirAndGround)), 0),
    ("Sparky", 6, Legendary, Support, Some((1452, 317, 4.0, 5.0, Ground)), 0),
    ("Elite Barbarians", 6, Common, Support, Some((2682, 454, 1.4, 1.2, Ground)), 0),
    ("Barbarians", 5, Common, Support, Some((2624, 460, 1.3, 0.7, Ground)), 1),
    ("Minion Horde", 5, Common, Support, Some((1140, 516, 1.0, 2.0, AirAndGround)), 0),
    ("Flying Machine", 4, Rare, Support, Some((614, 153, 1.1, 6.0, AirAndGround)), 0),
    ("Battle Healer", 4, Rare, Support, Some((1717, 105, 1.5, 1.0, Ground)), 0),
    ("Electro Dragon", 5, Epic, Support, Some((950, 110, 2.1, 3.5, AirAndGround)), 0),
    ("Cannon Cart", 5, Epic, Support, Some((1700, 200, 0.9, 5.5, Ground)), 0),
    ("Guards", 3, Epic, Support, Some((1000, 225, 1.0, 1.6, Ground)), 0),
    ("Skeleton Army", 3, Epic, Support, Some((1215, 600, 1.0, 0.5, Ground)), 1),
    ("Firecracker", 3, Common, Support, Some((304, 66, 3.0, 6.0, AirAndGround)), 1),
    ("Phoenix", 4, Legendary, Support, Some((1000, 180, 1.0, 1.6, AirAndGround)), 0),
    ("Golden Knight", 4, Champion, Support, Some((1800, 177, 0.9, 1.2, Ground)), 0),
    ("Archer Queen", 5, Champion, Support, Some((1000, 225, 1.2, 5.0, AirAndGround)), 0),
    ("Skeleton King", 4, Champion, Support, Some((2300, 175, 1.6, 1.2, Ground)), 0),
    ("Mighty Miner", 4, Champion, Support, Some((2250, 200, 0.4, 1.6, Ground)), 0),
    ("Monk", 5, Champion, Support, Some((2000, 160, 0.8, 1.2, Ground)), 0),
    ("Little Prince", 3, Champion, Support, Some((700, 100, 1.2, 6.0, AirAndGround)), 0),
    // Cycle
    ("Knight", 3, Common, Cycle, Some((1766, 167, 1.2, 1.2, Ground)), 1),
    ("Skeletons", 1, Common, Cycle, Some((243, 243, 1.0, 0.5, Ground)), 1),
    ("Ice Spirit", 1, Common, Cycle, Some((230, 91, 1.0, 2.5, AirAndGround)), 1),
    ("Electro Spirit", 1, Common, Cycle, Some((230, 99, 1.0, 2.5, AirAndGround)), 0),
    ("Fire Spirit", 1, Common, Cycle, Some((230, 207, 1.0, 2.0, AirAndGround)), 0),
    ("Heal Spirit", 1, Rare, Cycle, Some((230, 100, 1.0, 2.5, AirAndGround)), 0),
    ("Bats", 2, Common, Cycle, Some((405, 311, 1.3, 1.2, AirAndGround)), 1),
    ("Spear Goblins", 2, Common, Cycle, Some((399, 143, 1.7, 5.0, AirAndGround)), 0),
    ("Goblin Gang", 3, Common, Cycle, Some((1005, 400, 1.2, 1.0, AirAndGround)), 0),
    ("Minions", 3, Common, Cycle, Some((690, 321, 1.0, 2.0, AirAndGround)), 0),
    ("Goblins", 2, Common, Cycle, Some((606, 354, 1.1, 0.5, Ground)), 0),
    ("Ice Golem", 2, Rare, Cycle, Some((1197, 84, 2.5, 0.75, Buildings)), 1),
];

/// Alternate spellings that resolve to a catalog name.
pub(super) const ALIASES: &[(&str, &str)] = &[
    ("Log", "The Log"),
    ("PEKKA", "P.E.K.K.A"),
    ("Mini PEKKA", "Mini P.E.K.K.A"),
    ("E-Wiz", "Electro Wizard"),
    ("XBow", "X-Bow"),
    ("3M", "Three Musketeers"),
];
