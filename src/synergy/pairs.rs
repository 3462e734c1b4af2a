//! Built-in synergy pairs.

use super::database::SynergyCategory::{self, *};

/// card, card, category, signed score, description
pub(super) type Row = (&'static str, &'static str, SynergyCategory, f64, &'static str);

pub(super) const PAIRS: &[Row] = &[
    ("Giant", "Witch", TankSupport, 0.9, "Witch supports Giant with splash damage and spawns"),
    ("Giant", "Sparky", TankSupport, 0.85, "Giant tanks while Sparky deals massive damage"),
    ("Giant", "Musketeer", TankSupport, 0.8, "Musketeer provides ranged support behind Giant"),
    ("Giant", "Dark Prince", TankSupport, 0.8, "Dark Prince provides splash support and charging damage"),
    ("Giant", "Mini P.E.K.K.A", TankSupport, 0.75, "Mini PEKKA defends then supports Giant counter-push"),
    ("Golem", "Night Witch", TankSupport, 0.95, "Classic Golem beatdown synergy"),
    ("Golem", "Baby Dragon", TankSupport, 0.85, "Baby Dragon provides splash support"),
    ("Golem", "Lumberjack", TankSupport, 0.9, "Lumberjack provides rage and fast clearing"),
    ("Lava Hound", "Balloon", WinCondition, 0.95, "LavaLoon: overwhelming air pressure"),
    ("Lava Hound", "Miner", WinCondition, 0.8, "Miner supports Lava Hound pups"),
    ("Lava Hound", "Mega Minion", TankSupport, 0.85, "Mega Minion provides strong air support"),
    ("Lava Hound", "Skeleton Dragons", TankSupport, 0.8, "Skeleton Dragons provide splash air support"),
    ("Mega Knight", "Bats", TankSupport, 0.75, "Bats provide fast swarm defense"),
    ("Mega Knight", "Inferno Dragon", TankSupport, 0.8, "Inferno Dragon handles tanks while MK defends"),
    ("Mega Knight", "Minions", TankSupport, 0.75, "Minions provide air support for MK"),
    ("Mega Knight", "Electro Wizard", TankSupport, 0.85, "E-Wiz provides reset and ranged support"),
    ("Mega Knight", "Goblin Gang", TankSupport, 0.7, "Goblin Gang provides defensive bait value"),
    ("Electro Giant", "Tornado", TankSupport, 0.9, "Tornado groups enemies for E-Giant zaps"),
    ("Electro Giant", "Heal Spirit", TankSupport, 0.8, "Heal Spirit sustains E-Giant push"),
    ("Electro Giant", "Mother Witch", TankSupport, 0.85, "Mother Witch converts swarms to hogs"),
    ("Electro Giant", "Dark Prince", TankSupport, 0.8, "Dark Prince provides splash and charging support"),
    ("P.E.K.K.A", "Electro Wizard", TankSupport, 0.85, "E-Wiz provides reset and support for PEKKA"),
    ("P.E.K.K.A", "Magic Archer", TankSupport, 0.8, "Magic Archer provides ranged piercing support"),
    ("P.E.K.K.A", "Dark Prince", TankSupport, 0.8, "Dark Prince provides splash support"),
    ("Goblin Barrel", "Princess", Bait, 0.95, "Log bait: Princess baits log for Goblin Barrel"),
    ("Goblin Barrel", "Goblin Gang", Bait, 0.9, "Multiple goblin threats overwhelm spells"),
    ("Goblin Barrel", "Dart Goblin", Bait, 0.85, "Dart Goblin baits small spells"),
    ("Goblin Barrel", "Skeleton Army", Bait, 0.85, "Swarm bait forces spell usage"),
    ("Goblin Barrel", "Inferno Tower", Bait, 0.75, "Building bait punishes spell usage"),
    ("Skeleton Barrel", "Goblin Barrel", Bait, 0.8, "Double barrel pressure"),
    ("Princess", "Goblin Gang", Bait, 0.85, "Log bait pressure"),
    ("Princess", "Dart Goblin", Bait, 0.85, "Dual log bait threats"),
    ("Graveyard", "Skeleton Army", Bait, 0.75, "Skeleton flood overwhelms single spells"),
    ("Graveyard", "Tombstone", Bait, 0.8, "Continuous skeleton pressure"),
    ("Skeleton Army", "Goblin Gang", Bait, 0.8, "Dual swarm bait"),
    ("Bats", "Minions", Bait, 0.75, "Zap bait flying swarms"),
    ("Spear Goblins", "Goblins", Bait, 0.7, "Small spell bait pressure"),
    ("Goblin Hut", "Furnace", Bait, 0.75, "Building spam forces spell usage"),
    ("X-Bow", "Tesla", Bait, 0.9, "Double building bait and defense"),
    ("Hog Rider", "Fireball", SpellCombo, 0.8, "Fireball clears defenders for Hog"),
    ("Hog Rider", "Earthquake", SpellCombo, 0.85, "Earthquake destroys buildings for Hog"),
    ("Hog Rider", "Freeze", SpellCombo, 0.8, "Freeze guarantees Hog tower damage"),
    ("Tornado", "Fireball", SpellCombo, 0.85, "Tornado groups troops for Fireball"),
    ("Tornado", "Rocket", SpellCombo, 0.8, "Tornado + Rocket tower finish"),
    ("Tornado", "Executioner", SpellCombo, 0.9, "Tornado pulls troops into Executioner's axe"),
    ("Tornado", "Bowler", SpellCombo, 0.8, "Tornado + Bowler knockback combo"),
    ("Tornado", "Ice Wizard", SpellCombo, 0.8, "Tornado groups for Ice Wizard slow"),
    ("Tornado", "Baby Dragon", SpellCombo, 0.8, "Tornado pulls troops for Baby Dragon splash"),
    ("Graveyard", "Freeze", SpellCombo, 0.9, "Freeze allows Graveyard skeletons to connect"),
    ("Graveyard", "Poison", SpellCombo, 0.85, "Poison clears small troops from Graveyard"),
    ("Poison", "Miner", SpellCombo, 0.85, "Poison + Miner chip damage combo"),
    ("Earthquake", "Royal Giant", SpellCombo, 0.85, "Earthquake removes buildings for RG"),
    ("Earthquake", "Miner", SpellCombo, 0.8, "Earthquake clears buildings for Miner"),
    ("Freeze", "Balloon", SpellCombo, 0.9, "Freeze guarantees Balloon connection"),
    ("Rage", "Lumberjack", SpellCombo, 0.85, "Double rage acceleration"),
    ("Rage", "Balloon", SpellCombo, 0.85, "Rage accelerates Balloon to tower"),
    ("Rage", "Elite Barbarians", SpellCombo, 0.8, "Rage boosts E-Barbs speed and DPS"),
    ("P.E.K.K.A", "Battle Ram", BridgeSpam, 0.85, "PEKKA Bridge Spam pressure"),
    ("P.E.K.K.A", "Bandit", BridgeSpam, 0.8, "Bandit supports PEKKA counterpush"),
    ("Battle Ram", "Bandit", BridgeSpam, 0.8, "Fast dual-lane pressure"),
    ("Battle Ram", "Minions", BridgeSpam, 0.75, "Air support for Battle Ram push"),
    ("Battle Ram", "Dark Prince", BridgeSpam, 0.85, "Dual charge pressure"),
    ("Bandit", "Royal Ghost", BridgeSpam, 0.75, "Invisible bridge spam"),
    ("Bandit", "Magic Archer", BridgeSpam, 0.75, "Bandit dash with Magic Archer support"),
    ("Bandit", "Electro Wizard", BridgeSpam, 0.75, "E-Wiz support for Bandit"),
    ("Royal Ghost", "Dark Prince", BridgeSpam, 0.75, "Dual invisible pressure"),
    ("Royal Ghost", "Minions", BridgeSpam, 0.7, "Air support for Ghost push"),
    ("Lumberjack", "Balloon", BridgeSpam, 0.95, "LumberLoon: Rage boost for Balloon"),
    ("Cannon", "Ice Spirit", Defensive, 0.8, "Cheap defensive combo"),
    ("Cannon", "Knight", Defensive, 0.8, "Knight + Cannon cheap defense"),
    ("Tesla", "Ice Spirit", Defensive, 0.75, "Tesla + Ice Spirit kiting"),
    ("Tesla", "Tornado", Defensive, 0.85, "Tornado pulls troops to Tesla"),
    ("Inferno Tower", "Zap", Defensive, 0.85, "Zap resets for Inferno Tower"),
    ("Inferno Tower", "Tornado", Defensive, 0.9, "Tornado pulls tanks to Inferno"),
    ("Inferno Dragon", "Zap", Defensive, 0.8, "Zap protects Inferno Dragon beam"),
    ("Bomb Tower", "Valkyrie", Defensive, 0.75, "Dual splash defensive combo"),
    ("Goblin Cage", "Guards", Defensive, 0.7, "Defensive troops chain"),
    ("Mega Minion", "Bats", Defensive, 0.75, "Air defense combo"),
    ("Musketeer", "Ice Spirit", Defensive, 0.75, "Musketeer + freeze for air defense"),
    ("Hunter", "Tornado", Defensive, 0.85, "Tornado groups for Hunter burst"),
    ("Electro Wizard", "Mega Minion", Defensive, 0.75, "E-Wiz reset + air defense"),
    ("Ice Spirit", "Skeletons", Cycle, 0.85, "Ultra-cheap cycle combo"),
    ("Ice Spirit", "Fire Spirit", Cycle, 0.8, "Cheap spirit cycle"),
    ("Ice Spirit", "Spear Goblins", Cycle, 0.75, "Fast cycle defensive combo"),
    ("Ice Spirit", "Bats", Cycle, 0.75, "Ultra-cheap air cycle"),
    ("Ice Spirit", "The Log", Cycle, 0.8, "Cheap cycle and control"),
    ("Skeletons", "Goblins", Cycle, 0.8, "Fast cycle swarm combo"),
    ("Skeletons", "Ice Golem", Cycle, 0.8, "Cheap cycle tank"),
    ("Skeletons", "The Log", Cycle, 0.75, "Cycle and clear combo"),
    ("Fire Spirit", "Heal Spirit", Cycle, 0.75, "Dual spirit cycle"),
    ("Fire Spirit", "Goblins", Cycle, 0.7, "Fast rotation combo"),
    ("Heal Spirit", "Skeletons", Cycle, 0.75, "Ultra-fast cycle"),
    ("Hog Rider", "Valkyrie", WinCondition, 0.8, "Valkyrie tanks and clears for Hog"),
    ("Hog Rider", "Ice Golem", WinCondition, 0.8, "Ice Golem kites and tanks for Hog"),
    ("Hog Rider", "Musketeer", WinCondition, 0.75, "Musketeer supports Hog push"),
    ("Royal Giant", "Fisherman", WinCondition, 0.85, "Fisherman activates King Tower for RG"),
    ("Royal Giant", "Lightning", WinCondition, 0.9, "Lightning clears defensive buildings"),
    ("Royal Giant", "Hunter", WinCondition, 0.75, "Hunter provides defensive synergy"),
    ("X-Bow", "Tesla", WinCondition, 0.9, "Double building lock"),
    ("X-Bow", "Archers", WinCondition, 0.8, "Archers defend X-Bow"),
    ("X-Bow", "Ice Golem", WinCondition, 0.8, "Ice Golem kites for X-Bow defense"),
    ("Mortar", "Cannon", WinCondition, 0.85, "Mortar + defensive building"),
    ("Mortar", "Knight", WinCondition, 0.8, "Knight tanks and defends for Mortar"),
    ("Mortar", "Archers", WinCondition, 0.75, "Archers support Mortar defense"),
    ("Mortar", "Skeletons", WinCondition, 0.7, "Skeletons cycle and defend"),
    ("Miner", "Balloon", WinCondition, 0.9, "Miner tanks for Balloon"),
    ("Miner", "Goblin Barrel", WinCondition, 0.75, "Dual win condition pressure"),
    ("Miner", "Wall Breakers", WinCondition, 0.8, "Dual tower pressure"),
    ("Miner", "Skeleton Barrel", WinCondition, 0.75, "Dual air pressure"),
    ("Ram Rider", "P.E.K.K.A", WinCondition, 0.8, "PEKKA supports Ram Rider push"),
    ("Ram Rider", "Mega Knight", WinCondition, 0.75, "MK defends then Ram counterpush"),
    ("Royal Hogs", "Earthquake", WinCondition, 0.85, "Earthquake clears buildings for Royal Hogs"),
    ("Royal Hogs", "Fisherman", WinCondition, 0.75, "Fisherman pulls defenders away"),
    ("Wall Breakers", "Giant", WinCondition, 0.75, "Dual tower threat pressure"),
    ("Sparky", "Giant", WinCondition, 0.9, "Giant tanks while Sparky charges"),
    ("Sparky", "Goblin Giant", WinCondition, 0.9, "Goblin Giant tanks with spear support"),
    ("Sparky", "Tornado", WinCondition, 0.85, "Tornado groups enemies for Sparky"),
    ("Three Musketeers", "Battle Ram", WinCondition, 0.9, "3M split with Battle Ram pressure"),
    ("Three Musketeers", "Ice Golem", WinCondition, 0.8, "Ice Golem tanks for 3M split"),
    // Pairs that pull in opposite directions
    ("Golem", "X-Bow", AntiSynergy, -0.6, "Heavy tank and siege building split elixir between lanes"),
    ("Golem", "Three Musketeers", AntiSynergy, -0.7, "Both need a full elixir bar to deploy"),
    ("Golem", "Lava Hound", AntiSynergy, -0.6, "Two 7+ elixir tanks cannot be cycled back"),
    ("Golem", "P.E.K.K.A", AntiSynergy, -0.5, "Stacked heavy cards leave no defensive elixir"),
    ("Golem", "Electro Giant", AntiSynergy, -0.6, "Two slow tanks compete for the same push"),
    ("Lava Hound", "Mortar", AntiSynergy, -0.5, "Air beatdown and ground siege share no plan"),
    ("Lava Hound", "Three Musketeers", AntiSynergy, -0.6, "Both need a full elixir bar to deploy"),
    ("X-Bow", "Mortar", AntiSynergy, -0.4, "Redundant siege buildings"),
    ("X-Bow", "Electro Giant", AntiSynergy, -0.5, "Siege cycle cannot afford a heavy tank"),
    ("Mega Knight", "P.E.K.K.A", AntiSynergy, -0.3, "Overlapping heavy ground defenders"),
    ("Lightning", "Rocket", AntiSynergy, -0.3, "Two 6 elixir spells clog the cycle"),
];
