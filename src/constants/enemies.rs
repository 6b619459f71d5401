//! Enemy stats and spawning constants.

/// Enemies spawned per floor = this + floor number
pub const ENEMY_BASE_SPAWN_COUNT: u32 = 3;
/// First floor on which dragons may spawn
pub const DRAGON_MIN_FLOOR: u32 = 3;
/// Spawn roll below this is a dragon (from DRAGON_MIN_FLOOR on)
pub const DRAGON_SPAWN_ROLL: u32 = 15;
/// Spawn roll below this is an orc
pub const ORC_SPAWN_ROLL: u32 = 50;

// GOBLIN
pub const GOBLIN_HEALTH: i32 = 30;
pub const GOBLIN_ATTACK: i32 = 8;
pub const GOBLIN_DEFENSE: i32 = 2;
pub const GOBLIN_XP: u32 = 25;
/// Percent chance a goblin in reach attacks
pub const GOBLIN_ATTACK_CHANCE: u32 = 70;

// ORC
pub const ORC_HEALTH: i32 = 50;
pub const ORC_ATTACK: i32 = 12;
pub const ORC_DEFENSE: i32 = 4;
pub const ORC_XP: u32 = 40;
/// Percent chance an orc in reach attacks
pub const ORC_ATTACK_CHANCE: u32 = 60;
/// Extra damage on top of an orc's attack stat
pub const ORC_SMASH_BONUS: i32 = 5;

// DRAGON
pub const DRAGON_HEALTH: i32 = 120;
pub const DRAGON_ATTACK: i32 = 20;
pub const DRAGON_DEFENSE: i32 = 8;
pub const DRAGON_XP: u32 = 100;
/// Manhattan reach of fire breath
pub const DRAGON_BREATH_RANGE: i32 = 3;
/// Percent chance to breathe when in reach and off cooldown
pub const DRAGON_BREATH_CHANCE: u32 = 40;
/// Fire breath damage, applied straight to health
pub const DRAGON_BREATH_DAMAGE: i32 = 25;
/// Turns between breaths
pub const DRAGON_BREATH_COOLDOWN: u32 = 3;
