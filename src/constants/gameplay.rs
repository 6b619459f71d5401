//! Core gameplay constants (player stats, XP, floor rewards).

/// Player display name
pub const PLAYER_NAME: &str = "Hero";
/// Player glyph on the map
pub const PLAYER_GLYPH: char = '@';
/// Player's starting health
pub const PLAYER_STARTING_HEALTH: i32 = 100;
/// Player's starting attack
pub const PLAYER_STARTING_ATTACK: i32 = 15;
/// Player's starting defense
pub const PLAYER_STARTING_DEFENSE: i32 = 5;
/// Player's starting mana
pub const PLAYER_STARTING_MANA: i32 = 50;

/// Base XP formula multiplier (XP needed = level * this)
pub const XP_PER_LEVEL_MULTIPLIER: u32 = 100;

// Per-level stat gains
pub const LEVEL_UP_HEALTH: i32 = 20;
pub const LEVEL_UP_ATTACK: i32 = 3;
pub const LEVEL_UP_DEFENSE: i32 = 2;
pub const LEVEL_UP_MANA: i32 = 10;

/// Mana regenerated at the end of every turn
pub const MANA_REGEN_PER_TURN: i32 = 2;

/// Health restored when a floor is cleared
pub const FLOOR_CLEAR_HEAL: i32 = 30;
/// Mana restored when a floor is cleared
pub const FLOOR_CLEAR_MANA: i32 = 20;

/// Floor the session starts on
pub const STARTING_FLOOR: u32 = 1;
