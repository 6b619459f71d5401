//! Combat system constants.

/// Least damage any hit can deal after defense
pub const MIN_DAMAGE: i32 = 1;
/// Chebyshev reach of the player's melee attack
pub const MELEE_RANGE: i32 = 1;
/// Percent chance an enemy out of melee range steps toward the player
pub const ENEMY_MOVE_CHANCE: u32 = 70;
/// Rolls are drawn from 0..ROLL_SIDES
pub const ROLL_SIDES: u32 = 100;
