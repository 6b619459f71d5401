//! Ability constants for the player's loadout.

// Cleave
pub const CLEAVE_COOLDOWN: u32 = 3;
pub const CLEAVE_MANA_COST: i32 = 15;
pub const CLEAVE_RADIUS: i32 = 2;
/// Cleave damage = attack * this
pub const CLEAVE_ATTACK_MULTIPLIER: i32 = 2;

// Heal
pub const HEAL_COOLDOWN: u32 = 5;
pub const HEAL_MANA_COST: i32 = 20;
pub const HEAL_AMOUNT: i32 = 40;

// Fire Blast
pub const FIRE_BLAST_COOLDOWN: u32 = 4;
pub const FIRE_BLAST_MANA_COST: i32 = 25;
pub const FIRE_BLAST_RADIUS: i32 = 3;
pub const FIRE_BLAST_DAMAGE: i32 = 30;
