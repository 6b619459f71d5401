//! Data-driven entity spawning system.
//!
//! Defines enemy types and their properties, and the per-floor spawn roll.

use crate::abilities::default_loadout;
use crate::components::{
    AbilitySet, CombatStats, EnemyKind, Experience, Glyph, Health, Mana, Monster, Name, Player,
    Position,
};
use crate::constants::*;
use crate::grid::Grid;
use hecs::{Entity, World};
use rand::Rng;

/// Definition of an enemy type - all the data needed to spawn one
#[derive(Clone, Copy, Debug)]
pub struct EnemyDef {
    pub name: &'static str,
    pub glyph: char,
    pub health: i32,
    pub attack: i32,
    pub defense: i32,
    /// Experience granted to the player on death
    pub xp_reward: u32,
    pub kind: EnemyKind,
}

impl EnemyDef {
    /// Spawn this enemy type at the given position
    pub fn spawn(&self, world: &mut World, x: i32, y: i32) -> Entity {
        world.spawn((
            Position::new(x, y),
            Name(self.name),
            Glyph(self.glyph),
            Health::new(self.health),
            CombatStats::new(self.attack, self.defense),
            Monster {
                kind: self.kind,
                xp_reward: self.xp_reward,
            },
        ))
    }
}

/// Predefined enemy types
pub mod enemies {
    use super::*;

    pub const GOBLIN: EnemyDef = EnemyDef {
        name: "Goblin",
        glyph: 'g',
        health: GOBLIN_HEALTH,
        attack: GOBLIN_ATTACK,
        defense: GOBLIN_DEFENSE,
        xp_reward: GOBLIN_XP,
        kind: EnemyKind::Goblin,
    };

    pub const ORC: EnemyDef = EnemyDef {
        name: "Orc",
        glyph: 'O',
        health: ORC_HEALTH,
        attack: ORC_ATTACK,
        defense: ORC_DEFENSE,
        xp_reward: ORC_XP,
        kind: EnemyKind::Orc,
    };

    pub const DRAGON: EnemyDef = EnemyDef {
        name: "Dragon",
        glyph: 'D',
        health: DRAGON_HEALTH,
        attack: DRAGON_ATTACK,
        defense: DRAGON_DEFENSE,
        xp_reward: DRAGON_XP,
        kind: EnemyKind::Dragon { breath_cooldown: 0 },
    };
}

/// Spawn the player with starting stats and the default ability loadout
pub fn spawn_player(world: &mut World, x: i32, y: i32) -> Entity {
    world.spawn((
        Position::new(x, y),
        Name(PLAYER_NAME),
        Glyph(PLAYER_GLYPH),
        Health::new(PLAYER_STARTING_HEALTH),
        CombatStats::new(PLAYER_STARTING_ATTACK, PLAYER_STARTING_DEFENSE),
        Mana::new(PLAYER_STARTING_MANA),
        Experience::new(),
        AbilitySet::new(default_loadout()),
        Player,
    ))
}

/// Pick an enemy type from a 0-99 roll. The dragon band is checked first and
/// only from `DRAGON_MIN_FLOOR` on; below that floor those rolls fall through
/// to the orc band.
pub fn enemy_for_roll(floor: u32, roll: u32) -> &'static EnemyDef {
    if floor >= DRAGON_MIN_FLOOR && roll < DRAGON_SPAWN_ROLL {
        &enemies::DRAGON
    } else if roll < ORC_SPAWN_ROLL {
        &enemies::ORC
    } else {
        &enemies::GOBLIN
    }
}

/// Number of enemies placed on a floor
pub fn spawn_count(floor: u32) -> u32 {
    ENEMY_BASE_SPAWN_COUNT + floor
}

/// Spawn a floor's enemies on random floor cells. Cells are sampled
/// independently and may coincide with each other or the player.
/// Returns the new entities in spawn order.
pub fn spawn_floor_enemies(
    world: &mut World,
    grid: &Grid,
    floor: u32,
    rng: &mut impl Rng,
) -> Vec<Entity> {
    puffin::profile_function!();

    let count = spawn_count(floor);
    let mut spawned = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let (x, y) = grid.random_floor_cell(rng);
        let roll = rng.gen_range(0..ROLL_SIDES);
        let def = enemy_for_roll(floor, roll);
        log::debug!("spawning {} at ({x}, {y}) on floor {floor}", def.name);
        spawned.push(def.spawn(world, x, y));
    }

    spawned
}
