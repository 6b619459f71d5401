//! Common entity query helpers.
//!
//! Pure read-only lookups shared by the systems. Enemy lookups walk the
//! roster so results follow spawn order.

use hecs::{Entity, World};

use crate::components::{CombatStats, Health, Position};

/// Get an entity's logical position.
pub fn get_entity_position(world: &World, entity: Entity) -> Option<Position> {
    world.get::<&Position>(entity).ok().map(|p| *p)
}

/// Check if an entity is alive (health > 0). Missing entities count as dead.
pub fn is_entity_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Health>(entity)
        .map(|h| h.is_alive())
        .unwrap_or(false)
}

pub fn get_combat_stats(world: &World, entity: Entity) -> Option<CombatStats> {
    world.get::<&CombatStats>(entity).ok().map(|s| *s)
}

/// Living roster entries with their positions, in roster order.
pub fn living_enemies(world: &World, roster: &[Entity]) -> Vec<(Entity, Position)> {
    roster
        .iter()
        .filter(|&&e| is_entity_alive(world, e))
        .filter_map(|&e| get_entity_position(world, e).map(|p| (e, p)))
        .collect()
}

/// First living enemy standing on a cell, optionally ignoring one entity.
pub fn living_enemy_at(
    world: &World,
    roster: &[Entity],
    x: i32,
    y: i32,
    exclude: Option<Entity>,
) -> Option<Entity> {
    roster.iter().copied().find(|&e| {
        exclude.map_or(true, |ex| e != ex)
            && is_entity_alive(world, e)
            && get_entity_position(world, e).map_or(false, |p| p.x == x && p.y == y)
    })
}

/// True when every roster entry is dead (or the roster is empty).
pub fn all_enemies_dead(world: &World, roster: &[Entity]) -> bool {
    !roster.iter().any(|&e| is_entity_alive(world, e))
}
