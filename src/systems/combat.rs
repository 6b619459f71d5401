//! Combat system functions.

use hecs::{Entity, World};

use crate::components::{CombatStats, Health, Monster, Name, Position};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::queries;
use crate::systems::experience::award_experience;

/// Apply an incoming hit to an entity through its defense.
/// Returns the damage dealt, or `None` if the entity can't take damage.
pub fn damage_entity(world: &mut World, target: Entity, incoming: i32) -> Option<i32> {
    let defense = queries::get_combat_stats(world, target)
        .map(|s| s.defense)
        .unwrap_or(0);
    let mut health = world.get::<&mut Health>(target).ok()?;
    Some(health.take_damage(incoming, defense))
}

/// If `target` just died, report it and pay its XP to the player.
/// Returns true when the target is dead.
pub fn resolve_kill(
    world: &mut World,
    player: Entity,
    target: Entity,
    events: &mut EventQueue,
) -> bool {
    if queries::is_entity_alive(world, target) {
        return false;
    }

    let name = world.get::<&Name>(target).map(|n| n.0).unwrap_or("Enemy");
    let xp = world.get::<&Monster>(target).map(|m| m.xp_reward).unwrap_or(0);

    log::debug!("{name} defeated, granting {xp} XP");
    events.push(GameEvent::EnemyDefeated { name, xp });
    award_experience(world, player, xp, events);
    true
}

/// Player melee: strike the first living enemy (roster order) within reach.
/// Returns the enemy struck, if any.
pub fn player_attack(
    world: &mut World,
    player: Entity,
    roster: &[Entity],
    events: &mut EventQueue,
) -> Option<Entity> {
    let (Some(player_pos), Some(stats)) = (
        queries::get_entity_position(world, player),
        queries::get_combat_stats(world, player),
    ) else {
        return None;
    };

    let target = queries::living_enemies(world, roster)
        .into_iter()
        .find(|(_, pos)| pos.chebyshev(&player_pos) <= MELEE_RANGE)
        .map(|(e, _)| e);

    let Some(target) = target else {
        events.push(GameEvent::NoEnemyInRange);
        return None;
    };

    let damage = damage_entity(world, target, stats.attack).unwrap_or(0);
    let name = world.get::<&Name>(target).map(|n| n.0).unwrap_or("Enemy");
    events.push(GameEvent::PlayerAttack {
        target: name,
        damage,
    });
    resolve_kill(world, player, target, events);

    Some(target)
}

/// Hit every living enemy within `radius` (Chebyshev) of `center` for
/// `incoming` damage, paying out XP for kills. Returns how many were hit.
pub fn strike_area(
    world: &mut World,
    player: Entity,
    roster: &[Entity],
    center: Position,
    radius: i32,
    incoming: i32,
    events: &mut EventQueue,
) -> usize {
    let targets: Vec<Entity> = queries::living_enemies(world, roster)
        .into_iter()
        .filter(|(_, pos)| pos.chebyshev(&center) <= radius)
        .map(|(e, _)| e)
        .collect();

    for &target in &targets {
        damage_entity(world, target, incoming);
        resolve_kill(world, player, target, events);
    }

    targets.len()
}

/// Despawn dead enemies and drop them from the roster. Only called between
/// turns so roster indices stay stable while a turn resolves.
pub fn remove_dead_entities(world: &mut World, roster: &mut Vec<Entity>) -> usize {
    let dead: Vec<Entity> = roster
        .iter()
        .copied()
        .filter(|&e| !queries::is_entity_alive(world, e))
        .collect();

    for &entity in &dead {
        let _ = world.despawn(entity);
    }
    roster.retain(|e| !dead.contains(e));

    dead.len()
}

/// Current attack of an entity, 0 if it has no combat stats
pub fn attack_of(world: &World, entity: Entity) -> i32 {
    world.get::<&CombatStats>(entity).map(|s| s.attack).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Experience;
    use crate::spawning::{enemies, spawn_player};

    fn setup() -> (World, Entity, EventQueue) {
        let mut world = World::new();
        let player = spawn_player(&mut world, 10, 10);
        (world, player, EventQueue::new())
    }

    #[test]
    fn test_goblin_dies_on_third_hit() {
        let (mut world, player, mut events) = setup();
        let goblin = enemies::GOBLIN.spawn(&mut world, 11, 10);
        let roster = vec![goblin];

        assert_eq!(player_attack(&mut world, player, &roster, &mut events), Some(goblin));
        assert_eq!(world.get::<&Health>(goblin).unwrap().current, 17);
        player_attack(&mut world, player, &roster, &mut events);
        assert_eq!(world.get::<&Health>(goblin).unwrap().current, 4);
        assert!(queries::is_entity_alive(&world, goblin));

        player_attack(&mut world, player, &roster, &mut events);
        assert_eq!(world.get::<&Health>(goblin).unwrap().current, 0);
        assert!(!queries::is_entity_alive(&world, goblin));
        assert_eq!(world.get::<&Experience>(player).unwrap().current, 25);

        let all: Vec<_> = events.drain().collect();
        assert_eq!(
            all[0],
            GameEvent::PlayerAttack {
                target: "Goblin",
                damage: 13
            }
        );
        assert_eq!(all.last(), Some(&GameEvent::EnemyDefeated { name: "Goblin", xp: 25 }));
    }

    #[test]
    fn test_attack_with_nothing_adjacent() {
        let (mut world, player, mut events) = setup();
        let far = enemies::ORC.spawn(&mut world, 12, 10);
        assert_eq!(player_attack(&mut world, player, &[far], &mut events), None);
        assert_eq!(events.drain().collect::<Vec<_>>(), vec![GameEvent::NoEnemyInRange]);
        assert_eq!(world.get::<&Health>(far).unwrap().current, 50);
    }

    #[test]
    fn test_attack_reaches_diagonals_and_hits_only_one() {
        let (mut world, player, mut events) = setup();
        let first = enemies::GOBLIN.spawn(&mut world, 9, 9);
        let second = enemies::GOBLIN.spawn(&mut world, 11, 11);
        player_attack(&mut world, player, &[first, second], &mut events);
        assert_eq!(world.get::<&Health>(first).unwrap().current, 17);
        assert_eq!(world.get::<&Health>(second).unwrap().current, 30);
    }

    #[test]
    fn test_attack_skips_dead_enemies() {
        let (mut world, player, mut events) = setup();
        let dead = enemies::GOBLIN.spawn(&mut world, 10, 11);
        world.get::<&mut Health>(dead).unwrap().lose(30);
        let alive = enemies::GOBLIN.spawn(&mut world, 10, 9);
        assert_eq!(player_attack(&mut world, player, &[dead, alive], &mut events), Some(alive));
    }

    #[test]
    fn test_strike_area_chebyshev() {
        let (mut world, player, mut events) = setup();
        let near = enemies::ORC.spawn(&mut world, 11, 11);
        let edge = enemies::ORC.spawn(&mut world, 12, 12);
        let far = enemies::ORC.spawn(&mut world, 8, 13);
        let roster = vec![near, edge, far];
        let hits = strike_area(&mut world, player, &roster, Position::new(10, 10), 2, 10, &mut events);
        assert_eq!(hits, 2);
        assert_eq!(world.get::<&Health>(near).unwrap().current, 44);
        assert_eq!(world.get::<&Health>(edge).unwrap().current, 44);
        assert_eq!(world.get::<&Health>(far).unwrap().current, 50);
    }

    #[test]
    fn test_remove_dead_entities_compacts_roster() {
        let (mut world, _player, _events) = setup();
        let a = enemies::GOBLIN.spawn(&mut world, 1, 1);
        let b = enemies::GOBLIN.spawn(&mut world, 2, 2);
        let c = enemies::GOBLIN.spawn(&mut world, 3, 3);
        world.get::<&mut Health>(b).unwrap().lose(30);
        let mut roster = vec![a, b, c];

        assert_eq!(remove_dead_entities(&mut world, &mut roster), 1);
        assert_eq!(roster, vec![a, c]);
        assert!(!world.contains(b));
    }
}
