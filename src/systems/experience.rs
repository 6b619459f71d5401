//! Experience and leveling system.

use hecs::{Entity, World};

use crate::components::{CombatStats, Experience, Health, Mana};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};

/// XP needed to reach the next level
pub fn xp_for_level(level: u32) -> u32 {
    level * XP_PER_LEVEL_MULTIPLIER
}

/// Add XP to an experience component, handling level ups.
/// Returns how many levels were gained.
pub fn grant_xp(exp: &mut Experience, amount: u32) -> u32 {
    exp.current += amount;
    let mut levels_gained = 0;
    while exp.current >= xp_for_level(exp.level) {
        exp.current -= xp_for_level(exp.level);
        exp.level += 1;
        levels_gained += 1;
    }
    levels_gained
}

/// Apply the fixed per-level stat gains, refilling health and mana.
pub fn apply_level_up(health: &mut Health, stats: &mut CombatStats, mana: &mut Mana) {
    health.raise_max(LEVEL_UP_HEALTH);
    stats.attack += LEVEL_UP_ATTACK;
    stats.defense += LEVEL_UP_DEFENSE;
    mana.raise_max(LEVEL_UP_MANA);
}

/// Grant XP to the player, applying one level-up per threshold crossed.
pub fn award_experience(world: &mut World, player: Entity, amount: u32, events: &mut EventQueue) {
    let Ok((exp, health, stats, mana)) = world
        .query_one_mut::<(&mut Experience, &mut Health, &mut CombatStats, &mut Mana)>(player)
    else {
        return;
    };

    let first_new_level = exp.level + 1;
    let gained = grant_xp(exp, amount);
    for new_level in first_new_level..first_new_level + gained {
        apply_level_up(health, stats, mana);
        log::info!("player reached level {new_level}");
        events.push(GameEvent::LevelUp { new_level });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawning::spawn_player;

    #[test]
    fn test_xp_for_level() {
        assert_eq!(xp_for_level(1), XP_PER_LEVEL_MULTIPLIER);
        assert_eq!(xp_for_level(2), 2 * XP_PER_LEVEL_MULTIPLIER);
        assert_eq!(xp_for_level(5), 5 * XP_PER_LEVEL_MULTIPLIER);
    }

    #[test]
    fn test_grant_xp_no_level_up() {
        let mut exp = Experience { current: 0, level: 1 };
        assert_eq!(grant_xp(&mut exp, 10), 0);
        assert_eq!(exp.current, 10);
        assert_eq!(exp.level, 1);
    }

    #[test]
    fn test_grant_xp_level_up() {
        let mut exp = Experience { current: 0, level: 1 };
        assert_eq!(grant_xp(&mut exp, xp_for_level(1)), 1);
        assert_eq!(exp.level, 2);
        assert_eq!(exp.current, 0);
    }

    #[test]
    fn test_grant_xp_multiple_level_ups() {
        let mut exp = Experience { current: 0, level: 1 };
        // 100 + 200 + 300, plus a remainder below the level-4 threshold
        let gained = grant_xp(&mut exp, 600 + 250);
        assert_eq!(gained, 3);
        assert_eq!(exp.level, 4);
        assert_eq!(exp.current, 250);
        assert!(exp.current < xp_for_level(exp.level));
    }

    #[test]
    fn test_award_experience_applies_stat_gains() {
        let mut world = World::new();
        let player = spawn_player(&mut world, 0, 0);
        world.get::<&mut Health>(player).unwrap().lose(70);
        world.get::<&mut Mana>(player).unwrap().spend(40);
        let mut events = EventQueue::new();

        award_experience(&mut world, player, 300, &mut events);

        let health = *world.get::<&Health>(player).unwrap();
        let stats = *world.get::<&CombatStats>(player).unwrap();
        let mana = *world.get::<&Mana>(player).unwrap();
        let exp = *world.get::<&Experience>(player).unwrap();
        assert_eq!(exp, Experience { current: 0, level: 3 });
        assert_eq!(health, Health { current: 140, max: 140 });
        assert_eq!(stats, CombatStats::new(21, 9));
        assert_eq!(mana, Mana { current: 70, max: 70 });

        let levels: Vec<_> = events.drain().collect();
        assert_eq!(
            levels,
            vec![
                GameEvent::LevelUp { new_level: 2 },
                GameEvent::LevelUp { new_level: 3 }
            ]
        );
    }
}
