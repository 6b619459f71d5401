//! Enemy AI: per-variant attack hooks and greedy stepping toward the player.
//!
//! Each living enemy gets one step per turn, in roster order: its variant
//! hook decides whether to strike, then it may shuffle one cell closer.

use hecs::{Entity, World};
use rand::Rng;

use crate::components::{EnemyKind, Health, Monster, Name, Position};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent, StrikeKind};
use crate::grid::Grid;
use crate::queries;

/// A hit an enemy decided to land on the player this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyStrike {
    pub strike: StrikeKind,
    pub damage: i32,
    /// Goes straight to health instead of through defense
    pub pierces_defense: bool,
}

impl EnemyStrike {
    fn melee(strike: StrikeKind, damage: i32) -> Self {
        Self {
            strike,
            damage,
            pierces_defense: false,
        }
    }
}

/// Percentile roll, 0..ROLL_SIDES
fn roll_percent(rng: &mut impl Rng) -> u32 {
    rng.gen_range(0..ROLL_SIDES)
}

impl EnemyKind {
    /// Run this variant's attack hook for one turn. `distance` is the
    /// Manhattan distance to the player. Rolls are only drawn once the range
    /// check passes.
    pub fn resolve_turn(
        &mut self,
        attack: i32,
        distance: i32,
        rng: &mut impl Rng,
    ) -> Option<EnemyStrike> {
        match self {
            EnemyKind::Goblin => (distance <= 1 && roll_percent(rng) < GOBLIN_ATTACK_CHANCE)
                .then(|| EnemyStrike::melee(StrikeKind::Slash, attack)),
            EnemyKind::Orc => (distance <= 1 && roll_percent(rng) < ORC_ATTACK_CHANCE)
                .then(|| EnemyStrike::melee(StrikeKind::Smash, attack + ORC_SMASH_BONUS)),
            EnemyKind::Dragon { breath_cooldown } => {
                *breath_cooldown = breath_cooldown.saturating_sub(1);

                if distance <= DRAGON_BREATH_RANGE
                    && *breath_cooldown == 0
                    && roll_percent(rng) < DRAGON_BREATH_CHANCE
                {
                    *breath_cooldown = DRAGON_BREATH_COOLDOWN;
                    Some(EnemyStrike {
                        strike: StrikeKind::FireBreath,
                        damage: DRAGON_BREATH_DAMAGE,
                        pierces_defense: true,
                    })
                } else if distance <= 1 {
                    Some(EnemyStrike::melee(StrikeKind::Claw, attack))
                } else {
                    None
                }
            }
        }
    }
}

/// One cell from `from` toward `to` along the axis with the larger offset.
/// Ties go to the x axis.
pub fn step_toward(from: Position, to: Position) -> Position {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    if dx.abs() >= dy.abs() {
        Position::new(from.x + dx.signum(), from.y)
    } else {
        Position::new(from.x, from.y + dy.signum())
    }
}

/// Land a strike on the player. Returns the health actually lost.
fn apply_strike(world: &mut World, player: Entity, strike: EnemyStrike) -> i32 {
    let defense = queries::get_combat_stats(world, player)
        .map(|s| s.defense)
        .unwrap_or(0);
    let Ok(mut health) = world.get::<&mut Health>(player) else {
        return 0;
    };

    if strike.pierces_defense {
        let before = health.current;
        health.lose(strike.damage);
        before - health.current
    } else {
        health.take_damage(strike.damage, defense)
    }
}

/// Run the AI pass for every living enemy in roster order.
pub fn run_enemy_turns(
    world: &mut World,
    grid: &Grid,
    player: Entity,
    roster: &[Entity],
    rng: &mut impl Rng,
    events: &mut EventQueue,
) {
    puffin::profile_function!();

    let Some(player_pos) = queries::get_entity_position(world, player) else {
        return;
    };

    for &enemy in roster {
        if !queries::is_entity_alive(world, enemy) {
            continue;
        }
        let Some(enemy_pos) = queries::get_entity_position(world, enemy) else {
            continue;
        };
        let distance = enemy_pos.manhattan(&player_pos);
        let attack = queries::get_combat_stats(world, enemy)
            .map(|s| s.attack)
            .unwrap_or(0);

        let strike = match world.get::<&mut Monster>(enemy) {
            Ok(mut monster) => monster.kind.resolve_turn(attack, distance, rng),
            Err(_) => continue,
        };

        if let Some(strike) = strike {
            let damage = apply_strike(world, player, strike);
            let attacker = world.get::<&Name>(enemy).map(|n| n.0).unwrap_or("Enemy");
            events.push(GameEvent::EnemyAttack {
                attacker,
                strike: strike.strike,
                damage,
            });
        }

        if distance > 1 && roll_percent(rng) < ENEMY_MOVE_CHANCE {
            try_step(world, grid, enemy, enemy_pos, player_pos, roster);
        }
    }
}

/// Move one cell toward the player if the cell is open floor, free of living
/// enemies, and not the player's own cell.
fn try_step(
    world: &mut World,
    grid: &Grid,
    enemy: Entity,
    from: Position,
    player_pos: Position,
    roster: &[Entity],
) -> bool {
    let dest = step_toward(from, player_pos);

    // Never true from Manhattan distance > 1; the player's cell stays off-limits
    if !grid.is_walkable(dest.x, dest.y)
        || dest == player_pos
        || queries::living_enemy_at(world, roster, dest.x, dest.y, Some(enemy)).is_some()
    {
        return false;
    }

    if let Ok(mut pos) = world.get::<&mut Position>(enemy) {
        *pos = dest;
        return true;
    }
    false
}
