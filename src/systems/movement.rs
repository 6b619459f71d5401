//! Player movement system.

use crate::components::Position;
use crate::events::{BlockReason, EventQueue, GameEvent};
use crate::grid::Grid;
use crate::queries;
use hecs::{Entity, World};

/// Result of a player move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved,
    Blocked(BlockReason),
}

/// Step the player by (dx, dy). Walls and living enemies block; bumping an
/// enemy does not attack it. A blocked move still costs the turn.
pub fn player_move(
    world: &mut World,
    grid: &Grid,
    player_entity: Entity,
    roster: &[Entity],
    dx: i32,
    dy: i32,
    events: &mut EventQueue,
) -> MoveResult {
    let Some(pos) = queries::get_entity_position(world, player_entity) else {
        return MoveResult::Blocked(BlockReason::Wall);
    };
    let target = Position::new(pos.x + dx, pos.y + dy);

    let blocked = if !grid.is_walkable(target.x, target.y) {
        Some(BlockReason::Wall)
    } else if queries::living_enemy_at(world, roster, target.x, target.y, None).is_some() {
        Some(BlockReason::Enemy)
    } else {
        None
    };

    if let Some(reason) = blocked {
        events.push(GameEvent::MoveBlocked { reason });
        return MoveResult::Blocked(reason);
    }

    if let Ok(mut p) = world.get::<&mut Position>(player_entity) {
        *p = target;
    }
    MoveResult::Moved
}
