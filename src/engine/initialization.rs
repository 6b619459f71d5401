//! World initialization - creates the game world and spawns initial entities.

use crate::grid::Grid;
use crate::spawning;

use hecs::{Entity, World};
use rand::Rng;

/// Build a fresh world for `grid`: the player on a random floor cell, then
/// the floor's enemies. Returns the world, the player, and the roster.
pub fn init_world(grid: &Grid, floor: u32, rng: &mut impl Rng) -> (World, Entity, Vec<Entity>) {
    puffin::profile_function!();

    let mut world = World::new();
    let (x, y) = grid.random_floor_cell(rng);
    let player = spawning::spawn_player(&mut world, x, y);
    let enemies = spawning::spawn_floor_enemies(&mut world, grid, floor, rng);

    log::info!(
        "floor {floor} ready: player at ({x}, {y}), {} enemies",
        enemies.len()
    );

    (world, player, enemies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Player, Position};
    use crate::constants::*;
    use crate::queries;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_init_world_places_everyone_on_floor() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = Grid::new_floor(DUNGEON_WIDTH, DUNGEON_HEIGHT, &mut rng);
        let (world, player, enemies) = init_world(&grid, STARTING_FLOOR, &mut rng);

        assert!(world.get::<&Player>(player).is_ok());
        assert_eq!(enemies.len(), 4);
        for entity in enemies.iter().copied().chain(std::iter::once(player)) {
            let pos: Position = queries::get_entity_position(&world, entity).unwrap();
            assert!(grid.is_walkable(pos.x, pos.y));
        }
    }
}
