//! Core game state - owns the simulation data.

use crate::components::{Experience, Position};
use crate::constants::*;
use crate::grid::Grid;

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::initialization;
use super::GameMode;

/// Core game state - owns all simulation data.
pub struct GameState {
    /// The ECS world
    pub world: World,

    /// Current floor grid
    pub grid: Grid,

    /// Player entity handle
    pub player_entity: Entity,

    /// Enemies on this floor in spawn order. Dead ones linger until the end
    /// of the turn that killed them.
    pub enemies: Vec<Entity>,

    /// Current floor number
    pub current_floor: u32,

    pub mode: GameMode,

    /// The session's only source of randomness
    pub rng: StdRng,

    /// Completed turns
    pub turn: u64,
}

impl GameState {
    /// Start a session on floor 1. The same seed reproduces the same run.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = Grid::new_floor(DUNGEON_WIDTH, DUNGEON_HEIGHT, &mut rng);
        let (world, player_entity, enemies) =
            initialization::init_world(&grid, STARTING_FLOOR, &mut rng);

        log::debug!("new session with seed {seed}");

        Self {
            world,
            grid,
            player_entity,
            enemies,
            current_floor: STARTING_FLOOR,
            mode: GameMode::Exploring,
            rng,
            turn: 0,
        }
    }

    /// Hand-built session for tests: a given grid, the player at `pos`, and
    /// an empty roster.
    #[cfg(test)]
    pub fn with_layout(grid: Grid, pos: (i32, i32), seed: u64) -> Self {
        let mut world = World::new();
        let player_entity = crate::spawning::spawn_player(&mut world, pos.0, pos.1);
        Self {
            world,
            grid,
            player_entity,
            enemies: Vec::new(),
            current_floor: STARTING_FLOOR,
            mode: GameMode::Exploring,
            rng: StdRng::seed_from_u64(seed),
            turn: 0,
        }
    }

    pub fn player_position(&self) -> Option<Position> {
        crate::queries::get_entity_position(&self.world, self.player_entity)
    }

    pub fn player_level(&self) -> u32 {
        self.world
            .get::<&Experience>(self.player_entity)
            .map(|e| e.level)
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Health;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(42);
        assert_eq!(state.current_floor, 1);
        assert_eq!(state.mode, GameMode::Exploring);
        assert_eq!(state.turn, 0);
        assert_eq!(state.enemies.len(), 4);
        assert_eq!(state.player_level(), 1);
        assert_eq!(
            *state.world.get::<&Health>(state.player_entity).unwrap(),
            Health::new(100)
        );
        let pos = state.player_position().unwrap();
        assert!(state.grid.is_walkable(pos.x, pos.y));
    }

    #[test]
    fn test_same_seed_same_start() {
        let a = GameState::new(7);
        let b = GameState::new(7);
        assert_eq!(a.player_position(), b.player_position());
        assert_eq!(a.grid.rooms, b.grid.rooms);
    }
}
