//! Floor transition: once every enemy is dead the floor is rebuilt and the
//! next wave spawns.

use crate::components::{Health, Mana, Position};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::grid::Grid;
use crate::queries;
use crate::spawning;

use super::GameState;

impl GameState {
    /// Advance to the next floor if the roster has no living enemy left.
    /// Returns true when a transition happened.
    pub fn check_floor_cleared(&mut self, events: &mut EventQueue) -> bool {
        if !queries::all_enemies_dead(&self.world, &self.enemies) {
            return false;
        }

        puffin::profile_function!();
        events.push(GameEvent::FloorCleared {
            floor: self.current_floor,
        });
        self.current_floor += 1;

        for entity in self.enemies.drain(..) {
            let _ = self.world.despawn(entity);
        }

        self.grid = Grid::new_floor(DUNGEON_WIDTH, DUNGEON_HEIGHT, &mut self.rng);
        let (x, y) = self.grid.random_floor_cell(&mut self.rng);
        if let Ok(mut pos) = self.world.get::<&mut Position>(self.player_entity) {
            *pos = Position::new(x, y);
        }

        self.enemies = spawning::spawn_floor_enemies(
            &mut self.world,
            &self.grid,
            self.current_floor,
            &mut self.rng,
        );

        if let Ok((health, mana)) = self
            .world
            .query_one_mut::<(&mut Health, &mut Mana)>(self.player_entity)
        {
            health.heal(FLOOR_CLEAR_HEAL);
            mana.restore(FLOOR_CLEAR_MANA);
        }

        log::info!(
            "descended to floor {} with {} enemies",
            self.current_floor,
            self.enemies.len()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kill_all(state: &mut GameState) {
        for &e in &state.enemies {
            state.world.get::<&mut Health>(e).unwrap().lose(1000);
        }
    }

    #[test]
    fn test_no_transition_while_enemies_live() {
        let mut state = GameState::new(3);
        let mut events = EventQueue::new();
        assert!(!state.check_floor_cleared(&mut events));
        assert_eq!(state.current_floor, 1);
        assert!(events.is_empty());
    }

    #[test]
    fn test_transition_spawns_next_wave_and_restores() {
        let mut state = GameState::new(3);
        let mut events = EventQueue::new();
        let old_enemies = state.enemies.clone();
        kill_all(&mut state);
        {
            let player = state.player_entity;
            state.world.get::<&mut Health>(player).unwrap().lose(50);
            state.world.get::<&mut Mana>(player).unwrap().spend(5);
        }

        assert!(state.check_floor_cleared(&mut events));
        assert_eq!(state.current_floor, 2);
        assert_eq!(state.enemies.len(), 5);
        assert!(old_enemies.iter().all(|&e| !state.world.contains(e)));
        assert!(!queries::all_enemies_dead(&state.world, &state.enemies));

        let player = state.player_entity;
        assert_eq!(state.world.get::<&Health>(player).unwrap().current, 80);
        // +20 clamps to the 50 cap
        assert_eq!(state.world.get::<&Mana>(player).unwrap().current, 50);

        let pos = state.player_position().unwrap();
        assert!(state.grid.is_walkable(pos.x, pos.y));
        assert_eq!(
            events.drain().collect::<Vec<_>>(),
            vec![GameEvent::FloorCleared { floor: 1 }]
        );
    }

    #[test]
    fn test_heal_on_transition_clamps() {
        let mut state = GameState::new(8);
        let mut events = EventQueue::new();
        kill_all(&mut state);
        let player = state.player_entity;
        state.world.get::<&mut Health>(player).unwrap().lose(10);
        state.check_floor_cleared(&mut events);
        assert_eq!(state.world.get::<&Health>(player).unwrap().current, 100);
    }

    #[test]
    fn test_empty_roster_counts_as_cleared() {
        let grid = Grid::with_rooms(10, 10, &[crate::dungeon_gen::Rect::new(1, 1, 4, 4)]);
        let mut state = GameState::with_layout(grid, (2, 2), 1);
        let mut events = EventQueue::new();
        assert!(state.check_floor_cleared(&mut events));
        assert_eq!(state.enemies.len(), 5);
        assert_eq!(state.grid.width, DUNGEON_WIDTH);
    }
}
