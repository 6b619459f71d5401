//! Game simulation - turn execution.
//!
//! A turn is the player's action, then cooldown ticks, the enemy pass, mana
//! regeneration, the death check, and finally compaction of dead enemies.

use crate::components::{AbilitySet, Mana};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::input::Command;
use crate::queries;
use crate::systems;

use super::{GameMode, GameState};

impl GameState {
    /// Resolve one player command as a full turn. Does nothing once the
    /// session is over.
    pub fn execute_command(&mut self, command: Command, events: &mut EventQueue) {
        puffin::profile_function!();

        if self.mode.is_finished() {
            return;
        }

        let player = self.player_entity;
        match command {
            Command::Quit => {
                self.mode = GameMode::Quit;
                events.push(GameEvent::Quit {
                    floor: self.current_floor,
                    level: self.player_level(),
                });
                log::info!("player quit on floor {}", self.current_floor);
                return;
            }
            Command::Move { dx, dy } => {
                let result = systems::player_move(
                    &mut self.world,
                    &self.grid,
                    player,
                    &self.enemies,
                    dx,
                    dy,
                    events,
                );
                log::debug!("turn {}: move ({dx}, {dy}) -> {result:?}", self.turn);
            }
            Command::Attack => {
                let target = systems::player_attack(&mut self.world, player, &self.enemies, events);
                log::debug!("turn {}: attack -> {target:?}", self.turn);
            }
            Command::Ability(index) => {
                let outcome =
                    systems::use_ability(&mut self.world, player, &self.enemies, index, events);
                log::debug!("turn {}: ability slot {index} -> {outcome:?}", self.turn);
            }
        }

        self.end_turn(events);
    }

    fn end_turn(&mut self, events: &mut EventQueue) {
        let player = self.player_entity;

        if let Ok(mut abilities) = self.world.get::<&mut AbilitySet>(player) {
            abilities.tick_all();
        }

        systems::run_enemy_turns(
            &mut self.world,
            &self.grid,
            player,
            &self.enemies,
            &mut self.rng,
            events,
        );

        if let Ok(mut mana) = self.world.get::<&mut Mana>(player) {
            mana.restore(MANA_REGEN_PER_TURN);
        }

        if !queries::is_entity_alive(&self.world, player) {
            self.mode = GameMode::GameOver;
            events.push(GameEvent::PlayerDied {
                floor: self.current_floor,
                level: self.player_level(),
            });
            log::info!(
                "player died on floor {} after {} turns",
                self.current_floor,
                self.turn + 1
            );
        }

        let removed = systems::remove_dead_entities(&mut self.world, &mut self.enemies);
        if removed > 0 {
            log::debug!("compacted {removed} dead enemies");
        }

        self.turn += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Health, Position};
    use crate::dungeon_gen::Rect;
    use crate::grid::Grid;
    use crate::spawning::enemies;
    use crate::systems::{collect_renderables, render_map, RenderEntity};

    fn arena() -> GameState {
        let grid = Grid::with_rooms(20, 12, &[Rect::new(1, 1, 18, 10)]);
        GameState::with_layout(grid, (5, 5), 99)
    }

    fn mana(state: &GameState) -> i32 {
        state.world.get::<&Mana>(state.player_entity).unwrap().current
    }

    #[test]
    fn test_quit_skips_the_turn() {
        let mut state = arena();
        let mut events = EventQueue::new();
        state.world.get::<&mut Mana>(state.player_entity).unwrap().spend(10);

        state.execute_command(Command::Quit, &mut events);
        assert_eq!(state.mode, GameMode::Quit);
        assert_eq!(state.turn, 0);
        assert_eq!(mana(&state), 40);
        assert_eq!(
            events.drain().collect::<Vec<_>>(),
            vec![GameEvent::Quit { floor: 1, level: 1 }]
        );
    }

    #[test]
    fn test_ability_turn_costs_mana_then_regenerates() {
        let mut state = arena();
        let mut events = EventQueue::new();

        state.execute_command(Command::Ability(0), &mut events);
        assert_eq!(mana(&state), 50 - 15 + 2);
        let abilities = state.world.get::<&AbilitySet>(state.player_entity).unwrap();
        assert_eq!(abilities.abilities[0].current_cooldown, CLEAVE_COOLDOWN - 1);
        drop(abilities);
        assert_eq!(state.turn, 1);
    }

    #[test]
    fn test_refused_ability_still_takes_turn() {
        let mut state = arena();
        let mut events = EventQueue::new();

        state.execute_command(Command::Ability(0), &mut events);
        events.drain().for_each(drop);
        state.execute_command(Command::Ability(0), &mut events);

        assert_eq!(state.turn, 2);
        // Only the first cleave was paid for
        assert_eq!(mana(&state), 50 - 15 + 2 + 2);
        let all: Vec<_> = events.drain().collect();
        assert!(matches!(all[0], GameEvent::AbilityOnCooldown { .. }));
    }

    #[test]
    fn test_blocked_move_still_takes_turn() {
        let mut state = arena();
        let mut events = EventQueue::new();
        *state.world.get::<&mut Position>(state.player_entity).unwrap() = Position::new(1, 1);

        state.execute_command(Command::Move { dx: 0, dy: -1 }, &mut events);
        assert_eq!(state.player_position(), Some(Position::new(1, 1)));
        assert_eq!(state.turn, 1);
    }

    #[test]
    fn test_kill_is_compacted_at_end_of_turn() {
        let mut state = arena();
        let mut events = EventQueue::new();
        let goblin = enemies::GOBLIN.spawn(&mut state.world, 6, 5);
        state.enemies.push(goblin);
        state.world.get::<&mut Health>(goblin).unwrap().lose(29);

        state.execute_command(Command::Attack, &mut events);
        assert!(state.enemies.is_empty());
        assert!(!state.world.contains(goblin));
        let all: Vec<_> = events.drain().collect();
        assert!(all.contains(&GameEvent::EnemyDefeated { name: "Goblin", xp: 25 }));
        // A dead goblin gets no swing back
        assert!(!all.iter().any(|e| matches!(e, GameEvent::EnemyAttack { .. })));
    }

    #[test]
    fn test_adjacent_goblin_may_hit_back() {
        let mut state = arena();
        let mut events = EventQueue::new();
        let goblin = enemies::GOBLIN.spawn(&mut state.world, 6, 5);
        state.enemies.push(goblin);

        state.execute_command(Command::Attack, &mut events);
        assert_eq!(state.world.get::<&Health>(goblin).unwrap().current, 17);
        let hp = state.world.get::<&Health>(state.player_entity).unwrap().current;
        assert!(hp == 100 || hp == 97);
    }

    #[test]
    fn test_death_ends_session() {
        let mut state = arena();
        let mut events = EventQueue::new();
        state.world.get::<&mut Health>(state.player_entity).unwrap().lose(100);

        state.execute_command(Command::Move { dx: 1, dy: 0 }, &mut events);
        assert_eq!(state.mode, GameMode::GameOver);
        let died = GameEvent::PlayerDied { floor: 1, level: 1 };
        assert_eq!(events.drain().last(), Some(died.clone()));
        assert_eq!(
            died.message(),
            "*** GAME OVER ***\nYou reached floor 1 at level 1"
        );

        // Further commands are ignored
        let turn = state.turn;
        state.execute_command(Command::Attack, &mut events);
        assert_eq!(state.turn, turn);
        assert!(events.is_empty());
    }

    fn snapshot(state: &GameState) -> Vec<String> {
        let pos = state.player_position().unwrap();
        let player = RenderEntity { pos, glyph: '@' };
        render_map(&state.grid, &player, &collect_renderables(&state.world, &state.enemies))
    }

    #[test]
    fn test_same_seed_same_game() {
        let script = "ddssfaawq12f3sdwwaf";
        let run = |seed| {
            let mut state = GameState::new(seed);
            let mut events = EventQueue::new();
            let mut log = Vec::new();
            for key in script.chars() {
                if let Some(cmd) = Command::parse(key) {
                    state.check_floor_cleared(&mut events);
                    state.execute_command(cmd, &mut events);
                }
                log.extend(events.drain());
            }
            (snapshot(&state), log, state.turn)
        };
        assert_eq!(run(1234), run(1234));
    }
}
