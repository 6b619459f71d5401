//! Game engine - owns all game state and provides a clean API to the front end.
//!
//! The engine handles:
//! - Game state (world, grid, roster, floor, rng)
//! - One full turn per player command
//! - Floor transitions and game over
//!
//! The front end (game_loop.rs) only handles:
//! - Reading keys and parsing them into commands
//! - Printing the HUD, the map, and drained event messages

mod floor_transition;
mod game_state;
pub mod initialization;
mod simulation;

pub use game_state::GameState;

/// Where the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Taking turns on the current floor
    Exploring,
    /// Player health reached zero
    GameOver,
    /// Player asked to leave
    Quit,
}

impl GameMode {
    pub fn is_finished(self) -> bool {
        self != GameMode::Exploring
    }
}
