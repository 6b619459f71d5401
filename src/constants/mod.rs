//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod abilities;
mod combat;
mod dungeon;
mod enemies;
mod gameplay;

pub use abilities::*;
pub use combat::*;
pub use dungeon::*;
pub use enemies::*;
pub use gameplay::*;
