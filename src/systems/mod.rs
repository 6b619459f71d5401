//! Game systems organized by domain.
//!
//! This module contains all game logic systems, split into focused submodules:
//! - `abilities`: Ability gating (slot, cooldown, mana) and effects
//! - `ai`: Enemy attack hooks and greedy stepping
//! - `combat`: Damage, melee, area strikes, and death handling
//! - `experience`: XP, leveling, and stat gains
//! - `movement`: Player movement and collision
//! - `rendering`: Map and HUD projection to text

pub mod abilities;
pub mod ai;
pub mod combat;
pub mod experience;
pub mod movement;
pub mod rendering;

// Re-export commonly used items
pub use abilities::{use_ability, AbilityOutcome};
pub use ai::run_enemy_turns;
pub use combat::{player_attack, remove_dead_entities};
pub use movement::{player_move, MoveResult};
pub use rendering::{collect_renderables, render_hud, render_map, HudStats, RenderEntity};
