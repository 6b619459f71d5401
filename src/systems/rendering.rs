//! Rendering-related systems and data structures.
//!
//! Everything here is a pure projection of game state to text lines; the
//! front end decides where the lines go.

use crate::components::{CombatStats, Experience, Glyph, Health, Mana, Position};
use crate::grid::Grid;
use crate::queries;
use crate::systems::experience::xp_for_level;
use hecs::{Entity, World};

/// Entity ready for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderEntity {
    pub pos: Position,
    pub glyph: char,
}

/// Living enemies in roster order, which is also draw priority
pub fn collect_renderables(world: &World, roster: &[Entity]) -> Vec<RenderEntity> {
    queries::living_enemies(world, roster)
        .into_iter()
        .map(|(entity, pos)| RenderEntity {
            pos,
            glyph: world.get::<&Glyph>(entity).map(|g| g.0).unwrap_or('?'),
        })
        .collect()
}

/// Draw the map one row per line. The player's glyph wins on its cell, then
/// the first enemy on a cell, then terrain.
pub fn render_map(grid: &Grid, player: &RenderEntity, enemies: &[RenderEntity]) -> Vec<String> {
    puffin::profile_function!();

    (0..grid.height as i32)
        .map(|y| {
            (0..grid.width as i32)
                .map(|x| {
                    if player.pos.x == x && player.pos.y == y {
                        return player.glyph;
                    }
                    enemies
                        .iter()
                        .find(|e| e.pos.x == x && e.pos.y == y)
                        .map(|e| e.glyph)
                        .or_else(|| grid.get(x, y).map(|t| t.glyph()))
                        .unwrap_or(' ')
                })
                .collect()
        })
        .collect()
}

/// Player status snapshot for the HUD
#[derive(Debug, Clone, Copy)]
pub struct HudStats {
    pub health: Health,
    pub mana: Mana,
    pub stats: CombatStats,
    pub experience: Experience,
}

impl HudStats {
    pub fn from_world(world: &World, player: Entity) -> Option<Self> {
        Some(Self {
            health: *world.get::<&Health>(player).ok()?,
            mana: *world.get::<&Mana>(player).ok()?,
            stats: *world.get::<&CombatStats>(player).ok()?,
            experience: *world.get::<&Experience>(player).ok()?,
        })
    }
}

/// The three-line status block shown above the map
pub fn render_hud(floor: u32, hud: &HudStats) -> Vec<String> {
    let level = hud.experience.level;
    vec![
        format!("=== FLOOR {floor} ==="),
        format!(
            "Level {level} | HP: {}/{} | MP: {}/{} | XP: {}/{}",
            hud.health.current,
            hud.health.max,
            hud.mana.current,
            hud.mana.max,
            hud.experience.current,
            xp_for_level(level),
        ),
        format!("ATK: {} | DEF: {}", hud.stats.attack, hud.stats.defense),
    ]
}
