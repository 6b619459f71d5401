//! Terminal game loop.
//!
//! Renders the HUD and map, reads one key per turn, hands parsed commands to
//! the engine, and prints whatever events the turn produced. Optionally
//! mirrors every event as a JSON line to an event log.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use crate::components::Glyph;
use crate::engine::{GameMode, GameState};
use crate::errors::GameError;
use crate::events::{EventQueue, GameEvent};
use crate::input::{Command, InputSource};
use crate::systems::{self, HudStats, RenderEntity};

const BANNER: &str = "=== TACTICAL DUNGEON CRAWLER ===";
const TAGLINE: &str = "Survive the dungeon and defeat all enemies!";
const PROMPT: &str = "Actions: (w/a/s/d) move | (f) attack | (1-3) abilities | (q) quit";

/// Append-only JSON-lines trace of game events
pub struct EventLog<W: Write> {
    writer: W,
}

impl EventLog<BufWriter<File>> {
    /// Open (or create) a log file for appending
    pub fn open(path: &Path) -> Result<Self, GameError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn append(&mut self, event: &GameEvent) -> Result<(), GameError> {
        serde_json::to_writer(&mut self.writer, event)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), GameError> {
        self.writer.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// HUD block followed by the map
fn render<W: Write>(state: &GameState, out: &mut W) -> Result<(), GameError> {
    puffin::profile_function!();

    let player = state.player_entity;
    let Some(hud) = HudStats::from_world(&state.world, player) else {
        return Ok(());
    };
    let Some(pos) = state.player_position() else {
        return Ok(());
    };

    writeln!(out)?;
    for line in systems::render_hud(state.current_floor, &hud) {
        writeln!(out, "{line}")?;
    }

    let glyph = state
        .world
        .get::<&Glyph>(player)
        .map(|g| g.0)
        .unwrap_or('@');
    let enemies = systems::collect_renderables(&state.world, &state.enemies);
    writeln!(out)?;
    for line in systems::render_map(&state.grid, &RenderEntity { pos, glyph }, &enemies) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Print drained events and mirror them to the log
fn report<W: Write, L: Write>(
    events: &mut EventQueue,
    out: &mut W,
    mut event_log: Option<&mut EventLog<L>>,
) -> Result<(), GameError> {
    for event in events.drain() {
        writeln!(out, "{}", event.message())?;
        if let Some(log) = event_log.as_deref_mut() {
            log.append(&event)?;
        }
    }
    if let Some(log) = event_log {
        log.flush()?;
    }
    Ok(())
}

/// Play until the player dies or quits. End of input counts as quitting.
pub fn run<R: BufRead, W: Write, L: Write>(
    state: &mut GameState,
    input: &mut InputSource<R>,
    out: &mut W,
    mut event_log: Option<&mut EventLog<L>>,
) -> Result<GameMode, GameError> {
    let mut events = EventQueue::new();

    writeln!(out, "{BANNER}")?;
    writeln!(out, "{TAGLINE}")?;

    while !state.mode.is_finished() {
        puffin::GlobalProfiler::lock().new_frame();
        render(state, out)?;

        if state.check_floor_cleared(&mut events) {
            writeln!(out)?;
            report(&mut events, out, event_log.as_deref_mut())?;
            continue;
        }

        write!(out, "\n{PROMPT}\n> ")?;
        out.flush()?;

        let command = match input.next_key()? {
            Some(key) => match Command::parse(key) {
                Some(command) => command,
                None => {
                    events.push(GameEvent::InvalidInput { input: key });
                    report(&mut events, out, event_log.as_deref_mut())?;
                    continue;
                }
            },
            None => {
                log::debug!("input closed, quitting");
                Command::Quit
            }
        };

        state.execute_command(command, &mut events);
        report(&mut events, out, event_log.as_deref_mut())?;
    }

    out.flush()?;
    Ok(state.mode)
}
