//! Binary entrypoint for the dungeon crawler.
//!
//! Flags:
//! - `--seed <u64>` - replay a specific dungeon (default: derived from the clock)
//! - `-v`, `-vv` - more log output on stderr
//! - `--event-log <path>` - append every game event as a JSON line
//! - `--profile` - serve puffin profiling data on the default puffin port
#![allow(dead_code)]

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

mod abilities;
mod components;
mod constants;
mod dungeon_gen;
mod engine;
mod errors;
mod events;
mod game_loop;
mod grid;
mod input;
mod queries;
mod spawning;
mod systems;
mod tile;

use engine::GameState;
use game_loop::EventLog;
use input::InputSource;

#[derive(Parser)]
#[command(name = "dungeon-crawler")]
#[command(about = "A turn-based ASCII dungeon crawler")]
#[command(version)]
struct Cli {
    /// Seed for dungeon generation and every roll in the run
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Append game events as JSON lines to this file
    #[arg(long)]
    event_log: Option<PathBuf>,

    /// Start a puffin_http server for profiling
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let _profiler = if cli.profile {
        let addr = format!("0.0.0.0:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&addr)?;
        puffin::set_scopes_on(true);
        info!("puffin server listening on {addr}");
        Some(server)
    } else {
        None
    };

    let seed = cli.seed.unwrap_or_else(clock_seed);
    info!("starting run with seed {seed}");

    let mut event_log = cli
        .event_log
        .as_deref()
        .map(EventLog::open)
        .transpose()
        .context("failed to open event log")?;

    let mut state = GameState::new(seed);
    let mut input = InputSource::new(io::stdin().lock());
    let mut out = BufWriter::new(io::stdout().lock());

    let mode = game_loop::run(&mut state, &mut input, &mut out, event_log.as_mut())?;
    info!(
        "run ended ({mode:?}) on floor {} after {} turns",
        state.current_floor, state.turn
    );

    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // Stdout carries the game screen, so logs stay quiet unless asked for
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.target(env_logger::Target::Stderr);
    builder.init();
}
