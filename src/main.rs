//! Sea-Ping Warfare headless driver
//!
//! Runs the simulation at one step per frame with the autopilot at the
//! controls (its menu clicks resolved by the on-screen menu), paints every frame into a recording canvas, and reports what
//! happened. Set `RUST_LOG=info` (or `debug`) to follow along.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sea_ping_warfare::autopilot::Autopilot;
use sea_ping_warfare::renderer::DrawList;
use sea_ping_warfare::sim::{GameEvent, GameState, GeneratedLevels, tick};
use sea_ping_warfare::ui::{Menu, draw_frame};
use sea_ping_warfare::{Settings, Tuning};

/// Command-line arguments for a headless demo run
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Seed for procedurally generated levels
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Number of frames to simulate (60 per second of game time)
    #[arg(long, default_value_t = 3600, value_parser = clap::value_parser!(u64).range(1..))]
    frames: u64,
    /// JSON file overriding gameplay constants
    #[arg(long, value_name = "PATH")]
    tuning: Option<PathBuf>,
    /// JSON file with presentation preferences
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,
    /// Write the final frame's draw commands to this file as JSON
    #[arg(long = "dump-frame", value_name = "PATH")]
    dump_frame: Option<PathBuf>,
    /// Stop at the first game over instead of restarting
    #[arg(long)]
    no_restart: bool,
}

/// Running totals over a demo session
#[derive(Debug, Default)]
struct Summary {
    games: u32,
    levels_cleared: u32,
    enemies_sunk: u32,
    player_hits: u32,
    best_score: u64,
}

impl Summary {
    fn record(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::LevelStarted { level: 1 } => self.games += 1,
            GameEvent::LevelCleared { .. } => self.levels_cleared += 1,
            GameEvent::EnemySunk { .. } => self.enemies_sunk += 1,
            GameEvent::PlayerHit { .. } => self.player_hits += 1,
            GameEvent::GameOver { score, .. } => self.best_score = self.best_score.max(score),
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)
            .with_context(|| format!("failed to load tuning from {}", path.display()))?,
        None => Tuning::default(),
    };
    let settings = args
        .settings
        .as_ref()
        .map(|path| Settings::load(path))
        .unwrap_or_default();

    log::info!("Sea-Ping Warfare (headless) seed={} frames={}", args.seed, args.frames);

    let mut state = GameState::with_levels(tuning, GeneratedLevels::new(args.seed));
    let mut pilot = Autopilot::new(!args.no_restart);
    let mut menu = Menu::new();
    let mut canvas = DrawList::new();
    let mut summary = Summary::default();
    let mut ticks = 0u64;

    'frames: for _ in 0..args.frames {
        ticks += 1;
        // Pointer clicks go through the menu, which hands back any MenuAction
        let gesture = pilot.plan(&state, &menu);
        let input = gesture.resolve(state.phase, &mut menu, state.tuning.screen());
        for event in tick(&mut state, &input) {
            log::info!("frame {}: {:?}", state.frame, event);
            summary.record(&event);
            if event == GameEvent::QuitRequested {
                break 'frames;
            }
        }
        menu.sync(state.phase);
        draw_frame(&mut canvas, &state, &menu, &settings);
    }

    if let Some(path) = &args.dump_frame {
        let json = canvas.to_json().context("failed to serialize draw list")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write frame dump to {}", path.display()))?;
        log::info!("Wrote {} draw commands to {}", canvas.len(), path.display());
    }

    let best = summary.best_score.max(state.score);
    println!("Ran {} frames ({} in play)", ticks, state.frame);
    println!("  games played:   {}", summary.games);
    println!("  levels cleared: {}", summary.levels_cleared);
    println!("  enemies sunk:   {}", summary.enemies_sunk);
    println!("  hits taken:     {}", summary.player_hits);
    println!("  final phase:    {:?} (level {}, score {})", state.phase, state.level, state.score);
    println!("  best score:     {}", best);
    Ok(())
}
