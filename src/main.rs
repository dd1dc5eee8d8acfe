//! Gap Flyer headless driver
//!
//! Runs autopilot players through full sessions and prints the leaderboard.
//! Usage: `gap-flyer [normal|easy|CONFIG.json] [PLAYERS] [SEED]`

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use gap_flyer::{
    DifficultyPreset, Game, GameConfig,
    consts::{COUNTDOWN_INTERVAL_MS, FRAME_RATE_HZ},
    highscores::format_entry,
    sim::{TickInput, TickOutcome},
};

/// Frames the autopilot flies before letting go, so every attempt ends
#[cfg(not(target_arch = "wasm32"))]
const AUTOPILOT_FRAMES: u64 = FRAME_RATE_HZ as u64 * 30;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();
    log::info!("Gap Flyer (native) starting...");

    let args: Vec<String> = std::env::args().collect();

    let config = match args.get(1) {
        None => GameConfig::default(),
        Some(arg) => match DifficultyPreset::from_str(arg) {
            Some(preset) => {
                log::info!("Using {} preset", preset.as_str());
                GameConfig::from_preset(preset)
            }
            None => match GameConfig::load(arg) {
                Ok(config) => config,
                Err(err) => {
                    log::error!("Could not load config {}: {}", arg, err);
                    return ExitCode::FAILURE;
                }
            },
        },
    };
    let players: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2);
    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(2024);

    let mut game = match Game::new(config, seed) {
        Ok(game) => game,
        Err(err) => {
            log::error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    for player in 1..=players {
        play_session(&mut game, player);
        if !game.reset_player() {
            log::warn!("Could not reset after player {}", player);
        }
    }

    println!("Top scores:");
    for (rank, entry) in game.leaderboard().ranked() {
        println!("  {}", format_entry(rank, entry));
    }
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm; the host page drives `Game` directly
}

#[cfg(not(target_arch = "wasm32"))]
fn play_session(game: &mut Game, player: u32) {
    while game.start() {
        let mut countdown_ms = 0;
        while !game.countdown_tick() {
            countdown_ms += COUNTDOWN_INTERVAL_MS;
        }
        log::debug!("Countdown took {} ms", countdown_ms + COUNTDOWN_INTERVAL_MS);

        let mut frame = 0u64;
        loop {
            let input = TickInput {
                idle_mode: frame < AUTOPILOT_FRAMES,
                ..Default::default()
            };
            frame += 1;
            if let TickOutcome::Ended(cause) = game.frame_tick_with(&input) {
                println!(
                    "Player {}: attempt ended ({:?}) with {} points",
                    player,
                    cause,
                    game.score()
                );
                break;
            }
        }

        for event in game.drain_events() {
            log::debug!("{:?}", event);
        }
    }

    let total = game.session().total_score();
    if game.pending_entry().is_some() {
        let name = format!("Player {}", player);
        if let Some(rank) = game.complete_qualifying_entry(Some(&name)) {
            println!("{} ranked #{} with {}", name, rank, total);
        }
    } else {
        println!("Player {} total {} (not ranked)", player, total);
    }
}
