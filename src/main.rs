//! Rally Pong headless driver
//!
//! Plays one match per run with the autopilot on both sides, then writes the
//! session metrics as JSON.
//!
//! Usage: `rally-pong [mode | config.json] [max-frames] [output.json] [seed]`

use std::error::Error;
use std::fs;

use rally_pong::autopilot::Autopilot;
use rally_pong::consts::FRAME_MS;
use rally_pong::metrics::{self, MatchMetrics};
use rally_pong::render::NullCanvas;
use rally_pong::{Game, GameConfig, GameMode, Session};

const DEFAULT_MAX_FRAMES: u64 = 60 * 60 * 10;
const DEFAULT_SEED: u64 = 12345;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let target = args.next().unwrap_or_else(|| GameMode::Pong.as_str().to_string());
    let max_frames = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_MAX_FRAMES,
    };
    let output = args.next();
    let seed = match args.next() {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SEED,
    };

    let exported = if target.ends_with(".json") {
        let config = GameConfig::from_json(&fs::read_to_string(&target)?)?;
        log::info!("Loaded configuration from {}", target);
        let mut game = Game::new(config, seed)?;
        play(&mut game, max_frames);
        vec![MatchMetrics::from_game(1, &game)]
    } else {
        let mode =
            GameMode::from_str(&target).ok_or_else(|| format!("unknown mode '{}'", target))?;
        let mut session = Session::new(mode, seed)?;
        play(session.game_mut(), max_frames);
        session.export_metrics()
    };

    for summary in &exported {
        let (left, right) = summary.points_won();
        log::info!(
            "Match {}: {} point(s), {}-{}, {:.1} s of play",
            summary.match_number,
            summary.points.len(),
            left,
            right,
            summary.total_duration() / 1000.0
        );
        if let Some(longest) = summary.longest_point() {
            log::info!(
                "Longest point: #{} at {:.1} s ({} + {} hits)",
                longest.id,
                longest.duration / 1000.0,
                longest.left_hits,
                longest.right_hits
            );
        }
    }

    let json = metrics::to_json(&exported)?;
    match output {
        Some(path) => {
            fs::write(&path, json)?;
            log::info!("Metrics written to {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

/// Run fixed frames until the match ends or `max_frames` is reached
fn play(game: &mut Game, max_frames: u64) {
    let mut pilot = Autopilot::new();
    let mut canvas = NullCanvas;
    let mut frames = 0;
    while frames < max_frames && !game.is_over() {
        let keys = pilot.keys(game);
        game.process(FRAME_MS, &keys, &mut canvas);
        frames += 1;
    }

    let score = game.score();
    match game.winner() {
        Some(side) => log::info!(
            "{:?} won {}-{} after {} frames",
            side,
            score.left,
            score.right,
            frames
        ),
        None => log::warn!(
            "Stopped after {} frames at {}-{} with no winner",
            frames,
            score.left,
            score.right
        ),
    }
}
