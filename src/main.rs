//! Breakout headless entry point
//!
//! Runs one game at a fixed frame time with seeded random player input and
//! reports the outcome. Useful for soak-testing the simulation without a
//! window.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use breakout::sim::{Game, GameEvent, TickInput, tick};
use breakout::{Frame, Settings};

#[derive(Parser, Debug)]
#[command(name = "breakout")]
#[command(about = "Run a headless Breakout game with scripted random input")]
struct Args {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Input generator seed
    #[arg(long)]
    seed: Option<u64>,
    /// Frame limit
    #[arg(long)]
    max_frames: Option<u32>,
    /// Fixed frame time in seconds
    #[arg(long)]
    frame_dt: Option<f32>,
    /// Print the final frame as JSON
    #[arg(long)]
    json: bool,
}

/// Random movement intents that change every few frames
struct ScriptedInput {
    rng: Pcg32,
    hold_frames: u32,
    held: u32,
    current: TickInput,
}

impl ScriptedInput {
    fn new(seed: u64, hold_frames: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            hold_frames,
            held: 0,
            current: TickInput::default(),
        }
    }

    fn next(&mut self, game: &Game) -> TickInput {
        if self.held == 0 {
            let (move_left, move_right) = match self.rng.random_range(0..3) {
                0 => (true, false),
                1 => (false, true),
                _ => (false, false),
            };
            self.current = TickInput {
                move_left,
                move_right,
                launch: false,
            };
            self.held = self.hold_frames;
        }
        self.held -= 1;

        TickInput {
            launch: game.ball.is_docked() && self.rng.random_bool(0.1),
            ..self.current
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(max_frames) = args.max_frames {
        settings.max_frames = max_frames;
    }
    if let Some(frame_dt) = args.frame_dt {
        settings.frame_dt = frame_dt;
    }
    settings.validate()?;

    log::info!("Breakout (headless) starting with seed {}", settings.seed);

    let mut game = Game::new();
    let mut input = ScriptedInput::new(settings.seed, settings.intent_hold_frames);
    let mut bricks_destroyed = 0u32;
    let mut paddle_hits = 0u32;

    for frame in 1..=settings.max_frames {
        let tick_input = input.next(&game);
        for event in tick(&mut game, &tick_input, settings.frame_dt) {
            match event {
                GameEvent::BrickDestroyed { .. } => bricks_destroyed += 1,
                GameEvent::PaddleHit { .. } => paddle_hits += 1,
                GameEvent::LifeLost { lives } => log::info!("Life lost, {lives} left"),
                GameEvent::PowerUpAcquired { label, .. } => log::info!("Power-up: {label}"),
                _ => {}
            }
        }

        if settings.report_every > 0 && frame % settings.report_every == 0 {
            log::info!(
                "Frame {frame}: points={} lives={} remaining={} ball_speed={:.1}",
                game.state.points,
                game.paddle.lives,
                game.bricks.remaining(),
                game.ball.speed
            );
        }

        if game.state.game_over {
            break;
        }
    }

    println!("Frames:     {}", game.frame);
    println!("Points:     {}", game.state.points);
    println!("Lives:      {}", game.paddle.lives);
    println!(
        "Bricks:     {} destroyed, {} remaining",
        bricks_destroyed,
        game.bricks.remaining()
    );
    println!("Paddle hits: {paddle_hits}");
    println!("Game over:  {}", game.state.game_over);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&Frame::capture(&game))?);
    }

    Ok(())
}
