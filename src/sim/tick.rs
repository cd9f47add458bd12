//! Per-frame simulation step
//!
//! Order within a tick: paddle, ball (launch/dock, paddle, bricks, arena,
//! integration), power-ups, then the game-over check.

use super::collision::{resolve_arena, resolve_bricks, resolve_paddle};
use super::state::{Game, GameEvent, GameOverReason};

/// Player intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub move_left: bool,
    /// Move right held
    pub move_right: bool,
    /// Launch pressed this tick (edge-triggered, ignored unless docked)
    pub launch: bool,
}

/// Advance the game by `dt` seconds
///
/// Returns what happened this tick. Does nothing once the game is over.
pub fn tick(game: &mut Game, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if game.state.game_over {
        return events;
    }

    game.frame += 1;

    game.paddle
        .update(input.move_left, input.move_right, dt, game.arena.x);

    update_ball(game, input, dt, &mut events);

    let granted = game
        .powerups
        .update(game.state.points, &mut game.paddle, &mut game.ball, dt);
    game.paddle.clamp(game.arena.x);
    for index in granted {
        events.push(GameEvent::PowerUpAcquired {
            index,
            label: game.powerups.entries[index].effect.label(),
        });
    }

    let reason = if game.bricks.is_cleared() {
        Some(GameOverReason::Cleared)
    } else if game.paddle.lives == 0 {
        Some(GameOverReason::OutOfLives)
    } else {
        None
    };
    if let Some(reason) = reason {
        game.state.game_over = true;
        log::info!(
            "Game over ({:?}) after {} frames: {} points",
            reason,
            game.frame,
            game.state.points
        );
        events.push(GameEvent::GameOver { reason });
    }

    events
}

fn update_ball(game: &mut Game, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    let ball = &mut game.ball;

    if ball.is_docked() {
        if !input.launch {
            ball.follow(&game.paddle);
            return;
        }
        ball.launch();
        log::info!("Ball launched from x={}", ball.pos.x);
        events.push(GameEvent::Launched);
    }

    if resolve_paddle(ball, &game.paddle) {
        events.push(GameEvent::PaddleHit { speed: ball.speed });
    }

    if let Some(hit) = resolve_bricks(ball, &mut game.bricks, &mut game.state) {
        events.push(GameEvent::BrickDestroyed {
            row: hit.row,
            col: hit.col,
        });
    }

    let arena = resolve_arena(ball, &mut game.paddle, &mut game.state, game.arena);
    if arena.bounced() {
        events.push(GameEvent::WallBounce);
    }
    if arena.ball_lost {
        events.push(GameEvent::LifeLost {
            lives: game.paddle.lives,
        });
        // Re-docked: stays put until the next launch
        return;
    }

    ball.integrate(dt);
}
