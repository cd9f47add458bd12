//! Integration test harness.
//!
//! Everything runs headless: tests drive `tick` directly with synthetic input.

#![allow(dead_code)]

use breakout::sim::{Game, TickInput};

pub const DT: f32 = 1.0 / 60.0;

/// Input that keeps the paddle under the ball and launches whenever docked
pub fn tracking_input(game: &Game) -> TickInput {
    let paddle_mid = game.paddle.bottom_mid().x;
    let ball_x = game.ball.pos.x;
    TickInput {
        move_left: ball_x < paddle_mid - 10.0,
        move_right: ball_x > paddle_mid + 10.0,
        launch: game.ball.is_docked(),
    }
}

/// Put an in-flight ball at `pos` heading along `vel` (unit length)
pub fn place_ball(game: &mut Game, pos: glam::Vec2, vel: glam::Vec2) {
    game.ball.launch();
    game.ball.prev_pos = pos;
    game.ball.pos = pos;
    game.ball.vel = vel;
}
