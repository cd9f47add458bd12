//! Read-only snapshot of a game for whatever draws it
//!
//! The simulation never draws. A renderer captures a [`Frame`] after each
//! tick and turns its shapes and HUD strings into pixels.

use glam::Vec2;
use serde::Serialize;

use crate::sim::{BrickShade, Game, Rect};

/// Life marker layout along the bottom-left of the screen
const LIFE_MARKER: Vec2 = Vec2::new(30.0, 10.0);
const LIFE_MARKER_GAP: f32 = 5.0;
const LIFE_MARKER_ORIGIN: Vec2 = Vec2::new(10.0, 435.0);

#[derive(Debug, Clone, Serialize)]
pub struct BallShape {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BrickShape {
    pub rect: Rect,
    pub shade: BrickShade,
}

/// HUD text lines
#[derive(Debug, Clone, Serialize)]
pub struct Hud {
    pub points: String,
    pub paddle_speed: String,
    pub paddle_size: String,
    /// Recently acquired power-up labels, in reward table order
    pub powerups: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub frame: u64,
    pub paddle: Rect,
    pub ball: BallShape,
    /// Live bricks only
    pub bricks: Vec<BrickShape>,
    pub lives: Vec<Rect>,
    pub hud: Hud,
    pub game_over: bool,
}

impl Frame {
    pub fn capture(game: &Game) -> Self {
        let bricks = game
            .bricks
            .live()
            .map(|b| BrickShape {
                rect: b.rect,
                shade: b.shade,
            })
            .collect();

        let lives = (0..game.paddle.lives)
            .map(|i| {
                Rect::new(
                    LIFE_MARKER_ORIGIN.x + f32::from(i) * (LIFE_MARKER.x + LIFE_MARKER_GAP),
                    LIFE_MARKER_ORIGIN.y,
                    LIFE_MARKER.x,
                    LIFE_MARKER.y,
                )
            })
            .collect();

        let hud = Hud {
            points: format!("Points: {}", game.state.points),
            paddle_speed: format!("Speed: {:.2}", game.paddle.speed),
            paddle_size: format!("Size: {:.2}", game.paddle.rect.width),
            powerups: game
                .powerups
                .displayed()
                .map(|p| p.effect.label())
                .collect(),
        };

        Self {
            frame: game.frame,
            paddle: game.paddle.rect,
            ball: BallShape {
                center: game.ball.pos,
                radius: game.ball.radius,
            },
            bricks,
            lives,
            hud,
            game_over: game.state.game_over,
        }
    }
}
