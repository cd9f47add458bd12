//! Game state and core simulation types
//!
//! Everything the frame loop owns lives here: paddle, ball, brick grid,
//! score record and the aggregate [`Game`] that ties them together.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::powerup::PowerUpTable;
use super::rect::Rect;
use crate::consts::*;

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Horizontal speed (units/second)
    pub speed: f32,
    pub lives: u8,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(PADDLE_X, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
            speed: PADDLE_SPEED,
            lives: MAX_LIVES,
        }
    }
}

impl Paddle {
    /// Move from player intent, then keep the paddle inside `[0, arena_width]`
    ///
    /// Both directions held cancel out.
    pub fn update(&mut self, move_left: bool, move_right: bool, dt: f32, arena_width: f32) {
        let movement = self.speed * dt;

        if move_right {
            self.rect.x += movement;
        }
        if move_left {
            self.rect.x -= movement;
        }

        self.clamp(arena_width);
    }

    /// Keep the paddle inside `[0, arena_width]`
    ///
    /// A paddle wider than the arena is narrowed to fit.
    pub fn clamp(&mut self, arena_width: f32) {
        self.rect.width = self.rect.width.min(arena_width);

        if self.rect.x < 0.0 {
            self.rect.x = 0.0;
        } else if self.rect.right() >= arena_width {
            self.rect.x = arena_width - self.rect.width;
        }
    }

    /// Pivot point used to angle paddle bounces
    #[inline]
    pub fn bottom_mid(&self) -> Vec2 {
        self.rect.bottom_mid()
    }
}

/// The ball
///
/// A disabled ball is docked on the paddle waiting for launch; an enabled
/// ball is in flight and always carries a unit-length `vel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub radius: f32,
    pub pos: Vec2,
    /// Position at the start of the tick, used for all collision tests
    pub prev_pos: Vec2,
    /// Direction of travel
    pub vel: Vec2,
    /// Scalar speed (units/second)
    pub speed: f32,
    pub enabled: bool,
}

impl Ball {
    /// Create a ball docked above the paddle
    pub fn docked(paddle: &Paddle) -> Self {
        let pos = Vec2::new(paddle.bottom_mid().x, paddle.rect.y - BALL_DOCK_OFFSET);
        Self {
            radius: BALL_RADIUS,
            pos,
            prev_pos: pos,
            vel: Vec2::ZERO,
            speed: 0.0,
            enabled: false,
        }
    }

    /// Return to the docked state above the paddle
    pub fn dock(&mut self, paddle: &Paddle) {
        *self = Self::docked(paddle);
    }

    #[inline]
    pub fn is_docked(&self) -> bool {
        !self.enabled
    }

    /// Keep a docked ball centered over the paddle
    pub fn follow(&mut self, paddle: &Paddle) {
        if self.is_docked() {
            self.pos.x = paddle.bottom_mid().x;
        }
    }

    /// Launch straight up at the base speed
    pub fn launch(&mut self) {
        if self.is_docked() {
            self.enabled = true;
            self.speed = BALL_SPEED;
            self.vel = Vec2::new(0.0, -1.0);
        }
    }

    /// Advance by one tick, remembering where the tick started
    pub fn integrate(&mut self, dt: f32) {
        self.prev_pos = self.pos;
        self.pos += self.vel * (self.speed * dt);
    }
}

/// Cosmetic brick shading, alternating in a checkerboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickShade {
    #[default]
    Light,
    Dark,
}

impl BrickShade {
    pub fn flipped(self) -> Self {
        match self {
            BrickShade::Light => BrickShade::Dark,
            BrickShade::Dark => BrickShade::Light,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub shade: BrickShade,
    pub enabled: bool,
}

/// Fixed rows x columns wall of bricks stored row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    columns: usize,
    bricks: Vec<Brick>,
    remaining: usize,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::with_layout(BRICK_ROWS, BRICK_COLUMNS)
    }
}

impl BrickGrid {
    /// Build a full wall using the standard brick size, gaps and padding
    pub fn with_layout(rows: usize, columns: usize) -> Self {
        let mut bricks = Vec::with_capacity(rows * columns);
        let mut row_shade = BrickShade::Light;

        for r in 0..rows {
            let mut shade = row_shade;
            for c in 0..columns {
                bricks.push(Brick {
                    rect: Rect::new(
                        BRICK_HPAD + c as f32 * (BRICK_WIDTH + BRICK_HGAP),
                        BRICK_VPAD + r as f32 * (BRICK_HEIGHT + BRICK_VGAP),
                        BRICK_WIDTH,
                        BRICK_HEIGHT,
                    ),
                    shade,
                    enabled: true,
                });
                shade = shade.flipped();
            }
            row_shade = row_shade.flipped();
        }

        Self {
            rows,
            columns,
            remaining: bricks.len(),
            bricks,
        }
    }

    /// Build a grid from explicit bricks (row-major, `columns` per row)
    ///
    /// Returns `None` unless `bricks` fills a whole number of rows.
    pub fn from_bricks(columns: usize, bricks: Vec<Brick>) -> Option<Self> {
        if columns == 0 || bricks.len() % columns != 0 {
            return None;
        }
        let remaining = bricks.iter().filter(|b| b.enabled).count();
        Some(Self {
            rows: bricks.len() / columns,
            columns,
            bricks,
            remaining,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total bricks, live or destroyed
    #[inline]
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Number of bricks still standing
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// (row, column) of a flat index
    #[inline]
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row < self.rows && col < self.columns {
            self.bricks.get(self.index(row, col))
        } else {
            None
        }
    }

    pub fn brick(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    /// Live bricks only, in row-major order
    pub fn live(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.enabled)
    }

    /// First live brick overlapping the circle, scanning top-to-bottom then left-to-right
    pub fn first_hit(&self, center: Vec2, radius: f32) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| b.enabled && b.rect.overlaps_circle(center, radius))
    }

    /// Knock out a brick. Returns false if it was already gone or out of range.
    pub fn destroy(&mut self, index: usize) -> bool {
        match self.bricks.get_mut(index) {
            Some(brick) if brick.enabled => {
                brick.enabled = false;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Score record owned by the frame loop
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Can go negative through life-loss penalties
    pub points: i32,
    /// Once set, never cleared
    pub game_over: bool,
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Every brick destroyed
    Cleared,
    /// No lives left
    OutOfLives,
}

/// Notable things that happened during a tick, for sound/HUD collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched,
    PaddleHit { speed: f32 },
    BrickDestroyed { row: usize, col: usize },
    WallBounce,
    LifeLost { lives: u8 },
    PowerUpAcquired { index: usize, label: String },
    GameOver { reason: GameOverReason },
}

/// Everything the frame loop owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub arena: Vec2,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
    pub state: GameState,
    pub powerups: PowerUpTable,
    /// Simulation tick counter
    pub frame: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard game: 800x450 arena, 13x8 wall, five lives
    pub fn new() -> Self {
        Self::with_bricks(BrickGrid::default())
    }

    /// Standard paddle, ball and power-ups around a custom brick grid
    pub fn with_bricks(bricks: BrickGrid) -> Self {
        let paddle = Paddle::default();
        let ball = Ball::docked(&paddle);
        let powerups = PowerUpTable::standard(bricks.len());
        log::info!(
            "New game: {}x{} bricks, {} lives",
            bricks.columns(),
            bricks.rows(),
            paddle.lives
        );
        Self {
            arena: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            paddle,
            ball,
            bricks,
            state: GameState::default(),
            powerups,
            frame: 0,
        }
    }
}
