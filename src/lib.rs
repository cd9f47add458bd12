//! Breakout - paddle and ball brick breaking game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball, bricks, collisions, scoring)
//! - `view`: Read-only snapshot of the simulation for a renderer
//! - `settings`: Headless driver configuration

pub mod settings;
pub mod sim;
pub mod view;

pub use settings::{Settings, SettingsError};
pub use view::Frame;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 450.0;

    /// Player defaults
    pub const MAX_LIVES: u8 = 5;
    pub const PADDLE_X: f32 = 350.0;
    pub const PADDLE_Y: f32 = 410.0;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 200.0;
    /// Narrowest the paddle can be shrunk by a power-up
    pub const PADDLE_MIN_WIDTH: f32 = 1.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 200.0;
    /// Gap between the paddle top and a docked ball's center
    pub const BALL_DOCK_OFFSET: f32 = 15.0;
    /// Slowest a ball in flight can be made by a power-up
    pub const BALL_MIN_SPEED: f32 = 50.0;
    /// Speed bonus on every paddle contact (uncapped)
    pub const PADDLE_HIT_SPEEDUP: f32 = 5.0;
    /// Speed bonus on every brick contact (uncapped)
    pub const BRICK_HIT_SPEEDUP: f32 = 2.0;

    /// Brick wall layout
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_HGAP: f32 = 3.0;
    pub const BRICK_VGAP: f32 = 3.0;
    pub const BRICK_VPAD: f32 = 60.0;
    pub const BRICK_COLUMNS: usize = 13;
    pub const BRICK_ROWS: usize = 8;
    /// Left margin that centers the wall horizontally
    pub const BRICK_HPAD: f32 =
        (SCREEN_WIDTH - (BRICK_COLUMNS as f32 * (BRICK_WIDTH + BRICK_HGAP) - BRICK_HGAP)) / 2.0;

    /// Scoring
    pub const POINTS_PER_BRICK: i32 = 1;
    pub const LIFE_LOST_PENALTY: i32 = 10;

    /// Tolerance for classifying a brick hit as a true corner hit
    pub const CORNER_EPSILON: f32 = 0.000_001;
    /// Minimum velocity component that counts as approaching an edge
    pub const APPROACH_EPSILON: f32 = 0.000_001;

    /// Power-ups
    pub const MAX_POWERUPS: usize = 6;
    pub const POWERUP_DISPLAY_SECS: f32 = 2.0;
}

/// Fast approximate 1/sqrt(x)
///
/// Bit-level initial guess refined by two Newton steps; relative error stays
/// below 1e-5 for positive normal inputs. `x` must be positive.
#[inline]
pub fn rsqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let mut y = f32::from_bits(0x5f37_59df - (x.to_bits() >> 1));
    y *= 1.5 - half * y * y;
    y *= 1.5 - half * y * y;
    y
}

/// Scale a vector to unit length using [`rsqrt`]
///
/// The zero vector is outside the contract and yields non-finite components.
#[inline]
pub fn normalize_fast(v: Vec2) -> Vec2 {
    v * rsqrt(v.length_squared())
}
