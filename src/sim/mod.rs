//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and deterministic:
//! - Time only enters through the `dt` passed to `tick`
//! - Bricks are scanned in a fixed row-major order
//! - No rendering, input polling or platform dependencies

pub mod collision;
pub mod powerup;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    ArenaContact, BrickContact, BrickHit, Side, resolve_arena, resolve_brick, resolve_bricks,
    resolve_paddle,
};
pub use powerup::{PowerUp, PowerUpEffect, PowerUpTable};
pub use rect::Rect;
pub use state::{
    Ball, Brick, BrickGrid, BrickShade, Game, GameEvent, GameOverReason, GameState, Paddle,
};
pub use tick::{TickInput, tick};
