//! Points-threshold reward table
//!
//! Each entry fires once when the score first reaches its threshold and
//! nudges a paddle or ball stat. Entries stay on the HUD for a short while
//! after being acquired.

use serde::{Deserialize, Serialize};

use super::state::{Ball, Paddle};
use crate::consts::*;

/// Stat change carried by a power-up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PowerUpEffect {
    GrowPaddle(f32),
    ShrinkPaddle(f32),
    SpeedUpPaddle(f32),
    SpeedUpBall(f32),
    SlowBall(f32),
}

impl PowerUpEffect {
    /// Apply the effect once
    ///
    /// Shrinking stops at [`PADDLE_MIN_WIDTH`] and slowing at [`BALL_MIN_SPEED`].
    /// Slowing leaves a docked ball alone, since launch resets its speed.
    pub fn apply(self, paddle: &mut Paddle, ball: &mut Ball) {
        match self {
            PowerUpEffect::GrowPaddle(amount) => paddle.rect.width += amount,
            PowerUpEffect::ShrinkPaddle(amount) => {
                paddle.rect.width = (paddle.rect.width - amount).max(PADDLE_MIN_WIDTH);
            }
            PowerUpEffect::SpeedUpPaddle(amount) => paddle.speed += amount,
            PowerUpEffect::SpeedUpBall(amount) => ball.speed += amount,
            PowerUpEffect::SlowBall(amount) => {
                if ball.enabled {
                    ball.speed = (ball.speed - amount).max(BALL_MIN_SPEED);
                }
            }
        }
    }

    /// HUD label; large bumps get a double sign
    pub fn label(&self) -> String {
        let (sign, stat, amount) = match *self {
            PowerUpEffect::GrowPaddle(a) => ('+', "Size", a),
            PowerUpEffect::ShrinkPaddle(a) => ('-', "Size", a),
            PowerUpEffect::SpeedUpPaddle(a) => ('+', "Speed", a),
            PowerUpEffect::SpeedUpBall(a) => ('+', "Ball", a),
            PowerUpEffect::SlowBall(a) => ('-', "Ball", a),
        };
        let strong = match *self {
            PowerUpEffect::GrowPaddle(_) | PowerUpEffect::ShrinkPaddle(_) => amount > 50.0,
            PowerUpEffect::SpeedUpPaddle(_) => amount > 25.0,
            PowerUpEffect::SpeedUpBall(_) | PowerUpEffect::SlowBall(_) => amount > 2.0,
        };
        if strong {
            format!("{sign}{sign} {stat}")
        } else {
            format!("{sign} {stat}")
        }
    }
}

/// One row of the reward table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub effect: PowerUpEffect,
    /// Points needed to unlock
    pub threshold: i32,
    pub acquired: bool,
    /// Seconds the HUD label stays up after acquisition
    pub display_timer: f32,
}

impl PowerUp {
    pub fn new(effect: PowerUpEffect, threshold: i32) -> Self {
        Self {
            effect,
            threshold,
            acquired: false,
            display_timer: POWERUP_DISPLAY_SECS,
        }
    }

    /// Whether the HUD should still show this entry
    pub fn is_displayed(&self) -> bool {
        self.acquired && self.display_timer > 0.0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerUpTable {
    pub entries: Vec<PowerUp>,
}

impl PowerUpTable {
    /// Default rewards spread evenly across the available points
    ///
    /// Entry `i` unlocks at `(i + 1) * total_bricks / (count + 1)`.
    pub fn standard(total_bricks: usize) -> Self {
        let effects = [
            PowerUpEffect::SpeedUpPaddle(25.0),
            PowerUpEffect::SpeedUpPaddle(25.0),
            PowerUpEffect::GrowPaddle(35.0),
            PowerUpEffect::SpeedUpPaddle(25.0),
            PowerUpEffect::SpeedUpPaddle(50.0),
            PowerUpEffect::GrowPaddle(35.0),
        ];
        debug_assert_eq!(effects.len(), MAX_POWERUPS);

        Self::evenly_spaced(&effects, total_bricks)
    }

    pub fn evenly_spaced(effects: &[PowerUpEffect], total_points: usize) -> Self {
        let slots = effects.len() + 1;
        let entries = effects
            .iter()
            .enumerate()
            .map(|(i, &effect)| PowerUp::new(effect, ((i + 1) * total_points / slots) as i32))
            .collect();
        Self { entries }
    }

    /// Tick display timers and grant every newly reached entry
    ///
    /// Returns the indices granted this call, in table order.
    pub fn update(
        &mut self,
        points: i32,
        paddle: &mut Paddle,
        ball: &mut Ball,
        dt: f32,
    ) -> Vec<usize> {
        let mut granted = Vec::new();

        for (i, entry) in self.entries.iter_mut().enumerate() {
            if entry.acquired {
                entry.display_timer -= dt;
                continue;
            }
            if entry.threshold > points {
                continue;
            }

            entry.acquired = true;
            entry.effect.apply(paddle, ball);
            log::info!(
                "Power-up {} acquired at {} points: {}",
                i,
                points,
                entry.effect.label()
            );
            granted.push(i);
        }

        granted
    }

    /// Labels currently shown on the HUD
    pub fn displayed(&self) -> impl Iterator<Item = &PowerUp> {
        self.entries.iter().filter(|p| p.is_displayed())
    }
}
