//! Axis-aligned rectangle geometry for the paddle and bricks
//!
//! Screen space: origin at the top-left, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left origin and size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Horizontal center of the bottom edge
    pub fn bottom_mid(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.bottom())
    }

    /// Check whether a circle touches or overlaps the rectangle
    ///
    /// Touching counts as overlap, so a circle resting exactly on an edge hits.
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        let half = Vec2::new(self.width / 2.0, self.height / 2.0);
        let d = (center - self.center()).abs();

        if d.x > half.x + radius || d.y > half.y + radius {
            return false;
        }
        if d.x <= half.x || d.y <= half.y {
            return true;
        }

        // Only the corner regions remain
        (d - half).length_squared() <= radius * radius
    }
}
