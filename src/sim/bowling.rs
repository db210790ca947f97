//! Bowling accuracy: land the delivery on the stumps
//!
//! No moving entities; every pointer-down is a delivery tested against a
//! fixed target rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Session length in seconds
pub const DURATION_SECS: u32 = 60;
/// Points for a delivery that hits the stumps
pub const HIT_POINTS: u32 = 10;

/// Axis-aligned rectangle, inclusive on all edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }
}

/// Three stumps centered at x=400 on the batting crease
pub const STUMPS: Rect = Rect {
    min: Vec2::new(370.0, 450.0),
    max: Vec2::new(430.0, 550.0),
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BowlingState {
    pub stumps: Rect,
    /// Where the last successful delivery landed
    pub last_hit: Option<Vec2>,
}

impl BowlingState {
    pub fn new() -> Self {
        Self {
            stumps: STUMPS,
            last_hit: None,
        }
    }

    /// Bowl at `target`; returns true when the stumps are hit
    pub fn deliver(&mut self, target: Vec2) -> bool {
        if self.stumps.contains(target) {
            self.last_hit = Some(target);
            true
        } else {
            false
        }
    }
}

impl Default for BowlingState {
    fn default() -> Self {
        Self::new()
    }
}
