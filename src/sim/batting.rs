//! Batting net: time the swing as the delivery crosses the bat
//!
//! One ball is in flight at a time. A swing that connects inside the
//! hittable window scores boundary runs; a delivery that beats the bat is
//! retired unscored.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::PLAYFIELD_HEIGHT;

/// Session length in seconds
pub const DURATION_SECS: u32 = 60;
/// A fresh delivery is bowled this often if none is in flight
pub const BOWL_INTERVAL: f32 = 2.0;
/// Vertical window around the bat within which a swing connects
pub const HIT_WINDOW: f32 = 30.0;
/// A ball this close above the bat has beaten the batsman
pub const PASS_LINE: f32 = 20.0;
/// Delivery fall speed range, px/sec
pub const BALL_SPEED_MIN: f32 = 300.0;
pub const BALL_SPEED_MAX: f32 = 480.0;
/// Boundary runs for a connected swing, chosen uniformly
pub const HIT_REWARDS: [u32; 2] = [4, 6];
pub const BALL_RADIUS: f32 = 12.0;

/// Where deliveries pitch and where the bat waits
const RELEASE_POINT: Vec2 = Vec2::new(400.0, 50.0);
const BAT_POSITION: Vec2 = Vec2::new(400.0, 500.0);

/// The one delivery in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattingState {
    pub ball: Option<Ball>,
    pub bat: Vec2,
}

impl BattingState {
    pub fn new() -> Self {
        Self {
            ball: None,
            bat: BAT_POSITION,
        }
    }

    /// Bowl a new delivery if none is in flight (2 s cadence)
    pub fn bowl(&mut self, rng: &mut Pcg32) {
        if self.ball.is_none() {
            self.ball = Some(Ball {
                pos: RELEASE_POINT,
                speed: rng.random_range(BALL_SPEED_MIN..BALL_SPEED_MAX),
            });
        }
    }

    /// Advance the delivery; retire it unscored once it beats the bat or
    /// leaves the playfield.
    pub fn advance(&mut self, dt: f32) {
        if let Some(ball) = &mut self.ball {
            ball.pos.y += ball.speed * dt;
            let beaten = ball.pos.y >= self.bat.y - PASS_LINE;
            let gone = ball.pos.y > PLAYFIELD_HEIGHT;
            if beaten || gone {
                self.ball = None;
            }
        }
    }

    /// True while the delivery sits inside the hittable window
    pub fn hittable(&self) -> bool {
        self.ball
            .map(|b| (b.pos.y - self.bat.y).abs() <= HIT_WINDOW)
            .unwrap_or(false)
    }

    /// Swing the bat. A connected hit retires the ball and returns the
    /// runs scored; a mistimed swing changes nothing.
    pub fn swing(&mut self, rng: &mut Pcg32) -> Option<u32> {
        if !self.hittable() {
            return None;
        }
        self.ball = None;
        Some(HIT_REWARDS[rng.random_range(0..HIT_REWARDS.len())])
    }
}

impl Default for BattingState {
    fn default() -> Self {
        Self::new()
    }
}
