//! Fielding drill: catch falling balls before they reach the turf

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Session length in seconds
pub const DURATION_SECS: u32 = 45;
/// One object drops per second
pub const SPAWN_INTERVAL: f32 = 1.0;
/// Spawn band keeps objects fully on the field
pub const SPAWN_MARGIN: f32 = 20.0;
pub const RADIUS_MIN: f32 = 15.0;
pub const RADIUS_MAX: f32 = 25.0;
/// Fall speed range, px/sec
pub const FALL_SPEED_MIN: f32 = 120.0;
pub const FALL_SPEED_MAX: f32 = 300.0;
/// Ball colors, picked uniformly at spawn
pub const PALETTE: [u32; 4] = [0xe74c3c, 0xf39c12, 0x3498db, 0x9b59b6];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub pos: Vec2,
    pub radius: f32,
    pub speed: f32,
    pub color: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatchingState {
    pub objects: Vec<FallingObject>,
    pub missed: u32,
}

impl CatchingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a fresh object with randomized position, size, speed and color
    pub fn spawn(&mut self, rng: &mut Pcg32) {
        let x = rng.random_range(SPAWN_MARGIN..PLAYFIELD_WIDTH - SPAWN_MARGIN);
        self.objects.push(FallingObject {
            pos: Vec2::new(x, -SPAWN_MARGIN),
            radius: rng.random_range(RADIUS_MIN..RADIUS_MAX),
            speed: rng.random_range(FALL_SPEED_MIN..FALL_SPEED_MAX),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
        });
    }

    /// Advance every object; ones that clear the bottom edge count as
    /// missed and are removed.
    pub fn advance(&mut self, dt: f32) {
        let mut missed = 0;
        for obj in &mut self.objects {
            obj.pos.y += obj.speed * dt;
        }
        self.objects.retain(|obj| {
            let dropped = obj.pos.y > PLAYFIELD_HEIGHT + obj.radius;
            if dropped {
                missed += 1;
            }
            !dropped
        });
        self.missed += missed;
    }

    /// Attempt a catch at `point`. The closest object whose radius
    /// strictly contains the point is taken; returns whether one was.
    pub fn catch(&mut self, point: Vec2) -> bool {
        let caught = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, obj)| point.distance(obj.pos) < obj.radius)
            .min_by(|(_, a), (_, b)| {
                point
                    .distance(a.pos)
                    .partial_cmp(&point.distance(b.pos))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i);

        match caught {
            Some(i) => {
                self.objects.remove(i);
                true
            }
            None => false,
        }
    }
}
