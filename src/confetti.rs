//! Celebration confetti burst
//!
//! A fixed population of falling streamers with per-particle drift and
//! tilt oscillation. Particles that clear the bottom edge respawn above
//! the viewport so the shower stays dense for its whole run, then the
//! animation reports itself finished after five seconds.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use crate::surface::DrawSurface;

pub const PARTICLE_COUNT: usize = 150;
pub const DURATION_SECS: f32 = 5.0;

const PALETTE: [u32; 5] = [0x2ecc71, 0xf39c12, 0x3498db, 0xe74c3c, 0x9b59b6];
const MIN_RADIUS: f32 = 4.0;
const MAX_RADIUS: f32 = 10.0;
/// Respawn height above the top edge
const RESPAWN_Y: f32 = -30.0;
/// Motion constants are tuned for 60 fps frames
const BASE_RATE: f32 = 60.0;

#[derive(Debug, Clone, Copy)]
struct Particle {
    pos: Vec2,
    radius: f32,
    color: u32,
    /// Per-particle drift phase, fixed at spawn
    drift: f32,
    tilt: f32,
    tilt_angle: f32,
    tilt_speed: f32,
}

impl Particle {
    fn spawn(rng: &mut Pcg32) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..PLAYFIELD_WIDTH),
                rng.random_range(-PLAYFIELD_HEIGHT..0.0),
            ),
            radius: rng.random_range(MIN_RADIUS..MAX_RADIUS),
            color: PALETTE[rng.random_range(0..PALETTE.len())],
            drift: rng.random_range(0.0..std::f32::consts::TAU),
            tilt: rng.random_range(-10.0..10.0),
            tilt_angle: 0.0,
            tilt_speed: rng.random_range(0.05..0.12),
        }
    }

    fn advance(&mut self, dt: f32, index: usize) {
        let step = dt * BASE_RATE;
        self.tilt_angle += self.tilt_speed * step;
        // Heavier (larger) pieces fall faster
        self.pos.y += (self.drift.cos() + 3.0 + self.radius / 2.0) / 2.0 * step;
        self.pos.x += self.drift.sin() * step;
        self.tilt = (self.tilt_angle - index as f32 / 3.0).sin() * 15.0;
    }
}

/// One confetti run, seeded for reproducible showers
#[derive(Debug)]
pub struct Confetti {
    particles: Vec<Particle>,
    rng: Pcg32,
    elapsed: f32,
}

impl Confetti {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(&mut rng))
            .collect();
        Self {
            particles,
            rng,
            elapsed: 0.0,
        }
    }

    /// Advance the shower; particles past the bottom wrap back above the
    /// top edge with a fresh horizontal position.
    pub fn tick(&mut self, dt: f32) {
        if self.finished() {
            return;
        }
        self.elapsed += dt;

        for i in 0..self.particles.len() {
            self.particles[i].advance(dt, i);
            if self.particles[i].pos.y > PLAYFIELD_HEIGHT {
                let p = &mut self.particles[i];
                p.pos = Vec2::new(self.rng.random_range(0.0..PLAYFIELD_WIDTH), RESPAWN_Y);
                p.tilt = self.rng.random_range(-10.0..10.0);
            }
        }
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= DURATION_SECS
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Streamers are short tilted strokes, not dots
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        for p in &self.particles {
            let from = p.pos + Vec2::new(p.tilt + p.radius / 4.0, 0.0);
            let to = p.pos + Vec2::new(p.tilt, p.tilt + p.radius / 4.0);
            surface.stroke_line(from, to, p.radius / 2.0, p.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCommand, RecordingSurface};

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_population_is_stable_across_respawns() {
        let mut confetti = Confetti::new(42);
        for _ in 0..240 {
            confetti.tick(FRAME);
        }
        assert_eq!(confetti.particle_count(), PARTICLE_COUNT);

        let mut surface = RecordingSurface::default();
        confetti.draw(&mut surface);
        let strokes = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeLine { .. }))
            .count();
        assert_eq!(strokes, PARTICLE_COUNT);
    }

    #[test]
    fn test_particles_stay_within_vertical_bounds_after_wrap() {
        let mut confetti = Confetti::new(7);
        for _ in 0..600 {
            confetti.tick(FRAME);
            for p in &confetti.particles {
                assert!(p.pos.y <= PLAYFIELD_HEIGHT + MAX_RADIUS * 4.0);
            }
        }
    }

    #[test]
    fn test_finishes_after_five_seconds() {
        let mut confetti = Confetti::new(1);
        confetti.tick(4.9);
        assert!(!confetti.finished());
        confetti.tick(0.2);
        assert!(confetti.finished());

        // Finished showers are inert
        let before: Vec<Vec2> = confetti.particles.iter().map(|p| p.pos).collect();
        confetti.tick(1.0);
        let after: Vec<Vec2> = confetti.particles.iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_colors_are_drawn_at_random_from_the_palette() {
        let confetti = Confetti::new(3);
        let colors: Vec<u32> = confetti.particles.iter().map(|p| p.color).collect();

        assert!(colors.iter().all(|c| PALETTE.contains(c)));
        // Random draws, not a fixed rotation through the palette
        let cycled: Vec<u32> = (0..PARTICLE_COUNT).map(|i| PALETTE[i % PALETTE.len()]).collect();
        assert_ne!(colors, cycled);
    }

    #[test]
    fn test_same_seed_same_shower() {
        let mut a = Confetti::new(99);
        let mut b = Confetti::new(99);
        for _ in 0..120 {
            a.tick(FRAME);
            b.tick(FRAME);
        }
        for (pa, pb) in a.particles.iter().zip(&b.particles) {
            assert_eq!(pa.pos, pb.pos);
            assert_eq!(pa.tilt, pb.tilt);
        }
    }
}
