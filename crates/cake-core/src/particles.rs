//! Confetti particle simulation driving the celebration overlay.
//!
//! Pieces spawn above the visible area, fall with a sinusoidal sway, and
//! respawn at the top once they drift past the bottom edge. All randomness
//! comes from a caller-supplied RNG so the simulation stays deterministic
//! under test.

use crate::constants::{
    CONFETTI_FALL_SPEED_MIN, CONFETTI_FALL_SPEED_SPAN, CONFETTI_HEIGHT_MIN, CONFETTI_HEIGHT_SPAN,
    CONFETTI_PALETTE, CONFETTI_RESPAWN_MARGIN, CONFETTI_SWAY_RATE, CONFETTI_SWAY_SPEED,
    CONFETTI_WIDTH_MIN, CONFETTI_WIDTH_SPAN,
};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub fall_speed: f32, // px/sec
    pub angle: f32,      // sway/rotation phase, radians
    pub size: Vec2,
    pub color: usize, // index into CONFETTI_PALETTE
}

#[derive(Clone, Debug)]
pub struct ConfettiField {
    width: f32,
    height: f32,
    pieces: Vec<Particle>,
}

impl ConfettiField {
    pub fn new(count: usize, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let pieces = (0..count)
            .map(|_| spawn_piece(width, height, rng))
            .collect();
        Self {
            width,
            height,
            pieces,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn pieces(&self) -> &[Particle] {
        &self.pieces
    }

    /// Regenerate the whole field for a new viewport size.
    pub fn resize(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        *self = Self::new(self.pieces.len(), width, height, rng);
    }

    /// Advance the simulation by `dt_sec`. Pieces falling past the bottom
    /// margin re-enter at the top with a fresh horizontal position.
    pub fn step(&mut self, dt_sec: f32, rng: &mut impl Rng) {
        for p in &mut self.pieces {
            p.angle += CONFETTI_SWAY_RATE * dt_sec;
            p.pos.y += p.fall_speed * dt_sec;
            p.pos.x += p.angle.sin() * CONFETTI_SWAY_SPEED * dt_sec;
            if p.pos.y > self.height + CONFETTI_RESPAWN_MARGIN {
                p.pos.y = -CONFETTI_RESPAWN_MARGIN;
                p.pos.x = rng.gen_range(0.0..self.width.max(1.0));
            }
        }
    }
}

fn spawn_piece(width: f32, height: f32, rng: &mut impl Rng) -> Particle {
    Particle {
        pos: Vec2::new(
            rng.gen_range(0.0..width.max(1.0)),
            -rng.gen_range(0.0..height.max(1.0)),
        ),
        fall_speed: CONFETTI_FALL_SPEED_MIN + rng.gen::<f32>() * CONFETTI_FALL_SPEED_SPAN,
        angle: rng.gen::<f32>() * std::f32::consts::PI,
        size: Vec2::new(
            CONFETTI_WIDTH_MIN + rng.gen::<f32>() * CONFETTI_WIDTH_SPAN,
            CONFETTI_HEIGHT_MIN + rng.gen::<f32>() * CONFETTI_HEIGHT_SPAN,
        ),
        color: rng.gen_range(0..CONFETTI_PALETTE.len()),
    }
}
