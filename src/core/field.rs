// The particle vortex: initial layout and the per-frame position update.
//
// Every animated quantity is a closed-form function of absolute elapsed time
// and the per-particle constants captured at generation. Nothing is
// integrated, so a frame can be reproduced from `t` alone.

use super::constants::*;
use super::jitter::Jitter;
use glam::{Vec2, Vec3};
use std::f32::consts::PI;

/// Fixed-size particle set. Index `i` always refers to the same particle.
#[derive(Clone, Debug)]
pub struct ParticleField {
    pub base_angle: Vec<f32>,
    pub base_radius: Vec<f32>,
    pub positions: Vec<Vec3>,
}

impl ParticleField {
    /// Lay out `count` particles on a tapered helix.
    pub fn generate(count: usize, jitter: &mut impl Jitter) -> Self {
        let mut base_angle = Vec::with_capacity(count);
        let mut base_radius = Vec::with_capacity(count);
        let mut positions = Vec::with_capacity(count);
        for i in 0..count {
            let t = i as f32 / count as f32;
            let angle = t * PI * FIELD_TURNS_PI + jitter.symmetric(ANGLE_JITTER);
            let radius = FIELD_INNER_RADIUS
                + t.powf(FIELD_RADIUS_EXPONENT) * FIELD_RADIUS_SPAN
                + jitter.symmetric(RADIUS_JITTER);
            let y = (t - 0.5) * FIELD_HEIGHT_SPAN + jitter.symmetric(HEIGHT_JITTER);
            positions.push(Vec3::new(angle.cos() * radius, y, angle.sin() * radius));
            base_angle.push(angle);
            base_radius.push(radius);
        }
        Self {
            base_angle,
            base_radius,
            positions,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Recompute every position for elapsed time `t` and pointer target.
    pub fn update(&mut self, t: f32, pointer: Vec2) {
        let n = self.positions.len();
        for (i, pos) in self.positions.iter_mut().enumerate() {
            *pos = particle_position(i, n, self.base_angle[i], self.base_radius[i], t, pointer);
        }
    }
}

/// Position of particle `i` out of `n` at elapsed time `t`.
#[inline]
pub fn particle_position(
    i: usize,
    n: usize,
    base_angle: f32,
    base_radius: f32,
    t: f32,
    pointer: Vec2,
) -> Vec3 {
    let fi = i as f32;
    let frac = fi / n.max(1) as f32;
    let bucket = (i % DRIFT_BUCKETS) as f32;
    let a = base_angle + t * DRIFT_RATE * (DRIFT_BASE + bucket * DRIFT_BUCKET_STEP);
    let r = base_radius * (BREATH_BASE + (t * BREATH_RATE + fi).sin() * BREATH_AMPLITUDE);
    let x = a.cos() * r + pointer.x * PARALLAX_X * (1.0 + frac);
    let y = (frac - 0.5) * FIELD_HEIGHT_SPAN
        + (t * BOB_RATE + fi).sin() * BOB_AMPLITUDE
        + pointer.y * PARALLAX_Y;
    let z = a.sin() * r + (fi + t * WOBBLE_RATE).cos() * WOBBLE_AMPLITUDE;
    Vec3::new(x, y, z)
}

/// Whole-object rotations (radians) driven by elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneRotations {
    /// Particle field about world Y.
    pub field_y: f32,
    /// Ring about its own Z (applied after its -90° X tilt).
    pub ring_z: f32,
    /// Streak about its own Y (applied after its X tilt).
    pub streak_y: f32,
}

pub fn rotations_at(t: f32) -> SceneRotations {
    SceneRotations {
        field_y: t * FIELD_SPIN_RATE,
        ring_z: (t * RING_SWAY_RATE).sin() * RING_SWAY_AMPLITUDE,
        streak_y: (t * STREAK_SWAY_RATE).sin() * STREAK_SWAY_AMPLITUDE,
    }
}
