//! Particle set: kinematic state, integration and boundary reflection.

use crate::config::FieldConfig;
use crate::state::Surface;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

pub const MIN_DEPTH: f32 = 0.5;
pub const MAX_DEPTH: f32 = 1.0;

/// One point in the field.
///
/// - `position`: simulation-space position (parallax and shake excluded)
/// - `velocity`: per-frame displacement
/// - `depth`: fixed in \[0.5, 1.0\]; scales parallax, size and opacity
/// - `degree`: edges this particle joined in the current connection pass
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    depth: f32,
    pub degree: u32,
}

impl Particle {
    pub fn new(position: Vec2, velocity: Vec2, depth: f32) -> Self {
        Self {
            position,
            velocity,
            depth: depth.clamp(MIN_DEPTH, MAX_DEPTH),
            degree: 0,
        }
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Rendering displacement for this particle given the smoothed pointer offset.
    #[inline]
    pub fn parallax(&self, smoothed_offset: Vec2) -> Vec2 {
        smoothed_offset * self.depth
    }

    /// Rendered radius; nearer particles (lower depth) draw larger.
    #[inline]
    pub fn size(&self, pulse: f32) -> f32 {
        3.0 + (1.0 - self.depth) * 5.0 + pulse
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        0.3 + (1.0 - self.depth) * 0.7
    }
}

#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    pub particles: Vec<Particle>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Replace every particle with `count` fresh ones spread uniformly over the surface.
    pub fn initialize<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        surface: Surface,
        default_speed: f32,
        rng: &mut R,
    ) {
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let position = Vec2::new(
                rng.gen::<f32>() * surface.width,
                rng.gen::<f32>() * surface.height,
            );
            let velocity = random_heading(rng) * default_speed;
            let depth = MIN_DEPTH + rng.gen::<f32>() * (MAX_DEPTH - MIN_DEPTH);
            self.particles.push(Particle::new(position, velocity, depth));
        }
    }

    /// Give every particle a random heading at `speed`.
    pub fn scatter<R: Rng + ?Sized>(&mut self, speed: f32, rng: &mut R) {
        for p in &mut self.particles {
            p.velocity = random_heading(rng) * speed;
        }
    }

    /// Advance one frame: damp over-speed particles, move, then reflect
    /// velocities of particles that drifted past the margin.
    ///
    /// Velocity deltas from the force field must already be applied.
    pub fn integrate(&mut self, cfg: &FieldConfig, surface: Surface, formation_active: bool) {
        let damping = if formation_active {
            cfg.slow_down_factor_2
        } else {
            cfg.slow_down_factor
        };
        let margin = cfg.edge_margin;
        for p in &mut self.particles {
            if p.velocity.length() > cfg.default_speed {
                p.velocity *= damping;
            }
            p.position += p.velocity;

            if p.position.x < -margin || p.position.x > surface.width + margin {
                p.velocity.x = -p.velocity.x;
            }
            // bottom gets half the margin
            if p.position.y < -margin || p.position.y > surface.height + margin / 2.0 {
                p.velocity.y = -p.velocity.y;
            }
        }
    }
}

#[inline]
fn random_heading<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen::<f32>() * TAU;
    Vec2::new(angle.cos(), angle.sin())
}
