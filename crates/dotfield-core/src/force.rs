//! Per-frame velocity impulses from the pointer and from formation targets.

use crate::config::{FieldConfig, CROWDING_THRESHOLD, HOMING_RAMP_DISTANCE, SETTLE_RADIUS};
use crate::particle::Particle;
use crate::pointer::PointerState;
use glam::Vec2;

/// Unit vector pointing from `from` toward `to`; (1, 0) when they coincide.
#[inline]
pub fn heading(from: Vec2, to: Vec2) -> Vec2 {
    let d = to - from;
    Vec2::from_angle(d.y.atan2(d.x))
}

/// Pull particles inside `mouse_radius` toward a moving pointer, and push
/// every nearby particle past the crowding threshold back out.
///
/// Nearby particles are counted in index order, so the first ten found are
/// never pushed on a given frame. Returns the number of nearby particles.
pub fn apply_pointer_forces(
    particles: &mut [Particle],
    pointer: &PointerState,
    cfg: &FieldConfig,
) -> usize {
    let Some(mouse) = pointer.position else {
        return 0;
    };
    let mut nearby = 0usize;
    for p in particles.iter_mut() {
        if p.position.distance(mouse) >= cfg.mouse_radius {
            continue;
        }
        nearby += 1;
        if pointer.moving {
            p.velocity += heading(p.position, mouse) * cfg.gravity_strength;
        }
        if nearby > CROWDING_THRESHOLD {
            p.velocity += heading(mouse, p.position) * cfg.push_strength;
        }
    }
    nearby
}

/// Pull each particle toward its index-aligned target point.
///
/// Targets live in unshifted space while particles render with parallax, so
/// each target is moved back by the particle's own parallax before homing.
/// Particles without a target (the list is shorter) are left alone.
pub fn apply_formation_forces(
    particles: &mut [Particle],
    targets: &[Vec2],
    smoothed_offset: Vec2,
    cfg: &FieldConfig,
) {
    for (p, target) in particles.iter_mut().zip(targets.iter()) {
        let adjusted = *target - p.parallax(smoothed_offset);
        let dist = p.position.distance(adjusted);
        let ramp = (dist / HOMING_RAMP_DISTANCE).min(1.0);
        p.velocity += heading(p.position, adjusted) * cfg.rectangle_gravity * ramp;
        if dist < SETTLE_RADIUS {
            p.velocity *= cfg.slow_down_factor_2;
        }
    }
}
