//! Pointer tracking and parallax smoothing.
//!
//! Physics reads the raw pointer position; rendering reads the smoothed
//! parallax offset.

use crate::state::Surface;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

/// A re-armable one-shot deadline. Arming again replaces the pending deadline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Debounce {
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = Some(now + after);
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PointerState {
    /// `None` until the first move event.
    pub position: Option<Vec2>,
    pub moving: bool,
    pub target_offset: Vec2,
    pub smoothed_offset: Vec2,
    stop_timer: Debounce,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer move and re-arm the "stopped moving" timer.
    pub fn on_move(
        &mut self,
        pos: Vec2,
        surface: Surface,
        parallax_strength: f32,
        debounce: Duration,
        now: Instant,
    ) {
        self.position = Some(pos);
        self.moving = true;
        self.stop_timer.arm(now, debounce);
        self.target_offset = (pos - surface.center()) * parallax_strength;
    }

    /// Flip `moving` off once the debounce deadline has passed without new input.
    pub fn expire(&mut self, now: Instant) {
        if self.stop_timer.fire_if_due(now) {
            self.moving = false;
        }
    }

    /// Move the smoothed offset a fixed fraction of the way toward the target.
    ///
    /// With `factor` in \[0, 1\] this never overshoots.
    pub fn smooth_step(&mut self, factor: f32) {
        let factor = factor.clamp(0.0, 1.0);
        self.smoothed_offset += (self.target_offset - self.smoothed_offset) * factor;
    }
}
