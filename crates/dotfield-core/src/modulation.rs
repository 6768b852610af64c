//! Display-only timers: pulse, hue rotation and shake.
//!
//! None of these feed back into the simulation; the renderer reads them
//! once per frame.

use crate::config::FieldConfig;
use glam::Vec2;
use instant::Instant;
use rand::Rng;
use std::time::Duration;

pub const PULSE_STEP: f32 = 0.05;
pub const PULSE_MAX: f32 = 3.0;

/// Size pulse bouncing between 0 and [`PULSE_MAX`].
#[derive(Clone, Copy, Debug)]
pub struct Pulse {
    pub value: f32,
    direction: f32,
}

impl Default for Pulse {
    fn default() -> Self {
        Self {
            value: 0.0,
            direction: 1.0,
        }
    }
}

impl Pulse {
    pub fn step(&mut self) {
        self.value += self.direction * PULSE_STEP;
        if self.value >= PULSE_MAX {
            self.value = PULSE_MAX;
            self.direction = -1.0;
        } else if self.value <= 0.0 {
            self.value = 0.0;
            self.direction = 1.0;
        }
    }

    #[inline]
    pub fn rising(&self) -> bool {
        self.direction > 0.0
    }
}

/// Hue advanced on its own wall-clock interval, independent of frame rate.
#[derive(Clone, Copy, Debug)]
pub struct HueRotation {
    pub hue: f32,
    last_tick: Option<Instant>,
}

impl HueRotation {
    pub fn new(hue: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            last_tick: None,
        }
    }

    pub fn advance(&mut self, step: f32) {
        self.hue = (self.hue + step).rem_euclid(360.0);
    }

    /// Apply every interval that elapsed since the last tick.
    pub fn update(&mut self, now: Instant, interval: Duration, step: f32) {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return;
        };
        if interval.is_zero() || now <= last {
            return;
        }
        let elapsed = now - last;
        let ticks = (elapsed.as_secs_f64() / interval.as_secs_f64()).floor() as u32;
        if ticks > 0 {
            self.advance(step * ticks as f32);
            self.last_tick = Some(last + interval * ticks);
        }
    }
}

/// Random jitter for a fixed duration after each restart.
#[derive(Clone, Copy, Debug, Default)]
pub struct Shake {
    pub offset: Vec2,
    elapsed: Duration,
    next_tick: Option<Instant>,
}

impl Shake {
    pub fn restart(&mut self) {
        self.elapsed = Duration::ZERO;
        self.next_tick = None;
    }

    #[inline]
    pub fn is_active(&self, duration: Duration) -> bool {
        self.elapsed < duration
    }

    pub fn update<R: Rng + ?Sized>(&mut self, now: Instant, cfg: &FieldConfig, rng: &mut R) {
        if !self.is_active(cfg.shake_duration) {
            self.offset = Vec2::ZERO;
            return;
        }
        if self.next_tick.is_some_and(|t| now < t) {
            return;
        }
        self.offset = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5) * cfg.shake_intensity;
        self.elapsed += cfg.shake_tick;
        self.next_tick = Some(now + cfg.shake_tick);
    }
}

#[derive(Clone, Copy, Debug)]
pub struct VisualModulator {
    pub pulse: Pulse,
    pub hue: HueRotation,
    pub shake: Shake,
}

impl VisualModulator {
    pub fn new(cfg: &FieldConfig) -> Self {
        Self {
            pulse: Pulse::default(),
            hue: HueRotation::new(cfg.hue),
            shake: Shake::default(),
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, now: Instant, cfg: &FieldConfig, rng: &mut R) {
        self.pulse.step();
        self.hue.update(now, cfg.hue_interval, cfg.hue_step);
        self.shake.update(now, cfg, rng);
    }

    /// Colour change and shake restart that follow a tap release.
    pub fn on_tap(&mut self, cfg: &FieldConfig) {
        self.hue.advance(cfg.hue_step);
        self.shake.restart();
    }
}
