//! Tunable field parameters.
//!
//! `FieldConfig` is the configuration store: the host mutates it (usually
//! through [`FieldConfig::apply_setting`] from the settings panel) and the
//! simulation only reads it, once per frame.

use crate::error::ConfigError;
use std::time::Duration;

/// Particles found near the pointer before crowding starts pushing them back.
pub const CROWDING_THRESHOLD: usize = 10;

/// Distance over which the formation pull ramps up to full strength.
pub const HOMING_RAMP_DISTANCE: f32 = 50.0;

/// Distance under which a homing particle is considered settled.
pub const SETTLE_RADIUS: f32 = 1.0;

/// Scatter speed as a multiple of `default_speed`.
pub const SCATTER_SPEED_MULTIPLIER: f32 = 5.0;

/// Peak opacity of a particle-to-particle edge.
pub const EDGE_MAX_OPACITY: f32 = 0.8;

/// Upper bound accepted for `dotCount`.
pub const MAX_DOT_COUNT: i32 = 10_000;

/// How connection candidates are enumerated. Both produce identical edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CandidateStrategy {
    /// Every unordered pair, in index order.
    #[default]
    BruteForce,
    /// Uniform grid with cells of `max_distance`, candidates re-sorted by index.
    Grid,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub dot_count: i32,
    pub max_distance: f32,
    pub mouse_radius: f32,
    pub gravity_strength: f32,
    pub push_strength: f32,
    pub default_speed: f32,
    /// Damping applied to over-speed particles while no formation is active.
    pub slow_down_factor: f32,
    /// Tighter damping used while homing and to settle particles on target.
    pub slow_down_factor_2: f32,
    pub rectangle_gravity: f32,
    pub bottom_inactive_height: f32,
    pub shake_intensity: f32,
    pub edge_margin: f32,
    pub per_dot_connections_limit: u32,
    pub global_connections_limit: u32,
    pub drag_threshold: f32,
    pub parallax_strength: f32,
    pub smoothing_factor: f32,

    pub hue: f32,
    pub hue_step: f32,
    pub hue_interval: Duration,
    pub move_debounce: Duration,
    pub shake_duration: Duration,
    pub shake_tick: Duration,
    pub show_drag_outline: bool,
    pub candidate_strategy: CandidateStrategy,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            dot_count: 140,
            max_distance: 195.0,
            mouse_radius: 200.0,
            gravity_strength: 0.02,
            push_strength: 0.05,
            default_speed: 2.0,
            slow_down_factor: 0.99,
            slow_down_factor_2: 0.90,
            rectangle_gravity: 10.0,
            bottom_inactive_height: 40.0,
            shake_intensity: 0.0,
            edge_margin: 300.0,
            per_dot_connections_limit: 3,
            global_connections_limit: 220,
            drag_threshold: 30.0,
            parallax_strength: 0.35,
            smoothing_factor: 0.02,
            hue: 260.0,
            hue_step: 0.0,
            hue_interval: Duration::from_millis(500),
            move_debounce: Duration::from_millis(100),
            shake_duration: Duration::from_millis(2000),
            shake_tick: Duration::from_millis(100),
            show_drag_outline: false,
            candidate_strategy: CandidateStrategy::BruteForce,
        }
    }
}

impl FieldConfig {
    /// Number of particles to create; zero or negative counts yield an empty field.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.dot_count.max(0) as usize
    }

    /// True when `y` lies in the reserved band at the bottom of the surface
    /// where presses and releases are ignored.
    #[inline]
    pub fn in_inactive_band(&self, y: f32, surface_height: f32) -> bool {
        y > surface_height - self.bottom_inactive_height
    }

    /// Apply one settings-panel value by its slider key.
    ///
    /// Integer settings are truncated toward zero and negative limits clamp
    /// to zero. `dotCount` is capped at [`MAX_DOT_COUNT`] and only takes
    /// effect at the next reinitialization of the particle set.
    pub fn apply_setting(&mut self, key: &str, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() {
            return Err(ConfigError::NonFinite {
                key: key.to_string(),
                value,
            });
        }
        let v = value as f32;
        let limit = |v: f64| v.max(0.0) as u32;
        match key {
            "dotCount" => self.dot_count = (value as i32).min(MAX_DOT_COUNT),
            "maxDistance" => self.max_distance = v,
            "mouseRadius" => self.mouse_radius = v,
            "gravityStrength" => self.gravity_strength = v,
            "pushStrength" => self.push_strength = v,
            "defaultSpeed" => self.default_speed = v,
            "slowDownFactor" => self.slow_down_factor = v,
            "slowDownFactor2" => self.slow_down_factor_2 = v,
            "rectangleGravity" => self.rectangle_gravity = v,
            "colorTransitionLength" => {
                self.hue_interval = Duration::from_secs_f64(value.max(1.0) / 1000.0)
            }
            "bottomInactiveHeight" => self.bottom_inactive_height = v,
            "shakeIntensity" => self.shake_intensity = v,
            "edgeMargin" => self.edge_margin = v,
            "hue" => self.hue = v.rem_euclid(360.0),
            "hueStep" => self.hue_step = v,
            "perDotConnectionsLimit" => self.per_dot_connections_limit = limit(value),
            "globalConnectionsLimit" => self.global_connections_limit = limit(value),
            "dragThreshold" => self.drag_threshold = v,
            "parallaxStrength" => self.parallax_strength = v,
            "smoothingFactor" => self.smoothing_factor = v.clamp(0.0, 1.0),
            _ => return Err(ConfigError::UnknownSetting(key.to_string())),
        }
        log::debug!("[config] {} = {}", key, value);
        Ok(())
    }

    /// Current value of a slider key, in the units the settings panel uses.
    pub fn setting(&self, key: &str) -> Option<f64> {
        let v = match key {
            "dotCount" => self.dot_count as f64,
            "maxDistance" => self.max_distance as f64,
            "mouseRadius" => self.mouse_radius as f64,
            "gravityStrength" => self.gravity_strength as f64,
            "pushStrength" => self.push_strength as f64,
            "defaultSpeed" => self.default_speed as f64,
            "slowDownFactor" => self.slow_down_factor as f64,
            "slowDownFactor2" => self.slow_down_factor_2 as f64,
            "rectangleGravity" => self.rectangle_gravity as f64,
            "colorTransitionLength" => self.hue_interval.as_secs_f64() * 1000.0,
            "bottomInactiveHeight" => self.bottom_inactive_height as f64,
            "shakeIntensity" => self.shake_intensity as f64,
            "edgeMargin" => self.edge_margin as f64,
            "hue" => self.hue as f64,
            "hueStep" => self.hue_step as f64,
            "perDotConnectionsLimit" => self.per_dot_connections_limit as f64,
            "globalConnectionsLimit" => self.global_connections_limit as f64,
            "dragThreshold" => self.drag_threshold as f64,
            "parallaxStrength" => self.parallax_strength as f64,
            "smoothingFactor" => self.smoothing_factor as f64,
            _ => return None,
        };
        Some(v)
    }
}

/// Slider keys understood by [`FieldConfig::apply_setting`].
pub const SETTING_KEYS: &[&str] = &[
    "dotCount",
    "maxDistance",
    "mouseRadius",
    "gravityStrength",
    "pushStrength",
    "defaultSpeed",
    "slowDownFactor",
    "slowDownFactor2",
    "rectangleGravity",
    "colorTransitionLength",
    "bottomInactiveHeight",
    "shakeIntensity",
    "edgeMargin",
    "hue",
    "hueStep",
    "perDotConnectionsLimit",
    "globalConnectionsLimit",
    "dragThreshold",
    "parallaxStrength",
    "smoothingFactor",
];
