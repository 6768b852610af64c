//! The process-wide field context and its fixed-order frame pipeline.
//!
//! One [`FieldEngine`] lives for the lifetime of the page. Input handlers
//! mutate it between frames; [`FieldEngine::step`] runs once per display
//! refresh in this order: pointer smoothing, force accumulation,
//! integration with boundary handling, connection selection, visual
//! modulation, then hands a borrowed [`FrameView`] to the renderer.

use crate::config::{FieldConfig, SCATTER_SPEED_MULTIPLIER};
use crate::connections::{pointer_links, ConnectionSelector, Edge, PointerLink};
use crate::error::ConfigError;
use crate::force;
use crate::formation::{FormationController, ReleaseOutcome};
use crate::modulation::VisualModulator;
use crate::particle::{Particle, ParticleSet};
use crate::pointer::PointerState;
use crate::state::{Rect, Surface};
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;

pub struct FieldEngine {
    pub config: FieldConfig,
    surface: Surface,
    particles: ParticleSet,
    pointer: PointerState,
    formation: FormationController,
    modulator: VisualModulator,
    selector: ConnectionSelector,
    edges: Vec<Edge>,
    links: Vec<PointerLink>,
    rng: StdRng,
    frames: u64,
}

impl FieldEngine {
    pub fn new(config: FieldConfig, surface: Surface, seed: u64) -> Self {
        Self::with_rng(config, surface, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: FieldConfig, surface: Surface) -> Self {
        Self::with_rng(config, surface, StdRng::from_entropy())
    }

    fn with_rng(config: FieldConfig, surface: Surface, rng: StdRng) -> Self {
        let modulator = VisualModulator::new(&config);
        let mut engine = Self {
            config,
            surface,
            particles: ParticleSet::new(),
            pointer: PointerState::new(),
            formation: FormationController::new(),
            modulator,
            selector: ConnectionSelector::new(),
            edges: Vec::new(),
            links: Vec::new(),
            rng,
            frames: 0,
        };
        engine.reinitialize();
        engine
    }

    /// Re-seed the particle set from the current config and surface.
    /// Visual timers are left running.
    pub fn reinitialize(&mut self) {
        let count = self.config.particle_count();
        self.particles.initialize(
            count,
            self.surface,
            self.config.default_speed,
            &mut self.rng,
        );
        self.edges.clear();
        self.links.clear();
        log::info!(
            "[field] initialized {} particles on {:.0}x{:.0}",
            count,
            self.surface.width,
            self.surface.height
        );
    }

    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        self.reinitialize();
    }

    /// Apply one settings-panel value. Setting `hue` also resets the live hue.
    pub fn apply_setting(&mut self, key: &str, value: f64) -> Result<(), ConfigError> {
        self.config.apply_setting(key, value)?;
        if key == "hue" {
            self.modulator.hue.hue = self.config.hue;
        }
        Ok(())
    }

    pub fn pointer_moved(&mut self, pos: Vec2, now: Instant) {
        self.pointer.on_move(
            pos,
            self.surface,
            self.config.parallax_strength,
            self.config.move_debounce,
            now,
        );
        self.formation
            .drag_to(pos, self.config.particle_count(), &self.config);
    }

    /// Returns whether a capture started.
    pub fn pressed(&mut self, pos: Vec2) -> bool {
        self.formation.press(pos, self.surface.height, &self.config)
    }

    pub fn released(&mut self, pos: Vec2) -> Option<ReleaseOutcome> {
        let outcome = self
            .formation
            .release(pos, self.surface.height, &self.config)?;
        self.scatter();
        if outcome == ReleaseOutcome::Tap {
            self.modulator.on_tap(&self.config);
        }
        Some(outcome)
    }

    /// Hard reset of any capture; no scatter and no visual effects.
    pub fn focus_lost(&mut self) {
        self.formation.cancel();
    }

    /// Fling every particle outward at five times the default speed.
    pub fn scatter(&mut self) {
        let speed = self.config.default_speed * SCATTER_SPEED_MULTIPLIER;
        self.particles.scatter(speed, &mut self.rng);
    }

    /// Run one simulation pass and return what the renderer needs.
    pub fn step(&mut self, now: Instant) -> FrameView<'_> {
        let cfg = &self.config;

        self.pointer.expire(now);
        self.pointer.smooth_step(cfg.smoothing_factor);

        let particles = &mut self.particles.particles;
        force::apply_pointer_forces(particles, &self.pointer, cfg);
        if self.formation.is_active() {
            force::apply_formation_forces(
                particles,
                self.formation.targets(),
                self.pointer.smoothed_offset,
                cfg,
            );
        }

        self.particles
            .integrate(cfg, self.surface, self.formation.has_exceeded_threshold());

        self.selector
            .select(&mut self.particles.particles, cfg, &mut self.edges);
        pointer_links(
            &self.particles.particles,
            self.pointer.position,
            cfg.mouse_radius,
            &mut self.links,
        );

        self.modulator.update(now, cfg, &mut self.rng);
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!(
                "[field] frame {} particles={} edges={} links={}",
                self.frames,
                self.particles.len(),
                self.edges.len(),
                self.links.len()
            );
        }
        self.view()
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            surface: self.surface,
            particles: &self.particles.particles,
            edges: &self.edges,
            pointer_links: &self.links,
            pointer: self.pointer.position,
            parallax: self.pointer.smoothed_offset,
            shake: self.modulator.shake.offset,
            pulse: self.modulator.pulse.value,
            hue: self.modulator.hue.hue,
            drag_rect: self.formation.rectangle(),
            show_drag_outline: self.config.show_drag_outline,
        }
    }

    #[inline]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles.particles
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn formation(&self) -> &FormationController {
        &self.formation
    }

    #[inline]
    pub fn modulator(&self) -> &VisualModulator {
        &self.modulator
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

/// Per-particle values the renderer draws.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParticle {
    pub position: Vec2,
    pub render_position: Vec2,
    pub size: f32,
    pub opacity: f32,
}

/// Everything that crosses into the renderer for one frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub surface: Surface,
    pub particles: &'a [Particle],
    pub edges: &'a [Edge],
    pub pointer_links: &'a [PointerLink],
    /// Raw pointer position; links start here, without parallax.
    pub pointer: Option<Vec2>,
    pub parallax: Vec2,
    pub shake: Vec2,
    pub pulse: f32,
    pub hue: f32,
    pub drag_rect: Option<Rect>,
    pub show_drag_outline: bool,
}

impl<'a> FrameView<'a> {
    /// Screen position of particle `i` including parallax and shake.
    #[inline]
    pub fn render_position(&self, i: usize) -> Vec2 {
        let p = &self.particles[i];
        p.position + p.parallax(self.parallax) + self.shake
    }

    pub fn render_particles(&self) -> impl Iterator<Item = RenderParticle> + '_ {
        self.particles
            .iter()
            .enumerate()
            .map(move |(i, p)| RenderParticle {
                position: p.position,
                render_position: self.render_position(i),
                size: p.size(self.pulse),
                opacity: p.opacity(),
            })
    }
}
