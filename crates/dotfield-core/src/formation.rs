//! Drag capture and rectangle formation targets.
//!
//! A press starts capturing; once the drag span passes `drag_threshold` on
//! either axis the controller enters `Dragging` and lays one target per
//! particle along the rectangle's perimeter. Targets are rebuilt from
//! scratch on every move and dropped on release or cancellation.

use crate::config::FieldConfig;
use crate::state::Rect;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FormationPhase {
    #[default]
    Idle,
    /// Button down, drag span still within the threshold.
    Capturing,
    /// Threshold exceeded; targets populated.
    Dragging,
}

/// What a release did, so the caller can apply the side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Released without passing the threshold: scatter, colour change and shake.
    Tap,
    /// Released after forming: scatter only.
    FormationEnded,
}

#[derive(Clone, Debug, Default)]
pub struct FormationController {
    phase: FormationPhase,
    start: Vec2,
    end: Vec2,
    targets: Vec<Vec2>,
}

impl FormationController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> FormationPhase {
        self.phase
    }

    /// True once the drag threshold was exceeded in the current capture.
    #[inline]
    pub fn has_exceeded_threshold(&self) -> bool {
        self.phase == FormationPhase::Dragging
    }

    /// True while particles should home toward targets.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.has_exceeded_threshold() && !self.targets.is_empty()
    }

    #[inline]
    pub fn targets(&self) -> &[Vec2] {
        &self.targets
    }

    /// The drag rectangle, only once a formation is showing.
    pub fn rectangle(&self) -> Option<Rect> {
        self.has_exceeded_threshold()
            .then(|| Rect::from_corners(self.start, self.end))
    }

    /// Begin capturing unless the press lands in the inactive band.
    /// Returns whether capture started.
    pub fn press(&mut self, pos: Vec2, surface_height: f32, cfg: &FieldConfig) -> bool {
        if cfg.in_inactive_band(pos.y, surface_height) {
            return false;
        }
        self.phase = FormationPhase::Capturing;
        self.start = pos;
        self.end = pos;
        self.targets.clear();
        log::debug!("[formation] capture at ({:.1},{:.1})", pos.x, pos.y);
        true
    }

    /// Update the drag end point, promoting to `Dragging` past the threshold
    /// and rebuilding the targets while dragging.
    pub fn drag_to(&mut self, pos: Vec2, particle_count: usize, cfg: &FieldConfig) {
        if self.phase == FormationPhase::Idle {
            return;
        }
        self.end = pos;
        let span = (self.end - self.start).abs();
        if self.phase == FormationPhase::Capturing
            && (span.x > cfg.drag_threshold || span.y > cfg.drag_threshold)
        {
            self.phase = FormationPhase::Dragging;
            log::debug!("[formation] threshold exceeded, forming {} targets", particle_count);
        }
        if self.phase == FormationPhase::Dragging {
            let rect = Rect::from_corners(self.start, self.end);
            perimeter_points_into(rect, particle_count, &mut self.targets);
        }
    }

    /// End the capture. Ignored inside the inactive band or when idle.
    pub fn release(
        &mut self,
        pos: Vec2,
        surface_height: f32,
        cfg: &FieldConfig,
    ) -> Option<ReleaseOutcome> {
        if cfg.in_inactive_band(pos.y, surface_height) {
            return None;
        }
        let outcome = match self.phase {
            FormationPhase::Idle => return None,
            FormationPhase::Capturing => ReleaseOutcome::Tap,
            FormationPhase::Dragging => ReleaseOutcome::FormationEnded,
        };
        self.phase = FormationPhase::Idle;
        self.targets.clear();
        log::debug!("[formation] release: {:?}", outcome);
        Some(outcome)
    }

    /// Abrupt reset on focus loss; no release side effects.
    pub fn cancel(&mut self) {
        if self.phase != FormationPhase::Idle {
            log::debug!("[formation] capture cancelled");
        }
        self.phase = FormationPhase::Idle;
        self.targets.clear();
    }
}

/// Points spaced `perimeter / count` apart along `rect`, starting at the
/// top-left corner and walking clockwise (top, right, bottom, left).
pub fn perimeter_points(rect: Rect, count: usize) -> Vec<Vec2> {
    let mut out = Vec::with_capacity(count);
    perimeter_points_into(rect, count, &mut out);
    out
}

fn perimeter_points_into(rect: Rect, count: usize, out: &mut Vec<Vec2>) {
    out.clear();
    if count == 0 {
        return;
    }
    let w = rect.width();
    let h = rect.height();
    let segment = rect.perimeter() / count as f32;
    for i in 0..count {
        let s = i as f32 * segment;
        let p = if s < w {
            Vec2::new(rect.min.x + s, rect.min.y)
        } else if s < w + h {
            Vec2::new(rect.max.x, rect.min.y + (s - w))
        } else if s < 2.0 * w + h {
            Vec2::new(rect.max.x - (s - w - h), rect.max.y)
        } else {
            Vec2::new(rect.min.x, rect.max.y - (s - 2.0 * w - h))
        };
        out.push(p);
    }
}
