// Drag capture state machine and perimeter target layout.

use dotfield_core::{
    perimeter_points, FieldConfig, FormationController, FormationPhase, Rect, ReleaseOutcome,
};
use glam::Vec2;

const SURFACE_H: f32 = 600.0;

fn cfg(threshold: f32) -> FieldConfig {
    FieldConfig {
        drag_threshold: threshold,
        ..FieldConfig::default()
    }
}

fn close(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-3
}

/// Arc length from the top-left corner, walking clockwise.
fn arc_param(rect: Rect, p: Vec2) -> f32 {
    let (w, h) = (rect.width(), rect.height());
    let eps = 1e-3;
    if (p.y - rect.min.y).abs() < eps && p.x < rect.max.x - eps {
        p.x - rect.min.x
    } else if (p.x - rect.max.x).abs() < eps && p.y < rect.max.y - eps {
        w + (p.y - rect.min.y)
    } else if (p.y - rect.max.y).abs() < eps && p.x > rect.min.x + eps {
        w + h + (rect.max.x - p.x)
    } else {
        2.0 * w + h + (rect.max.y - p.y)
    }
}

#[test]
fn drag_past_threshold_lays_four_targets() {
    let cfg = cfg(10.0);
    let mut f = FormationController::new();
    assert!(f.press(Vec2::ZERO, SURFACE_H, &cfg));
    assert_eq!(f.phase(), FormationPhase::Capturing);

    f.drag_to(Vec2::new(100.0, 50.0), 4, &cfg);
    assert_eq!(f.phase(), FormationPhase::Dragging);
    assert!(f.is_active());

    let expected = [
        Vec2::new(0.0, 0.0),
        Vec2::new(75.0, 0.0),
        Vec2::new(100.0, 50.0),
        Vec2::new(25.0, 50.0),
    ];
    assert_eq!(f.targets().len(), 4);
    for (got, want) in f.targets().iter().zip(expected.iter()) {
        assert!(close(*got, *want), "got {got:?}, want {want:?}");
    }
}

#[test]
fn targets_are_evenly_spaced_along_perimeter() {
    let rect = Rect::from_corners(Vec2::new(70.0, 60.0), Vec2::new(10.0, 20.0));
    for count in [1usize, 3, 7, 8, 140] {
        let points = perimeter_points(rect, count);
        assert_eq!(points.len(), count);
        let spacing = rect.perimeter() / count as f32;
        for (i, p) in points.iter().enumerate() {
            let s = arc_param(rect, *p);
            assert!(
                (s - i as f32 * spacing).abs() < 1e-2,
                "count {count} point {i}: arc {s}, expected {}",
                i as f32 * spacing
            );
        }
    }
}

#[test]
fn perimeter_walk_wraps_every_edge() {
    let rect = Rect::from_corners(Vec2::new(10.0, 20.0), Vec2::new(70.0, 60.0));
    let points = perimeter_points(rect, 8);
    let expected = [
        (10.0, 20.0),
        (35.0, 20.0),
        (60.0, 20.0),
        (70.0, 35.0),
        (70.0, 60.0),
        (45.0, 60.0),
        (20.0, 60.0),
        (10.0, 45.0),
    ];
    for (got, (x, y)) in points.iter().zip(expected) {
        assert!(close(*got, Vec2::new(x, y)), "got {got:?}, want ({x},{y})");
    }
}

#[test]
fn zero_count_or_degenerate_rect_is_safe() {
    let rect = Rect::from_corners(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0));
    assert!(perimeter_points(rect, 0).is_empty());
    let points = perimeter_points(rect, 3);
    assert_eq!(points.len(), 3);
    assert!(points.iter().all(|p| close(*p, Vec2::new(5.0, 5.0))));
}

#[test]
fn reversed_drag_spans_same_rectangle() {
    let cfg = cfg(10.0);
    let mut f = FormationController::new();
    f.press(Vec2::new(100.0, 50.0), SURFACE_H, &cfg);
    f.drag_to(Vec2::ZERO, 4, &cfg);
    assert_eq!(
        f.rectangle(),
        Some(Rect::from_corners(Vec2::ZERO, Vec2::new(100.0, 50.0)))
    );
    assert!(close(f.targets()[0], Vec2::ZERO));
}

#[test]
fn small_drag_stays_capturing_and_releases_as_tap() {
    let cfg = cfg(30.0);
    let mut f = FormationController::new();
    f.press(Vec2::new(200.0, 200.0), SURFACE_H, &cfg);
    f.drag_to(Vec2::new(230.0, 170.0), 140, &cfg);
    assert_eq!(f.phase(), FormationPhase::Capturing);
    assert!(f.targets().is_empty());
    assert!(f.rectangle().is_none());

    assert_eq!(
        f.release(Vec2::new(230.0, 170.0), SURFACE_H, &cfg),
        Some(ReleaseOutcome::Tap)
    );
    assert_eq!(f.phase(), FormationPhase::Idle);
}

#[test]
fn release_after_forming_ends_formation() {
    let cfg = cfg(30.0);
    let mut f = FormationController::new();
    f.press(Vec2::new(200.0, 200.0), SURFACE_H, &cfg);
    f.drag_to(Vec2::new(300.0, 260.0), 10, &cfg);
    assert!(f.has_exceeded_threshold());
    assert_eq!(
        f.release(Vec2::new(300.0, 260.0), SURFACE_H, &cfg),
        Some(ReleaseOutcome::FormationEnded)
    );
    assert!(f.targets().is_empty());
    assert!(!f.is_active());
}

#[test]
fn targets_recomputed_on_every_move_while_dragging() {
    let cfg = cfg(10.0);
    let mut f = FormationController::new();
    f.press(Vec2::ZERO, SURFACE_H, &cfg);
    f.drag_to(Vec2::new(100.0, 50.0), 4, &cfg);
    let first = f.targets().to_vec();

    // back inside the threshold: still dragging, targets follow the small rect
    f.drag_to(Vec2::new(8.0, 4.0), 4, &cfg);
    assert_eq!(f.phase(), FormationPhase::Dragging);
    assert_ne!(first, f.targets());
    assert_eq!(f.targets(), perimeter_points(
        Rect::from_corners(Vec2::ZERO, Vec2::new(8.0, 4.0)),
        4
    ).as_slice());
}

#[test]
fn press_in_inactive_band_is_ignored() {
    let cfg = cfg(10.0);
    let mut f = FormationController::new();
    assert!(!f.press(Vec2::new(100.0, SURFACE_H - 10.0), SURFACE_H, &cfg));
    assert_eq!(f.phase(), FormationPhase::Idle);
    f.drag_to(Vec2::new(400.0, 100.0), 4, &cfg);
    assert_eq!(f.phase(), FormationPhase::Idle);
    assert!(f.targets().is_empty());
}

#[test]
fn release_in_inactive_band_keeps_dragging() {
    let cfg = cfg(10.0);
    let mut f = FormationController::new();
    f.press(Vec2::new(100.0, 100.0), SURFACE_H, &cfg);
    f.drag_to(Vec2::new(300.0, 580.0), 6, &cfg);
    assert_eq!(f.release(Vec2::new(300.0, 580.0), SURFACE_H, &cfg), None);
    assert_eq!(f.phase(), FormationPhase::Dragging);
    assert_eq!(f.targets().len(), 6);
}

#[test]
fn release_while_idle_does_nothing() {
    let cfg = cfg(10.0);
    let mut f = FormationController::new();
    assert_eq!(f.release(Vec2::new(10.0, 10.0), SURFACE_H, &cfg), None);
}

#[test]
fn cancel_is_a_hard_reset() {
    let cfg = cfg(10.0);
    let mut f = FormationController::new();
    f.press(Vec2::ZERO, SURFACE_H, &cfg);
    f.drag_to(Vec2::new(100.0, 100.0), 12, &cfg);
    assert!(f.is_active());
    f.cancel();
    assert_eq!(f.phase(), FormationPhase::Idle);
    assert!(f.targets().is_empty());
    assert!(!f.has_exceeded_threshold());
    // a later release has nothing to end
    assert_eq!(f.release(Vec2::new(100.0, 100.0), SURFACE_H, &cfg), None);
}

#[test]
fn new_press_discards_previous_capture() {
    let cfg = cfg(10.0);
    let mut f = FormationController::new();
    f.press(Vec2::ZERO, SURFACE_H, &cfg);
    f.drag_to(Vec2::new(100.0, 100.0), 12, &cfg);
    f.press(Vec2::new(50.0, 50.0), SURFACE_H, &cfg);
    assert_eq!(f.phase(), FormationPhase::Capturing);
    assert!(f.targets().is_empty());
}
