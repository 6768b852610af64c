// Visual timers and parallax smoothing.

use dotfield_core::modulation::{PULSE_MAX, PULSE_STEP};
use dotfield_core::{Debounce, FieldConfig, HueRotation, PointerState, Pulse, Shake, Surface};
use glam::Vec2;
use instant::Instant;
use rand::prelude::*;
use std::time::Duration;

#[test]
fn pulse_bounces_inside_its_band() {
    let mut pulse = Pulse::default();
    let mut reversals = 0;
    let mut rising = pulse.rising();
    for _ in 0..1000 {
        pulse.step();
        assert!(pulse.value >= 0.0 && pulse.value <= PULSE_MAX);
        if pulse.rising() != rising {
            reversals += 1;
            rising = pulse.rising();
        }
    }
    // 60 steps per sweep
    let sweep = (PULSE_MAX / PULSE_STEP).round() as usize;
    assert!(reversals >= 1000 / sweep - 1);
}

#[test]
fn pulse_reverses_at_the_top() {
    let mut pulse = Pulse::default();
    let sweep = (PULSE_MAX / PULSE_STEP).round() as usize;
    for _ in 0..sweep {
        pulse.step();
    }
    assert!((pulse.value - PULSE_MAX).abs() < 1e-3 || !pulse.rising());
    for _ in 0..5 {
        pulse.step();
    }
    assert!(!pulse.rising());
    assert!(pulse.value < PULSE_MAX);
}

#[test]
fn hue_is_static_with_zero_step() {
    let t0 = Instant::now();
    let mut hue = HueRotation::new(260.0);
    hue.update(t0, Duration::from_millis(500), 0.0);
    hue.update(t0 + Duration::from_secs(10), Duration::from_millis(500), 0.0);
    assert_eq!(hue.hue, 260.0);
}

#[test]
fn hue_advances_per_interval_not_per_frame() {
    let t0 = Instant::now();
    let interval = Duration::from_millis(500);
    let mut hue = HueRotation::new(0.0);
    hue.update(t0, interval, 10.0);
    // many frames inside one interval change nothing
    for ms in [16u64, 100, 300, 499] {
        hue.update(t0 + Duration::from_millis(ms), interval, 10.0);
    }
    assert_eq!(hue.hue, 0.0);
    hue.update(t0 + Duration::from_millis(1200), interval, 10.0);
    assert!((hue.hue - 20.0).abs() < 1e-4);
    // the leftover 200ms carries over
    hue.update(t0 + Duration::from_millis(1500), interval, 10.0);
    assert!((hue.hue - 30.0).abs() < 1e-4);
}

#[test]
fn hue_wraps_modulo_360() {
    let mut hue = HueRotation::new(350.0);
    hue.advance(25.0);
    assert!((hue.hue - 15.0).abs() < 1e-4);
    hue.advance(-30.0);
    assert!((hue.hue - 345.0).abs() < 1e-4);
    assert!((HueRotation::new(-20.0).hue - 340.0).abs() < 1e-4);
}

#[test]
fn shake_decays_to_zero_after_duration() {
    let cfg = FieldConfig {
        shake_intensity: 10.0,
        ..FieldConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(5);
    let mut shake = Shake::default();
    let t0 = Instant::now();
    let ticks = (cfg.shake_duration.as_millis() / cfg.shake_tick.as_millis()) as u64;
    for k in 0..ticks {
        assert!(shake.is_active(cfg.shake_duration));
        shake.update(t0 + cfg.shake_tick * k as u32, &cfg, &mut rng);
        assert!(shake.offset.x.abs() <= 5.0 && shake.offset.y.abs() <= 5.0);
    }
    assert!(!shake.is_active(cfg.shake_duration));
    shake.update(t0 + cfg.shake_tick * ticks as u32, &cfg, &mut rng);
    assert_eq!(shake.offset, Vec2::ZERO);

    shake.restart();
    assert!(shake.is_active(cfg.shake_duration));
    shake.update(t0 + Duration::from_secs(10), &cfg, &mut rng);
    assert!(shake.offset != Vec2::ZERO);
}

#[test]
fn shake_ticks_on_its_own_clock() {
    let cfg = FieldConfig {
        shake_intensity: 10.0,
        ..FieldConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(9);
    let mut shake = Shake::default();
    let t0 = Instant::now();
    shake.update(t0, &cfg, &mut rng);
    let first = shake.offset;
    // frames inside the same tick keep the offset
    for ms in [5u64, 40, 99] {
        shake.update(t0 + Duration::from_millis(ms), &cfg, &mut rng);
        assert_eq!(shake.offset, first);
    }
    // the duration is measured in ticks, so 2s of 60Hz frames still ends it
    for frame in 0..200u64 {
        shake.update(t0 + Duration::from_millis(100 + frame * 16), &cfg, &mut rng);
    }
    assert!(!shake.is_active(cfg.shake_duration));
}

#[test]
fn smoothing_converges_without_overshoot() {
    let surface = Surface::new(800.0, 600.0);
    let mut pointer = PointerState::new();
    pointer.on_move(
        Vec2::new(700.0, 100.0),
        surface,
        0.35,
        Duration::from_millis(100),
        Instant::now(),
    );
    let target = pointer.target_offset;
    let mut prev_gap = (target - pointer.smoothed_offset).length();
    for _ in 0..2000 {
        pointer.smooth_step(0.02);
        let gap_vec = target - pointer.smoothed_offset;
        // still on the same side of the target on both axes
        assert!(gap_vec.x * target.x >= 0.0);
        assert!(gap_vec.y * target.y >= 0.0);
        let gap = gap_vec.length();
        assert!(gap <= prev_gap);
        prev_gap = gap;
    }
    assert!(prev_gap < 1e-3);

    let settled = pointer.smoothed_offset;
    for _ in 0..100 {
        pointer.smooth_step(0.02);
    }
    assert!((pointer.smoothed_offset - settled).length() < 1e-3);
}

#[test]
fn smoothing_factor_above_one_is_clamped() {
    let mut pointer = PointerState::new();
    pointer.target_offset = Vec2::new(10.0, -4.0);
    pointer.smooth_step(3.0);
    assert_eq!(pointer.smoothed_offset, Vec2::new(10.0, -4.0));
}

#[test]
fn debounce_rearm_replaces_deadline() {
    let t0 = Instant::now();
    let mut timer = Debounce::default();
    assert!(!timer.fire_if_due(t0));
    timer.arm(t0, Duration::from_millis(100));
    timer.arm(t0 + Duration::from_millis(60), Duration::from_millis(100));
    assert!(!timer.fire_if_due(t0 + Duration::from_millis(120)));
    assert!(timer.is_pending());
    assert!(timer.fire_if_due(t0 + Duration::from_millis(160)));
    // fires once
    assert!(!timer.fire_if_due(t0 + Duration::from_millis(500)));
    assert!(!timer.is_pending());
}
