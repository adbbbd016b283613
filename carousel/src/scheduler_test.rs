#![allow(clippy::float_cmp)]

use super::*;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// smoothstep
// =============================================================

#[test]
fn smoothstep_endpoints_and_midpoint() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert!(approx_eq(smoothstep(0.5), 0.5));
}

#[test]
fn smoothstep_clamps_outside_unit_interval() {
    assert_eq!(smoothstep(-2.0), 0.0);
    assert_eq!(smoothstep(3.0), 1.0);
}

#[test]
fn smoothstep_is_monotonic() {
    let samples: Vec<f64> = (0..=20).map(|i| smoothstep(f64::from(i) / 20.0)).collect();
    assert!(samples.windows(2).all(|w| w[1] >= w[0]));
}

// =============================================================
// Tween
// =============================================================

#[test]
fn tween_starts_at_first_sample() {
    let mut tween = Tween::new(10.0, 20.0, 300.0);
    assert_eq!(tween.sample(1000.0), (10.0, false));
    let (value, done) = tween.sample(1150.0);
    assert!(approx_eq(value, 15.0));
    assert!(!done);
}

#[test]
fn tween_lands_exactly_on_target() {
    let mut tween = Tween::new(0.3, -0.1, 300.0);
    tween.sample(0.0);
    assert_eq!(tween.sample(300.0), (-0.1, true));
    assert_eq!(tween.sample(900.0), (-0.1, true));
}

#[test]
fn zero_duration_tween_finishes_immediately() {
    let mut tween = Tween::new(1.0, 2.0, 0.0);
    assert_eq!(tween.sample(5.0), (2.0, true));
}

#[test]
fn negative_duration_is_treated_as_zero() {
    let tween = Tween::new(1.0, 2.0, -50.0);
    assert_eq!(tween.duration_ms, 0.0);
}

// =============================================================
// Scheduler
// =============================================================

#[test]
fn new_scheduler_is_idle() {
    let scheduler = AnimationScheduler::new();
    assert!(!scheduler.has_active());
    assert!(scheduler.active().is_none());
}

#[test]
fn scheduling_replaces_previous_task() {
    let mut scheduler = AnimationScheduler::new();
    let first = scheduler.schedule(AnimationTask::Autoplay);
    let second = scheduler.schedule(AnimationTask::Momentum);
    assert_ne!(first, second);
    assert!(!scheduler.is_active(first));
    assert!(scheduler.is_active(second));
    assert!(!scheduler.is_autoplaying());
}

#[test]
fn cancel_clears_active_task() {
    let mut scheduler = AnimationScheduler::new();
    let token = scheduler.schedule(AnimationTask::Autoplay);
    scheduler.cancel();
    assert!(!scheduler.is_active(token));
    assert!(!scheduler.has_active());
}

#[test]
fn finish_with_stale_token_keeps_current_task() {
    let mut scheduler = AnimationScheduler::new();
    let stale = scheduler.schedule(AnimationTask::Momentum);
    let current = scheduler.schedule(AnimationTask::Autoplay);
    scheduler.finish(stale);
    assert!(scheduler.is_active(current));
    scheduler.finish(current);
    assert!(!scheduler.has_active());
}

#[test]
fn sample_snap_advances_stored_tween() {
    let mut scheduler = AnimationScheduler::new();
    let token = scheduler.schedule(AnimationTask::Snap(Tween::new(0.0, 1.0, 100.0)));
    assert_eq!(scheduler.sample_snap(0.0), Some((token, 0.0, false)));
    assert_eq!(scheduler.sample_snap(100.0), Some((token, 1.0, true)));
}

#[test]
fn sample_snap_ignores_other_tasks() {
    let mut scheduler = AnimationScheduler::new();
    scheduler.schedule(AnimationTask::Autoplay);
    assert_eq!(scheduler.sample_snap(0.0), None);
}
