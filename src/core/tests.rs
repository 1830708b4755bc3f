//! Core domain: tests for damped smoothing.

use bevy::prelude::*;

use super::{smooth_damp, smooth_damp_vec3};

const DT: f32 = 1.0 / 50.0;

#[test]
fn test_smooth_damp_near_zero_time_snaps_to_target() {
    let mut velocity = 0.0;
    let value = smooth_damp(0.0, 5.0, &mut velocity, 0.0, f32::INFINITY, DT);
    assert!((value - 5.0).abs() < 1e-2, "value was {value}");
}

#[test]
fn test_smooth_damp_approaches_without_overshoot() {
    let mut velocity = 0.0;
    let mut value = 0.0;
    let mut previous = value;

    for _ in 0..200 {
        value = smooth_damp(value, 10.0, &mut velocity, 0.2, f32::INFINITY, DT);
        assert!(value >= previous, "smoothing reversed direction");
        assert!(value <= 10.0, "smoothing overshot: {value}");
        previous = value;
    }

    assert!((value - 10.0).abs() < 1e-3);
}

#[test]
fn test_smooth_damp_respects_max_speed() {
    let mut velocity = 0.0;
    let value = smooth_damp(0.0, 100.0, &mut velocity, 0.1, 1.0, DT);
    // max_change = 1.0 * 0.1, so the effective target sits 0.1 away
    assert!(value <= 0.1 + 1e-6);
}

#[test]
fn test_smooth_damp_zero_dt_is_noop() {
    let mut velocity = 3.0;
    assert_eq!(smooth_damp(1.0, 5.0, &mut velocity, 0.1, f32::INFINITY, 0.0), 1.0);
    assert_eq!(velocity, 3.0);
}

#[test]
fn test_smooth_damp_at_target_stays_put() {
    let mut velocity = 0.0;
    assert_eq!(smooth_damp(2.0, 2.0, &mut velocity, 0.1, f32::INFINITY, DT), 2.0);
    assert_eq!(velocity, 0.0);
}

#[test]
fn test_smooth_damp_vec3_converges() {
    let mut velocity = Vec3::ZERO;
    let mut value = Vec3::ZERO;
    let target = Vec3::new(4.0, -2.0, 0.0);

    for _ in 0..300 {
        value = smooth_damp_vec3(value, target, &mut velocity, 0.15, f32::INFINITY, DT);
    }

    assert!(value.distance(target) < 1e-3);
}

#[test]
fn test_smooth_damp_vec3_leaves_static_axis_alone() {
    let mut velocity = Vec3::ZERO;
    let value = smooth_damp_vec3(
        Vec3::new(0.0, 7.0, 0.0),
        Vec3::new(3.0, 7.0, 0.0),
        &mut velocity,
        0.1,
        f32::INFINITY,
        DT,
    );
    assert_eq!(value.y, 7.0);
    assert!(value.x > 0.0 && value.x < 3.0);
}
