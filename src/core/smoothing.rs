//! Critically damped smoothing toward a moving target.
//!
//! Both helpers keep a caller-owned velocity accumulator so repeated calls
//! across frames produce a continuous, spring-like approach without overshoot.

use bevy::prelude::*;

/// Smallest smoothing time accepted; zero would divide by zero.
const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Polynomial approximation of `exp(-x)` used by the damped spring.
fn decay(omega: f32, dt: f32) -> f32 {
    let x = omega * dt;
    1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x)
}

/// Move `current` toward `target` over roughly `smooth_time` seconds.
///
/// `velocity` is updated in place and must persist between calls.
/// `max_speed` caps how fast the value may change (use `f32::INFINITY` for no cap).
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let exp = decay(omega, dt);

    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let original_target = target;
    let target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // Never pass the original target
    if (original_target - current > 0.0) == (output > original_target) {
        output = original_target;
        *velocity = 0.0;
    }

    output
}

/// Vector form of [`smooth_damp`]; the overshoot test is done on the whole vector.
pub fn smooth_damp_vec3(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let exp = decay(omega, dt);

    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp_length_max(max_change);
    let original_target = target;
    let target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    if (original_target - current).dot(output - original_target) > 0.0 {
        output = original_target;
        *velocity = Vec3::ZERO;
    }

    output
}
