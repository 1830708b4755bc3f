//! Validation for tuning values that would misbehave at runtime.

use super::data::LocomotionFile;
use crate::movement::ProbeShape;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f64,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} (expected {})",
            self.section, self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a numeric bound
macro_rules! check {
    ($errors:expr, $section:expr, $field:ident, $value:expr, $ok:expr, $expected:expr) => {
        let value = $value;
        if !$ok(value) {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                value: value as f64,
                expected: $expected,
            });
        }
    };
}

fn non_negative(v: f32) -> bool {
    v >= 0.0
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn unit_interval(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

/// Validate all tuning values.
/// Returns a list of validation errors, empty if everything is in range.
pub fn validate_locomotion(file: &LocomotionFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // World
    check!(errors, "world", gravity, file.world.gravity, non_negative, ">= 0");
    check!(errors, "world", fixed_hz, file.world.fixed_hz, |v: f64| v > 0.0, "> 0");

    // Player movement
    let p = &file.player;
    check!(errors, "player", run_speed, p.run_speed, non_negative, ">= 0");
    check!(
        errors,
        "player",
        air_mobility_multiplier,
        p.air_mobility_multiplier,
        unit_interval,
        "0..=1"
    );
    check!(errors, "player", movement_smoothing, p.movement_smoothing, positive, "> 0");
    check!(errors, "player", jump_force, p.jump_force, positive, "> 0");
    check!(errors, "player", jump_buffer_time, p.jump_buffer_time, non_negative, ">= 0");
    check!(errors, "player", coyote_jump_time, p.coyote_jump_time, non_negative, ">= 0");
    check!(errors, "player", roll_speed, p.roll_speed, non_negative, ">= 0");
    check!(errors, "player", roll_buffer_time, p.roll_buffer_time, non_negative, ">= 0");
    if let Some(roll_jump_time) = p.roll_jump_time {
        check!(errors, "player", roll_jump_time, roll_jump_time, non_negative, ">= 0");
    }
    match p.probe {
        ProbeShape::Ray { distance } => {
            check!(errors, "player.probe", distance, distance, positive, "> 0");
        }
        ProbeShape::Circle { radius } => {
            check!(errors, "player.probe", radius, radius, positive, "> 0");
        }
    }

    // Player physics
    check!(errors, "player", gravity, p.gravity, non_negative, ">= 0");
    check!(errors, "player", linear_drag, p.linear_drag, non_negative, ">= 0");
    check!(errors, "player", fall_multiplier, p.fall_multiplier, positive, "> 0");

    // Camera
    check!(errors, "camera", damp_time, file.camera.damp_time, positive, "> 0");

    errors
}
