//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::{LocomotionFile, load_locomotion_file, parse_locomotion_file, validate_locomotion};
use crate::camera::CameraConfig;
use crate::movement::{GroundedPhysics, LocomotionConfig, ProbeShape};

const SHIPPED: &str = include_str!("../../assets/data/locomotion.ron");

const MINIMAL: &str = r#"(
    world: (gravity: 980.0, fixed_hz: 60.0),
    player: (
        run_speed: 5.0,
        air_mobility_multiplier: 0.2,
        movement_smoothing: 0.1,
        jump_force: 12.0,
        jump_buffer_time: 0.2,
        coyote_jump_time: 0.1,
        roll_speed: 8.0,
        roll_buffer_time: 0.1,
        probe: Circle(radius: 0.2),
        probe_offsets: (back: (-0.3, -1.0), middle: (0.0, -1.0), front: (0.3, -1.0)),
        gravity: 3.0,
        linear_drag: 4.0,
        fall_multiplier: 2.5,
    ),
    camera: (damp_time: 0.2, start: (0.0, 1.5)),
)"#;

fn parse(contents: &str) -> LocomotionFile {
    parse_locomotion_file("test.ron", contents).expect("tuning should parse")
}

#[test]
fn test_shipped_tuning_parses_and_validates() {
    let file = parse(SHIPPED);
    let errors = validate_locomotion(&file);
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    assert_eq!(file.player.roll_jump_time, Some(0.3));
    assert!(file.player.attack_enabled);
}

#[test]
fn test_optional_fields_default() {
    let file = parse(MINIMAL);
    assert_eq!(file.player.roll_jump_time, None);
    assert!(!file.player.attack_enabled);
    assert_eq!(file.player.grounded_physics, GroundedPhysics::Standard);
    assert_eq!(file.player.probe, ProbeShape::Circle { radius: 0.2 });
}

#[test]
fn test_def_converts_to_config() {
    let file = parse(MINIMAL);
    let config = LocomotionConfig::from(&file.player);
    assert_eq!(config.run_speed, 5.0);
    assert_eq!(config.probe_offsets.front.x, 0.3);
    assert_eq!(config.probe_offsets.back.y, -1.0);
    assert_eq!(config.jump_buffer_for(true), 0.2);

    let camera = CameraConfig::from(&file.camera);
    assert_eq!(camera.damp_time, 0.2);
    assert_eq!(camera.start.y, 1.5);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_locomotion_file("broken.ron", "(world: (").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = load_locomotion_file(Path::new("does/not/exist")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_validation_flags_bad_values() {
    let mut file = parse(MINIMAL);
    file.player.jump_buffer_time = -1.0;
    file.player.movement_smoothing = 0.0;
    file.player.air_mobility_multiplier = 1.5;
    file.player.probe = ProbeShape::Ray { distance: 0.0 };
    file.camera.damp_time = 0.0;

    let errors = validate_locomotion(&file);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(
        fields,
        vec![
            "air_mobility_multiplier",
            "movement_smoothing",
            "jump_buffer_time",
            "distance",
            "damp_time"
        ]
    );
    assert_eq!(
        errors[2].to_string(),
        "player.jump_buffer_time = -1 (expected >= 0)"
    );
}

#[test]
fn test_validation_checks_roll_jump_time_when_present() {
    let mut file = parse(MINIMAL);
    file.player.roll_jump_time = Some(-1.0);
    let errors = validate_locomotion(&file);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "roll_jump_time");
}
