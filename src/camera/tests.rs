//! Camera domain: tests for follow destination and smoothing.

use bevy::prelude::*;

use super::{CameraFollow, ClipSpaceProjection, ViewportProjection};

const DT: f32 = 1.0 / 60.0;

/// Orthographic view of a 1280x720 window centered on `camera`.
fn ortho(camera: Vec3) -> ClipSpaceProjection {
    let clip_from_view = Mat4::orthographic_rh(-640.0, 640.0, -360.0, 360.0, -1000.0, 1000.0);
    ClipSpaceProjection::new(clip_from_view * Mat4::from_translation(-camera))
}

fn follow(min_height: f32, damp_time: f32) -> CameraFollow {
    CameraFollow {
        min_height,
        ..CameraFollow::new(damp_time)
    }
}

#[test]
fn test_projection_round_trip() {
    let projection = ortho(Vec3::new(100.0, 50.0, 0.0));
    let world = Vec3::new(420.0, -30.0, 0.0);
    let back = projection.viewport_to_world(projection.world_to_viewport(world));
    assert!(back.distance(world) < 1e-3);
}

#[test]
fn test_camera_center_maps_to_viewport_center() {
    let camera = Vec3::new(100.0, 50.0, 0.0);
    let viewport = ortho(camera).world_to_viewport(camera);
    assert!((viewport.x - 0.5).abs() < 1e-6);
    assert!((viewport.y - 0.5).abs() < 1e-6);
}

#[test]
fn test_destination_centers_target_above_floor() {
    let camera = Vec3::new(0.0, 0.0, 0.0);
    let target = Vec3::new(200.0, 150.0, 0.0);
    let follow = follow(0.0, 0.1);

    let destination = follow.destination(camera, target, &ortho(camera));
    assert!((destination.x - 200.0).abs() < 1e-3);
    assert!((destination.y - 150.0).abs() < 1e-3);
    assert!(destination.z.abs() < 1e-3);
}

#[test]
fn test_destination_clamped_to_min_height() {
    let camera = Vec3::new(0.0, 10.0, 0.0);
    let target = Vec3::new(50.0, -500.0, 0.0);
    let follow = follow(10.0, 0.1);

    let destination = follow.destination(camera, target, &ortho(camera));
    assert_eq!(destination.y, 10.0);
    assert!((destination.x - 50.0).abs() < 1e-3);
}

#[test]
fn test_instant_damp_reaches_destination() {
    let camera = Vec3::new(0.0, 0.0, 0.0);
    let target = Vec3::new(30.0, 40.0, 0.0);
    let mut follow = follow(0.0, 0.0);

    let next = follow.step(camera, target, &ortho(camera), DT);
    assert!(next.distance(Vec3::new(30.0, 40.0, 0.0)) < 1e-2);
}

#[test]
fn test_target_below_floor_pins_camera_height() {
    let mut camera = Vec3::new(0.0, 0.0, 0.0);
    let target = Vec3::new(0.0, -800.0, 0.0);
    let mut follow = follow(0.0, 0.2);

    for _ in 0..120 {
        camera = follow.step(camera, target, &ortho(camera), DT);
        assert_eq!(camera.y, 0.0);
    }
}

#[test]
fn test_smoothed_follow_converges() {
    let mut camera = Vec3::ZERO;
    let target = Vec3::new(300.0, 120.0, 0.0);
    let mut follow = follow(0.0, 0.2);

    let first = follow.step(camera, target, &ortho(camera), DT);
    assert!(first.x > 0.0 && first.x < 300.0);

    camera = first;
    for _ in 0..600 {
        camera = follow.step(camera, target, &ortho(camera), DT);
    }
    assert!(camera.distance(target) < 1e-2);
}

#[test]
fn test_new_follow_has_no_target() {
    let follow = CameraFollow::new(0.3);
    assert!(follow.target.is_none());
    assert_eq!(follow.velocity, Vec3::ZERO);
}
