//! Camera domain: smoothed target follow with a height floor.

use bevy::prelude::*;

use crate::core::smooth_damp_vec3;

/// Viewport point whose world position the camera keeps on the target.
const VIEWPORT_CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// World/viewport conversion for one camera.
///
/// Viewport coordinates are `[0, 1]` on x and y; z is a depth value that
/// round-trips through both conversions.
pub trait ViewportProjection {
    fn world_to_viewport(&self, world: Vec3) -> Vec3;
    fn viewport_to_world(&self, viewport: Vec3) -> Vec3;
}

/// Projection from a camera's clip-from-world matrix.
#[derive(Debug, Clone, Copy)]
pub struct ClipSpaceProjection {
    clip_from_world: Mat4,
    world_from_clip: Mat4,
}

impl ClipSpaceProjection {
    pub fn new(clip_from_world: Mat4) -> Self {
        Self {
            clip_from_world,
            world_from_clip: clip_from_world.inverse(),
        }
    }

    pub fn from_camera(camera: &Camera, transform: &GlobalTransform) -> Self {
        let view_from_world = Mat4::from(transform.affine().inverse());
        Self::new(camera.clip_from_view() * view_from_world)
    }
}

impl ViewportProjection for ClipSpaceProjection {
    fn world_to_viewport(&self, world: Vec3) -> Vec3 {
        let ndc = self.clip_from_world.project_point3(world);
        Vec3::new((ndc.x + 1.0) * 0.5, (ndc.y + 1.0) * 0.5, ndc.z)
    }

    fn viewport_to_world(&self, viewport: Vec3) -> Vec3 {
        let ndc = Vec3::new(viewport.x * 2.0 - 1.0, viewport.y * 2.0 - 1.0, viewport.z);
        self.world_from_clip.project_point3(ndc)
    }
}

/// Follow state for one camera.
#[derive(Component, Debug, Clone)]
pub struct CameraFollow {
    /// Resolved once at startup; `None` skips updates.
    pub target: Option<Entity>,
    /// Smoothing accumulator, persists between frames.
    pub velocity: Vec3,
    /// The camera never moves below this height.
    pub min_height: f32,
    pub damp_time: f32,
}

impl CameraFollow {
    pub fn new(damp_time: f32) -> Self {
        Self {
            target: None,
            velocity: Vec3::ZERO,
            min_height: f32::NEG_INFINITY,
            damp_time,
        }
    }

    /// Where the camera wants to be to center `target`, before smoothing.
    pub fn destination(
        &self,
        camera: Vec3,
        target: Vec3,
        projection: &impl ViewportProjection,
    ) -> Vec3 {
        let depth = projection.world_to_viewport(target).z;
        let center = projection.viewport_to_world(VIEWPORT_CENTER.extend(depth));
        let mut destination = camera + (target - center);
        if destination.y < self.min_height {
            destination.y = self.min_height;
        }
        destination
    }

    /// Advance the camera one frame toward the target.
    pub fn step(
        &mut self,
        camera: Vec3,
        target: Vec3,
        projection: &impl ViewportProjection,
        dt: f32,
    ) -> Vec3 {
        let destination = self.destination(camera, target, projection);
        smooth_damp_vec3(
            camera,
            destination,
            &mut self.velocity,
            self.damp_time,
            f32::INFINITY,
            dt,
        )
    }
}
