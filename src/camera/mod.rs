//! Camera domain: camera spawn and player follow.

mod follow;

#[cfg(test)]
mod tests;

pub use follow::{CameraFollow, ClipSpaceProjection, ViewportProjection};

use bevy::prelude::*;

use crate::content::CameraDef;
use crate::movement::Player;

#[derive(Resource, Debug, Clone)]
pub struct CameraConfig {
    pub damp_time: f32,
    pub start: Vec2,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            damp_time: 0.15,
            start: Vec2::ZERO,
        }
    }
}

impl From<&CameraDef> for CameraConfig {
    fn from(def: &CameraDef) -> Self {
        Self {
            damp_time: def.damp_time,
            start: Vec2::from(def.start),
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraConfig>()
            .add_systems(Startup, spawn_camera)
            .add_systems(PostStartup, init_camera_follow)
            .add_systems(Update, follow_target);
    }
}

fn spawn_camera(mut commands: Commands, config: Res<CameraConfig>) {
    commands.spawn((
        Camera2d,
        Transform::from_translation(config.start.extend(0.0)),
        CameraFollow::new(config.damp_time),
    ));
}

/// Capture the height floor and resolve the follow target.
fn init_camera_follow(
    players: Query<Entity, With<Player>>,
    mut cameras: Query<(&Transform, &mut CameraFollow)>,
) {
    let target = players.iter().next();
    if target.is_none() {
        warn!("No player to follow; camera follow disabled");
    }

    for (transform, mut follow) in &mut cameras {
        follow.min_height = transform.translation.y;
        follow.target = target;
        info!(
            "Camera follow: target={:?}, min_height={}",
            follow.target, follow.min_height
        );
    }
}

fn follow_target(
    time: Res<Time>,
    targets: Query<&Transform, Without<CameraFollow>>,
    mut cameras: Query<(&mut Transform, &GlobalTransform, &Camera, &mut CameraFollow)>,
) {
    let dt = time.delta_secs();

    for (mut transform, global, camera, mut follow) in &mut cameras {
        let Some(target) = follow.target.and_then(|e| targets.get(e).ok()) else {
            continue;
        };

        let projection = ClipSpaceProjection::from_camera(camera, global);
        transform.translation =
            follow.step(transform.translation, target.translation, &projection, dt);
    }
}
