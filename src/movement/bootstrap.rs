//! Movement domain: player spawn from the loaded locomotion tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AnimatorParams, GameLayer, LocomotionConfig, LocomotionState, Player};
use crate::sprites::AnimationController;

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const PLAYER_SPAWN: Vec3 = Vec3::new(0.0, 100.0, 0.0);

pub(crate) fn spawn_player(mut commands: Commands, config: Res<LocomotionConfig>) {
    info!(
        "Spawning player: run_speed={}, jump_force={}, probe={:?}, attack_enabled={}, grounded_physics={:?}",
        config.run_speed,
        config.jump_force,
        config.probe,
        config.attack_enabled,
        config.grounded_physics
    );

    commands.spawn((
        // Identity & Locomotion
        (
            Player,
            LocomotionState::default(),
            AnimatorParams::default(),
            AnimationController::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_translation(PLAYER_SPAWN),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            // Unit mass so jump impulses read as velocities
            Mass(1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            LinearDamping(config.linear_drag),
            GravityScale(config.gravity),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
