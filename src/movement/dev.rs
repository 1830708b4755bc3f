//! Movement domain: test level for exercising locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground};

/// Ground slabs as (center, size).
const FLOORS: [(Vec2, Vec2); 3] = [
    // Main floor, left of the pit
    (Vec2::new(-300.0, -200.0), Vec2::new(600.0, 40.0)),
    // Far side of the pit
    (Vec2::new(450.0, -200.0), Vec2::new(500.0, 40.0)),
    // Lower floor under the pit, below the camera floor
    (Vec2::new(100.0, -600.0), Vec2::new(400.0, 40.0)),
];

const PLATFORMS: [(Vec2, Vec2); 3] = [
    // Low ledge to roll off
    (Vec2::new(-250.0, -60.0), Vec2::new(150.0, 20.0)),
    // Higher ledge, right side
    (Vec2::new(250.0, 40.0), Vec2::new(150.0, 20.0)),
    // Center, highest
    (Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0)),
];

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    let slabs = FLOORS
        .iter()
        .map(|slab| (slab, ground_color))
        .chain(PLATFORMS.iter().map(|slab| (slab, platform_color)));

    for (&(center, size), color) in slabs {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}
