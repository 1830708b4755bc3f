//! Movement domain: player locomotion state machine and its Bevy wiring.

mod animation;
mod bootstrap;
mod buffer;
mod components;
mod controller;
mod dev;
mod resources;
mod sensor;
mod systems;


pub use animation::{AnimationParam, AnimationSink, AnimatorParams, ParamValue};
pub use buffer::TimedAction;
pub use components::{Facing, GameLayer, Ground, Player};
pub use controller::{
    GroundTransition, LocomotionState, PhysicsBody, TickReport, air_target_velocity,
};
pub use resources::{GroundedPhysics, LocomotionConfig, ProbeOffsets, ProbeShape};
pub use sensor::{BodySensor, GroundProbeSet, GroundQuery, GroundSensor};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_locomotion, detect_ground, handle_animation_cues, handle_animation_finished,
    read_input,
};
use crate::sprites::update_animation_frames;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionConfig>()
            .add_systems(Startup, (spawn_test_room, spawn_player))
            .add_systems(Update, (read_input, detect_ground).chain())
            .add_systems(
                Update,
                (handle_animation_cues, handle_animation_finished).after(update_animation_frames),
            )
            .add_systems(FixedUpdate, apply_locomotion);
    }
}
