//! Movement domain: keyboard sampling into locomotion input handlers.

use bevy::prelude::*;

use crate::movement::{LocomotionConfig, LocomotionState, Player};

const LEFT: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const ROLL: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyL];
const ATTACK: [KeyCode; 1] = [KeyCode::KeyJ];

pub(crate) fn read_input(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<LocomotionConfig>,
    mut query: Query<&mut LocomotionState, With<Player>>,
) {
    let now = time.elapsed_secs_f64();

    // Horizontal axis
    let mut axis = 0.0;
    if keyboard.any_pressed(LEFT) {
        axis -= 1.0;
    }
    if keyboard.any_pressed(RIGHT) {
        axis += 1.0;
    }

    for mut state in &mut query {
        if state.horizontal_input != axis {
            state.on_horizontal_input(axis);
        }

        if keyboard.any_just_pressed(JUMP) {
            state.on_jump_started(now, &config);
        } else if keyboard.any_just_released(JUMP) && !keyboard.any_pressed(JUMP) {
            state.on_jump_canceled();
        }

        if keyboard.any_just_pressed(ROLL) {
            state.on_roll_performed(now, &config);
        }

        if keyboard.any_just_pressed(ATTACK) {
            state.on_attack_started(&config);
        } else if keyboard.any_just_released(ATTACK) {
            state.on_attack_canceled();
        }
    }
}
