//! Movement domain: fixed-step locomotion and animation callbacks.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::systems::collisions::AvianGroundQuery;
use crate::movement::{
    AnimatorParams, BodySensor, LocomotionConfig, LocomotionState, PhysicsBody, Player,
};
use crate::sprites::animation::AnimationClip;
use crate::sprites::{AnimationController, AnimationCue, AnimationFinished};

/// Physics body view over avian components.
pub(crate) struct AvianBody<'a> {
    velocity: Mut<'a, LinearVelocity>,
    damping: Mut<'a, LinearDamping>,
    gravity_scale: Mut<'a, GravityScale>,
    inverse_mass: f32,
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn drag(&self) -> f32 {
        self.damping.0
    }

    fn set_drag(&mut self, drag: f32) {
        if self.damping.0 != drag {
            self.damping.0 = drag;
        }
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        if self.gravity_scale.0 != scale {
            self.gravity_scale.0 = scale;
        }
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }
}

type BodyComponents = (
    &'static mut LinearVelocity,
    &'static mut LinearDamping,
    &'static mut GravityScale,
    &'static ComputedMass,
);

/// One locomotion step per fixed physics tick.
///
/// Buffers are armed from `Update` on the virtual clock, so deadlines are
/// checked against the same clock here; `dt` is the fixed step.
pub(crate) fn apply_locomotion(
    time: Res<Time>,
    clock: Res<Time<Virtual>>,
    spatial_query: SpatialQuery,
    config: Res<LocomotionConfig>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut LocomotionState,
            BodyComponents,
            &mut AnimatorParams,
            Option<&mut AnimationController>,
        ),
        With<Player>,
    >,
) {
    let now = clock.elapsed_secs_f64();
    let dt = time.delta_secs();
    let ground = AvianGroundQuery::new(&spatial_query, config.probe);

    for (entity, transform, mut state, (velocity, damping, gravity_scale, mass), mut params, clips) in
        &mut query
    {
        let mut body = AvianBody {
            velocity,
            damping,
            gravity_scale,
            inverse_mass: mass.inverse(),
        };
        let sensor = BodySensor {
            position: transform.translation.truncate(),
            offsets: config.probe_offsets,
            query: &ground,
        };

        let report = state.on_physics_tick(now, dt, &config, &mut body, &sensor, &mut *params);

        if report.roll_started {
            debug!(
                "Roll: entity={:?}, facing={:?}, velocity={:?}",
                entity,
                state.facing,
                body.velocity()
            );
        }
        if report.jumped {
            debug!("Jump: entity={:?}, velocity={:?}", entity, body.velocity());
        }
        if report.attack_started {
            debug!("Attack: entity={:?}", entity);
        }

        // Restart one-shot clips even when the previous pass already finished
        if let Some(mut clips) = clips {
            if report.roll_started {
                clips.restart(AnimationClip::Roll);
            } else if report.attack_started {
                clips.restart(AnimationClip::Attack);
            }
        }
    }
}

/// Route clip completion back into the state machine.
pub(crate) fn handle_animation_finished(
    mut finished_events: MessageReader<AnimationFinished>,
    mut query: Query<&mut LocomotionState>,
) {
    for event in finished_events.read() {
        let Ok(mut state) = query.get_mut(event.entity) else {
            continue;
        };
        match event.clip {
            AnimationClip::Roll => state.end_roll(),
            AnimationClip::Attack => state.end_attack(),
            _ => {}
        }
    }
}

/// The roll clip's cue marks the end of its movement phase.
pub(crate) fn handle_animation_cues(
    mut cue_events: MessageReader<AnimationCue>,
    mut query: Query<(&LocomotionState, BodyComponents)>,
) {
    for event in cue_events.read() {
        if event.clip != AnimationClip::Roll {
            continue;
        }
        let Ok((state, (velocity, damping, gravity_scale, mass))) = query.get_mut(event.entity)
        else {
            continue;
        };
        if !state.rolling {
            continue;
        }

        let mut body = AvianBody {
            velocity,
            damping,
            gravity_scale,
            inverse_mass: mass.inverse(),
        };
        state.on_roll_movement_finished(&mut body);
    }
}
