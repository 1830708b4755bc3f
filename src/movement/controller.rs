//! Movement domain: the locomotion state machine.
//!
//! `LocomotionState` is driven from two entry points: [`LocomotionState::on_frame`]
//! once per rendered frame (ground transitions) and
//! [`LocomotionState::on_physics_tick`] once per fixed step (movement, roll,
//! jump, attack, physics shaping, animation output). Input handlers only set
//! fields and arm buffers; they never touch the body.

use bevy::prelude::*;

use crate::core::smooth_damp;
use crate::movement::{
    AnimationParam, AnimationSink, Facing, GroundSensor, GroundedPhysics, LocomotionConfig,
    TimedAction,
};

/// Airborne drag is this fraction of `linear_drag`.
const AIR_DRAG_FACTOR: f32 = 0.15;

/// Rigid body the tick writes to.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn drag(&self) -> f32;
    fn set_drag(&mut self, drag: f32);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
    /// Instantaneous momentum change.
    fn apply_impulse(&mut self, impulse: Vec2);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Left,
    Landed,
}

/// What happened during one physics tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub flipped: bool,
    pub roll_started: bool,
    pub jumped: bool,
    pub attack_started: bool,
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionState {
    pub facing: Facing,
    pub grounded: bool,
    pub coyote: TimedAction,
    /// Cleared by a jump, restored on landing.
    pub coyote_usable: bool,
    pub jump_buffer: TimedAction,
    pub roll_buffer: TimedAction,
    pub rolling: bool,
    pub attacking: bool,
    pub horizontal_input: f32,
    pub jump_held: bool,
    pub attack_held: bool,
    pub(crate) smoothing_velocity: f32,
}

impl Default for LocomotionState {
    fn default() -> Self {
        Self {
            facing: Facing::Right,
            grounded: true,
            coyote: TimedAction::default(),
            coyote_usable: false,
            jump_buffer: TimedAction::default(),
            roll_buffer: TimedAction::default(),
            rolling: false,
            attacking: false,
            horizontal_input: 0.0,
            jump_held: false,
            attack_held: false,
            smoothing_velocity: 0.0,
        }
    }
}

/// Target horizontal velocity while airborne.
///
/// Reversing against current motion is damped by `multiplier`; steering with
/// the motion never lowers the current speed. `signum(0.0)` is `+1`, so a
/// released stick keeps rightward momentum but drops leftward momentum
/// toward zero.
pub fn air_target_velocity(target: f32, current: f32, multiplier: f32) -> f32 {
    if target.signum() != current.signum() {
        target * multiplier
    } else {
        target.signum() * current.abs().max((target * multiplier).abs())
    }
}

impl LocomotionState {
    pub fn on_horizontal_input(&mut self, axis: f32) {
        self.horizontal_input = axis;
    }

    pub fn on_jump_started(&mut self, now: f64, config: &LocomotionConfig) {
        self.jump_held = true;
        self.jump_buffer.arm(now, config.jump_buffer_for(self.rolling));
    }

    pub fn on_jump_canceled(&mut self) {
        self.jump_held = false;
    }

    pub fn on_roll_performed(&mut self, now: f64, config: &LocomotionConfig) {
        if !self.rolling {
            self.roll_buffer.arm(now, config.roll_buffer_time);
        }
    }

    pub fn on_attack_started(&mut self, config: &LocomotionConfig) {
        if config.attack_enabled {
            self.attack_held = true;
        }
    }

    pub fn on_attack_canceled(&mut self) {
        self.attack_held = false;
    }

    pub fn end_roll(&mut self) {
        self.rolling = false;
    }

    pub fn end_attack(&mut self) {
        self.attacking = false;
    }

    /// The movement part of a roll is over: stop horizontally, keep falling.
    pub fn on_roll_movement_finished(&self, body: &mut impl PhysicsBody) {
        let velocity = body.velocity();
        body.set_velocity(Vec2::new(0.0, velocity.y));
    }

    pub fn can_move(&self) -> bool {
        !self.rolling
    }

    pub fn can_roll(&self, now: f64) -> bool {
        self.roll_buffer.is_active(now) && self.grounded && !self.rolling
    }

    pub fn can_jump(&self, now: f64) -> bool {
        self.jump_buffer.is_active(now)
            && !self.rolling
            && (self.grounded || (self.coyote_usable && self.coyote.is_active(now)))
    }

    pub fn can_attack(&self) -> bool {
        self.attack_held && !self.rolling
    }

    /// Record this frame's ground contact and react to transitions.
    pub fn on_frame(
        &mut self,
        now: f64,
        config: &LocomotionConfig,
        grounded: bool,
    ) -> Option<GroundTransition> {
        let transition = match (self.grounded, grounded) {
            (true, false) => {
                self.coyote.arm(now, config.coyote_jump_time);
                Some(GroundTransition::Left)
            }
            (false, true) => {
                self.coyote_usable = true;
                if config.attack_enabled {
                    self.attacking = false;
                }
                Some(GroundTransition::Landed)
            }
            _ => None,
        };

        self.grounded = grounded;
        transition
    }

    pub fn on_physics_tick(
        &mut self,
        now: f64,
        dt: f32,
        config: &LocomotionConfig,
        body: &mut impl PhysicsBody,
        sensor: &impl GroundSensor,
        animation: &mut impl AnimationSink,
    ) -> TickReport {
        let mut report = TickReport::default();

        if self.can_move() {
            report.flipped = self.apply_horizontal_movement(dt, config, body);
        }
        report.roll_started = self.apply_roll(now, config, body, sensor);
        report.jumped = self.apply_jump(now, config, body);
        if config.attack_enabled {
            report.attack_started = self.apply_attack();
        }

        self.adjust_physics(config, body);
        self.publish_animation(config, body, animation);

        report
    }

    /// Steer toward the input; returns true when facing flipped.
    fn apply_horizontal_movement(
        &mut self,
        dt: f32,
        config: &LocomotionConfig,
        body: &mut impl PhysicsBody,
    ) -> bool {
        let input = self.horizontal_input;
        let flipped = (input > 0.0 && self.facing == Facing::Left)
            || (input < 0.0 && self.facing == Facing::Right);
        if flipped {
            self.facing = self.facing.flipped();
        }

        let mut velocity = body.velocity();
        let mut target = input * config.run_speed;
        if !self.grounded {
            target = air_target_velocity(target, velocity.x, config.air_mobility_multiplier);
        }

        velocity.x = smooth_damp(
            velocity.x,
            target,
            &mut self.smoothing_velocity,
            config.movement_smoothing,
            f32::INFINITY,
            dt,
        );
        body.set_velocity(velocity);

        flipped
    }

    fn apply_roll(
        &mut self,
        now: f64,
        config: &LocomotionConfig,
        body: &mut impl PhysicsBody,
        sensor: &impl GroundSensor,
    ) -> bool {
        if self.can_roll(now) {
            self.rolling = true;
            self.roll_buffer.consume();
            // Rolling off a ledge gets no burst
            if sensor.is_ground_ahead(self.facing) {
                body.set_velocity(Vec2::new(config.roll_speed * self.facing.sign(), 0.0));
            }
            return true;
        }

        if self.rolling && !sensor.is_ground_ahead(self.facing) {
            body.set_velocity(Vec2::ZERO);
        }
        false
    }

    fn apply_jump(
        &mut self,
        now: f64,
        config: &LocomotionConfig,
        body: &mut impl PhysicsBody,
    ) -> bool {
        if !self.can_jump(now) {
            return false;
        }

        self.jump_buffer.consume();
        self.coyote.consume();
        self.coyote_usable = false;

        let velocity = body.velocity();
        body.set_velocity(Vec2::new(velocity.x, 0.0));
        body.apply_impulse(Vec2::Y * config.jump_force);
        true
    }

    /// Returns true when an attack begins this tick.
    fn apply_attack(&mut self) -> bool {
        if !self.can_attack() {
            return false;
        }
        let started = !self.attacking;
        self.attacking = true;
        started
    }

    /// Drag and gravity scale for the current contact state.
    pub fn adjust_physics(&self, config: &LocomotionConfig, body: &mut impl PhysicsBody) {
        let on_ground = match config.grounded_physics {
            GroundedPhysics::Standard => {
                self.grounded.then(|| if self.rolling { 0.0 } else { config.linear_drag })
            }
            GroundedPhysics::Locked => (self.grounded || self.rolling).then_some(0.0),
        };

        if let Some(drag) = on_ground {
            body.set_drag(drag);
            body.set_gravity_scale(0.0);
            return;
        }

        body.set_drag(config.linear_drag * AIR_DRAG_FACTOR);
        let vertical = body.velocity().y;
        let gravity_scale = if vertical < 0.0 {
            config.gravity * config.fall_multiplier
        } else if vertical > 0.0 && !self.jump_held {
            // Short hop: jump released early
            config.gravity * config.fall_multiplier / 2.0
        } else {
            config.gravity
        };
        body.set_gravity_scale(gravity_scale);
    }

    pub fn publish_animation(
        &self,
        config: &LocomotionConfig,
        body: &impl PhysicsBody,
        animation: &mut impl AnimationSink,
    ) {
        let velocity = body.velocity();
        animation.set_float(AnimationParam::HorizontalSpeed, velocity.x.abs());
        animation.set_float(AnimationParam::VerticalSpeed, velocity.y);
        animation.set_bool(AnimationParam::IsGrounded, self.grounded);
        animation.set_bool(AnimationParam::IsRolling, self.rolling);
        if config.attack_enabled {
            animation.set_bool(AnimationParam::IsAttacking, self.attacking);
        }
    }
}
