//! Movement domain: tuning resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::content::LocomotionDef;

/// How a single ground probe tests for contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProbeShape {
    /// Downward ray of the given length.
    Ray { distance: f32 },
    /// Circle overlap centered on the probe point.
    Circle { radius: f32 },
}

impl Default for ProbeShape {
    fn default() -> Self {
        ProbeShape::Ray { distance: 4.0 }
    }
}

/// Drag and gravity policy while standing on ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroundedPhysics {
    /// Grounded: full drag (none while rolling) and no gravity.
    #[default]
    Standard,
    /// Grounded or rolling: no drag and no gravity.
    Locked,
}

/// Body-relative probe points, authored for a character facing right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeOffsets {
    pub back: Vec2,
    pub middle: Vec2,
    pub front: Vec2,
}

impl Default for ProbeOffsets {
    fn default() -> Self {
        Self {
            back: Vec2::new(-10.0, -24.0),
            middle: Vec2::new(0.0, -24.0),
            front: Vec2::new(10.0, -24.0),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct LocomotionConfig {
    pub run_speed: f32,
    /// Scales air steering; reversing in the air is damped by this factor.
    pub air_mobility_multiplier: f32,
    /// Smoothing time (seconds) for horizontal velocity changes.
    pub movement_smoothing: f32,
    /// Upward impulse applied on jump.
    pub jump_force: f32,
    pub jump_buffer_time: f32,
    pub coyote_jump_time: f32,
    pub roll_speed: f32,
    pub roll_buffer_time: f32,
    /// Jump buffer used when jump is pressed mid-roll. `None` uses `jump_buffer_time`.
    pub roll_jump_time: Option<f32>,
    pub probe: ProbeShape,
    pub probe_offsets: ProbeOffsets,
    /// Base gravity scale while airborne.
    pub gravity: f32,
    pub linear_drag: f32,
    pub fall_multiplier: f32,
    pub attack_enabled: bool,
    pub grounded_physics: GroundedPhysics,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            run_speed: 320.0,
            air_mobility_multiplier: 0.6,
            movement_smoothing: 0.05,
            jump_force: 620.0,
            jump_buffer_time: 0.12,
            coyote_jump_time: 0.12,
            roll_speed: 520.0,
            roll_buffer_time: 0.15,
            roll_jump_time: None,
            probe: ProbeShape::default(),
            probe_offsets: ProbeOffsets::default(),
            gravity: 1.0,
            linear_drag: 3.0,
            fall_multiplier: 1.8,
            attack_enabled: false,
            grounded_physics: GroundedPhysics::Standard,
        }
    }
}

impl LocomotionConfig {
    /// Jump buffer duration for a press made in the given roll state.
    pub fn jump_buffer_for(&self, rolling: bool) -> f32 {
        match (rolling, self.roll_jump_time) {
            (true, Some(roll_jump_time)) => roll_jump_time,
            _ => self.jump_buffer_time,
        }
    }
}

impl From<&LocomotionDef> for LocomotionConfig {
    fn from(def: &LocomotionDef) -> Self {
        Self {
            run_speed: def.run_speed,
            air_mobility_multiplier: def.air_mobility_multiplier,
            movement_smoothing: def.movement_smoothing,
            jump_force: def.jump_force,
            jump_buffer_time: def.jump_buffer_time,
            coyote_jump_time: def.coyote_jump_time,
            roll_speed: def.roll_speed,
            roll_buffer_time: def.roll_buffer_time,
            roll_jump_time: def.roll_jump_time,
            probe: def.probe,
            probe_offsets: ProbeOffsets {
                back: Vec2::from(def.probe_offsets.back),
                middle: Vec2::from(def.probe_offsets.middle),
                front: Vec2::from(def.probe_offsets.front),
            },
            gravity: def.gravity,
            linear_drag: def.linear_drag,
            fall_multiplier: def.fall_multiplier,
            attack_enabled: def.attack_enabled,
            grounded_physics: def.grounded_physics,
        }
    }
}
