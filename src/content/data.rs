//! Data definitions for RON tuning files.

use serde::{Deserialize, Serialize};

use crate::movement::{GroundedPhysics, ProbeShape};

/// Top-level contents of `locomotion.ron`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocomotionFile {
    pub world: WorldDef,
    pub player: LocomotionDef,
    pub camera: CameraDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldDef {
    /// Downward acceleration in world units per second squared.
    pub gravity: f32,
    /// Fixed physics tick rate in Hz.
    pub fixed_hz: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocomotionDef {
    pub run_speed: f32,
    pub air_mobility_multiplier: f32,
    pub movement_smoothing: f32,
    pub jump_force: f32,
    pub jump_buffer_time: f32,
    pub coyote_jump_time: f32,
    pub roll_speed: f32,
    pub roll_buffer_time: f32,
    #[serde(default)]
    pub roll_jump_time: Option<f32>,
    pub probe: ProbeShape,
    pub probe_offsets: ProbeOffsetsDef,
    pub gravity: f32,
    pub linear_drag: f32,
    pub fall_multiplier: f32,
    #[serde(default)]
    pub attack_enabled: bool,
    #[serde(default)]
    pub grounded_physics: GroundedPhysics,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct ProbeOffsetsDef {
    pub back: (f32, f32),
    pub middle: (f32, f32),
    pub front: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraDef {
    pub damp_time: f32,
    /// Initial camera position; its height becomes the follow floor.
    pub start: (f32, f32),
}
