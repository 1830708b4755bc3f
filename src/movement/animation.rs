//! Movement domain: animation parameters published by the locomotion tick.

use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationParam {
    HorizontalSpeed,
    VerticalSpeed,
    IsGrounded,
    IsRolling,
    IsAttacking,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    Float(f32),
    Bool(bool),
}

/// Receiver of named animation parameters.
pub trait AnimationSink {
    fn set_float(&mut self, param: AnimationParam, value: f32);
    fn set_bool(&mut self, param: AnimationParam, value: bool);
}

/// Latest parameter values for one character, read by the clip player.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimatorParams {
    values: HashMap<AnimationParam, ParamValue>,
}

impl AnimatorParams {
    pub fn get(&self, param: AnimationParam) -> Option<ParamValue> {
        self.values.get(&param).copied()
    }

    /// Float value, 0.0 when unset or not a float.
    pub fn float(&self, param: AnimationParam) -> f32 {
        match self.get(param) {
            Some(ParamValue::Float(v)) => v,
            _ => 0.0,
        }
    }

    /// Bool value, false when unset or not a bool.
    pub fn flag(&self, param: AnimationParam) -> bool {
        matches!(self.get(param), Some(ParamValue::Bool(true)))
    }
}

impl AnimationSink for AnimatorParams {
    fn set_float(&mut self, param: AnimationParam, value: f32) {
        self.values.insert(param, ParamValue::Float(value));
    }

    fn set_bool(&mut self, param: AnimationParam, value: bool) {
        self.values.insert(param, ParamValue::Bool(value));
    }
}
