//! Animation clip selection and playback.
//!
//! Clips are picked from the parameters the locomotion tick publishes. Roll
//! and attack clips do not loop; when they end an [`AnimationFinished`]
//! message goes back to the state machine, so clip length is what decides
//! how long a roll or attack lasts.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::movement::{AnimationParam, AnimatorParams, Facing, LocomotionState};

/// Horizontal speed below which a grounded character counts as idle.
const RUN_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationClip {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    Roll,
    Attack,
}

impl AnimationClip {
    /// Clip for the given parameters, highest priority first.
    pub fn from_params(params: &AnimatorParams) -> Self {
        if params.flag(AnimationParam::IsRolling) {
            AnimationClip::Roll
        } else if params.flag(AnimationParam::IsAttacking) {
            AnimationClip::Attack
        } else if !params.flag(AnimationParam::IsGrounded) {
            if params.float(AnimationParam::VerticalSpeed) > 0.0 {
                AnimationClip::Jump
            } else {
                AnimationClip::Fall
            }
        } else if params.float(AnimationParam::HorizontalSpeed) > RUN_THRESHOLD {
            AnimationClip::Run
        } else {
            AnimationClip::Idle
        }
    }

    pub fn looping(self) -> bool {
        !matches!(self, AnimationClip::Roll | AnimationClip::Attack)
    }

    pub fn frame_count(self) -> u32 {
        match self {
            AnimationClip::Idle => 4,
            AnimationClip::Run => 6,
            AnimationClip::Jump | AnimationClip::Fall => 2,
            AnimationClip::Roll => 5,
            AnimationClip::Attack => 3,
        }
    }

    pub fn frame_duration(self) -> f32 {
        match self {
            AnimationClip::Roll => 0.08,
            AnimationClip::Attack => 0.1,
            _ => 0.15,
        }
    }

    /// Frame on which an [`AnimationCue`] fires, if any.
    pub fn cue_frame(self) -> Option<u32> {
        match self {
            // Roll movement ends before the recovery frames
            AnimationClip::Roll => Some(3),
            _ => None,
        }
    }
}

/// Component for clip playback on a character sprite.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub clip: AnimationClip,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Whether a non-looping clip has reached its last frame.
    pub finished: bool,
}

impl AnimationController {
    /// Switch clips, resetting playback only when the clip changes.
    pub fn set_clip(&mut self, clip: AnimationClip) {
        if self.clip != clip {
            self.restart(clip);
        }
    }

    /// Play `clip` from its first frame even if it is already current.
    pub fn restart(&mut self, clip: AnimationClip) {
        self.clip = clip;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;
    }

    /// Advance playback by `dt`; returns the frame events this step produced.
    pub fn advance(&mut self, dt: f32) -> ClipEvents {
        let mut events = ClipEvents::default();
        if self.finished {
            return events;
        }

        let frame_duration = self.clip.frame_duration();
        let total_frames = self.clip.frame_count();
        self.frame_timer += dt;

        while self.frame_timer >= frame_duration && !self.finished {
            self.frame_timer -= frame_duration;
            self.current_frame += 1;

            if self.clip.cue_frame() == Some(self.current_frame) {
                events.cue = true;
            }

            if self.current_frame >= total_frames {
                if self.clip.looping() {
                    self.current_frame = 0;
                } else {
                    self.current_frame = total_frames - 1;
                    self.finished = true;
                    events.finished = true;
                }
            }
        }

        events
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClipEvents {
    pub cue: bool,
    pub finished: bool,
}

/// Message fired when a non-looping clip completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub clip: AnimationClip,
}

impl Message for AnimationFinished {}

/// Message fired when a clip reaches its cue frame.
#[derive(Debug)]
pub struct AnimationCue {
    pub entity: Entity,
    pub clip: AnimationClip,
}

impl Message for AnimationCue {}

/// Pick the clip matching the latest published parameters.
pub fn select_animation_clip(
    mut query: Query<(&AnimatorParams, &mut AnimationController), Changed<AnimatorParams>>,
) {
    for (params, mut controller) in &mut query {
        controller.set_clip(AnimationClip::from_params(params));
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<AnimationFinished>,
    mut cue_events: MessageWriter<AnimationCue>,
) {
    for (entity, mut controller) in &mut query {
        let events = controller.advance(time.delta_secs());
        let clip = controller.clip;

        if events.cue {
            cue_events.write(AnimationCue { entity, clip });
        }
        if events.finished {
            debug!("Clip finished: entity={:?}, clip={:?}", entity, clip);
            finished_events.write(AnimationFinished { entity, clip });
        }
    }
}

/// Mirror the sprite to match facing.
pub fn sync_facing(mut query: Query<(&LocomotionState, &mut Sprite), Changed<LocomotionState>>) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

/// Placeholder visuals: tint the body by clip.
pub fn tint_by_clip(mut query: Query<(&AnimationController, &mut Sprite), Changed<AnimationController>>) {
    for (controller, mut sprite) in &mut query {
        sprite.color = match controller.clip {
            AnimationClip::Idle | AnimationClip::Run => Color::srgb(0.9, 0.9, 0.9),
            AnimationClip::Jump | AnimationClip::Fall => Color::srgb(0.8, 0.85, 0.95),
            AnimationClip::Roll => Color::srgb(0.95, 0.85, 0.5),
            AnimationClip::Attack => Color::srgb(0.95, 0.55, 0.5),
        };
    }
}
