//! Sprites module: clip playback driven by locomotion parameters.
//!
//! This module handles:
//! - Clip selection from published animation parameters
//! - Frame progression and completion/cue messages
//! - Sprite mirroring and placeholder tinting

pub mod animation;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationFinished>()
            .add_message::<AnimationCue>()
            .add_systems(
                Update,
                (
                    select_animation_clip,
                    update_animation_frames,
                    tint_by_clip,
                    sync_facing,
                )
                    .chain(),
            );
    }
}
