//! Content domain: data-driven tuning loaded from RON.
//!
//! All tunables live in `assets/data/locomotion.ron`. A missing or malformed
//! file is logged and the built-in defaults stay in place; out-of-range values
//! are reported but still applied.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CameraDef, LocomotionDef, LocomotionFile, ProbeOffsetsDef, WorldDef};
pub use loader::{ContentLoadError, load_locomotion_file, parse_locomotion_file};
pub use validation::{ValidationError, validate_locomotion};

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::camera::CameraConfig;
use crate::movement::LocomotionConfig;

/// Directory holding data files, relative to the working directory.
const DATA_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let file = match load_locomotion_file(Path::new(DATA_PATH)) {
        Ok(file) => file,
        Err(e) => {
            error!("{}; using default tuning", e);
            return;
        }
    };

    for e in validate_locomotion(&file) {
        warn!("Tuning out of range: {}", e);
    }

    info!(
        "Loaded tuning: gravity={}, fixed_hz={}, run_speed={}, camera_damp={}",
        file.world.gravity, file.world.fixed_hz, file.player.run_speed, file.camera.damp_time
    );

    commands.insert_resource(Gravity(Vec2::NEG_Y * file.world.gravity));
    commands.insert_resource(Time::<Fixed>::from_hz(file.world.fixed_hz));
    commands.insert_resource(LocomotionConfig::from(&file.player));
    commands.insert_resource(CameraConfig::from(&file.camera));
}
