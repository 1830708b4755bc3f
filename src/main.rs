mod camera;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod sprites;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Dodgeroll".to_string(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        content::ContentPlugin,
        movement::MovementPlugin,
        sprites::SpritesPlugin,
        camera::CameraPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
