mod checkpoint;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod stage;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Emberfall".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Enemies fall under avian's gravity; the player runs with
    // GravityScale(0.0) and integrates gravity in its own systems.
    .insert_resource(Gravity(Vec2::NEG_Y * 1400.0))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        checkpoint::CheckpointPlugin,
        stage::StagePlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
