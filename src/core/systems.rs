//! Core domain: session bootstrap and pause systems.

use bevy::prelude::*;

use crate::core::resources::{GameplayPaused, RunConfig};
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn begin_session(
    run_config: Res<RunConfig>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    info!("Starting session with seed: {}", run_config.seed);
    game_state.set(GameState::Playing);
}

const PAUSE_SOURCE_MENU: &str = "pause_menu";

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut paused: ResMut<GameplayPaused>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    if paused.sources.contains(PAUSE_SOURCE_MENU) {
        paused.unpause(PAUSE_SOURCE_MENU);
        info!("Gameplay resumed");
    } else {
        paused.pause(PAUSE_SOURCE_MENU);
        info!("Gameplay paused");
    }
}
