//! Stage domain: demo arena layout and entity spawning.

mod spawn;

use bevy::prelude::*;

use crate::core::GameState;

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Playing),
            (spawn::spawn_arena, spawn::spawn_player, spawn::spawn_enemies).chain(),
        );
    }
}
