//! Core domain: game state, pause handling, and session setup.

mod resources;
mod state;
mod systems;

pub use resources::{GameplayPaused, RunConfig, gameplay_active};
pub use state::GameState;

use bevy::prelude::*;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .init_resource::<RunConfig>()
            .add_systems(Startup, systems::setup_camera)
            .add_systems(OnEnter(GameState::Boot), systems::begin_session)
            .add_systems(Update, systems::toggle_pause);
    }
}
