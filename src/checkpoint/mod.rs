//! Checkpoint domain: respawn slot and restore flow.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::Checkpoint;
pub use events::{CheckpointSavedEvent, RespawnRequestedEvent};
pub use resources::CheckpointSlot;

use bevy::prelude::*;

use crate::core::GameState;

pub struct CheckpointPlugin;

impl Plugin for CheckpointPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CheckpointSlot>()
            .add_message::<CheckpointSavedEvent>()
            .add_message::<RespawnRequestedEvent>()
            .add_systems(
                Update,
                (
                    systems::save_checkpoint_on_contact,
                    systems::request_respawn_on_death,
                    systems::restore_to_checkpoint,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
