//! Movement domain: player locomotion plugin wiring and public exports.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AnimationFlags, Facing, GameLayer, Ground, MovementState, Player};
pub use events::GrabEvent;
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};

/// Locomotion runs in two chained phases: `Decide` samples input and updates
/// per-frame intent; `Apply` is the only place intent becomes velocity.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Decide,
    Apply,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<GrabEvent>()
            .configure_sets(Update, (MovementSet::Decide, MovementSet::Apply).chain())
            .add_systems(
                Update,
                systems::read_input
                    .before(MovementSet::Decide)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    systems::update_timers,
                    systems::detect_ground,
                    systems::handle_grab_events,
                    systems::update_intent,
                    systems::trigger_jump,
                    systems::trigger_dash,
                    systems::update_facing,
                )
                    .chain()
                    .in_set(MovementSet::Decide)
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                (
                    systems::apply_horizontal_velocity,
                    systems::apply_jump,
                    systems::apply_gravity,
                )
                    .chain()
                    .in_set(MovementSet::Apply)
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            );
    }
}
