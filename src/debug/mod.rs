//! Debug tools for fast iteration (dev-tools feature).
//!
//! - F1: toggle player invincibility
//! - F2: dump player state to the log
//! - F4: toggle the grab state (stands in for the ledge detector)
//! - F5: force a respawn request

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::checkpoint::RespawnRequestedEvent;
use crate::combat::{Health, Invulnerable};
use crate::movement::{GrabEvent, MovementState, Player};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub invincible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, handle_debug_keys);
    }
}

fn handle_debug_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut respawn_events: MessageWriter<RespawnRequestedEvent>,
    mut grab_events: MessageWriter<GrabEvent>,
    mut players: Query<(Entity, &Transform, &MovementState, &Health, &mut Invulnerable), With<Player>>,
) {
    let Ok((entity, transform, movement, health, mut invulnerable)) = players.single_mut() else {
        return;
    };

    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.invincible = !debug_state.invincible;
        invulnerable.timer = if debug_state.invincible {
            f32::INFINITY
        } else {
            0.0
        };
        info!("Invincibility: {}", debug_state.invincible);
    }

    if keyboard.just_pressed(KeyCode::F2) {
        info!(
            "Player at {:?}: health {}/{}, {:?}",
            transform.translation.truncate(),
            health.current,
            health.max,
            movement
        );
    }

    if keyboard.just_pressed(KeyCode::F4) {
        grab_events.write(GrabEvent {
            entity,
            active: !movement.is_grabbing,
        });
        info!("Grab toggled");
    }

    if keyboard.just_pressed(KeyCode::F5) {
        respawn_events.write(RespawnRequestedEvent);
        info!("Respawn requested");
    }
}
