//! Checkpoint domain: save-on-contact and restore systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::checkpoint::components::Checkpoint;
use crate::checkpoint::events::{CheckpointSavedEvent, RespawnRequestedEvent};
use crate::checkpoint::resources::CheckpointSlot;
use crate::combat::{Health, Hurt};
use crate::movement::{AnimationFlags, MovementState, Player};

pub(crate) fn save_checkpoint_on_contact(
    mut collision_events: MessageReader<CollisionStart>,
    mut saved_events: MessageWriter<CheckpointSavedEvent>,
    mut slot: ResMut<CheckpointSlot>,
    checkpoints: Query<&Transform, With<Checkpoint>>,
    players: Query<(), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (checkpoint_entity, player_entity) in pairs {
            let Ok(transform) = checkpoints.get(checkpoint_entity) else {
                continue;
            };
            if players.get(player_entity).is_err() {
                continue;
            }

            let position = transform.translation.truncate();
            slot.set_position(position);
            saved_events.write(CheckpointSavedEvent { position });
            info!("Checkpoint saved at {position}");
        }
    }
}

/// Poll the player's health and raise one respawn request per death.
pub(crate) fn request_respawn_on_death(
    players: Query<&Health, With<Player>>,
    mut respawn_events: MessageWriter<RespawnRequestedEvent>,
    mut requested: Local<bool>,
) {
    let Ok(health) = players.single() else {
        return;
    };

    if health.is_dead() {
        if !*requested {
            *requested = true;
            respawn_events.write(RespawnRequestedEvent);
        }
    } else {
        *requested = false;
    }
}

pub(crate) fn restore_to_checkpoint(
    mut respawn_events: MessageReader<RespawnRequestedEvent>,
    slot: Res<CheckpointSlot>,
    mut players: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut Health,
            &mut Hurt,
            &mut MovementState,
            &mut AnimationFlags,
        ),
        With<Player>,
    >,
) {
    if respawn_events.read().count() == 0 {
        return;
    }

    // Nothing saved yet: stay put.
    let Some(position) = slot.position() else {
        return;
    };

    for (mut transform, mut velocity, mut health, mut hurt, mut movement, mut anim) in &mut players
    {
        reset_player_status(
            position,
            &mut transform,
            &mut velocity,
            &mut health,
            &mut hurt,
            &mut movement,
            &mut anim,
        );
        info!("Player restored to checkpoint at {position}");
    }
}

/// Status-reset collaborator: teleport, stop, heal, and clear transient
/// movement state. Facing survives a respawn.
pub(crate) fn reset_player_status(
    position: Vec2,
    transform: &mut Transform,
    velocity: &mut LinearVelocity,
    health: &mut Health,
    hurt: &mut Hurt,
    movement: &mut MovementState,
    anim: &mut AnimationFlags,
) {
    transform.translation.x = position.x;
    transform.translation.y = position.y;
    velocity.0 = Vec2::ZERO;

    health.restore_full();
    hurt.timer = 0.0;

    movement.horizontal_intent = 0.0;
    movement.is_jumping = false;
    movement.jump_queued = false;
    movement.is_dashing = false;
    movement.dash_timer = 0.0;
    movement.is_falling = false;
    movement.is_grabbing = false;

    *anim = AnimationFlags::default();
}
