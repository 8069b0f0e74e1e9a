//! Checkpoint domain: unit tests for the slot and the restore flow.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use super::events::RespawnRequestedEvent;
use super::resources::CheckpointSlot;
use super::systems::{request_respawn_on_death, restore_to_checkpoint};
use crate::combat::Health;
use crate::movement::{MovementState, Player};

#[test]
fn test_slot_overwrites_and_never_clears() {
    let mut slot = CheckpointSlot::default();
    assert!(!slot.has_checkpoint());
    assert_eq!(slot.position(), None);

    slot.set_position(Vec2::new(10.0, 4.0));
    assert!(slot.has_checkpoint());
    assert_eq!(slot.position(), Some(Vec2::new(10.0, 4.0)));

    slot.set_position(Vec2::new(-3.0, 8.0));
    assert_eq!(slot.position(), Some(Vec2::new(-3.0, 8.0)));

    // Reading is not consuming.
    assert_eq!(slot.position(), Some(Vec2::new(-3.0, 8.0)));
}

fn always_request(mut events: MessageWriter<RespawnRequestedEvent>) {
    events.write(RespawnRequestedEvent);
}

fn restore_app(slot: CheckpointSlot) -> App {
    let mut app = App::new();
    app.insert_resource(slot)
        .add_message::<RespawnRequestedEvent>()
        .add_systems(Update, (always_request, restore_to_checkpoint).chain());
    app
}

fn spawn_test_player(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            Transform::from_xyz(position.x, position.y, 0.0),
            LinearVelocity(Vec2::new(40.0, -10.0)),
        ))
        .id()
}

#[test]
fn test_restore_without_save_is_a_noop() {
    let mut app = restore_app(CheckpointSlot::default());
    let player = spawn_test_player(&mut app, Vec2::new(77.0, 5.0));

    app.update();

    let transform = app.world().get::<Transform>(player).unwrap();
    assert_eq!(transform.translation.x, 77.0);
    assert_eq!(transform.translation.y, 5.0);
    // Velocity untouched: no collaborator was invoked.
    assert_eq!(
        app.world().get::<LinearVelocity>(player).unwrap().0,
        Vec2::new(40.0, -10.0)
    );
}

#[test]
fn test_restore_resets_status_and_is_idempotent() {
    let mut slot = CheckpointSlot::default();
    slot.set_position(Vec2::new(-300.0, -168.0));
    let mut app = restore_app(slot);
    let player = spawn_test_player(&mut app, Vec2::new(77.0, 5.0));

    {
        let mut health = app.world_mut().get_mut::<Health>(player).unwrap();
        health.current = 0;
    }
    {
        let mut movement = app.world_mut().get_mut::<MovementState>(player).unwrap();
        movement.is_dashing = true;
        movement.is_jumping = true;
    }

    app.update();

    let transform = app.world().get::<Transform>(player).unwrap();
    assert_eq!(transform.translation.truncate(), Vec2::new(-300.0, -168.0));
    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().0, Vec2::ZERO);

    let health = app.world().get::<Health>(player).unwrap();
    assert_eq!(health.current, health.max);

    let movement = app.world().get::<MovementState>(player).unwrap();
    assert!(!movement.is_dashing);
    assert!(!movement.is_jumping);

    // The slot survives the restore; a second request lands at the same spot.
    app.update();
    let transform = app.world().get::<Transform>(player).unwrap();
    assert_eq!(transform.translation.truncate(), Vec2::new(-300.0, -168.0));
}

#[test]
fn test_death_poll_restores_to_checkpoint() {
    let mut slot = CheckpointSlot::default();
    slot.set_position(Vec2::new(12.0, -40.0));

    let mut app = App::new();
    app.insert_resource(slot)
        .add_message::<RespawnRequestedEvent>()
        .add_systems(
            Update,
            (request_respawn_on_death, restore_to_checkpoint).chain(),
        );
    let player = spawn_test_player(&mut app, Vec2::new(500.0, 0.0));

    // Alive: nothing happens.
    app.update();
    assert_eq!(
        app.world().get::<Transform>(player).unwrap().translation.x,
        500.0
    );

    app.world_mut().get_mut::<Health>(player).unwrap().current = 0;
    app.update();

    let transform = app.world().get::<Transform>(player).unwrap();
    assert_eq!(transform.translation.truncate(), Vec2::new(12.0, -40.0));
    let health = app.world().get::<Health>(player).unwrap();
    assert!(!health.is_dead());
}
