//! Checkpoint domain: save and respawn events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A checkpoint zone was touched and its position stored.
#[derive(Debug)]
pub struct CheckpointSavedEvent {
    pub position: Vec2,
}

impl Message for CheckpointSavedEvent {}

/// Ask for the player to be restored to the saved checkpoint. A no-op when
/// nothing has been saved yet.
#[derive(Debug)]
pub struct RespawnRequestedEvent;

impl Message for RespawnRequestedEvent {}
