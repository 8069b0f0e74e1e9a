//! Movement domain: externally raised locomotion signals.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Ledge-hold signal from an external detector. Starting a grab freezes the
/// body and suspends gravity until the grab ends or a jump cancels it.
#[derive(Debug)]
pub struct GrabEvent {
    pub entity: Entity,
    pub active: bool,
}

impl Message for GrabEvent {}
