//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// A hitbox connected with a victim. There is deliberately no death event;
/// interested parties poll `is_dead` on the victim's health component.
#[derive(Debug)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: i32,
}

impl Message for DamageEvent {}
