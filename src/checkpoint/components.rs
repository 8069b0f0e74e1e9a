//! Checkpoint domain: marker components.

use bevy::prelude::*;

/// Sensor zone that records its own position as the respawn point when the
/// player touches it.
#[derive(Component, Debug)]
pub struct Checkpoint;
