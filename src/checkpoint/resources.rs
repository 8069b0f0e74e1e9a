//! Checkpoint domain: the single saved respawn position.

use bevy::prelude::*;

/// At most one saved position. Saving overwrites; restoring never clears, so
/// repeated restores return to the same point until the next save.
#[derive(Resource, Debug, Default)]
pub struct CheckpointSlot {
    position: Option<Vec2>,
}

impl CheckpointSlot {
    pub fn set_position(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    pub fn has_checkpoint(&self) -> bool {
        self.position.is_some()
    }
}
