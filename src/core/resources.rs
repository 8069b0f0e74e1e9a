//! Core domain: shared resources for pause state and session configuration.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

/// Resource tracking if gameplay should be paused.
/// Gameplay is paused if any source is active.
#[derive(Resource, Debug, Default)]
pub struct GameplayPaused {
    pub sources: HashSet<String>,
}

impl GameplayPaused {
    pub fn is_paused(&self) -> bool {
        !self.sources.is_empty()
    }

    pub fn pause(&mut self, source: impl Into<String>) {
        self.sources.insert(source.into());
    }

    pub fn unpause(&mut self, source: impl Into<String>) {
        self.sources.remove(&source.into());
    }
}

/// Run condition: returns true only when gameplay is not paused
pub fn gameplay_active(paused: Res<GameplayPaused>) -> bool {
    !paused.is_paused()
}

/// Session configuration; the seed drives deterministic stage layout.
#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}
