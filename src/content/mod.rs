//! Content domain: designer tuning loaded from RON at startup.

mod data;
mod loader;

pub use loader::ContentLoadError;

use bevy::prelude::*;
use std::path::Path;

use crate::combat::{CombatTuning, EnemyTuning};
use crate::movement::MovementTuning;

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_tuning_overrides);
    }
}

/// Overlay the RON tuning file onto the compiled-in defaults. A missing file
/// keeps the defaults; a broken file warns and keeps the defaults.
fn apply_tuning_overrides(
    mut movement: ResMut<MovementTuning>,
    mut enemy: ResMut<EnemyTuning>,
    mut combat: ResMut<CombatTuning>,
) {
    let path = Path::new(TUNING_PATH);
    if !path.exists() {
        info!("No tuning file at {TUNING_PATH}, using built-in defaults");
        return;
    }

    match loader::load_tuning(path) {
        Ok(tuning) => {
            if let Some(overrides) = &tuning.movement {
                overrides.apply(&mut movement);
            }
            if let Some(overrides) = &tuning.enemy {
                overrides.apply(&mut enemy);
            }
            if let Some(overrides) = &tuning.combat {
                overrides.apply(&mut combat);
            }
            info!("Applied tuning overrides from {TUNING_PATH}");
        }
        Err(e) => {
            warn!("{e}; using built-in defaults");
        }
    }
}
