//! Serde models for the tuning file. Every field is optional so designers
//! only write the values they change.

use serde::Deserialize;

use crate::combat::{CombatTuning, EnemyTuning};
use crate::movement::MovementTuning;

#[derive(Debug, Default, Deserialize)]
pub struct TuningFile {
    pub movement: Option<MovementTuningData>,
    pub enemy: Option<EnemyTuningData>,
    pub combat: Option<CombatTuningData>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MovementTuningData {
    pub run_speed: Option<f32>,
    pub jump_speed: Option<f32>,
    pub dash_speed: Option<f32>,
    pub dash_time: Option<f32>,
    pub gravity: Option<f32>,
    pub ground_probe_anchor: Option<(f32, f32)>,
    pub ground_probe_length: Option<f32>,
}

impl MovementTuningData {
    pub fn apply(&self, tuning: &mut MovementTuning) {
        if let Some(v) = self.run_speed {
            tuning.run_speed = v;
        }
        if let Some(v) = self.jump_speed {
            tuning.jump_speed = v;
        }
        if let Some(v) = self.dash_speed {
            tuning.dash_speed = v;
        }
        if let Some(v) = self.dash_time {
            tuning.dash_time = v;
        }
        if let Some(v) = self.gravity {
            tuning.gravity = v;
        }
        if let Some((x, y)) = self.ground_probe_anchor {
            tuning.ground_probe_anchor = bevy::math::Vec2::new(x, y);
        }
        if let Some(v) = self.ground_probe_length {
            tuning.ground_probe_length = v;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EnemyTuningData {
    pub move_speed: Option<f32>,
    pub follow_range: Option<f32>,
    pub minimum_distance: Option<f32>,
    pub initial_health: Option<i32>,
    pub attack_damage: Option<i32>,
    pub attack_cooldown: Option<f32>,
}

impl EnemyTuningData {
    pub fn apply(&self, tuning: &mut EnemyTuning) {
        if let Some(v) = self.move_speed {
            tuning.move_speed = v;
        }
        if let Some(v) = self.follow_range {
            tuning.follow_range = v;
        }
        if let Some(v) = self.minimum_distance {
            tuning.minimum_distance = v;
        }
        if let Some(v) = self.initial_health {
            tuning.initial_health = v;
        }
        if let Some(v) = self.attack_damage {
            tuning.attack_damage = v;
        }
        if let Some(v) = self.attack_cooldown {
            tuning.attack_cooldown = v;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CombatTuningData {
    pub attack_damage: Option<i32>,
    pub attack_duration: Option<f32>,
    pub attack_cooldown: Option<f32>,
    pub hurt_duration: Option<f32>,
    pub iframes_duration: Option<f32>,
}

impl CombatTuningData {
    pub fn apply(&self, tuning: &mut CombatTuning) {
        if let Some(v) = self.attack_damage {
            tuning.attack_damage = v;
        }
        if let Some(v) = self.attack_duration {
            tuning.attack_duration = v;
        }
        if let Some(v) = self.attack_cooldown {
            tuning.attack_cooldown = v;
        }
        if let Some(v) = self.hurt_duration {
            tuning.hurt_duration = v;
        }
        if let Some(v) = self.iframes_duration {
            tuning.iframes_duration = v;
        }
    }
}
