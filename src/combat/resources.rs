//! Combat domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    pub attack_damage: i32,
    pub attack_duration: f32,
    pub attack_cooldown: f32,
    pub hitbox_size: Vec2,
    pub hitbox_offset: f32,
    pub hitbox_duration: f32,
    pub hurt_duration: f32,
    pub iframes_duration: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            attack_damage: 4,
            attack_duration: 0.3,
            attack_cooldown: 0.25,
            hitbox_size: Vec2::new(40.0, 32.0),
            hitbox_offset: 28.0,
            hitbox_duration: 0.12,
            hurt_duration: 0.4,
            iframes_duration: 0.5,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct EnemyTuning {
    pub move_speed: f32,
    pub follow_range: f32,
    pub minimum_distance: f32,
    pub initial_health: i32,
    pub attack_damage: i32,
    pub attack_cooldown: f32,
    pub hitbox_size: Vec2,
    pub hitbox_offset: f32,
    pub hitbox_duration: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            move_speed: 120.0,
            follow_range: 320.0,
            minimum_distance: 48.0,
            initial_health: 8,
            attack_damage: 2,
            attack_cooldown: 1.0,
            hitbox_size: Vec2::new(36.0, 28.0),
            hitbox_offset: 26.0,
            hitbox_duration: 0.15,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub attack: bool,
}
