//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub run_speed: f32,
    pub jump_speed: f32,
    pub dash_speed: f32,
    pub dash_time: f32,
    pub gravity: f32,
    /// Ground probe origin, relative to the player's transform.
    pub ground_probe_anchor: Vec2,
    pub ground_probe_length: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_speed: 160.0,
            jump_speed: 520.0,
            dash_speed: 640.0,
            dash_time: 0.5,
            gravity: 1400.0,
            ground_probe_anchor: Vec2::new(0.0, -24.0),
            ground_probe_length: 4.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Raw horizontal axis before quantization.
    pub axis_x: f32,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
}
