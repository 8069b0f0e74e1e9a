//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_gravity, apply_horizontal_velocity, apply_jump, handle_grab_events, trigger_dash,
    trigger_jump, update_facing, update_intent, update_timers,
};
