//! Movement domain: decision and velocity systems for the player.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::{AttackState, Health, Hurt};
use crate::movement::{AnimationFlags, GrabEvent, MovementInput, MovementState, Player};
use crate::movement::resources::MovementTuning;

/// Attacking, hurting, and dead all take priority over player control.
fn control_suppressed(attack: &AttackState, hurt: &Hurt, health: &Health) -> bool {
    attack.is_attacking() || hurt.is_hurting() || health.is_dead()
}

pub(crate) fn update_timers(
    time: Res<Time>,
    mut query: Query<(&mut MovementState, &mut AnimationFlags), With<Player>>,
) {
    let dt = time.delta_secs();

    for (mut state, mut anim) in &mut query {
        state.tick_dash(dt);
        // The dash trigger is a one-frame pulse.
        anim.dash_triggered = false;
    }
}

pub(crate) fn handle_grab_events(
    mut grab_events: MessageReader<GrabEvent>,
    mut query: Query<
        (&mut MovementState, &mut AnimationFlags, &mut LinearVelocity),
        With<Player>,
    >,
) {
    for event in grab_events.read() {
        let Ok((mut state, mut anim, mut velocity)) = query.get_mut(event.entity) else {
            continue;
        };

        state.is_grabbing = event.active;
        anim.grabbing = event.active;
        if event.active {
            // A hold is a full stop: no residual run velocity while hanging.
            state.horizontal_intent = 0.0;
            velocity.0 = Vec2::ZERO;
        }
    }
}

pub(crate) fn update_intent(
    input: Res<MovementInput>,
    mut query: Query<(&mut MovementState, &AttackState, &Hurt, &Health), With<Player>>,
) {
    for (mut state, attack, hurt, health) in &mut query {
        if control_suppressed(attack, hurt, health) {
            state.horizontal_intent = 0.0;
            continue;
        }

        // Dash owns the intent until its deadline passes.
        if state.is_dashing {
            continue;
        }

        if !state.is_grabbing {
            state.horizontal_intent = MovementState::quantize_axis(input.axis_x);
        }
    }
}

pub(crate) fn trigger_jump(
    input: Res<MovementInput>,
    mut query: Query<(&mut MovementState, &AttackState, &Hurt, &Health), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (mut state, attack, hurt, health) in &mut query {
        if control_suppressed(attack, hurt, health) || state.is_dashing {
            continue;
        }

        // A falling player can't start a jump, unless hanging from a ledge.
        if state.is_falling && !state.is_grabbing {
            continue;
        }

        state.queue_jump();
    }
}

pub(crate) fn trigger_dash(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&mut MovementState, &mut AnimationFlags, &AttackState, &Hurt, &Health),
        With<Player>,
    >,
) {
    if !input.dash_just_pressed {
        return;
    }

    for (mut state, mut anim, attack, hurt, health) in &mut query {
        if control_suppressed(attack, hurt, health) {
            continue;
        }

        // Only a moving player can dash, and never into an ongoing dash.
        if state.horizontal_intent == 0.0 || state.is_dashing {
            continue;
        }

        let direction = state.horizontal_intent;
        state.start_dash(direction, tuning.dash_time);
        anim.dash_triggered = true;
    }
}

pub(crate) fn update_facing(
    mut query: Query<(&mut MovementState, &mut Transform), With<Player>>,
) {
    for (mut state, mut transform) in &mut query {
        if state.is_dashing {
            continue;
        }

        if !state.facing_mismatch() {
            continue;
        }

        state.facing = state.facing.flipped();
        // Mirror the sprite, then shift by the mirrored scale: the sprite
        // pivot sits off-center, and without the nudge the flip visibly pops.
        transform.scale.x = -transform.scale.x;
        transform.translation.x += transform.scale.x;
    }
}

pub(crate) fn apply_horizontal_velocity(
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut AnimationFlags, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut anim, mut velocity) in &mut query {
        if state.is_dashing {
            // Vertical velocity carries over; the dash only owns x.
            velocity.x = state.dash_direction * tuning.dash_speed;
        } else {
            anim.running = state.horizontal_intent != 0.0;
            velocity.x = state.horizontal_intent * tuning.run_speed;
        }
    }
}

pub(crate) fn apply_jump(
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut AnimationFlags, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut anim, mut velocity) in &mut query {
        if state.jump_queued && !state.is_jumping {
            state.jump_queued = false;
            state.is_jumping = true;
            anim.jumping = true;
            velocity.y = tuning.jump_speed;
        }

        // Leaving the ground by jumping releases any ledge hold.
        if state.is_jumping && state.is_grabbing {
            state.is_grabbing = false;
            anim.grabbing = false;
        }
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        // A grab suspends gravity entirely.
        if state.is_grabbing {
            continue;
        }

        velocity.y -= tuning.gravity * dt;
    }
}
