//! Movement domain: unit tests for intent, jump, dash, and flip rules.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use super::components::{Facing, MovementState, Player};
use super::resources::{MovementInput, MovementTuning};
use super::systems::movement::{
    apply_horizontal_velocity, apply_jump, trigger_dash, trigger_jump, update_facing,
    update_intent,
};
use crate::combat::{AttackState, Health, Hurt};

fn movement_app() -> App {
    let mut app = App::new();
    app.init_resource::<MovementInput>();
    app.init_resource::<MovementTuning>();
    app.add_systems(
        Update,
        (
            update_intent,
            trigger_jump,
            trigger_dash,
            update_facing,
            apply_horizontal_velocity,
            apply_jump,
        )
            .chain(),
    );
    app
}

fn spawn_test_player(app: &mut App) -> Entity {
    // The Player marker pulls in its required siblings.
    app.world_mut()
        .spawn((Player, Transform::default(), LinearVelocity::default()))
        .id()
}

fn set_input(app: &mut App, f: impl FnOnce(&mut MovementInput)) {
    f(&mut app.world_mut().resource_mut::<MovementInput>());
}

fn state(app: &mut App, entity: Entity) -> MovementState {
    app.world().get::<MovementState>(entity).unwrap().clone()
}

#[test]
fn test_quantize_axis_is_sign_only() {
    assert_eq!(MovementState::quantize_axis(0.7), 1.0);
    assert_eq!(MovementState::quantize_axis(12.0), 1.0);
    assert_eq!(MovementState::quantize_axis(-0.01), -1.0);
    assert_eq!(MovementState::quantize_axis(0.0), 0.0);
}

#[test]
fn test_intent_follows_axis_sign() {
    let mut app = movement_app();
    let player = spawn_test_player(&mut app);

    set_input(&mut app, |i| i.axis_x = 0.4);
    app.update();
    assert_eq!(state(&mut app, player).horizontal_intent, 1.0);

    set_input(&mut app, |i| i.axis_x = -2.0);
    app.update();
    assert_eq!(state(&mut app, player).horizontal_intent, -1.0);

    set_input(&mut app, |i| i.axis_x = 0.0);
    app.update();
    assert_eq!(state(&mut app, player).horizontal_intent, 0.0);
}

#[test]
fn test_suppression_forces_zero_intent() {
    let mut app = movement_app();
    let player = spawn_test_player(&mut app);
    set_input(&mut app, |i| i.axis_x = 1.0);

    // Attacking
    app.world_mut().get_mut::<AttackState>(player).unwrap().attack_timer = 0.2;
    app.update();
    assert_eq!(state(&mut app, player).horizontal_intent, 0.0);
    app.world_mut().get_mut::<AttackState>(player).unwrap().attack_timer = 0.0;

    // Hurting
    app.world_mut().get_mut::<Hurt>(player).unwrap().timer = 0.2;
    set_input(&mut app, |i| i.axis_x = 1.0);
    app.update();
    assert_eq!(state(&mut app, player).horizontal_intent, 0.0);
    app.world_mut().get_mut::<Hurt>(player).unwrap().timer = 0.0;

    // Dead
    app.world_mut().get_mut::<Health>(player).unwrap().current = 0;
    set_input(&mut app, |i| i.axis_x = 1.0);
    app.update();
    assert_eq!(state(&mut app, player).horizontal_intent, 0.0);
}

#[test]
fn test_jump_fires_only_on_fresh_grounded_edge() {
    let mut app = movement_app();
    let player = spawn_test_player(&mut app);
    let jump_speed = app.world().resource::<MovementTuning>().jump_speed;

    set_input(&mut app, |i| i.jump_just_pressed = true);
    app.update();
    let s = state(&mut app, player);
    assert!(s.is_jumping);
    assert!(!s.jump_queued);
    assert_eq!(
        app.world().get::<LinearVelocity>(player).unwrap().y,
        jump_speed
    );

    // Further presses while airborne are ignored.
    app.world_mut().get_mut::<LinearVelocity>(player).unwrap().y = 10.0;
    set_input(&mut app, |i| i.jump_just_pressed = true);
    app.update();
    assert_eq!(app.world().get::<LinearVelocity>(player).unwrap().y, 10.0);
}

#[test]
fn test_jump_blocked_while_falling() {
    let mut app = movement_app();
    let player = spawn_test_player(&mut app);

    app.world_mut()
        .get_mut::<MovementState>(player)
        .unwrap()
        .is_falling = true;
    set_input(&mut app, |i| i.jump_just_pressed = true);
    app.update();
    assert!(!state(&mut app, player).is_jumping);
}

#[test]
fn test_jump_from_grab_releases_the_hold() {
    let mut app = movement_app();
    let player = spawn_test_player(&mut app);

    {
        let mut s = app.world_mut().get_mut::<MovementState>(player).unwrap();
        s.is_grabbing = true;
        s.is_falling = true;
    }
    set_input(&mut app, |i| i.jump_just_pressed = true);
    app.update();

    let s = state(&mut app, player);
    assert!(s.is_jumping);
    assert!(!s.is_grabbing);
}

#[test]
fn test_dash_locks_intent_against_new_input() {
    let mut app = movement_app();
    let player = spawn_test_player(&mut app);
    let tuning = app.world().resource::<MovementTuning>().clone();

    set_input(&mut app, |i| i.axis_x = 1.0);
    app.update();
    set_input(&mut app, |i| {
        i.axis_x = 1.0;
        i.dash_just_pressed = true;
    });
    app.update();

    let s = state(&mut app, player);
    assert!(s.is_dashing);
    assert_eq!(s.dash_direction, 1.0);

    // Reversed input doesn't reach the intent while the dash runs.
    set_input(&mut app, |i| i.axis_x = -1.0);
    app.update();
    let s = state(&mut app, player);
    assert_eq!(s.horizontal_intent, 1.0);
    assert_eq!(
        app.world().get::<LinearVelocity>(player).unwrap().x,
        tuning.dash_speed
    );
}

#[test]
fn test_dash_requires_movement_and_no_active_dash() {
    let mut app = movement_app();
    let player = spawn_test_player(&mut app);

    // Standing still: the dash edge is ignored.
    set_input(&mut app, |i| i.dash_just_pressed = true);
    app.update();
    assert!(!state(&mut app, player).is_dashing);
}

#[test]
fn test_dash_releases_after_configured_duration() {
    let mut state = MovementState::default();
    state.start_dash(1.0, 0.5);

    state.tick_dash(0.3);
    assert!(state.is_dashing);
    state.tick_dash(0.19);
    assert!(state.is_dashing);
    state.tick_dash(0.02);
    assert!(!state.is_dashing);
}

#[test]
fn test_flip_only_on_sign_mismatch() {
    let mut app = movement_app();
    let player = spawn_test_player(&mut app);

    set_input(&mut app, |i| i.axis_x = -1.0);
    app.update();
    let s = state(&mut app, player);
    assert_eq!(s.facing, Facing::Left);
    let transform = *app.world().get::<Transform>(player).unwrap();
    assert_eq!(transform.scale.x, -1.0);
    assert_eq!(transform.translation.x, -1.0);

    // Same sign again: no further transform change.
    set_input(&mut app, |i| i.axis_x = -1.0);
    app.update();
    let unchanged = *app.world().get::<Transform>(player).unwrap();
    assert_eq!(unchanged.scale.x, transform.scale.x);
    assert_eq!(unchanged.translation.x, transform.translation.x);

    // Opposite sign flips back and undoes the nudge.
    set_input(&mut app, |i| i.axis_x = 1.0);
    app.update();
    let restored = *app.world().get::<Transform>(player).unwrap();
    assert_eq!(state(&mut app, player).facing, Facing::Right);
    assert_eq!(restored.scale.x, 1.0);
    assert_eq!(restored.translation.x, 0.0);
}
