//! Combat domain: unit tests for health rules and pursuit decisions.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;

use super::ai::update_enemy_ai;
use super::components::{
    AttackState, Enemy, EnemyAI, EnemyAttack, EnemyHealth, Health, Hitbox,
};
use super::resources::EnemyTuning;

#[test]
fn test_enemy_health_damage_and_overkill() {
    let mut health = EnemyHealth::new(8);

    health.take_damage(3);
    assert_eq!(health.current(), 5);
    assert!(!health.is_dead());

    // A single overkill hit from a positive pool may land below zero.
    health.take_damage(10);
    assert_eq!(health.current(), -5);
    assert!(health.is_dead());

    // Once dead, further hits are no-ops.
    health.take_damage(4);
    assert_eq!(health.current(), -5);
}

#[test]
fn test_enemy_health_zero_stays_put() {
    let mut health = EnemyHealth::new(0);
    assert!(health.is_dead());

    health.take_damage(3);
    assert_eq!(health.current(), 0);
}

#[test]
fn test_player_health_clamps_at_zero() {
    let mut health = Health::new(10);

    health.take_damage(15);
    assert_eq!(health.current, 0);
    assert!(health.is_dead());

    health.restore_full();
    assert_eq!(health.current, 10);
    assert!(!health.is_dead());
}

#[test]
fn test_attack_state_cooldown_gating() {
    let mut attack = AttackState::default();
    assert!(attack.can_attack());

    attack.start(0.3, 0.25);
    assert!(attack.is_attacking());
    assert!(!attack.can_attack());
}

#[test]
fn test_enemy_attack_gate_arms_once() {
    let mut attack = EnemyAttack::default();
    assert!(attack.try_start(1.0));
    assert!(!attack.try_start(1.0));
}

fn ai_app() -> App {
    let mut app = App::new();
    app.init_resource::<EnemyTuning>();
    app.add_systems(Update, update_enemy_ai);
    app
}

fn spawn_target(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn(Transform::from_xyz(position.x, position.y, 0.0))
        .id()
}

fn spawn_enemy(app: &mut App, x: f32, target: Option<Entity>) -> Entity {
    app.world_mut()
        .spawn((
            Enemy,
            EnemyHealth::new(8),
            EnemyAI {
                target,
                ..default()
            },
            EnemyAttack::default(),
            Transform::from_xyz(x, 0.0, 0.0),
            // Pre-set residual motion so the stop-first invariant is visible.
            LinearVelocity(Vec2::new(55.0, 0.0)),
        ))
        .id()
}

fn hitbox_count(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&Hitbox>();
    query.iter(app.world()).count()
}

#[test]
fn test_enemy_idles_beyond_follow_range() {
    let mut app = ai_app();
    let target = spawn_target(&mut app, Vec2::ZERO);
    let enemy = spawn_enemy(&mut app, 400.0, Some(target));

    app.update();

    assert_eq!(app.world().get::<LinearVelocity>(enemy).unwrap().x, 0.0);
    assert_eq!(hitbox_count(&mut app), 0);
}

#[test]
fn test_enemy_chases_inside_follow_range() {
    let mut app = ai_app();
    let target = spawn_target(&mut app, Vec2::ZERO);
    let enemy = spawn_enemy(&mut app, 200.0, Some(target));
    let move_speed = app.world().resource::<EnemyTuning>().move_speed;

    app.update();

    // Exactly one move, toward the target.
    assert_eq!(
        app.world().get::<LinearVelocity>(enemy).unwrap().x,
        -move_speed
    );
    assert_eq!(hitbox_count(&mut app), 0);
}

#[test]
fn test_enemy_attacks_inside_minimum_distance() {
    let mut app = ai_app();
    let target = spawn_target(&mut app, Vec2::ZERO);
    let enemy = spawn_enemy(&mut app, 30.0, Some(target));

    app.update();

    // Faced the target (to its left), attacked, didn't move.
    assert_eq!(app.world().get::<LinearVelocity>(enemy).unwrap().x, 0.0);
    assert!(app.world().get::<Transform>(enemy).unwrap().scale.x < 0.0);
    assert_eq!(hitbox_count(&mut app), 1);
    assert!(
        app.world()
            .get::<EnemyAttack>(enemy)
            .unwrap()
            .cooldown_timer
            > 0.0
    );

    // Cooldown holds: the next frame attacks nothing new.
    app.update();
    assert_eq!(hitbox_count(&mut app), 1);
}

#[test]
fn test_dead_enemy_stays_stopped() {
    let mut app = ai_app();
    let target = spawn_target(&mut app, Vec2::ZERO);
    let enemy = spawn_enemy(&mut app, 30.0, Some(target));
    app.world_mut()
        .get_mut::<EnemyHealth>(enemy)
        .unwrap()
        .take_damage(20);

    app.update();

    assert_eq!(app.world().get::<LinearVelocity>(enemy).unwrap().x, 0.0);
    assert_eq!(hitbox_count(&mut app), 0);
}

#[test]
fn test_enemy_without_target_stays_stopped() {
    let mut app = ai_app();
    let enemy = spawn_enemy(&mut app, 30.0, None);

    app.update();

    assert_eq!(app.world().get::<LinearVelocity>(enemy).unwrap().x, 0.0);
    assert_eq!(hitbox_count(&mut app), 0);
}
