//! Combat domain: enemy spawning helpers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{Enemy, EnemyAI, EnemyAttack, EnemyHealth, Team};
use crate::combat::resources::EnemyTuning;
use crate::movement::GameLayer;

/// Bundle for spawning a pursuit enemy tracking a target entity.
#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub team: Team,
    pub health: EnemyHealth,
    pub ai: EnemyAI,
    pub attack: EnemyAttack,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_events: CollisionEventsEnabled,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub locked_axes: LockedAxes,
    pub gravity_scale: GravityScale,
}

impl EnemyBundle {
    pub fn new(position: Vec2, target: Entity, tuning: &EnemyTuning) -> Self {
        let size = Vec2::new(32.0, 32.0);

        Self {
            enemy: Enemy,
            team: Team::Enemy,
            health: EnemyHealth::new(tuning.initial_health),
            ai: EnemyAI {
                target: Some(target),
                follow_range: tuning.follow_range,
                minimum_distance: tuning.minimum_distance,
            },
            attack: EnemyAttack::default(),
            sprite: Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(size),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(size.x, size.y),
            collision_events: CollisionEventsEnabled,
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Ground, GameLayer::PlayerHitbox],
            ),
            velocity: LinearVelocity::default(),
            locked_axes: LockedAxes::ROTATION_LOCKED,
            gravity_scale: GravityScale(1.0),
        }
    }
}
