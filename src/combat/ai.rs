//! Combat domain: enemy pursuit decisions.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{Enemy, EnemyAI, EnemyAttack, EnemyHealth, Hitbox, HitboxLifetime, Team};
use crate::combat::resources::EnemyTuning;
use crate::movement::GameLayer;

/// One decision per enemy per frame, from scratch. Movement is reset to
/// stopped before deciding, so motion only happens on an explicit chase.
pub(crate) fn update_enemy_ai(
    mut commands: Commands,
    tuning: Res<EnemyTuning>,
    targets: Query<&Transform, Without<Enemy>>,
    mut enemies: Query<
        (
            Entity,
            &mut Transform,
            &mut LinearVelocity,
            &EnemyAI,
            &mut EnemyAttack,
            &EnemyHealth,
        ),
        With<Enemy>,
    >,
) {
    for (entity, mut transform, mut velocity, ai, mut attack, health) in &mut enemies {
        velocity.x = 0.0;

        if health.is_dead() {
            continue;
        }

        let Some(target) = ai.target else {
            continue;
        };
        let Ok(target_transform) = targets.get(target) else {
            continue;
        };

        let enemy_pos = transform.translation.truncate();
        let target_pos = target_transform.translation.truncate();
        let distance = enemy_pos.distance(target_pos);

        if distance > ai.follow_range {
            continue;
        }

        if distance > ai.minimum_distance {
            let direction = (target_pos - enemy_pos).normalize_or_zero();
            velocity.x = direction.x * tuning.move_speed;
        } else {
            face_target(&mut transform, enemy_pos, target_pos);
            if attack.try_start(tuning.attack_cooldown) {
                spawn_enemy_hitbox(&mut commands, entity, enemy_pos, target_pos, &tuning);
            }
        }
    }
}

/// Mirror the enemy's sprite toward the target, only when it points away.
fn face_target(transform: &mut Transform, enemy_pos: Vec2, target_pos: Vec2) {
    let toward = target_pos.x - enemy_pos.x;
    let facing_right = transform.scale.x > 0.0;
    if toward < 0.0 && facing_right || toward > 0.0 && !facing_right {
        transform.scale.x = -transform.scale.x;
    }
}

fn spawn_enemy_hitbox(
    commands: &mut Commands,
    owner: Entity,
    enemy_pos: Vec2,
    target_pos: Vec2,
    tuning: &EnemyTuning,
) {
    let direction = (target_pos - enemy_pos).normalize_or_zero();
    let hitbox_pos = enemy_pos + direction * tuning.hitbox_offset;

    commands.spawn((
        Hitbox {
            damage: tuning.attack_damage,
            owner,
            hit_entities: Vec::new(),
        },
        Team::Enemy,
        HitboxLifetime(tuning.hitbox_duration),
        Sprite {
            color: Color::srgba(1.0, 0.3, 0.3, 0.5),
            custom_size: Some(tuning.hitbox_size),
            ..default()
        },
        Transform::from_xyz(hitbox_pos.x, hitbox_pos.y, 1.0),
        Collider::rectangle(tuning.hitbox_size.x, tuning.hitbox_size.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::EnemyHitbox, [GameLayer::Player]),
    ));
}
