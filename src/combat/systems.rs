//! Combat domain: input, timers, hitbox contact, and damage application.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{
    AttackState, EnemyAttack, EnemyHealth, Health, Hitbox, HitboxLifetime, Hurt, Invulnerable,
    Team,
};
use crate::combat::events::DamageEvent;
use crate::combat::resources::{CombatInput, CombatTuning};
use crate::movement::{GameLayer, MovementState, Player};

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CombatInput>,
) {
    input.attack = keyboard.just_pressed(KeyCode::KeyZ) || keyboard.just_pressed(KeyCode::KeyU);
}

pub(crate) fn update_combat_timers(
    time: Res<Time>,
    mut hurt_query: Query<&mut Hurt>,
    mut invulnerable_query: Query<&mut Invulnerable>,
    mut attack_query: Query<&mut AttackState>,
    mut enemy_attack_query: Query<&mut EnemyAttack>,
) {
    let dt = time.delta_secs();

    for mut hurt in &mut hurt_query {
        if hurt.timer > 0.0 {
            hurt.timer -= dt;
        }
    }

    for mut invulnerable in &mut invulnerable_query {
        if invulnerable.timer > 0.0 {
            invulnerable.timer -= dt;
        }
    }

    for mut attack in &mut attack_query {
        if attack.attack_timer > 0.0 {
            attack.attack_timer -= dt;
        }
        if attack.cooldown_timer > 0.0 {
            attack.cooldown_timer -= dt;
        }
    }

    for mut enemy_attack in &mut enemy_attack_query {
        if enemy_attack.cooldown_timer > 0.0 {
            enemy_attack.cooldown_timer -= dt;
        }
    }
}

pub(crate) fn process_player_attacks(
    mut commands: Commands,
    input: Res<CombatInput>,
    tuning: Res<CombatTuning>,
    mut query: Query<
        (Entity, &Transform, &MovementState, &mut AttackState, &Hurt, &Health),
        With<Player>,
    >,
) {
    if !input.attack {
        return;
    }

    for (entity, transform, movement, mut attack, hurt, health) in &mut query {
        if hurt.is_hurting() || health.is_dead() || movement.is_dashing {
            continue;
        }
        if !attack.can_attack() {
            continue;
        }

        attack.start(tuning.attack_duration, tuning.attack_cooldown);

        let direction = movement.facing.sign();
        let origin = transform.translation.truncate();
        let hitbox_pos = origin + Vec2::new(direction * tuning.hitbox_offset, 0.0);

        commands.spawn((
            Hitbox {
                damage: tuning.attack_damage,
                owner: entity,
                hit_entities: Vec::new(),
            },
            Team::Player,
            HitboxLifetime(tuning.hitbox_duration),
            Sprite {
                color: Color::srgba(0.9, 0.9, 0.4, 0.5),
                custom_size: Some(tuning.hitbox_size),
                ..default()
            },
            Transform::from_xyz(hitbox_pos.x, hitbox_pos.y, 1.0),
            Collider::rectangle(tuning.hitbox_size.x, tuning.hitbox_size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::PlayerHitbox, [GameLayer::Enemy]),
        ));
    }
}

/// Turn hitbox overlaps into damage events, once per victim per hitbox.
pub(crate) fn handle_hitbox_collisions(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut hitbox_query: Query<(&mut Hitbox, &Team)>,
    victim_query: Query<&Team, Without<Hitbox>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (hitbox_entity, victim_entity) in pairs {
            let Ok((mut hitbox, hitbox_team)) = hitbox_query.get_mut(hitbox_entity) else {
                continue;
            };
            let Ok(victim_team) = victim_query.get(victim_entity) else {
                continue;
            };

            if *victim_team == *hitbox_team {
                continue;
            }
            if hitbox.hit_entities.contains(&victim_entity) {
                continue;
            }
            hitbox.hit_entities.push(victim_entity);

            damage_events.write(DamageEvent {
                source: hitbox.owner,
                target: victim_entity,
                amount: hitbox.damage,
            });
        }
    }
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    tuning: Res<CombatTuning>,
    mut player_query: Query<(&mut Health, &mut Hurt, &mut Invulnerable)>,
    mut enemy_query: Query<&mut EnemyHealth>,
) {
    for event in damage_events.read() {
        if let Ok((mut health, mut hurt, mut invulnerable)) = player_query.get_mut(event.target) {
            if invulnerable.is_invulnerable() {
                continue;
            }
            health.take_damage(event.amount);
            hurt.timer = tuning.hurt_duration;
            invulnerable.timer = tuning.iframes_duration;
            debug!(
                "Player took {} damage from {:?}, {} health left",
                event.amount, event.source, health.current
            );
        } else if let Ok(mut enemy_health) = enemy_query.get_mut(event.target) {
            enemy_health.take_damage(event.amount);
            debug!(
                "Enemy {:?} took {} damage, {} health left",
                event.target,
                event.amount,
                enemy_health.current()
            );
        }
    }
}

pub(crate) fn despawn_expired_hitboxes(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitboxLifetime)>,
) {
    let dt = time.delta_secs();

    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}
