//! Stage domain: arena, player, and enemy spawn systems.

use avian2d::prelude::*;
use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::checkpoint::Checkpoint;
use crate::combat::{EnemyBundle, EnemyTuning, Team};
use crate::core::RunConfig;
use crate::movement::{GameLayer, Ground, Player};

const FLOOR_Y: f32 = -200.0;
const PLAYER_SPAWN: Vec2 = Vec2::new(-400.0, -150.0);

pub(crate) fn spawn_arena(mut commands: Commands) {
    let ground_color = Color::srgb(0.35, 0.4, 0.35);
    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);

    // Main floor
    commands.spawn((
        Ground,
        RigidBody::Static,
        Collider::rectangle(1600.0, 40.0),
        ground_layers,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(1600.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, FLOOR_Y - 20.0, 0.0),
    ));

    // Raised platforms
    for (x, y) in [(-150.0, -90.0), (250.0, -10.0)] {
        commands.spawn((
            Ground,
            RigidBody::Static,
            Collider::rectangle(220.0, 24.0),
            ground_layers,
            Sprite {
                color: ground_color,
                custom_size: Some(Vec2::new(220.0, 24.0)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
        ));
    }

    // Checkpoint zone near the start of the arena
    commands.spawn((
        Checkpoint,
        Sensor,
        Collider::rectangle(48.0, 64.0),
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        Sprite {
            color: Color::srgba(0.4, 0.6, 0.9, 0.5),
            custom_size: Some(Vec2::new(48.0, 64.0)),
            ..default()
        },
        Transform::from_xyz(-300.0, FLOOR_Y + 32.0, 0.0),
    ));
}

pub(crate) fn spawn_player(mut commands: Commands, existing: Query<Entity, With<Player>>) {
    if !existing.is_empty() {
        return;
    }

    let size = Vec2::new(24.0, 48.0);

    commands.spawn((
        Player,
        Team::Player,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(PLAYER_SPAWN.x, PLAYER_SPAWN.y, 0.0),
        RigidBody::Dynamic,
        Collider::rectangle(size.x, size.y),
        LockedAxes::ROTATION_LOCKED,
        // The movement systems integrate gravity so grab can suspend it.
        GravityScale(0.0),
        CollisionEventsEnabled,
        CollisionLayers::new(
            GameLayer::Player,
            [GameLayer::Ground, GameLayer::Sensor, GameLayer::EnemyHitbox],
        ),
        LinearVelocity::default(),
    ));
}

pub(crate) fn spawn_enemies(
    mut commands: Commands,
    run_config: Res<RunConfig>,
    tuning: Res<EnemyTuning>,
    players: Query<Entity, With<Player>>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    let mut rng = ChaCha8Rng::seed_from_u64(run_config.seed);

    for i in 0..3 {
        let x = 150.0 + i as f32 * 220.0 + rng.random_range(-40.0..40.0);
        commands.spawn(EnemyBundle::new(
            Vec2::new(x, FLOOR_Y + 16.0),
            player,
            &tuning,
        ));
    }
}
