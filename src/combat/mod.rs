//! Combat domain: enemy AI, health, and damage plumbing.

mod ai;
mod components;
mod events;
mod resources;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    AttackState, Enemy, EnemyAI, EnemyAttack, EnemyHealth, Health, Hitbox, HitboxLifetime, Hurt,
    Invulnerable, Team,
};
pub use events::DamageEvent;
pub use resources::{CombatInput, CombatTuning, EnemyTuning};
pub use spawn::EnemyBundle;

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::movement::MovementSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<EnemyTuning>()
            .init_resource::<CombatInput>()
            .add_message::<DamageEvent>()
            .add_systems(
                Update,
                systems::read_combat_input
                    .before(MovementSet::Decide)
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    systems::update_combat_timers,
                    systems::process_player_attacks,
                    ai::update_enemy_ai,
                    systems::handle_hitbox_collisions,
                    systems::apply_damage,
                    systems::despawn_expired_hitboxes,
                )
                    .chain()
                    .after(MovementSet::Apply)
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            );
    }
}
