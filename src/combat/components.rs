//! Combat domain: combatant components and health state.

use bevy::prelude::*;

pub const PLAYER_STARTING_HEALTH: i32 = 20;

/// Team affiliation to prevent friendly fire
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Player health pool. Also the surface the movement systems poll for the
/// hurt/dead suppression rules.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current = (self.current - amount).max(0);
    }

    pub fn restore_full(&mut self) {
        self.current = self.max;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(PLAYER_STARTING_HEALTH)
    }
}

/// Depletable enemy health. Damage only lands while the pool is still
/// positive; once at or below zero, further hits are no-ops.
#[derive(Component, Debug, Clone)]
pub struct EnemyHealth {
    current: i32,
}

impl EnemyHealth {
    pub fn new(initial: i32) -> Self {
        Self { current: initial }
    }

    pub fn take_damage(&mut self, damage: i32) {
        if self.current > 0 {
            self.current -= damage;
        }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn current(&self) -> i32 {
        self.current
    }
}

/// Hurt stun. Movement control is suppressed while the timer runs.
#[derive(Component, Debug, Default)]
pub struct Hurt {
    pub timer: f32,
}

impl Hurt {
    pub fn is_hurting(&self) -> bool {
        self.timer > 0.0
    }
}

/// Invulnerability frames - entity cannot take damage
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

/// Player attack swing. The cooldown gates how often a swing can start.
#[derive(Component, Debug, Default)]
pub struct AttackState {
    pub attack_timer: f32,
    pub cooldown_timer: f32,
}

impl AttackState {
    pub fn is_attacking(&self) -> bool {
        self.attack_timer > 0.0
    }

    pub fn can_attack(&self) -> bool {
        !self.is_attacking() && self.cooldown_timer <= 0.0
    }

    pub fn start(&mut self, duration: f32, cooldown: f32) {
        self.attack_timer = duration;
        self.cooldown_timer = duration + cooldown;
    }
}

#[derive(Component, Debug)]
pub struct Enemy;

/// Straight-line pursuit brain. Distance to the tracked target picks between
/// staying put, chasing, and attacking; re-evaluated from scratch each frame.
#[derive(Component, Debug)]
pub struct EnemyAI {
    pub target: Option<Entity>,
    pub follow_range: f32,
    pub minimum_distance: f32,
}

impl Default for EnemyAI {
    fn default() -> Self {
        Self {
            target: None,
            follow_range: 320.0,
            minimum_distance: 48.0,
        }
    }
}

/// Enemy attack gate; the cooldown lives here, not in the AI.
#[derive(Component, Debug, Default)]
pub struct EnemyAttack {
    pub cooldown_timer: f32,
}

impl EnemyAttack {
    /// Arms the cooldown and reports whether an attack may start now.
    pub fn try_start(&mut self, cooldown: f32) -> bool {
        if self.cooldown_timer > 0.0 {
            return false;
        }
        self.cooldown_timer = cooldown;
        true
    }
}

/// Hitbox - deals damage on contact with the opposing team
#[derive(Component, Debug)]
pub struct Hitbox {
    pub damage: i32,
    pub owner: Entity,
    pub hit_entities: Vec<Entity>,
}

/// Entity lifetime for temporary hitboxes
#[derive(Component)]
pub struct HitboxLifetime(pub f32);
