//! Movement domain: locomotion components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackState, Health, Hurt, Invulnerable};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Sensors (checkpoints, triggers) - should not block movement
    Sensor,
    /// Player hitboxes (damage enemies)
    PlayerHitbox,
    /// Enemy hitboxes (damage player)
    EnemyHitbox,
}

/// Player marker. The locomotion systems read the attack, hurt, and health
/// siblings every frame, so spawning a player without them is a wiring bug;
/// the require list makes it impossible.
#[derive(Component, Debug)]
#[require(MovementState, AnimationFlags, AttackState, Hurt, Invulnerable, Health)]
pub struct Player;

#[derive(Component, Debug, Default, Clone)]
pub struct MovementState {
    /// Quantized horizontal intent, always -1, 0, or 1.
    pub horizontal_intent: f32,
    pub facing: Facing,
    pub on_ground: bool,
    pub is_jumping: bool,
    pub is_falling: bool,
    /// Set on a fresh jump press, consumed by the apply phase.
    pub jump_queued: bool,
    pub is_dashing: bool,
    /// Remaining dash time; the dash ends when this reaches zero.
    pub dash_timer: f32,
    pub dash_direction: f32,
    pub is_grabbing: bool,
}

impl MovementState {
    /// Quantize a raw input axis to the sign-only intent values.
    pub fn quantize_axis(raw: f32) -> f32 {
        if raw > 0.0 {
            1.0
        } else if raw < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    /// Queue a jump for the apply phase. Ignored while already airborne from
    /// a jump; a held button never re-queues.
    pub fn queue_jump(&mut self) {
        if !self.is_jumping {
            self.jump_queued = true;
        }
    }

    /// Begin a dash in `direction`, locking intent until `duration` elapses.
    pub fn start_dash(&mut self, direction: f32, duration: f32) {
        self.is_dashing = true;
        self.dash_direction = direction;
        self.dash_timer = duration;
    }

    /// Count the dash deadline down; clears the dashing flag on expiry.
    pub fn tick_dash(&mut self, dt: f32) {
        if !self.is_dashing {
            return;
        }
        self.dash_timer -= dt;
        if self.dash_timer <= 0.0 {
            self.is_dashing = false;
        }
    }

    /// True when the current intent points against the current facing.
    pub fn facing_mismatch(&self) -> bool {
        match self.facing {
            Facing::Right => self.horizontal_intent < 0.0,
            Facing::Left => self.horizontal_intent > 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Boolean surface the animation layer samples. `dash_triggered` is a
/// one-frame pulse; the rest mirror the current movement state.
#[derive(Component, Debug, Default)]
pub struct AnimationFlags {
    pub running: bool,
    pub jumping: bool,
    pub falling: bool,
    pub grabbing: bool,
    pub dash_triggered: bool,
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;
