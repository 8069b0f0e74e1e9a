//! Movement domain: ground detection for the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{AnimationFlags, GameLayer, MovementState, Player};
use crate::movement::resources::MovementTuning;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (&Transform, &LinearVelocity, &mut MovementState, &mut AnimationFlags),
        With<Player>,
    >,
) {
    // Only ground-tagged surfaces count; enemies and sensors don't.
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, velocity, mut state, mut anim) in &mut query {
        let was_on_ground = state.on_ground;

        let ray_origin = transform.translation.truncate() + tuning.ground_probe_anchor;
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir2::NEG_Y,
            tuning.ground_probe_length,
            true,
            &ground_filter,
        );

        state.on_ground = hit.is_some();

        // Landing ends the jump.
        if state.on_ground && !was_on_ground && state.is_jumping {
            state.is_jumping = false;
            anim.jumping = false;
        }

        state.is_falling = !state.on_ground && velocity.y < 0.0;
        anim.falling = state.is_falling;
    }
}
