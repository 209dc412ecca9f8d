//! Movement domain: ground and wall detection systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::events::PlayerLanded;
use crate::movement::{GameLayer, MovementState, MovementTuning, Player, WallSide};

/// Extra reach past the wall sensor when resolving which side a wall is on.
const SIDE_PROBE_SLACK: f32 = 4.0;

pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut landed: MessageWriter<PlayerLanded>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    // Filter to only hit Ground layer entities (not enemies, sensors, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let foot_box = Collider::rectangle(tuning.ground_box_size.x, tuning.ground_box_size.y);

    for (transform, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let origin = transform.translation.truncate() + tuning.ground_box_offset;
        let hits = spatial_query.shape_intersections(&foot_box, origin, 0.0, &ground_filter);
        state.on_ground = !hits.is_empty();

        if state.on_ground {
            // Grounded contact continuously refreshes the coyote window and
            // clears everything the air spent.
            state.coyote_timer = tuning.coyote_time;
            state.is_jumping = false;
            state.jumps_used = 0;
            state.wall_jumps_used = 0;
            state.last_wall_jump = None;
            state.wall_slide_time = 0.0;
        }

        if state.on_ground && !was_on_ground {
            debug!("Landed: coyote_timer={:.2}", state.coyote_timer);
            landed.write(PlayerLanded);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: coyote_timer={:.2}", state.coyote_timer);
        }
    }
}

pub(crate) fn probe_walls(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    if !tuning.wall_jump_enabled {
        // No wall contact means the slide and wall jump downstream never fire
        for (_, mut state) in &mut query {
            state.on_wall = false;
        }
        return;
    }

    // Filter to only hit Wall layer entities
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);
    let side_box = Collider::rectangle(tuning.wall_check_distance * 2.0, 4.0);

    for (transform, mut state) in &mut query {
        let origin = transform.translation.truncate();
        let hits = spatial_query.shape_intersections(&side_box, origin, 0.0, &wall_filter);
        state.on_wall = !hits.is_empty();
    }
}

/// Resolves which side the touched wall is on with a single rightward ray.
/// No hit to the right means the wall is on the left.
pub(crate) fn resolve_wall_side(
    spatial_query: &SpatialQuery,
    origin: Vec2,
    tuning: &MovementTuning,
) -> WallSide {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);
    let distance = tuning.wall_check_distance + SIDE_PROBE_SLACK;

    match spatial_query.cast_ray(origin, Dir2::X, distance, true, &wall_filter) {
        Some(_) => WallSide::Right,
        None => WallSide::Left,
    }
}
