//! Debug diagnostics, active while
//! [`DebugMode`](crate::resources::debugmode::DebugMode) is present.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::Actor;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::possession::PossessionToken;
use crate::resources::debugmode::DebugMode;

/// Log, per actor, whether it currently overlaps the ball.
pub fn debug_report(
    debug_mode: Option<Res<DebugMode>>,
    actors: Query<(Entity, &MapPosition, &BoxCollider), With<Actor>>,
    balls: Query<(&MapPosition, &BoxCollider, &PossessionToken)>,
) {
    if debug_mode.is_none() {
        return;
    }
    for (ball_position, ball_collider, token) in balls.iter() {
        for (actor, position, collider) in actors.iter() {
            let overlaps = collider.overlaps(position.pos, ball_collider, ball_position.pos);
            debug!(
                "Player {:?} at {:?} overlaps ball: {} (owner: {:?})",
                actor,
                position.pos,
                overlaps,
                token.owner()
            );
        }
    }
}
