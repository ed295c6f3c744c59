//! Overlap detection between actors and the ball.
//!
//! [`collision_detector`] tests every actor collider against every ball
//! collider and writes a [`BallOverlap`] message per overlapping pair.
//! Messages for a ball are written in [`LineupSlot`] order, so when several
//! actors touch it in one tick the highest slot is notified last. Actors
//! without a slot come first, ordered by entity.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::lineupslot::LineupSlot;
use crate::components::mapposition::MapPosition;
use crate::events::collision::BallOverlap;

pub const PLAYER_GROUP: &str = "player";
pub const BALL_GROUP: &str = "ball";

pub fn collision_detector(
    query: Query<(
        Entity,
        &MapPosition,
        &BoxCollider,
        &Group,
        Option<&LineupSlot>,
    )>,
    mut writer: MessageWriter<BallOverlap>,
) {
    let mut pairs: Vec<(Option<LineupSlot>, BallOverlap)> = Vec::new();

    for [
        (entity_a, position_a, collider_a, group_a, slot_a),
        (entity_b, position_b, collider_b, group_b, slot_b),
    ] in query.iter_combinations()
    {
        let (slot, overlap) = match (group_a.name(), group_b.name()) {
            (PLAYER_GROUP, BALL_GROUP) => (
                slot_a.copied(),
                BallOverlap {
                    actor: entity_a,
                    ball: entity_b,
                },
            ),
            (BALL_GROUP, PLAYER_GROUP) => (
                slot_b.copied(),
                BallOverlap {
                    actor: entity_b,
                    ball: entity_a,
                },
            ),
            _ => continue,
        };
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            pairs.push((slot, overlap));
        }
    }

    pairs.sort_by_key(|(slot, o)| (o.ball, *slot, o.actor));
    writer.write_batch(pairs.into_iter().map(|(_, overlap)| overlap));
}

/// Advance the [`BallOverlap`] message buffers.
///
/// Bevy ECS' [`Messages`] API requires calling `update()` once per frame to
/// drop messages every reader has had a chance to see.
pub fn update_overlap_messages(mut messages: ResMut<Messages<BallOverlap>>) {
    messages.update();
}
