//! Input-to-actor controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! steers each [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! actor: the resulting velocity goes to its [`RigidBody`] and the walk
//! cycle (or stop) to its [`Animation`].
use bevy_ecs::prelude::*;

use crate::components::actor::Actor;
use crate::components::animation::Animation;
use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Issue this tick's velocity and animation for every controlled actor.
pub fn actor_controller(
    mut query: Query<(&InputControlled, &mut Actor, &mut RigidBody, &mut Animation)>,
    input_state: Res<InputState>,
) {
    for (controlled, mut actor, mut rigidbody, mut animation) in query.iter_mut() {
        let command = actor.steer(input_state.direction(controlled.scheme));
        rigidbody.set_velocity(command.velocity);
        match command.animation.walk_key(actor.animation_set) {
            Some(key) => animation.play(&key),
            None => animation.stop(),
        }
    }
}
