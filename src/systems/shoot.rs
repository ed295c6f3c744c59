//! Shooting.
//!
//! An actor whose shoot key was just pressed while holding a ball releases
//! it: the ball leaves along the actor's facing direction at the configured
//! shot speed, and the shooter is kept from grabbing it back for the regrab
//! cooldown.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::Actor;
use crate::components::inputcontrolled::InputControlled;
use crate::components::possession::PossessionToken;
use crate::components::rigidbody::RigidBody;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;

pub fn shoot_system(
    actors: Query<(Entity, &InputControlled, &Actor)>,
    mut balls: Query<(Entity, &mut PossessionToken, &mut RigidBody), Without<Actor>>,
    input_state: Res<InputState>,
    config: Res<GameConfig>,
) {
    for (actor_entity, controlled, actor) in actors.iter() {
        if !input_state.shoot(controlled.scheme).just_pressed {
            continue;
        }
        for (ball_entity, mut token, mut rigidbody) in balls.iter_mut() {
            if token.owner() != Some(actor_entity) {
                continue;
            }
            token.release_by_shot(actor_entity, config.regrab_cooldown);
            rigidbody.unfreeze();
            rigidbody.set_velocity(actor.direction() * config.shot_speed);
            debug!(
                "{:?} shot {:?} with velocity {:?}",
                actor_entity, ball_entity, rigidbody.velocity
            );
        }
    }
}
