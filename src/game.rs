//! Scene lifecycle for the two-player match.
//!
//! [`Game`] owns the ECS world and the per-tick schedule. The host calls
//! [`Game::create`] once, then [`Game::update`] every frame with the keys it
//! sampled, reads [`Game::snapshot`] to draw, and finally
//! [`Game::teardown`].
//!
//! One tick runs, in order: input sampling, actor steering, shooting,
//! physics, overlap detection, possession arbitration, ball follow,
//! animation, debug report.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::components::actor::Actor;
use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::group::Group;
use crate::components::inputcontrolled::{ControlScheme, InputControlled};
use crate::components::lineupslot::LineupSlot;
use crate::components::mapposition::MapPosition;
use crate::components::possession::PossessionToken;
use crate::components::rigidbody::RigidBody;
use crate::events::collision::BallOverlap;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationstore::AnimationStore;
use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputState, KeyboardSnapshot};
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;
use crate::systems::actorcontroller::actor_controller;
use crate::systems::animation::{animation, sheet_frame};
use crate::systems::collision::{
    BALL_GROUP, PLAYER_GROUP, collision_detector, update_overlap_messages,
};
use crate::systems::debug::debug_report;
use crate::systems::input::update_input_state;
use crate::systems::movement::movement;
use crate::systems::possession::{possession_arbitration, possession_follow};
use crate::systems::shoot::shoot_system;
use crate::systems::time::update_world_time;

/// Pitch tile size; kickoff spots are given in tiles.
const TILE: f32 = 64.0;

/// Where an actor starts and how it is driven.
struct ActorSpawn {
    position: Vec2,
    animation_set: u8,
    scheme: ControlScheme,
    /// Idle pose before the first move: (animation key, frame index).
    idle: (&'static str, usize),
}

fn kickoff_lineup() -> [ActorSpawn; 2] {
    [
        ActorSpawn {
            position: Vec2::new(16.0 * TILE, 7.0 * TILE),
            animation_set: 1,
            scheme: ControlScheme::Secondary,
            idle: ("walk_down1", 0),
        },
        ActorSpawn {
            position: Vec2::new(18.0 * TILE, 7.0 * TILE),
            animation_set: 2,
            scheme: ControlScheme::Main,
            idle: ("walk_left2", 1),
        },
    ]
}

fn ball_kickoff_spot() -> Vec2 {
    Vec2::new(16.0 * TILE - 10.0, 7.0 * TILE)
}

/// Build the per-tick schedule.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            actor_controller,
            shoot_system,
            movement,
            collision_detector,
            possession_arbitration,
            possession_follow,
            animation,
            debug_report,
            update_overlap_messages,
        )
            .chain(),
    );
    update
}

/// Spawn one actor from the lineup with tuning taken from `config`.
fn spawn_actor(
    world: &mut World,
    config: &GameConfig,
    slot: usize,
    spawn: &ActorSpawn,
) -> Entity {
    let (idle_key, idle_frame) = spawn.idle;
    let mut idle = Animation::new(idle_key);
    idle.frame_index = idle_frame;

    world
        .spawn((
            Group::new(PLAYER_GROUP),
            MapPosition::from_vec(spawn.position),
            RigidBody::new(),
            BoxCollider::centered(config.player_collider_width, config.player_collider_height),
            Actor::new(config.player_speed, config.player_height, config.juggle_distance)
                .with_animation_set(spawn.animation_set),
            idle,
            InputControlled::new(spawn.scheme),
            LineupSlot(slot),
        ))
        .id()
}

fn spawn_ball(world: &mut World, config: &GameConfig, position: Vec2) -> Entity {
    world
        .spawn((
            Group::new(BALL_GROUP),
            MapPosition::from_vec(position),
            RigidBody::with_physics(config.ball_friction, config.ball_bounce),
            BoxCollider::centered(config.ball_size, config.ball_size),
            PossessionToken::new(),
        ))
        .id()
}

/// Serializable view of one actor for the host to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub position: Vec2,
    pub facing: Vec2,
    pub velocity: Vec2,
    pub animation: String,
    pub playing: bool,
    pub sheet_frame: Option<usize>,
}

/// Serializable view of the ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSnapshot {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Index into [`SceneSnapshot::players`] of the holder.
    pub owner: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub frame: u64,
    pub elapsed: f32,
    pub debug: bool,
    pub players: Vec<ActorSnapshot>,
    pub ball: Option<BallSnapshot>,
}

/// A match scene: ECS world, schedule and the entities it spawned.
pub struct Game {
    world: World,
    update: Schedule,
    players: Vec<Entity>,
    ball: Option<Entity>,
}

impl Game {
    /// Build the world and its resources. Nothing is spawned until
    /// [`Game::create`].
    pub fn new(config: GameConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(WorldBounds::new(config.world_width, config.world_height));
        world.insert_resource(InputState::default());
        world.insert_resource(KeyboardSnapshot::default());
        world.insert_resource(AnimationStore::new());
        world.insert_resource(config);
        world.init_resource::<Messages<BallOverlap>>();
        world.add_observer(switch_debug_observer);
        world.flush();

        Self {
            world,
            update: build_schedule(),
            players: Vec::new(),
            ball: None,
        }
    }

    /// Register animations and spawn the two actors and the ball.
    ///
    /// Calling it on a live scene tears the old one down first.
    pub fn create(&mut self) {
        if !self.players.is_empty() || self.ball.is_some() {
            warn!("Game::create called on a live scene, tearing it down first");
            self.teardown();
        }

        let config = self.world.resource::<GameConfig>().clone();
        self.world
            .resource_mut::<AnimationStore>()
            .register_walk_cycles(config.animation_fps);

        for (slot, spawn) in kickoff_lineup().iter().enumerate() {
            let entity = spawn_actor(&mut self.world, &config, slot, spawn);
            self.players.push(entity);
        }
        self.ball = Some(spawn_ball(&mut self.world, &config, ball_kickoff_spot()));

        info!(
            "Scene created: {} players, ball at {:?}, policy {}",
            self.players.len(),
            ball_kickoff_spot(),
            config.possession_policy
        );
    }

    /// Run one tick with the keys held this frame.
    pub fn update(&mut self, dt: f32, keyboard: &KeyboardSnapshot) {
        *self.world.resource_mut::<KeyboardSnapshot>() = keyboard.clone();
        update_world_time(&mut self.world, dt);
        self.update.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Despawn everything [`Game::create`] spawned.
    pub fn teardown(&mut self) {
        for entity in self.players.drain(..).chain(self.ball.take()) {
            if !self.world.despawn(entity) {
                warn!("{:?} was already despawned", entity);
            }
        }
        self.world.resource_mut::<Messages<BallOverlap>>().clear();
        info!("Scene torn down");
    }

    /// Queue an overlap reported by an outside collision source. It is
    /// arbitrated with the detector's own messages on the next tick.
    pub fn notify_overlap(&mut self, actor: Entity, ball: Entity) {
        self.world
            .resource_mut::<Messages<BallOverlap>>()
            .write(BallOverlap { actor, ball });
    }

    pub fn set_debug(&mut self, enabled: bool) {
        if enabled {
            self.world.insert_resource(DebugMode {});
        } else {
            self.world.remove_resource::<DebugMode>();
        }
    }

    pub fn players(&self) -> &[Entity] {
        &self.players
    }

    pub fn ball(&self) -> Option<Entity> {
        self.ball
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        let time = self.world.resource::<WorldTime>();
        let store = self.world.resource::<AnimationStore>();

        let players = self
            .players
            .iter()
            .filter_map(|&entity| {
                let entity_ref = self.world.get_entity(entity).ok()?;
                let actor = entity_ref.get::<Actor>()?;
                let position = entity_ref.get::<MapPosition>()?;
                let rigidbody = entity_ref.get::<RigidBody>()?;
                let anim = entity_ref.get::<Animation>()?;
                Some(ActorSnapshot {
                    position: position.pos,
                    facing: actor.facing,
                    velocity: rigidbody.velocity,
                    animation: anim.animation_key.clone(),
                    playing: anim.playing,
                    sheet_frame: sheet_frame(anim, store),
                })
            })
            .collect();

        let ball = self.ball.and_then(|entity| {
            let entity_ref = self.world.get_entity(entity).ok()?;
            let position = entity_ref.get::<MapPosition>()?;
            let rigidbody = entity_ref.get::<RigidBody>()?;
            let token = entity_ref.get::<PossessionToken>()?;
            Some(BallSnapshot {
                position: position.pos,
                velocity: rigidbody.velocity,
                owner: token
                    .owner()
                    .and_then(|owner| self.players.iter().position(|&p| p == owner)),
            })
        });

        SceneSnapshot {
            frame: time.frame_count,
            elapsed: time.elapsed,
            debug: self.world.contains_resource::<DebugMode>(),
            players,
            ball,
        }
    }
}
