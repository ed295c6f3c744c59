//! kickoff library.
//!
//! Gameplay core of a top-down two-player soccer prototype: actors, ball
//! possession and the per-tick schedule, as ECS components, resources,
//! systems and events. Rendering and asset loading belong to the host.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod script;
pub mod systems;
