//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, tuning and
//! animation definitions.
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `debugmode` – presence toggles optional debug logs
//! - `gameconfig` – tuning values and the possession policy
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `worldbounds` – pitch rectangle bodies are kept inside
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod worldbounds;
pub mod worldtime;
