//! Game configuration resource.
//!
//! Manages tuning values loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [player]
//! speed = 300
//! height = 96
//! juggle_distance = 30
//! collider_width = 42
//! collider_height = 81
//!
//! [ball]
//! size = 30
//! friction = 1.0
//! bounce = 0.5
//! shot_speed = 600
//! regrab_cooldown = 0.3
//!
//! [world]
//! width = 2048
//! height = 1024
//!
//! [animation]
//! fps = 8
//!
//! [possession]
//! policy = sticky
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};

/// Default safe values for startup
const DEFAULT_PLAYER_SPEED: f32 = 300.0;
const DEFAULT_PLAYER_HEIGHT: f32 = 96.0;
const DEFAULT_JUGGLE_DISTANCE: f32 = 30.0;
const DEFAULT_PLAYER_COLLIDER_WIDTH: f32 = 42.0;
const DEFAULT_PLAYER_COLLIDER_HEIGHT: f32 = 81.0;
const DEFAULT_BALL_SIZE: f32 = 30.0;
const DEFAULT_BALL_FRICTION: f32 = 1.0;
const DEFAULT_BALL_BOUNCE: f32 = 0.5;
const DEFAULT_SHOT_SPEED: f32 = 600.0;
const DEFAULT_REGRAB_COOLDOWN: f32 = 0.3;
const DEFAULT_WORLD_WIDTH: f32 = 2048.0;
const DEFAULT_WORLD_HEIGHT: f32 = 1024.0;
const DEFAULT_ANIMATION_FPS: f32 = 8.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// How overlap notifications decide who holds the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PossessionPolicy {
    /// The last actor to overlap the ball takes it. Separation never releases it.
    #[default]
    Sticky,
    /// Like `Sticky`, but the holder loses the ball on a tick it does not overlap it.
    ReleaseOnSeparation,
    /// The first overlap locks possession until the ball is shot away.
    FirstTouch,
}

impl FromStr for PossessionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sticky" => Ok(PossessionPolicy::Sticky),
            "release_on_separation" => Ok(PossessionPolicy::ReleaseOnSeparation),
            "first_touch" => Ok(PossessionPolicy::FirstTouch),
            other => Err(format!("Unknown possession policy '{}'", other)),
        }
    }
}

impl fmt::Display for PossessionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PossessionPolicy::Sticky => "sticky",
            PossessionPolicy::ReleaseOnSeparation => "release_on_separation",
            PossessionPolicy::FirstTouch => "first_touch",
        };
        f.write_str(name)
    }
}

/// Game configuration resource.
///
/// Stores player, ball and pitch tuning. Values are passed into component
/// constructors at scene creation rather than read as globals.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Actor speed in world units per second.
    pub player_speed: f32,
    /// Actor visual height.
    pub player_height: f32,
    /// Distance ahead of the feet where a held ball sits.
    pub juggle_distance: f32,
    pub player_collider_width: f32,
    pub player_collider_height: f32,
    /// Ball collider edge length.
    pub ball_size: f32,
    pub ball_friction: f32,
    pub ball_bounce: f32,
    /// Ball speed right after a shot.
    pub shot_speed: f32,
    /// Seconds before a shooter may take the ball back.
    pub regrab_cooldown: f32,
    pub world_width: f32,
    pub world_height: f32,
    /// Walk cycle playback speed.
    pub animation_fps: f32,
    pub possession_policy: PossessionPolicy,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            player_speed: DEFAULT_PLAYER_SPEED,
            player_height: DEFAULT_PLAYER_HEIGHT,
            juggle_distance: DEFAULT_JUGGLE_DISTANCE,
            player_collider_width: DEFAULT_PLAYER_COLLIDER_WIDTH,
            player_collider_height: DEFAULT_PLAYER_COLLIDER_HEIGHT,
            ball_size: DEFAULT_BALL_SIZE,
            ball_friction: DEFAULT_BALL_FRICTION,
            ball_bounce: DEFAULT_BALL_BOUNCE,
            shot_speed: DEFAULT_SHOT_SPEED,
            regrab_cooldown: DEFAULT_REGRAB_COOLDOWN,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            animation_fps: DEFAULT_ANIMATION_FPS,
            possession_policy: PossessionPolicy::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config)
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config)
    }

    fn apply(&mut self, config: &Ini) -> Result<(), String> {
        let float = |section: &str, key: &str, target: &mut f32| -> Result<(), String> {
            let value = config
                .getfloat(section, key)
                .map_err(|e| format!("[{}] {}: {}", section, key, e))?;
            if let Some(value) = value {
                *target = value as f32;
            }
            Ok(())
        };

        // [player] section
        float("player", "speed", &mut self.player_speed)?;
        float("player", "height", &mut self.player_height)?;
        float("player", "juggle_distance", &mut self.juggle_distance)?;
        float("player", "collider_width", &mut self.player_collider_width)?;
        float("player", "collider_height", &mut self.player_collider_height)?;

        // [ball] section
        float("ball", "size", &mut self.ball_size)?;
        float("ball", "friction", &mut self.ball_friction)?;
        float("ball", "bounce", &mut self.ball_bounce)?;
        float("ball", "shot_speed", &mut self.shot_speed)?;
        float("ball", "regrab_cooldown", &mut self.regrab_cooldown)?;

        // [world] section
        float("world", "width", &mut self.world_width)?;
        float("world", "height", &mut self.world_height)?;

        // [animation] section
        float("animation", "fps", &mut self.animation_fps)?;

        // [possession] section
        if let Some(policy) = config.get("possession", "policy") {
            self.possession_policy = policy.parse()?;
        }

        if !(0.0..=1.0).contains(&self.ball_bounce) {
            warn!("ball bounce {} outside 0..=1, clamping", self.ball_bounce);
            self.ball_bounce = self.ball_bounce.clamp(0.0, 1.0);
        }
        if self.animation_fps <= 0.0 {
            return Err(format!(
                "[animation] fps must be positive, got {}",
                self.animation_fps
            ));
        }

        info!(
            "Loaded config: speed={}, juggle={}, shot_speed={}, world={}x{}, policy={}",
            self.player_speed,
            self.juggle_distance,
            self.shot_speed,
            self.world_width,
            self.world_height,
            self.possession_policy
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();
        let mut set = |section: &str, key: &str, value: String| {
            config.set(section, key, Some(value));
        };

        set("player", "speed", self.player_speed.to_string());
        set("player", "height", self.player_height.to_string());
        set("player", "juggle_distance", self.juggle_distance.to_string());
        set("player", "collider_width", self.player_collider_width.to_string());
        set("player", "collider_height", self.player_collider_height.to_string());
        set("ball", "size", self.ball_size.to_string());
        set("ball", "friction", self.ball_friction.to_string());
        set("ball", "bounce", self.ball_bounce.to_string());
        set("ball", "shot_speed", self.shot_speed.to_string());
        set("ball", "regrab_cooldown", self.regrab_cooldown.to_string());
        set("world", "width", self.world_width.to_string());
        set("world", "height", self.world_height.to_string());
        set("animation", "fps", self.animation_fps.to_string());
        set("possession", "policy", self.possession_policy.to_string());

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
