//! kickoff main entry point.
//!
//! Runs the two-player soccer scene headless: the keyboard is replayed from
//! a JSON input script, and the final scene state is printed as JSON.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --script demos/dribble_and_shoot.json
//! RUST_LOG=debug cargo run -- --script demos/dribble_and_shoot.json --debug
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use kickoff::game::Game;
use kickoff::resources::gameconfig::GameConfig;
use kickoff::resources::input::KeyboardSnapshot;
use kickoff::script::InputScript;

/// Headless two-player soccer scene.
#[derive(Parser)]
#[command(version, about = "Replays scripted input through the soccer scene and prints the result")]
struct Cli {
    /// INI file with tuning values. Defaults to ./config.ini if present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON input script to replay.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Idle frames to run after the script.
    #[arg(long, default_value_t = 0)]
    frames: u32,

    /// Seconds per frame.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Start with debug diagnostics enabled.
    #[arg(long)]
    debug: bool,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<GameConfig, String> {
    match &cli.config {
        Some(path) => {
            let mut config = GameConfig::with_path(path);
            config.load_from_file()?;
            Ok(config)
        }
        None => {
            let mut config = GameConfig::new();
            if let Err(e) = config.load_from_file() {
                info!("Using default config: {}", e);
            }
            Ok(config)
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;

    if let Some(path) = &cli.write_config {
        let mut out = config.clone();
        out.config_path = path.clone();
        return out.save_to_file();
    }

    let script = match &cli.script {
        Some(path) => InputScript::load(path)?,
        None => InputScript::default(),
    };

    let mut game = Game::new(config);
    game.set_debug(cli.debug);
    game.create();

    info!(
        "Running {} scripted + {} idle frames at dt={}",
        script.total_frames(),
        cli.frames,
        cli.dt
    );
    for keyboard in script.frames() {
        game.update(cli.dt, &keyboard);
    }
    let idle = KeyboardSnapshot::new();
    for _ in 0..cli.frames {
        game.update(cli.dt, &idle);
    }

    let snapshot = game.snapshot();
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| format!("Failed to serialize snapshot: {}", e))?;
    println!("{}", json);

    game.teardown();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
