use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use solo_mission::core::config::{ConfigLoadReport, GameConfig};
#[cfg(not(target_arch = "wasm32"))]
use solo_mission::interaction::session::config_hot_reload::ConfigReloadSettings;
use solo_mission::GamePlugin;

#[derive(Parser, Debug)]
#[command(about = "Solo Mission: drag to steer, tap to fire", version)]
struct Cli {
    /// Extra RON config layers applied after the defaults (repeatable, later wins).
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Fixed seed for enemy spawn positions.
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds.
    #[arg(long)]
    auto_close: Option<f32>,
}

#[cfg(target_arch = "wasm32")]
fn load_config(_extra: &[PathBuf]) -> (GameConfig, ConfigLoadReport) {
    // Embed base config (no layered local override on wasm).
    const RAW: &str = include_str!("../assets/config/game.ron");
    match ron::from_str(RAW) {
        Ok(cfg) => (
            cfg,
            ConfigLoadReport {
                used: vec!["embedded game.ron".into()],
                ..default()
            },
        ),
        Err(e) => (
            GameConfig::default(),
            ConfigLoadReport {
                errors: vec![format!("embedded game.ron: parse error: {e}")],
                ..default()
            },
        ),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn config_paths(extra: &[PathBuf]) -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("assets/config/game.ron"),
        PathBuf::from("assets/config/game.local.ron"),
    ];
    paths.extend(extra.iter().cloned());
    paths
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config(extra: &[PathBuf]) -> (GameConfig, ConfigLoadReport) {
    let paths = config_paths(extra);
    let (cfg, used, errors) = GameConfig::load_layered(&paths);
    // The local override layer is optional.
    let errors = errors
        .into_iter()
        .filter(|e| !(e.contains("game.local.ron") && e.contains("read error")))
        .collect();
    (
        cfg,
        ConfigLoadReport {
            used,
            errors,
            warnings: Vec::new(),
        },
    )
}

fn main() -> AppExit {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let cli = Cli::parse();
    let (mut cfg, mut report) = load_config(&cli.config);
    if let Some(seed) = cli.seed {
        cfg.rng_seed = Some(seed);
    }
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    report.warnings = cfg.validate();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: cfg.window.title.clone(),
            resolution: (cfg.window.width, cfg.window.height).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::BLACK));

    #[cfg(not(target_arch = "wasm32"))]
    app.insert_resource(ConfigReloadSettings {
        paths: config_paths(&cli.config),
        ..default()
    });

    app.insert_resource(cfg)
        .insert_resource(report)
        .add_plugins(GamePlugin)
        .run()
}
