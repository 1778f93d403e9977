//! Load a layered game config the same way the game does and report the result.
//!
//! cargo run --bin config_check -- assets/config/game.ron assets/config/game.local.ron
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use solo_mission::core::config::GameConfig;
use solo_mission::core::geometry::GameArea;

#[derive(Parser, Debug)]
#[command(about = "Validate layered Solo Mission RON config files", version)]
struct Args {
    /// Config layers in merge order (later wins).
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Exit non-zero when any layer failed to load.
    #[arg(long)]
    strict: bool,
    /// Exit non-zero on validation warnings as well.
    #[arg(long)]
    deny_warnings: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (cfg, used, errors) = GameConfig::load_layered(&args.paths);
    if used.is_empty() {
        let first = args
            .paths
            .first()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        return Err(anyhow::anyhow!(errors.join("; "))).context(format!(
            "no readable config layers (first: {first})"
        ));
    }
    println!("layers: {}", used.join(", "));
    for e in &errors {
        println!("error: {e}");
    }

    let area = GameArea::from_scene(
        bevy::math::Vec2::new(cfg.scene.width, cfg.scene.height),
        cfg.scene.max_aspect_ratio,
    );
    println!(
        "scene {}x{} game area x {:.1}..{:.1} (width {:.1})",
        cfg.scene.width,
        cfg.scene.height,
        area.min_x(),
        area.max_x(),
        area.width()
    );
    println!(
        "enemy every {:.2}s, flight {:.2}s, scale {:.2}; bullet flight {:.2}s",
        cfg.enemy.spawn_interval,
        cfg.enemy.travel_duration,
        cfg.enemy.scale,
        cfg.bullet.travel_duration
    );
    match cfg.rng_seed {
        Some(seed) => println!("rng seed {seed}"),
        None => println!("rng seed from entropy"),
    }

    let warnings = cfg.validate();
    for w in &warnings {
        println!("warning: {w}");
    }
    if args.strict && !errors.is_empty() {
        bail!("{} layer(s) failed to load", errors.len());
    }
    if args.deny_warnings && !warnings.is_empty() {
        bail!("{} validation warning(s)", warnings.len());
    }
    Ok(())
}
