use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use solo_mission::core::components::{LevelDirector, SpriteExtent};
use solo_mission::core::config::GameConfig;
use solo_mission::gameplay::actions::ActionSequence;
use solo_mission::gameplay::spawning::SpawnCounters;
use solo_mission::interaction::session::config_hot_reload::{
    ConfigHotReloadPlugin, ConfigReloadSettings,
};
use solo_mission::{GameCorePlugin, Player};

const BASE: &str = r#"(
    enemy: (spawn_interval: 1.0),
    rng_seed: Some(5),
)"#;

fn reload_app(path: &Path) -> App {
    let (cfg, used, errors) = GameConfig::load_layered([path]);
    assert_eq!(used.len(), 1, "{errors:?}");
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(cfg)
        .insert_resource(ConfigReloadSettings {
            paths: vec![path.to_path_buf()],
            interval_secs: 0.1,
        })
        .add_plugins((GameCorePlugin, ConfigHotReloadPlugin));
    // Let the watcher record the startup timestamps.
    for _ in 0..5 {
        app.update();
    }
    app
}

/// Rewrite a layer with a modification time clearly after the recorded one.
fn rewrite(path: &Path, contents: &str) {
    fs::write(path, contents).expect("rewrite layer");
    fs::File::options()
        .write(true)
        .open(path)
        .expect("open layer")
        .set_modified(SystemTime::now() + Duration::from_secs(60))
        .expect("bump mtime");
}

fn director_cycle(app: &mut App) -> f32 {
    app.world_mut()
        .query_filtered::<&ActionSequence, With<LevelDirector>>()
        .single(app.world())
        .expect("one director")
        .cycle_duration()
}

#[test]
fn edited_layer_is_applied_live_except_scene_and_seed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("game.ron");
    fs::write(&path, BASE).expect("write base");
    let mut app = reload_app(&path);
    assert!((director_cycle(&mut app) - 1.0).abs() < 1e-6);

    rewrite(
        &path,
        r#"(
            enemy: (spawn_interval: 10.0),
            player: (scale: 0.5),
            scene: (width: 800.0),
            rng_seed: Some(99),
        )"#,
    );
    let mut applied = false;
    for _ in 0..10 {
        app.update();
        if app.world().resource::<GameConfig>().enemy.spawn_interval == 10.0 {
            applied = true;
            break;
        }
    }
    assert!(applied, "edit was never picked up");

    let cfg = app.world().resource::<GameConfig>().clone();
    assert_eq!(cfg.scene.width, 1536.0);
    assert_eq!(cfg.rng_seed, Some(5));
    assert_eq!(cfg.player.scale, 0.5);
    assert!((director_cycle(&mut app) - 10.0).abs() < 1e-6);

    let extent = app
        .world_mut()
        .query_filtered::<&SpriteExtent, With<Player>>()
        .single(app.world())
        .expect("one player")
        .0;
    assert_eq!(extent, Vec2::new(110.0, 140.0));

    // The restarted spawn loop waits a full interval before the next enemy.
    let spawned = app.world().resource::<SpawnCounters>().enemies_spawned;
    for _ in 0..20 {
        app.update();
    }
    assert_eq!(
        app.world().resource::<SpawnCounters>().enemies_spawned,
        spawned
    );
}

#[test]
fn broken_edit_keeps_previous_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("game.ron");
    fs::write(&path, BASE).expect("write base");
    let mut app = reload_app(&path);
    let before = app.world().resource::<GameConfig>().clone();

    rewrite(&path, "(enemy: (spawn_interval: ");
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(*app.world().resource::<GameConfig>(), before);
    assert!((director_cycle(&mut app) - 1.0).abs() < 1e-6);
}

#[test]
fn untouched_files_do_not_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("game.ron");
    fs::write(&path, BASE).expect("write base");
    let mut app = reload_app(&path);

    // In-memory tweaks survive polling as long as no layer changes on disk.
    app.world_mut()
        .resource_mut::<GameConfig>()
        .enemy
        .spawn_interval = 3.0;
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(
        app.world().resource::<GameConfig>().enemy.spawn_interval,
        3.0
    );
}
