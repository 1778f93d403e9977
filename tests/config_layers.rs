use std::fs;

use solo_mission::core::config::GameConfig;

#[test]
fn shipped_config_loads_clean() {
    let (cfg, used, errors) = GameConfig::load_layered(["assets/config/game.ron"]);
    assert_eq!(used.len(), 1);
    assert!(errors.is_empty(), "{errors:?}");
    assert!(cfg.validate().is_empty(), "{:?}", cfg.validate());
    assert_eq!(cfg, GameConfig::default());
}

#[test]
fn later_layers_override_per_key() {
    let dir = tempfile::tempdir().expect("tempdir");
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &base,
        r#"(
            window: (title: "Base", width: 400.0),
            enemy: (spawn_interval: 2.0, scale: 0.5),
        )"#,
    )
    .expect("write base");
    fs::write(
        &local,
        r#"(
            enemy: (spawn_interval: 0.25),
            rng_seed: Some(77),
        )"#,
    )
    .expect("write local");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert_eq!(used.len(), 2);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(cfg.window.title, "Base");
    assert_eq!(cfg.window.width, 400.0);
    assert_eq!(cfg.window.height, 720.0);
    assert_eq!(cfg.enemy.spawn_interval, 0.25);
    assert_eq!(cfg.enemy.scale, 0.5);
    assert_eq!(cfg.enemy.travel_duration, 1.5);
    assert_eq!(cfg.rng_seed, Some(77));
}

#[test]
fn missing_and_broken_layers_are_reported_and_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let good = dir.path().join("good.ron");
    let broken = dir.path().join("broken.ron");
    let missing = dir.path().join("missing.ron");
    fs::write(&good, "(bullet: (travel_duration: 0.5))").expect("write good");
    fs::write(&broken, "(bullet: (travel_duration: ").expect("write broken");

    let (cfg, used, errors) = GameConfig::load_layered([&good, &broken, &missing]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().any(|e| e.contains("parse error")));
    assert!(errors.iter().any(|e| e.contains("read error")));
    assert_eq!(cfg.bullet.travel_duration, 0.5);
}

#[test]
fn nothing_readable_falls_back_to_defaults() {
    let (cfg, used, errors) = GameConfig::load_layered(["does/not/exist.ron"]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(cfg, GameConfig::default());

    let (cfg, err) = GameConfig::load_or_default("does/not/exist.ron");
    assert!(err.is_some());
    assert_eq!(cfg, GameConfig::default());
}
