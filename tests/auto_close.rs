use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use solo_mission::core::config::GameConfig;
use solo_mission::interaction::session::auto_close::AutoClosePlugin;

fn app_with_auto_close(secs: f32) -> App {
    let mut cfg = GameConfig::default();
    cfg.window.auto_close = secs;
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(cfg)
        .add_plugins(AutoClosePlugin);
    app
}

#[test]
fn exits_after_configured_time() {
    let mut app = app_with_auto_close(0.5);
    let mut exit = None;
    for _ in 0..20 {
        app.update();
        exit = app.should_exit();
        if exit.is_some() {
            break;
        }
    }
    assert_eq!(exit, Some(AppExit::Success));
}

#[test]
fn zero_disables_auto_close() {
    let mut app = app_with_auto_close(0.0);
    for _ in 0..20 {
        app.update();
    }
    assert_eq!(app.should_exit(), None);
}

#[test]
fn enabling_later_starts_the_countdown() {
    let mut app = app_with_auto_close(0.0);
    for _ in 0..5 {
        app.update();
    }
    app.world_mut()
        .resource_mut::<GameConfig>()
        .window
        .auto_close = 0.3;
    let mut frames = 0;
    while app.should_exit().is_none() && frames < 20 {
        app.update();
        frames += 1;
    }
    assert_eq!(app.should_exit(), Some(AppExit::Success));
    assert!(frames >= 3, "exited after {frames} frames");
}
