//! Leaves the game on its own after `window.autoClose` seconds so scripted and CI runs
//! terminate. A value of 0 (the default) keeps the game running.
use bevy::prelude::*;

use crate::core::config::GameConfig;

pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, count_down_auto_close.run_if(auto_close_enabled));
    }
}

fn auto_close_enabled(cfg: Res<GameConfig>) -> bool {
    cfg.window.auto_close > 0.0
}

/// The countdown starts on the first frame the option is enabled, so a hot-reloaded
/// `autoClose` is honoured too.
fn count_down_auto_close(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut countdown: Local<Option<Timer>>,
    mut exit: EventWriter<AppExit>,
) {
    let timer = countdown.get_or_insert_with(|| {
        info!(seconds = cfg.window.auto_close, "auto close armed");
        Timer::from_seconds(cfg.window.auto_close, TimerMode::Once)
    });
    if timer.tick(time.delta()).just_finished() {
        info!(
            elapsed = timer.elapsed_secs(),
            "auto close elapsed, requesting exit"
        );
        exit.write(AppExit::Success);
    }
}
