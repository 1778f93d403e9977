// Runtime config hot-reload (desktop only).
// Watches the layered RON files for modification timestamp changes and, when detected,
// re-loads the layered config. On success updates the `GameConfig` resource and applies
// immediate side-effects (window size/title, enemy spawn interval, player size). Scene
// geometry and the rng seed stay as they were at startup. Parse errors are logged and
// the prior config retained.

use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::components::{LevelDirector, Player, SpriteExtent};
use crate::core::config::GameConfig;
use crate::core::geometry::GameArea;
use crate::core::system::system_order::ActionSet;
use crate::gameplay::actions::ActionSequence;
use crate::gameplay::scene::level_director_sequence;

#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    /// Polling interval seconds.
    pub interval_secs: f32,
}

impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from("assets/config/game.local.ron"),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
    primed: bool,
}

impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
            primed: false,
        }
    }
}

pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        // Only meaningful on native (std::fs) targets.
        #[cfg(not(target_arch = "wasm32"))]
        {
            app.init_resource::<ConfigReloadSettings>()
                .init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config.before(ActionSet));
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    area: Option<Res<GameArea>>,
    mut windows: Query<&mut Window>,
    mut q_director: Query<&mut ActionSequence, With<LevelDirector>>,
    mut q_player: Query<(&mut Transform, &mut SpriteExtent, &mut Sprite), With<Player>>,
) {
    // Allow changing interval at runtime by adjusting timer duration.
    if (state.timer.duration().as_secs_f32() - settings.interval_secs).abs() > f32::EPSILON {
        state.timer.set_duration(std::time::Duration::from_secs_f32(
            settings.interval_secs.max(0.05),
        ));
    }
    if !state.timer.tick(time.delta()).just_finished() {
        return;
    }

    use std::fs;
    use std::time::UNIX_EPOCH;
    let mut dirty = false;
    for path in &settings.paths {
        if let Ok(mod_time) = fs::metadata(path).and_then(|m| m.modified()) {
            let entry = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
            if mod_time > *entry {
                *entry = mod_time;
                dirty = true;
            }
        }
    }
    // The first scan only records timestamps of the files loaded at startup.
    if !state.primed {
        state.primed = true;
        return;
    }
    if !dirty {
        return;
    }

    let (mut new_cfg, used, errors) = GameConfig::load_layered(settings.paths.iter());
    for e in errors.iter().filter(|e| !e.contains("read error")) {
        warn!("CONFIG HOT-RELOAD issue: {e}");
    }
    if used.is_empty() {
        return;
    }
    new_cfg.scene = cfg_res.scene.clone();
    new_cfg.rng_seed = cfg_res.rng_seed;
    for w in new_cfg.validate() {
        warn!("CONFIG HOT-RELOAD warning: {w}");
    }

    // Replace resource only if different (avoid spurious change events & work).
    if *cfg_res == new_cfg {
        return;
    }
    info!(files = ?used, "Config hot-reload applied");
    // Only keys that changed in the files touch the window, so a user resize survives
    // unrelated edits.
    if let Ok(mut window) = windows.single_mut() {
        let (old, new) = (&cfg_res.window, &new_cfg.window);
        if old.width != new.width || old.height != new.height {
            window.resolution.set(new.width, new.height);
        }
        if old.title != new.title {
            window.title = new.title.clone();
        }
    }
    if cfg_res.enemy.spawn_interval != new_cfg.enemy.spawn_interval {
        // Resume at the wait step; the cue at the head of the cycle would spawn an
        // extra enemy right away.
        let sequence = level_director_sequence(new_cfg.enemy.spawn_interval).starting_at(1);
        info!(
            interval = new_cfg.enemy.spawn_interval,
            cycle = sequence.cycle_duration(),
            "enemy spawn interval updated"
        );
        for mut seq in q_director.iter_mut() {
            *seq = sequence.clone();
        }
    }
    let (old_player, new_player) = (&cfg_res.player, &new_cfg.player);
    if old_player.size != new_player.size || old_player.scale != new_player.scale {
        let size = new_player.size.as_vec2() * new_player.scale;
        for (mut tf, mut extent, mut sprite) in q_player.iter_mut() {
            extent.0 = size;
            sprite.custom_size = Some(size);
            if let Some(area) = area.as_ref() {
                tf.translation.x = area.clamp_x(tf.translation.x, extent.half_width());
            }
        }
        info!(width = size.x, height = size.y, "player size updated");
    }
    *cfg_res = new_cfg;
}
