// This file is part of Solo Mission.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::log_config_report;
use crate::core::system::system_order::{ActionSet, InputSet, SpawnSet};
use crate::debug::DebugPlugin;
use crate::gameplay::actions::ActionsPlugin;
use crate::gameplay::scene::ScenePlugin;
use crate::gameplay::spawning::SpawningPlugin;
use crate::interaction::pointer::PointerInputPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::rendering::camera::CameraPlugin;

/// Gameplay without window / rendering concerns; usable under `MinimalPlugins`.
/// Expects a `GameConfig` resource to be inserted before startup.
pub struct GameCorePlugin;

impl Plugin for GameCorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (InputSet, ActionSet.after(InputSet), SpawnSet.after(ActionSet)),
        )
        .add_plugins((ScenePlugin, ActionsPlugin, SpawningPlugin, PointerInputPlugin));
    }
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            GameCorePlugin,
            CameraPlugin,
            DebugPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
        ))
        .add_systems(Startup, log_config_report);
    }
}
