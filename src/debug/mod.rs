//! Debug module: feature gated entity-count logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod logging;

#[cfg(feature = "debug")]
pub use logging::DebugLogState;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, app: &mut bevy::prelude::App) {
        use bevy::prelude::*;
        app.init_resource::<DebugLogState>()
            .add_systems(Update, logging::debug_logging_system);
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
