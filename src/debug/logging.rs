use bevy::prelude::*;

use crate::core::components::{Bullet, Enemy};
use crate::gameplay::spawning::SpawnCounters;

#[derive(Resource, Debug)]
pub struct DebugLogState {
    pub log_interval: f32,
    pub time_accum: f32,
}

impl Default for DebugLogState {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
        }
    }
}

pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugLogState>,
    counters: Option<Res<SpawnCounters>>,
    q_bullets: Query<(), With<Bullet>>,
    q_enemies: Query<(), With<Enemy>>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    let totals = counters.map(|c| *c).unwrap_or_default();
    info!(
        "SIM t={:.3}s bullets={} enemies={} fired_total={} spawned_total={}",
        time.elapsed_secs(),
        q_bullets.iter().count(),
        q_enemies.iter().count(),
        totals.bullets_fired,
        totals.enemies_spawned
    );
}
