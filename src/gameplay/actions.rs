//! Declarative per-entity animation primitives (move, wait, sound, cue, remove, repeat)
//! and the runner that advances them every frame.
//!
//! A sequence owns its playback state so the stepping logic is a plain method
//! ([`ActionSequence::advance`]); the ECS system only applies the outcome.
use bevy::prelude::*;

use crate::core::geometry::lerp_unit;
use crate::core::system::system_order::ActionSet;

/// Scene-level notifications emitted from a running sequence.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneCue {
    SpawnEnemy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SpriteAction {
    /// Linear move from the position held when the step starts.
    MoveTo { target: Vec2, duration: f32 },
    /// Like `MoveTo` but only the y coordinate changes.
    MoveToY { y: f32, duration: f32 },
    Wait(f32),
    /// Fire-and-forget; the sequence continues without waiting for playback.
    PlaySound(Handle<AudioSource>),
    Cue(SceneCue),
    /// Despawn the entity running the sequence.
    Remove,
}

impl SpriteAction {
    fn duration(&self) -> f32 {
        match self {
            SpriteAction::MoveTo { duration, .. }
            | SpriteAction::MoveToY { duration, .. }
            | SpriteAction::Wait(duration) => *duration,
            SpriteAction::PlaySound(_) | SpriteAction::Cue(_) | SpriteAction::Remove => 0.0,
        }
    }
}

/// Side effects produced by one [`ActionSequence::advance`] call.
#[derive(Debug, Default, PartialEq)]
pub struct ActionOutcome {
    pub sounds: Vec<Handle<AudioSource>>,
    pub cues: Vec<SceneCue>,
    pub removed: bool,
    pub finished: bool,
}

#[derive(Component, Debug, Clone)]
pub struct ActionSequence {
    steps: Vec<SpriteAction>,
    repeat_forever: bool,
    cursor: usize,
    /// Seconds spent in the current timed step.
    elapsed: f32,
    /// Position captured when the current move step began.
    origin: Option<Vec2>,
}

impl ActionSequence {
    pub fn sequence(steps: Vec<SpriteAction>) -> Self {
        Self {
            steps,
            repeat_forever: false,
            cursor: 0,
            elapsed: 0.0,
            origin: None,
        }
    }

    pub fn repeat_forever(steps: Vec<SpriteAction>) -> Self {
        Self {
            repeat_forever: true,
            ..Self::sequence(steps)
        }
    }

    /// Begin playback at `step` instead of the first step (clamped to the length).
    pub fn starting_at(mut self, step: usize) -> Self {
        self.cursor = step.min(self.steps.len());
        self
    }

    pub fn is_finished(&self) -> bool {
        !self.repeat_forever && self.cursor >= self.steps.len()
    }

    /// Total duration of one pass through the steps.
    pub fn cycle_duration(&self) -> f32 {
        self.steps.iter().map(|s| s.duration().max(0.0)).sum()
    }

    fn complete_step(&mut self) {
        self.cursor += 1;
        self.elapsed = 0.0;
        self.origin = None;
    }

    /// Consume `dt` seconds across as many steps as it covers, updating `position` for
    /// move steps. Leftover time from a finished timed step carries into the next one.
    /// A repeating sequence whose full cycle takes no time runs at most one cycle per call.
    pub fn advance(&mut self, dt: f32, position: &mut Vec2) -> ActionOutcome {
        let mut out = ActionOutcome::default();
        let mut remaining = dt.max(0.0);
        let mut idle_steps = 0usize;
        loop {
            if self.cursor >= self.steps.len() {
                if self.repeat_forever && !self.steps.is_empty() {
                    self.cursor = 0;
                } else {
                    out.finished = true;
                    return out;
                }
            }
            if idle_steps >= self.steps.len() {
                return out;
            }
            match &self.steps[self.cursor] {
                SpriteAction::PlaySound(handle) => {
                    out.sounds.push(handle.clone());
                    self.complete_step();
                    idle_steps += 1;
                }
                SpriteAction::Cue(cue) => {
                    out.cues.push(*cue);
                    self.complete_step();
                    idle_steps += 1;
                }
                SpriteAction::Remove => {
                    self.cursor = self.steps.len();
                    self.repeat_forever = false;
                    out.removed = true;
                    out.finished = true;
                    return out;
                }
                SpriteAction::Wait(duration) => {
                    let duration = *duration;
                    let need = duration - self.elapsed;
                    if remaining < need {
                        self.elapsed += remaining;
                        return out;
                    }
                    remaining -= need.max(0.0);
                    self.complete_step();
                    idle_steps = if duration > 0.0 { 0 } else { idle_steps + 1 };
                }
                SpriteAction::MoveTo { target, duration } => {
                    let (target, duration) = (*target, *duration);
                    let origin = *self.origin.get_or_insert(*position);
                    let need = duration - self.elapsed;
                    if remaining < need {
                        self.elapsed += remaining;
                        *position = origin.lerp(target, self.elapsed / duration);
                        return out;
                    }
                    remaining -= need.max(0.0);
                    *position = target;
                    self.complete_step();
                    idle_steps = if duration > 0.0 { 0 } else { idle_steps + 1 };
                }
                SpriteAction::MoveToY { y, duration } => {
                    let (y, duration) = (*y, *duration);
                    let origin = *self.origin.get_or_insert(*position);
                    let need = duration - self.elapsed;
                    if remaining < need {
                        self.elapsed += remaining;
                        position.y = lerp_unit(self.elapsed / duration, origin.y, y);
                        return out;
                    }
                    remaining -= need.max(0.0);
                    position.y = y;
                    self.complete_step();
                    idle_steps = if duration > 0.0 { 0 } else { idle_steps + 1 };
                }
            }
        }
    }
}

pub struct ActionsPlugin;

impl Plugin for ActionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SceneCue>()
            .add_systems(Update, run_action_sequences.in_set(ActionSet));
    }
}

pub fn run_action_sequences(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut ActionSequence, Option<&mut Transform>)>,
    mut cues: EventWriter<SceneCue>,
) {
    let dt = time.delta_secs();
    for (entity, mut seq, tf) in &mut q {
        let mut pos = tf
            .as_ref()
            .map(|t| t.translation.truncate())
            .unwrap_or_default();
        let outcome = seq.advance(dt, &mut pos);
        if let Some(mut tf) = tf {
            if tf.translation.truncate() != pos {
                tf.translation.x = pos.x;
                tf.translation.y = pos.y;
            }
        }
        for handle in outcome.sounds {
            commands.spawn((AudioPlayer::new(handle), PlaybackSettings::DESPAWN));
        }
        for cue in outcome.cues {
            cues.write(cue);
        }
        if outcome.removed {
            commands.entity(entity).despawn();
        } else if outcome.finished {
            commands.entity(entity).remove::<ActionSequence>();
        }
    }
}
