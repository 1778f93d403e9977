//! Pointer input: a press (touch began / left click) fires, a horizontal drag moves
//! the ship. Touch and mouse are both read so desktop builds play the same way.
use std::collections::HashMap;

use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::components::{Player, SpriteExtent};
use crate::core::geometry::GameArea;
use crate::core::system::system_order::InputSet;
use crate::gameplay::spawning::FireBullet;

/// Horizontal drag distance in scene units for one pointer sample.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PlayerDragged {
    pub dx: f32,
}

pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerDragged>()
            .add_event::<TouchInput>()
            .add_systems(
                Update,
                (
                    fire_on_press,
                    collect_pointer_drags,
                    move_player.after(collect_pointer_drags),
                )
                    .in_set(InputSet),
            );
    }
}

/// Move by `dx`, then keep the ship fully inside the game area.
pub fn apply_drag(x: f32, dx: f32, area: &GameArea, half_width: f32) -> f32 {
    area.clamp_x(x + dx, half_width)
}

/// One bullet per frame in which any new press landed, however many fingers.
pub fn fire_on_press(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    touches: Option<Res<Touches>>,
    mut writer: EventWriter<FireBullet>,
) {
    let touched = touches.is_some_and(|t| t.iter_just_pressed().next().is_some());
    let clicked = buttons.is_some_and(|b| b.just_pressed(MouseButton::Left));
    if touched || clicked {
        writer.write(FireBullet);
    }
}

/// Fold touch events into screen-space `(previous, current)` pairs, one per move.
/// `last` keeps each live finger's latest position across frames; a finger that holds
/// still produces nothing.
pub fn track_touch_drags<'a>(
    events: impl IntoIterator<Item = &'a TouchInput>,
    last: &mut HashMap<u64, Vec2>,
) -> Vec<(Vec2, Vec2)> {
    let mut samples = Vec::new();
    for ev in events {
        match ev.phase {
            TouchPhase::Started => {
                last.insert(ev.id, ev.position);
            }
            TouchPhase::Moved => {
                if let Some(slot) = last.get_mut(&ev.id) {
                    let prev = std::mem::replace(slot, ev.position);
                    if prev != ev.position {
                        samples.push((prev, ev.position));
                    }
                }
            }
            TouchPhase::Ended | TouchPhase::Canceled => {
                last.remove(&ev.id);
            }
        }
    }
    samples
}

/// Horizontal world distance of each sample; samples that fail to map are dropped.
pub fn drag_deltas(
    samples: &[(Vec2, Vec2)],
    to_world: impl Fn(Vec2) -> Option<Vec2>,
) -> Vec<f32> {
    samples
        .iter()
        .filter_map(|&(prev, cur)| Some(to_world(cur)?.x - to_world(prev)?.x))
        .collect()
}

fn collect_pointer_drags(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    mut touch_events: EventReader<TouchInput>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut live_touches: Local<HashMap<u64, Vec2>>,
    mut last_cursor: Local<Option<Vec2>>,
    mut writer: EventWriter<PlayerDragged>,
) {
    let mut samples = track_touch_drags(touch_events.read(), &mut live_touches);

    let held = buttons.is_some_and(|b| b.pressed(MouseButton::Left));
    let cursor = windows.single().ok().and_then(|w| w.cursor_position());
    if held && live_touches.is_empty() {
        if let (Some(prev), Some(cur)) = (*last_cursor, cursor) {
            if prev != cur {
                samples.push((prev, cur));
            }
        }
    }
    *last_cursor = if held { cursor } else { None };

    if samples.is_empty() {
        return;
    }
    let Ok((camera, cam_tf)) = camera_q.single() else {
        return;
    };
    for dx in drag_deltas(&samples, |p| camera.viewport_to_world_2d(cam_tf, p).ok()) {
        writer.write(PlayerDragged { dx });
    }
}

/// Samples are applied one by one with a clamp after each, so a drag that overshoots
/// an edge does not bank distance for the way back.
pub fn move_player(
    mut events: EventReader<PlayerDragged>,
    area: Res<GameArea>,
    mut q_player: Query<(&mut Transform, &SpriteExtent), With<Player>>,
) {
    let Ok((mut tf, extent)) = q_player.single_mut() else {
        events.clear();
        return;
    };
    for ev in events.read() {
        tf.translation.x = apply_drag(tf.translation.x, ev.dx, &area, extent.half_width());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(id: u64, phase: TouchPhase, x: f32, y: f32) -> TouchInput {
        TouchInput {
            phase,
            position: Vec2::new(x, y),
            window: Entity::PLACEHOLDER,
            force: None,
            id,
        }
    }

    #[test]
    fn touch_moves_become_drag_pairs() {
        let mut live = HashMap::new();
        let began = [
            touch(1, TouchPhase::Started, 100.0, 500.0),
            touch(2, TouchPhase::Started, 300.0, 500.0),
        ];
        assert!(track_touch_drags(&began, &mut live).is_empty());
        assert_eq!(live.len(), 2);

        let moved = [
            touch(1, TouchPhase::Moved, 130.0, 480.0),
            touch(1, TouchPhase::Moved, 150.0, 470.0),
            touch(2, TouchPhase::Moved, 300.0, 500.0),
        ];
        assert_eq!(
            track_touch_drags(&moved, &mut live),
            vec![
                (Vec2::new(100.0, 500.0), Vec2::new(130.0, 480.0)),
                (Vec2::new(130.0, 480.0), Vec2::new(150.0, 470.0)),
            ]
        );

        // A finger held still across frames adds nothing.
        assert!(track_touch_drags(std::iter::empty(), &mut live).is_empty());

        let ended = [
            touch(1, TouchPhase::Ended, 150.0, 470.0),
            touch(2, TouchPhase::Canceled, 300.0, 500.0),
        ];
        assert!(track_touch_drags(&ended, &mut live).is_empty());
        assert!(live.is_empty());
        // Moves for a finger we never saw begin are ignored.
        let stray = [touch(3, TouchPhase::Moved, 1.0, 1.0)];
        assert!(track_touch_drags(&stray, &mut live).is_empty());
        assert!(live.is_empty());
    }

    #[test]
    fn drag_deltas_use_world_space() {
        // Screen y grows downward and one pixel spans two scene units.
        let to_world = |p: Vec2| Some(Vec2::new(p.x * 2.0, -p.y * 2.0));
        let samples = [
            (Vec2::new(10.0, 0.0), Vec2::new(25.0, 40.0)),
            (Vec2::new(25.0, 40.0), Vec2::new(20.0, 40.0)),
        ];
        assert_eq!(drag_deltas(&samples, to_world), vec![30.0, -10.0]);

        let off_viewport = |p: Vec2| (p.x >= 0.0).then_some(p);
        let samples = [
            (Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0)),
            (Vec2::new(5.0, 0.0), Vec2::new(8.0, 0.0)),
        ];
        assert_eq!(drag_deltas(&samples, off_viewport), vec![3.0]);
    }

    #[test]
    fn drag_moves_and_clamps() {
        let area = GameArea(Rect::new(192.0, 0.0, 1344.0, 2048.0));
        assert_eq!(apply_drag(768.0, 32.0, &area, 110.0), 800.0);
        assert_eq!(apply_drag(768.0, 1000.0, &area, 110.0), 1234.0);
        assert_eq!(apply_drag(768.0, -1000.0, &area, 110.0), 302.0);
        assert_eq!(apply_drag(1234.0, -10.0, &area, 110.0), 1224.0);
    }
}
