use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::geometry::SceneSize;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Aspect-fill view of the scene: the window shows at most `SceneSize` and crops the
/// longer axis, so the scene's bottom-left corner maps to world (0, 0).
fn setup_camera(mut commands: Commands, scene: Res<SceneSize>) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scaling_mode: ScalingMode::AutoMax {
                max_width: scene.width(),
                max_height: scene.height(),
            },
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_translation(scene.center().extend(0.0)),
    ));
}
