use bevy::prelude::*;

use crate::core::components::{Background, LevelDirector, Player, SpriteExtent};
use crate::core::config::GameConfig;
use crate::core::geometry::{GameArea, SceneSize};
use crate::gameplay::actions::{ActionSequence, SceneCue, SpriteAction};
use crate::rendering::sprites::{
    load_game_assets, sprite_or_placeholder, GameAssets, BACKGROUND_COLOR, PLAYER_COLOR,
};

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, (init_scene_resources, load_game_assets))
            .add_systems(Startup, (setup_scene, start_new_level).chain());
    }
}

/// Derive scene size and game area from config. Scene geometry is fixed for the
/// lifetime of the app.
pub fn init_scene_resources(mut commands: Commands, cfg: Res<GameConfig>) {
    let size = Vec2::new(cfg.scene.width, cfg.scene.height);
    let area = GameArea::from_scene(size, cfg.scene.max_aspect_ratio);
    info!(
        scene_w = size.x,
        scene_h = size.y,
        area_min_x = area.min_x(),
        area_max_x = area.max_x(),
        "scene initialised"
    );
    commands.insert_resource(SceneSize(size));
    commands.insert_resource(area);
}

pub fn setup_scene(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    scene: Res<SceneSize>,
    assets: Res<GameAssets>,
) {
    commands.spawn((
        Name::new("Background"),
        Background,
        sprite_or_placeholder(&assets.background, BACKGROUND_COLOR, scene.0),
        Transform::from_translation(scene.center().extend(cfg.background.z)),
    ));

    let size = cfg.player.size.as_vec2() * cfg.player.scale;
    let start = Vec2::new(
        scene.width() / 2.0,
        scene.height() * cfg.player.start_y_fraction,
    );
    commands.spawn((
        Name::new("Player"),
        Player,
        SpriteExtent(size),
        sprite_or_placeholder(&assets.player, PLAYER_COLOR, size),
        Transform::from_translation(start.extend(cfg.player.z)),
    ));
}

pub fn level_director_sequence(spawn_interval: f32) -> ActionSequence {
    ActionSequence::repeat_forever(vec![
        SpriteAction::Cue(SceneCue::SpawnEnemy),
        SpriteAction::Wait(spawn_interval),
    ])
}

/// Start the enemy spawn loop. The first enemy is cued immediately, then one per
/// `enemy.spawn_interval` seconds.
pub fn start_new_level(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        Name::new("LevelDirector"),
        LevelDirector,
        level_director_sequence(cfg.enemy.spawn_interval),
    ));
    info!(interval = cfg.enemy.spawn_interval, "level started");
}
