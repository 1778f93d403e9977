use bevy::prelude::*;

use crate::core::config::GameConfig;

pub const BACKGROUND_COLOR: Color = Color::srgb(0.02, 0.02, 0.08);
pub const PLAYER_COLOR: Color = Color::srgb(0.25, 0.75, 1.0);
pub const BULLET_COLOR: Color = Color::srgb(1.0, 0.9, 0.3);
pub const ENEMY_COLOR: Color = Color::srgb(0.95, 0.3, 0.25);

/// Handles for configured image / sound assets. Unset entries fall back to flat
/// placeholders (images) or silence (sound).
#[derive(Resource, Debug, Default, Clone)]
pub struct GameAssets {
    pub background: Option<Handle<Image>>,
    pub player: Option<Handle<Image>>,
    pub bullet: Option<Handle<Image>>,
    pub enemy: Option<Handle<Image>>,
    pub bullet_sound: Option<Handle<AudioSource>>,
}

/// Loading once up front keeps the first shot free of a disk hitch.
pub fn load_game_assets(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    asset_server: Option<Res<AssetServer>>,
) {
    let Some(server) = asset_server else {
        commands.insert_resource(GameAssets::default());
        return;
    };
    let a = &cfg.assets;
    let assets = GameAssets {
        background: a.background.as_ref().map(|p| server.load(p.clone())),
        player: a.player.as_ref().map(|p| server.load(p.clone())),
        bullet: a.bullet.as_ref().map(|p| server.load(p.clone())),
        enemy: a.enemy.as_ref().map(|p| server.load(p.clone())),
        bullet_sound: a.bullet_sound.as_ref().map(|p| server.load(p.clone())),
    };
    info!(
        images = [&assets.background, &assets.player, &assets.bullet, &assets.enemy]
            .iter()
            .filter(|h| h.is_some())
            .count(),
        sound = assets.bullet_sound.is_some(),
        "game assets requested"
    );
    commands.insert_resource(assets);
}

/// Sprite drawn at `size`, using the image when one is configured.
pub fn sprite_or_placeholder(image: &Option<Handle<Image>>, color: Color, size: Vec2) -> Sprite {
    match image {
        Some(handle) => Sprite {
            image: handle.clone(),
            custom_size: Some(size),
            ..default()
        },
        None => Sprite::from_color(color, size),
    }
}
