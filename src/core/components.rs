use bevy::prelude::*;

/// The ship the player drags along the bottom of the scene.
#[derive(Component, Debug)]
pub struct Player;

#[derive(Component, Debug)]
pub struct Bullet;

#[derive(Component, Debug)]
pub struct Enemy;

#[derive(Component, Debug)]
pub struct Background;

/// Scene-level entity that owns the repeating enemy spawn sequence.
#[derive(Component, Debug)]
pub struct LevelDirector;

/// On-screen size after scale. Kept alongside the sprite so gameplay code does not
/// depend on image assets being loaded.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone, PartialEq)]
pub struct SpriteExtent(pub Vec2);

impl SpriteExtent {
    pub fn half_width(&self) -> f32 {
        self.0.x * 0.5
    }
}
