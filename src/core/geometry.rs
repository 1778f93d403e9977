//! Scene-space geometry helpers. Pure functions so they are testable without an `App`.
use bevy::prelude::*;
use rand::Rng;

/// Logical scene size (bottom-left origin).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SceneSize(pub Vec2);

impl SceneSize {
    pub fn width(&self) -> f32 {
        self.0.x
    }
    pub fn height(&self) -> f32 {
        self.0.y
    }
    pub fn center(&self) -> Vec2 {
        self.0 * 0.5
    }
}

/// Horizontally centered strip of the scene that stays visible on every screen up to
/// the configured maximum aspect ratio. Enemies spawn and the player moves inside it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct GameArea(pub Rect);

impl GameArea {
    pub fn from_scene(size: Vec2, max_aspect_ratio: f32) -> Self {
        let playable_width = size.y / max_aspect_ratio;
        let margin = (size.x - playable_width) / 2.0;
        Self(Rect::new(margin, 0.0, margin + playable_width, size.y))
    }

    pub fn min_x(&self) -> f32 {
        self.0.min.x
    }
    pub fn max_x(&self) -> f32 {
        self.0.max.x
    }
    pub fn width(&self) -> f32 {
        self.0.width()
    }
    pub fn height(&self) -> f32 {
        self.0.height()
    }

    /// Keep a sprite of the given half width fully inside the area. The right edge is
    /// applied first, so an oversized sprite ends up pinned to the left edge.
    pub fn clamp_x(&self, x: f32, half_width: f32) -> f32 {
        let mut x = x;
        if x > self.max_x() - half_width {
            x = self.max_x() - half_width;
        }
        if x < self.min_x() + half_width {
            x = self.min_x() + half_width;
        }
        x
    }
}

/// Map `t` in [0, 1] onto [min, max].
pub fn lerp_unit(t: f32, min: f32, max: f32) -> f32 {
    t * (max - min) + min
}

pub fn random_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    lerp_unit(rng.gen::<f32>(), min, max)
}

/// Rotation (radians, counter-clockwise from +X) that faces from `start` toward `end`.
pub fn heading_angle(start: Vec2, end: Vec2) -> f32 {
    let d = end - start;
    d.y.atan2(d.x)
}
