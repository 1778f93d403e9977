use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 540.0,
            height: 720.0,
            title: "Solo Mission".into(),
            auto_close: 0.0,
        }
    }
}

/// Logical scene dimensions. All gameplay coordinates live in this space with the
/// origin at the bottom-left corner.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub width: f32,
    pub height: f32,
    /// Widest height:width ratio the playable strip must stay visible on.
    pub max_aspect_ratio: f32,
}
impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 1536.0,
            height: 2048.0,
            max_aspect_ratio: 16.0 / 9.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SpriteSize {
    pub width: f32,
    pub height: f32,
}
impl SpriteSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
impl Default for SpriteSize {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Sprite size at scale 1.0.
    pub size: SpriteSize,
    pub scale: f32,
    /// Spawn height as a fraction of the scene height.
    pub start_y_fraction: f32,
    pub z: f32,
}
impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: SpriteSize::new(220.0, 280.0),
            scale: 1.0,
            start_y_fraction: 0.2,
            z: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BulletConfig {
    pub size: SpriteSize,
    pub scale: f32,
    /// Seconds to travel from the ship to just past the top edge.
    pub travel_duration: f32,
    pub z: f32,
}
impl Default for BulletConfig {
    fn default() -> Self {
        Self {
            size: SpriteSize::new(40.0, 120.0),
            scale: 1.0,
            travel_duration: 1.0,
            z: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EnemyConfig {
    pub size: SpriteSize,
    pub scale: f32,
    /// Seconds between spawns. The first enemy appears immediately.
    pub spawn_interval: f32,
    pub travel_duration: f32,
    /// Spawn height as a fraction of the scene height (> 1.0 starts off the top).
    pub start_y_fraction: f32,
    /// Exit height as a fraction of the scene height (< 0.0 ends off the bottom).
    pub end_y_fraction: f32,
    pub z: f32,
}
impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            size: SpriteSize::new(400.0, 300.0),
            scale: 0.35,
            spawn_interval: 1.0,
            travel_duration: 1.5,
            start_y_fraction: 1.2,
            end_y_fraction: -0.2,
            z: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
    pub z: f32,
}
impl Default for BackgroundConfig {
    fn default() -> Self {
        Self { z: 0.0 }
    }
}

/// Asset paths relative to `assets/`. `None` renders a flat placeholder (images) or
/// stays silent (sound).
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    pub background: Option<String>,
    pub player: Option<String>,
    pub bullet: Option<String>,
    pub enemy: Option<String>,
    pub bullet_sound: Option<String>,
}

#[derive(Debug, Deserialize, Resource, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub player: PlayerConfig,
    pub bullet: BulletConfig,
    pub enemy: EnemyConfig,
    pub background: BackgroundConfig,
    pub assets: AssetConfig,
    /// Fixed seed for enemy spawn positions; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Merge every readable file in order (later keys win, maps merge recursively) and
    /// deserialize the result. Returns the config, the paths actually used and any
    /// per-file errors. Falls back to defaults when nothing usable was found.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged {
            Some(val) => match val.into_rust::<GameConfig>() {
                Ok(cfg) => (cfg, used, errors),
                Err(e) => {
                    errors.push(format!(
                        "failed to deserialize merged config; using defaults: {e}"
                    ));
                    (GameConfig::default(), used, errors)
                }
            },
            None => (GameConfig::default(), used, errors),
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.scene.width <= 0.0 || self.scene.height <= 0.0 {
            w.push(format!(
                "scene size {}x{} must be > 0",
                self.scene.width, self.scene.height
            ));
        }
        if self.scene.max_aspect_ratio <= 0.0 {
            w.push(format!(
                "scene.max_aspect_ratio {} must be > 0",
                self.scene.max_aspect_ratio
            ));
        } else if self.scene.height / self.scene.max_aspect_ratio > self.scene.width {
            w.push(format!(
                "scene.max_aspect_ratio {} yields a game area wider than the scene ({} > {})",
                self.scene.max_aspect_ratio,
                self.scene.height / self.scene.max_aspect_ratio,
                self.scene.width
            ));
        }
        fn check_size(w: &mut Vec<String>, label: &str, size: &SpriteSize, scale: f32) {
            if size.width <= 0.0 || size.height <= 0.0 {
                w.push(format!(
                    "{label}.size {}x{} must be > 0",
                    size.width, size.height
                ));
            }
            if scale <= 0.0 {
                w.push(format!("{label}.scale {scale} must be > 0"));
            }
        }
        check_size(&mut w, "player", &self.player.size, self.player.scale);
        check_size(&mut w, "bullet", &self.bullet.size, self.bullet.scale);
        check_size(&mut w, "enemy", &self.enemy.size, self.enemy.scale);
        if !(0.0..=1.0).contains(&self.player.start_y_fraction) {
            w.push(format!(
                "player.start_y_fraction {} places the ship off screen",
                self.player.start_y_fraction
            ));
        }
        if self.bullet.travel_duration <= 0.0 {
            w.push(format!(
                "bullet.travel_duration {} <= 0; bullets vanish instantly",
                self.bullet.travel_duration
            ));
        }
        if self.bullet.z > self.player.z {
            w.push(format!(
                "bullet.z {} above player.z {}; bullets draw over the ship",
                self.bullet.z, self.player.z
            ));
        }
        if self.enemy.spawn_interval <= 0.0 {
            w.push(format!(
                "enemy.spawn_interval {} must be > 0",
                self.enemy.spawn_interval
            ));
        }
        if self.enemy.travel_duration <= 0.0 {
            w.push(format!(
                "enemy.travel_duration {} <= 0; enemies vanish instantly",
                self.enemy.travel_duration
            ));
        }
        if self.enemy.start_y_fraction < 1.0 {
            w.push(format!(
                "enemy.start_y_fraction {} < 1.0; enemies pop in on screen",
                self.enemy.start_y_fraction
            ));
        }
        if self.enemy.end_y_fraction > 0.0 {
            w.push(format!(
                "enemy.end_y_fraction {} > 0.0; enemies vanish on screen",
                self.enemy.end_y_fraction
            ));
        }
        w
    }
}

/// Outcome of the startup config load, logged once logging is up.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub fn log_config_report(report: Option<Res<ConfigLoadReport>>) {
    let Some(report) = report else {
        return;
    };
    for e in &report.errors {
        warn!("CONFIG LOAD ISSUE: {e}");
    }
    if report.used.is_empty() {
        info!("No config layers found; using defaults");
    } else {
        info!(used = ?report.used, "Config layers loaded");
    }
    for w in &report.warnings {
        warn!("CONFIG WARNING: {w}");
    }
}
