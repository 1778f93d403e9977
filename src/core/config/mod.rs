pub mod config;

pub use config::{
    log_config_report, AssetConfig, BackgroundConfig, BulletConfig, ConfigLoadReport,
    EnemyConfig, GameConfig, PlayerConfig, SceneConfig, SpriteSize, WindowConfig,
};
