pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use crate::app::game::{GameCorePlugin, GamePlugin};
pub use crate::core::components::{Bullet, Enemy, Player};
pub use crate::core::config::{GameConfig, WindowConfig};
