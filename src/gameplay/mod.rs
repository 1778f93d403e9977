pub mod actions;
pub mod scene;
pub mod spawning;
