pub mod components;
pub mod config;
pub mod geometry;
pub mod system;
