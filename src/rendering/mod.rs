pub mod camera;
pub mod sprites;
