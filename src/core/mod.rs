pub mod ambient;
pub mod camera;
pub mod constants;
pub mod entrance;
pub mod field;
pub mod geometry;
pub mod jitter;
pub mod pointer;
pub mod reveal;
pub mod scene;
pub mod texture;
pub mod tween;
pub mod viewport;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
