pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod controller;
pub mod input;
pub mod responsive;
pub mod scene;
pub mod view;

pub static SCENE_WGSL: &str = include_str!("../../../shaders/scene.wgsl");

pub use autoplay::*;
pub use carousel::*;
pub use config::*;
pub use controller::*;
pub use input::*;
pub use responsive::*;
pub use scene::*;
pub use view::*;
