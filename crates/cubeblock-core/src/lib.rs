pub mod camera;
pub mod constants;
pub mod draw;
pub mod effects;
pub mod focus;
pub mod overlay;
#[cfg(feature = "gpu")]
pub mod render;
pub mod scene;
pub mod scroll;
pub mod timeline;
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use draw::*;
pub use effects::*;
pub use focus::*;
pub use overlay::*;
pub use scene::*;
pub use scroll::*;
pub use timeline::*;
