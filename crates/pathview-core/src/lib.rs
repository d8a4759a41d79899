pub mod accumulation;
pub mod camera;
pub mod config;
pub mod constants;
pub mod input;
pub mod math;
pub mod notify;
pub mod scene;
pub mod uniforms;

#[cfg(feature = "gpu")]
pub mod render;

pub static PATHTRACE_WGSL: &str = include_str!("../shaders/pathtrace.wgsl");

pub use accumulation::*;
pub use camera::*;
pub use config::*;
pub use constants::*;
pub use notify::*;
pub use scene::*;
pub use uniforms::*;
