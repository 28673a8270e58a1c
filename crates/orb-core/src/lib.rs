pub mod color;
pub mod constants;
pub mod events;
pub mod lines;
pub mod mesh;
pub mod params;
pub mod scene;
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");

pub use color::*;
pub use constants::*;
pub use events::*;
pub use lines::*;
pub use mesh::*;
pub use params::*;
pub use scene::*;
