pub mod animation;
pub mod camera;
pub mod cli;
pub mod frame;
pub mod panel;
pub mod placer;
pub mod renderer;
pub mod scene;
pub mod timer;

pub use placer::place;
pub use scene::{LineSpec, Sphere};
