pub mod camera;
mod render;
#[allow(clippy::module_inception)]
pub mod renderer;
pub mod vertex;

pub use render::FrameParams;
pub use renderer::Renderer;
