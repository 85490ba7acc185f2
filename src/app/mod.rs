#[allow(clippy::module_inception)]
pub mod app;
pub mod handler;
pub mod input;
pub mod options;

pub use handler::AppHandler;
pub use options::LaunchOptions;
