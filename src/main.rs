use winit::event_loop::{ControlFlow, EventLoop};

mod app;
mod content;
mod error;
mod island;
mod renderer;
mod settings;
mod ui;

pub const CONFY_APP_NAME: &str = "island-folio";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = app::LaunchOptions::parse(std::env::args().skip(1))?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = app::AppHandler::new(options, tokio::runtime::Runtime::new()?);

    event_loop.run_app(&mut handler)?;

    Ok(())
}
