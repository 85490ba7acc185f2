use std::sync::Arc;

use log::{error, info, warn};
use tokio::runtime::Runtime;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use crate::app::app::App;
use crate::app::options::LaunchOptions;
use crate::error::IslandError;

pub struct AppHandler {
    pub app: Option<App>,
    pub options: LaunchOptions,
    pub runtime: Runtime,
}

impl AppHandler {
    pub fn new(options: LaunchOptions, runtime: Runtime) -> Self {
        Self {
            app: None,
            options,
            runtime,
        }
    }

    fn create_app(&self, event_loop: &ActiveEventLoop) -> Result<App, IslandError> {
        let window_attrs = Window::default_attributes()
            .with_title("Island Folio")
            .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        info!("Window created: {:?}", window.inner_size());

        self.runtime
            .block_on(App::new(window, &self.options, self.runtime.handle()))
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            app.resume();
            return;
        }

        match self.create_app(event_loop) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                error!("Failed to start: {e}");
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            app.suspend();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            match app.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    app.recover_surface();
                }
                Err(wgpu::SurfaceError::Timeout) => {
                    warn!("Surface timeout, skipping frame");
                }
                Err(e) => {
                    error!("Render error: {e:?}");
                }
            }
            app.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            app.suspend();
        }
        info!("Exiting");
    }
}
