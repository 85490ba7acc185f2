use std::sync::Arc;

use egui_wgpu::ScreenDescriptor;
use egui_winit::State;
use log::{info, warn};
use tokio::runtime::Handle;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::app::input::{PointerEvent, PointerRouter};
use crate::app::options::LaunchOptions;
use crate::content::Content;
use crate::error::IslandError;
use crate::island::{
    HomeState, IslandHost, IslandInput, IslandLoader, IslandTransform, RotationController,
    RotationKey,
};
use crate::renderer::{FrameParams, Renderer};
use crate::settings::Settings;
use crate::ui::{IslandReadout, Ui};

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl EventResponse {
    fn exit() -> Self {
        Self {
            repaint: false,
            exit: true,
        }
    }
}

pub struct App {
    pub window: Arc<Window>,
    ui: Ui,
    renderer: Renderer,
    egui_state: State,
    egui_wants_pointer: bool,
    controller: RotationController,
    home: HomeState,
    loader: IslandLoader,
    settings: Settings,
    pointer: PointerRouter,
}

impl App {
    pub async fn new(
        window: Arc<Window>,
        options: &LaunchOptions,
        runtime: &Handle,
    ) -> Result<Self, IslandError> {
        let content = match &options.content_path {
            Some(path) => Content::load(path).or_else(|e| {
                warn!("Failed to load content from {}: {e}", path.display());
                Content::embedded()
            })?,
            None => Content::embedded()?,
        };
        let ui = Ui::new(content);

        let mut renderer = Renderer::new(&window).await?;

        let egui_ctx = renderer.egui_context();
        let egui_state = State::new(
            egui_ctx.clone(),
            egui::viewport::ViewportId::ROOT,
            &*window,
            None,
            None,
            None,
        );

        let settings = Settings::load();

        let placement = IslandTransform::for_screen(logical_width(&window));
        let controller = RotationController::new(placement);
        renderer.resize(window.inner_size());

        let mut loader = IslandLoader::new();
        loader.start(options.island_source(), runtime);

        let mut app = Self {
            window,
            ui,
            renderer,
            egui_state,
            egui_wants_pointer: false,
            controller,
            home: HomeState::new(),
            loader,
            settings,
            pointer: PointerRouter::default(),
        };
        app.update_placement();
        Ok(app)
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        let egui_response = self.egui_state.on_window_event(&self.window, event);

        match event {
            WindowEvent::CloseRequested => {
                self.controller.detach();
                return EventResponse::exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if egui_response.consumed {
                    return EventResponse {
                        repaint: egui_response.repaint,
                        exit: false,
                    };
                }
                let pressed = event.state == ElementState::Pressed;
                let key = match &event.logical_key {
                    Key::Named(NamedKey::Escape) if pressed => return EventResponse::exit(),
                    Key::Named(NamedKey::ArrowLeft) => Some(RotationKey::Left),
                    Key::Named(NamedKey::ArrowRight) => Some(RotationKey::Right),
                    _ => None,
                };
                if let Some(key) = key {
                    let input = if pressed {
                        IslandInput::KeyDown(key)
                    } else {
                        IslandInput::KeyUp(key)
                    };
                    self.controller.handle_input(input, &mut self.home);
                }
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
                self.update_placement();
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                self.update_placement();
            }
            _ => {
                let pointer = PointerEvent::from_window_event(event, self.window.scale_factor());
                if let Some(input) =
                    pointer.and_then(|p| self.pointer.route(p, self.egui_wants_pointer))
                {
                    self.controller.handle_input(input, &mut self.home);
                }
            }
        }

        EventResponse {
            repaint: egui_response.repaint,
            exit: false,
        }
    }

    /// Surface went away (suspend, exit): stop listening until it is back.
    pub fn suspend(&mut self) {
        self.controller.detach();
        if self.home.is_rotating() {
            self.home.set_is_rotating(false);
        }
        self.pointer.reset();
    }

    pub fn resume(&mut self) {
        if self.renderer.has_island() && !self.controller.is_attached() {
            self.controller.attach();
        }
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        if let Some(mesh) = self.loader.poll() {
            self.renderer.update_island(&mesh);
            self.controller.attach();
        }

        self.controller.update_frame(&mut self.home);

        let raw_input = self.egui_state.take_egui_input(&self.window);
        let egui_ctx = self.renderer.egui_context();

        let readout = IslandReadout {
            angle: self.controller.angle(),
            normalized_angle: self.controller.normalized_angle(),
            speed: self.controller.speed(),
            stage: self.home.current_stage(),
            is_rotating: self.home.is_rotating(),
            stage_changes: self.home.stage_changes(),
            status: self.loader.status(),
        };

        let mut changed = (false, false);
        let full_output = egui_ctx.run(raw_input, |ctx| {
            changed = self.ui.show(ctx, &readout, &mut self.settings);
        });

        let (ui_changed, display_changed) = changed;
        if ui_changed {
            self.settings.ui.save();
        }
        if display_changed {
            self.settings.display.save();
        }

        // Update egui pointer state for next frame
        self.egui_wants_pointer = egui_ctx.wants_pointer_input();

        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [
                self.window.inner_size().width,
                self.window.inner_size().height,
            ],
            pixels_per_point: self.window.scale_factor() as f32,
        };

        let display = &self.settings.display;
        let sky_color = if self.home.is_rotating() {
            lerp_color(display.sky_color, display.sky_rotating_color, 0.35)
        } else {
            display.sky_color
        };
        let frame = FrameParams {
            transform: *self.controller.transform(),
            sky_color,
            light_direction: display.light_direction,
            ambient: display.ambient,
        };

        self.renderer
            .render(&frame, paint_jobs, full_output.textures_delta, screen_descriptor)
    }

    /// Host placement for the current window size; the focus point becomes the
    /// camera target, which also sets the width pointer travel is scaled by.
    fn update_placement(&mut self) {
        let placement = IslandTransform::for_screen(logical_width(&self.window));
        self.controller.set_placement(placement);
        self.renderer
            .set_focus_point(self.controller.transform().focus_point);
        self.controller
            .set_viewport_width(self.renderer.viewport_width());
    }

    pub fn recover_surface(&mut self) {
        info!("Reconfiguring surface");
        self.renderer.reconfigure();
    }
}

fn logical_width(window: &Window) -> f32 {
    window
        .inner_size()
        .to_logical::<f32>(window.scale_factor())
        .width
}

fn lerp_color(from: [f32; 3], to: [f32; 3], t: f32) -> [f32; 3] {
    [
        from[0] + (to[0] - from[0]) * t,
        from[1] + (to[1] - from[1]) * t,
        from[2] + (to[2] - from[2]) * t,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_color_endpoints() {
        let a = [0.0, 0.5, 1.0];
        let b = [1.0, 0.5, 0.0];
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), [0.5, 0.5, 0.5]);
    }
}
