use log::debug;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

use crate::island::IslandInput;

/// Pointer-related window events reduced to what the island cares about.
/// Horizontal positions are in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    CursorMoved { x: f32 },
    LeftButton { pressed: bool },
    Touch { id: u64, phase: TouchPhase, x: f32 },
}

impl PointerEvent {
    pub fn from_window_event(event: &WindowEvent, scale_factor: f64) -> Option<Self> {
        match event {
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.to_logical::<f32>(scale_factor).x,
            }),
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => Some(Self::LeftButton {
                pressed: *state == ElementState::Pressed,
            }),
            WindowEvent::Touch(touch) => Some(Self::Touch {
                id: touch.id,
                phase: touch.phase,
                x: touch.location.to_logical::<f32>(scale_factor).x,
            }),
            _ => None,
        }
    }
}

/// Maps mouse and touch onto controller input. Only the first touch is
/// followed, and presses egui wants stay with egui.
#[derive(Debug, Default)]
pub struct PointerRouter {
    cursor_x: Option<f32>,
    active_touch: Option<u64>,
    pending_press: bool,
}

impl PointerRouter {
    pub fn route(&mut self, event: PointerEvent, egui_wants_pointer: bool) -> Option<IslandInput> {
        match event {
            PointerEvent::CursorMoved { x } => {
                self.cursor_x = Some(x);
                if self.pending_press {
                    self.pending_press = false;
                    return Some(IslandInput::Press { x });
                }
                (!egui_wants_pointer).then_some(IslandInput::Move { x })
            }
            PointerEvent::LeftButton { pressed: true } => {
                if egui_wants_pointer {
                    return None;
                }
                match self.cursor_x {
                    Some(x) => Some(IslandInput::Press { x }),
                    None => {
                        debug!("Press before any cursor position, deferring to first move");
                        self.pending_press = true;
                        None
                    }
                }
            }
            // Release always goes through so a drag that ends over a window still stops
            PointerEvent::LeftButton { pressed: false } => {
                self.pending_press = false;
                Some(IslandInput::Release)
            }
            PointerEvent::Touch { id, phase, x } => match phase {
                TouchPhase::Started if self.active_touch.is_none() => {
                    if egui_wants_pointer {
                        return None;
                    }
                    self.active_touch = Some(id);
                    Some(IslandInput::Press { x })
                }
                TouchPhase::Moved if self.active_touch == Some(id) => {
                    Some(IslandInput::Move { x })
                }
                TouchPhase::Ended | TouchPhase::Cancelled if self.active_touch == Some(id) => {
                    self.active_touch = None;
                    Some(IslandInput::Release)
                }
                _ => None,
            },
        }
    }

    pub fn reset(&mut self) {
        self.active_touch = None;
        self.pending_press = false;
    }
}
