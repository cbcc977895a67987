//! Window event translation
//!
//! Turns raw `winit` window events into view events the application layer
//! consumes (pointer drags with deltas, keys with modifiers). The
//! translator carries the small amount of state winit does not: the last
//! cursor position, the live modifier set and the held pointer button.

use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

use bitflags::bitflags;

use crate::camera::MovementFlags;

bitflags! {
    /// Keyboard modifiers held during an event
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u32 {
        const SHIFT = 1 << 0;
        const CTRL  = 1 << 1;
        const ALT   = 1 << 2;
        const META  = 1 << 3;
    }
}

/// Pointer buttons the viewer distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

/// Translated view event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    PointerDown {
        button: PointerButton,
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },
    /// Cursor motion while a button is held
    PointerDrag {
        button: PointerButton,
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        modifiers: Modifiers,
    },
    PointerUp {
        button: PointerButton,
        x: f32,
        y: f32,
        modifiers: Modifiers,
    },
    KeyDown {
        key: KeyCode,
        modifiers: Modifiers,
    },
    KeyUp {
        key: KeyCode,
        modifiers: Modifiers,
    },
}

/// Stateful window-event translator
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: Option<(f32, f32)>,
    modifiers: Modifiers,
    held: Option<PointerButton>,
    movement: MovementFlags,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate one window event. Returns `None` for events the viewer
    /// does not consume (and for pure state updates like modifier changes).
    pub fn translate(&mut self, event: &WindowEvent) -> Option<ViewEvent> {
        match event {
            WindowEvent::ModifiersChanged(m) => {
                self.handle_modifiers(m.state());
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x as f32, position.y as f32)
            }
            WindowEvent::MouseInput { state, button, .. } => self.handle_button(
                map_pointer_button(*button),
                *state == ElementState::Pressed,
            ),
            WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
                PhysicalKey::Code(code) => {
                    // Held-key repeats would churn the movement flags
                    if event.repeat {
                        return None;
                    }
                    self.handle_key(code, event.state == ElementState::Pressed)
                }
                PhysicalKey::Unidentified(_) => None,
            },
            _ => None,
        }
    }

    /// Movement keys currently held (WASD)
    pub fn movement(&self) -> MovementFlags {
        self.movement
    }

    /// Last known cursor position
    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    pub(crate) fn handle_modifiers(&mut self, state: ModifiersState) {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::SHIFT, state.shift_key());
        modifiers.set(Modifiers::CTRL, state.control_key());
        modifiers.set(Modifiers::ALT, state.alt_key());
        modifiers.set(Modifiers::META, state.super_key());
        self.modifiers = modifiers;
    }

    pub(crate) fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<ViewEvent> {
        let previous = self.cursor.replace((x, y));
        let button = self.held?;
        let (px, py) = previous.unwrap_or((x, y));
        Some(ViewEvent::PointerDrag {
            button,
            x,
            y,
            dx: x - px,
            dy: y - py,
            modifiers: self.modifiers,
        })
    }

    pub(crate) fn handle_button(
        &mut self,
        button: PointerButton,
        pressed: bool,
    ) -> Option<ViewEvent> {
        let (x, y) = self.cursor.unwrap_or((0.0, 0.0));
        if pressed {
            self.held = Some(button);
            Some(ViewEvent::PointerDown {
                button,
                x,
                y,
                modifiers: self.modifiers,
            })
        } else {
            if self.held == Some(button) {
                self.held = None;
            }
            Some(ViewEvent::PointerUp {
                button,
                x,
                y,
                modifiers: self.modifiers,
            })
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<ViewEvent> {
        let flag = match key {
            KeyCode::KeyW => Some(MovementFlags::FORWARD),
            KeyCode::KeyS => Some(MovementFlags::BACKWARD),
            KeyCode::KeyA => Some(MovementFlags::LEFT),
            KeyCode::KeyD => Some(MovementFlags::RIGHT),
            _ => None,
        };
        if let Some(flag) = flag {
            self.movement.set(flag, pressed);
        }

        if pressed {
            Some(ViewEvent::KeyDown {
                key,
                modifiers: self.modifiers,
            })
        } else {
            Some(ViewEvent::KeyUp {
                key,
                modifiers: self.modifiers,
            })
        }
    }
}

fn map_pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
