/// InputRecorder: folds winit window events into per-frame `InputSnapshot`s.
///
/// Held state is tracked per physical key / mouse button, so two keys bound
/// to the same logical button behave like one. Continuous deltas accumulate
/// until `take_snapshot` hands them out and starts over.

use glam::Vec2;
use rustc_hash::FxHashSet;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::input_snapshot::{Buttons, InputSnapshot};
use super::key_bindings::KeyBindings;

/// Pixel scroll deltas are converted to lines with this factor
pub const SCROLL_PIXELS_PER_LINE: f32 = 20.0;

/// Builds one `InputSnapshot` per frame from window events
#[derive(Debug)]
pub struct InputRecorder {
    bindings: KeyBindings,
    keys_down: FxHashSet<KeyCode>,
    buttons_down: FxHashSet<MouseButton>,
    last_cursor: Option<Vec2>,
    pointer_delta: Vec2,
    scroll_delta: Vec2,
}

impl InputRecorder {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            keys_down: FxHashSet::default(),
            buttons_down: FxHashSet::default(),
            last_cursor: None,
            pointer_delta: Vec2::ZERO,
            scroll_delta: Vec2::ZERO,
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Logical buttons currently held
    pub fn held(&self) -> Buttons {
        let keys = self.keys_down.iter().map(|key| self.bindings.key(*key));
        let mouse = self.buttons_down.iter().map(|button| self.bindings.mouse(*button));
        keys.chain(mouse).fold(Buttons::empty(), |acc, buttons| acc | buttons)
    }

    // ===== RAW FEEDS =====

    pub fn key(&mut self, key: KeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => self.keys_down.insert(key),
            ElementState::Released => self.keys_down.remove(&key),
        };
    }

    pub fn mouse_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => self.buttons_down.insert(button),
            ElementState::Released => self.buttons_down.remove(&button),
        };
    }

    /// Absolute cursor position; motion is the difference to the previous position
    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        let position = Vec2::new(x as f32, y as f32);
        if let Some(last) = self.last_cursor {
            self.pointer_delta += position - last;
        }
        self.last_cursor = Some(position);
    }

    /// Relative pointer motion (e.g. raw device motion while the cursor is grabbed)
    pub fn pointer_motion(&mut self, dx: f64, dy: f64) {
        self.pointer_delta += Vec2::new(dx as f32, dy as f32);
    }

    pub fn scroll(&mut self, delta: MouseScrollDelta) {
        self.scroll_delta += match delta {
            MouseScrollDelta::LineDelta(x, y) => Vec2::new(x, y),
            MouseScrollDelta::PixelDelta(position) => {
                Vec2::new(position.x as f32, position.y as f32) / SCROLL_PIXELS_PER_LINE
            }
        };
    }

    /// Forget held keys and the cursor anchor (avoids stuck keys after a focus change)
    pub fn focus_lost(&mut self) {
        self.keys_down.clear();
        self.buttons_down.clear();
        self.last_cursor = None;
    }

    // ===== WINIT =====

    /// Feed a window event; returns `true` if it was an input event
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    self.key(code, event.state);
                }
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.mouse_button(*button, *state);
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y);
                true
            }
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.scroll(*delta);
                true
            }
            WindowEvent::Focused(false) => {
                self.focus_lost();
                true
            }
            _ => false,
        }
    }

    /// Sample the current state and reset the accumulated deltas
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            held: self.held(),
            pointer_delta: self.pointer_delta,
            scroll_delta: self.scroll_delta,
        };
        self.pointer_delta = Vec2::ZERO;
        self.scroll_delta = Vec2::ZERO;
        snapshot
    }
}

impl Default for InputRecorder {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
#[path = "input_recorder_tests.rs"]
mod tests;
