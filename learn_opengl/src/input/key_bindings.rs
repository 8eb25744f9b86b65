/// KeyBindings: maps winit keys and mouse buttons to logical `Buttons`.

use rustc_hash::FxHashMap;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

use super::input_snapshot::Buttons;

/// Key and mouse-button map
#[derive(Debug, Clone)]
pub struct KeyBindings {
    keys: FxHashMap<KeyCode, Buttons>,
    mouse: FxHashMap<MouseButton, Buttons>,
}

impl KeyBindings {
    /// No bindings at all
    pub fn empty() -> Self {
        Self {
            keys: FxHashMap::default(),
            mouse: FxHashMap::default(),
        }
    }

    /// Bind `key` to `buttons` (replaces any previous binding of `key`)
    pub fn bind_key(&mut self, key: KeyCode, buttons: Buttons) -> &mut Self {
        self.keys.insert(key, buttons);
        self
    }

    /// Bind a mouse button to `buttons`
    pub fn bind_mouse(&mut self, button: MouseButton, buttons: Buttons) -> &mut Self {
        self.mouse.insert(button, buttons);
        self
    }

    /// Remove the binding of `key`
    pub fn unbind_key(&mut self, key: KeyCode) -> &mut Self {
        self.keys.remove(&key);
        self
    }

    /// Buttons driven by `key` (empty if unbound)
    pub fn key(&self, key: KeyCode) -> Buttons {
        self.keys.get(&key).copied().unwrap_or_default()
    }

    /// Buttons driven by a mouse button (empty if unbound)
    pub fn mouse(&self, button: MouseButton) -> Buttons {
        self.mouse.get(&button).copied().unwrap_or_default()
    }
}

impl Default for KeyBindings {
    /// WASD + Q/E fly controls, Space wireframe, P projection, Escape close,
    /// right mouse button free-look.
    fn default() -> Self {
        let mut bindings = Self::empty();
        bindings
            .bind_key(KeyCode::KeyW, Buttons::FORWARD)
            .bind_key(KeyCode::KeyS, Buttons::BACK)
            .bind_key(KeyCode::KeyA, Buttons::LEFT)
            .bind_key(KeyCode::KeyD, Buttons::RIGHT)
            .bind_key(KeyCode::KeyQ, Buttons::DOWN)
            .bind_key(KeyCode::KeyE, Buttons::UP)
            .bind_key(KeyCode::Space, Buttons::WIREFRAME)
            .bind_key(KeyCode::KeyP, Buttons::PROJECTION)
            .bind_key(KeyCode::Escape, Buttons::CLOSE)
            .bind_mouse(MouseButton::Right, Buttons::ROTATE);
        bindings
    }
}
