// Keyboard polling for the camera
//
// The camera asks one question per frame: is logical key K held?
// `KeyInput` is that question; `KeyboardState` answers it from winit
// keyboard events through the configured `KeyBindings`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::config::KeyBindings;

/// Movement and rotation intents the camera understands.
///
/// Serializes as `snake_case` so config files read naturally:
/// ```toml
/// [keybindings.bindings]
/// forward = "KeyW"
/// yaw_left = "KeyJ"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalKey {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
    Up,
    Down,
    PitchUp,
    PitchDown,
    YawLeft,
    YawRight,
    RollLeft,
    RollRight,
}

impl LogicalKey {
    /// The order in which [`Camera::update`](crate::Camera::update) polls keys.
    pub const SCAN_ORDER: [Self; 12] = [
        Self::Forward,
        Self::Back,
        Self::StrafeLeft,
        Self::StrafeRight,
        Self::Up,
        Self::Down,
        Self::PitchUp,
        Self::PitchDown,
        Self::YawLeft,
        Self::YawRight,
        Self::RollLeft,
        Self::RollRight,
    ];
}

/// Polled key state: true while the key is held down.
pub trait KeyInput {
    fn is_key_held(&self, key: LogicalKey) -> bool;
}

impl<F> KeyInput for F
where
    F: Fn(LogicalKey) -> bool,
{
    fn is_key_held(&self, key: LogicalKey) -> bool {
        self(key)
    }
}

/// Tracks which physical keys are currently down.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
    bindings: KeyBindings,
}

impl KeyboardState {
    #[must_use]
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            held: HashSet::new(),
            bindings,
        }
    }

    /// Feeds a winit keyboard event. Keys without a physical code are ignored.
    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.set_key(code, event.state == ElementState::Pressed);
        }
    }

    pub fn set_key(&mut self, code: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(code);
        } else {
            self.held.remove(&code);
        }
    }

    pub fn press(&mut self, code: KeyCode) {
        self.set_key(code, true);
    }

    pub fn release(&mut self, code: KeyCode) {
        self.set_key(code, false);
    }

    /// Forgets every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    #[must_use]
    pub fn is_physical_key_held(&self, code: KeyCode) -> bool {
        self.held.contains(&code)
    }

    #[must_use]
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }
}

impl KeyInput for KeyboardState {
    fn is_key_held(&self, key: LogicalKey) -> bool {
        self.bindings
            .key_for(key)
            .is_some_and(|code| self.held.contains(&code))
    }
}
