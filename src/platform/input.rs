//! Keyboard input
//!
//! The backend is polled once per tick. Movement keys are level-triggered
//! (held = moving); fire and restart are edge-triggered so holding the key
//! down does not repeat.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::TickInput;

/// Keys the game recognises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    H,
    J,
    K,
    L,
    I,
    R,
    Space,
}

/// Keyboard state provided by the backend
pub trait KeySource {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Simple set of currently held keys
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.keys.remove(&key);
    }
}

impl FromIterator<Key> for HeldKeys {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl KeySource for HeldKeys {
    fn is_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }
}

/// Key layout presets. Parsed case-insensitively from settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "String")]
pub enum KeyScheme {
    /// h/j/k/l to move, i to fire
    #[default]
    Vim,
    /// Arrow keys to move, space to fire
    Arrows,
}

impl KeyScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyScheme::Vim => "Vim",
            KeyScheme::Arrows => "Arrows",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key scheme {0:?}, expected \"Vim\" or \"Arrows\"")]
pub struct UnknownKeyScheme(String);

impl FromStr for KeyScheme {
    type Err = UnknownKeyScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vim" | "hjkl" => Ok(KeyScheme::Vim),
            "arrows" | "arrow" => Ok(KeyScheme::Arrows),
            _ => Err(UnknownKeyScheme(s.to_string())),
        }
    }
}

impl TryFrom<String> for KeyScheme {
    type Error = UnknownKeyScheme;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Which key triggers each action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: Key,
    pub right: Key,
    pub up: Key,
    pub down: Key,
    pub fire: Key,
    pub restart: Key,
}

impl KeyBindings {
    pub fn for_scheme(scheme: KeyScheme) -> Self {
        match scheme {
            KeyScheme::Vim => Self {
                left: Key::H,
                right: Key::L,
                up: Key::K,
                down: Key::J,
                fire: Key::I,
                restart: Key::R,
            },
            KeyScheme::Arrows => Self {
                left: Key::ArrowLeft,
                right: Key::ArrowRight,
                up: Key::ArrowUp,
                down: Key::ArrowDown,
                fire: Key::Space,
                restart: Key::R,
            },
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::for_scheme(KeyScheme::default())
    }
}

/// Turns raw keyboard state into per-tick input
#[derive(Debug, Clone)]
pub struct InputTracker {
    bindings: KeyBindings,
    fire_was_down: bool,
    restart_was_down: bool,
}

impl InputTracker {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            fire_was_down: false,
            restart_was_down: false,
        }
    }

    /// Sample the keyboard for one tick
    pub fn poll(&mut self, keys: &impl KeySource) -> TickInput {
        let b = self.bindings;
        let fire_down = keys.is_pressed(b.fire);
        let restart_down = keys.is_pressed(b.restart);

        let input = TickInput {
            left: keys.is_pressed(b.left),
            right: keys.is_pressed(b.right),
            up: keys.is_pressed(b.up),
            down: keys.is_pressed(b.down),
            fire: fire_down && !self.fire_was_down,
            restart: restart_down && !self.restart_was_down,
        };

        self.fire_was_down = fire_down;
        self.restart_was_down = restart_down;
        input
    }
}
