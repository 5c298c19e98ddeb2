//! Platform abstraction layer
//!
//! The windowing/keyboard backend lives outside this crate; it only has to
//! implement [`input::KeySource`].

pub mod input;

pub use input::{HeldKeys, InputTracker, Key, KeyBindings, KeyScheme, KeySource, UnknownKeyScheme};
