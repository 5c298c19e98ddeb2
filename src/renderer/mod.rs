//! Rendering module
//!
//! Builds a backend-agnostic draw list each frame. Decoding sheets and
//! blitting is the host's job; it maps each `SheetId` to a texture.

pub mod frame;
pub mod vertex;

pub use frame::{Frame, TextLine, build_frame};
pub use vertex::SpriteInstance;
