//! Instance types for sprite rendering

use bytemuck::{Pod, Zeroable};
use glam::IVec2;

use crate::sim::SpriteFrame;

/// One textured quad: where it goes and which sheet region it samples.
/// Laid out for direct upload as a GPU instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Top-left on screen, logical pixels
    pub dest: [f32; 2],
    /// Top-left in the sheet, pixels
    pub src_origin: [f32; 2],
    /// Width/height in pixels
    pub src_size: [f32; 2],
    /// `SheetId` as u32
    pub sheet: u32,
    pub _pad: u32,
}

impl SpriteInstance {
    /// Instance for `frame` at `dest`, showing the frame for `counter`
    pub fn new(dest: IVec2, frame: &SpriteFrame, counter: u32) -> Self {
        let src = frame.source_rect(counter);
        Self {
            dest: dest.as_vec2().to_array(),
            src_origin: src.min.as_vec2().to_array(),
            src_size: src.size.as_vec2().to_array(),
            sheet: frame.sheet as u32,
            _pad: 0,
        }
    }
}
