//! VaxerMan - a top-down tile arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, bullets, enemies, collisions)
//! - `renderer`: Backend-agnostic draw pass producing sprite instances
//! - `platform`: Keyboard abstraction and input edge tracking
//! - `level`: Tile layer data
//! - `tuning`: Data-driven game balance
//! - `settings`: Host configuration

pub mod level;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use level::{Level, LevelError};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: i32 = 240;
    pub const SCREEN_HEIGHT: i32 = 240;

    /// Host loop rate
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Window defaults
    pub const WINDOW_TITLE: &str = "VaxerMan";
    pub const WINDOW_SCALE: u32 = 2;

    /// Every sprite sheet is laid out on a 32px grid
    pub const SPRITE_SIZE: i32 = 32;

    /// Tile geometry
    pub const TILE_SIZE: i32 = 16;
    /// Tiles per row in the tile sheet image
    pub const TILE_SHEET_COLUMNS: u32 = 25;
    /// Tile rows in the tile sheet image
    pub const TILE_SHEET_ROWS: u32 = 25;
    /// Tiles per row on screen
    pub const TILES_X: usize = (SCREEN_WIDTH / TILE_SIZE) as usize;
    /// Tiles per column on screen
    pub const TILES_Y: usize = (SCREEN_HEIGHT / TILE_SIZE) as usize;
}

/// Screen size as a vector
#[inline]
pub const fn screen_size() -> IVec2 {
    IVec2::new(consts::SCREEN_WIDTH, consts::SCREEN_HEIGHT)
}

/// Screen centre, where the player starts
#[inline]
pub const fn screen_center() -> IVec2 {
    IVec2::new(consts::SCREEN_WIDTH / 2, consts::SCREEN_HEIGHT / 2)
}
