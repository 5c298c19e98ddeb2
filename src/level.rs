//! Tile level data
//!
//! A level is an ordered stack of layers, each a row-major grid of tile
//! indices covering the whole screen. The JSON form is a bare array of
//! layers: `[[243, 243, ...], [0, 0, 26, ...]]`.

use std::path::{Path, PathBuf};

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{TILE_SHEET_COLUMNS, TILE_SHEET_ROWS, TILE_SIZE, TILES_X, TILES_Y};
use crate::sim::SpriteFrame;

/// Built-in level shipped with the binary
const BUILTIN_LEVEL: &str = include_str!("../assets/levels/level1.json");

/// Tiles in one full-screen layer
pub const TILES_PER_LAYER: usize = TILES_X * TILES_Y;

/// Tiles in the tile sheet; valid indices are below this
pub const TILE_SHEET_TILES: u32 = TILE_SHEET_COLUMNS * TILE_SHEET_ROWS;

/// Errors loading level data. All are fatal at startup.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("error loading level {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error parsing level: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level has no layers")]
    Empty,
    #[error("layer {layer} has {len} tiles, expected {expected}")]
    LayerSize {
        layer: usize,
        len: usize,
        expected: usize,
    },
    #[error("layer {layer} tile {index} is {tile}, outside the {}-tile sheet", TILE_SHEET_TILES)]
    TileIndex { layer: usize, index: usize, tile: u32 },
}

/// Immutable tile layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level {
    layers: Vec<Vec<u32>>,
}

impl Level {
    /// Build from layers, checking every layer covers the screen
    pub fn new(layers: Vec<Vec<u32>>) -> Result<Self, LevelError> {
        if layers.is_empty() {
            return Err(LevelError::Empty);
        }
        if let Some((layer, tiles)) = layers
            .iter()
            .enumerate()
            .find(|(_, tiles)| tiles.len() != TILES_PER_LAYER)
        {
            return Err(LevelError::LayerSize {
                layer,
                len: tiles.len(),
                expected: TILES_PER_LAYER,
            });
        }
        for (layer, tiles) in layers.iter().enumerate() {
            if let Some((index, &tile)) = tiles
                .iter()
                .enumerate()
                .find(|(_, tile)| tile_source(**tile).is_none())
            {
                return Err(LevelError::TileIndex { layer, index, tile });
            }
        }
        Ok(Self { layers })
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let layers: Vec<Vec<u32>> = serde_json::from_str(json)?;
        Self::new(layers)
    }

    /// Read and parse a level file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level = Self::from_json(&json)?;
        log::info!("Loaded level {} ({} layers)", path.display(), level.layers.len());
        Ok(level)
    }

    /// The level embedded in the binary
    pub fn builtin() -> Result<Self, LevelError> {
        Self::from_json(BUILTIN_LEVEL)
    }

    pub fn layers(&self) -> &[Vec<u32>] {
        &self.layers
    }

    /// Every tile in draw order: layer by layer, row-major within a layer
    pub fn tiles(&self) -> impl Iterator<Item = PlacedTile> + '_ {
        // Indices were checked against the sheet in `new`
        self.layers.iter().flat_map(|layer| {
            layer.iter().enumerate().filter_map(|(i, &index)| {
                tile_source(index).map(|origin| PlacedTile {
                    dest: tile_dest(i),
                    frame: SpriteFrame::tile(origin),
                })
            })
        })
    }
}

/// A tile positioned on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedTile {
    pub dest: IVec2,
    pub frame: SpriteFrame,
}

/// Top-left of tile `index` in the tile sheet, or `None` past the sheet
pub fn tile_source(index: u32) -> Option<IVec2> {
    if index >= TILE_SHEET_TILES {
        return None;
    }
    let col = (index % TILE_SHEET_COLUMNS) as i32;
    let row = (index / TILE_SHEET_COLUMNS) as i32;
    Some(IVec2::new(col, row) * TILE_SIZE)
}

/// Screen position of the `i`-th tile in a layer
pub fn tile_dest(i: usize) -> IVec2 {
    IVec2::new((i % TILES_X) as i32, (i / TILES_X) as i32) * TILE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_level_loads() {
        let level = Level::builtin().unwrap();
        assert_eq!(level.layers().len(), 2);
        assert_eq!(level.layers()[0][0], 243);
        assert_eq!(level.tiles().count(), 2 * TILES_PER_LAYER);
    }

    #[test]
    fn test_tile_geometry() {
        // 243 = row 9, col 18 in a 25-wide sheet
        assert_eq!(tile_source(243), Some(IVec2::new(18 * 16, 9 * 16)));
        assert_eq!(tile_source(0), Some(IVec2::ZERO));
        assert_eq!(tile_source(TILE_SHEET_TILES - 1), Some(IVec2::new(24 * 16, 24 * 16)));
        assert_eq!(tile_source(TILE_SHEET_TILES), None);
        assert_eq!(tile_source(u32::MAX), None);

        assert_eq!(tile_dest(0), IVec2::ZERO);
        assert_eq!(tile_dest(14), IVec2::new(224, 0));
        assert_eq!(tile_dest(15), IVec2::new(0, 16));
        assert_eq!(tile_dest(224), IVec2::new(224, 224));
    }

    #[test]
    fn test_rejects_short_layer() {
        let err = Level::from_json("[[1, 2, 3]]").unwrap_err();
        assert!(matches!(
            err,
            LevelError::LayerSize {
                layer: 0,
                len: 3,
                expected: 225
            }
        ));
    }

    #[test]
    fn test_rejects_out_of_range_tile() {
        let mut ground = vec![0u32; TILES_PER_LAYER];
        let mut props = vec![0u32; TILES_PER_LAYER];
        ground[7] = 42;
        props[30] = u32::MAX;

        let err = Level::new(vec![ground.clone(), props]).unwrap_err();
        assert!(matches!(
            err,
            LevelError::TileIndex {
                layer: 1,
                index: 30,
                tile: u32::MAX
            }
        ));
        assert!(err.to_string().contains("layer 1 tile 30"));

        ground[7] = TILE_SHEET_TILES;
        let json = serde_json::to_string(&vec![ground]).unwrap();
        assert!(matches!(
            Level::from_json(&json),
            Err(LevelError::TileIndex { layer: 0, index: 7, .. })
        ));
    }

    #[test]
    fn test_rejects_empty_and_malformed() {
        assert!(matches!(Level::from_json("[]"), Err(LevelError::Empty)));
        assert!(matches!(
            Level::from_json("{\"layers\": 1}"),
            Err(LevelError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Level::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
