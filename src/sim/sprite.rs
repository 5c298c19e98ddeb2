//! Sprite frame table
//!
//! Maps an actor's (direction, activity) pair to a clip on its sprite sheet.
//! The domain is small and fixed, so lookups are plain `match`es over
//! `const` data rather than a map built at runtime.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{Activity, Direction, EnemyStatus};
use crate::consts::{SPRITE_SIZE, TILE_SIZE};

/// Sprite sheet handles. A rendering backend maps each to a decoded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum SheetId {
    VaxerMan = 0,
    Enemy = 1,
    Bullet = 2,
    Tiles = 3,
}

/// An animation clip: a horizontal strip of equally sized frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteFrame {
    pub sheet: SheetId,
    /// Number of frames in the clip (always >= 1)
    pub frames: u32,
    /// Top-left pixel of the first frame
    pub origin: IVec2,
    /// Frame width/height in pixels
    pub size: IVec2,
}

impl SpriteFrame {
    /// A clip starting at grid cell (col, row) on a 32px sheet
    const fn cell(sheet: SheetId, frames: u32, col: i32, row: i32) -> Self {
        Self {
            sheet,
            frames,
            origin: IVec2::new(col * SPRITE_SIZE, row * SPRITE_SIZE),
            size: IVec2::new(SPRITE_SIZE, SPRITE_SIZE),
        }
    }

    /// A single tile from the tile sheet
    pub const fn tile(origin: IVec2) -> Self {
        Self {
            sheet: SheetId::Tiles,
            frames: 1,
            origin,
            size: IVec2::new(TILE_SIZE, TILE_SIZE),
        }
    }

    /// Frame to show for a tick counter.
    ///
    /// Each frame is held for `frames` ticks before advancing, so a clip of
    /// n frames takes n² ticks to cycle.
    pub fn frame_index(&self, counter: u32) -> u32 {
        let frames = self.frames.max(1);
        (counter / frames) % frames
    }

    /// Sheet region for a tick counter
    pub fn source_rect(&self, counter: u32) -> Rect {
        let index = self.frame_index(counter) as i32;
        Rect::new(self.origin + IVec2::new(index * self.size.x, 0), self.size)
    }
}

/// VaxerMan clip for a direction/activity pair
pub const fn player_frame(direction: Direction, activity: Activity) -> SpriteFrame {
    use Activity::*;
    use Direction::*;

    let sheet = SheetId::VaxerMan;
    match (direction, activity) {
        (Left, Idle) => SpriteFrame::cell(sheet, 4, 0, 0),
        (Left, Run) => SpriteFrame::cell(sheet, 6, 0, 4),
        (Left, Shoot) => SpriteFrame::cell(sheet, 5, 0, 2),
        (Left, Hit) => SpriteFrame::cell(sheet, 2, 0, 6),
        (Left, Dead) => SpriteFrame::cell(sheet, 1, 0, 8),

        (Right, Idle) => SpriteFrame::cell(sheet, 4, 0, 1),
        (Right, Run) => SpriteFrame::cell(sheet, 6, 0, 5),
        (Right, Shoot) => SpriteFrame::cell(sheet, 5, 0, 3),
        (Right, Hit) => SpriteFrame::cell(sheet, 2, 0, 7),
        (Right, Dead) => SpriteFrame::cell(sheet, 1, 1, 8),

        (Up, Idle) => SpriteFrame::cell(sheet, 4, 0, 1),
        (Up, Run) => SpriteFrame::cell(sheet, 6, 0, 5),
        (Up, Shoot) => SpriteFrame::cell(sheet, 4, 0, 3),
        (Up, Hit) => SpriteFrame::cell(sheet, 2, 0, 7),
        (Up, Dead) => SpriteFrame::cell(sheet, 1, 1, 8),

        (Down, Idle) => SpriteFrame::cell(sheet, 4, 0, 0),
        (Down, Run) => SpriteFrame::cell(sheet, 6, 0, 4),
        (Down, Shoot) => SpriteFrame::cell(sheet, 5, 0, 2),
        (Down, Hit) => SpriteFrame::cell(sheet, 2, 0, 6),
        (Down, Dead) => SpriteFrame::cell(sheet, 1, 0, 8),
    }
}

/// Enemy clip for a lifecycle status
pub const fn enemy_frame(status: EnemyStatus) -> SpriteFrame {
    let sheet = SheetId::Enemy;
    match status {
        EnemyStatus::Alive => SpriteFrame::cell(sheet, 1, 0, 0),
        EnemyStatus::Hit => SpriteFrame::cell(sheet, 4, 0, 1),
        EnemyStatus::Dead => SpriteFrame::cell(sheet, 1, 1, 0),
    }
}

/// Bullet clip; vertical shots use the rotated row
pub const fn bullet_frame(direction: Direction) -> SpriteFrame {
    if direction.is_vertical() {
        SpriteFrame::cell(SheetId::Bullet, 2, 0, 1)
    } else {
        SpriteFrame::cell(SheetId::Bullet, 2, 0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DIRECTIONS: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];
    const ALL_ACTIVITIES: [Activity; 5] = [
        Activity::Idle,
        Activity::Run,
        Activity::Shoot,
        Activity::Hit,
        Activity::Dead,
    ];

    #[test]
    fn test_frame_index_holds_each_frame() {
        let clip = player_frame(Direction::Right, Activity::Idle);
        assert_eq!(clip.frames, 4);

        // Held for 4 ticks per frame
        assert_eq!(clip.frame_index(0), 0);
        assert_eq!(clip.frame_index(3), 0);
        assert_eq!(clip.frame_index(4), 1);
        assert_eq!(clip.frame_index(15), 3);
        // Wraps after frames² ticks
        assert_eq!(clip.frame_index(16), 0);
    }

    #[test]
    fn test_source_rect_walks_the_strip() {
        let clip = player_frame(Direction::Left, Activity::Run);
        assert_eq!(clip.origin, IVec2::new(0, 128));

        let rect = clip.source_rect(6 * 2);
        assert_eq!(rect.min, IVec2::new(64, 128));
        assert_eq!(rect.size, IVec2::new(32, 32));
    }

    #[test]
    fn test_every_player_clip_is_on_the_vaxerman_sheet() {
        for direction in ALL_DIRECTIONS {
            for activity in ALL_ACTIVITIES {
                let clip = player_frame(direction, activity);
                assert_eq!(clip.sheet, SheetId::VaxerMan);
                assert!(clip.frames >= 1);
                assert_eq!(clip.size, IVec2::splat(SPRITE_SIZE));
            }
        }
    }

    #[test]
    fn test_up_shoot_is_shorter() {
        assert_eq!(player_frame(Direction::Up, Activity::Shoot).frames, 4);
        assert_eq!(player_frame(Direction::Down, Activity::Shoot).frames, 5);
    }

    #[test]
    fn test_bullet_orientation() {
        assert_eq!(bullet_frame(Direction::Left), bullet_frame(Direction::Right));
        assert_eq!(bullet_frame(Direction::Up), bullet_frame(Direction::Down));
        assert_ne!(bullet_frame(Direction::Up), bullet_frame(Direction::Right));
    }

    #[test]
    fn test_enemy_hit_clip() {
        let clip = enemy_frame(EnemyStatus::Hit);
        assert_eq!(clip.frames, 4);
        assert_eq!(clip.origin, IVec2::new(0, 32));
        assert_eq!(enemy_frame(EnemyStatus::Dead).origin, IVec2::new(32, 0));
    }
}
