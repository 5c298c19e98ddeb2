//! Per-frame draw pass
//!
//! Draw order: tile layers, enemies, player, bullets, then the text overlay.

use glam::IVec2;

use super::vertex::SpriteInstance;
use crate::level::Level;
use crate::sim::GameState;

/// Overlay text anchored at a screen position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub pos: IVec2,
    pub text: String,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub instances: Vec<SpriteInstance>,
    pub overlay: Vec<TextLine>,
}

impl Frame {
    /// Instance buffer contents for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }
}

pub const HEALTH_TEXT_POS: IVec2 = IVec2::new(4, 4);
pub const DEATH_TEXT_POS: IVec2 = IVec2::new(8, 112);
pub const DEATH_TEXT: &str = "You are dead, press R to restart";

/// Compose the frame for the current state
pub fn build_frame(state: &GameState, level: &Level) -> Frame {
    let mut instances = Vec::with_capacity(
        level.layers().iter().map(Vec::len).sum::<usize>()
            + state.enemies.len()
            + state.bullets.len()
            + 1,
    );

    instances.extend(
        level
            .tiles()
            .map(|tile| SpriteInstance::new(tile.dest, &tile.frame, 0)),
    );

    for enemy in &state.enemies {
        instances.push(SpriteInstance::new(enemy.pos, &enemy.sprite(), enemy.frame_count));
    }

    let player = &state.player;
    instances.push(SpriteInstance::new(player.pos, &player.sprite(), player.frame_count));

    // Spent bullets vanish immediately
    for bullet in state.bullets.iter().filter(|b| !b.is_hit()) {
        instances.push(SpriteInstance::new(bullet.pos, &bullet.sprite(), bullet.frame_count));
    }

    let mut overlay = vec![TextLine {
        pos: HEALTH_TEXT_POS,
        text: format!("Health: {}%", state.health_percent()),
    }];
    if state.is_game_over() {
        overlay.push(TextLine {
            pos: DEATH_TEXT_POS,
            text: DEATH_TEXT.to_string(),
        });
    }

    Frame { instances, overlay }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::TILES_PER_LAYER;
    use crate::sim::{Bullet, Direction, Enemy, SheetId};
    use crate::tuning::Tuning;

    fn setup() -> (GameState, Level) {
        (GameState::new(1, Tuning::default()), Level::builtin().unwrap())
    }

    #[test]
    fn test_draw_order_and_counts() {
        let (mut state, level) = setup();
        state.enemies.push(Enemy::new(IVec2::new(10, 10), IVec2::ZERO));
        state.bullets.push(Bullet::new(IVec2::new(50, 50), Direction::Up, 5));

        let frame = build_frame(&state, &level);
        let tiles = 2 * TILES_PER_LAYER;
        assert_eq!(frame.instances.len(), tiles + 3);

        assert!(frame.instances[..tiles].iter().all(|i| i.sheet == SheetId::Tiles as u32));
        assert_eq!(frame.instances[tiles].sheet, SheetId::Enemy as u32);
        assert_eq!(frame.instances[tiles + 1].sheet, SheetId::VaxerMan as u32);
        assert_eq!(frame.instances[tiles + 1].dest, [120.0, 120.0]);
        // Vertical bullet samples the second row
        assert_eq!(frame.instances[tiles + 2].src_origin, [0.0, 32.0]);
    }

    #[test]
    fn test_hit_bullets_not_drawn() {
        let (mut state, level) = setup();
        let mut bullet = Bullet::new(IVec2::new(50, 50), Direction::Left, 5);
        bullet.mark_hit();
        state.bullets.push(bullet);

        let frame = build_frame(&state, &level);
        assert!(frame.instances.iter().all(|i| i.sheet != SheetId::Bullet as u32));
    }

    #[test]
    fn test_overlay() {
        let (mut state, level) = setup();
        let frame = build_frame(&state, &level);
        assert_eq!(frame.overlay.len(), 1);
        assert_eq!(frame.overlay[0].text, "Health: 100%");

        state.player.infect(100);
        let frame = build_frame(&state, &level);
        assert_eq!(frame.overlay[0].text, "Health: 0%");
        assert_eq!(frame.overlay[1].text, DEATH_TEXT);
    }

    #[test]
    fn test_as_bytes_len() {
        let (state, level) = setup();
        let frame = build_frame(&state, &level);
        assert_eq!(
            frame.as_bytes().len(),
            frame.instances.len() * std::mem::size_of::<SpriteInstance>()
        );
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 32);
    }

    #[test]
    fn test_tile_sources() {
        let (state, level) = setup();
        let frame = build_frame(&state, &level);
        // First tile of the ground layer is 243
        assert_eq!(frame.instances[0].src_origin, [288.0, 144.0]);
        assert_eq!(frame.instances[0].src_size, [16.0, 16.0]);
        assert_eq!(frame.instances[1].dest, [16.0, 0.0]);
    }
}
