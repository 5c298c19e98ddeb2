//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per call
//! - Seeded RNG only
//! - Stable iteration order (collections only grow at the end)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod sprite;
pub mod state;
pub mod tick;

pub use collision::{Rect, bullet_hits_enemy, enemy_infects_player};
pub use spawn::{enemy_start, maybe_spawn_enemy};
pub use sprite::{SheetId, SpriteFrame, bullet_frame, enemy_frame, player_frame};
pub use state::{
    Activity, Bullet, Direction, Enemy, EnemyStatus, GameEvent, GameState, Player,
};
pub use tick::{TickInput, tick};
