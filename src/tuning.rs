//! Gameplay tuning
//!
//! Balance numbers live here so they can be overridden from the settings
//! file without touching simulation code. Keep this separate from host
//! configuration (window, keys, level path).

use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_WIDTH;

/// Ceiling on starting health
pub const MAX_HEALTH_LIMIT: u32 = 10_000;
/// Ceiling on per-tick movement of any actor
pub const MAX_STEP: i32 = SCREEN_WIDTH / 4;
/// Allowed enemy cap range
pub const ENEMY_CAP_RANGE: (usize, usize) = (3, 5);
/// Ceiling on bullets in flight
pub const MAX_LIVE_BULLETS: usize = 32;

/// Player movement, health and firing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Pixels moved per tick on each held axis
    pub move_step: i32,
    /// Starting health
    pub max_health: u32,
    /// Health lost on each enemy contact
    pub infection_damage: u32,
    /// Ticks between shots
    pub fire_cooldown: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_step: 2,
            max_health: 100,
            infection_damage: 10,
            fire_cooldown: 5,
        }
    }
}

/// Projectiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulletTuning {
    /// Pixels travelled per tick
    pub speed: i32,
    /// Maximum bullets in flight at once
    pub max_live: usize,
}

impl Default for BulletTuning {
    fn default() -> Self {
        Self {
            speed: 5,
            max_live: 3,
        }
    }
}

/// Enemy pool and spawning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Maximum enemies alive at once
    pub max_alive: usize,
    /// Per-tick probability of a spawn while below the cap
    pub spawn_chance: f64,
    /// Inward speed range per axis, inclusive
    pub min_speed: i32,
    pub max_speed: i32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            max_alive: 3,
            spawn_chance: 0.1,
            min_speed: 1,
            max_speed: 2,
        }
    }
}

/// All gameplay tuning
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player: PlayerTuning,
    pub bullet: BulletTuning,
    pub enemy: EnemyTuning,
}

impl Tuning {
    /// Clamp values into the ranges the simulation supports
    pub fn sanitized(mut self) -> Self {
        self.player.move_step = self.player.move_step.clamp(1, MAX_STEP);
        self.player.max_health = self.player.max_health.clamp(1, MAX_HEALTH_LIMIT);

        self.bullet.speed = self.bullet.speed.clamp(1, MAX_STEP);
        self.bullet.max_live = self.bullet.max_live.clamp(1, MAX_LIVE_BULLETS);

        let (min_cap, max_cap) = ENEMY_CAP_RANGE;
        self.enemy.max_alive = self.enemy.max_alive.clamp(min_cap, max_cap);
        self.enemy.spawn_chance = if self.enemy.spawn_chance.is_nan() {
            0.0
        } else {
            self.enemy.spawn_chance.clamp(0.0, 1.0)
        };
        self.enemy.min_speed = self.enemy.min_speed.clamp(1, MAX_STEP);
        self.enemy.max_speed = self.enemy.max_speed.clamp(self.enemy.min_speed, MAX_STEP);

        self
    }
}
