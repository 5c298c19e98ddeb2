//! Enemy spawner
//!
//! Enemies enter from a random screen edge heading inward.

use glam::IVec2;
use rand::Rng;

use super::state::{Enemy, GameEvent, GameState};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::tuning::EnemyTuning;

/// Pick a start position on a screen edge and an inward velocity
pub fn enemy_start<R: Rng>(rng: &mut R, tuning: &EnemyTuning) -> (IVec2, IVec2) {
    let horizontal_edge = rng.random_bool(0.5);
    let near_side = rng.random_bool(0.5);

    let pos = if horizontal_edge {
        let y = if near_side { 0 } else { SCREEN_HEIGHT };
        IVec2::new(rng.random_range(0..SCREEN_WIDTH), y)
    } else {
        let x = if near_side { 0 } else { SCREEN_WIDTH };
        IVec2::new(x, rng.random_range(0..SCREEN_HEIGHT))
    };

    let (min, max) = (tuning.min_speed, tuning.max_speed.max(tuning.min_speed));
    let mut vel = IVec2::new(rng.random_range(min..=max), rng.random_range(min..=max));
    if pos.x > SCREEN_WIDTH / 2 {
        vel.x = -vel.x;
    }
    if pos.y > SCREEN_HEIGHT / 2 {
        vel.y = -vel.y;
    }

    (pos, vel)
}

/// Roll for a new enemy if the pool has room. Returns its start position.
pub fn maybe_spawn_enemy(state: &mut GameState) -> Option<IVec2> {
    let tuning = state.tuning.enemy;
    if state.enemies.len() >= tuning.max_alive {
        return None;
    }
    if !state.rng_mut().random_bool(tuning.spawn_chance) {
        return None;
    }

    let (pos, vel) = enemy_start(state.rng_mut(), &tuning);
    state.enemies.push(Enemy::new(pos, vel));
    state.events.push(GameEvent::EnemySpawned { pos });
    log::debug!("Enemy spawned at {pos} moving {vel}");
    Some(pos)
}
