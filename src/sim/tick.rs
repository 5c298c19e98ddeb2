//! Fixed timestep simulation tick
//!
//! Core game loop: player, bullets, enemies, collisions, spawning.

use glam::IVec2;

use super::collision::{bullet_hits_enemy, enemy_infects_player};
use super::spawn::maybe_spawn_enemy;
use super::sprite::player_frame;
use super::state::{Activity, Bullet, Direction, GameEvent, GameState, player_clamp_max};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire key newly pressed this tick
    pub fire: bool,
    /// Restart key newly pressed this tick
    pub restart: bool,
}

impl TickInput {
    /// Whether movement in `direction` is held
    pub fn holds(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.restart && state.is_game_over() {
        state.reset();
        state.events.push(GameEvent::Restarted);
        log::info!("Game restarted");
        return;
    }

    state.time_ticks += 1;

    update_player(state, input);
    update_bullets(state);

    for enemy in &mut state.enemies {
        enemy.update();
    }

    resolve_bullet_hits(state);
    resolve_infections(state);

    // Rebuild the pool without the dead
    state.enemies.retain(|e| !e.is_dead());

    maybe_spawn_enemy(state);

    for event in &state.events {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
    }
}

fn update_player(state: &mut GameState, input: &TickInput) {
    let GameState {
        player,
        bullets,
        events,
        tuning,
        ..
    } = state;

    if player.is_dead() {
        return;
    }

    // Baseline: standing still
    player.vel = IVec2::ZERO;
    player.activity = Activity::Idle;

    for direction in Direction::POLL_ORDER {
        if input.holds(direction) {
            player.direction = direction;
            player.activity = Activity::Run;
            player.vel += direction.unit() * tuning.player.move_step;
        }
    }

    let live = bullets.iter().filter(|b| b.is_live()).count();
    if input.fire && player.fire_cooldown == 0 && live < tuning.bullet.max_live {
        bullets.push(Bullet::new(
            player.muzzle(),
            player.direction,
            tuning.bullet.speed,
        ));
        player.fire_cooldown = tuning.player.fire_cooldown;
        // Restart the strip; the counter reads 1..frames² while it plays
        let clip = player_frame(player.direction, Activity::Shoot).frames;
        player.frame_count = 0;
        player.shoot_ticks = clip * clip - 1;
        events.push(GameEvent::BulletFired {
            direction: player.direction,
        });
    }

    if player.fire_cooldown > 0 {
        player.fire_cooldown -= 1;
    }

    if player.shoot_ticks > 0 {
        player.shoot_ticks -= 1;
        player.activity = Activity::Shoot;
    }

    player.frame_count += 1;
    player.pos += player.vel;

    // Hard clamp to the screen, inset by the sprite
    let max = player_clamp_max(player.sprite().size);
    player.pos = player.pos.clamp(IVec2::ZERO, max);
}

fn update_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.advance();
    }
    state.bullets.retain(Bullet::is_live);
}

/// First bullet (in iteration order) to land on an alive enemy wins it
fn resolve_bullet_hits(state: &mut GameState) {
    let GameState {
        bullets,
        enemies,
        events,
        ..
    } = state;

    for bullet in bullets.iter_mut() {
        let Some(enemy) = enemies.iter_mut().find(|e| bullet_hits_enemy(bullet, e)) else {
            continue;
        };
        enemy.take_hit();
        bullet.mark_hit();
        events.push(GameEvent::EnemyShot { pos: enemy.pos });
    }
}

fn resolve_infections(state: &mut GameState) {
    let GameState {
        player,
        enemies,
        events,
        tuning,
        time_ticks,
        ..
    } = state;

    for enemy in enemies.iter_mut() {
        if !enemy_infects_player(enemy, player) {
            continue;
        }
        let died = player.infect(tuning.player.infection_damage);
        events.push(GameEvent::PlayerInfected {
            health: player.health,
        });
        if died {
            events.push(GameEvent::PlayerDied);
            log::info!("Player died after {time_ticks} ticks");
            break;
        }
    }
}
