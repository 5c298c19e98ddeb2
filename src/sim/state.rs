//! Game state and core simulation types
//!
//! Every actor carries exactly one `Direction` and one `Activity`; the enums
//! make mixed states unrepresentable.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::sprite::{SpriteFrame, bullet_frame, enemy_frame, player_frame};
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{screen_center, screen_size};

/// Facing/travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
    Up,
    Down,
}

impl Direction {
    /// Order movement input is polled in; the last held direction wins
    pub const POLL_ORDER: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Unit step in screen space (y grows downward)
    pub const fn unit(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
        }
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// What an actor is doing; selects the animation clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Activity {
    #[default]
    Idle,
    Run,
    /// Transient, lasts one Shoot clip
    Shoot,
    /// Transient, set on the tick of an infection
    Hit,
    /// Terminal until restart
    Dead,
}

/// Enemy lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyStatus {
    Alive,
    /// Shot; plays the hit clip once before dying
    Hit,
    Dead,
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: IVec2,
    pub vel: IVec2,
    pub direction: Direction,
    pub activity: Activity,
    /// Animation tick counter
    pub frame_count: u32,
    pub health: u32,
    /// Ticks until the next shot is allowed
    pub fire_cooldown: u32,
    /// Remaining ticks of the Shoot clip. Firing restarts `frame_count`
    /// and holds Shoot until every frame of the strip has shown once.
    pub shoot_ticks: u32,
}

impl Player {
    pub fn new(pos: IVec2, health: u32) -> Self {
        Self {
            pos,
            vel: IVec2::ZERO,
            direction: Direction::Right,
            activity: Activity::Idle,
            frame_count: 0,
            health,
            fire_cooldown: 0,
            shoot_ticks: 0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.activity == Activity::Dead
    }

    pub fn sprite(&self) -> SpriteFrame {
        player_frame(self.direction, self.activity)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.sprite().size)
    }

    /// Where bullets leave: half a sprite out in the facing direction
    pub fn muzzle(&self) -> IVec2 {
        let half = self.sprite().size / 2;
        self.pos + self.direction.unit() * half
    }

    /// Apply infection damage. Returns true if this killed the player.
    pub fn infect(&mut self, damage: u32) -> bool {
        if self.is_dead() {
            return false;
        }
        self.health = self.health.saturating_sub(damage);
        if self.health == 0 {
            self.activity = Activity::Dead;
            self.vel = IVec2::ZERO;
            true
        } else {
            self.activity = Activity::Hit;
            false
        }
    }

    /// Health as a whole percentage of `max_health`
    pub fn health_percent(&self, max_health: u32) -> u32 {
        if max_health == 0 {
            return 0;
        }
        let percent = u64::from(self.health.min(max_health)) * 100 / u64::from(max_health);
        percent as u32
    }
}

/// An infected wanderer
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: IVec2,
    pub vel: IVec2,
    pub frame_count: u32,
    /// Ticks spent in the hit clip
    pub hit_frame_count: u32,
    pub status: EnemyStatus,
    /// One-shot: cleared on first contact with the player or when shot
    pub infectious: bool,
}

impl Enemy {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self {
            pos,
            vel,
            frame_count: 0,
            hit_frame_count: 0,
            status: EnemyStatus::Alive,
            infectious: true,
        }
    }

    /// Advance one tick
    pub fn update(&mut self) {
        match self.status {
            EnemyStatus::Dead => return,
            EnemyStatus::Hit => {
                self.hit_frame_count += 1;
                if self.hit_frame_count > self.sprite().frames {
                    self.status = EnemyStatus::Dead;
                    return;
                }
            }
            EnemyStatus::Alive => {}
        }

        self.frame_count += 1;
        self.pos += self.vel;

        let screen = screen_size();
        if self.pos.x < 0 || self.pos.y < 0 || self.pos.x >= screen.x || self.pos.y >= screen.y {
            self.status = EnemyStatus::Dead;
        }
    }

    /// Mark as shot. Returns false if the enemy was not alive.
    pub fn take_hit(&mut self) -> bool {
        if self.status != EnemyStatus::Alive {
            return false;
        }
        self.status = EnemyStatus::Hit;
        self.infectious = false;
        true
    }

    pub fn is_dead(&self) -> bool {
        self.status == EnemyStatus::Dead
    }

    pub fn sprite(&self) -> SpriteFrame {
        enemy_frame(self.status)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.sprite().size)
    }
}

/// A projectile. Direction and speed are fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: IVec2,
    pub frame_count: u32,
    direction: Direction,
    speed: i32,
    hit: bool,
}

impl Bullet {
    pub fn new(pos: IVec2, direction: Direction, speed: i32) -> Self {
        Self {
            pos,
            frame_count: 0,
            direction,
            speed,
            hit: false,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// Flag for removal on the next bullet pass
    pub fn mark_hit(&mut self) {
        self.hit = true;
    }

    /// Move one tick along the fixed direction
    pub fn advance(&mut self) {
        if self.hit {
            return;
        }
        self.pos += self.direction.unit() * self.speed;
        self.frame_count += 1;
    }

    /// False once hit or off any screen edge
    pub fn is_live(&self) -> bool {
        if self.hit {
            return false;
        }
        let screen = screen_size();
        self.pos.x >= 0 && self.pos.x <= screen.x && self.pos.y >= 0 && self.pos.y <= screen.y
    }

    pub fn sprite(&self) -> SpriteFrame {
        bullet_frame(self.direction)
    }
}

/// Notable things that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BulletFired { direction: Direction },
    EnemySpawned { pos: IVec2 },
    EnemyShot { pos: IVec2 },
    PlayerInfected { health: u32 },
    PlayerDied,
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub tuning: Tuning,
    pub player: Player,
    /// Bullets in flight (plus any flagged hit, removed next tick)
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// Simulation tick counter, reset on restart
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            player: Player::new(screen_center(), tuning.player.max_health),
            bullets: Vec::with_capacity(tuning.bullet.max_live),
            enemies: Vec::with_capacity(tuning.enemy.max_alive),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Reinitialise the round. The RNG stream carries on so a restart does
    /// not replay the previous spawns.
    pub fn reset(&mut self) {
        self.player = Player::new(screen_center(), self.tuning.player.max_health);
        self.bullets.clear();
        self.enemies.clear();
        self.time_ticks = 0;
    }

    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn is_game_over(&self) -> bool {
        self.player.is_dead()
    }

    /// Bullets still counting toward the cap
    pub fn live_bullets(&self) -> usize {
        self.bullets.iter().filter(|b| b.is_live()).count()
    }

    pub fn health_percent(&self) -> u32 {
        self.player.health_percent(self.tuning.player.max_health)
    }
}

/// Largest top-left position that keeps a sprite of `size` fully on screen
pub fn player_clamp_max(size: IVec2) -> IVec2 {
    IVec2::new(SCREEN_WIDTH - size.x, SCREEN_HEIGHT - size.y).max(IVec2::ZERO)
}
