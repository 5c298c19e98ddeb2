//! Collision detection between actors
//!
//! Everything is axis-aligned integer rectangles positioned at the actor's
//! top-left corner and sized by its current sprite frame.

use glam::IVec2;

use super::state::{Bullet, Enemy, EnemyStatus, Player};

/// Axis-aligned rectangle, half-open: `min <= p < min + size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    /// Exclusive bottom-right corner
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    /// True if the rectangles share any area. Touching edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }

    pub fn contains(&self, point: IVec2) -> bool {
        let max = self.max();
        point.x >= self.min.x && point.x < max.x && point.y >= self.min.y && point.y < max.y
    }
}

/// Check whether an enemy infects the player this tick.
///
/// Consumes the enemy's one-shot infection flag on success, so continued
/// overlap on later ticks returns false.
pub fn enemy_infects_player(enemy: &mut Enemy, player: &Player) -> bool {
    if !enemy.infectious || player.is_dead() {
        return false;
    }
    if !enemy.bounds().overlaps(&player.bounds()) {
        return false;
    }

    enemy.infectious = false;
    true
}

/// Check whether a bullet strikes an enemy. Only live bullets and
/// enemies that are still alive are eligible.
pub fn bullet_hits_enemy(bullet: &Bullet, enemy: &Enemy) -> bool {
    bullet.is_live() && enemy.status == EnemyStatus::Alive && enemy.bounds().contains(bullet.pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Direction;

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(IVec2::new(0, 0), IVec2::new(32, 32));
        let b = Rect::new(IVec2::new(31, 31), IVec2::new(32, 32));
        let touching = Rect::new(IVec2::new(32, 0), IVec2::new(32, 32));
        let far = Rect::new(IVec2::new(100, 100), IVec2::new(32, 32));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&touching));
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(IVec2::new(10, 10), IVec2::new(32, 32));
        assert!(r.contains(IVec2::new(10, 10)));
        assert!(r.contains(IVec2::new(41, 41)));
        assert!(!r.contains(IVec2::new(42, 20)));
        assert!(!r.contains(IVec2::new(9, 20)));
    }

    #[test]
    fn test_infection_is_one_shot() {
        let player = Player::new(IVec2::new(100, 100), 100);
        let mut enemy = Enemy::new(IVec2::new(110, 110), IVec2::ZERO);

        assert!(enemy_infects_player(&mut enemy, &player));
        assert!(!enemy.infectious);
        assert!(!enemy_infects_player(&mut enemy, &player));
    }

    #[test]
    fn test_no_infection_without_overlap() {
        let player = Player::new(IVec2::new(100, 100), 100);
        let mut enemy = Enemy::new(IVec2::new(132, 100), IVec2::ZERO);

        assert!(!enemy_infects_player(&mut enemy, &player));
        assert!(enemy.infectious);
    }

    #[test]
    fn test_dead_player_cannot_be_infected() {
        let mut player = Player::new(IVec2::new(100, 100), 10);
        player.infect(10);
        assert!(player.is_dead());

        let mut enemy = Enemy::new(IVec2::new(100, 100), IVec2::ZERO);
        assert!(!enemy_infects_player(&mut enemy, &player));
        assert!(enemy.infectious);
    }

    #[test]
    fn test_bullet_hits_only_alive_enemies() {
        let bullet = Bullet::new(IVec2::new(50, 50), Direction::Right, 5);
        let mut enemy = Enemy::new(IVec2::new(40, 40), IVec2::ZERO);
        assert!(bullet_hits_enemy(&bullet, &enemy));

        enemy.take_hit();
        assert!(!bullet_hits_enemy(&bullet, &enemy));
    }

    #[test]
    fn test_spent_bullet_cannot_hit() {
        let mut bullet = Bullet::new(IVec2::new(50, 50), Direction::Right, 5);
        bullet.mark_hit();
        let enemy = Enemy::new(IVec2::new(40, 40), IVec2::ZERO);
        assert!(!bullet_hits_enemy(&bullet, &enemy));
    }
}
