//! Gameplay entities: the player ship, its bullets and the falling enemies.
//!
//! Entities are plain movers: a floating-point position, a size and a
//! constant speed along a fixed direction. They carry no textures; the
//! renderer looks up what to draw by entity type.

use crate::collision::{Collidable, CollisionLayer};
use crate::game::types::{SCREEN_HEIGHT, SCREEN_WIDTH};
use sdl2::rect::Rect;

pub const PLAYER_SPEED: f32 = 8.0;
pub const BULLET_SPEED: f32 = 7.0;
pub const ENEMY_BASE_SPEED: f32 = 2.0;

/// Widest a sprite may be drawn; taller images keep their aspect ratio
pub const PLAYER_MAX_WIDTH: u32 = 80;
pub const BULLET_MAX_WIDTH: u32 = 16;
pub const ENEMY_MAX_WIDTH: u32 = 70;

/// Sizes used when an image could not be loaded
pub const PLAYER_FALLBACK_SIZE: (u32, u32) = (64, 64);
pub const BULLET_FALLBACK_SIZE: (u32, u32) = (8, 32);
pub const ENEMY_FALLBACK_SIZE: (u32, u32) = (64, 64);

/// Scale an image down to `max_width`, keeping its aspect ratio.
/// Images already narrow enough keep their size.
pub fn scaled_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    if width > max_width && width > 0 {
        let factor = max_width as f32 / width as f32;
        (max_width, ((height as f32 * factor) as u32).max(1))
    } else {
        (width, height)
    }
}

/// Bounding-box sizes of every entity type, derived from the loaded sprites
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteMetrics {
    /// One entry per selectable ship
    pub ships: [(u32, u32); 3],
    pub bullet: (u32, u32),
    pub enemy: (u32, u32),
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        SpriteMetrics {
            ships: [PLAYER_FALLBACK_SIZE; 3],
            bullet: BULLET_FALLBACK_SIZE,
            enemy: ENEMY_FALLBACK_SIZE,
        }
    }
}

/// Player ship. Moves horizontally only and never leaves the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub speed: f32,
}

impl Player {
    pub fn new(x: f32, y: f32, (width, height): (u32, u32)) -> Self {
        Player {
            x,
            y,
            width,
            height,
            speed: PLAYER_SPEED,
        }
    }

    /// Player at its starting spot near the bottom centre of the screen
    pub fn spawn(size: (u32, u32)) -> Self {
        Player::new(
            (SCREEN_WIDTH / 2) as f32 - 40.0,
            SCREEN_HEIGHT as f32 - 120.0,
            size,
        )
    }

    pub fn move_left(&mut self) {
        self.x = (self.x - self.speed).max(0.0);
    }

    pub fn move_right(&mut self) {
        let max_x = SCREEN_WIDTH.saturating_sub(self.width) as f32;
        self.x = (self.x + self.speed).min(max_x);
    }

    /// Where a freshly fired bullet starts: centred on the ship's nose
    pub fn muzzle(&self) -> (f32, f32) {
        (self.x + (self.width / 2) as f32 - 4.0, self.y)
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x.floor() as i32, self.y.floor() as i32, self.width, self.height)
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        CollisionLayer::Player
    }
}

/// Laser bolt travelling straight up
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub speed: f32,
}

impl Bullet {
    pub fn new(x: f32, y: f32, (width, height): (u32, u32)) -> Self {
        Bullet {
            x,
            y,
            width,
            height,
            speed: BULLET_SPEED,
        }
    }

    pub fn update(&mut self) {
        self.y -= self.speed;
    }

    /// True once the trailing (bottom) edge has passed above the top of the screen
    pub fn is_off_screen(&self) -> bool {
        self.y < -(self.height as f32)
    }
}

impl Collidable for Bullet {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x.floor() as i32, self.y.floor() as i32, self.width, self.height)
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        CollisionLayer::Projectile
    }
}

/// Enemy ship falling straight down
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: u32,
    pub height: u32,
    pub speed: f32,
}

impl Enemy {
    /// `speed_multiplier` comes from the session difficulty
    pub fn new(x: f32, y: f32, (width, height): (u32, u32), speed_multiplier: f32) -> Self {
        Enemy {
            x,
            y,
            width,
            height,
            speed: ENEMY_BASE_SPEED * speed_multiplier,
        }
    }

    pub fn update(&mut self) {
        self.y += self.speed;
    }

    /// True once the enemy has passed the bottom edge
    pub fn is_off_screen(&self) -> bool {
        self.y > SCREEN_HEIGHT as f32
    }
}

impl Collidable for Enemy {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x.floor() as i32, self.y.floor() as i32, self.width, self.height)
    }

    fn get_collision_layer(&self) -> CollisionLayer {
        CollisionLayer::Enemy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_size_shrinks_wide_images() {
        assert_eq!(scaled_size(160, 100, 80), (80, 50));
        assert_eq!(scaled_size(32, 128, 16), (16, 64));
    }

    #[test]
    fn test_scaled_size_keeps_narrow_images() {
        assert_eq!(scaled_size(60, 90, 80), (60, 90));
        assert_eq!(scaled_size(80, 40, 80), (80, 40));
    }

    #[test]
    fn test_player_clamps_left() {
        let mut player = Player::new(3.0, 600.0, (64, 64));
        player.move_left();
        assert_eq!(player.x, 0.0);
    }

    #[test]
    fn test_player_clamps_right() {
        let mut player = Player::new(1210.0, 600.0, (64, 64));
        player.move_right();
        assert_eq!(player.x, (SCREEN_WIDTH - 64) as f32);
    }

    #[test]
    fn test_player_spawn_position() {
        let player = Player::spawn((64, 64));
        assert_eq!(player.x, 600.0);
        assert_eq!(player.y, 600.0);
    }

    #[test]
    fn test_bullet_leaves_after_trailing_edge() {
        let mut bullet = Bullet::new(100.0, -25.0, (8, 32));
        assert!(!bullet.is_off_screen());

        bullet.update(); // y = -32, trailing edge exactly at the top
        assert!(!bullet.is_off_screen());

        bullet.update();
        assert!(bullet.is_off_screen());
    }

    #[test]
    fn test_enemy_speed_scales_with_difficulty() {
        let mut enemy = Enemy::new(0.0, 0.0, (64, 64), 1.15);
        enemy.update();
        assert!((enemy.y - 2.3).abs() < 1e-5);
    }

    #[test]
    fn test_enemy_off_screen_past_bottom() {
        let mut enemy = Enemy::new(0.0, SCREEN_HEIGHT as f32 - 1.0, (64, 64), 1.0);
        assert!(!enemy.is_off_screen());
        enemy.update();
        assert!(enemy.is_off_screen());
    }
}
