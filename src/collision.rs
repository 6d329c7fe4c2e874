/// Collision detection for the shooter
///
/// AABB (Axis-Aligned Bounding Box) tests over the `Collidable` trait plus the
/// two resolution passes the gameplay loop needs: bullets against enemies and
/// the player against enemies.
use sdl2::rect::Rect;

/// Category of a collidable object.
///
/// Used by the renderer to pick a fallback colour when a sprite is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    /// Player ship
    Player,
    /// Enemy ships
    Enemy,
    /// Player bullets
    Projectile,
}

/// Trait for entities that participate in collision detection.
///
/// The returned `Rect` must match the entity's on-screen position and size.
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn get_bounds(&self) -> Rect;

    /// Returns the collision layer this entity belongs to.
    fn get_collision_layer(&self) -> CollisionLayer;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two rectangles intersect if they overlap on both the X and Y axes.
/// Touching edges do not count as an intersection.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// Returns the indices in `entities` whose bounds intersect `entity`.
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(&entity_bounds, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}

/// Removes every bullet/enemy pair that intersects and returns the number of kills.
///
/// Bullets are checked in order. A bullet is matched against the enemies still
/// alive, and the first one it overlaps wins: both are removed and the bullet
/// is not checked against any further enemy.
pub fn resolve_bullet_hits<B: Collidable, E: Collidable>(
    bullets: &mut Vec<B>,
    enemies: &mut Vec<E>,
) -> usize {
    let mut kills = 0;
    let mut bullet_index = 0;

    while bullet_index < bullets.len() {
        let bullet_bounds = bullets[bullet_index].get_bounds();
        let hit = enemies
            .iter()
            .position(|enemy| aabb_intersect(&bullet_bounds, &enemy.get_bounds()));

        match hit {
            Some(enemy_index) => {
                bullets.remove(bullet_index);
                enemies.remove(enemy_index);
                kills += 1;
            }
            None => bullet_index += 1,
        }
    }

    kills
}

/// Removes every enemy touching the player and returns how many were removed.
pub fn resolve_player_hits<E: Collidable>(player: &impl Collidable, enemies: &mut Vec<E>) -> usize {
    let hits = check_collisions_with_collection(player, enemies);
    for &index in hits.iter().rev() {
        enemies.remove(index);
    }
    hits.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Block(Rect);

    impl Collidable for Block {
        fn get_bounds(&self) -> Rect {
            self.0
        }

        fn get_collision_layer(&self) -> CollisionLayer {
            CollisionLayer::Enemy
        }
    }

    #[test]
    fn test_aabb_intersect_overlapping() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(16, 16, 32, 32);

        assert!(aabb_intersect(&rect_a, &rect_b));
        assert!(aabb_intersect(&rect_b, &rect_a)); // Symmetric
    }

    #[test]
    fn test_aabb_intersect_touching_edges() {
        let rect_a = Rect::new(0, 0, 32, 32);
        let rect_b = Rect::new(32, 0, 32, 32);

        assert!(!aabb_intersect(&rect_a, &rect_b));
    }

    #[test]
    fn test_aabb_intersect_contained() {
        let large = Rect::new(0, 0, 100, 100);
        let small = Rect::new(25, 25, 50, 50);

        assert!(aabb_intersect(&large, &small));
        assert!(aabb_intersect(&small, &large));
    }

    #[test]
    fn test_check_collisions_with_collection() {
        let probe = Block(Rect::new(0, 0, 10, 10));
        let others = vec![
            Block(Rect::new(5, 5, 10, 10)),
            Block(Rect::new(50, 50, 10, 10)),
            Block(Rect::new(-5, -5, 6, 6)),
        ];

        assert_eq!(check_collisions_with_collection(&probe, &others), vec![0, 2]);
    }

    #[test]
    fn test_bullet_removes_only_first_enemy() {
        let mut bullets = vec![Block(Rect::new(10, 10, 8, 32))];
        let mut enemies = vec![
            Block(Rect::new(0, 0, 64, 64)),
            Block(Rect::new(5, 5, 64, 64)),
        ];

        let kills = resolve_bullet_hits(&mut bullets, &mut enemies);

        assert_eq!(kills, 1);
        assert!(bullets.is_empty());
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].0, Rect::new(5, 5, 64, 64));
    }

    #[test]
    fn test_two_bullets_can_share_overlapping_enemies() {
        let mut bullets = vec![
            Block(Rect::new(10, 10, 8, 32)),
            Block(Rect::new(12, 10, 8, 32)),
        ];
        let mut enemies = vec![
            Block(Rect::new(0, 0, 64, 64)),
            Block(Rect::new(5, 5, 64, 64)),
        ];

        assert_eq!(resolve_bullet_hits(&mut bullets, &mut enemies), 2);
        assert!(bullets.is_empty());
        assert!(enemies.is_empty());
    }

    #[test]
    fn test_missing_bullet_survives() {
        let mut bullets = vec![Block(Rect::new(500, 500, 8, 32))];
        let mut enemies = vec![Block(Rect::new(0, 0, 64, 64))];

        assert_eq!(resolve_bullet_hits(&mut bullets, &mut enemies), 0);
        assert_eq!(bullets.len(), 1);
        assert_eq!(enemies.len(), 1);
    }

    #[test]
    fn test_player_hits_remove_touching_enemies() {
        let player = Block(Rect::new(100, 100, 64, 64));
        let mut enemies = vec![
            Block(Rect::new(120, 80, 64, 64)),
            Block(Rect::new(400, 80, 64, 64)),
            Block(Rect::new(90, 150, 64, 64)),
        ];

        assert_eq!(resolve_player_hits(&player, &mut enemies), 2);
        assert_eq!(enemies.len(), 1);
    }
}
