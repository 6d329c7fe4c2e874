// GameWorld struct and the per-tick gameplay update
//
// GameWorld owns the session and every entity on the playfield. The controller
// calls `tick` once per frame while playing and unpaused, and reacts to the
// returned TickOutcome (sounds, game-over routing).

use crate::collision::{resolve_bullet_hits, resolve_player_hits};
use crate::entities::{Bullet, Enemy, Player, SpriteMetrics};
use rand::Rng;

use super::session::GameSession;
use super::types::{ENEMY_SPAWN_DELAY, POINTS_PER_KILL, SCREEN_WIDTH};

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Enemies destroyed by bullets
    pub kills: u32,
    /// Lives lost to enemies crossing the bottom edge or hitting the player
    pub lives_lost: u32,
    /// The last life was lost during this tick
    pub game_over: bool,
}

/// Everything on the playfield during a run
pub struct GameWorld {
    pub session: GameSession,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub spawn_timer: u32,
    metrics: SpriteMetrics,
}

impl GameWorld {
    pub fn new(session: GameSession, metrics: SpriteMetrics) -> Self {
        let player = Player::spawn(metrics.ships[session.ship.index()]);
        GameWorld {
            session,
            player,
            bullets: Vec::new(),
            enemies: Vec::new(),
            spawn_timer: 0,
            metrics,
        }
    }

    /// Apply held movement keys for one tick
    pub fn move_player(&mut self, left: bool, right: bool) {
        if left {
            self.player.move_left();
        }
        if right {
            self.player.move_right();
        }
    }

    /// Fire one bullet from the player's nose
    pub fn fire(&mut self) {
        let (x, y) = self.player.muzzle();
        self.bullets.push(Bullet::new(x, y, self.metrics.bullet));
    }

    /// Spawn one enemy just above the top edge at a random horizontal offset
    pub fn spawn_enemy(&mut self, rng: &mut impl Rng) {
        let (width, height) = self.metrics.enemy;
        let max_x = SCREEN_WIDTH.saturating_sub(width);
        let x = rng.gen_range(0..=max_x) as f32;
        self.enemies.push(Enemy::new(
            x,
            -(height as f32),
            self.metrics.enemy,
            self.session.speed_multiplier,
        ));
    }

    /// Advance the simulation by one frame.
    ///
    /// Order: move bullets, move enemies (bottom crossings cost a life), run
    /// the spawn timer, then resolve collisions. Processing stops as soon as
    /// the last life is lost.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        for bullet in self.bullets.iter_mut() {
            bullet.update();
        }
        self.bullets.retain(|bullet| !bullet.is_off_screen());

        for enemy in self.enemies.iter_mut() {
            enemy.update();
        }
        let before = self.enemies.len();
        self.enemies.retain(|enemy| !enemy.is_off_screen());
        let escaped = (before - self.enemies.len()) as u32;
        if self.take_lives(escaped, &mut outcome) {
            return outcome;
        }

        self.spawn_timer += 1;
        if self.spawn_timer >= ENEMY_SPAWN_DELAY {
            self.spawn_enemy(rng);
            self.spawn_timer = 0;
        }

        let kills = resolve_bullet_hits(&mut self.bullets, &mut self.enemies) as u32;
        outcome.kills = kills;
        self.session.add_points(kills * POINTS_PER_KILL);

        let rammed = resolve_player_hits(&self.player, &mut self.enemies) as u32;
        self.take_lives(rammed, &mut outcome);

        outcome
    }

    fn take_lives(&mut self, count: u32, outcome: &mut TickOutcome) -> bool {
        for _ in 0..count {
            outcome.lives_lost += 1;
            if self.session.lose_life() {
                outcome.game_over = true;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Difficulty, SCREEN_HEIGHT, ShipChoice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn make_world(difficulty: Difficulty) -> GameWorld {
        GameWorld::new(
            GameSession::new(difficulty, ShipChoice::Ship1),
            SpriteMetrics::default(),
        )
    }

    fn enemy_at(x: f32, y: f32) -> Enemy {
        // Zero speed keeps the enemy where the test put it
        Enemy::new(x, y, (64, 64), 0.0)
    }

    #[test]
    fn test_bullet_hit_awards_points() {
        let mut world = make_world(Difficulty::Easy);
        world.bullets.push(Bullet::new(120.0, 207.0, (8, 32)));
        world.enemies.push(enemy_at(100.0, 180.0));

        let outcome = world.tick(&mut seeded_rng());

        assert_eq!(outcome.kills, 1);
        assert_eq!(world.session.score, 10);
        assert!(world.bullets.is_empty());
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_bullet_over_two_enemies_removes_first_only() {
        let mut world = make_world(Difficulty::Easy);
        world.bullets.push(Bullet::new(120.0, 207.0, (8, 32)));
        world.enemies.push(enemy_at(100.0, 180.0));
        world.enemies.push(enemy_at(110.0, 190.0));

        let outcome = world.tick(&mut seeded_rng());

        assert_eq!(outcome.kills, 1);
        assert_eq!(world.session.score, 10);
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.enemies[0].x, 110.0);
    }

    #[test]
    fn test_bullets_leave_at_top() {
        let mut world = make_world(Difficulty::Easy);
        world.bullets.push(Bullet::new(10.0, -30.0, (8, 32)));
        world.bullets.push(Bullet::new(10.0, 300.0, (8, 32)));

        world.tick(&mut seeded_rng());

        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].y, 293.0);
    }

    #[test]
    fn test_enemy_crossing_bottom_costs_one_life() {
        let mut world = make_world(Difficulty::Medium);
        world
            .enemies
            .push(Enemy::new(0.0, SCREEN_HEIGHT as f32, (64, 64), 1.0));

        let outcome = world.tick(&mut seeded_rng());

        assert_eq!(outcome.lives_lost, 1);
        assert!(!outcome.game_over);
        assert_eq!(world.session.lives, 4);
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut world = make_world(Difficulty::Hard);
        world.session.lives = 1;
        world
            .enemies
            .push(Enemy::new(0.0, SCREEN_HEIGHT as f32, (64, 64), 1.0));
        world
            .enemies
            .push(Enemy::new(200.0, SCREEN_HEIGHT as f32, (64, 64), 1.0));

        let outcome = world.tick(&mut seeded_rng());

        assert!(outcome.game_over);
        assert_eq!(outcome.lives_lost, 1);
        assert_eq!(world.session.lives, 0);
        // Spawn timer is not advanced once the game has ended
        assert_eq!(world.spawn_timer, 0);
    }

    #[test]
    fn test_player_collision_removes_enemy_and_life() {
        let mut world = make_world(Difficulty::Easy);
        let (px, py) = (world.player.x, world.player.y);
        world.enemies.push(enemy_at(px + 10.0, py + 10.0));

        let outcome = world.tick(&mut seeded_rng());

        assert_eq!(outcome.lives_lost, 1);
        assert_eq!(world.session.lives, 6);
        assert!(world.enemies.is_empty());
        assert_eq!(world.session.score, 0);
    }

    #[test]
    fn test_spawn_after_delay() {
        let mut world = make_world(Difficulty::Easy);
        let mut rng = seeded_rng();

        for _ in 0..ENEMY_SPAWN_DELAY - 1 {
            world.tick(&mut rng);
        }
        assert!(world.enemies.is_empty());

        world.tick(&mut rng);
        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.spawn_timer, 0);

        let enemy = &world.enemies[0];
        assert_eq!(enemy.y, -64.0);
        assert!(enemy.x >= 0.0 && enemy.x <= (SCREEN_WIDTH - 64) as f32);
    }

    #[test]
    fn test_fire_spawns_bullet_at_muzzle() {
        let mut world = make_world(Difficulty::Easy);
        world.fire();

        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].x, world.player.x + 28.0);
        assert_eq!(world.bullets[0].y, world.player.y);
    }

    #[test]
    fn test_move_player_both_keys_cancel_out() {
        let mut world = make_world(Difficulty::Easy);
        let start = world.player.x;
        world.move_player(true, true);
        assert_eq!(world.player.x, start);
    }
}
