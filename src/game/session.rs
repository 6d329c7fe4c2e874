// GameSession: score, lives and difficulty of the run in progress

use super::types::{Difficulty, ShipChoice};

/// State of one run, created on "start game" and dropped on restart or
/// return to the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    pub score: u32,
    pub lives: u32,
    pub difficulty: Difficulty,
    pub speed_multiplier: f32,
    pub ship: ShipChoice,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, ship: ShipChoice) -> Self {
        GameSession {
            score: 0,
            lives: difficulty.starting_lives(),
            difficulty,
            speed_multiplier: difficulty.speed_multiplier(),
            ship,
        }
    }

    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Takes one life; returns true when none are left
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.is_over()
    }

    pub fn is_over(&self) -> bool {
        self.lives == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_uses_difficulty_table() {
        for difficulty in Difficulty::all() {
            let session = GameSession::new(difficulty, ShipChoice::Ship1);
            assert_eq!(session.score, 0);
            assert_eq!(session.lives, difficulty.starting_lives());
            assert_eq!(session.speed_multiplier, difficulty.speed_multiplier());
        }
    }

    #[test]
    fn test_lives_never_go_negative() {
        let mut session = GameSession::new(Difficulty::Hard, ShipChoice::Ship2);
        assert!(!session.lose_life());
        assert!(!session.lose_life());
        assert!(session.lose_life());
        assert!(session.lose_life());
        assert_eq!(session.lives, 0);
    }
}
