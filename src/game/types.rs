// Shared enums and lookup tables used throughout the game

use serde::{Deserialize, Serialize};

/// Logical screen size. The canvas is scaled to the window by SDL2.
pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 720;

/// Points awarded for every enemy destroyed by a bullet
pub const POINTS_PER_KILL: u32 = 10;

/// Ticks between two enemy spawns
pub const ENEMY_SPAWN_DELAY: u32 = 60;

/// Fixed credential that authorizes a leaderboard reset
pub const ADMIN_PASSWORD: &str = "admin123";

/// Screen the controller is currently showing
///
/// Exactly one of these is active at any time. `Playing` carries the paused
/// sub-flag so the pause overlay cannot exist outside of gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    DifficultySelect,
    CharacterSelect,
    Settings,
    Playing { paused: bool },
    Leaderboard,
    NameEntry,
    PasswordEntry,
    GameOver,
    QuitConfirm,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::MainMenu => "MAIN_MENU",
            Screen::DifficultySelect => "DIFFICULTY_SELECT",
            Screen::CharacterSelect => "CHARACTER_SELECT",
            Screen::Settings => "SETTINGS",
            Screen::Playing { paused: false } => "PLAYING",
            Screen::Playing { paused: true } => "PLAYING (PAUSED)",
            Screen::Leaderboard => "LEADERBOARD",
            Screen::NameEntry => "NAME_ENTRY",
            Screen::PasswordEntry => "PASSWORD_ENTRY",
            Screen::GameOver => "GAME_OVER",
            Screen::QuitConfirm => "QUIT_CONFIRM",
        }
    }

    /// Screens that consume printable characters as text input
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Screen::NameEntry | Screen::PasswordEntry)
    }
}

/// Game difficulty
///
/// Serialized as lowercase keys ("easy", "medium", "hard") so the persisted
/// score documents read naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> [Self; 3] {
        [Self::Easy, Self::Medium, Self::Hard]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "EASY",
            Self::Medium => "MEDIUM",
            Self::Hard => "HARD",
        }
    }

    /// Lives a new session starts with
    pub fn starting_lives(&self) -> u32 {
        match self {
            Self::Easy => 7,
            Self::Medium => 5,
            Self::Hard => 3,
        }
    }

    /// Factor applied to the enemy base speed
    pub fn speed_multiplier(&self) -> f32 {
        match self {
            Self::Easy => 1.0,
            Self::Medium => 1.08,
            Self::Hard => 1.15,
        }
    }
}

/// Selectable player ships
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipChoice {
    Ship1,
    Ship2,
    Ship3,
}

impl ShipChoice {
    pub fn all() -> [Self; 3] {
        [Self::Ship1, Self::Ship2, Self::Ship3]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Ship1 => "SHIP 1",
            Self::Ship2 => "SHIP 2",
            Self::Ship3 => "SHIP 3",
        }
    }

    /// Image file for this ship under the images directory
    pub fn image_file(&self) -> &'static str {
        match self {
            Self::Ship1 => "player.png",
            Self::Ship2 => "player2.PNG",
            Self::Ship3 => "player3.png",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Ship1 => 0,
            Self::Ship2 => 1,
            Self::Ship3 => 2,
        }
    }
}

/// Sound played when the SFX slider is released
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestSound {
    Laser,
    Explosion,
}

impl TestSound {
    pub fn all() -> [Self; 2] {
        [Self::Laser, Self::Explosion]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Laser => "Laser",
            Self::Explosion => "Explosion",
        }
    }

    /// Key used in the settings file
    pub fn key(&self) -> &'static str {
        match self {
            Self::Laser => "laser",
            Self::Explosion => "explosion",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "laser" => Some(Self::Laser),
            "explosion" => Some(Self::Explosion),
            _ => None,
        }
    }

    pub fn sfx(&self) -> Sfx {
        match self {
            Self::Laser => Sfx::Laser,
            Self::Explosion => Sfx::Explosion,
        }
    }
}

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    Laser,
    Explosion,
    GameOver,
    Click,
}

impl Sfx {
    #[cfg_attr(not(feature = "audio"), allow(dead_code))]
    pub fn all() -> [Self; 4] {
        [Self::Laser, Self::Explosion, Self::GameOver, Self::Click]
    }

    #[cfg_attr(not(feature = "audio"), allow(dead_code))]
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Laser => "laser.wav",
            Self::Explosion => "explosion.wav",
            Self::GameOver => "game_over.mp3",
            Self::Click => "click.wav",
        }
    }

    /// Per-clip factor multiplied with the SFX volume
    #[cfg_attr(not(feature = "audio"), allow(dead_code))]
    pub fn volume_factor(&self) -> f32 {
        match self {
            Self::Laser => 1.0,
            Self::Explosion => 0.1,
            Self::GameOver => 0.25,
            Self::Click => 0.3,
        }
    }
}

/// Looping background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    Menu,
    Gameplay,
}

impl MusicTrack {
    /// Candidate files, tried in order
    #[cfg_attr(not(feature = "audio"), allow(dead_code))]
    pub fn file_candidates(&self) -> [&'static str; 3] {
        match self {
            Self::Menu => [
                "main_menu_music.mp3",
                "main_menu_music.ogg",
                "main_menu_music.wav",
            ],
            Self::Gameplay => [
                "background_music.mp3",
                "background_music.ogg",
                "background_music.wav",
            ],
        }
    }
}
