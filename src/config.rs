//! Player settings persisted between runs.
//!
//! # Settings File Format
//!
//! ```ini
//! [audio]
//! sfx_volume = 50
//! music_volume = 20
//! test_sound = laser
//!
//! [window]
//! fullscreen = false
//! ```

use crate::game::types::TestSound;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::{Path, PathBuf};

pub const DEFAULT_SFX_VOLUME: u32 = 50;
pub const DEFAULT_MUSIC_VOLUME: u32 = 20;
const DEFAULT_FULLSCREEN: bool = false;
pub const SETTINGS_FILE: &str = "settings.ini";

/// Audio and window settings, volumes in percent (0-100)
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub sfx_volume: u32,
    pub music_volume: u32,
    pub test_sound: TestSound,
    pub fullscreen: bool,
    /// Path to the settings file.
    pub config_path: PathBuf,
}

impl GameConfig {
    /// Defaults, bound to the given settings file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            sfx_volume: DEFAULT_SFX_VOLUME,
            music_volume: DEFAULT_MUSIC_VOLUME,
            test_sound: TestSound::Laser,
            fullscreen: DEFAULT_FULLSCREEN,
            config_path: path.into(),
        }
    }

    /// Defaults overlaid with whatever the file provides. A missing or
    /// unreadable file leaves the defaults in place.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let mut config = Self::with_path(path.as_ref());
        if !config.config_path.exists() {
            info!("{} not found, using default settings", config.config_path.display());
            return config;
        }
        if let Err(e) = config.load_from_file() {
            warn!("{}; using default settings", e);
        }
        config
    }

    /// Load settings from the INI file.
    ///
    /// Missing or out-of-range values retain their current values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load settings file: {}", e))?;

        // [audio] section
        if let Some(volume) = ini.getuint("audio", "sfx_volume").ok().flatten() {
            if volume <= 100 {
                self.sfx_volume = volume as u32;
            }
        }
        if let Some(volume) = ini.getuint("audio", "music_volume").ok().flatten() {
            if volume <= 100 {
                self.music_volume = volume as u32;
            }
        }
        if let Some(sound) = ini.get("audio", "test_sound").as_deref().and_then(TestSound::from_key) {
            self.test_sound = sound;
        }

        // [window] section
        if let Some(fullscreen) = ini.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        info!(
            "Loaded settings: sfx={} music={} test_sound={} fullscreen={}",
            self.sfx_volume,
            self.music_volume,
            self.test_sound.key(),
            self.fullscreen
        );
        Ok(())
    }

    /// Save settings to the INI file.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut ini = Ini::new();

        ini.set("audio", "sfx_volume", Some(self.sfx_volume.to_string()));
        ini.set("audio", "music_volume", Some(self.music_volume.to_string()));
        ini.set("audio", "test_sound", Some(self.test_sound.key().to_string()));
        ini.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        ini.write(&self.config_path)
            .map_err(|e| format!("Failed to save settings file: {}", e))?;

        info!("Saved settings to {:?}", self.config_path);
        Ok(())
    }

    /// SFX volume as a 0.0-1.0 gain
    pub fn sfx_gain(&self) -> f32 {
        self.sfx_volume as f32 / 100.0
    }

    /// Music volume as a 0.0-1.0 gain
    pub fn music_gain(&self) -> f32 {
        self.music_volume as f32 / 100.0
    }
}
