//! Asset loading with explicit fallbacks
//!
//! Every load site returns an [`AssetLoad`] so callers can tell a real asset
//! from a fallback. Nothing here is fatal: a missing image becomes a coloured
//! rectangle, a missing sound becomes silence.

use crate::entities::{
    BULLET_FALLBACK_SIZE, BULLET_MAX_WIDTH, ENEMY_FALLBACK_SIZE, ENEMY_MAX_WIDTH,
    PLAYER_FALLBACK_SIZE, PLAYER_MAX_WIDTH, SpriteMetrics, scaled_size,
};
use crate::game::types::ShipChoice;
use log::{info, warn};
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;
use std::path::{Path, PathBuf};

const BACKGROUND_CANDIDATES: [&str; 3] = ["background.avif", "background.png", "background.jpg"];
const BULLET_IMAGE: &str = "bullet.png";
const ENEMY_IMAGE: &str = "enemy.png";

/// Outcome of loading one asset
#[derive(Debug)]
pub enum AssetLoad<T> {
    Loaded(T),
    /// Not available; the reason is kept for logging
    Fallback(String),
}

impl<T> AssetLoad<T> {
    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(asset) => AssetLoad::Loaded(asset),
            Err(reason) => AssetLoad::Fallback(reason),
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            AssetLoad::Loaded(asset) => Some(asset),
            AssetLoad::Fallback(_) => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, AssetLoad::Loaded(_))
    }

    /// Log a fallback under the given asset name
    pub fn logged(self, name: &str) -> Self {
        match &self {
            AssetLoad::Loaded(_) => info!("Loaded {}", name),
            AssetLoad::Fallback(reason) => warn!("{} unavailable, using fallback: {}", name, reason),
        }
        self
    }
}

/// Asset directory layout: `<root>/Images`, `<root>/Audio`
#[derive(Debug, Clone)]
pub struct AssetPaths {
    root: PathBuf,
}

impl AssetPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        AssetPaths { root: root.into() }
    }

    pub fn image(&self, file: &str) -> PathBuf {
        self.root.join("Images").join(file)
    }

    #[cfg_attr(not(feature = "audio"), allow(dead_code))]
    pub fn audio(&self, file: &str) -> PathBuf {
        self.root.join("Audio").join(file)
    }

    /// First existing audio file among the candidates
    #[cfg_attr(not(feature = "audio"), allow(dead_code))]
    pub fn first_audio(&self, candidates: &[&str]) -> Option<PathBuf> {
        candidates
            .iter()
            .map(|file| self.audio(file))
            .find(|path| path.is_file())
    }
}

/// Generic texture loading helper
///
/// Loads a texture from the given path with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    path: &Path,
) -> AssetLoad<Texture<'a>> {
    AssetLoad::from_result(
        texture_creator
            .load_texture(path)
            .map_err(|e| format!("Failed to load {}: {}", path.display(), e)),
    )
}

/// Every texture the renderer draws
pub struct TextureStore<'a> {
    pub background: AssetLoad<Texture<'a>>,
    pub ships: [AssetLoad<Texture<'a>>; 3],
    pub bullet: AssetLoad<Texture<'a>>,
    pub enemy: AssetLoad<Texture<'a>>,
}

impl<'a> TextureStore<'a> {
    pub fn load(texture_creator: &'a TextureCreator<WindowContext>, paths: &AssetPaths) -> Self {
        let background = BACKGROUND_CANDIDATES
            .iter()
            .map(|file| load_texture(texture_creator, &paths.image(file)))
            .find(AssetLoad::is_loaded)
            .unwrap_or_else(|| AssetLoad::Fallback("no background image found".to_string()))
            .logged("background");

        let ships = ShipChoice::all().map(|ship| {
            load_texture(texture_creator, &paths.image(ship.image_file())).logged(ship.image_file())
        });

        TextureStore {
            background,
            ships,
            bullet: load_texture(texture_creator, &paths.image(BULLET_IMAGE)).logged(BULLET_IMAGE),
            enemy: load_texture(texture_creator, &paths.image(ENEMY_IMAGE)).logged(ENEMY_IMAGE),
        }
    }

    pub fn ship(&self, ship: ShipChoice) -> Option<&Texture<'a>> {
        self.ships[ship.index()].loaded()
    }

    /// Entity sizes derived from the loaded images
    pub fn metrics(&self) -> SpriteMetrics {
        let size = |load: &AssetLoad<Texture<'a>>| {
            load.loaded().map(|texture| {
                let query = texture.query();
                (query.width, query.height)
            })
        };
        metrics_from_sizes(
            [size(&self.ships[0]), size(&self.ships[1]), size(&self.ships[2])],
            size(&self.bullet),
            size(&self.enemy),
        )
    }
}

/// Scale natural image sizes to their entity limits, substituting the
/// fallback box for images that failed to load
pub fn metrics_from_sizes(
    ships: [Option<(u32, u32)>; 3],
    bullet: Option<(u32, u32)>,
    enemy: Option<(u32, u32)>,
) -> SpriteMetrics {
    let fit = |size: Option<(u32, u32)>, max_width: u32, fallback: (u32, u32)| {
        size.map(|(w, h)| scaled_size(w, h, max_width))
            .unwrap_or(fallback)
    };
    SpriteMetrics {
        ships: ships.map(|size| fit(size, PLAYER_MAX_WIDTH, PLAYER_FALLBACK_SIZE)),
        bullet: fit(bullet, BULLET_MAX_WIDTH, BULLET_FALLBACK_SIZE),
        enemy: fit(enemy, ENEMY_MAX_WIDTH, ENEMY_FALLBACK_SIZE),
    }
}
