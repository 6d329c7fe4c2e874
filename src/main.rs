use clap::Parser;
use log::{error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sdl2::keyboard::Scancode;
use sdl2::render::Canvas;
use sdl2::Sdl;
use sdl2::video::{FullscreenType, Window};

mod assets;
mod audio;
mod cli;
mod collision;
mod config;
mod entities;
mod frame_clock;
mod game;
mod gui;
mod input_system;
mod save;
mod text;

use assets::{AssetPaths, TextureStore};
use audio::AudioSink;
use cli::Cli;
use config::GameConfig;
use frame_clock::{FPS, FrameClock};
use game::types::{SCREEN_HEIGHT, SCREEN_WIDTH};
use game::{Game, render_game};
use input_system::InputSystem;
use save::ScoreStore;
use std::path::Path;

/// Open the score store, falling back to the temp directory when the
/// requested one cannot be created
fn open_store(data_dir: &Path) -> Result<ScoreStore, String> {
    ScoreStore::new(data_dir).or_else(|e| {
        let fallback = std::env::temp_dir().join("space-shooter");
        warn!(
            "Cannot use data directory {}: {}; using {}",
            data_dir.display(),
            e,
            fallback.display()
        );
        ScoreStore::new(&fallback).map_err(|e| e.to_string())
    })
}

#[cfg(feature = "audio")]
fn open_audio(sdl_context: &Sdl, paths: &AssetPaths) -> Box<dyn AudioSink> {
    audio::sink_or_silent(audio::MixerAudio::open(sdl_context, paths))
}

#[cfg(not(feature = "audio"))]
fn open_audio(_sdl_context: &Sdl, _paths: &AssetPaths) -> Box<dyn AudioSink> {
    info!("Built without the audio feature, sound disabled");
    Box::new(audio::SilentAudio)
}

/// Bring the window's fullscreen state in line with the settings
fn apply_fullscreen(canvas: &mut Canvas<Window>, fullscreen: bool) -> Result<(), String> {
    let wanted = if fullscreen {
        FullscreenType::Desktop
    } else {
        FullscreenType::Off
    };
    if canvas.window().fullscreen_state() != wanted {
        canvas.window_mut().set_fullscreen(wanted)?;
        info!("Window fullscreen: {}", fullscreen);
    }
    Ok(())
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG | sdl2::image::InitFlag::JPG)?;

    let store = open_store(&cli.data_dir())?;
    let config = GameConfig::load_or_default(cli.config_path());

    let window = video_subsystem
        .window("Space Shooter", SCREEN_WIDTH, SCREEN_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size so drawing and pointer coordinates stay 1280x720
    canvas
        .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
        .map_err(|e| e.to_string())?;
    info!("Window created ({}x{} logical)", SCREEN_WIDTH, SCREEN_HEIGHT);

    let texture_creator = canvas.texture_creator();
    let paths = AssetPaths::new(&cli.assets);
    let textures = TextureStore::load(&texture_creator, &paths);

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let audio = open_audio(&sdl_context, &paths);
    info!("Sound {}", if audio.is_enabled() { "enabled" } else { "disabled" });
    let mut game = Game::new(store, config, audio, rng, textures.metrics());
    if cli.fullscreen {
        game.force_fullscreen();
    }
    let mut input = InputSystem::new();
    let text_input = video_subsystem.text_input();
    let mut event_pump = sdl_context.event_pump()?;
    let mut clock = FrameClock::new(FPS);
    info!("Running at {} FPS ({:?} per frame)", FPS, clock.frame_duration());

    while game.is_running() {
        input.update_context(game.screen());
        if input.context.wants_text_input() != text_input.is_active() {
            if input.context.wants_text_input() {
                text_input.start();
            } else {
                text_input.stop();
            }
        }

        for action in input.poll_events(&mut event_pump) {
            game.handle_action(action);
        }

        let keyboard_state = event_pump.keyboard_state();
        game.update(
            keyboard_state.is_scancode_pressed(Scancode::Left),
            keyboard_state.is_scancode_pressed(Scancode::Right),
        );

        if let Err(e) = apply_fullscreen(&mut canvas, game.fullscreen()) {
            warn!("Fullscreen change refused: {}", e);
            game.fullscreen_failed();
        }
        if let Err(e) = render_game(&mut canvas, &game, &textures) {
            error!("Render failed: {}", e);
            return Err(e);
        }

        clock.tick();
    }

    info!("Goodbye");
    Ok(())
}
