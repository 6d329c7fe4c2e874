// Rendering: draws the controller's current screen
//
// Nothing here mutates game state. Entities without a loaded texture are
// drawn as rectangles coloured by their collision layer.

use crate::assets::TextureStore;
use crate::audio::AudioSink;
use crate::collision::{Collidable, CollisionLayer};
use crate::gui::palette;
use crate::save::MAX_ENTRIES;
use crate::text::{TextSize, draw_simple_text, draw_text_centered, text_width};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture};
use sdl2::video::Window;

use super::controller::Game;
use super::types::{SCREEN_HEIGHT, SCREEN_WIDTH, Screen, ShipChoice};
use super::world::GameWorld;

const CENTER_X: i32 = SCREEN_WIDTH as i32 / 2;
const MENU_DIM_ALPHA: u8 = 150;
const PAUSE_DIM_ALPHA: u8 = 180;
const PREVIEW_IMAGE_SIZE: u32 = 120;

/// Fill colour for an entity drawn without its sprite
pub fn fallback_color(layer: CollisionLayer) -> Color {
    match layer {
        CollisionLayer::Player => palette::GREEN,
        CollisionLayer::Projectile => palette::RED,
        CollisionLayer::Enemy => palette::WHITE,
    }
}

/// Draw the frame for the controller's current screen
pub fn render_game<A: AudioSink>(
    canvas: &mut Canvas<Window>,
    game: &Game<A>,
    textures: &TextureStore,
) -> Result<(), String> {
    let screen = game.screen();
    let is_playing = matches!(screen, Screen::Playing { .. });
    draw_background(canvas, textures, if is_playing { None } else { Some(MENU_DIM_ALPHA) })?;

    match screen {
        Screen::MainMenu => draw_main_menu(canvas, game)?,
        Screen::DifficultySelect => draw_difficulty_select(canvas, game)?,
        Screen::CharacterSelect => draw_character_select(canvas, game, textures)?,
        Screen::Settings => {
            draw_title(canvas, "SETTINGS", 120)?;
            game.screens.settings.render(canvas)?;
        }
        Screen::Playing { paused } => {
            if let Some(world) = game.world() {
                draw_playfield(canvas, world, textures)?;
                draw_hud(canvas, game, world)?;
            }
            if paused {
                draw_pause_overlay(canvas, game)?;
            }
        }
        Screen::Leaderboard => draw_leaderboard(canvas, game)?,
        Screen::NameEntry => draw_name_entry(canvas, game)?,
        Screen::PasswordEntry => draw_password_entry(canvas, game)?,
        Screen::GameOver => draw_game_over(canvas, game)?,
        Screen::QuitConfirm => draw_quit_confirm(canvas, game)?,
    }

    canvas.present();
    Ok(())
}

fn dim(canvas: &mut Canvas<Window>, alpha: u8) -> Result<(), String> {
    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(0, 0, 0, alpha));
    canvas.fill_rect(Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT))?;
    canvas.set_blend_mode(BlendMode::None);
    Ok(())
}

/// Background image (or black), optionally darkened for menus
fn draw_background(
    canvas: &mut Canvas<Window>,
    textures: &TextureStore,
    dim_alpha: Option<u8>,
) -> Result<(), String> {
    canvas.set_draw_color(palette::BLACK);
    canvas.clear();
    if let Some(background) = textures.background.loaded() {
        canvas.copy(background, None, Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT))?;
    }
    if let Some(alpha) = dim_alpha {
        dim(canvas, alpha)?;
    }
    Ok(())
}

fn draw_title(canvas: &mut Canvas<Window>, text: &str, y: i32) -> Result<(), String> {
    draw_text_centered(canvas, text, CENTER_X, y, palette::YELLOW, TextSize::Large)
}

fn draw_entity(
    canvas: &mut Canvas<Window>,
    entity: &impl Collidable,
    texture: Option<&Texture>,
) -> Result<(), String> {
    let bounds = entity.get_bounds();
    match texture {
        Some(texture) => canvas.copy(texture, None, bounds),
        None => {
            canvas.set_draw_color(fallback_color(entity.get_collision_layer()));
            canvas.fill_rect(bounds)
        }
    }
}

fn draw_playfield(
    canvas: &mut Canvas<Window>,
    world: &GameWorld,
    textures: &TextureStore,
) -> Result<(), String> {
    draw_entity(canvas, &world.player, textures.ship(world.session.ship))?;
    for bullet in &world.bullets {
        draw_entity(canvas, bullet, textures.bullet.loaded())?;
    }
    for enemy in &world.enemies {
        draw_entity(canvas, enemy, textures.enemy.loaded())?;
    }
    Ok(())
}

fn draw_hud<A: AudioSink>(
    canvas: &mut Canvas<Window>,
    game: &Game<A>,
    world: &GameWorld,
) -> Result<(), String> {
    let session = &world.session;
    let medium = TextSize::Medium.scale();
    let small = TextSize::Small.scale();

    draw_simple_text(canvas, &format!("SCORE: {}", session.score), 10, 10, palette::YELLOW, medium)?;
    draw_simple_text(canvas, &format!("LIVES: {}", session.lives), 10, 45, palette::WHITE, small)?;

    let difficulty = session.difficulty.name();
    let best = format!("BEST: {}", game.high_scores().get(session.difficulty));
    for (line, y) in [(difficulty, 10), (best.as_str(), 35)] {
        let x = SCREEN_WIDTH as i32 - 10 - text_width(line, small) as i32;
        draw_simple_text(canvas, line, x, y, palette::WHITE, small)?;
    }
    Ok(())
}

fn draw_pause_overlay<A: AudioSink>(canvas: &mut Canvas<Window>, game: &Game<A>) -> Result<(), String> {
    dim(canvas, PAUSE_DIM_ALPHA)?;
    draw_text_centered(canvas, "PAUSED", CENTER_X, 200, palette::YELLOW, TextSize::Title)?;
    draw_text_centered(
        canvas,
        "Game is paused - choose an option",
        CENTER_X,
        280,
        palette::WHITE,
        TextSize::Small,
    )?;
    game.screens.pause.render(canvas)
}

fn draw_main_menu<A: AudioSink>(canvas: &mut Canvas<Window>, game: &Game<A>) -> Result<(), String> {
    draw_text_centered(canvas, "SPACE SHOOTER", CENTER_X, 150, palette::YELLOW, TextSize::Title)?;
    draw_text_centered(
        canvas,
        "Arrows move - Space fires - Esc pauses",
        CENTER_X,
        220,
        palette::WHITE,
        TextSize::Small,
    )?;
    game.screens.main_menu.render(canvas)
}

fn draw_difficulty_select<A: AudioSink>(
    canvas: &mut Canvas<Window>,
    game: &Game<A>,
) -> Result<(), String> {
    draw_title(canvas, "SELECT DIFFICULTY", 150)?;
    let screen = &game.screens.difficulty;
    screen.render(canvas)?;

    let small = TextSize::Small.scale();
    for (difficulty, button) in super::types::Difficulty::all().into_iter().zip(&screen.options) {
        let info = format!(
            "{} LIVES  x{:.2} SPEED",
            difficulty.starting_lives(),
            difficulty.speed_multiplier()
        );
        let y = button.rect.center().y() - 7;
        draw_simple_text(canvas, &info, button.rect.right() + 20, y, palette::LIGHT_GRAY, small)?;
    }
    Ok(())
}

fn draw_character_select<A: AudioSink>(
    canvas: &mut Canvas<Window>,
    game: &Game<A>,
    textures: &TextureStore,
) -> Result<(), String> {
    draw_title(canvas, "SELECT YOUR SHIP", 120)?;
    let screen = &game.screens.character;

    for (ship, preview) in ShipChoice::all().into_iter().zip(screen.previews) {
        canvas.set_draw_color(palette::DARK_BLUE);
        canvas.fill_rect(preview)?;

        let outline = if ship == game.selected_ship() {
            palette::WHITE
        } else {
            palette::GRAY
        };
        canvas.set_draw_color(outline);
        for inset in 0..3 {
            canvas.draw_rect(Rect::new(
                preview.x() + inset,
                preview.y() + inset,
                preview.width() - 2 * inset as u32,
                preview.height() - 2 * inset as u32,
            ))?;
        }

        if let Some(texture) = textures.ship(ship) {
            let image = Rect::from_center(preview.center(), PREVIEW_IMAGE_SIZE, PREVIEW_IMAGE_SIZE);
            canvas.copy(texture, None, image)?;
        }

        draw_text_centered(
            canvas,
            ship.name(),
            preview.center().x(),
            preview.bottom() + 30,
            palette::WHITE,
            TextSize::Small,
        )?;
    }

    screen.render(canvas)
}

fn draw_leaderboard<A: AudioSink>(canvas: &mut Canvas<Window>, game: &Game<A>) -> Result<(), String> {
    draw_title(canvas, "LEADERBOARD", 80)?;
    let screen = &game.screens.leaderboard;
    screen.render(canvas)?;

    // Highlight the active tab
    let active = &screen.tabs[screen.tab as usize];
    canvas.set_draw_color(palette::YELLOW);
    for grow in 1..=3 {
        let rect = active.rect;
        canvas.draw_rect(Rect::new(
            rect.x() - grow,
            rect.y() - grow,
            rect.width() + 2 * grow as u32,
            rect.height() + 2 * grow as u32,
        ))?;
    }

    let small = TextSize::Small.scale();
    let (rank_x, name_x, score_x) = (CENTER_X - 260, CENTER_X - 140, CENTER_X + 160);
    draw_simple_text(canvas, "RANK", rank_x, 210, palette::GRAY, small)?;
    draw_simple_text(canvas, "NAME", name_x, 210, palette::GRAY, small)?;
    draw_simple_text(canvas, "SCORE", score_x, 210, palette::GRAY, small)?;

    let entries = game.leaderboards().entries(screen.tab);
    if entries.is_empty() {
        draw_text_centered(canvas, "NO SCORES YET", CENTER_X, 400, palette::WHITE, TextSize::Medium)?;
    }
    for (i, entry) in entries.iter().take(MAX_ENTRIES).enumerate() {
        let y = 250 + i as i32 * 36;
        let color = if i == 0 { palette::YELLOW } else { palette::WHITE };
        draw_simple_text(canvas, &format!("{}.", i + 1), rank_x, y, color, small)?;
        draw_simple_text(canvas, &entry.name, name_x, y, color, small)?;
        draw_simple_text(canvas, &entry.score.to_string(), score_x, y, color, small)?;
    }

    draw_text_centered(
        canvas,
        &format!("BEST: {}", game.high_scores().get(screen.tab)),
        CENTER_X,
        640,
        palette::YELLOW,
        TextSize::Small,
    )
}

fn draw_entry_error(canvas: &mut Canvas<Window>, error: Option<&str>, y: i32) -> Result<(), String> {
    match error {
        Some(message) => draw_text_centered(canvas, message, CENTER_X, y, palette::RED, TextSize::Small),
        None => Ok(()),
    }
}

fn draw_name_entry<A: AudioSink>(canvas: &mut Canvas<Window>, game: &Game<A>) -> Result<(), String> {
    draw_text_centered(canvas, "NEW HIGH SCORE!", CENTER_X, 160, palette::YELLOW, TextSize::Large)?;
    if let Some(run) = game.last_run() {
        draw_text_centered(
            canvas,
            &format!("{} POINTS ON {}", run.score, run.difficulty.name()),
            CENTER_X,
            230,
            palette::WHITE,
            TextSize::Medium,
        )?;
    }
    draw_text_centered(canvas, "ENTER YOUR NAME", CENTER_X, 290, palette::WHITE, TextSize::Small)?;

    let screen = &game.screens.name_entry;
    screen.render(canvas)?;
    draw_entry_error(canvas, screen.error.as_deref(), screen.submit.rect.bottom() + 40)
}

fn draw_password_entry<A: AudioSink>(
    canvas: &mut Canvas<Window>,
    game: &Game<A>,
) -> Result<(), String> {
    draw_title(canvas, "ADMIN PASSWORD", 160)?;
    draw_text_centered(
        canvas,
        "Required to reset all leaderboards",
        CENTER_X,
        230,
        palette::WHITE,
        TextSize::Small,
    )?;

    let screen = &game.screens.password_entry;
    screen.render(canvas)?;
    draw_entry_error(canvas, screen.error.as_deref(), screen.submit.rect.bottom() + 40)
}

fn draw_game_over<A: AudioSink>(canvas: &mut Canvas<Window>, game: &Game<A>) -> Result<(), String> {
    draw_text_centered(canvas, "GAME OVER", CENTER_X, 200, palette::RED, TextSize::Title)?;
    if let Some(run) = game.last_run() {
        draw_text_centered(
            canvas,
            &format!("FINAL SCORE: {}", run.score),
            CENTER_X,
            310,
            palette::WHITE,
            TextSize::Large,
        )?;
        if run.new_best {
            draw_text_centered(canvas, "NEW BEST!", CENTER_X, 355, palette::YELLOW, TextSize::Small)?;
        }
    }
    game.screens.game_over.render(canvas)
}

fn draw_quit_confirm<A: AudioSink>(canvas: &mut Canvas<Window>, game: &Game<A>) -> Result<(), String> {
    draw_title(canvas, "ARE YOU SURE?", 220)?;
    draw_text_centered(
        canvas,
        "Do you want to quit the game?",
        CENTER_X,
        290,
        palette::WHITE,
        TextSize::Small,
    )?;
    game.screens.quit_confirm.render(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_colors_match_entity_roles() {
        assert_eq!(fallback_color(CollisionLayer::Player), palette::GREEN);
        assert_eq!(fallback_color(CollisionLayer::Projectile), palette::RED);
        assert_eq!(fallback_color(CollisionLayer::Enemy), palette::WHITE);
    }
}
