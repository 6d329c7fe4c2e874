// Widget bundles, one per screen
//
// Each bundle owns the widgets of its screen and turns pointer input into a
// UiCommand. The controller decides what a command means; bundles never
// change screens themselves.

use crate::config::GameConfig;
use crate::gui::{Button, ButtonStyle, Checkbox, Dropdown, PointerPos, Slider, TextField, palette};
use crate::save::MAX_NAME_LEN;
use crate::text::TextSize;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use super::types::{Difficulty, SCREEN_WIDTH, Screen, ShipChoice, TestSound};

const CENTER_X: i32 = SCREEN_WIDTH as i32 / 2;
const PASSWORD_MAX_LEN: usize = 20;

/// What a click on a screen asked for
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiCommand {
    // Main menu
    Start,
    OpenLeaderboard,
    OpenSettings,
    RequestQuit,

    // Run setup
    SelectDifficulty(Difficulty),
    SelectShip(ShipChoice),

    // Shared
    Back,

    // Pause overlay
    Resume,
    ReturnToMenu,

    // Leaderboard
    ShowTab(Difficulty),
    RequestReset,

    // Name and password entry
    Submit,
    Skip,

    // Game over / quit confirm
    Restart,
    ConfirmQuit,

    // Settings
    VolumesChanged,
    SfxReleased,
    TestSoundChanged(TestSound),
    FullscreenToggled(bool),
}

fn small_button(x: i32, y: i32, w: u32, h: u32, label: &str) -> Button {
    Button::with_style(
        x,
        y,
        w,
        h,
        label,
        ButtonStyle {
            text_size: TextSize::Small,
            ..Default::default()
        },
    )
}

fn back_button() -> Button {
    small_button(50, 50, 150, 50, "BACK")
}

fn first_hit(buttons: &[(&Button, UiCommand)], pointer: PointerPos) -> Option<UiCommand> {
    buttons
        .iter()
        .find(|(button, _)| button.is_clicked(pointer))
        .map(|(_, command)| *command)
}

fn hover_all<'a>(buttons: impl IntoIterator<Item = &'a mut Button>, pointer: PointerPos) {
    for button in buttons {
        button.check_hover(pointer);
    }
}

fn render_all<'a>(
    buttons: impl IntoIterator<Item = &'a Button>,
    canvas: &mut Canvas<Window>,
) -> Result<(), String> {
    for button in buttons {
        button.render(canvas)?;
    }
    Ok(())
}

pub struct MainMenuScreen {
    pub start: Button,
    pub leaderboard: Button,
    pub settings: Button,
    pub quit: Button,
}

impl MainMenuScreen {
    fn new() -> Self {
        let x = CENTER_X - 150;
        MainMenuScreen {
            start: Button::new(x, 300, 300, 60, "START"),
            leaderboard: Button::new(x, 380, 300, 60, "LEADERBOARD"),
            settings: Button::new(x, 460, 300, 60, "SETTINGS"),
            quit: Button::new(x, 540, 300, 60, "QUIT"),
        }
    }

    pub fn click(&self, pointer: PointerPos) -> Option<UiCommand> {
        first_hit(
            &[
                (&self.start, UiCommand::Start),
                (&self.leaderboard, UiCommand::OpenLeaderboard),
                (&self.settings, UiCommand::OpenSettings),
                (&self.quit, UiCommand::RequestQuit),
            ],
            pointer,
        )
    }

    fn buttons_mut(&mut self) -> [&mut Button; 4] {
        [&mut self.start, &mut self.leaderboard, &mut self.settings, &mut self.quit]
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        render_all([&self.start, &self.leaderboard, &self.settings, &self.quit], canvas)
    }
}

pub struct DifficultyScreen {
    /// In `Difficulty::all()` order
    pub options: [Button; 3],
    pub back: Button,
}

impl DifficultyScreen {
    fn new() -> Self {
        let x = CENTER_X - 150;
        DifficultyScreen {
            options: Difficulty::all()
                .map(|d| Button::new(x, 260 + d as i32 * 100, 300, 60, d.name())),
            back: back_button(),
        }
    }

    pub fn click(&self, pointer: PointerPos) -> Option<UiCommand> {
        if self.back.is_clicked(pointer) {
            return Some(UiCommand::Back);
        }
        Difficulty::all()
            .into_iter()
            .zip(&self.options)
            .find(|(_, button)| button.is_clicked(pointer))
            .map(|(difficulty, _)| UiCommand::SelectDifficulty(difficulty))
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        render_all(self.options.iter().chain([&self.back]), canvas)
    }
}

pub struct CharacterScreen {
    /// In `ShipChoice::all()` order
    pub select: [Button; 3],
    pub previews: [Rect; 3],
    pub back: Button,
}

impl CharacterScreen {
    fn new() -> Self {
        let column_x = |i: usize| CENTER_X - 270 + i as i32 * 180;
        CharacterScreen {
            select: ShipChoice::all().map(|s| small_button(column_x(s.index()), 450, 150, 50, "SELECT")),
            previews: ShipChoice::all().map(|s| Rect::new(column_x(s.index()), 250, 150, 150)),
            back: back_button(),
        }
    }

    pub fn click(&self, pointer: PointerPos) -> Option<UiCommand> {
        if self.back.is_clicked(pointer) {
            return Some(UiCommand::Back);
        }
        ShipChoice::all()
            .into_iter()
            .zip(&self.select)
            .find(|(_, button)| button.is_clicked(pointer))
            .map(|(ship, _)| UiCommand::SelectShip(ship))
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        render_all(self.select.iter().chain([&self.back]), canvas)
    }
}

pub struct SettingsScreen {
    pub sfx: Slider,
    pub music: Slider,
    pub test_sound: Dropdown,
    pub fullscreen: Checkbox,
    pub back: Button,
}

impl SettingsScreen {
    fn new(config: &GameConfig) -> Self {
        let x = CENTER_X - 200;
        let options = TestSound::all().iter().map(|s| s.label().to_string()).collect();
        let selected = TestSound::all()
            .iter()
            .position(|s| *s == config.test_sound)
            .unwrap_or(0);
        SettingsScreen {
            sfx: Slider::new(x, 250, 400, 20, 0.0, 100.0, config.sfx_volume as f32, "SFX Volume"),
            music: Slider::new(x, 350, 400, 20, 0.0, 100.0, config.music_volume as f32, "Music Volume"),
            test_sound: Dropdown::new(x, 470, 400, 40, "Test Sound", options, selected),
            fullscreen: Checkbox::new(CENTER_X - 100, 570, 30, "Fullscreen Mode", config.fullscreen),
            back: Button::new(CENTER_X - 100, 650, 200, 50, "BACK"),
        }
    }

    /// Selected test sound
    pub fn selected_test_sound(&self) -> TestSound {
        TestSound::all()[self.test_sound.selected().min(TestSound::all().len() - 1)]
    }

    /// An open dropdown swallows the click, wherever it lands
    pub fn pointer_down(&mut self, pointer: PointerPos) -> Option<UiCommand> {
        if self.test_sound.is_open() || self.test_sound.captures(pointer) {
            return self
                .test_sound
                .handle_click(pointer)
                .then(|| UiCommand::TestSoundChanged(self.selected_test_sound()));
        }
        if self.back.is_clicked(pointer) {
            return Some(UiCommand::Back);
        }
        if self.fullscreen.handle_click(pointer) {
            return Some(UiCommand::FullscreenToggled(self.fullscreen.is_checked()));
        }
        if self.sfx.handle_pointer_down(pointer) || self.music.handle_pointer_down(pointer) {
            return Some(UiCommand::VolumesChanged);
        }
        None
    }

    pub fn pointer_move(&mut self, pointer: PointerPos) -> Option<UiCommand> {
        let sfx_moved = self.sfx.handle_pointer_move(pointer);
        let music_moved = self.music.handle_pointer_move(pointer);
        (sfx_moved || music_moved).then_some(UiCommand::VolumesChanged)
    }

    pub fn pointer_up(&mut self) -> Option<UiCommand> {
        let sfx_released = self.sfx.handle_pointer_up();
        self.music.handle_pointer_up();
        sfx_released.then_some(UiCommand::SfxReleased)
    }

    /// Reset transient widget state when the screen is left. Returns the
    /// commit of a drag that was still in progress.
    pub fn leave(&mut self) -> Option<UiCommand> {
        self.test_sound.close();
        self.pointer_up()
    }

    fn check_hover(&mut self, pointer: PointerPos) {
        self.test_sound.check_hover(pointer);
        self.fullscreen.check_hover(pointer);
        self.back.check_hover(pointer);
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.sfx.render(canvas)?;
        self.music.render(canvas)?;
        self.fullscreen.render(canvas)?;
        self.back.render(canvas)?;
        // Drawn last so the open list covers the widgets below it
        self.test_sound.render(canvas)
    }
}

pub struct PauseScreen {
    pub resume: Button,
    pub settings: Button,
    pub menu: Button,
}

impl PauseScreen {
    fn new() -> Self {
        let x = CENTER_X - 150;
        PauseScreen {
            resume: Button::new(x, 330, 300, 60, "RESUME"),
            settings: Button::new(x, 410, 300, 60, "SETTINGS"),
            menu: Button::new(x, 490, 300, 60, "MENU"),
        }
    }

    pub fn click(&self, pointer: PointerPos) -> Option<UiCommand> {
        first_hit(
            &[
                (&self.resume, UiCommand::Resume),
                (&self.settings, UiCommand::OpenSettings),
                (&self.menu, UiCommand::ReturnToMenu),
            ],
            pointer,
        )
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        render_all([&self.resume, &self.settings, &self.menu], canvas)
    }
}

pub struct LeaderboardScreen {
    /// Difficulty whose board is shown
    pub tab: Difficulty,
    pub tabs: [Button; 3],
    pub reset: Button,
    pub back: Button,
}

impl LeaderboardScreen {
    fn new() -> Self {
        let reset_style = ButtonStyle {
            color: palette::RED,
            text_size: TextSize::Small,
            ..Default::default()
        };
        LeaderboardScreen {
            tab: Difficulty::Easy,
            tabs: Difficulty::all()
                .map(|d| small_button(CENTER_X - 300 + d as i32 * 210, 130, 180, 50, d.name())),
            reset: Button::with_style(1080, 50, 150, 50, "RESET", reset_style),
            back: back_button(),
        }
    }

    pub fn click(&self, pointer: PointerPos) -> Option<UiCommand> {
        if self.back.is_clicked(pointer) {
            return Some(UiCommand::Back);
        }
        if self.reset.is_clicked(pointer) {
            return Some(UiCommand::RequestReset);
        }
        Difficulty::all()
            .into_iter()
            .zip(&self.tabs)
            .find(|(_, button)| button.is_clicked(pointer))
            .map(|(difficulty, _)| UiCommand::ShowTab(difficulty))
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        render_all(self.tabs.iter().chain([&self.reset, &self.back]), canvas)
    }
}

/// Shared shape of the name and password screens
pub struct EntryScreen {
    pub field: TextField,
    pub submit: Button,
    /// SKIP on the name screen, CANCEL on the password screen
    pub dismiss: Button,
    /// Inline validation message
    pub error: Option<String>,
}

impl EntryScreen {
    fn new(field: TextField, dismiss_label: &str) -> Self {
        let y = field.rect.bottom() + 40;
        EntryScreen {
            field,
            submit: Button::new(CENTER_X - 200, y, 190, 60, "SUBMIT"),
            dismiss: Button::new(CENTER_X + 10, y, 190, 60, dismiss_label),
            error: None,
        }
    }

    fn name_entry() -> Self {
        EntryScreen::new(TextField::new(CENTER_X - 200, 320, 400, 60, MAX_NAME_LEN), "SKIP")
    }

    fn password_entry() -> Self {
        EntryScreen::new(
            TextField::new(CENTER_X - 200, 300, 400, 60, PASSWORD_MAX_LEN).masked(),
            "CANCEL",
        )
    }

    /// Empty field, no message
    pub fn reset(&mut self) {
        self.field.clear();
        self.error = None;
    }

    pub fn click(&self, pointer: PointerPos) -> Option<UiCommand> {
        first_hit(
            &[(&self.submit, UiCommand::Submit), (&self.dismiss, UiCommand::Skip)],
            pointer,
        )
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        self.field.render(canvas)?;
        render_all([&self.submit, &self.dismiss], canvas)
    }
}

pub struct GameOverScreen {
    pub restart: Button,
    pub menu: Button,
}

impl GameOverScreen {
    fn new() -> Self {
        GameOverScreen {
            restart: Button::new(CENTER_X - 250, 400, 200, 60, "RESTART"),
            menu: Button::new(CENTER_X + 50, 400, 200, 60, "MENU"),
        }
    }

    pub fn click(&self, pointer: PointerPos) -> Option<UiCommand> {
        first_hit(
            &[(&self.restart, UiCommand::Restart), (&self.menu, UiCommand::ReturnToMenu)],
            pointer,
        )
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        render_all([&self.restart, &self.menu], canvas)
    }
}

pub struct QuitConfirmScreen {
    pub yes: Button,
    pub no: Button,
}

impl QuitConfirmScreen {
    fn new() -> Self {
        let style = |color| ButtonStyle {
            color,
            ..Default::default()
        };
        QuitConfirmScreen {
            yes: Button::with_style(CENTER_X - 200, 350, 150, 60, "YES", style(palette::RED)),
            no: Button::with_style(CENTER_X + 50, 350, 150, 60, "NO", style(palette::GREEN)),
        }
    }

    pub fn click(&self, pointer: PointerPos) -> Option<UiCommand> {
        first_hit(
            &[(&self.yes, UiCommand::ConfirmQuit), (&self.no, UiCommand::Back)],
            pointer,
        )
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        render_all([&self.yes, &self.no], canvas)
    }
}

/// Widgets of every screen
pub struct Screens {
    pub main_menu: MainMenuScreen,
    pub difficulty: DifficultyScreen,
    pub character: CharacterScreen,
    pub settings: SettingsScreen,
    pub pause: PauseScreen,
    pub leaderboard: LeaderboardScreen,
    pub name_entry: EntryScreen,
    pub password_entry: EntryScreen,
    pub game_over: GameOverScreen,
    pub quit_confirm: QuitConfirmScreen,
}

impl Screens {
    pub fn new(config: &GameConfig) -> Self {
        Screens {
            main_menu: MainMenuScreen::new(),
            difficulty: DifficultyScreen::new(),
            character: CharacterScreen::new(),
            settings: SettingsScreen::new(config),
            pause: PauseScreen::new(),
            leaderboard: LeaderboardScreen::new(),
            name_entry: EntryScreen::name_entry(),
            password_entry: EntryScreen::password_entry(),
            game_over: GameOverScreen::new(),
            quit_confirm: QuitConfirmScreen::new(),
        }
    }

    /// Button click on any screen except SETTINGS, which needs the full
    /// down/move/up sequence
    pub fn click(&self, screen: Screen, pointer: PointerPos) -> Option<UiCommand> {
        match screen {
            Screen::MainMenu => self.main_menu.click(pointer),
            Screen::DifficultySelect => self.difficulty.click(pointer),
            Screen::CharacterSelect => self.character.click(pointer),
            Screen::Settings => None,
            Screen::Playing { paused: true } => self.pause.click(pointer),
            Screen::Playing { paused: false } => None,
            Screen::Leaderboard => self.leaderboard.click(pointer),
            Screen::NameEntry => self.name_entry.click(pointer),
            Screen::PasswordEntry => self.password_entry.click(pointer),
            Screen::GameOver => self.game_over.click(pointer),
            Screen::QuitConfirm => self.quit_confirm.click(pointer),
        }
    }

    /// Refresh hover state of the visible screen's widgets
    pub fn check_hover(&mut self, screen: Screen, pointer: PointerPos) {
        match screen {
            Screen::MainMenu => hover_all(self.main_menu.buttons_mut(), pointer),
            Screen::DifficultySelect => {
                hover_all(self.difficulty.options.iter_mut().chain([&mut self.difficulty.back]), pointer)
            }
            Screen::CharacterSelect => {
                hover_all(self.character.select.iter_mut().chain([&mut self.character.back]), pointer)
            }
            Screen::Settings => self.settings.check_hover(pointer),
            Screen::Playing { paused: true } => hover_all(
                [&mut self.pause.resume, &mut self.pause.settings, &mut self.pause.menu],
                pointer,
            ),
            Screen::Playing { paused: false } => {}
            Screen::Leaderboard => hover_all(
                self.leaderboard
                    .tabs
                    .iter_mut()
                    .chain([&mut self.leaderboard.reset, &mut self.leaderboard.back]),
                pointer,
            ),
            Screen::NameEntry => hover_all(
                [&mut self.name_entry.submit, &mut self.name_entry.dismiss],
                pointer,
            ),
            Screen::PasswordEntry => hover_all(
                [&mut self.password_entry.submit, &mut self.password_entry.dismiss],
                pointer,
            ),
            Screen::GameOver => hover_all([&mut self.game_over.restart, &mut self.game_over.menu], pointer),
            Screen::QuitConfirm => {
                hover_all([&mut self.quit_confirm.yes, &mut self.quit_confirm.no], pointer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screens() -> Screens {
        Screens::new(&GameConfig::with_path("unused.ini"))
    }

    fn center(button: &Button) -> PointerPos {
        let c = button.rect.center();
        (c.x(), c.y())
    }

    #[test]
    fn test_main_menu_buttons() {
        let s = screens();
        assert_eq!(
            s.click(Screen::MainMenu, center(&s.main_menu.start)),
            Some(UiCommand::Start)
        );
        assert_eq!(
            s.click(Screen::MainMenu, center(&s.main_menu.quit)),
            Some(UiCommand::RequestQuit)
        );
        assert_eq!(s.click(Screen::MainMenu, (5, 5)), None);
    }

    #[test]
    fn test_difficulty_and_ship_buttons_carry_choice() {
        let s = screens();
        assert_eq!(
            s.click(Screen::DifficultySelect, center(&s.difficulty.options[2])),
            Some(UiCommand::SelectDifficulty(Difficulty::Hard))
        );
        assert_eq!(
            s.click(Screen::CharacterSelect, center(&s.character.select[1])),
            Some(UiCommand::SelectShip(ShipChoice::Ship2))
        );
        assert_eq!(
            s.click(Screen::CharacterSelect, center(&s.character.back)),
            Some(UiCommand::Back)
        );
    }

    #[test]
    fn test_pause_buttons_only_when_paused() {
        let s = screens();
        let resume = center(&s.pause.resume);
        assert_eq!(
            s.click(Screen::Playing { paused: true }, resume),
            Some(UiCommand::Resume)
        );
        assert_eq!(s.click(Screen::Playing { paused: false }, resume), None);
    }

    #[test]
    fn test_settings_initialised_from_config() {
        let mut config = GameConfig::with_path("unused.ini");
        config.sfx_volume = 70;
        config.test_sound = TestSound::Explosion;
        config.fullscreen = true;

        let s = Screens::new(&config);
        assert_eq!(s.settings.sfx.value(), 70.0);
        assert_eq!(s.settings.music.value(), 20.0);
        assert_eq!(s.settings.selected_test_sound(), TestSound::Explosion);
        assert!(s.settings.fullscreen.is_checked());
    }

    #[test]
    fn test_settings_slider_drag_and_release() {
        let mut s = screens();
        let track = s.settings.sfx.track;
        let y = track.center().y();

        assert_eq!(
            s.settings.pointer_down((track.x() + 100, y)),
            Some(UiCommand::VolumesChanged)
        );
        assert_eq!(s.settings.pointer_move((track.x() + 300, y)), Some(UiCommand::VolumesChanged));
        assert_eq!(s.settings.sfx.value(), 75.0);
        assert_eq!(s.settings.pointer_up(), Some(UiCommand::SfxReleased));
        assert_eq!(s.settings.pointer_up(), None);
    }

    #[test]
    fn test_music_release_is_not_sfx_release() {
        let mut s = screens();
        let track = s.settings.music.track;
        s.settings.pointer_down((track.x() + 10, track.center().y()));
        assert_eq!(s.settings.pointer_up(), None);
    }

    #[test]
    fn test_open_dropdown_swallows_click() {
        let mut s = screens();
        let dropdown = s.settings.test_sound.rect;
        let box_center = (dropdown.center().x(), dropdown.center().y());
        assert_eq!(s.settings.pointer_down(box_center), None);
        assert!(s.settings.test_sound.is_open());

        // The fullscreen checkbox is under the open list; the list wins
        let checkbox = s.settings.fullscreen.rect;
        s.settings.pointer_down((checkbox.x() + 5, checkbox.y() + 5));
        assert!(!s.settings.fullscreen.is_checked());
        assert!(!s.settings.test_sound.is_open());
    }

    #[test]
    fn test_dropdown_change_reports_sound() {
        let mut s = screens();
        let dropdown = s.settings.test_sound.rect;
        s.settings.pointer_down((dropdown.center().x(), dropdown.center().y()));

        let explosion = s.settings.test_sound.option_rect(1).center();
        assert_eq!(
            s.settings.pointer_down((explosion.x(), explosion.y())),
            Some(UiCommand::TestSoundChanged(TestSound::Explosion))
        );
    }

    #[test]
    fn test_leaving_settings_ends_drag_and_closes_list() {
        let mut s = screens();
        let track = s.settings.sfx.track;
        s.settings.pointer_down((track.x() + 50, track.center().y()));
        assert_eq!(s.settings.leave(), Some(UiCommand::SfxReleased));

        let dropdown = s.settings.test_sound.rect;
        s.settings.pointer_down((dropdown.center().x(), dropdown.center().y()));
        assert_eq!(s.settings.leave(), None);
        assert!(!s.settings.test_sound.is_open());
    }

    #[test]
    fn test_checkbox_reports_new_state() {
        let mut s = screens();
        let checkbox = s.settings.fullscreen.rect;
        assert_eq!(
            s.settings.pointer_down((checkbox.x() + 5, checkbox.y() + 5)),
            Some(UiCommand::FullscreenToggled(true))
        );
    }

    #[test]
    fn test_entry_screens() {
        let s = screens();
        assert_eq!(
            s.click(Screen::NameEntry, center(&s.name_entry.submit)),
            Some(UiCommand::Submit)
        );
        assert_eq!(
            s.click(Screen::PasswordEntry, center(&s.password_entry.dismiss)),
            Some(UiCommand::Skip)
        );
        assert_eq!(s.password_entry.dismiss.label, "CANCEL");
    }

    #[test]
    fn test_leaderboard_tabs() {
        let s = screens();
        assert_eq!(
            s.click(Screen::Leaderboard, center(&s.leaderboard.tabs[1])),
            Some(UiCommand::ShowTab(Difficulty::Medium))
        );
        assert_eq!(
            s.click(Screen::Leaderboard, center(&s.leaderboard.reset)),
            Some(UiCommand::RequestReset)
        );
    }

    #[test]
    fn test_hover_only_touches_visible_screen() {
        let mut s = screens();
        let start = center(&s.main_menu.start);
        s.check_hover(Screen::MainMenu, start);
        assert!(s.main_menu.start.is_hovered());

        s.check_hover(Screen::GameOver, (0, 0));
        assert!(s.main_menu.start.is_hovered());
    }
}
