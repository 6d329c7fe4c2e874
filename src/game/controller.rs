// Game controller: the screen state machine
//
// Game is the application context. It owns the current screen, the widgets,
// the run in progress, the score documents and the audio sink, and it is
// passed explicitly to the renderer; there is no global state.
//
// Input arrives as GameActions. Clicks are turned into UiCommands by the
// screen bundles and applied here, so every transition lives in one place.

use crate::audio::AudioSink;
use crate::config::GameConfig;
use crate::entities::SpriteMetrics;
use crate::gui::PointerPos;
use crate::input_system::GameAction;
use crate::save::{HighScoreTable, LeaderboardEntry, Leaderboards, ScoreStore};
use log::{debug, error, info, warn};
use rand::rngs::StdRng;

use super::screens::{Screens, UiCommand};
use super::session::GameSession;
use super::types::{ADMIN_PASSWORD, Difficulty, MusicTrack, Screen, Sfx, ShipChoice};
use super::world::GameWorld;

/// Result of the last finished run, shown on NAME_ENTRY and GAME_OVER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub difficulty: Difficulty,
    pub score: u32,
    /// The score beat the previous best for its difficulty
    pub new_best: bool,
}

pub struct Game<A: AudioSink> {
    screen: Screen,
    /// Where leaving SETTINGS goes back to
    settings_return_to: Screen,
    pub screens: Screens,
    world: Option<GameWorld>,
    last_run: Option<RunSummary>,
    store: ScoreStore,
    high_scores: HighScoreTable,
    leaderboards: Leaderboards,
    config: GameConfig,
    audio: A,
    current_music: Option<MusicTrack>,
    rng: StdRng,
    metrics: SpriteMetrics,
    selected_difficulty: Difficulty,
    selected_ship: ShipChoice,
    pointer: PointerPos,
    running: bool,
    /// Window state to apply. Differs from `config.fullscreen` after a
    /// command-line override, which is never persisted.
    window_fullscreen: bool,
}

impl<A: AudioSink> Game<A> {
    pub fn new(
        store: ScoreStore,
        config: GameConfig,
        audio: A,
        rng: StdRng,
        metrics: SpriteMetrics,
    ) -> Self {
        let high_scores = store.load_high_scores();
        let leaderboards = store.load_leaderboards();
        let screens = Screens::new(&config);
        let window_fullscreen = config.fullscreen;

        let mut game = Game {
            screen: Screen::MainMenu,
            settings_return_to: Screen::MainMenu,
            screens,
            world: None,
            last_run: None,
            store,
            high_scores,
            leaderboards,
            config,
            audio,
            current_music: None,
            rng,
            metrics,
            selected_difficulty: Difficulty::Easy,
            selected_ship: ShipChoice::Ship1,
            pointer: (0, 0),
            running: true,
            window_fullscreen,
        };
        game.audio
            .set_volumes(game.config.sfx_gain(), game.config.music_gain());
        game.switch_music(MusicTrack::Menu);
        game
    }

    // === Read access for the renderer and the main loop ===

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn world(&self) -> Option<&GameWorld> {
        self.world.as_ref()
    }

    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    pub fn high_scores(&self) -> &HighScoreTable {
        &self.high_scores
    }

    pub fn leaderboards(&self) -> &Leaderboards {
        &self.leaderboards
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn selected_ship(&self) -> ShipChoice {
        self.selected_ship
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the window should currently be fullscreen
    pub fn fullscreen(&self) -> bool {
        self.window_fullscreen
    }

    /// Start fullscreen for this process only; the settings file keeps its value
    pub fn force_fullscreen(&mut self) {
        self.window_fullscreen = true;
        self.screens.settings.fullscreen.set_checked(true);
    }

    /// The window refused the last fullscreen change. Go back to the state
    /// it is still in so the change is not retried every frame.
    pub fn fullscreen_failed(&mut self) {
        self.window_fullscreen = !self.window_fullscreen;
        self.config.fullscreen = self.window_fullscreen;
        self.screens
            .settings
            .fullscreen
            .set_checked(self.window_fullscreen);
    }

    // === Input ===

    pub fn handle_action(&mut self, action: GameAction) {
        match action {
            GameAction::Quit => {
                info!("Window closed");
                self.running = false;
            }
            GameAction::PointerMove(x, y) => {
                self.pointer = (x, y);
                if self.screen == Screen::Settings {
                    if let Some(command) = self.screens.settings.pointer_move(self.pointer) {
                        self.apply(command);
                    }
                }
            }
            GameAction::PointerDown(x, y) => {
                self.pointer = (x, y);
                let command = if self.screen == Screen::Settings {
                    self.screens.settings.pointer_down(self.pointer)
                } else {
                    self.screens.click(self.screen, self.pointer)
                };
                if let Some(command) = command {
                    self.apply(command);
                }
            }
            GameAction::PointerUp(x, y) => {
                self.pointer = (x, y);
                if self.screen == Screen::Settings {
                    if let Some(command) = self.screens.settings.pointer_up() {
                        self.apply(command);
                    }
                }
            }
            GameAction::Fire => self.fire(),
            GameAction::Back => self.back(),
            GameAction::Confirm => {
                if self.screen.is_text_entry() {
                    self.submit();
                }
            }
            GameAction::TypeChar(c) => {
                if let Some(entry) = self.active_entry() {
                    entry.field.push_char(c);
                }
            }
            GameAction::Backspace => {
                if let Some(entry) = self.active_entry() {
                    entry.field.backspace();
                }
            }
        }
        self.screens.check_hover(self.screen, self.pointer);
    }

    /// Advance gameplay by one tick. Does nothing unless actively playing.
    pub fn update(&mut self, held_left: bool, held_right: bool) {
        if self.screen != (Screen::Playing { paused: false }) {
            return;
        }
        let Some(world) = self.world.as_mut() else {
            return;
        };

        world.move_player(held_left, held_right);
        let outcome = world.tick(&mut self.rng);

        for _ in 0..outcome.kills {
            self.audio.play_sfx(Sfx::Explosion);
        }
        if outcome.lives_lost > 0 {
            debug!("Lost {} life(s)", outcome.lives_lost);
        }
        if outcome.game_over {
            self.finish_run();
        }
    }

    // === Transitions ===

    fn set_screen(&mut self, screen: Screen) {
        if screen != self.screen {
            debug!("Screen {} -> {}", self.screen.name(), screen.name());
            self.screen = screen;
        }
    }

    fn apply(&mut self, command: UiCommand) {
        if !matches!(command, UiCommand::VolumesChanged | UiCommand::SfxReleased) {
            self.audio.play_sfx(Sfx::Click);
        }

        match command {
            UiCommand::Start => self.set_screen(Screen::DifficultySelect),
            UiCommand::OpenLeaderboard => {
                self.screens.leaderboard.tab = self.selected_difficulty;
                self.set_screen(Screen::Leaderboard);
            }
            UiCommand::OpenSettings => {
                self.settings_return_to = self.screen;
                self.set_screen(Screen::Settings);
            }
            UiCommand::RequestQuit => self.set_screen(Screen::QuitConfirm),
            UiCommand::SelectDifficulty(difficulty) => {
                self.selected_difficulty = difficulty;
                self.set_screen(Screen::CharacterSelect);
            }
            UiCommand::SelectShip(ship) => {
                self.selected_ship = ship;
                self.start_run();
            }
            UiCommand::Back => self.back(),
            UiCommand::Resume => self.set_screen(Screen::Playing { paused: false }),
            UiCommand::ReturnToMenu => self.return_to_menu(),
            UiCommand::ShowTab(difficulty) => self.screens.leaderboard.tab = difficulty,
            UiCommand::RequestReset => {
                self.screens.password_entry.reset();
                self.set_screen(Screen::PasswordEntry);
            }
            UiCommand::Submit => self.submit(),
            UiCommand::Skip => self.back(),
            UiCommand::Restart => self.start_run(),
            UiCommand::ConfirmQuit => {
                info!("Quit confirmed");
                self.running = false;
            }
            UiCommand::VolumesChanged => {
                self.config.sfx_volume = self.screens.settings.sfx.value().round() as u32;
                self.config.music_volume = self.screens.settings.music.value().round() as u32;
                self.audio
                    .set_volumes(self.config.sfx_gain(), self.config.music_gain());
            }
            UiCommand::SfxReleased => self.audio.play_sfx(self.config.test_sound.sfx()),
            UiCommand::TestSoundChanged(sound) => self.config.test_sound = sound,
            UiCommand::FullscreenToggled(on) => {
                info!("Fullscreen {}", if on { "on" } else { "off" });
                self.config.fullscreen = on;
                self.window_fullscreen = on;
            }
        }
    }

    /// Escape, and the BACK / NO / SKIP / CANCEL buttons
    fn back(&mut self) {
        match self.screen {
            Screen::MainMenu => self.set_screen(Screen::QuitConfirm),
            Screen::DifficultySelect => self.set_screen(Screen::MainMenu),
            Screen::CharacterSelect => self.set_screen(Screen::DifficultySelect),
            Screen::Settings => self.leave_settings(),
            Screen::Playing { paused } => self.set_screen(Screen::Playing { paused: !paused }),
            Screen::Leaderboard => self.set_screen(Screen::MainMenu),
            Screen::NameEntry => self.set_screen(Screen::GameOver),
            Screen::PasswordEntry => self.set_screen(Screen::Leaderboard),
            Screen::GameOver => self.return_to_menu(),
            Screen::QuitConfirm => self.set_screen(Screen::MainMenu),
        }
    }

    fn leave_settings(&mut self) {
        // A drag in progress ends with the screen
        if let Some(command) = self.screens.settings.leave() {
            self.apply(command);
        }
        if let Err(e) = self.config.save_to_file() {
            warn!("{}", e);
        }
        let target = self.settings_return_to;
        self.set_screen(target);
    }

    fn return_to_menu(&mut self) {
        self.world = None;
        self.set_screen(Screen::MainMenu);
        self.switch_music(MusicTrack::Menu);
    }

    fn start_run(&mut self) {
        let session = GameSession::new(self.selected_difficulty, self.selected_ship);
        info!(
            "Starting {} run with {} ({} lives)",
            self.selected_difficulty.name(),
            self.selected_ship.name(),
            session.lives
        );
        self.world = Some(GameWorld::new(session, self.metrics));
        self.last_run = None;
        self.set_screen(Screen::Playing { paused: false });
        self.switch_music(MusicTrack::Gameplay);
    }

    fn fire(&mut self) {
        if self.screen != (Screen::Playing { paused: false }) {
            return;
        }
        if let Some(world) = self.world.as_mut() {
            world.fire();
            self.audio.play_sfx(Sfx::Laser);
        }
    }

    /// Game-over sequence
    fn finish_run(&mut self) {
        let Some(world) = self.world.take() else {
            return;
        };
        let difficulty = world.session.difficulty;
        let score = world.session.score;

        self.stop_music();
        self.audio.play_sfx(Sfx::GameOver);

        let new_best = self.high_scores.record(difficulty, score);
        if new_best {
            info!("New {} best: {}", difficulty.name(), score);
            if let Err(e) = self.store.save_high_scores(&self.high_scores) {
                error!("Failed to save high scores: {}", e);
            }
        }

        self.last_run = Some(RunSummary {
            difficulty,
            score,
            new_best,
        });
        info!("Game over: {} points on {}", score, difficulty.name());

        if self.leaderboards.qualifies(difficulty, score) {
            self.screens.name_entry.reset();
            self.set_screen(Screen::NameEntry);
        } else {
            self.set_screen(Screen::GameOver);
        }
    }

    fn submit(&mut self) {
        match self.screen {
            Screen::NameEntry => self.submit_name(),
            Screen::PasswordEntry => self.submit_password(),
            _ => {}
        }
    }

    fn submit_name(&mut self) {
        let Some(run) = self.last_run else {
            self.set_screen(Screen::GameOver);
            return;
        };

        let entry = &mut self.screens.name_entry;
        match self.leaderboards.validate_name(run.difficulty, entry.field.value()) {
            Ok(name) => {
                info!("{} enters the {} leaderboard with {}", name, run.difficulty.name(), run.score);
                self.leaderboards
                    .insert(run.difficulty, LeaderboardEntry::new(name, run.score));
                if let Err(e) = self.store.save_leaderboards(&self.leaderboards) {
                    error!("Failed to save leaderboards: {}", e);
                }
                entry.reset();
                self.set_screen(Screen::GameOver);
            }
            Err(e) => {
                debug!("Rejected name: {}", e);
                entry.error = Some(e.to_string());
            }
        }
    }

    fn submit_password(&mut self) {
        let entry = &mut self.screens.password_entry;
        if entry.field.value() != ADMIN_PASSWORD {
            warn!("Leaderboard reset refused: wrong password");
            entry.field.clear();
            entry.error = Some("Incorrect password".to_string());
            return;
        }

        entry.reset();
        self.high_scores = HighScoreTable::default();
        self.leaderboards = Leaderboards::default();
        if let Err(e) = self.store.save_high_scores(&self.high_scores) {
            error!("Failed to save high scores: {}", e);
        }
        if let Err(e) = self.store.save_leaderboards(&self.leaderboards) {
            error!("Failed to save leaderboards: {}", e);
        }
        info!("Leaderboards and high scores reset");
        self.set_screen(Screen::Leaderboard);
    }

    fn active_entry(&mut self) -> Option<&mut super::screens::EntryScreen> {
        match self.screen {
            Screen::NameEntry => Some(&mut self.screens.name_entry),
            Screen::PasswordEntry => Some(&mut self.screens.password_entry),
            _ => None,
        }
    }

    // === Music ===

    /// Start `track` unless it is already the one playing
    fn switch_music(&mut self, track: MusicTrack) {
        if self.current_music != Some(track) {
            self.audio.play_music(track);
            self.current_music = Some(track);
        }
    }

    fn stop_music(&mut self) {
        self.audio.stop_music();
        self.current_music = None;
    }
}
