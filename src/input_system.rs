use crate::game::types::Screen;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;

/// Actions the player can perform in the game
///
/// This enum represents all possible high-level game actions that can be
/// triggered by input. It decouples input handling from action execution.
/// Held arrow keys are not actions; the loop samples them every tick.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    // === Gameplay ===
    Fire,

    // === Navigation ===
    /// Escape: pause/unpause while playing, step back on menu screens
    Back,
    /// Enter on a text-entry screen
    Confirm,

    // === Text entry ===
    TypeChar(char),
    Backspace,

    // === Pointer (logical coordinates) ===
    PointerDown(i32, i32),
    PointerUp(i32, i32),
    PointerMove(i32, i32),

    // === System ===
    Quit,
}

/// Input context determines which actions are available
///
/// Different screens require different input handling. This enum
/// represents the current input mode to filter irrelevant inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Button-driven screens, including the pause overlay
    Menu,
    /// Active, unpaused gameplay
    Playing,
    /// Name or password entry
    TextEntry,
}

impl InputContext {
    pub fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Playing { paused: false } => InputContext::Playing,
            s if s.is_text_entry() => InputContext::TextEntry,
            _ => InputContext::Menu,
        }
    }

    /// Whether SDL should deliver `TextInput` events
    pub fn wants_text_input(&self) -> bool {
        matches!(self, InputContext::TextEntry)
    }
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// # Architecture
///
/// Input processing happens in phases:
/// 1. Determine current InputContext from the active screen
/// 2. Poll SDL2 events
/// 3. Filter events based on context
/// 4. Translate events to GameActions
/// 5. Return actions to the controller for execution
pub struct InputSystem {
    /// Current input context
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Menu context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
        }
    }

    /// Update the input context for the active screen
    ///
    /// This should be called before poll_events() to ensure correct
    /// input filtering.
    pub fn update_context(&mut self, screen: Screen) {
        self.context = InputContext::for_screen(screen);
    }

    /// Process SDL2 events and return list of actions to handle
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        let mut actions = Vec::new();
        for event in event_pump.poll_iter() {
            self.translate(&event, &mut actions);
        }
        actions
    }

    /// Translate a single SDL2 event
    pub fn translate(&self, event: &Event, actions: &mut Vec<GameAction>) {
        match event {
            Event::Quit { .. } => {
                actions.push(GameAction::Quit);
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat,
                ..
            } => {
                self.handle_keydown(*key, *repeat, actions);
            }
            Event::TextInput { text, .. } => {
                if self.context == InputContext::TextEntry {
                    actions.extend(text.chars().map(GameAction::TypeChar));
                }
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                actions.push(GameAction::PointerDown(*x, *y));
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                actions.push(GameAction::PointerUp(*x, *y));
            }
            Event::MouseMotion { x, y, .. } => {
                actions.push(GameAction::PointerMove(*x, *y));
            }
            _ => {
                // Other buttons and event types are unused
            }
        }
    }

    /// Handle keyboard key press events
    ///
    /// Routes key presses to context-specific handlers.
    fn handle_keydown(&self, key: Keycode, repeat: bool, actions: &mut Vec<GameAction>) {
        match self.context {
            InputContext::Playing => self.handle_playing_keys(key, repeat, actions),
            InputContext::Menu => self.handle_menu_keys(key, repeat, actions),
            InputContext::TextEntry => self.handle_text_entry_keys(key, actions),
        }
    }

    /// Handle keys during normal gameplay
    fn handle_playing_keys(&self, key: Keycode, repeat: bool, actions: &mut Vec<GameAction>) {
        // One shot per press
        if repeat {
            return;
        }
        match key {
            Keycode::Space => actions.push(GameAction::Fire),
            Keycode::Escape => actions.push(GameAction::Back),
            _ => {}
        }
    }

    fn handle_menu_keys(&self, key: Keycode, repeat: bool, actions: &mut Vec<GameAction>) {
        if key == Keycode::Escape && !repeat {
            actions.push(GameAction::Back);
        }
    }

    /// Handle keys on the name and password screens
    fn handle_text_entry_keys(&self, key: Keycode, actions: &mut Vec<GameAction>) {
        match key {
            Keycode::Return | Keycode::KpEnter => actions.push(GameAction::Confirm),
            Keycode::Backspace => actions.push(GameAction::Backspace),
            Keycode::Escape => actions.push(GameAction::Back),
            _ => {
                // Printable characters arrive as TextInput events
            }
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(key: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod: Mod::NOMOD,
            repeat,
        }
    }

    fn actions_for(input: &InputSystem, event: Event) -> Vec<GameAction> {
        let mut actions = Vec::new();
        input.translate(&event, &mut actions);
        actions
    }

    #[test]
    fn test_input_system_creation() {
        let input = InputSystem::new();
        assert_eq!(input.context, InputContext::Menu);
    }

    #[test]
    fn test_context_follows_screen() {
        let mut input = InputSystem::new();

        input.update_context(Screen::Playing { paused: false });
        assert_eq!(input.context, InputContext::Playing);

        input.update_context(Screen::Playing { paused: true });
        assert_eq!(input.context, InputContext::Menu);

        input.update_context(Screen::NameEntry);
        assert_eq!(input.context, InputContext::TextEntry);
        assert!(input.context.wants_text_input());

        input.update_context(Screen::PasswordEntry);
        assert_eq!(input.context, InputContext::TextEntry);

        input.update_context(Screen::Settings);
        assert_eq!(input.context, InputContext::Menu);
        assert!(!input.context.wants_text_input());
    }

    #[test]
    fn test_space_fires_only_while_playing() {
        let mut input = InputSystem::new();
        assert!(actions_for(&input, key_down(Keycode::Space, false)).is_empty());

        input.update_context(Screen::Playing { paused: false });
        assert_eq!(
            actions_for(&input, key_down(Keycode::Space, false)),
            vec![GameAction::Fire]
        );
        // Holding space does not auto-fire
        assert!(actions_for(&input, key_down(Keycode::Space, true)).is_empty());
    }

    #[test]
    fn test_escape_is_back_everywhere() {
        let mut input = InputSystem::new();
        for screen in [
            Screen::MainMenu,
            Screen::Playing { paused: false },
            Screen::Playing { paused: true },
            Screen::PasswordEntry,
        ] {
            input.update_context(screen);
            assert_eq!(
                actions_for(&input, key_down(Keycode::Escape, false)),
                vec![GameAction::Back]
            );
        }
    }

    #[test]
    fn test_text_entry_keys() {
        let mut input = InputSystem::new();
        input.update_context(Screen::NameEntry);

        assert_eq!(
            actions_for(&input, key_down(Keycode::Return, false)),
            vec![GameAction::Confirm]
        );
        // Backspace repeats while held
        assert_eq!(
            actions_for(&input, key_down(Keycode::Backspace, true)),
            vec![GameAction::Backspace]
        );

        let typed = Event::TextInput {
            timestamp: 0,
            window_id: 0,
            text: "Ab".to_string(),
        };
        assert_eq!(
            actions_for(&input, typed),
            vec![GameAction::TypeChar('A'), GameAction::TypeChar('b')]
        );
    }

    #[test]
    fn test_text_input_ignored_outside_text_entry() {
        let input = InputSystem::new();
        let typed = Event::TextInput {
            timestamp: 0,
            window_id: 0,
            text: "x".to_string(),
        };
        assert!(actions_for(&input, typed).is_empty());
    }

    #[test]
    fn test_left_button_maps_to_pointer_actions() {
        let input = InputSystem::new();
        let down = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 640,
            y: 330,
        };
        let right = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Right,
            clicks: 1,
            x: 640,
            y: 330,
        };

        assert_eq!(actions_for(&input, down), vec![GameAction::PointerDown(640, 330)]);
        assert!(actions_for(&input, right).is_empty());
    }

    #[test]
    fn test_window_close_quits() {
        let input = InputSystem::new();
        assert_eq!(
            actions_for(&input, Event::Quit { timestamp: 0 }),
            vec![GameAction::Quit]
        );
    }
}
