// Game module - screens, gameplay and the controller tying them together
//
// This module contains:
// - types.rs: Screen enum, difficulty table and other shared enums
// - session.rs: GameSession (score, lives, difficulty of the current run)
// - world.rs: GameWorld and the per-tick gameplay update
// - screens.rs: Widget bundles for every screen
// - controller.rs: Game, the screen state machine
// - rendering.rs: Drawing and visual rendering

pub mod controller;
pub mod rendering;
pub mod screens;
pub mod session;
pub mod types;
pub mod world;

pub use controller::Game;
pub use rendering::render_game;
