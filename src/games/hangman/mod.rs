//! Hangman: menu, guessing scene and the two end screens.
pub mod app;
pub mod backdrop;
pub mod data;
pub mod end_scene;
pub mod game;
pub mod layout;
pub mod menu;
pub mod playing;
pub mod state;

pub use app::HangmanApp;
pub use game::{PlayingSession, RoundStatus};
pub use state::{GameState, Scene, Transition};
