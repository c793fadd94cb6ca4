pub mod core {
    pub mod assets;
    pub mod button;
    pub mod config;
    pub mod engine;
    pub mod game;
    pub mod input;
    pub mod surface;
    pub mod window;
}

pub mod games;

// Re-export for convenience
pub use crate::core::game::Game;
pub use crate::games::hangman::{GameState, HangmanApp, Scene};
