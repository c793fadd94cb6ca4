/// Scene selection and the contract every scene implements.
use crate::core::surface::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    GameOver,
    GameWon,
}

/// What a scene asks the application to do after handling a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Switch(GameState),
    /// Reset the playing session, then switch to it
    Replay,
    Quit,
}

pub trait Scene {
    fn render(&self, surface: &mut dyn Surface);

    fn on_click(&mut self, x: i32, y: i32) -> Transition;

    fn on_move(&mut self, x: i32, y: i32);
}
