/// Interface the engine drives every tick and on every pointer event.
use crate::core::surface::Surface;

/// Implemented by the top-level application object, which routes each call to its active scene.
pub trait Game {
    /// Pure redraw of the current state.
    fn render(&self, surface: &mut dyn Surface);

    /// Called on every update tick, separately from rendering.
    fn update(&mut self);

    fn on_click(&mut self, x: i32, y: i32);

    fn on_move(&mut self, x: i32, y: i32);

    /// Stops the game loop after the current pass.
    fn request_quit(&mut self);

    fn is_running(&self) -> bool;
}
