/// Full-screen picture shared by the menu and the end screens.
use ratatui::style::Color;

use crate::core::assets::Image;
use crate::core::surface::{image_width, Surface};
use crate::core::window::{window_bounds, WINDOW_WIDTH};

pub const PAPER: Color = Color::Rgb(250, 248, 240);
const ART_Y: i32 = 40;

/// Draws `image` centered horizontally over a plain background.
pub fn draw_backdrop(surface: &mut dyn Surface, image: Option<&Image>) {
    surface.fill_rect(window_bounds(), PAPER);
    let x = match image {
        Some(image) => (WINDOW_WIDTH - image_width(&*surface, image)) / 2,
        None => 0,
    };
    surface.draw_image(image, x, ART_Y);
}
