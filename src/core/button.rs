/// Clickable rectangle with a centered label.
use ratatui::style::Color;

use crate::core::surface::{Bounds, Surface, INK};

pub const HOVERED_FILL: Color = Color::Rgb(211, 211, 211);
pub const BASE_FILL: Color = Color::Rgb(245, 245, 220);
pub const DISABLED_FILL: Color = Color::Rgb(128, 128, 128);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    label: String,
    bounds: Bounds,
    hovered: bool,
    enabled: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            label: label.into(),
            bounds: Bounds::new(x, y, width, height),
            hovered: false,
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        self.bounds.contains(x, y)
    }

    /// Hover follows the pointer whether or not the button is enabled.
    pub fn update_hover(&mut self, x: i32, y: i32) {
        self.hovered = self.contains_point(x, y);
    }

    pub fn fill_color(&self) -> Color {
        match (self.enabled, self.hovered) {
            (true, true) => HOVERED_FILL,
            (true, false) => BASE_FILL,
            (false, _) => DISABLED_FILL,
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_round_rect(self.bounds, self.fill_color());
        surface.stroke_round_rect(self.bounds, INK);

        let text = surface.measure_text(&self.label);
        let x = self.bounds.x + (self.bounds.width - text.width) / 2;
        let y = self.bounds.y + (self.bounds.height - text.height) / 2;
        surface.fill_text(&self.label, x, y, INK);
    }
}
