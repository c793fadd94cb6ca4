//! Shared helpers for driving the app without a terminal.

#![allow(dead_code)]

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::style::Color;

use hangman::core::assets::{AssetStore, Image};
use hangman::core::surface::{Bounds, Surface, TextSize};
use hangman::HangmanApp;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect(Bounds, Color),
    FillRoundRect(Bounds, Color),
    StrokeRoundRect(Bounds, Color),
    Image(Option<String>, i32, i32),
    Text(String, i32, i32),
}

/// Records every drawing call; text is measured as 10x20 per character.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn images(&self) -> Vec<Option<&str>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Image(name, _, _) => Some(name.as_deref()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.ops.push(DrawOp::FillRect(bounds, color));
    }

    fn fill_round_rect(&mut self, bounds: Bounds, color: Color) {
        self.ops.push(DrawOp::FillRoundRect(bounds, color));
    }

    fn stroke_round_rect(&mut self, bounds: Bounds, color: Color) {
        self.ops.push(DrawOp::StrokeRoundRect(bounds, color));
    }

    fn draw_image(&mut self, image: Option<&Image>, x: i32, y: i32) {
        self.ops.push(DrawOp::Image(image.map(|i| i.name().to_string()), x, y));
    }

    fn fill_text(&mut self, text: &str, x: i32, y: i32, _color: Color) {
        self.ops.push(DrawOp::Text(text.to_string(), x, y));
    }

    fn measure_text(&self, text: &str) -> TextSize {
        TextSize { width: text.chars().count() as i32 * 10, height: 20 }
    }
}

pub fn assets() -> AssetStore {
    AssetStore::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"))
}

pub fn app_with_words(words: &'static [&'static str]) -> HangmanApp {
    HangmanApp::with_words(assets(), words, StdRng::seed_from_u64(42))
}

pub fn click_center(app: &mut HangmanApp, bounds: Bounds) {
    use hangman::Game;
    let (x, y) = bounds.center();
    app.on_click(x, y);
}

/// Clicks the on-screen key for `letter` in the playing scene.
pub fn click_letter(app: &mut HangmanApp, letter: char) {
    let bounds = app.playing().session().letter_button(letter).expect("letter button").bounds();
    click_center(app, bounds);
}
