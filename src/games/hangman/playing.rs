use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use ratatui::style::Color;
use tracing::info;

use crate::core::assets::{AssetStore, Image};
use crate::core::surface::{Surface, INK};
use crate::core::window::{window_bounds, WINDOW_WIDTH};
use crate::games::hangman::data::{FALLBACK_WORD, MAX_MISS};
use crate::games::hangman::game::{PlayingSession, RoundStatus};
use crate::games::hangman::state::{GameState, Scene, Transition};

const BACKGROUND: Color = Color::Rgb(242, 244, 250);
const ILLUSTRATION_X: i32 = 314;
const ILLUSTRATION_Y: i32 = 30;
const WORD_Y: i32 = 360;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessOutcome {
    pub matched: bool,
    pub transition: Transition,
}

fn illustration_name(miss_count: u32) -> String {
    format!("hangman_{miss_count}")
}

/// The guessing scene. Created once and reset in place for every replay.
pub struct Playing {
    session: PlayingSession,
    words: &'static [&'static str],
    rng: StdRng,
    illustration: Option<Image>,
    shown_misses: u32,
}

impl Playing {
    pub fn new(assets: &AssetStore, words: &'static [&'static str], mut rng: StdRng) -> Self {
        let word = pick_word(words, &mut rng);
        info!(len = word.len(), "new round");
        Self {
            session: PlayingSession::new(word),
            words,
            rng,
            illustration: assets.load_image(&illustration_name(0)),
            shown_misses: 0,
        }
    }

    pub fn session(&self) -> &PlayingSession {
        &self.session
    }

    pub fn illustration(&self) -> Option<&Image> {
        self.illustration.as_ref()
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let matched = self.session.guess(letter);
        info!(letter = %letter, matched, misses = self.session.miss_count(), "guess");

        let transition = match self.session.status() {
            RoundStatus::Won => {
                info!(word = self.session.hidden_word(), "round won");
                Transition::Switch(GameState::GameWon)
            }
            RoundStatus::Lost => {
                info!(word = self.session.hidden_word(), "round lost");
                Transition::Switch(GameState::GameOver)
            }
            RoundStatus::InProgress => Transition::Stay,
        };
        GuessOutcome { matched, transition }
    }

    /// New word, cleared counters, fresh keyboard and the empty gallows.
    pub fn reset(&mut self, assets: &AssetStore) {
        let word = pick_word(self.words, &mut self.rng);
        info!(len = word.len(), "new round");
        self.session.restart(word);
        self.illustration = assets.load_image(&illustration_name(0));
        self.shown_misses = 0;
    }

    /// Swaps the illustration when the miss count has moved since the last swap.
    pub fn update(&mut self, assets: &AssetStore) {
        let misses = self.session.miss_count();
        if misses != self.shown_misses && misses <= MAX_MISS {
            self.illustration = assets.load_image(&illustration_name(misses));
            self.shown_misses = misses;
        }
    }

    /// Revealed letters spaced out so placeholders read as separate slots.
    fn display_word(&self) -> String {
        let mut out = String::with_capacity(self.session.revealed().len() * 2);
        for (i, c) in self.session.revealed().chars().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }
}

impl Scene for Playing {
    fn render(&self, surface: &mut dyn Surface) {
        surface.fill_rect(window_bounds(), BACKGROUND);
        surface.draw_image(self.illustration.as_ref(), ILLUSTRATION_X, ILLUSTRATION_Y);

        let word = self.display_word();
        let size = surface.measure_text(&word);
        surface.fill_text(&word, (WINDOW_WIDTH - size.width) / 2, WORD_Y, INK);

        for button in self.session.letter_buttons() {
            button.draw(surface);
        }
        self.session.menu_button().draw(surface);
    }

    fn on_click(&mut self, x: i32, y: i32) -> Transition {
        if self.session.menu_button().contains_point(x, y) {
            info!("menu scene opened");
            return Transition::Switch(GameState::Menu);
        }
        match self.session.letter_at(x, y) {
            Some(letter) => self.guess(letter).transition,
            None => Transition::Stay,
        }
    }

    fn on_move(&mut self, x: i32, y: i32) {
        self.session.update_hover(x, y);
    }
}

fn pick_word(words: &[&'static str], rng: &mut StdRng) -> &'static str {
    words.choose(rng).copied().unwrap_or(FALLBACK_WORD)
}
