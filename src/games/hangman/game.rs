use crate::core::button::Button;
use crate::games::hangman::data::{MAX_MISS, PLACEHOLDER};
use crate::games::hangman::layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    InProgress,
    Won,
    Lost,
}

/// One round of guessing: the hidden word, what has been revealed so far,
/// the miss count and the on-screen keyboard.
#[derive(Debug, Clone)]
pub struct PlayingSession {
    hidden_word: String,
    revealed: String,
    miss_count: u32,
    letter_buttons: Vec<Button>,
    menu_button: Button,
}

impl PlayingSession {
    pub fn new(word: &str) -> Self {
        let hidden_word = word.to_uppercase();
        let revealed = mask(&hidden_word);
        Self {
            hidden_word,
            revealed,
            miss_count: 0,
            letter_buttons: layout::letter_buttons(),
            menu_button: layout::playing_menu_button(),
        }
    }

    /// Starts a new round in place with fresh buttons.
    pub fn restart(&mut self, word: &str) {
        *self = Self::new(word);
    }

    pub fn hidden_word(&self) -> &str {
        &self.hidden_word
    }

    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    pub fn miss_count(&self) -> u32 {
        self.miss_count
    }

    pub fn letter_buttons(&self) -> &[Button] {
        &self.letter_buttons
    }

    pub fn menu_button(&self) -> &Button {
        &self.menu_button
    }

    pub fn letter_button(&self, letter: char) -> Option<&Button> {
        let letter = letter.to_ascii_uppercase();
        self.letter_buttons.iter().find(|b| b.label().starts_with(letter))
    }

    /// Reveals every occurrence of `letter`, or counts a miss when there is none.
    /// The letter's button is disabled either way. Returns whether the letter matched.
    pub fn guess(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        let mut matched = false;

        self.revealed = self
            .hidden_word
            .chars()
            .zip(self.revealed.chars())
            .map(|(hidden, shown)| {
                if hidden == letter {
                    matched = true;
                    hidden
                } else {
                    shown
                }
            })
            .collect();

        if !matched {
            self.miss_count += 1;
        }

        if let Some(button) = self.letter_buttons.iter_mut().find(|b| b.label().starts_with(letter)) {
            button.set_enabled(false);
        }

        matched
    }

    pub fn status(&self) -> RoundStatus {
        if self.revealed == self.hidden_word {
            RoundStatus::Won
        } else if self.miss_count > MAX_MISS {
            RoundStatus::Lost
        } else {
            RoundStatus::InProgress
        }
    }

    /// Letter of the enabled button under `(x, y)`, if any.
    pub fn letter_at(&self, x: i32, y: i32) -> Option<char> {
        self.letter_buttons
            .iter()
            .find(|b| b.is_enabled() && b.contains_point(x, y))
            .and_then(|b| b.label().chars().next())
    }

    pub fn update_hover(&mut self, x: i32, y: i32) {
        self.menu_button.update_hover(x, y);
        for button in &mut self.letter_buttons {
            button.update_hover(x, y);
        }
    }
}

fn mask(word: &str) -> String {
    word.chars().map(|_| PLACEHOLDER).collect()
}
