/// Button placement in logical window coordinates.
use crate::core::button::Button;
use crate::games::hangman::data::LETTERS;

const FOOTER_WIDTH: i32 = 150;
const FOOTER_HEIGHT: i32 = FOOTER_WIDTH / 3;
const FOOTER_X: i32 = 606 / 2 - FOOTER_WIDTH / 2;
const FOOTER_Y: i32 = 450;
const FOOTER_OFFSET: i32 = 190;

const LETTER_WIDTH: i32 = 47;
const LETTER_HEIGHT: i32 = LETTER_WIDTH / 2;
const LETTER_GAP_X: i32 = 10;
const LETTER_GAP_Y: i32 = 10;
const LETTER_START_X: i32 = 37;
const LETTER_START_Y: i32 = 470;
pub const LETTERS_PER_ROW: usize = 13;

/// Pair of wide buttons along the bottom of the menu and end screens.
pub fn footer_buttons(left: &str, right: &str) -> (Button, Button) {
    (
        Button::new(left, FOOTER_X, FOOTER_Y, FOOTER_WIDTH, FOOTER_HEIGHT),
        Button::new(right, FOOTER_X + FOOTER_OFFSET, FOOTER_Y, FOOTER_WIDTH, FOOTER_HEIGHT),
    )
}

/// One button per letter, in alphabet order, wrapped after every `LETTERS_PER_ROW`.
pub fn letter_buttons() -> Vec<Button> {
    LETTERS
        .chars()
        .enumerate()
        .map(|(i, letter)| {
            let col = (i % LETTERS_PER_ROW) as i32;
            let row = (i / LETTERS_PER_ROW) as i32;
            let x = LETTER_START_X + col * (LETTER_WIDTH + LETTER_GAP_X);
            let y = LETTER_START_Y + row * (LETTER_HEIGHT + LETTER_GAP_Y);
            Button::new(letter.to_string(), x, y, LETTER_WIDTH, LETTER_HEIGHT)
        })
        .collect()
}

pub fn playing_menu_button() -> Button {
    Button::new("Menu", 670, 30, 100, 30)
}
