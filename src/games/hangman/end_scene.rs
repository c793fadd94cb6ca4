use tracing::info;

use crate::core::assets::{AssetStore, Image};
use crate::core::button::Button;
use crate::core::surface::{Surface, INK};
use crate::core::window::WINDOW_WIDTH;
use crate::games::hangman::layout::footer_buttons;
use crate::games::hangman::backdrop::draw_backdrop;
use crate::games::hangman::state::{GameState, Scene, Transition};

const ANSWER_Y: i32 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndKind {
    GameOver,
    GameWon,
}

impl EndKind {
    pub fn image_name(self) -> &'static str {
        match self {
            EndKind::GameOver => "gameover",
            EndKind::GameWon => "gamewon",
        }
    }
}

/// Win or lose screen with Replay and Menu buttons. The two variants differ only in their picture.
pub struct EndScene {
    kind: EndKind,
    image: Option<Image>,
    replay: Button,
    menu: Button,
    answer: Option<String>,
}

impl EndScene {
    pub fn new(kind: EndKind, assets: &AssetStore) -> Self {
        let (replay, menu) = footer_buttons("Replay", "Menu");
        Self {
            kind,
            image: assets.load_image(kind.image_name()),
            replay,
            menu,
            answer: None,
        }
    }

    pub fn game_over(assets: &AssetStore) -> Self {
        Self::new(EndKind::GameOver, assets)
    }

    pub fn game_won(assets: &AssetStore) -> Self {
        Self::new(EndKind::GameWon, assets)
    }

    pub fn replay_button(&self) -> &Button {
        &self.replay
    }

    pub fn menu_button(&self) -> &Button {
        &self.menu
    }

    /// Word of the round that just finished, shown under the picture.
    pub fn set_answer(&mut self, word: &str) {
        self.answer = Some(word.to_string());
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }
}

impl Scene for EndScene {
    fn render(&self, surface: &mut dyn Surface) {
        draw_backdrop(surface, self.image.as_ref());

        if let Some(word) = &self.answer {
            let line = format!("The word was {word}");
            let size = surface.measure_text(&line);
            surface.fill_text(&line, (WINDOW_WIDTH - size.width) / 2, ANSWER_Y, INK);
        }

        self.replay.draw(surface);
        self.menu.draw(surface);
    }

    fn on_click(&mut self, x: i32, y: i32) -> Transition {
        if self.menu.contains_point(x, y) {
            info!(scene = ?self.kind, "menu scene opened");
            Transition::Switch(GameState::Menu)
        } else if self.replay.contains_point(x, y) {
            info!(scene = ?self.kind, "replay requested");
            Transition::Replay
        } else {
            Transition::Stay
        }
    }

    fn on_move(&mut self, x: i32, y: i32) {
        self.menu.update_hover(x, y);
        self.replay.update_hover(x, y);
    }
}
