use tracing::info;

use crate::core::assets::{AssetStore, Image};
use crate::core::button::Button;
use crate::core::surface::Surface;
use crate::games::hangman::backdrop::draw_backdrop;
use crate::games::hangman::layout::footer_buttons;
use crate::games::hangman::state::{GameState, Scene, Transition};

pub struct Menu {
    play: Button,
    exit: Button,
    background: Option<Image>,
}

impl Menu {
    pub fn new(assets: &AssetStore) -> Self {
        let (play, exit) = footer_buttons("Play", "Exit");
        Self {
            play,
            exit,
            background: assets.load_image("menu"),
        }
    }

    pub fn play_button(&self) -> &Button {
        &self.play
    }

    pub fn exit_button(&self) -> &Button {
        &self.exit
    }
}

impl Scene for Menu {
    fn render(&self, surface: &mut dyn Surface) {
        draw_backdrop(surface, self.background.as_ref());
        self.play.draw(surface);
        self.exit.draw(surface);
    }

    fn on_click(&mut self, x: i32, y: i32) -> Transition {
        if self.play.contains_point(x, y) {
            info!("playing scene opened");
            Transition::Switch(GameState::Playing)
        } else if self.exit.contains_point(x, y) {
            info!("game exit");
            Transition::Quit
        } else {
            Transition::Stay
        }
    }

    fn on_move(&mut self, x: i32, y: i32) {
        self.play.update_hover(x, y);
        self.exit.update_hover(x, y);
    }
}
