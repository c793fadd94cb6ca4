use rand::rngs::StdRng;
use tracing::info;

use crate::core::assets::AssetStore;
use crate::core::game::Game;
use crate::core::surface::Surface;
use crate::games::hangman::data::WORDS;
use crate::games::hangman::end_scene::EndScene;
use crate::games::hangman::menu::Menu;
use crate::games::hangman::playing::Playing;
use crate::games::hangman::state::{GameState, Scene, Transition};

/// Application context: owns every scene and the single active `GameState`.
pub struct HangmanApp {
    state: GameState,
    assets: AssetStore,
    menu: Menu,
    playing: Playing,
    game_over: EndScene,
    game_won: EndScene,
    running: bool,
}

impl HangmanApp {
    pub fn new(assets: AssetStore, rng: StdRng) -> Self {
        Self::with_words(assets, WORDS, rng)
    }

    pub fn with_words(assets: AssetStore, words: &'static [&'static str], rng: StdRng) -> Self {
        Self {
            state: GameState::default(),
            menu: Menu::new(&assets),
            playing: Playing::new(&assets, words, rng),
            game_over: EndScene::game_over(&assets),
            game_won: EndScene::game_won(&assets),
            assets,
            running: true,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn playing(&self) -> &Playing {
        &self.playing
    }

    pub fn game_over(&self) -> &EndScene {
        &self.game_over
    }

    pub fn game_won(&self) -> &EndScene {
        &self.game_won
    }

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Switch(next) => self.switch_to(next),
            Transition::Replay => {
                self.playing.reset(&self.assets);
                self.switch_to(GameState::Playing);
            }
            Transition::Quit => self.request_quit(),
        }
    }

    fn switch_to(&mut self, next: GameState) {
        let word = self.playing.session().hidden_word();
        match next {
            GameState::GameOver => self.game_over.set_answer(word),
            GameState::GameWon => self.game_won.set_answer(word),
            GameState::Menu | GameState::Playing => {}
        }
        info!(from = ?self.state, to = ?next, "scene switch");
        self.state = next;
    }
}

impl Game for HangmanApp {
    fn render(&self, surface: &mut dyn Surface) {
        match self.state {
            GameState::Menu => self.menu.render(surface),
            GameState::Playing => self.playing.render(surface),
            GameState::GameOver => self.game_over.render(surface),
            GameState::GameWon => self.game_won.render(surface),
        }
    }

    fn update(&mut self) {
        if self.state == GameState::Playing {
            self.playing.update(&self.assets);
        }
    }

    fn on_click(&mut self, x: i32, y: i32) {
        let transition = match self.state {
            GameState::Menu => self.menu.on_click(x, y),
            GameState::Playing => self.playing.on_click(x, y),
            GameState::GameOver => self.game_over.on_click(x, y),
            GameState::GameWon => self.game_won.on_click(x, y),
        };
        self.apply(transition);
    }

    fn on_move(&mut self, x: i32, y: i32) {
        match self.state {
            GameState::Menu => self.menu.on_move(x, y),
            GameState::Playing => self.playing.on_move(x, y),
            GameState::GameOver => self.game_over.on_move(x, y),
            GameState::GameWon => self.game_won.on_move(x, y),
        }
    }

    fn request_quit(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }
}
