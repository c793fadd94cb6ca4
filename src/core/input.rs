/// Translates terminal events into pointer events in logical window coordinates
/// and hands them to the game.
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::info;

use crate::core::game::Game;
use crate::core::surface::cell_center;
use crate::core::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Click { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Quit,
}

pub struct InputRouter {
    viewport: Rect,
}

impl InputRouter {
    pub fn new(viewport: Rect) -> Self {
        Self { viewport }
    }

    /// Area the last frame was drawn into.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Logical coordinates of the center of cell `(column, row)`, or `None` outside the viewport.
    pub fn to_logical(&self, column: u16, row: u16) -> Option<(i32, i32)> {
        let area = self.viewport;
        if !area.contains((column, row).into()) {
            return None;
        }
        let col = i32::from(column - area.x);
        let row = i32::from(row - area.y);
        let x = cell_center(col, i32::from(area.width), WINDOW_WIDTH);
        let y = cell_center(row, i32::from(area.height), WINDOW_HEIGHT);
        Some((x, y))
    }

    pub fn translate(&self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                let (x, y) = self.to_logical(*column, *row)?;
                match kind {
                    MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click { x, y }),
                    MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::Move { x, y }),
                    _ => None,
                }
            }
            // raw mode swallows SIGINT
            Event::Key(KeyEvent { code: KeyCode::Char('c'), modifiers, kind: KeyEventKind::Press, .. })
                if modifiers.contains(KeyModifiers::CONTROL) =>
            {
                Some(InputEvent::Quit)
            }
            _ => None,
        }
    }

    pub fn dispatch<G: Game>(&self, event: &Event, game: &mut G) {
        match self.translate(event) {
            Some(InputEvent::Click { x, y }) => game.on_click(x, y),
            Some(InputEvent::Move { x, y }) => game.on_move(x, y),
            Some(InputEvent::Quit) => {
                info!("quit requested from keyboard");
                game.request_quit();
            }
            None => {}
        }
    }
}
