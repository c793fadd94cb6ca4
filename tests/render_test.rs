//! Scene rendering through the recording surface and a real ratatui buffer.

mod common;

use common::{app_with_words, click_center, click_letter, DrawOp, RecordingSurface};
use hangman::core::assets::AssetStore;
use hangman::core::button::{Button, BASE_FILL, DISABLED_FILL, HOVERED_FILL};
use hangman::core::input::InputRouter;
use hangman::core::surface::{Bounds, TerminalSurface};
use hangman::games::hangman::end_scene::EndScene;
use hangman::games::hangman::menu::Menu;
use hangman::{Game, GameState, HangmanApp, Scene};
use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

fn render(app: &HangmanApp) -> RecordingSurface {
    let mut surface = RecordingSurface::default();
    app.render(&mut surface);
    surface
}

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for row in area.top()..area.bottom() {
        for col in area.left()..area.right() {
            out.push_str(buf[(col, row)].symbol());
        }
        out.push('\n');
    }
    out
}

#[test]
fn button_draws_body_border_then_centered_label() {
    let button = Button::new("Play", 228, 450, 150, 50);
    let mut surface = RecordingSurface::default();
    button.draw(&mut surface);

    let bounds = Bounds::new(228, 450, 150, 50);
    assert_eq!(surface.ops[0], DrawOp::FillRoundRect(bounds, BASE_FILL));
    assert!(matches!(surface.ops[1], DrawOp::StrokeRoundRect(b, _) if b == bounds));
    // "Play" measures 40x20 on the recording surface
    assert_eq!(surface.ops[2], DrawOp::Text("Play".into(), 283, 465));
}

#[test]
fn render_is_a_pure_redraw() {
    let mut app = app_with_words(&["CAT"]);
    assert_eq!(render(&app).ops, render(&app).ops);

    let play = app.menu().play_button().bounds();
    click_center(&mut app, play);
    click_letter(&mut app, 'A');
    assert_eq!(render(&app).ops, render(&app).ops);
}

#[test]
fn menu_draws_background_then_buttons() {
    let app = app_with_words(&["CAT"]);
    let surface = render(&app);
    assert_eq!(surface.images(), vec![Some("menu")]);
    assert_eq!(surface.texts(), vec!["Play", "Exit"]);
}

#[test]
fn playing_draws_word_keyboard_and_menu_button() {
    let mut app = app_with_words(&["CAT"]);
    let play = app.menu().play_button().bounds();
    click_center(&mut app, play);
    click_letter(&mut app, 'A');

    let surface = render(&app);
    assert_eq!(surface.images(), vec![Some("hangman_0")]);

    let texts = surface.texts();
    assert_eq!(texts[0], "_ A _");
    assert_eq!(texts.len(), 1 + 26 + 1);
    assert_eq!(texts[27], "Menu");

    // centered: 5 chars at 10 units each
    assert!(surface.ops.contains(&DrawOp::Text("_ A _".into(), 375, 360)));
}

#[test]
fn guessed_and_hovered_keys_change_fill() {
    let mut app = app_with_words(&["CAT"]);
    let play = app.menu().play_button().bounds();
    click_center(&mut app, play);
    click_letter(&mut app, 'A');
    let b = app.playing().session().letter_button('B').unwrap().bounds();
    let (x, y) = b.center();
    app.on_move(x, y);

    let surface = render(&app);
    let fills: Vec<_> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::FillRoundRect(bounds, color) => Some((*bounds, *color)),
            _ => None,
        })
        .collect();
    let a = app.playing().session().letter_button('A').unwrap().bounds();
    assert!(fills.contains(&(a, DISABLED_FILL)));
    assert!(fills.contains(&(b, HOVERED_FILL)));
}

#[test]
fn end_screen_shows_answer() {
    let mut app = app_with_words(&["CAT"]);
    let play = app.menu().play_button().bounds();
    click_center(&mut app, play);
    for letter in "CAT".chars() {
        click_letter(&mut app, letter);
    }
    assert_eq!(app.state(), GameState::GameWon);

    let surface = render(&app);
    assert_eq!(surface.images(), vec![Some("gamewon")]);
    assert_eq!(surface.texts(), vec!["The word was CAT", "Replay", "Menu"]);
}

#[test]
fn missing_assets_render_without_images() {
    let store = AssetStore::new(std::env::temp_dir().join("hangman-no-assets-here"));
    let menu = Menu::new(&store);
    let mut surface = RecordingSurface::default();
    menu.render(&mut surface);
    assert_eq!(surface.images(), vec![None]);

    let over = EndScene::game_over(&store);
    let mut surface = RecordingSurface::default();
    over.render(&mut surface);
    assert_eq!(surface.images(), vec![None]);
    assert_eq!(surface.texts(), vec!["Replay", "Menu"]);
}

#[test]
fn menu_renders_into_terminal_buffer() {
    let app = HangmanApp::new(common::assets(), StdRng::seed_from_u64(9));
    let area = Rect::new(0, 0, 100, 30);
    let mut buf = Buffer::empty(area);
    app.render(&mut TerminalSurface::new(&mut buf, area));

    let text = buffer_text(&buf);
    assert!(text.contains("Play"));
    assert!(text.contains("Exit"));
    assert!(text.contains("|_| |_/_/"));
}

#[test]
fn playing_renders_keyboard_rows_into_terminal_buffer() {
    let mut app = app_with_words(&["CAT"]);
    let play = app.menu().play_button().bounds();
    click_center(&mut app, play);

    let area = Rect::new(0, 0, 100, 30);
    let mut buf = Buffer::empty(area);
    app.render(&mut TerminalSurface::new(&mut buf, area));

    let text = buffer_text(&buf);
    let rows: Vec<&str> = text.lines().collect();
    assert!(rows[18].contains("_ _ _"));
    let keys: String = rows[23].chars().filter(|c| c.is_ascii_uppercase()).collect();
    assert_eq!(keys, "ABCDEFGHIJKLM");
    let keys: String = rows[25].chars().filter(|c| c.is_ascii_uppercase()).collect();
    assert_eq!(keys, "NOPQRSTUVWXYZ");
}

#[test]
fn painted_keys_are_exactly_the_clickable_cells() {
    let mut app = app_with_words(&["CAT"]);
    let play = app.menu().play_button().bounds();
    click_center(&mut app, play);

    let area = Rect::new(0, 0, 100, 30);
    let mut buf = Buffer::empty(area);
    app.render(&mut TerminalSurface::new(&mut buf, area));
    let router = InputRouter::new(area);
    let session = app.playing().session();

    let mut labels = 0;
    for row in area.top()..area.bottom() {
        for col in area.left()..area.right() {
            let (x, y) = router.to_logical(col, row).unwrap();
            let letter = session.letter_at(x, y);
            let hit = letter.is_some() || session.menu_button().contains_point(x, y);
            let cell = &buf[(col, row)];
            assert_eq!(cell.bg == BASE_FILL, hit, "cell ({col}, {row})");

            if let Some(letter) = letter {
                if cell.symbol().chars().all(|c| c.is_ascii_uppercase()) {
                    assert_eq!(cell.symbol(), letter.to_string());
                    labels += 1;
                }
            }
        }
    }
    assert_eq!(labels, 26);
}

#[test]
fn click_beside_a_key_spends_no_guess() {
    let mut app = app_with_words(&["CAT"]);
    let play = app.menu().play_button().bounds();
    click_center(&mut app, play);

    // 'A' covers columns 5..=10 of row 23 at 100x30
    let router = InputRouter::new(Rect::new(0, 0, 100, 30));
    for column in [4, 11] {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row: 23,
            modifiers: KeyModifiers::NONE,
        });
        router.dispatch(&click, &mut app);
    }
    let session = app.playing().session();
    assert_eq!(session.miss_count(), 0);
    assert!(session.letter_buttons().iter().all(|b| b.is_enabled()));
}
