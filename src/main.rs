use std::fs::File;
use std::io::stdout;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::SetTitle;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hangman::core::assets::AssetStore;
use hangman::core::config::GameConfig;
use hangman::core::engine::Engine;
use hangman::core::window::WINDOW_TITLE;
use hangman::HangmanApp;

fn main() -> Result<()> {
    let config = GameConfig::default();
    init_logging(&config)?;

    let app = HangmanApp::new(AssetStore::new(&config.asset_dir), StdRng::from_os_rng());

    let mut terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture, SetTitle(WINDOW_TITLE))
        .context("enabling mouse capture")
        .and_then(|()| Engine::new(app, &config).run(&mut terminal));

    // Always try to restore terminal state.
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result.map(|_| ())
}

/// The terminal owns stdout, so logs go to a file.
fn init_logging(config: &GameConfig) -> Result<()> {
    let file = File::create(&config.log_path)
        .with_context(|| format!("creating log file {}", config.log_path.display()))?;
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    tracing::info!(path = %config.log_path.display(), fps = config.fps, ups = config.ups, "hangman starting");
    Ok(())
}
