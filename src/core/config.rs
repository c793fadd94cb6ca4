/// Runtime configuration, built once at startup.
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Render ticks per second
    pub fps: u32,
    /// Update ticks per second
    pub ups: u32,
    pub asset_dir: PathBuf,
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fps: 120,
            ups: 60,
            asset_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
            log_path: std::env::temp_dir().join("hangman.log"),
        }
    }
}

impl GameConfig {
    pub fn time_per_frame(&self) -> Duration {
        per_second(self.fps)
    }

    pub fn time_per_update(&self) -> Duration {
        per_second(self.ups)
    }
}

fn per_second(rate: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(rate.max(1)))
}
