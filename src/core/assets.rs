/// Image loading by name.
///
/// Images are text-art files stored as `<root>/<name>.txt`. A failed load is
/// logged and degrades to `None`; drawing `None` is a no-op on every surface.
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    name: String,
    lines: Vec<String>,
}

impl Image {
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        Self {
            name: name.into(),
            lines: text.lines().map(|line| line.trim_end().to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("image not found: {name}")]
    NotFound { name: String },
    #[error("error loading image {name}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
    #[error("image has no content: {name}")]
    Empty { name: String },
}

#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.txt"))
    }

    pub fn try_load(&self, name: &str) -> Result<Image, AssetError> {
        let text = fs::read_to_string(self.path_for(name)).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                AssetError::NotFound { name: name.to_string() }
            } else {
                AssetError::Io { name: name.to_string(), source }
            }
        })?;

        if text.trim().is_empty() {
            return Err(AssetError::Empty { name: name.to_string() });
        }
        Ok(Image::from_text(name, &text))
    }

    /// Loads `name`, logging the failure and returning `None` when it can't be read.
    pub fn load_image(&self, name: &str) -> Option<Image> {
        match self.try_load(name) {
            Ok(image) => {
                info!(image = name, "loaded image");
                Some(image)
            }
            Err(e) => {
                error!(error = %e, root = %self.root.display(), "image unavailable");
                None
            }
        }
    }
}
