//! Crate error type

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("theme color `{token}` has invalid value `{value}`")]
    InvalidColor { token: String, value: String },

    #[error("unknown theme preset `{0}`")]
    UnknownPreset(String),

    #[error("failed to render SVG asset `{name}`: {message}")]
    Svg { name: String, message: String },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
