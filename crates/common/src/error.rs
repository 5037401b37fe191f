//! Error types shared across tweenkit crates.

use std::path::PathBuf;

/// Top-level error type for tweenkit operations.
#[derive(Debug, thiserror::Error)]
pub enum TweenError {
    #[error("Scene error: {message}")]
    Scene { message: String },

    #[error("Markup error: {message}")]
    Markup { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid tick rate: {rate} (must be at least 1 tick per second)")]
    InvalidRate { rate: u32 },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TweenError.
pub type TweenResult<T> = Result<T, TweenError>;

impl TweenError {
    pub fn scene(msg: impl Into<String>) -> Self {
        Self::Scene {
            message: msg.into(),
        }
    }

    pub fn markup(msg: impl Into<String>) -> Self {
        Self::Markup {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
