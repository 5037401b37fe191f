//! Errors raised by scene mutations.
//!
//! Every failure is reported at the point of the invalid mutation. The
//! timeline never partially applies a failing insertion.

use std::path::PathBuf;

use crate::animation::AttributeKind;
use crate::Tick;

/// Errors that can occur while building or querying a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("Invalid geometry: {message}")]
    InvalidGeometry { message: String },

    #[error("Invalid lifetime: appears at {appear}, disappears at {disappear}")]
    InvalidLifetime { appear: Tick, disappear: Tick },

    #[error("Invalid animation interval: starts at {start}, ends at {end} (need 0 <= start < end)")]
    InvalidInterval { start: Tick, end: Tick },

    #[error("A shape named {name:?} already exists")]
    DuplicateName { name: String },

    #[error("No shape named {name:?}")]
    UnknownTarget { name: String },

    #[error("{kind} animation on {target:?} over [{start}, {end}) overlaps an existing one")]
    ConflictingAnimation {
        target: String,
        kind: AttributeKind,
        start: Tick,
        end: Tick,
    },

    #[error("Animation is already bound to {target:?}")]
    AlreadyBound { target: String },

    #[error("Animation has not been bound to a shape")]
    NotBound,

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias using SceneError.
pub type SceneResult<T> = Result<T, SceneError>;

impl SceneError {
    pub fn invalid_geometry(msg: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: msg.into(),
        }
    }
}
