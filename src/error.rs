//! Error types for the parlor crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the parlor crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} is already occupied")]
    InvalidMove { position: usize },

    #[error("position {position} is out of bounds (must be 0-8)")]
    InvalidPosition { position: usize },

    #[error("game already over")]
    GameOver,

    #[error("invalid choice '{input}' (expected one of: stone, paper, scissor)")]
    InvalidChoice { input: String },

    #[error("choice script has no entries")]
    EmptyScript,

    #[error("invalid configuration in '{}': {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
