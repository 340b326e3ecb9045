//! Error types for Vidqa.

use thiserror::Error;

/// Library-level error type for Vidqa operations.
#[derive(Error, Debug)]
pub enum VidqaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The video exists but has no caption track. Surfaced distinctly so
    /// callers can tell the user, rather than treating it as a transport
    /// failure.
    #[error("No captions available for this video.")]
    CaptionsUnavailable,

    #[error("Transcript fetch failed: {0}")]
    TranscriptFetch(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    #[error("Answer generation failed: {0}")]
    Generation(String),

    /// `ask` was called before any video was successfully loaded.
    #[error("No video loaded yet.")]
    NoActiveSession,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for Vidqa operations.
pub type Result<T> = std::result::Result<T, VidqaError>;
