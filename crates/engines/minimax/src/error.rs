//! Errors raised at the engine's boundaries.
//!
//! Search and evaluation are infallible; only parsing and configuration can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("invalid move '{0}'")]
    InvalidMove(String),

    #[error("illegal move '{0}' in this position")]
    IllegalMove(String),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}
