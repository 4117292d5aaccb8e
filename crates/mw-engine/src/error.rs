//! Error types for the engine and its session driver.

use thiserror::Error;

use mw_core::CoreError;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while driving a session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A tag economy rule was violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid session command argument.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown session command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Snapshot file could not be read or written.
    #[error("snapshot i/o: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot contents could not be (de)serialized.
    #[error("snapshot format: {0}")]
    Format(#[from] serde_json::Error),
}
