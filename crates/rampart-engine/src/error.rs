//! Error types for rampart-engine.

use thiserror::Error;

/// Engine adapter error types.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed frame: {0}")]
    MalformedFrame(String),

    #[error("Core error: {0}")]
    Core(#[from] rampart_core::CoreError),
}

/// Result type alias for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;
