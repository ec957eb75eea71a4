//! Error types for rampart-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown unit shorthand: {0}")]
    UnknownShorthand(String),

    #[error("Unit information missing for kind index {0}")]
    MissingUnitInfo(usize),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
