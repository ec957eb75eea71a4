//! rampart turn bot.
//!
//! Main application that wires the pieces together:
//! - stdio line loop speaking the engine's frame protocol
//! - game-start roster resolution
//! - per-turn decision via the strategy planner
//! - action-frame breach ingestion

pub mod app;
pub mod config;
pub mod error;
pub mod logging;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
