//! Engine adapter for the rampart turn bot.
//!
//! Everything the decision core treats as external lives here:
//! - `frame`: newline-delimited JSON wire frames (config, turn, action)
//! - `board`: structure occupancy and enemy turret positions per turn
//! - `path`: BFS pathfinding to the opposing edge
//! - `state`: `GameState`, the per-turn `Battlefield` implementation that
//!   accumulates the build/deploy action stacks for submission

pub mod board;
pub mod error;
pub mod frame;
pub mod path;
pub mod state;

pub use board::Board;
pub use error::{EngineError, EngineResult};
pub use frame::{parse_config, Frame, FramePhase};
pub use state::GameState;
