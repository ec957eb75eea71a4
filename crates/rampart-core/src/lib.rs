//! Core domain types for the rampart turn bot.
//!
//! This crate provides the types shared by every other crate:
//! - `Coord`: diamond-arena cell coordinates with mirroring and edge logic
//! - `Sector`, `Lane`: defense quadrants and symmetric attack lanes
//! - `UnitKind`, `Resource`, `UnitRoster`: unit taxonomy and the per-game
//!   shorthand/cost/damage table resolved from the engine config
//! - `BuildPlan`: ordered, priority-ranked placement sequences
//! - `Battlefield`: the seam between the decision core and the engine adapter

pub mod battlefield;
pub mod coord;
pub mod error;
pub mod event;
pub mod plan;
pub mod units;

pub use battlefield::Battlefield;
pub use event::BreachEvent;
pub use coord::{Coord, Edge, Lane, Sector, ALL_SECTORS, ARENA_SIZE, HALF_ARENA};
pub use error::{CoreError, Result};
pub use plan::{BuildPlan, PlanEntry};
pub use units::{RawUnitInfo, Resource, UnitKind, UnitRoster, ALL_KINDS};
