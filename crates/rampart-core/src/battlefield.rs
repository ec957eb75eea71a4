//! The seam between the decision core and the engine adapter.
//!
//! The decision crates only ever see this trait; the engine crate provides
//! the real implementation backed by the parsed turn frame, and tests script
//! their own. Pool levels are always read through `resource` immediately
//! before use because placements change them mid-turn.

use crate::coord::Coord;
use crate::units::{Resource, UnitKind};

/// Engine-side battlefield contract consumed by the decision core.
pub trait Battlefield {
    /// Current level of a resource pool. Never cached by callers.
    fn resource(&self, pool: Resource) -> f64;

    /// Side-effect-free placement check.
    fn can_spawn(&self, kind: UnitKind, at: Coord) -> bool;

    /// Place up to `count` units of `kind` at `at`, paying per success.
    ///
    /// Returns the number actually placed; saturates to whatever the pool
    /// allows. A rejected placement is a zero, never an error.
    fn attempt_spawn(&mut self, kind: UnitKind, at: Coord, count: u32) -> u32;

    /// Path a mobile unit would take from `from` to the opposing edge under
    /// current occupancy, or `None` when no route exists.
    fn path_to_edge(&self, from: Coord) -> Option<Vec<Coord>>;

    /// Positions of enemy static defenses able to hit the cell right now.
    fn attackers_at(&self, at: Coord) -> Vec<Coord>;

    /// Per-kind base damage value from the unit roster.
    fn unit_damage(&self, kind: UnitKind) -> f64;
}
