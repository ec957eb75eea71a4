//! Engine-reported events consumed by the decision core.

use crate::coord::Coord;

/// One breach: an offensive unit crossed a player's edge.
///
/// Produced once per action frame by the engine adapter, consumed once by
/// the breach tracker, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachEvent {
    /// Cell where the breaching unit crossed the edge.
    pub at: Coord,
    /// True when this player suffered the breach.
    pub self_suffered: bool,
}

impl BreachEvent {
    pub const fn new(at: Coord, self_suffered: bool) -> Self {
        Self { at, self_suffered }
    }
}
