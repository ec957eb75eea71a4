//! Ordered build plans.
//!
//! A plan is a priority-ranked sequence of placements: earlier entries are
//! strictly more important. Plans are immutable configuration constructed at
//! startup; the placer walks them in order and never reorders or backtracks.

use crate::coord::Coord;
use crate::units::UnitKind;

/// One placement in a build plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanEntry {
    pub kind: UnitKind,
    pub at: Coord,
}

impl PlanEntry {
    pub const fn new(kind: UnitKind, at: Coord) -> Self {
        Self { kind, at }
    }
}

/// An ordered, priority-ranked sequence of placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildPlan {
    entries: Vec<PlanEntry>,
}

impl BuildPlan {
    pub fn new(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    /// Build a single-kind plan from bare coordinates.
    pub fn uniform(kind: UnitKind, coords: &[(i32, i32)]) -> Self {
        Self::new(
            coords
                .iter()
                .map(|&(x, y)| PlanEntry::new(kind, Coord::new(x, y)))
                .collect(),
        )
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` highest-priority entries (fewer if the plan is shorter).
    pub fn head(&self, n: usize) -> &[PlanEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// The same plan reflected onto the other half of the field.
    pub fn mirrored(&self) -> Self {
        Self::new(
            self.entries
                .iter()
                .map(|e| PlanEntry::new(e.kind, e.at.mirrored()))
                .collect(),
        )
    }
}
