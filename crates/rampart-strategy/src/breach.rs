//! Breach bookkeeping and hit-sector selection.

use rampart_core::{BreachEvent, Coord, Sector, ALL_SECTORS};
use tracing::debug;

/// Tracks where the opponent has breached our edge.
///
/// Keeps an unbounded diagnostic log of every suffered breach plus a
/// per-turn window that feeds the sector decision. The window never spans
/// a turn boundary: it is cleared once per turn after the decision is made.
#[derive(Debug)]
pub struct BreachTracker {
    log: Vec<Coord>,
    window: Vec<Coord>,
    last_sector: Sector,
}

impl Default for BreachTracker {
    fn default() -> Self {
        Self {
            log: Vec::new(),
            window: Vec::new(),
            last_sector: Sector::TopLeft,
        }
    }
}

impl BreachTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one breach event. Breaches suffered by the opponent are not
    /// this subsystem's concern and are dropped.
    pub fn record(&mut self, event: BreachEvent) {
        if !event.self_suffered {
            return;
        }
        debug!(at = %event.at, "suffered a breach");
        self.log.push(event.at);
        self.window.push(event.at);
    }

    /// Clear the per-turn window. Called exactly once per turn, after the
    /// sector decision and before the next turn's events arrive.
    pub fn reset_window(&mut self) {
        self.window.clear();
    }

    /// The quadrant with strictly the most breaches in the current window.
    ///
    /// On an empty window or a tied maximum the previously chosen sector is
    /// returned unchanged (top-left before any decision has been made);
    /// persisted state only moves when a unique maximum exists.
    pub fn select_hit_sector(&mut self) -> Sector {
        let mut counts = [0u32; 4];
        for &at in &self.window {
            counts[Sector::classify(at).index()] += 1;
        }

        let max = counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            return self.last_sector;
        }
        let winners = counts.iter().filter(|&&c| c == max).count();
        if winners != 1 {
            return self.last_sector;
        }

        let sector = ALL_SECTORS[counts.iter().position(|&c| c == max).unwrap_or(0)];
        self.last_sector = sector;
        debug!(%sector, breaches = self.window.len(), "most-hit sector");
        sector
    }

    /// All suffered breaches ever observed. Diagnostic only.
    pub fn log(&self) -> &[Coord] {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(tracker: &mut BreachTracker, x: i32, y: i32) {
        tracker.record(BreachEvent::new(Coord::new(x, y), true));
    }

    #[test]
    fn single_quadrant_breaches_select_that_quadrant() {
        let mut tracker = BreachTracker::new();
        hit(&mut tracker, 20, 2);
        hit(&mut tracker, 22, 4);
        assert_eq!(tracker.select_hit_sector(), Sector::BottomRight);
    }

    #[test]
    fn empty_window_falls_back_to_default_then_to_last() {
        let mut tracker = BreachTracker::new();
        assert_eq!(tracker.select_hit_sector(), Sector::TopLeft);

        hit(&mut tracker, 20, 10);
        assert_eq!(tracker.select_hit_sector(), Sector::TopRight);
        tracker.reset_window();
        assert_eq!(tracker.select_hit_sector(), Sector::TopRight);
    }

    #[test]
    fn tie_keeps_the_persisted_sector() {
        let mut tracker = BreachTracker::new();
        hit(&mut tracker, 2, 10);
        assert_eq!(tracker.select_hit_sector(), Sector::TopLeft);
        tracker.reset_window();

        hit(&mut tracker, 20, 10);
        hit(&mut tracker, 20, 2);
        assert_eq!(tracker.select_hit_sector(), Sector::TopLeft);
    }

    #[test]
    fn opponent_breaches_are_ignored() {
        let mut tracker = BreachTracker::new();
        tracker.record(BreachEvent::new(Coord::new(20, 2), false));
        assert_eq!(tracker.select_hit_sector(), Sector::TopLeft);
        assert!(tracker.log().is_empty());
    }

    #[test]
    fn one_turn_of_topleft_breaches_then_empty_window() {
        let mut tracker = BreachTracker::new();
        hit(&mut tracker, 5, 10);
        hit(&mut tracker, 6, 11);
        assert_eq!(tracker.select_hit_sector(), Sector::TopLeft);
        tracker.reset_window();
        assert_eq!(tracker.select_hit_sector(), Sector::TopLeft);
        assert_eq!(tracker.log().len(), 2);
    }
}
