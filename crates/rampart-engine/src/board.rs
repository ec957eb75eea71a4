//! Per-turn board state: structure occupancy and enemy turret positions.

use crate::frame::Frame;
use rampart_core::{Coord, UnitKind, UnitRoster};
use std::collections::HashSet;

/// Structure occupancy rebuilt from each turn frame.
///
/// Structures from both players block movement; enemy turrets are kept
/// separately for threat queries. Placements made during the current turn
/// are added as they are spawned so later pathfinding sees them.
#[derive(Debug, Clone, Default)]
pub struct Board {
    occupied: HashSet<Coord>,
    enemy_turrets: Vec<Coord>,
    turret_range: f64,
}

impl Board {
    /// Build the board from a turn frame.
    pub fn from_frame(frame: &Frame, roster: &UnitRoster) -> Self {
        let mut board = Board {
            turret_range: roster.range(UnitKind::Turret),
            ..Board::default()
        };
        for &(_, at) in &frame.own_structures {
            board.occupy(at);
        }
        for &(kind, at) in &frame.enemy_structures {
            board.occupy(at);
            if kind == UnitKind::Turret {
                board.enemy_turrets.push(at);
            }
        }
        board
    }

    /// Whether a structure occupies the cell.
    pub fn is_blocked(&self, at: Coord) -> bool {
        self.occupied.contains(&at)
    }

    /// Mark a cell as structure-occupied.
    pub fn occupy(&mut self, at: Coord) {
        let _ = self.occupied.insert(at);
    }

    /// Enemy turrets within attack range of the cell.
    pub fn attackers_at(&self, at: Coord) -> Vec<Coord> {
        let range_sq = self.turret_range * self.turret_range;
        self.enemy_turrets
            .iter()
            .copied()
            .filter(|t| {
                let dx = (t.x - at.x) as f64;
                let dy = (t.y - at.y) as f64;
                dx * dx + dy * dy <= range_sq
            })
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn with_turret_range(range: f64) -> Self {
        Board {
            turret_range: range,
            ..Board::default()
        }
    }

    #[cfg(test)]
    pub(crate) fn add_enemy_turret(&mut self, at: Coord) {
        self.occupy(at);
        self.enemy_turrets.push(at);
    }
}
