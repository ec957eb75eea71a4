//! Pathfinding from a spawn cell to the opposing edge.
//!
//! Mobile units path from the edge they spawn on toward the diagonally
//! opposite edge, moving orthogonally through unblocked arena cells. A BFS
//! shortest path is a faithful stand-in for the engine's router for the one
//! question the bot asks: which cells does a unit transit, if any.

use crate::board::Board;
use rampart_core::{Coord, Edge};
use std::collections::{HashMap, HashSet, VecDeque};

/// Shortest path from `from` to any cell of the opposite edge, or `None`
/// when `from` is off-edge, blocked, or walled off.
pub fn path_to_edge(board: &Board, from: Coord) -> Option<Vec<Coord>> {
    let target = Edge::containing(from)?.opposite();
    if board.is_blocked(from) {
        return None;
    }

    let mut prev: HashMap<Coord, Coord> = HashMap::new();
    let mut seen: HashSet<Coord> = HashSet::new();
    let mut queue = VecDeque::new();
    let _ = seen.insert(from);
    queue.push_back(from);

    while let Some(cell) = queue.pop_front() {
        if target.contains(cell) {
            return Some(reconstruct(&prev, from, cell));
        }
        for next in cell.neighbours() {
            if next.in_arena() && !board.is_blocked(next) && seen.insert(next) {
                let _ = prev.insert(next, cell);
                queue.push_back(next);
            }
        }
    }
    None
}

fn reconstruct(prev: &HashMap<Coord, Coord>, from: Coord, goal: Coord) -> Vec<Coord> {
    let mut path = vec![goal];
    let mut cell = goal;
    while cell != from {
        cell = prev[&cell];
        path.push(cell);
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::{ARENA_SIZE, HALF_ARENA};

    #[test]
    fn open_board_reaches_opposite_edge() {
        let board = Board::with_turret_range(3.5);
        let path = path_to_edge(&board, Coord::new(13, 0)).unwrap();
        assert_eq!(path[0], Coord::new(13, 0));
        let end = *path.last().unwrap();
        assert!(Edge::TopRight.contains(end));
        // BFS path length is the manhattan distance on an open board.
        let dist = (end.x - 13).abs() + end.y;
        assert_eq!(path.len() as i32, dist + 1);
    }

    #[test]
    fn bottom_right_spawn_targets_top_left() {
        let board = Board::with_turret_range(3.5);
        let path = path_to_edge(&board, Coord::new(14, 0)).unwrap();
        assert!(Edge::TopLeft.contains(*path.last().unwrap()));
    }

    #[test]
    fn fully_walled_row_blocks_the_path() {
        let mut board = Board::with_turret_range(3.5);
        // Wall off the entire center row; no route across remains.
        for x in 0..ARENA_SIZE {
            board.occupy(Coord::new(x, HALF_ARENA - 1));
            board.occupy(Coord::new(x, HALF_ARENA));
        }
        assert!(path_to_edge(&board, Coord::new(13, 0)).is_none());
    }

    #[test]
    fn blocked_or_off_edge_start_has_no_path() {
        let mut board = Board::with_turret_range(3.5);
        assert!(path_to_edge(&board, Coord::new(13, 5)).is_none());
        board.occupy(Coord::new(13, 0));
        assert!(path_to_edge(&board, Coord::new(13, 0)).is_none());
    }
}
