//! Arena geometry: coordinates, edges, sectors and lanes.
//!
//! The arena is a 28x28 diamond. The lower half (y < 14) belongs to this
//! player; breaches and defensive plans are reasoned about in quadrant
//! sectors of that half.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the square grid that bounds the diamond arena.
pub const ARENA_SIZE: i32 = 28;

/// First row of the opponent's half.
pub const HALF_ARENA: i32 = 14;

/// A battlefield cell. Pure value type, no identity beyond its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies inside the diamond arena.
    pub fn in_arena(&self) -> bool {
        self.x + self.y >= HALF_ARENA - 1
            && self.x - self.y <= HALF_ARENA
            && self.y - self.x <= HALF_ARENA
            && self.x + self.y <= 3 * HALF_ARENA - 1
    }

    /// Whether the cell lies on this player's half of the arena.
    pub fn on_own_half(&self) -> bool {
        self.in_arena() && self.y < HALF_ARENA
    }

    /// Reflect across the vertical center line: `mirror(x) = 27 - x`.
    pub fn mirrored(&self) -> Self {
        Self::new(ARENA_SIZE - 1 - self.x, self.y)
    }

    /// The four orthogonal neighbours, unfiltered.
    pub fn neighbours(&self) -> [Coord; 4] {
        [
            Self::new(self.x + 1, self.y),
            Self::new(self.x - 1, self.y),
            Self::new(self.x, self.y + 1),
            Self::new(self.x, self.y - 1),
        ]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four diagonal boundary runs of the diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Edge {
    /// The edge a boundary cell belongs to, if any.
    pub fn containing(at: Coord) -> Option<Edge> {
        if !at.in_arena() {
            return None;
        }
        if at.x + at.y == HALF_ARENA - 1 {
            Some(Edge::BottomLeft)
        } else if at.x - at.y == HALF_ARENA {
            Some(Edge::BottomRight)
        } else if at.y - at.x == HALF_ARENA {
            Some(Edge::TopLeft)
        } else if at.x + at.y == 3 * HALF_ARENA - 1 {
            Some(Edge::TopRight)
        } else {
            None
        }
    }

    /// The diagonally opposite edge, which mobile units path toward.
    pub fn opposite(&self) -> Edge {
        match self {
            Edge::TopLeft => Edge::BottomRight,
            Edge::TopRight => Edge::BottomLeft,
            Edge::BottomLeft => Edge::TopRight,
            Edge::BottomRight => Edge::TopLeft,
        }
    }

    /// Whether the cell lies on this edge.
    pub fn contains(&self, at: Coord) -> bool {
        Edge::containing(at) == Some(*self)
    }

    /// Whether the cell lies on either of this player's spawn edges.
    pub fn on_own_edge(at: Coord) -> bool {
        matches!(
            Edge::containing(at),
            Some(Edge::BottomLeft) | Some(Edge::BottomRight)
        )
    }
}

/// Defense quadrant of this player's half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// All sectors, in a fixed iteration order.
pub const ALL_SECTORS: [Sector; 4] = [
    Sector::TopLeft,
    Sector::TopRight,
    Sector::BottomLeft,
    Sector::BottomRight,
];

impl Sector {
    /// Classify a cell of our half: left when `x <= 13`, top when `y >= 7`.
    pub fn classify(at: Coord) -> Sector {
        let left = at.x <= HALF_ARENA - 1;
        let top = at.y >= HALF_ARENA / 2;
        match (left, top) {
            (true, true) => Sector::TopLeft,
            (false, true) => Sector::TopRight,
            (true, false) => Sector::BottomLeft,
            (false, false) => Sector::BottomRight,
        }
    }

    /// Position in [`ALL_SECTORS`], used for counting.
    pub fn index(&self) -> usize {
        match self {
            Sector::TopLeft => 0,
            Sector::TopRight => 1,
            Sector::BottomLeft => 2,
            Sector::BottomRight => 3,
        }
    }

}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sector::TopLeft => write!(f, "top-left"),
            Sector::TopRight => write!(f, "top-right"),
            Sector::BottomLeft => write!(f, "bottom-left"),
            Sector::BottomRight => write!(f, "bottom-right"),
        }
    }
}

/// One of the two symmetric attack lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lane {
    Left,
    Right,
}

impl Lane {
    /// Position in lane-indexed coordinate tables.
    pub fn index(&self) -> usize {
        match self {
            Lane::Left => 0,
            Lane::Right => 1,
        }
    }
}
