//! Static sector build plans and policy constants.
//!
//! Plans are immutable configuration: constructed once at startup,
//! pre-mirrored for the right-side sectors, then only read. Selection is a
//! pure function of the sector; no mirroring happens at call sites.

use rampart_core::{BuildPlan, Coord, Lane, PlanEntry, Sector, UnitKind};

/// The two fixed launch candidates scored for the offensive wave.
pub const LAUNCH_CANDIDATES: [Coord; 2] = [Coord::new(10, 3), Coord::new(17, 3)];

/// Lane-indexed spawn cells for the rush wave.
pub const RUSH_SPAWNS: [Coord; 2] = [Coord::new(13, 0), Coord::new(14, 0)];

/// Mobile-pool level required to trigger the rush sub-routine.
pub const DEFAULT_RUSH_THRESHOLD: f64 = 10.0;

/// Scouts spawned by one rush wave.
pub const DEFAULT_WAVE_SIZE: u32 = 10;

/// Left-half layout for the top sectors: a wall line backed by turrets,
/// filled outward from the corner.
const TOP_LEFT_LAYOUT: &[(UnitKind, &[(i32, i32)])] = &[
    (UnitKind::Wall, &[(3, 13)]),
    (UnitKind::Turret, &[(1, 12), (2, 12), (3, 12), (3, 11)]),
    (UnitKind::Wall, &[(0, 13), (1, 13), (2, 13), (4, 12)]),
    (UnitKind::Turret, &[(4, 11), (4, 10)]),
    (UnitKind::Wall, &[(5, 11), (7, 11)]),
    (UnitKind::Turret, &[(5, 10)]),
    (UnitKind::Wall, &[(6, 11)]),
    (UnitKind::Turret, &[(6, 10), (6, 9), (5, 9)]),
    (UnitKind::Wall, &[(7, 11)]),
    (UnitKind::Turret, &[(7, 10), (7, 9)]),
    (UnitKind::Wall, &[(8, 11)]),
    (UnitKind::Turret, &[(8, 10), (8, 9)]),
];

/// Left-half layout for the bottom sectors: turret cluster around the
/// funnel mouth.
const BOTTOM_LEFT_LAYOUT: &[(UnitKind, &[(i32, i32)])] = &[
    (UnitKind::Turret, &[(9, 6), (10, 6), (11, 6)]),
    (UnitKind::Wall, &[(10, 7)]),
    (UnitKind::Wall, &[(9, 8)]),
    (UnitKind::Turret, &[(8, 7), (9, 7), (8, 6)]),
    (UnitKind::Turret, &[(10, 5), (11, 5), (12, 5)]),
    (UnitKind::Wall, &[(11, 9)]),
    (UnitKind::Turret, &[(11, 8), (11, 7)]),
    (UnitKind::Wall, &[(12, 9)]),
    (UnitKind::Turret, &[(12, 8), (12, 7), (12, 6)]),
    (UnitKind::Turret, &[(7, 8), (8, 8), (7, 7)]),
];

/// Support-only left-lane layout for the enemy-lane pseudo-sector.
const LANE_LEFT_COORDS: &[(i32, i32)] = &[
    (9, 5),
    (10, 5),
    (11, 5),
    (12, 5),
    (11, 4),
    (12, 4),
    (8, 5),
    (9, 4),
    (10, 4),
    (11, 2),
    (12, 2),
    (13, 2),
    (12, 1),
    (13, 1),
    (13, 0),
];

/// Central support tunnel built ahead of a rush wave, in rebuild order.
const TUNNEL_COORDS: &[(i32, i32)] = &[
    (12, 1),
    (15, 1),
    (13, 1),
    (14, 3),
    (13, 3),
    (14, 4),
    (10, 3),
    (10, 4),
    (17, 3),
    (17, 4),
    (13, 4),
    (12, 3),
    (15, 3),
    (12, 4),
    (15, 4),
];

fn from_layout(layout: &[(UnitKind, &[(i32, i32)])]) -> BuildPlan {
    let mut entries = Vec::new();
    for &(kind, coords) in layout {
        for &(x, y) in coords {
            entries.push(PlanEntry::new(kind, Coord::new(x, y)));
        }
    }
    BuildPlan::new(entries)
}

/// All build plans for one game, keyed by sector and lane.
#[derive(Debug, Clone)]
pub struct Plans {
    /// Defensive plans indexed by `Sector::index()`.
    defense: [BuildPlan; 4],
    /// Support-only lane plans indexed by `Lane::index()`.
    lane: [BuildPlan; 2],
    tunnel: BuildPlan,
}

impl Plans {
    /// The standard layout set, with right-side variants pre-mirrored.
    pub fn standard() -> Self {
        let top = from_layout(TOP_LEFT_LAYOUT);
        let bottom = from_layout(BOTTOM_LEFT_LAYOUT);
        let lane_left = BuildPlan::uniform(UnitKind::Support, LANE_LEFT_COORDS);
        Self {
            // Sector order: top-left, top-right, bottom-left, bottom-right.
            defense: [top.clone(), top.mirrored(), bottom.clone(), bottom.mirrored()],
            lane: [lane_left.clone(), lane_left.mirrored()],
            tunnel: BuildPlan::uniform(UnitKind::Support, TUNNEL_COORDS),
        }
    }

    /// Defensive plan for a quadrant sector.
    pub fn for_sector(&self, sector: Sector) -> &BuildPlan {
        &self.defense[sector.index()]
    }

    /// Offense-only support plan for an attack lane.
    pub fn for_lane(&self, lane: Lane) -> &BuildPlan {
        &self.lane[lane.index()]
    }

    /// The central support tunnel.
    pub fn tunnel(&self) -> &BuildPlan {
        &self.tunnel
    }
}
