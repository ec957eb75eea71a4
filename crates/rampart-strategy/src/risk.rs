//! Path-exposure risk scoring for candidate launch cells.

use rampart_core::{Battlefield, Coord, UnitKind};
use tracing::debug;

/// Score assigned to a candidate with no route to the opposing edge.
/// Large enough that any reachable candidate beats it.
const UNREACHABLE_PENALTY: f64 = 10_000.0;

/// Total exposure a unit launched at `from` would accumulate: for every
/// cell on its path, the number of enemy turrets covering the cell times
/// the turret's per-hit damage. A static proxy, not a rate-of-fire model.
pub fn path_exposure(field: &impl Battlefield, from: Coord) -> f64 {
    match field.path_to_edge(from) {
        None => UNREACHABLE_PENALTY,
        Some(path) => {
            let damage = field.unit_damage(UnitKind::Turret);
            path.iter()
                .map(|&cell| field.attackers_at(cell).len() as f64 * damage)
                .sum()
        }
    }
}

/// The candidate with the smallest accumulated exposure. Stable: ties
/// resolve to the earliest candidate. `None` only for an empty slice.
pub fn select_safest(field: &impl Battlefield, options: &[Coord]) -> Option<Coord> {
    let mut best: Option<(Coord, f64)> = None;
    for &option in options {
        let score = path_exposure(field, option);
        debug!(at = %option, score, "launch candidate exposure");
        if best.map_or(true, |(_, s)| score < s) {
            best = Some((option, score));
        }
    }
    best.map(|(at, _)| at)
}
