//! Resource-budgeted plan walking.

use rampart_core::{Battlefield, BuildPlan, Resource};

/// Minimum pool level required to keep walking a plan.
const MIN_STRUCTURE_COST: f64 = 1.0;

/// Walk `plan` strictly in priority order, spawning one structure per entry.
///
/// Stops as soon as the amount spent since entry reaches `cap` (when given)
/// or the structure pool drops below the minimum unit cost. A rejected
/// placement (occupied cell, out of bounds) is skipped without consuming
/// budget, so the walk doubles as an idempotent repair pass: on a fully
/// built sector nothing spawns and nothing is spent.
///
/// The pool is re-read from the engine before every entry because each
/// successful spawn changes it.
pub fn place(field: &mut impl Battlefield, plan: &BuildPlan, cap: Option<f64>) {
    let initial = field.resource(Resource::Structure);
    for entry in plan.entries() {
        let current = field.resource(Resource::Structure);
        if let Some(cap) = cap {
            if initial - current >= cap {
                return;
            }
        }
        if current < MIN_STRUCTURE_COST {
            return;
        }
        let _ = field.attempt_spawn(entry.kind, entry.at, 1);
    }
}
