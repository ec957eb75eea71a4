//! Per-turn decision core for the rampart bot.
//!
//! Components, leaves first:
//! - `breach`: sliding per-turn bookkeeping of suffered breaches
//! - `risk`: path-exposure scoring of candidate launch cells
//! - `placer`: resource-budgeted walk of an ordered build plan
//! - `plans`: the static sector build plans and policy constants
//! - `planner`: the composed per-turn offense/defense policy
//!
//! Everything here talks to the engine only through the
//! [`rampart_core::Battlefield`] trait and never caches pool levels.

pub mod breach;
pub mod placer;
pub mod planner;
pub mod plans;
pub mod risk;

pub use breach::BreachTracker;
pub use planner::TurnPlanner;
pub use plans::Plans;

#[cfg(test)]
pub(crate) mod harness {
    //! Scripted battlefield for decision tests.

    use rampart_core::{Battlefield, Coord, Resource, UnitKind};
    use std::collections::{HashMap, HashSet};

    /// A battlefield whose paths, threats and pools are fixed by the test.
    ///
    /// Every unit costs one point of its pool, matching the cost model the
    /// placer budgets against.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedField {
        pub structure_pool: f64,
        pub mobile_pool: f64,
        pub blocked: HashSet<Coord>,
        pub paths: HashMap<Coord, Vec<Coord>>,
        pub attacker_counts: HashMap<Coord, usize>,
        pub turret_damage: f64,
        /// Every successful spawn, in order.
        pub spawned: Vec<(UnitKind, Coord, u32)>,
        /// Every attempt_spawn call, successful or not.
        pub attempts: Vec<(UnitKind, Coord)>,
    }

    impl ScriptedField {
        pub(crate) fn with_pools(structure_pool: f64, mobile_pool: f64) -> Self {
            Self {
                structure_pool,
                mobile_pool,
                turret_damage: 5.0,
                ..Self::default()
            }
        }

        pub(crate) fn script_path(&mut self, from: Coord, path: Vec<Coord>) {
            let _ = self.paths.insert(from, path);
        }

        pub(crate) fn script_attackers(&mut self, at: Coord, count: usize) {
            let _ = self.attacker_counts.insert(at, count);
        }

        pub(crate) fn spawned_of(&self, kind: UnitKind) -> u32 {
            self.spawned
                .iter()
                .filter(|(k, _, _)| *k == kind)
                .map(|(_, _, n)| n)
                .sum()
        }
    }

    impl Battlefield for ScriptedField {
        fn resource(&self, pool: Resource) -> f64 {
            match pool {
                Resource::Structure => self.structure_pool,
                Resource::Mobile => self.mobile_pool,
            }
        }

        fn can_spawn(&self, kind: UnitKind, at: Coord) -> bool {
            !self.blocked.contains(&at) && self.resource(kind.pool()) >= 1.0
        }

        fn attempt_spawn(&mut self, kind: UnitKind, at: Coord, count: u32) -> u32 {
            self.attempts.push((kind, at));
            let mut spawned = 0;
            for _ in 0..count {
                if !self.can_spawn(kind, at) {
                    break;
                }
                match kind.pool() {
                    Resource::Structure => {
                        self.structure_pool -= 1.0;
                        // A structure fills its cell.
                        let _ = self.blocked.insert(at);
                    }
                    Resource::Mobile => self.mobile_pool -= 1.0,
                }
                spawned += 1;
            }
            if spawned > 0 {
                self.spawned.push((kind, at, spawned));
            }
            spawned
        }

        fn path_to_edge(&self, from: Coord) -> Option<Vec<Coord>> {
            self.paths.get(&from).cloned()
        }

        fn attackers_at(&self, at: Coord) -> Vec<Coord> {
            let count = self.attacker_counts.get(&at).copied().unwrap_or(0);
            vec![Coord::new(0, 14); count]
        }

        fn unit_damage(&self, _kind: UnitKind) -> f64 {
            self.turret_damage
        }
    }
}
