//! The composed per-turn offense/defense policy.

use crate::breach::BreachTracker;
use crate::placer;
use crate::plans::{Plans, LAUNCH_CANDIDATES, RUSH_SPAWNS};
use crate::risk;
use rampart_core::{Battlefield, BreachEvent, Lane, Resource, UnitKind, ALL_SECTORS};
use tracing::{debug, info};

/// Entries of each defensive plan placed unconditionally every turn.
const BASELINE_ENTRIES: usize = 2;

/// Count passed to the unconditional wave spawn; the engine saturates it
/// to whatever the mobile pool allows.
const SATURATING_WAVE: u32 = 1000;

/// Decides one turn: baseline defense, lane choice, rush, wave, repair.
///
/// Owns the breach tracker across turns; the only other cross-turn state is
/// the tracker's persisted last sector.
#[derive(Debug)]
pub struct TurnPlanner {
    plans: Plans,
    breaches: BreachTracker,
    rush_threshold: f64,
    wave_size: u32,
}

impl TurnPlanner {
    pub fn new(plans: Plans, rush_threshold: f64, wave_size: u32) -> Self {
        Self {
            plans,
            breaches: BreachTracker::new(),
            rush_threshold,
            wave_size,
        }
    }

    /// Ingest one engine-reported breach event. Called out-of-band between
    /// turns, any number of times, never concurrently with `play_turn`.
    pub fn record_breach(&mut self, event: BreachEvent) {
        self.breaches.record(event);
    }

    /// Decide and emit one turn's actions, then clear the breach window.
    /// The caller submits the accumulated actions afterwards.
    pub fn play_turn(&mut self, field: &mut impl Battlefield) {
        self.place_baseline(field);

        let mobile = field.resource(Resource::Mobile);
        debug!(mobile, "planning offense");

        let launch = risk::select_safest(field, &LAUNCH_CANDIDATES)
            .unwrap_or(LAUNCH_CANDIDATES[0]);
        let lane = if launch == LAUNCH_CANDIDATES[0] {
            Lane::Left
        } else {
            Lane::Right
        };
        self.rush(field, lane);

        // The saturating wave fires regardless of the rush outcome; the
        // engine's own spend ordering resolves the shared pool.
        let waved = field.attempt_spawn(UnitKind::Scout, launch, SATURATING_WAVE);
        info!(at = %launch, count = waved, "launched scout wave");

        let sector = self.breaches.select_hit_sector();
        info!(%sector, "reinforcing sector");
        placer::place(field, self.plans.for_sector(sector), None);

        // Second repair pass in case the first left (or freed) budget.
        if field.resource(Resource::Structure) >= 1.0 {
            placer::place(field, self.plans.for_sector(sector), None);
        }

        self.breaches.reset_window();
    }

    /// Cheap baseline: the two highest-priority entries of every sector's
    /// plan, attempted directly without budget tracking.
    fn place_baseline(&self, field: &mut impl Battlefield) {
        for sector in ALL_SECTORS {
            for entry in self.plans.for_sector(sector).head(BASELINE_ENTRIES) {
                let _ = field.attempt_spawn(entry.kind, entry.at, 1);
            }
        }
    }

    /// Threshold-gated rush: build the support tunnel, then spawn a fixed
    /// wave of scouts down the chosen lane. A no-op below the threshold.
    fn rush(&self, field: &mut impl Battlefield, lane: Lane) {
        if field.resource(Resource::Mobile) < self.rush_threshold {
            return;
        }
        placer::place(field, self.plans.tunnel(), None);
        let spawn = RUSH_SPAWNS[lane.index()];
        let spawned = field.attempt_spawn(UnitKind::Scout, spawn, self.wave_size);
        info!(at = %spawn, count = spawned, "rush wave");
    }

    /// Diagnostic access to the breach tracker.
    pub fn breaches(&self) -> &BreachTracker {
        &self.breaches
    }
}
