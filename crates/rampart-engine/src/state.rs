//! Per-turn game state and action accumulation.
//!
//! `GameState` is the live `Battlefield` implementation for one turn: it
//! tracks the two resource pools, applies placements to the board as they
//! are made, and accumulates the build and deploy stacks that are rendered
//! into the two submission lines.

use crate::board::Board;
use crate::error::EngineResult;
use crate::frame::Frame;
use crate::path;
use rampart_core::{Battlefield, Coord, Edge, Resource, UnitKind, UnitRoster};

/// One queued spawn order: `[shorthand, x, y]` on the wire.
type SpawnOrder = (String, i32, i32);

/// Mutable battlefield view for a single turn.
#[derive(Debug)]
pub struct GameState<'r> {
    roster: &'r UnitRoster,
    board: Board,
    structure_points: f64,
    mobile_points: f64,
    build_stack: Vec<SpawnOrder>,
    deploy_stack: Vec<SpawnOrder>,
}

impl<'r> GameState<'r> {
    /// Build the turn state from a parsed deploy frame.
    pub fn from_frame(frame: &Frame, roster: &'r UnitRoster) -> Self {
        Self::new(
            roster,
            Board::from_frame(frame, roster),
            frame.structure_points,
            frame.mobile_points,
        )
    }

    pub fn new(
        roster: &'r UnitRoster,
        board: Board,
        structure_points: f64,
        mobile_points: f64,
    ) -> Self {
        Self {
            roster,
            board,
            structure_points,
            mobile_points,
            build_stack: Vec::new(),
            deploy_stack: Vec::new(),
        }
    }

    /// Render the two submission lines: build stack, then deploy stack.
    pub fn submit_lines(&self) -> EngineResult<(String, String)> {
        Ok((
            serde_json::to_string(&self.build_stack)?,
            serde_json::to_string(&self.deploy_stack)?,
        ))
    }

    /// Number of queued orders across both stacks.
    pub fn queued_orders(&self) -> usize {
        self.build_stack.len() + self.deploy_stack.len()
    }

    fn pool_mut(&mut self, pool: Resource) -> &mut f64 {
        match pool {
            Resource::Structure => &mut self.structure_points,
            Resource::Mobile => &mut self.mobile_points,
        }
    }
}

impl Battlefield for GameState<'_> {
    fn resource(&self, pool: Resource) -> f64 {
        match pool {
            Resource::Structure => self.structure_points,
            Resource::Mobile => self.mobile_points,
        }
    }

    fn can_spawn(&self, kind: UnitKind, at: Coord) -> bool {
        if !at.on_own_half() || self.board.is_blocked(at) {
            return false;
        }
        if !kind.is_structure() && !Edge::on_own_edge(at) {
            return false;
        }
        self.resource(kind.pool()) >= self.roster.cost(kind)
    }

    fn attempt_spawn(&mut self, kind: UnitKind, at: Coord, count: u32) -> u32 {
        let mut spawned = 0;
        for _ in 0..count {
            if !self.can_spawn(kind, at) {
                break;
            }
            *self.pool_mut(kind.pool()) -= self.roster.cost(kind);
            let order = (self.roster.shorthand(kind).to_string(), at.x, at.y);
            if kind.is_structure() {
                self.board.occupy(at);
                self.build_stack.push(order);
            } else {
                self.deploy_stack.push(order);
            }
            spawned += 1;
        }
        spawned
    }

    fn path_to_edge(&self, from: Coord) -> Option<Vec<Coord>> {
        path::path_to_edge(&self.board, from)
    }

    fn attackers_at(&self, at: Coord) -> Vec<Coord> {
        self.board.attackers_at(at)
    }

    fn unit_damage(&self, kind: UnitKind) -> f64 {
        self.roster.damage(kind)
    }
}
