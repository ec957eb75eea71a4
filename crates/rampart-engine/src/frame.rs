//! Wire frame parsing.
//!
//! The engine speaks newline-delimited JSON over stdio. The first line of a
//! game is the config payload; every later line is a frame whose
//! `turnInfo[0]` selects the phase: `0` turn (deploy), `1` action replay,
//! `2` game over.
//!
//! Malformed unit or event rows are logged and skipped; only a frame that
//! cannot be deserialized at all is an error.

use crate::error::{EngineError, EngineResult};
use rampart_core::{BreachEvent, Coord, RawUnitInfo, UnitKind, UnitRoster, ALL_KINDS};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// Raw config payload sent once at game start.
#[derive(Debug, Deserialize)]
struct RawGameConfig {
    #[serde(rename = "unitInformation")]
    unit_information: Vec<RawUnitInfo>,
}

/// Resolve the unit roster from the game-start config line.
pub fn parse_config(line: &str) -> EngineResult<UnitRoster> {
    let raw: RawGameConfig = serde_json::from_str(line)?;
    Ok(UnitRoster::from_unit_information(&raw.unit_information)?)
}

/// Frame phase from `turnInfo[0]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FramePhase {
    /// Start of a turn; the bot must decide and submit.
    Deploy,
    /// Simulation replay frame carrying events.
    Action,
    /// Game over.
    EndGame,
}

#[derive(Debug, Deserialize)]
struct RawFrame {
    #[serde(rename = "turnInfo")]
    turn_info: Vec<f64>,
    #[serde(rename = "p1Stats", default)]
    p1_stats: Vec<f64>,
    #[serde(rename = "p1Units", default)]
    p1_units: Vec<Vec<Vec<Value>>>,
    #[serde(rename = "p2Units", default)]
    p2_units: Vec<Vec<Vec<Value>>>,
    #[serde(default)]
    events: Option<RawEvents>,
}

#[derive(Debug, Default, Deserialize)]
struct RawEvents {
    #[serde(default)]
    breach: Vec<Vec<Value>>,
}

/// A parsed wire frame, reduced to what the bot consumes.
#[derive(Debug, Clone)]
pub struct Frame {
    pub phase: FramePhase,
    pub turn_number: u32,
    /// Our structure-pool level at frame time.
    pub structure_points: f64,
    /// Our mobile-pool level at frame time.
    pub mobile_points: f64,
    /// Our structures on the board.
    pub own_structures: Vec<(UnitKind, Coord)>,
    /// Opponent structures on the board.
    pub enemy_structures: Vec<(UnitKind, Coord)>,
    /// Breach events carried by action frames.
    pub breaches: Vec<BreachEvent>,
}

impl Frame {
    /// Parse one wire line into a frame.
    pub fn parse(line: &str) -> EngineResult<Frame> {
        let raw: RawFrame = serde_json::from_str(line)?;

        let phase = match raw.turn_info.first().map(|v| *v as i64) {
            Some(0) => FramePhase::Deploy,
            Some(1) => FramePhase::Action,
            Some(2) => FramePhase::EndGame,
            other => {
                return Err(EngineError::MalformedFrame(format!(
                    "unknown phase {other:?} in turnInfo"
                )))
            }
        };
        let turn_number = raw.turn_info.get(1).map(|v| *v as u32).unwrap_or(0);

        // p1Stats: [health, structure_pts, mobile_pts, compute_time]
        let structure_points = raw.p1_stats.get(1).copied().unwrap_or(0.0);
        let mobile_points = raw.p1_stats.get(2).copied().unwrap_or(0.0);

        Ok(Frame {
            phase,
            turn_number,
            structure_points,
            mobile_points,
            own_structures: collect_structures(&raw.p1_units),
            enemy_structures: collect_structures(&raw.p2_units),
            breaches: collect_breaches(raw.events.as_ref()),
        })
    }
}

/// Extract structure placements from a per-kind unit table.
///
/// Rows are `[x, y, health, id, ...]`; mobile kinds are skipped since only
/// structures persist on the board between frames.
fn collect_structures(units: &[Vec<Vec<Value>>]) -> Vec<(UnitKind, Coord)> {
    let mut out = Vec::new();
    for kind in ALL_KINDS {
        if !kind.is_structure() {
            continue;
        }
        let Some(rows) = units.get(kind.config_index()) else {
            continue;
        };
        for row in rows {
            match (value_i32(row.get(0)), value_i32(row.get(1))) {
                (Some(x), Some(y)) => out.push((kind, Coord::new(x, y))),
                _ => warn!(?row, "skipping malformed unit row"),
            }
        }
    }
    out
}

/// Extract breach events from an action frame.
///
/// Rows are `[[x, y], damage, kind, id, owner]`. Owner `1` is this player's
/// breaching unit, so rows with any other owner are breaches we suffered.
fn collect_breaches(events: Option<&RawEvents>) -> Vec<BreachEvent> {
    let Some(events) = events else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for row in &events.breach {
        let at = row.get(0).and_then(|loc| {
            let loc = loc.as_array()?;
            Some(Coord::new(
                value_i32(loc.get(0))?,
                value_i32(loc.get(1))?,
            ))
        });
        let owner = row.get(4).and_then(Value::as_i64);
        match (at, owner) {
            (Some(at), Some(owner)) => out.push(BreachEvent::new(at, owner != 1)),
            _ => warn!(?row, "skipping malformed breach row"),
        }
    }
    out
}

fn value_i32(v: Option<&Value>) -> Option<i32> {
    v.and_then(Value::as_f64).map(|f| f as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_line() -> String {
        json!({
            "unitInformation": [
                {"shorthand": "FF", "cost1": 1.0},
                {"shorthand": "EF", "cost1": 4.0},
                {"shorthand": "DF", "cost1": 2.0, "attackDamageWalker": 5.0, "attackRange": 3.5},
                {"shorthand": "PI", "cost2": 1.0},
                {"shorthand": "EI", "cost2": 3.0},
                {"shorthand": "SI", "cost2": 1.0}
            ]
        })
        .to_string()
    }

    #[test]
    fn config_resolves_roster() {
        let roster = parse_config(&config_line()).unwrap();
        assert_eq!(roster.shorthand(UnitKind::Scout), "PI");
        assert_eq!(roster.damage(UnitKind::Turret), 5.0);
    }

    #[test]
    fn deploy_frame_carries_pools_and_structures() {
        let line = json!({
            "turnInfo": [0, 7, -1],
            "p1Stats": [30.0, 12.5, 8.0, 0.01],
            "p2Stats": [30.0, 10.0, 5.0, 0.02],
            "p1Units": [[[3, 13, 60.0, "1"]], [], [[5, 10, 75.0, "2"]], [], [], [], [], []],
            "p2Units": [[], [], [[14, 15, 75.0, "9"]], [], [], [], [], []]
        })
        .to_string();
        let frame = Frame::parse(&line).unwrap();
        assert_eq!(frame.phase, FramePhase::Deploy);
        assert_eq!(frame.turn_number, 7);
        assert_eq!(frame.structure_points, 12.5);
        assert_eq!(frame.mobile_points, 8.0);
        assert_eq!(
            frame.own_structures,
            vec![
                (UnitKind::Wall, Coord::new(3, 13)),
                (UnitKind::Turret, Coord::new(5, 10)),
            ]
        );
        assert_eq!(
            frame.enemy_structures,
            vec![(UnitKind::Turret, Coord::new(14, 15))]
        );
    }

    #[test]
    fn action_frame_breach_owner_flag() {
        let line = json!({
            "turnInfo": [1, 7, 12],
            "p1Stats": [30.0, 12.5, 8.0, 0.01],
            "events": {
                "breach": [
                    [[5, 10], 1.0, 3, "42", 2],
                    [[20, 17], 1.0, 3, "43", 1]
                ]
            }
        })
        .to_string();
        let frame = Frame::parse(&line).unwrap();
        assert_eq!(frame.phase, FramePhase::Action);
        assert_eq!(frame.breaches.len(), 2);
        assert!(frame.breaches[0].self_suffered);
        assert_eq!(frame.breaches[0].at, Coord::new(5, 10));
        assert!(!frame.breaches[1].self_suffered);
    }

    #[test]
    fn malformed_breach_rows_are_skipped() {
        let line = json!({
            "turnInfo": [1, 7, 12],
            "events": { "breach": [["garbage"], [[6, 11], 1.0, 3, "44", 2]] }
        })
        .to_string();
        let frame = Frame::parse(&line).unwrap();
        assert_eq!(frame.breaches.len(), 1);
        assert_eq!(frame.breaches[0].at, Coord::new(6, 11));
    }

    #[test]
    fn unknown_phase_is_an_error() {
        let line = json!({ "turnInfo": [9] }).to_string();
        assert!(Frame::parse(&line).is_err());
    }

    #[test]
    fn end_game_frame() {
        let line = json!({ "turnInfo": [2, 40, -1] }).to_string();
        assert_eq!(Frame::parse(&line).unwrap().phase, FramePhase::EndGame);
    }
}
