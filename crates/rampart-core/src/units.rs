//! Unit taxonomy and the per-game unit roster.
//!
//! The engine assigns each unit kind a shorthand code in its startup config.
//! `UnitRoster` resolves that table once at game start and is passed by
//! reference into every component that needs kind resolution; there are no
//! process-wide mutable lookups.

use crate::error::{CoreError, Result};
use serde::Deserialize;
use std::fmt;

/// The two spendable resource pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Slow-replenishing pool spent on static structures.
    Structure,
    /// Per-turn pool spent on mobile units.
    Mobile,
}

/// Unit kinds, in the fixed order the engine config lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    Wall,
    Support,
    Turret,
    Scout,
    Demolisher,
    Interceptor,
}

/// All kinds, indexable by config position.
pub const ALL_KINDS: [UnitKind; 6] = [
    UnitKind::Wall,
    UnitKind::Support,
    UnitKind::Turret,
    UnitKind::Scout,
    UnitKind::Demolisher,
    UnitKind::Interceptor,
];

impl UnitKind {
    /// Position in the engine config's `unitInformation` array.
    pub fn config_index(&self) -> usize {
        match self {
            UnitKind::Wall => 0,
            UnitKind::Support => 1,
            UnitKind::Turret => 2,
            UnitKind::Scout => 3,
            UnitKind::Demolisher => 4,
            UnitKind::Interceptor => 5,
        }
    }

    /// Whether the kind is a static structure (occupies a cell).
    pub fn is_structure(&self) -> bool {
        matches!(self, UnitKind::Wall | UnitKind::Support | UnitKind::Turret)
    }

    /// The pool this kind is paid from.
    pub fn pool(&self) -> Resource {
        if self.is_structure() {
            Resource::Structure
        } else {
            Resource::Mobile
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitKind::Wall => write!(f, "wall"),
            UnitKind::Support => write!(f, "support"),
            UnitKind::Turret => write!(f, "turret"),
            UnitKind::Scout => write!(f, "scout"),
            UnitKind::Demolisher => write!(f, "demolisher"),
            UnitKind::Interceptor => write!(f, "interceptor"),
        }
    }
}

/// Raw unit descriptor from the engine config.
///
/// Older and newer config revisions spell the numeric fields differently,
/// so every spelling is accepted and resolved in priority order.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUnitInfo {
    pub shorthand: String,
    #[serde(default)]
    pub cost1: Option<f64>,
    #[serde(default)]
    pub cost2: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default, rename = "attackDamageWalker")]
    pub attack_damage_walker: Option<f64>,
    #[serde(default)]
    pub damage: Option<f64>,
    #[serde(default, rename = "attackRange")]
    pub attack_range: Option<f64>,
    #[serde(default)]
    pub range: Option<f64>,
}

/// Resolved per-kind stats.
#[derive(Debug, Clone)]
struct UnitStats {
    shorthand: String,
    cost: f64,
    damage: f64,
    range: f64,
}

/// Per-game unit table: shorthand codes, costs, damage and range per kind.
///
/// Built exactly once from the engine's startup config and never mutated.
#[derive(Debug, Clone)]
pub struct UnitRoster {
    stats: Vec<UnitStats>,
}

/// Fallback structure cost when the config omits every cost field.
const DEFAULT_COST: f64 = 1.0;

/// Fallback turret attack range in cells.
const DEFAULT_RANGE: f64 = 3.5;

impl UnitRoster {
    /// Resolve the roster from the config's `unitInformation` array.
    ///
    /// The array must carry at least the six canonical kinds, in order.
    /// Extra trailing descriptors (upgrades, removals) are ignored.
    pub fn from_unit_information(info: &[RawUnitInfo]) -> Result<Self> {
        let mut stats = Vec::with_capacity(ALL_KINDS.len());
        for kind in ALL_KINDS {
            let raw = info
                .get(kind.config_index())
                .ok_or(CoreError::MissingUnitInfo(kind.config_index()))?;
            if raw.shorthand.is_empty() {
                return Err(CoreError::InvalidConfig(format!(
                    "empty shorthand for {kind}"
                )));
            }
            stats.push(UnitStats {
                shorthand: raw.shorthand.clone(),
                cost: raw
                    .cost1
                    .or(raw.cost2)
                    .or(raw.cost)
                    .unwrap_or(DEFAULT_COST),
                damage: raw.attack_damage_walker.or(raw.damage).unwrap_or(0.0),
                range: raw.attack_range.or(raw.range).unwrap_or(DEFAULT_RANGE),
            });
        }
        Ok(Self { stats })
    }

    /// Engine shorthand code for a kind.
    pub fn shorthand(&self, kind: UnitKind) -> &str {
        &self.stats[kind.config_index()].shorthand
    }

    /// Pool cost of one unit of the kind.
    pub fn cost(&self, kind: UnitKind) -> f64 {
        self.stats[kind.config_index()].cost
    }

    /// Base per-hit damage dealt by the kind to mobile units.
    pub fn damage(&self, kind: UnitKind) -> f64 {
        self.stats[kind.config_index()].damage
    }

    /// Attack range of the kind in cells.
    pub fn range(&self, kind: UnitKind) -> f64 {
        self.stats[kind.config_index()].range
    }

    /// The kind carrying a given shorthand code, if any.
    pub fn kind_of(&self, shorthand: &str) -> Result<UnitKind> {
        ALL_KINDS
            .into_iter()
            .find(|k| self.stats[k.config_index()].shorthand == shorthand)
            .ok_or_else(|| CoreError::UnknownShorthand(shorthand.to_string()))
    }
}
