//! Lane-specific parameters.
//!
//! Consolidates the per-lane tuning used by the generic spawner.

use safari_core::components::Body;
use safari_core::constants::*;
use safari_core::enums::LaneKind;
use safari_core::types::{Position, Velocity};

/// Behavioral profile for one lane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneProfile {
    pub kind: LaneKind,
    /// Where new runners appear.
    pub spawn: Position,
    /// Signed horizontal speed (pixels/second). Negative runs right to left.
    pub velocity: Velocity,
    /// X at which runners leave the lane.
    pub despawn_x: f64,
    pub body: Body,
    /// Spawn interval bounds (milliseconds).
    pub min_interval_ms: u32,
    pub max_interval_ms: u32,
    /// Registered with the collision resolver.
    pub is_target: bool,
    /// The first kill on this lane stops spawning for the rest of the game.
    pub halts_on_first_kill: bool,
}

impl LaneProfile {
    /// Spawn interval bounds in seconds.
    pub fn interval_bounds_secs(&self) -> (f64, f64) {
        (
            f64::from(self.min_interval_ms) / 1000.0,
            f64::from(self.max_interval_ms) / 1000.0,
        )
    }
}

/// Get the profile for a given lane.
pub fn lane_profile(kind: LaneKind) -> LaneProfile {
    match kind {
        LaneKind::Rhino => LaneProfile {
            kind,
            spawn: Position::new(RHINO_SPAWN_X, TRACK_Y_RHINO),
            velocity: Velocity::horizontal(-RHINO_SPEED),
            despawn_x: RHINO_DESPAWN_X,
            body: Body {
                width: RHINO_WIDTH,
                height: RHINO_HEIGHT,
            },
            min_interval_ms: RHINO_SPAWN_INTERVAL_MIN,
            max_interval_ms: RHINO_SPAWN_INTERVAL_MAX,
            is_target: true,
            halts_on_first_kill: true,
        },
        LaneKind::Bizon => LaneProfile {
            kind,
            spawn: Position::new(BIZON_SPAWN_X, TRACK_Y_BIZON),
            velocity: Velocity::horizontal(-BIZON_SPEED),
            despawn_x: BIZON_DESPAWN_X,
            body: Body {
                width: BIZON_WIDTH,
                height: BIZON_HEIGHT,
            },
            min_interval_ms: BIZON_SPAWN_INTERVAL_MIN,
            max_interval_ms: BIZON_SPAWN_INTERVAL_MAX,
            is_target: true,
            halts_on_first_kill: false,
        },
        LaneKind::Gazelle => LaneProfile {
            kind,
            spawn: Position::new(GAZELLE_SPAWN_X, TRACK_Y_GAZELLE),
            velocity: Velocity::horizontal(-GAZELLE_SPEED),
            despawn_x: GAZELLE_DESPAWN_X,
            body: Body {
                width: GAZELLE_WIDTH,
                height: GAZELLE_HEIGHT,
            },
            min_interval_ms: GAZELLE_SPAWN_INTERVAL_MIN,
            max_interval_ms: GAZELLE_SPAWN_INTERVAL_MAX,
            is_target: true,
            halts_on_first_kill: false,
        },
        LaneKind::Palm => LaneProfile {
            kind,
            spawn: Position::new(PALM_SPAWN_X, TRACK_Y_PALM),
            velocity: Velocity::horizontal(-PALM_SPEED),
            despawn_x: PALM_DESPAWN_X,
            body: Body {
                width: PALM_WIDTH,
                height: PALM_HEIGHT,
            },
            min_interval_ms: PALM_SPAWN_INTERVAL_MIN,
            max_interval_ms: PALM_SPAWN_INTERVAL_MAX,
            is_target: true,
            halts_on_first_kill: false,
        },
        LaneKind::Barrier => LaneProfile {
            kind,
            spawn: Position::new(BARRIER_SPAWN_X, TRACK_Y_BARRIER),
            velocity: Velocity::horizontal(-BARRIER_SPEED),
            despawn_x: BARRIER_DESPAWN_X,
            body: Body {
                width: BARRIER_WIDTH,
                height: BARRIER_HEIGHT,
            },
            min_interval_ms: BARRIER_SPAWN_INTERVAL_MIN,
            max_interval_ms: BARRIER_SPAWN_INTERVAL_MAX,
            is_target: false,
            halts_on_first_kill: false,
        },
    }
}
