//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::LaneKind;

/// Axis-aligned collision box centered on the entity position (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub width: f64,
    pub height: f64,
}

/// Alive/active flag. Cleared exactly once, when the entity is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitality {
    pub alive: bool,
}

/// Where an entity leaves the play area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Boundary {
    /// Lane runners: removed once x reaches this line in the direction of travel.
    LaneExit { x: f64 },
    /// Bullets: removed once they pass the right edge or drop below the floor.
    Screen { max_x: f64, min_y: f64 },
}

/// Marks an entity as a lane runner (animal or obstacle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneActor {
    pub kind: LaneKind,
    /// 1-based spawn number within the owning spawner.
    pub serial: u32,
}

/// Marks an entity as a hunter bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projectile {
    /// 1-based shot number within the current game.
    pub shot_number: u32,
}
