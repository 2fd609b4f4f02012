//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Scoring species. Each one has its own kill counter and victory quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Rhino,
    Bizon,
    Gazelle,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Rhino, Species::Bizon, Species::Gazelle];
}

/// One of the five horizontal lanes, in collision priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneKind {
    Rhino,
    Bizon,
    Gazelle,
    /// Non-scoring obstacle that still absorbs bullets.
    Palm,
    /// Ground obstacle the hunter jumps over. Never shot at.
    Barrier,
}

impl LaneKind {
    pub const ALL: [LaneKind; 5] = [
        LaneKind::Rhino,
        LaneKind::Bizon,
        LaneKind::Gazelle,
        LaneKind::Palm,
        LaneKind::Barrier,
    ];

    /// The species scored when an actor of this lane is shot, if any.
    pub fn species(self) -> Option<Species> {
        match self {
            LaneKind::Rhino => Some(Species::Rhino),
            LaneKind::Bizon => Some(Species::Bizon),
            LaneKind::Gazelle => Some(Species::Gazelle),
            LaneKind::Palm | LaneKind::Barrier => None,
        }
    }
}

/// Every sprite the simulation needs to be loaded before it admits an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteKind {
    Rhino,
    Bizon,
    Gazelle,
    Palm,
    Barrier,
    Bullet,
    Hunter,
}

impl SpriteKind {
    pub const ALL: [SpriteKind; 7] = [
        SpriteKind::Rhino,
        SpriteKind::Bizon,
        SpriteKind::Gazelle,
        SpriteKind::Palm,
        SpriteKind::Barrier,
        SpriteKind::Bullet,
        SpriteKind::Hunter,
    ];
}

impl From<LaneKind> for SpriteKind {
    fn from(lane: LaneKind) -> Self {
        match lane {
            LaneKind::Rhino => SpriteKind::Rhino,
            LaneKind::Bizon => SpriteKind::Bizon,
            LaneKind::Gazelle => SpriteKind::Gazelle,
            LaneKind::Palm => SpriteKind::Palm,
            LaneKind::Barrier => SpriteKind::Barrier,
        }
    }
}

/// Why a fire request was turned down. Listed in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireRejection {
    /// Minimum time between shots has not elapsed.
    Cooldown,
    /// All shots for this game are spent.
    OutOfAmmo,
    /// Shooting has not been enabled for the current game.
    NotStarted,
    /// The hunter is in the air.
    HunterJumping,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Rules screen, waiting for the player to start.
    #[default]
    Rules,
    Active,
    Paused,
    GameOver,
}
