//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hunter: HunterView,
    /// Lane runners in lane order, then spawn order within the lane.
    pub actors: Vec<ActorView>,
    pub bullets: Vec<BulletView>,
    pub score: ScoreView,
    pub audio_events: Vec<AudioEvent>,
    /// Final result, present once the phase is `GameOver`.
    pub report: Option<GameReport>,
}

/// The hunter as drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HunterView {
    pub position: Position,
    pub jumping: bool,
}

/// An animal or obstacle on its lane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub lane: LaneKind,
    pub serial: u32,
    pub position: Position,
    pub velocity: Velocity,
    pub alive: bool,
}

/// A bullet in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub shot_number: u32,
    pub position: Position,
    pub active: bool,
}

/// Running score for the scoreboard and indicator lamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub rhino_kills: u32,
    pub bizon_kills: u32,
    pub gazelle_kills: u32,
    pub shots_fired: u32,
    pub shots_remaining: u32,
    pub time_remaining_secs: f64,
}

/// End-of-game summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub victory: bool,
    pub rhino_kills: u32,
    pub bizon_kills: u32,
    pub gazelle_kills: u32,
    pub shots_fired: u32,
    pub elapsed_secs: f64,
}
