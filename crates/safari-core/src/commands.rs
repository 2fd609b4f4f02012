//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Leave the rules (or game-over) screen and start a fresh game.
    StartGame,
    /// Pull the trigger.
    Fire,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Abandon the current game and return to the rules screen.
    Reset,
}
