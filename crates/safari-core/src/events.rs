//! Events emitted by the simulation for audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::Species;

/// Audio events for the frontend sound system. The simulation decides when a
/// sound plays; the frontend decides how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A shot was accepted.
    ShotFired { shot_number: u32 },
    /// A bullet killed an animal.
    TargetHit { species: Species },
}
