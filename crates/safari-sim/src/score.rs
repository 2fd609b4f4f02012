//! Kill counters and the quotas they are measured against.
//!
//! Stored in `GameEngine`, NOT as ECS entities.

use safari_core::constants::{VICTORY_BIZON, VICTORY_GAZELLE, VICTORY_RHINO};
use safari_core::enums::Species;

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub rhino_kills: u32,
    pub bizon_kills: u32,
    pub gazelle_kills: u32,
}

impl ScoreState {
    pub fn register_kill(&mut self, species: Species) {
        *self.counter_mut(species) += 1;
    }

    pub fn kills(&self, species: Species) -> u32 {
        match species {
            Species::Rhino => self.rhino_kills,
            Species::Bizon => self.bizon_kills,
            Species::Gazelle => self.gazelle_kills,
        }
    }

    /// Total kills across every species.
    pub fn total(&self) -> u32 {
        self.rhino_kills + self.bizon_kills + self.gazelle_kills
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn counter_mut(&mut self, species: Species) -> &mut u32 {
        match species {
            Species::Rhino => &mut self.rhino_kills,
            Species::Bizon => &mut self.bizon_kills,
            Species::Gazelle => &mut self.gazelle_kills,
        }
    }
}

/// Kills of each species needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VictoryQuota {
    pub rhino: u32,
    pub bizon: u32,
    pub gazelle: u32,
}

impl VictoryQuota {
    pub fn required(&self, species: Species) -> u32 {
        match species {
            Species::Rhino => self.rhino,
            Species::Bizon => self.bizon,
            Species::Gazelle => self.gazelle,
        }
    }
}

impl Default for VictoryQuota {
    fn default() -> Self {
        Self {
            rhino: VICTORY_RHINO,
            bizon: VICTORY_BIZON,
            gazelle: VICTORY_GAZELLE,
        }
    }
}
