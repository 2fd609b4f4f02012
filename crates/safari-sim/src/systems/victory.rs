//! Victory check: pure comparison of the kill counters against the quota.

use safari_core::enums::Species;

use crate::score::{ScoreState, VictoryQuota};

/// True once every species has met its quota.
pub fn is_victory(score: &ScoreState, quota: &VictoryQuota) -> bool {
    Species::ALL
        .into_iter()
        .all(|species| score.kills(species) >= quota.required(species))
}
