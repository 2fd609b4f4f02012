//! Autopilot: a scripted player for headless runs and demos.
//!
//! Works only from the published snapshot, the way a player would. For every
//! runner it predicts where a bullet fired right now would cross that runner's
//! lane, and fires when the first runner the bullet would meet is an animal
//! still needed for victory.

use safari_core::commands::PlayerCommand;
use safari_core::enums::{GamePhase, LaneKind, Species};
use safari_core::state::{ActorView, GameStateSnapshot, ScoreView};
use safari_sim::profiles::lane_profile;
use safari_sim::score::VictoryQuota;
use safari_sim::systems::bullets::Ballistics;

/// A predicted bullet/runner meeting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercept {
    pub lane: LaneKind,
    pub serial: u32,
    /// Seconds from the shot to the lane crossing.
    pub time: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    ballistics: Ballistics,
    quota: VictoryQuota,
}

impl Autopilot {
    pub fn new(ballistics: Ballistics, quota: VictoryQuota) -> Self {
        Self { ballistics, quota }
    }

    /// The command to send this tick, if any.
    pub fn decide(&self, snapshot: &GameStateSnapshot) -> Option<PlayerCommand> {
        if snapshot.phase != GamePhase::Active
            || snapshot.hunter.jumping
            || snapshot.score.shots_remaining == 0
        {
            return None;
        }

        let intercept = self.first_intercept(snapshot)?;
        let species = intercept.lane.species()?;
        self.still_needed(&snapshot.score, species)
            .then_some(PlayerCommand::Fire)
    }

    /// The earliest runner a bullet fired now would hit, obstacles included.
    pub fn first_intercept(&self, snapshot: &GameStateSnapshot) -> Option<Intercept> {
        let (dx, dy) = self.ballistics.muzzle_offset;
        let muzzle = snapshot.hunter.position.offset(dx, dy);

        snapshot
            .actors
            .iter()
            .filter(|actor| actor.alive)
            .filter_map(|actor| self.intercept(muzzle.x, muzzle.y, actor))
            .min_by(|a, b| a.time.total_cmp(&b.time))
    }

    fn intercept(&self, muzzle_x: f64, muzzle_y: f64, actor: &ActorView) -> Option<Intercept> {
        let profile = lane_profile(actor.lane);
        if !profile.is_target {
            return None;
        }

        let velocity = self.ballistics.velocity;
        if velocity.y == 0.0 {
            return None;
        }
        let time = (actor.position.y - muzzle_y) / velocity.y;
        if time < 0.0 {
            return None;
        }

        let bullet_x = muzzle_x + velocity.x * time;
        if bullet_x > self.ballistics.max_x {
            return None;
        }
        let actor_x = actor.position.x + actor.velocity.x * time;
        if (bullet_x - actor_x).abs() * 2.0 >= profile.body.width + self.ballistics.size {
            return None;
        }

        Some(Intercept {
            lane: actor.lane,
            serial: actor.serial,
            time,
        })
    }

    fn still_needed(&self, score: &ScoreView, species: Species) -> bool {
        let kills = match species {
            Species::Rhino => score.rhino_kills,
            Species::Bizon => score.bizon_kills,
            Species::Gazelle => score.gazelle_kills,
        };
        kills < self.quota.required(species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safari_core::constants::*;
    use safari_core::state::HunterView;
    use safari_core::types::{Position, Velocity};

    fn snapshot_with(actors: Vec<ActorView>) -> GameStateSnapshot {
        GameStateSnapshot {
            phase: GamePhase::Active,
            hunter: HunterView {
                position: Position::new(HUNTER_START_X, HUNTER_Y),
                jumping: false,
            },
            actors,
            score: ScoreView {
                shots_remaining: MAX_SHOTS_TOTAL,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// A runner placed so that a bullet fired now meets it on its lane.
    fn in_the_path(lane: LaneKind, lane_y: f64, speed: f64) -> ActorView {
        let muzzle_x = HUNTER_START_X + BULLET_START_OFFSET_X;
        let muzzle_y = HUNTER_Y + BULLET_START_OFFSET_Y;
        let time = (lane_y - muzzle_y) / BULLET_SPEED_Y;
        let meet_x = muzzle_x + BULLET_SPEED_X * time;
        ActorView {
            lane,
            serial: 1,
            position: Position::new(meet_x + speed * time, lane_y),
            velocity: Velocity::horizontal(-speed),
            alive: true,
        }
    }

    #[test]
    fn test_fires_at_needed_animal() {
        let snap = snapshot_with(vec![in_the_path(
            LaneKind::Gazelle,
            TRACK_Y_GAZELLE,
            GAZELLE_SPEED,
        )]);
        let pilot = Autopilot::default();
        assert_eq!(pilot.decide(&snap), Some(PlayerCommand::Fire));
    }

    #[test]
    fn test_holds_fire_when_palm_is_in_the_way() {
        let snap = snapshot_with(vec![
            in_the_path(LaneKind::Gazelle, TRACK_Y_GAZELLE, GAZELLE_SPEED),
            in_the_path(LaneKind::Palm, TRACK_Y_PALM, PALM_SPEED),
        ]);
        let pilot = Autopilot::default();
        assert_eq!(pilot.first_intercept(&snap).unwrap().lane, LaneKind::Palm);
        assert_eq!(pilot.decide(&snap), None);
    }

    #[test]
    fn test_holds_fire_when_quota_met() {
        let mut snap = snapshot_with(vec![in_the_path(
            LaneKind::Rhino,
            TRACK_Y_RHINO,
            RHINO_SPEED,
        )]);
        snap.score.rhino_kills = VICTORY_RHINO;
        assert_eq!(Autopilot::default().decide(&snap), None);
    }

    #[test]
    fn test_holds_fire_while_jumping_or_inactive() {
        let actors = vec![in_the_path(LaneKind::Bizon, TRACK_Y_BIZON, BIZON_SPEED)];

        let mut snap = snapshot_with(actors.clone());
        snap.hunter.jumping = true;
        assert_eq!(Autopilot::default().decide(&snap), None);

        let mut snap = snapshot_with(actors);
        snap.phase = GamePhase::Paused;
        assert_eq!(Autopilot::default().decide(&snap), None);
    }

    #[test]
    fn test_ignores_runner_out_of_reach() {
        let mut gazelle = in_the_path(LaneKind::Gazelle, TRACK_Y_GAZELLE, GAZELLE_SPEED);
        gazelle.position.x += 200.0;
        let snap = snapshot_with(vec![gazelle]);
        assert!(Autopilot::default().first_intercept(&snap).is_none());
    }
}
