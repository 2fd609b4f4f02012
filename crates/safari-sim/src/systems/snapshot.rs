//! Snapshot system: reads the world through the owners' handle lists and
//! builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use safari_core::components::{LaneActor, Projectile, Vitality};
use safari_core::enums::GamePhase;
use safari_core::events::AudioEvent;
use safari_core::state::*;
use safari_core::types::{Position, SimTime, Velocity};

use crate::score::ScoreState;
use crate::systems::bullets::BulletController;
use crate::systems::hunter::HunterPose;
use crate::systems::spawner::Spawner;

/// Build a complete GameStateSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    hunter: HunterPose,
    spawners: &[Spawner],
    bullets: &BulletController,
    score: &ScoreState,
    audio_events: Vec<AudioEvent>,
    report: Option<GameReport>,
    game_duration_secs: f64,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        hunter: HunterView {
            position: hunter.position,
            jumping: hunter.jumping,
        },
        actors: build_actors(world, spawners),
        bullets: build_bullets(world, bullets),
        score: ScoreView {
            rhino_kills: score.rhino_kills,
            bizon_kills: score.bizon_kills,
            gazelle_kills: score.gazelle_kills,
            shots_fired: bullets.shots_fired(),
            shots_remaining: bullets.shots_remaining(),
            time_remaining_secs: (game_duration_secs - time.elapsed_secs).max(0.0),
        },
        audio_events,
        report,
    }
}

/// Lane runners in lane order, spawn order within each lane.
fn build_actors(world: &World, spawners: &[Spawner]) -> Vec<ActorView> {
    spawners
        .iter()
        .flat_map(|spawner| spawner.live().iter())
        .filter_map(|&entity| actor_view(world, entity))
        .collect()
}

fn actor_view(world: &World, entity: Entity) -> Option<ActorView> {
    let mut query = world
        .query_one::<(&LaneActor, &Position, &Velocity, &Vitality)>(entity)
        .ok()?;
    query.get().map(|(actor, pos, vel, vitality)| ActorView {
        lane: actor.kind,
        serial: actor.serial,
        position: *pos,
        velocity: *vel,
        alive: vitality.alive,
    })
}

fn build_bullets(world: &World, bullets: &BulletController) -> Vec<BulletView> {
    bullets
        .live_bullets()
        .iter()
        .filter_map(|&entity| {
            let mut query = world
                .query_one::<(&Projectile, &Position, &Vitality)>(entity)
                .ok()?;
            query.get().map(|(projectile, pos, vitality)| BulletView {
                shot_number: projectile.shot_number,
                position: *pos,
                active: vitality.alive,
            })
        })
        .collect()
}
