//! Collision & scoring: matches bullets against the registered target lanes.
//!
//! Lanes are tested in registration order and runners in spawn order; the
//! first overlap wins and the bullet is spent. Scoring lanes bump their
//! species counter and emit a hit sound. Obstacles only absorb the bullet.

use hecs::{Entity, World};
use log::{debug, info};

use safari_core::components::{LaneActor, Projectile};
use safari_core::enums::LaneKind;
use safari_core::events::AudioEvent;

use crate::actor;
use crate::profiles::lane_profile;
use crate::score::ScoreState;
use crate::systems::bullets::BulletController;
use crate::systems::spawner::Spawner;

/// A resolved bullet hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub shot_number: u32,
    pub lane: LaneKind,
    /// Serial of the runner that was hit.
    pub serial: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionResolver {
    targets: Vec<LaneKind>,
}

impl Default for CollisionResolver {
    /// Every lane flagged as a target, in lane order.
    fn default() -> Self {
        let mut resolver = Self::empty();
        for kind in LaneKind::ALL {
            if lane_profile(kind).is_target {
                resolver.register_target(kind);
            }
        }
        resolver
    }
}

impl CollisionResolver {
    /// Resolver with no registered targets.
    pub fn empty() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Append a lane to the test order. Registering twice is a no-op.
    pub fn register_target(&mut self, lane: LaneKind) {
        if !self.targets.contains(&lane) {
            self.targets.push(lane);
        }
    }

    pub fn targets(&self) -> &[LaneKind] {
        &self.targets
    }

    /// Resolve this frame's hits. Does nothing without a bullet controller.
    pub fn run(
        &self,
        world: &mut World,
        bullets: Option<&BulletController>,
        spawners: &mut [Spawner],
        score: &mut ScoreState,
        audio_events: &mut Vec<AudioEvent>,
    ) -> Vec<Hit> {
        let mut hits = Vec::new();
        let Some(bullets) = bullets else {
            return hits;
        };

        for &bullet in bullets.live_bullets() {
            if !actor::is_alive(world, bullet) {
                continue;
            }
            let Some((bullet_pos, bullet_body)) = actor::hitbox(world, bullet) else {
                continue;
            };

            for &lane in &self.targets {
                let Some(spawner) = spawners.iter_mut().find(|s| s.kind() == lane) else {
                    continue;
                };

                let view: &World = world;
                let target = spawner.live().iter().copied().find(|&entity| {
                    actor::is_alive(view, entity)
                        && actor::hitbox(view, entity).is_some_and(|(pos, body)| {
                            actor::overlaps(&bullet_pos, &bullet_body, &pos, &body)
                        })
                });
                let Some(target) = target else {
                    continue;
                };

                actor::mark_hit(world, bullet);
                actor::mark_hit(world, target);

                let hit = Hit {
                    shot_number: shot_number(world, bullet),
                    lane,
                    serial: serial(world, target),
                };

                match lane.species() {
                    Some(species) => {
                        score.register_kill(species);
                        audio_events.push(AudioEvent::TargetHit { species });
                        info!(
                            "shot {} killed {:?} #{}",
                            hit.shot_number, species, hit.serial
                        );
                    }
                    None => debug!("shot {} absorbed by {:?}", hit.shot_number, lane),
                }

                if spawner.profile().halts_on_first_kill {
                    spawner.mark_as_hit();
                }

                hits.push(hit);
                break;
            }
        }

        hits
    }
}

fn shot_number(world: &World, bullet: Entity) -> u32 {
    world
        .get::<&Projectile>(bullet)
        .map(|p| p.shot_number)
        .unwrap_or(0)
}

fn serial(world: &World, target: Entity) -> u32 {
    world
        .get::<&LaneActor>(target)
        .map(|a| a.serial)
        .unwrap_or(0)
}
