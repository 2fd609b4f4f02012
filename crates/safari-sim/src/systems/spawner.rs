//! Lane spawning system: one spawner per lane, driven by its `LaneProfile`.
//!
//! The first runner appears as soon as the game starts; after that each spawn
//! waits a fresh random interval drawn from the lane's bounds. A spawner owns
//! the ordered handle list of its runners; the world only stores components.

use hecs::{Entity, World};
use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use safari_core::components::{Boundary, LaneActor, Vitality};
use safari_core::constants::TIME_EPSILON;
use safari_core::enums::LaneKind;
use safari_core::error::SimError;

use crate::actor;
use crate::assets::AssetCatalog;
use crate::profiles::{lane_profile, LaneProfile};

/// What happened to a lane during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnerTick {
    pub spawned: u32,
    /// Runners that walked off the lane.
    pub despawned: u32,
    /// Dead runners cleared from the lane.
    pub killed: u32,
}

/// Timed producer and owner of one lane's runners.
#[derive(Debug, Clone)]
pub struct Spawner {
    profile: LaneProfile,
    live: Vec<Entity>,
    time_since_last_spawn: f64,
    spawn_interval: f64,
    number: u32,
    active: bool,
    was_killed: bool,
    has_been_hit: bool,
    removal_buffer: Vec<Entity>,
}

impl Spawner {
    pub fn new(profile: LaneProfile, rng: &mut ChaCha8Rng) -> Self {
        Self {
            profile,
            live: Vec::new(),
            time_since_last_spawn: 0.0,
            spawn_interval: draw_interval(&profile, rng),
            number: 0,
            active: true,
            was_killed: false,
            has_been_hit: false,
            removal_buffer: Vec::new(),
        }
    }

    /// Spawner with the stock profile for `kind`.
    pub fn for_lane(kind: LaneKind, rng: &mut ChaCha8Rng) -> Self {
        Self::new(lane_profile(kind), rng)
    }

    /// Put the first runner on the lane right away and restart the clock.
    pub fn start(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        assets: &dyn AssetCatalog,
    ) -> Result<(), SimError> {
        if self.active {
            self.spawn(world, assets)?;
            self.time_since_last_spawn = 0.0;
            self.spawn_interval = draw_interval(&self.profile, rng);
        }
        Ok(())
    }

    /// Advance the spawn clock, then move and prune the runners.
    pub fn update(
        &mut self,
        world: &mut World,
        rng: &mut ChaCha8Rng,
        assets: &dyn AssetCatalog,
        dt: f64,
    ) -> Result<SpawnerTick, SimError> {
        let mut tick = SpawnerTick::default();

        if self.active && !self.has_been_hit {
            self.time_since_last_spawn += dt;
            if self.time_since_last_spawn + TIME_EPSILON >= self.spawn_interval {
                self.spawn(world, assets)?;
                tick.spawned = 1;
                self.time_since_last_spawn = 0.0;
                self.spawn_interval = draw_interval(&self.profile, rng);
            }
        }

        let (despawned, killed) = self.update_live(world, dt);
        tick.despawned = despawned;
        tick.killed = killed;
        Ok(tick)
    }

    /// Stop producing runners. Runners already on the lane keep going.
    pub fn stop_spawning(&mut self) {
        self.active = false;
    }

    /// Allow spawning again. Has no effect on a single-kill lane that was hit.
    pub fn resume_spawning(&mut self) {
        self.active = true;
    }

    /// Single-kill hook: this lane never spawns again until `reset`.
    pub fn mark_as_hit(&mut self) {
        self.has_been_hit = true;
        self.stop_spawning();
    }

    /// Clear the lane and return to the freshly constructed state.
    pub fn reset(&mut self, world: &mut World, rng: &mut ChaCha8Rng) {
        actor::despawn_all(world, &mut self.live);
        self.removal_buffer.clear();
        self.was_killed = false;
        self.has_been_hit = false;
        self.active = true;
        self.number = 0;
        self.time_since_last_spawn = 0.0;
        self.spawn_interval = draw_interval(&self.profile, rng);
    }

    pub fn kind(&self) -> LaneKind {
        self.profile.kind
    }

    pub fn profile(&self) -> &LaneProfile {
        &self.profile
    }

    /// Live runners in spawn order.
    pub fn live(&self) -> &[Entity] {
        &self.live
    }

    /// Total runners spawned since the last reset.
    pub fn spawn_count(&self) -> u32 {
        self.number
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn was_killed(&self) -> bool {
        self.was_killed
    }

    pub fn has_been_hit(&self) -> bool {
        self.has_been_hit
    }

    /// Seconds the current wait lasts.
    pub fn spawn_interval(&self) -> f64 {
        self.spawn_interval
    }

    pub fn time_since_last_spawn(&self) -> f64 {
        self.time_since_last_spawn
    }

    fn spawn(&mut self, world: &mut World, assets: &dyn AssetCatalog) -> Result<(), SimError> {
        actor::require_sprite(assets, self.profile.kind.into())?;

        self.number += 1;
        let entity = world.spawn((
            LaneActor {
                kind: self.profile.kind,
                serial: self.number,
            },
            self.profile.spawn,
            self.profile.velocity,
            self.profile.body,
            Vitality { alive: true },
            Boundary::LaneExit {
                x: self.profile.despawn_x,
            },
        ));
        self.live.push(entity);
        debug!("spawned {:?} #{}", self.profile.kind, self.number);
        Ok(())
    }

    /// Move every runner once, then drop the ones that left or died.
    fn update_live(&mut self, world: &mut World, dt: f64) -> (u32, u32) {
        let mut despawned = 0;
        let mut killed = 0;

        for &entity in &self.live {
            actor::advance(world, entity, dt);
            if actor::should_remove(world, entity) {
                if actor::is_alive(world, entity) {
                    despawned += 1;
                } else {
                    killed += 1;
                }
                self.removal_buffer.push(entity);
            }
        }

        if !self.removal_buffer.is_empty() {
            let doomed = &self.removal_buffer;
            self.live.retain(|entity| !doomed.contains(entity));
            actor::despawn_all(world, &mut self.removal_buffer);
        }

        for _ in 0..killed {
            self.on_killed();
        }
        (despawned, killed)
    }

    fn on_killed(&mut self) {
        self.was_killed = true;
        debug!("{:?} killed", self.profile.kind);
        if self.profile.halts_on_first_kill && !self.has_been_hit {
            self.mark_as_hit();
            debug!("{:?} lane closed for the rest of the game", self.profile.kind);
        }
    }
}

/// Fresh uniform draw from the lane's interval bounds, in seconds.
fn draw_interval(profile: &LaneProfile, rng: &mut ChaCha8Rng) -> f64 {
    let (min, max) = profile.interval_bounds_secs();
    rng.gen_range(min..=max)
}
