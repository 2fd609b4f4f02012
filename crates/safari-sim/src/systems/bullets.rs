//! Bullet & ammo controller: fire gating, bullet flight and pruning.
//!
//! A shot is accepted only when the cooldown has elapsed, ammo remains, the
//! game has started and the hunter is on the ground, checked in that order.
//! Rejections are ordinary results and change nothing.

use hecs::{Entity, World};
use log::debug;

use safari_core::components::{Body, Boundary, Projectile, Vitality};
use safari_core::constants::*;
use safari_core::enums::{FireRejection, SpriteKind};
use safari_core::error::SimError;
use safari_core::events::AudioEvent;
use safari_core::types::Velocity;

use crate::actor;
use crate::assets::AssetCatalog;
use crate::systems::hunter::HunterPose;

/// Flight parameters and fire rules for every shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ballistics {
    /// Muzzle position relative to the hunter.
    pub muzzle_offset: (f64, f64),
    pub velocity: Velocity,
    /// Bullets past this x are removed.
    pub max_x: f64,
    /// Bullets below this y are removed.
    pub min_y: f64,
    pub size: f64,
    /// Minimum seconds between accepted shots.
    pub min_interval: f64,
    pub max_shots: u32,
}

impl Default for Ballistics {
    fn default() -> Self {
        Self {
            muzzle_offset: (BULLET_START_OFFSET_X, BULLET_START_OFFSET_Y),
            velocity: Velocity::new(BULLET_SPEED_X, BULLET_SPEED_Y),
            max_x: BULLET_MAX_X,
            min_y: BULLET_MIN_Y,
            size: BULLET_SIZE,
            min_interval: MIN_TIME_SINCE_LAST_SHOT,
            max_shots: MAX_SHOTS_TOTAL,
        }
    }
}

/// Result of a fire request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired { shot_number: u32 },
    Rejected(FireRejection),
}

impl FireOutcome {
    pub fn accepted(self) -> bool {
        matches!(self, FireOutcome::Fired { .. })
    }
}

#[derive(Debug, Clone)]
pub struct BulletController {
    ballistics: Ballistics,
    shots_fired: u32,
    time_since_last_shot: f64,
    game_started: bool,
    bullets: Vec<Entity>,
    removal_buffer: Vec<Entity>,
}

impl Default for BulletController {
    fn default() -> Self {
        Self::new(Ballistics::default())
    }
}

impl BulletController {
    pub fn new(ballistics: Ballistics) -> Self {
        Self {
            ballistics,
            shots_fired: 0,
            // First shot of a game is never held back by the cooldown.
            time_since_last_shot: ballistics.min_interval,
            game_started: false,
            bullets: Vec::new(),
            removal_buffer: Vec::new(),
        }
    }

    /// Try to fire from the hunter's current pose.
    ///
    /// `Err` only when the bullet sprite is missing; state is unchanged then.
    pub fn fire(
        &mut self,
        world: &mut World,
        assets: &dyn AssetCatalog,
        pose: HunterPose,
        audio_events: &mut Vec<AudioEvent>,
    ) -> Result<FireOutcome, SimError> {
        if let Some(reason) = self.rejection(pose) {
            debug!("shot rejected: {:?}", reason);
            return Ok(FireOutcome::Rejected(reason));
        }

        actor::require_sprite(assets, SpriteKind::Bullet)?;

        let shot_number = self.shots_fired + 1;
        let (dx, dy) = self.ballistics.muzzle_offset;
        let entity = world.spawn((
            Projectile { shot_number },
            pose.position.offset(dx, dy),
            self.ballistics.velocity,
            Body {
                width: self.ballistics.size,
                height: self.ballistics.size,
            },
            Vitality { alive: true },
            Boundary::Screen {
                max_x: self.ballistics.max_x,
                min_y: self.ballistics.min_y,
            },
        ));
        self.bullets.push(entity);
        self.shots_fired = shot_number;
        self.time_since_last_shot = 0.0;
        audio_events.push(AudioEvent::ShotFired { shot_number });

        debug!(
            "shot {} of {} fired from ({:.1}, {:.1})",
            shot_number, self.ballistics.max_shots, pose.position.x, pose.position.y
        );
        Ok(FireOutcome::Fired { shot_number })
    }

    /// Advance the cooldown clock and every bullet, then prune.
    pub fn update(&mut self, world: &mut World, dt: f64) {
        self.time_since_last_shot += dt;

        for &entity in &self.bullets {
            actor::advance(world, entity, dt);
            if actor::should_remove(world, entity) {
                self.removal_buffer.push(entity);
            }
        }

        if !self.removal_buffer.is_empty() {
            let doomed = &self.removal_buffer;
            self.bullets.retain(|entity| !doomed.contains(entity));
            actor::despawn_all(world, &mut self.removal_buffer);
        }
    }

    pub fn enable_shooting(&mut self) {
        self.game_started = true;
    }

    /// Remove every bullet and give back all ammo. Shooting stays disabled
    /// until `enable_shooting`.
    pub fn reset(&mut self, world: &mut World) {
        actor::despawn_all(world, &mut self.bullets);
        self.removal_buffer.clear();
        self.shots_fired = 0;
        self.time_since_last_shot = self.ballistics.min_interval;
        self.game_started = false;
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn shots_remaining(&self) -> u32 {
        self.ballistics.max_shots.saturating_sub(self.shots_fired)
    }

    /// Bullets in flight, oldest first.
    pub fn live_bullets(&self) -> &[Entity] {
        &self.bullets
    }

    pub fn is_shooting_enabled(&self) -> bool {
        self.game_started
    }

    fn rejection(&self, pose: HunterPose) -> Option<FireRejection> {
        if self.time_since_last_shot < self.ballistics.min_interval {
            Some(FireRejection::Cooldown)
        } else if self.shots_fired >= self.ballistics.max_shots {
            Some(FireRejection::OutOfAmmo)
        } else if !self.game_started {
            Some(FireRejection::NotStarted)
        } else if pose.jumping {
            Some(FireRejection::HunterJumping)
        } else {
            None
        }
    }
}
