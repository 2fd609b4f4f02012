//! The hunter: runs along the barrier lane and hops over barriers on its own.
//!
//! Not an ECS entity: nothing collides with it. Its pose gates and seeds shots.

use log::debug;

use safari_core::constants::*;
use safari_core::enums::SpriteKind;
use safari_core::error::SimError;
use safari_core::types::Position;

use crate::actor;
use crate::assets::AssetCatalog;

/// Where the hunter is and whether it is in the air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HunterPose {
    pub position: Position,
    pub jumping: bool,
}

#[derive(Debug, Clone)]
pub struct Hunter {
    position: Position,
    /// Run speed (pixels/second).
    speed: f64,
    jumping: bool,
    jump_timer: f64,
    jump_duration: f64,
    ground_y: f64,
    jump_y: f64,
}

impl Hunter {
    pub fn new(assets: &dyn AssetCatalog) -> Result<Self, SimError> {
        actor::require_sprite(assets, SpriteKind::Hunter)?;
        Ok(Self {
            position: Position::new(HUNTER_START_X, HUNTER_Y),
            speed: HUNTER_SPEED,
            jumping: false,
            jump_timer: 0.0,
            jump_duration: f64::from(HUNTER_JUMP_DURATION) / 1000.0,
            ground_y: HUNTER_Y,
            jump_y: HUNTER_Y + HUNTER_JUMP_Y_OFFSET,
        })
    }

    /// Run forward, finish a jump in progress, or start one if a barrier is close.
    ///
    /// `barrier_xs` are the x positions of the barriers currently on the lane.
    pub fn update(&mut self, dt: f64, barrier_xs: impl IntoIterator<Item = f64>) {
        self.position.x += self.speed * dt;

        if self.jumping {
            self.jump_timer += dt;
            if self.jump_timer >= self.jump_duration {
                self.land();
            }
            return;
        }

        let hunter_x = self.position.x;
        let barrier_ahead = barrier_xs
            .into_iter()
            .any(|x| x > hunter_x && x - hunter_x < HUNTER_JUMP_DETECTION_DISTANCE);
        if barrier_ahead {
            self.jump();
        }
    }

    pub fn pose(&self) -> HunterPose {
        HunterPose {
            position: self.position,
            jumping: self.jumping,
        }
    }

    pub fn is_jumping(&self) -> bool {
        self.jumping
    }

    /// Back to the start of the lane, on the ground.
    pub fn reset(&mut self) {
        self.position = Position::new(HUNTER_START_X, self.ground_y);
        self.jumping = false;
        self.jump_timer = 0.0;
    }

    fn jump(&mut self) {
        self.jumping = true;
        self.jump_timer = 0.0;
        self.position.y = self.jump_y;
        debug!("hunter jumps at x={:.1}", self.position.x);
    }

    fn land(&mut self) {
        self.jumping = false;
        self.jump_timer = 0.0;
        self.position.y = self.ground_y;
    }
}
