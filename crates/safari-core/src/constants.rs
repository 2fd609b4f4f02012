//! Simulation constants and tuning parameters.
//!
//! Screen coordinates are pixels with the origin at the bottom-left corner
//! and y pointing up. The play field is the TV screen inside the cabinet
//! frame, roughly x 190..830.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Slack for timer comparisons. Summing `DT` drifts below whole seconds.
pub const TIME_EPSILON: f64 = 1e-9;

// --- Screen ---

pub const SCREEN_WIDTH: f64 = 1024.0;
pub const SCREEN_HEIGHT: f64 = 768.0;

/// Right edge of the play field. Lane runners enter here.
pub const FIELD_RIGHT_X: f64 = 830.0;

/// Left edge of the play field. Lane runners leave here.
pub const FIELD_LEFT_X: f64 = 190.0;

// --- Game rules ---

/// Length of one game (seconds).
pub const GAME_DURATION_SECS: f64 = 60.0;

/// Total shots available per game.
pub const MAX_SHOTS_TOTAL: u32 = 16;

/// Minimum time between two accepted shots (seconds).
pub const MIN_TIME_SINCE_LAST_SHOT: f64 = 0.5;

/// Kills of each species required for victory.
pub const VICTORY_RHINO: u32 = 1;
pub const VICTORY_BIZON: u32 = 4;
pub const VICTORY_GAZELLE: u32 = 8;

// --- Lanes (bottom to top) ---

pub const TRACK_Y_RHINO: f64 = 180.0;
pub const TRACK_Y_BIZON: f64 = 250.0;
pub const TRACK_Y_GAZELLE: f64 = 320.0;
pub const TRACK_Y_PALM: f64 = 390.0;
pub const TRACK_Y_BARRIER: f64 = 460.0;

// --- Rhino ---

pub const RHINO_SPEED: f64 = 70.0;
pub const RHINO_SPAWN_X: f64 = FIELD_RIGHT_X;
pub const RHINO_DESPAWN_X: f64 = FIELD_LEFT_X;
pub const RHINO_SPAWN_INTERVAL_MIN: u32 = 13_000;
pub const RHINO_SPAWN_INTERVAL_MAX: u32 = 19_500;
pub const RHINO_WIDTH: f64 = 96.0;
pub const RHINO_HEIGHT: f64 = 56.0;

// --- Bizon ---

pub const BIZON_SPEED: f64 = 90.0;
pub const BIZON_SPAWN_X: f64 = FIELD_RIGHT_X;
pub const BIZON_DESPAWN_X: f64 = FIELD_LEFT_X;
pub const BIZON_SPAWN_INTERVAL_MIN: u32 = 2_000;
pub const BIZON_SPAWN_INTERVAL_MAX: u32 = 4_000;
pub const BIZON_WIDTH: f64 = 84.0;
pub const BIZON_HEIGHT: f64 = 52.0;

// --- Gazelle ---

pub const GAZELLE_SPEED: f64 = 130.0;
pub const GAZELLE_SPAWN_X: f64 = FIELD_RIGHT_X;
pub const GAZELLE_DESPAWN_X: f64 = FIELD_LEFT_X;
pub const GAZELLE_SPAWN_INTERVAL_MIN: u32 = 2_000;
pub const GAZELLE_SPAWN_INTERVAL_MAX: u32 = 4_000;
pub const GAZELLE_WIDTH: f64 = 64.0;
pub const GAZELLE_HEIGHT: f64 = 44.0;

// --- Palm ---

pub const PALM_SPEED: f64 = 60.0;
pub const PALM_SPAWN_X: f64 = FIELD_RIGHT_X;
pub const PALM_DESPAWN_X: f64 = FIELD_LEFT_X;
pub const PALM_SPAWN_INTERVAL_MIN: u32 = 4_000;
pub const PALM_SPAWN_INTERVAL_MAX: u32 = 6_000;
pub const PALM_WIDTH: f64 = 40.0;
pub const PALM_HEIGHT: f64 = 72.0;

// --- Barrier ---

pub const BARRIER_SPEED: f64 = 150.0;
pub const BARRIER_SPAWN_X: f64 = FIELD_RIGHT_X;
pub const BARRIER_DESPAWN_X: f64 = FIELD_LEFT_X;
pub const BARRIER_SPAWN_INTERVAL_MIN: u32 = 2_000;
pub const BARRIER_SPAWN_INTERVAL_MAX: u32 = 3_000;
pub const BARRIER_WIDTH: f64 = 24.0;
pub const BARRIER_HEIGHT: f64 = 32.0;

// --- Hunter ---

pub const HUNTER_START_X: f64 = 230.0;
pub const HUNTER_Y: f64 = 470.0;

/// Forward run speed (pixels per second).
pub const HUNTER_SPEED: f64 = 4.0;

/// Time spent in the air per jump (milliseconds).
pub const HUNTER_JUMP_DURATION: u32 = 600;

/// Height gained while jumping (pixels).
pub const HUNTER_JUMP_Y_OFFSET: f64 = 40.0;

/// A barrier closer than this (and still ahead) triggers a jump.
pub const HUNTER_JUMP_DETECTION_DISTANCE: f64 = 60.0;

// --- Bullet ---

/// Muzzle offset from the hunter center.
pub const BULLET_START_OFFSET_X: f64 = 20.0;
pub const BULLET_START_OFFSET_Y: f64 = -20.0;

/// 45 degree trajectory, right and down.
pub const BULLET_SPEED_X: f64 = 300.0;
pub const BULLET_SPEED_Y: f64 = -300.0;

/// Bullets past the right edge or under the floor are removed.
pub const BULLET_MAX_X: f64 = FIELD_RIGHT_X;
pub const BULLET_MIN_Y: f64 = 85.0;

pub const BULLET_SIZE: f64 = 7.0;
