//! Simulation engine for SAFARI.
//!
//! Owns the hecs ECS world, drives the lane spawners, the hunter and the
//! bullet controller, and produces GameStateSnapshots for the frontend.

pub mod actor;
pub mod assets;
pub mod engine;
pub mod profiles;
pub mod score;
pub mod systems;

pub use engine::{GameEngine, SimConfig};
pub use safari_core as core;
