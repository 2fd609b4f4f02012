//! SAFARI application layer.
//!
//! Wires the headless simulation into a real-time game loop thread and a
//! scripted autopilot player.

pub mod autopilot;
pub mod game_loop;
pub mod logging;
pub mod runner;
pub mod state;

pub use logging::init as init_logging;
pub use safari_core as core;
