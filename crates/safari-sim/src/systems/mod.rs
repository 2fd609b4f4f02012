//! Systems that operate on the simulation world each tick.
//!
//! The world only stores components. Spawners and the bullet controller keep
//! the ordered handle lists; everything else is a function over them.

pub mod bullets;
pub mod collision;
pub mod hunter;
pub mod snapshot;
pub mod spawner;
pub mod victory;
