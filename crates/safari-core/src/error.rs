//! Integrity failures raised by the simulation.

use thiserror::Error;

use crate::enums::SpriteKind;

/// Unrecoverable setup errors. Soft failures such as a refused shot are
/// ordinary return values, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// An entity was about to be built without its sprite loaded.
    #[error("sprite {0:?} is not loaded")]
    MissingSprite(SpriteKind),
}
