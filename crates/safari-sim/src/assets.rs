//! Sprite availability, injected by whoever loads the textures.

use std::collections::HashSet;

use safari_core::enums::SpriteKind;

/// Answers whether the renderer has a sprite for an entity kind.
/// The simulation refuses to build entities it could not draw.
pub trait AssetCatalog {
    fn has_sprite(&self, sprite: SpriteKind) -> bool;
}

/// A fixed set of loaded sprites.
#[derive(Debug, Clone, Default)]
pub struct SpriteManifest {
    loaded: HashSet<SpriteKind>,
}

impl SpriteManifest {
    /// Every sprite the game uses.
    pub fn complete() -> Self {
        Self {
            loaded: SpriteKind::ALL.into_iter().collect(),
        }
    }

    /// Same manifest with one sprite missing.
    pub fn without(mut self, sprite: SpriteKind) -> Self {
        self.loaded.remove(&sprite);
        self
    }

    /// Record a sprite as loaded.
    pub fn insert(&mut self, sprite: SpriteKind) {
        self.loaded.insert(sprite);
    }
}

impl AssetCatalog for SpriteManifest {
    fn has_sprite(&self, sprite: SpriteKind) -> bool {
        self.loaded.contains(&sprite)
    }
}
