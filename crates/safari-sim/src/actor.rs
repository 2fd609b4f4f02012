//! Entity primitives shared by lane runners and bullets.
//!
//! Every moving thing in the world carries `Position`, `Velocity`, `Body`,
//! `Vitality` and `Boundary`. Owners (spawners, the bullet controller) keep the
//! ordered handle lists and call these helpers; nothing here iterates the
//! whole world.

use hecs::{Entity, World};

use safari_core::components::{Body, Boundary, Vitality};
use safari_core::enums::SpriteKind;
use safari_core::error::SimError;
use safari_core::types::{Position, Velocity};

use crate::assets::AssetCatalog;

/// Fail fast if the sprite for an entity about to be built is not loaded.
pub fn require_sprite(assets: &dyn AssetCatalog, sprite: SpriteKind) -> Result<(), SimError> {
    if assets.has_sprite(sprite) {
        Ok(())
    } else {
        Err(SimError::MissingSprite(sprite))
    }
}

/// Move an entity by `velocity * dt`.
pub fn advance(world: &mut World, entity: Entity, dt: f64) {
    if let Ok((pos, vel)) = world.query_one_mut::<(&mut Position, &Velocity)>(entity) {
        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
    }
}

/// Flip the entity to dead. Returns true only for the call that made the change.
pub fn mark_hit(world: &mut World, entity: Entity) -> bool {
    match world.get::<&mut Vitality>(entity) {
        Ok(mut vitality) if vitality.alive => {
            vitality.alive = false;
            true
        }
        _ => false,
    }
}

/// Whether the entity is still alive/active. Missing entities count as dead.
pub fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Vitality>(entity)
        .map(|v| v.alive)
        .unwrap_or(false)
}

/// True once the entity is dead or has crossed its boundary.
pub fn should_remove(world: &World, entity: Entity) -> bool {
    let Ok(mut query) = world.query_one::<(&Position, &Velocity, &Boundary, &Vitality)>(entity)
    else {
        return true;
    };
    match query.get() {
        Some((pos, vel, boundary, vitality)) => {
            !vitality.alive || boundary_crossed(boundary, pos, vel)
        }
        None => true,
    }
}

/// Boundary test in the direction of travel.
pub fn boundary_crossed(boundary: &Boundary, pos: &Position, vel: &Velocity) -> bool {
    match *boundary {
        Boundary::LaneExit { x } => {
            if vel.x < 0.0 {
                pos.x <= x
            } else if vel.x > 0.0 {
                pos.x >= x
            } else {
                false
            }
        }
        Boundary::Screen { max_x, min_y } => pos.x > max_x || pos.y < min_y,
    }
}

/// Axis-aligned box intersection of two centered bodies. Touching edges do not count.
pub fn overlaps(a_pos: &Position, a_body: &Body, b_pos: &Position, b_body: &Body) -> bool {
    (a_pos.x - b_pos.x).abs() * 2.0 < a_body.width + b_body.width
        && (a_pos.y - b_pos.y).abs() * 2.0 < a_body.height + b_body.height
}

/// Position and body of an entity, if it still exists.
pub fn hitbox(world: &World, entity: Entity) -> Option<(Position, Body)> {
    let mut query = world.query_one::<(&Position, &Body)>(entity).ok()?;
    query.get().map(|(pos, body)| (*pos, *body))
}

/// Remove a batch of entities from the world. Already-gone handles are ignored.
pub fn despawn_all(world: &mut World, entities: &mut Vec<Entity>) {
    for entity in entities.drain(..) {
        let _ = world.despawn(entity);
    }
}
