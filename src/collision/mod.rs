//! Collision domain: room obstruction field, solid bodies and the resolver.

mod field;
mod resolver;
mod solids;


pub use field::{CollisionField, FieldError};
pub use resolver::{
    Axis, CollisionWorld, Side, Support, bodies_overlap, clamp_axis, fully_grounded,
    ground_support, ground_support_at, is_embedded, probe, sense_contacts, touching_ceiling,
    touching_ground, touching_wall,
};
pub(crate) use resolver::walk_until_blocked;
pub use solids::{BodyId, Collidable, PixelRect, Positioned, SolidBody};

use bevy::prelude::*;

/// The field bodies currently resolve against.
///
/// A new room is built elsewhere and inserted whole between frames; nothing
/// mutates the field in place while bodies are being stepped.
#[derive(Resource, Debug, Clone)]
pub struct ActiveRoom {
    pub field: CollisionField,
}

impl ActiveRoom {
    pub fn new(field: CollisionField) -> Self {
        Self { field }
    }
}
