//! Physics domain: ECS components attached alongside a PhysicsBody.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::collision::BodyId;
use crate::physics::StepReport;

/// Marks an entity as an obstruction for other bodies.
#[derive(Component, Debug, Clone)]
pub struct Solid {
    pub id: BodyId,
    /// World position for static solids, offset from the body position for
    /// solids that also carry a PhysicsBody.
    pub origin: DVec2,
    pub width: f64,
    pub height: f64,
    pub is_solid: bool,
    pub is_spawned: bool,
    pub is_dynamic: bool,
}

impl Solid {
    pub fn fixed(id: BodyId, origin: DVec2, width: f64, height: f64) -> Self {
        Self {
            id,
            origin,
            width,
            height,
            is_solid: true,
            is_spawned: true,
            is_dynamic: false,
        }
    }

    /// A ridable platform following the entity's PhysicsBody.
    pub fn platform(id: BodyId, width: f64, height: f64) -> Self {
        Self {
            is_dynamic: true,
            ..Self::fixed(id, DVec2::ZERO, width, height)
        }
    }
}

/// Contact changes from the most recent integration step, read by the
/// ability layer on the following frame.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct LastStep(pub StepReport);
