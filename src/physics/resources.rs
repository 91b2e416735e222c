//! Physics domain: tuning and per-frame shared resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::collision::{BodyId, SolidBody};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward acceleration in px/s² for airborne gravity-affected bodies.
    pub gravity: f64,
    pub max_fall_speed: f64,
    /// How far a surface-sticking body may be pulled down to stay grounded.
    pub stick_distance: u8,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            max_fall_speed: 900.0,
            stick_distance: 4,
        }
    }
}

/// Solid boxes for the current frame, rebuilt before any body is stepped and
/// sorted by id.
#[derive(Resource, Debug, Default)]
pub struct SolidSnapshot(pub Vec<SolidBody>);

/// Hands out room-unique body ids.
#[derive(Resource, Debug, Default)]
pub struct BodyIdGenerator {
    next: u32,
}

impl BodyIdGenerator {
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next);
        self.next += 1;
        id
    }
}
