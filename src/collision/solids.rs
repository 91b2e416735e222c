//! Collision domain: body handles, pixel boxes and the solid-body view.

use bevy::math::DVec2;
use serde::{Deserialize, Serialize};

/// Non-owning handle into a room's body table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct BodyId(pub u32);

/// Inclusive integer pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    /// Pixels covered by a continuous box at `position` with the given size.
    pub fn covering(position: DVec2, width: f64, height: f64) -> Self {
        Self {
            left: position.x.floor() as i32,
            top: position.y.floor() as i32,
            right: (position.x + width).ceil() as i32 - 1,
            bottom: (position.y + height).ceil() as i32 - 1,
        }
    }

    pub fn overlaps(&self, other: &PixelRect) -> bool {
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            right: self.right + dx,
            bottom: self.bottom + dy,
        }
    }
}

/// Anything with an authoritative world position.
pub trait Positioned {
    fn position(&self) -> DVec2;
}

/// Anything that occupies pixels and may obstruct other bodies.
pub trait Collidable: Positioned {
    fn id(&self) -> BodyId;

    /// Pixels occupied at the current position.
    fn pixel_bounds(&self) -> PixelRect;

    /// Whether this obstructs the body identified by `other`.
    fn blocks(&self, other: BodyId) -> bool;
}

/// Read-only view of another actor's box for one resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SolidBody {
    pub id: BodyId,
    pub position: DVec2,
    pub width: f64,
    pub height: f64,
    pub is_solid: bool,
    pub is_spawned: bool,
    /// Moving solids can be ridden; static ones only block.
    pub is_dynamic: bool,
    /// What the owner committed last frame, applied to riders.
    pub displacement: DVec2,
}

impl SolidBody {
    pub fn fixed(id: BodyId, position: DVec2, width: f64, height: f64) -> Self {
        Self {
            id,
            position,
            width,
            height,
            is_solid: true,
            is_spawned: true,
            is_dynamic: false,
            displacement: DVec2::ZERO,
        }
    }

    pub fn moving(id: BodyId, position: DVec2, width: f64, height: f64, displacement: DVec2) -> Self {
        Self {
            is_dynamic: true,
            displacement,
            ..Self::fixed(id, position, width, height)
        }
    }
}

impl Positioned for SolidBody {
    fn position(&self) -> DVec2 {
        self.position
    }
}

impl Collidable for SolidBody {
    fn id(&self) -> BodyId {
        self.id
    }

    fn pixel_bounds(&self) -> PixelRect {
        PixelRect::covering(self.position, self.width, self.height)
    }

    fn blocks(&self, other: BodyId) -> bool {
        self.is_spawned && self.is_solid && self.id != other
    }
}
