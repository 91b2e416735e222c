//! Collision domain: probe, clamp and contact queries against a room.
//!
//! Every query samples the body's footprint at its probe offsets. `probe`
//! asks whether the footprint *overlaps* geometry; the contact queries look
//! one pixel beyond the footprint edge, so a body resting against a surface
//! is in contact with it without being embedded in it.

use bevy::math::DVec2;

use crate::collision::{BodyId, Collidable, CollisionField, PixelRect, SolidBody};
use crate::physics::{Contacts, PhysicsBody};

/// Everything a body resolves against during one step. Shared read-only by
/// all bodies of a room for the whole frame.
#[derive(Debug, Clone, Copy)]
pub struct CollisionWorld<'a> {
    pub field: &'a CollisionField,
    pub solids: &'a [SolidBody],
}

impl<'a> CollisionWorld<'a> {
    pub fn new(field: &'a CollisionField, solids: &'a [SolidBody]) -> Self {
        Self { field, solids }
    }

    pub fn solid(&self, id: BodyId) -> Option<&'a SolidBody> {
        self.solids.iter().find(|s| s.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// -1 for left, +1 for right.
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// What a grounded body is standing on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    Field,
    Solid { id: BodyId, dynamic: bool },
}

fn first_blocking<'s, C: Collidable>(solids: &'s [C], id: BodyId, rect: &PixelRect) -> Option<&'s C> {
    solids
        .iter()
        .find(|s| s.blocks(id) && s.pixel_bounds().overlaps(rect))
}

/// True if two collidables occupy at least one common pixel.
pub fn bodies_overlap(a: &impl Collidable, b: &impl Collidable) -> bool {
    a.blocks(b.id()) && a.pixel_bounds().overlaps(&b.pixel_bounds())
}

fn field_overlap(body: &PhysicsBody, field: &CollisionField, offset: DVec2) -> bool {
    let (ax, ay) = body.anchor(offset);
    let top = ay + body.top_edge();
    let bottom = ay + body.bottom_edge();
    let left = ax + body.left_edge();
    let right = ax + body.right_edge();

    body.probes_x().iter().any(|&px| {
        let x = ax + px as i32;
        field.is_solid(x, top) || field.is_solid(x, bottom)
    }) || body.probes_y().iter().any(|&py| {
        let y = ay + py as i32;
        field.is_solid(left, y) || field.is_solid(right, y)
    })
}

/// Whether the body placed at `position + offset` would overlap solid field
/// pixels or any spawned solid other than itself.
pub fn probe(body: &PhysicsBody, world: &CollisionWorld, offset: DVec2) -> bool {
    field_overlap(body, world.field, offset)
        || first_blocking(world.solids, body.id, &body.footprint(offset)).is_some()
}

/// A body that already overlaps geometry where it stands cannot move out by
/// clamping; spawners check this instead of relying on the resolver.
pub fn is_embedded(body: &PhysicsBody, world: &CollisionWorld) -> bool {
    probe(body, world, DVec2::ZERO)
}

/// Furthest offset along a signed `candidate` that `blocked` accepts, walked
/// outward from zero one whole pixel at a time so no row or column between
/// the start and the destination is skipped. The fractional remainder is
/// only taken when the full candidate is also clear.
pub(crate) fn walk_until_blocked(candidate: f64, blocked: impl Fn(f64) -> bool) -> f64 {
    if candidate == 0.0 {
        return 0.0;
    }
    let step = candidate.signum();
    let whole = candidate.abs().floor();
    let mut reached: f64 = 0.0;
    while reached.abs() < whole {
        let next = reached + step;
        if blocked(next) {
            return reached;
        }
        reached = next;
    }
    if reached != candidate && !blocked(candidate) {
        candidate
    } else {
        reached
    }
}

/// Largest safe displacement along `axis`. `cross` is the already-resolved
/// displacement on the other axis. A zero candidate returns zero without
/// probing.
pub fn clamp_axis(
    body: &PhysicsBody,
    world: &CollisionWorld,
    candidate: f64,
    axis: Axis,
    cross: f64,
) -> f64 {
    walk_until_blocked(candidate, |d| {
        let offset = match axis {
            Axis::X => DVec2::new(d, cross),
            Axis::Y => DVec2::new(cross, d),
        };
        probe(body, world, offset)
    })
}

/// Support one row below the footprint after moving by `offset`. Solids are
/// preferred over the field so a body straddling a platform and the floor
/// still rides the platform.
pub fn ground_support_at(body: &PhysicsBody, world: &CollisionWorld, offset: DVec2) -> Option<Support> {
    let rect = body.footprint(offset);
    let row = rect.bottom + 1;
    let strip = PixelRect {
        top: row,
        bottom: row,
        ..rect
    };
    if let Some(solid) = first_blocking(world.solids, body.id, &strip) {
        return Some(Support::Solid {
            id: solid.id,
            dynamic: solid.is_dynamic,
        });
    }
    let (ax, _) = body.anchor(offset);
    body.probes_x()
        .iter()
        .any(|&px| world.field.is_solid(ax + px as i32, row))
        .then_some(Support::Field)
}

pub fn ground_support(body: &PhysicsBody, world: &CollisionWorld) -> Option<Support> {
    ground_support_at(body, world, DVec2::ZERO)
}

/// Any probe column has something directly below it.
pub fn touching_ground(body: &PhysicsBody, world: &CollisionWorld) -> bool {
    ground_support(body, world).is_some()
}

/// Both extreme columns have something directly below them. A body that is
/// touching ground but not fully grounded hangs over a ledge.
pub fn fully_grounded(body: &PhysicsBody, world: &CollisionWorld) -> bool {
    let rect = body.footprint(DVec2::ZERO);
    let row = rect.bottom + 1;
    [rect.left, rect.right].into_iter().all(|x| {
        let pixel = PixelRect {
            left: x,
            right: x,
            top: row,
            bottom: row,
        };
        world.field.is_solid(x, row) || first_blocking(world.solids, body.id, &pixel).is_some()
    })
}

pub fn touching_ceiling(body: &PhysicsBody, world: &CollisionWorld) -> bool {
    let rect = body.footprint(DVec2::ZERO);
    let row = rect.top - 1;
    let strip = PixelRect {
        top: row,
        bottom: row,
        ..rect
    };
    let (ax, _) = body.anchor(DVec2::ZERO);
    body.probes_x()
        .iter()
        .any(|&px| world.field.is_solid(ax + px as i32, row))
        || first_blocking(world.solids, body.id, &strip).is_some()
}

pub fn touching_wall(body: &PhysicsBody, world: &CollisionWorld, side: Side) -> bool {
    let rect = body.footprint(DVec2::ZERO);
    let column = match side {
        Side::Left => rect.left - 1,
        Side::Right => rect.right + 1,
    };
    let strip = PixelRect {
        left: column,
        right: column,
        ..rect
    };
    let (_, ay) = body.anchor(DVec2::ZERO);
    body.probes_y()
        .iter()
        .any(|&py| world.field.is_solid(column, ay + py as i32))
        || first_blocking(world.solids, body.id, &strip).is_some()
}

/// Contact flags and ground support at the body's current position.
/// Ceiling contact is only reported while airborne.
pub fn sense_contacts(body: &PhysicsBody, world: &CollisionWorld) -> (Contacts, Option<Support>) {
    let support = ground_support(body, world);
    let grounded = support.is_some();
    let contacts = Contacts {
        grounded,
        fully_grounded: grounded && fully_grounded(body, world),
        ceiling: !grounded && touching_ceiling(body, world),
        wall_left: touching_wall(body, world, Side::Left),
        wall_right: touching_wall(body, world, Side::Right),
    };
    (contacts, support)
}
