//! Physics domain: the moving-body model the integrator advances.

use bevy::math::DVec2;
use bevy::prelude::*;

use crate::collision::{BodyId, Collidable, PixelRect, Positioned, Side};
use crate::physics::components::LastStep;

/// Contact flags sensed at the end of the last integration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contacts {
    pub grounded: bool,
    /// Both extreme footprint columns are supported (not hanging over a ledge).
    pub fully_grounded: bool,
    pub ceiling: bool,
    pub wall_left: bool,
    pub wall_right: bool,
}

impl Contacts {
    pub fn wall(&self, side: Side) -> bool {
        match side {
            Side::Left => self.wall_left,
            Side::Right => self.wall_right,
        }
    }

    /// Grounded but with one extreme column over empty space.
    pub fn teetering(&self) -> bool {
        self.grounded && !self.fully_grounded
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
#[require(LastStep)]
pub struct PhysicsBody {
    pub id: BodyId,
    position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    /// Consulted per axis only while that axis' acceleration is nonzero.
    pub velocity_limit: DVec2,
    probes_x: Vec<i16>,
    probes_y: Vec<i16>,
    contacts: Contacts,
    pub gravity_affected: bool,
    pub moves_off_edges: bool,
    pub sticks_to_surfaces: bool,
    /// Lower terminal velocity while set, e.g. during a wall-slide.
    pub fall_speed_cap: Option<f64>,
    riding: Option<BodyId>,
    last_displacement: DVec2,
}

impl PhysicsBody {
    /// Probe offsets are sorted; an empty list collapses to a single point.
    pub fn new(id: BodyId, position: DVec2, mut probes_x: Vec<i16>, mut probes_y: Vec<i16>) -> Self {
        for probes in [&mut probes_x, &mut probes_y] {
            probes.sort_unstable();
            probes.dedup();
            if probes.is_empty() {
                probes.push(0);
            }
        }
        Self {
            id,
            position,
            velocity: DVec2::ZERO,
            acceleration: DVec2::ZERO,
            velocity_limit: DVec2::ZERO,
            probes_x,
            probes_y,
            contacts: Contacts::default(),
            gravity_affected: true,
            moves_off_edges: true,
            sticks_to_surfaces: false,
            fall_speed_cap: None,
            riding: None,
            last_displacement: DVec2::ZERO,
        }
    }

    /// A `width` x `height` box anchored at its top-left pixel, sampled at
    /// both edges and at most every `spacing` pixels in between.
    pub fn boxed(id: BodyId, position: DVec2, width: u16, height: u16, spacing: u16) -> Self {
        Self::new(
            id,
            position,
            edge_probes(width, spacing),
            edge_probes(height, spacing),
        )
    }

    pub fn with_gravity(mut self, enabled: bool) -> Self {
        self.gravity_affected = enabled;
        self
    }

    pub fn with_ledge_guard(mut self) -> Self {
        self.moves_off_edges = false;
        self
    }

    pub fn with_surface_sticking(mut self) -> Self {
        self.sticks_to_surfaces = true;
        self
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn contacts(&self) -> Contacts {
        self.contacts
    }

    pub fn riding(&self) -> Option<BodyId> {
        self.riding
    }

    pub fn last_displacement(&self) -> DVec2 {
        self.last_displacement
    }

    pub fn probes_x(&self) -> &[i16] {
        &self.probes_x
    }

    pub fn probes_y(&self) -> &[i16] {
        &self.probes_y
    }

    pub fn is_airborne(&self) -> bool {
        !self.contacts.grounded
    }

    /// Whole-pixel anchor of the footprint after moving by `offset`.
    #[inline]
    pub(crate) fn anchor(&self, offset: DVec2) -> (i32, i32) {
        let p = self.position + offset;
        (p.x.floor() as i32, p.y.floor() as i32)
    }

    /// Pixels covered by the footprint after moving by `offset`.
    pub fn footprint(&self, offset: DVec2) -> PixelRect {
        let (ax, ay) = self.anchor(offset);
        PixelRect {
            left: ax + self.left_edge(),
            top: ay + self.top_edge(),
            right: ax + self.right_edge(),
            bottom: ay + self.bottom_edge(),
        }
    }

    pub(crate) fn left_edge(&self) -> i32 {
        self.probes_x[0] as i32
    }

    pub(crate) fn right_edge(&self) -> i32 {
        self.probes_x[self.probes_x.len() - 1] as i32
    }

    pub(crate) fn top_edge(&self) -> i32 {
        self.probes_y[0] as i32
    }

    pub(crate) fn bottom_edge(&self) -> i32 {
        self.probes_y[self.probes_y.len() - 1] as i32
    }

    pub(crate) fn commit(&mut self, displacement: DVec2) {
        self.position += displacement;
        self.last_displacement = displacement;
    }

    pub(crate) fn set_contacts(&mut self, contacts: Contacts, riding: Option<BodyId>) {
        self.contacts = contacts;
        self.riding = if contacts.grounded { riding } else { None };
    }

    /// Place the body at `position` with all motion and contact state cleared.
    pub fn respawn_at(&mut self, position: DVec2) {
        self.position = position;
        self.velocity = DVec2::ZERO;
        self.acceleration = DVec2::ZERO;
        self.velocity_limit = DVec2::ZERO;
        self.fall_speed_cap = None;
        self.contacts = Contacts::default();
        self.riding = None;
        self.last_displacement = DVec2::ZERO;
    }
}

fn edge_probes(extent: u16, spacing: u16) -> Vec<i16> {
    let last = extent.saturating_sub(1) as i16;
    let spacing = spacing.max(1) as i16;
    let mut probes: Vec<i16> = (0..last).step_by(spacing as usize).collect();
    probes.push(last);
    probes
}

impl Positioned for PhysicsBody {
    fn position(&self) -> DVec2 {
        self.position
    }
}

impl Collidable for PhysicsBody {
    fn id(&self) -> BodyId {
        self.id
    }

    fn pixel_bounds(&self) -> PixelRect {
        self.footprint(DVec2::ZERO)
    }

    fn blocks(&self, other: BodyId) -> bool {
        self.id != other
    }
}
