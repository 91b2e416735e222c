//! Physics domain: contact messages for animation and audio dispatch.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::collision::Side;

/// Emitted when a body becomes grounded
#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
    /// Vertical speed just before touchdown, for landing dust/thud volume.
    pub impact_speed: f64,
}

impl Message for LandedEvent {}

#[derive(Debug)]
pub struct HitCeilingEvent {
    pub entity: Entity,
}

impl Message for HitCeilingEvent {}

#[derive(Debug)]
pub struct LeftCeilingEvent {
    pub entity: Entity,
}

impl Message for LeftCeilingEvent {}

/// Emitted when horizontal motion runs into a wall
#[derive(Debug)]
pub struct WallContactEvent {
    pub entity: Entity,
    pub side: Side,
}

impl Message for WallContactEvent {}

#[derive(Debug)]
pub struct BecameAirborneEvent {
    pub entity: Entity,
}

impl Message for BecameAirborneEvent {}
