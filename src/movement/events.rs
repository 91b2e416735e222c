//! Movement domain: ability messages for animation and audio.

use bevy::ecs::message::Message;
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::collision::Side;
use crate::movement::{DashKind, JumpKind};

#[derive(Debug)]
pub struct JumpEvent {
    pub entity: Entity,
    pub kind: JumpKind,
}

impl Message for JumpEvent {}

#[derive(Debug)]
pub struct DashEvent {
    pub entity: Entity,
    pub kind: DashKind,
}

impl Message for DashEvent {}

#[derive(Debug)]
pub struct DashEndedEvent {
    pub entity: Entity,
}

impl Message for DashEndedEvent {}

/// Wall-slide started on `side`, or ended when `side` is `None`
#[derive(Debug)]
pub struct WallSlideEvent {
    pub entity: Entity,
    pub side: Option<Side>,
}

impl Message for WallSlideEvent {}

/// Sent by gameplay (death, pit, checkpoint) to reset a player
#[derive(Debug)]
pub struct RespawnEvent {
    pub entity: Entity,
    pub position: DVec2,
}

impl Message for RespawnEvent {}
