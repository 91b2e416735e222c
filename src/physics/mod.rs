//! Physics domain: body model, kinematics and the per-frame integrator.

mod body;
mod components;
mod events;
mod integrator;
pub mod kinematics;
mod resources;
mod systems;


pub use body::{Contacts, PhysicsBody};
pub use components::{LastStep, Solid};
pub use events::{
    BecameAirborneEvent, HitCeilingEvent, LandedEvent, LeftCeilingEvent, WallContactEvent,
};
pub use integrator::{ContactEvent, StepReport, step};
pub use resources::{BodyIdGenerator, PhysicsTuning, SolidSnapshot};

use bevy::prelude::*;

use crate::physics::systems::{gather_solids, integrate_bodies, sync_transforms};

/// Frame pipeline order shared by all motion plugins.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MotionSet {
    /// Raw device state turned into action edges.
    Input,
    /// Ability layer writes velocity/acceleration targets.
    Abilities,
    Integrate,
    Present,
}

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PhysicsTuning>()
            .init_resource::<SolidSnapshot>()
            .init_resource::<BodyIdGenerator>()
            .add_message::<LandedEvent>()
            .add_message::<HitCeilingEvent>()
            .add_message::<LeftCeilingEvent>()
            .add_message::<WallContactEvent>()
            .add_message::<BecameAirborneEvent>()
            .configure_sets(
                Update,
                (
                    MotionSet::Input,
                    MotionSet::Abilities,
                    MotionSet::Integrate,
                    MotionSet::Present,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (gather_solids, integrate_bodies)
                    .chain()
                    .in_set(MotionSet::Integrate),
            )
            .add_systems(Update, sync_transforms.in_set(MotionSet::Present));
    }
}
