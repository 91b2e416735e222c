//! Movement domain: player input, abilities and locomotion.

mod abilities;
mod components;
mod events;
mod input;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use abilities::{AbilityEvent, DashKind, JumpKind, Locomotion, locomotion};
pub use components::{AbilityState, DashPhase, Facing, JumpGate, Player, WallSlideSide};
pub use events::{DashEndedEvent, DashEvent, JumpEvent, RespawnEvent, WallSlideEvent};
pub use input::{Action, ActionEdges, ActionSet, EdgeDetector};
pub use resources::{InputBindings, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::systems::{handle_respawns, read_input, update_abilities};
use crate::physics::MotionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<InputBindings>()
            .init_resource::<EdgeDetector>()
            .add_message::<JumpEvent>()
            .add_message::<DashEvent>()
            .add_message::<DashEndedEvent>()
            .add_message::<WallSlideEvent>()
            .add_message::<RespawnEvent>()
            .add_systems(Update, read_input.in_set(MotionSet::Input))
            .add_systems(
                Update,
                (handle_respawns, update_abilities)
                    .chain()
                    .in_set(MotionSet::Abilities),
            );
    }
}
