//! Pixel-accurate movement and collision core for a 2D side-scroller.
//!
//! Coordinates are pixels with y growing downward. Add
//! [`PlatformerMotionPlugin`], insert an [`collision::ActiveRoom`], and spawn
//! entities carrying a [`physics::PhysicsBody`] (plus
//! [`movement::AbilityState`] and [`movement::Player`] for the player).

pub mod collision;
pub mod content;
pub mod movement;
pub mod physics;

use bevy::prelude::*;

pub struct PlatformerMotionPlugin;

impl Plugin for PlatformerMotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            physics::PhysicsPlugin,
            movement::MovementPlugin,
            content::ContentPlugin,
        ));
    }
}
