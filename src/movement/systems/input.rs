//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{ActionEdges, ActionSet, EdgeDetector, InputBindings, MovementInput};

pub(crate) fn read_input(
    keyboard: Option<Res<ButtonInput<KeyCode>>>,
    bindings: Res<InputBindings>,
    mut detector: ResMut<EdgeDetector>,
    mut input: ResMut<MovementInput>,
) {
    let queued = input.queued_edges();
    let mut edges = match keyboard {
        Some(keyboard) => {
            let mut held = ActionSet::default();
            for &(key, action) in &bindings.keys {
                if keyboard.pressed(key) {
                    held.insert(action);
                }
            }
            detector.feed(held)
        }
        None => ActionEdges::none(),
    };
    edges.merge(&queued);
    input.edges = edges;
}
