//! Movement domain: logical actions and button-edge detection.
//!
//! The ability layer only ever sees [`ActionEdges`]. Polling raw device
//! state lives in [`EdgeDetector`], so scripted edge sequences can drive the
//! same code as a keyboard.

use bevy::prelude::*;

const ACTION_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
    Up,
    Jump,
    Dash,
    Interact,
}

impl Action {
    pub const ALL: [Action; ACTION_COUNT] = [
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Jump,
        Action::Dash,
        Action::Interact,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// A set of actions, one flag each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionSet([bool; ACTION_COUNT]);

impl ActionSet {
    pub fn of(actions: &[Action]) -> Self {
        let mut set = Self::default();
        for &action in actions {
            set.insert(action);
        }
        set
    }

    pub fn contains(&self, action: Action) -> bool {
        self.0[action.index()]
    }

    pub fn insert(&mut self, action: Action) {
        self.0[action.index()] = true;
    }

    pub fn remove(&mut self, action: Action) {
        self.0[action.index()] = false;
    }

    pub fn union(&self, other: &ActionSet) -> Self {
        let mut merged = *self;
        for action in Action::ALL {
            if other.contains(action) {
                merged.insert(action);
            }
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&b| b)
    }

    /// Fold one frame of edges into a held set.
    pub fn apply(&mut self, edges: &ActionEdges) {
        for action in Action::ALL {
            if edges.released(action) {
                self.remove(action);
            } else if edges.pressed(action) {
                self.insert(action);
            }
        }
    }
}

/// Pressed-this-frame and released-this-frame flags per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionEdges {
    pub pressed: ActionSet,
    pub released: ActionSet,
}

impl ActionEdges {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn press(actions: &[Action]) -> Self {
        Self {
            pressed: ActionSet::of(actions),
            released: ActionSet::default(),
        }
    }

    pub fn release(actions: &[Action]) -> Self {
        Self {
            pressed: ActionSet::default(),
            released: ActionSet::of(actions),
        }
    }

    pub fn pressed(&self, action: Action) -> bool {
        self.pressed.contains(action)
    }

    pub fn released(&self, action: Action) -> bool {
        self.released.contains(action)
    }

    pub fn merge(&mut self, other: &ActionEdges) {
        self.pressed = self.pressed.union(&other.pressed);
        self.released = self.released.union(&other.released);
    }
}

/// Turns successive held-state snapshots into edges.
#[derive(Resource, Debug, Clone, Default)]
pub struct EdgeDetector {
    previous: ActionSet,
}

impl EdgeDetector {
    pub fn feed(&mut self, held: ActionSet) -> ActionEdges {
        let mut edges = ActionEdges::default();
        for action in Action::ALL {
            match (self.previous.contains(action), held.contains(action)) {
                (false, true) => edges.pressed.insert(action),
                (true, false) => edges.released.insert(action),
                _ => {}
            }
        }
        self.previous = held;
        edges
    }
}
