//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{Action, ActionEdges};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub max_run_speed: f64,
    pub run_acceleration: f64,
    /// Applied while input opposes current motion.
    pub brake_deceleration: f64,
    /// Bleeds off speed above `max_run_speed` while still holding forward.
    pub over_speed_decay: f64,
    /// Applied with no horizontal input.
    pub stop_deceleration: f64,
    pub jump_speed: f64,
    pub midair_jump_speed: f64,
    /// Upward speed decay once the jump button is let go mid-rise.
    pub jump_release_decay: f64,
    pub max_midair_jumps: u8,
    pub coyote_time: f64,
    pub wall_slide_speed: f64,
    /// Launch speed along the 45 degree direction away from the wall.
    pub wall_jump_speed: f64,
    pub wall_jump_lock_time: f64,
    pub dash_speed: f64,
    pub dash_duration: f64,
    pub dash_lag: f64,
    /// Dashes allowed per airborne stretch; negative means unlimited.
    pub midair_dash_charges: i8,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_run_speed: 480.0,
            run_acceleration: 2700.0,
            brake_deceleration: 4800.0,
            over_speed_decay: 1200.0,
            stop_deceleration: 3600.0,
            jump_speed: 660.0,
            midair_jump_speed: 600.0,
            jump_release_decay: 3000.0,
            max_midair_jumps: 1,
            coyote_time: 0.08,
            wall_slide_speed: 150.0,
            wall_jump_speed: 720.0,
            wall_jump_lock_time: 0.15,
            dash_speed: 960.0,
            dash_duration: 0.18,
            dash_lag: 0.12,
            midair_dash_charges: 1,
        }
    }
}

impl MovementTuning {
    /// Apex height of a ground jump held to the top, ignoring release decay.
    /// Uses h = v² / (2g).
    pub fn full_jump_height(&self, gravity: f64) -> f64 {
        self.jump_speed * self.jump_speed / (2.0 * gravity)
    }

    /// Horizontal distance covered by one uninterrupted dash.
    pub fn dash_distance(&self) -> f64 {
        self.dash_speed * self.dash_duration
    }
}

/// This frame's action edges for the player. `edges` is rebuilt by the
/// input system every frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub edges: ActionEdges,
    queued: Option<ActionEdges>,
}

impl MovementInput {
    /// Scripted edges for the next frame only, merged with any keyboard edges.
    /// Drives replays and headless runs.
    pub fn queue(&mut self, edges: ActionEdges) {
        self.queued = Some(edges);
    }

    pub(crate) fn queued_edges(&mut self) -> ActionEdges {
        self.queued.take().unwrap_or_default()
    }
}

/// Keyboard bindings read by the input system.
#[derive(Resource, Debug, Clone)]
pub struct InputBindings {
    pub keys: Vec<(KeyCode, Action)>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self {
            keys: vec![
                (KeyCode::KeyA, Action::Left),
                (KeyCode::ArrowLeft, Action::Left),
                (KeyCode::KeyD, Action::Right),
                (KeyCode::ArrowRight, Action::Right),
                (KeyCode::KeyW, Action::Up),
                (KeyCode::ArrowUp, Action::Up),
                (KeyCode::Space, Action::Jump),
                (KeyCode::KeyK, Action::Jump),
                (KeyCode::ShiftLeft, Action::Dash),
                (KeyCode::KeyJ, Action::Dash),
                (KeyCode::KeyE, Action::Interact),
            ],
        }
    }
}
