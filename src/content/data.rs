//! Data definitions for tuning files.
//!
//! A tuning file carries both physics and movement constants so designers
//! can iterate on feel without rebuilding. Missing sections or fields fall
//! back to the compiled-in defaults.

use serde::{Deserialize, Serialize};

use crate::movement::MovementTuning;
use crate::physics::PhysicsTuning;

pub const TUNING_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub physics: PhysicsTuning,
    #[serde(default)]
    pub movement: MovementTuning,
}

impl Default for TuningFile {
    fn default() -> Self {
        Self {
            schema_version: TUNING_SCHEMA_VERSION,
            physics: PhysicsTuning::default(),
            movement: MovementTuning::default(),
        }
    }
}
