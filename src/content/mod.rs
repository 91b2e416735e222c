//! Content domain: designer-editable tuning loaded at startup.

mod data;
mod loader;
mod validation;


pub use data::{TUNING_SCHEMA_VERSION, TuningFile};
pub use loader::{ContentLoadError, TuningFormat, load_tuning, parse_tuning};
pub use validation::{ValidationError, validate_tuning};

use bevy::prelude::*;
use std::path::PathBuf;

use crate::movement::MovementTuning;
use crate::physics::PhysicsTuning;

/// Where to read tuning from. Without it the compiled-in defaults stay.
#[derive(Resource, Debug, Clone)]
pub struct TuningSource(pub PathBuf);

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, apply_tuning_file);
    }
}

fn apply_tuning_file(
    source: Option<Res<TuningSource>>,
    mut physics: ResMut<PhysicsTuning>,
    mut movement: ResMut<MovementTuning>,
) {
    let Some(source) = source else {
        debug!("No tuning source configured, using defaults");
        return;
    };

    match load_tuning(&source.0) {
        Ok(tuning) => {
            *physics = tuning.physics;
            *movement = tuning.movement;
            info!("Loaded tuning from {}", source.0.display());
        }
        Err(ContentLoadError::Invalid { file, errors }) => {
            for error in &errors {
                warn!("Tuning in {}: {}", file, error);
            }
            warn!("Keeping default tuning");
        }
        Err(e) => {
            warn!("{}; keeping default tuning", e);
        }
    }
}
