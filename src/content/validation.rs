//! Validation for tuning values that would break the integrator or the
//! ability machine.

use thiserror::Error;

use super::data::TuningFile;

/// A rejected tuning value with the field that holds it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{section}.{field} = {value}: {reason}")]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

/// Helper macro for checking a value is strictly positive and finite
macro_rules! check_positive {
    ($errors:expr, $section:expr, $owner:expr, $field:ident) => {
        let value: f64 = $owner.$field;
        if !(value.is_finite() && value > 0.0) {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                value,
                reason: "must be finite and greater than zero",
            });
        }
    };
}

/// Helper macro for checking a value is finite and not negative
macro_rules! check_non_negative {
    ($errors:expr, $section:expr, $owner:expr, $field:ident) => {
        let value: f64 = $owner.$field;
        if !(value.is_finite() && value >= 0.0) {
            $errors.push(ValidationError {
                section: $section,
                field: stringify!($field),
                value,
                reason: "must be finite and not negative",
            });
        }
    };
}

/// Validate every tuning value.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(tuning: &TuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let physics = &tuning.physics;
    check_positive!(errors, "physics", physics, gravity);
    check_positive!(errors, "physics", physics, max_fall_speed);

    let movement = &tuning.movement;
    check_positive!(errors, "movement", movement, max_run_speed);
    check_positive!(errors, "movement", movement, run_acceleration);
    check_positive!(errors, "movement", movement, brake_deceleration);
    check_positive!(errors, "movement", movement, over_speed_decay);
    check_positive!(errors, "movement", movement, stop_deceleration);
    check_positive!(errors, "movement", movement, jump_speed);
    check_positive!(errors, "movement", movement, midair_jump_speed);
    check_positive!(errors, "movement", movement, jump_release_decay);
    check_positive!(errors, "movement", movement, wall_slide_speed);
    check_positive!(errors, "movement", movement, wall_jump_speed);
    check_positive!(errors, "movement", movement, dash_speed);
    check_positive!(errors, "movement", movement, dash_duration);
    check_non_negative!(errors, "movement", movement, coyote_time);
    check_non_negative!(errors, "movement", movement, wall_jump_lock_time);
    check_non_negative!(errors, "movement", movement, dash_lag);

    // A slide faster than terminal velocity would never be reached.
    if movement.wall_slide_speed > physics.max_fall_speed {
        errors.push(ValidationError {
            section: "movement",
            field: "wall_slide_speed",
            value: movement.wall_slide_speed,
            reason: "must not exceed physics.max_fall_speed",
        });
    }

    errors
}
