//! Physics domain: per-axis kinematics.

/// Pull `value` toward `limit` from the side the acceleration pushes from:
/// `min` for positive acceleration, `max` otherwise.
#[inline]
pub fn clamp_toward(limit: f64, acceleration: f64, value: f64) -> f64 {
    if acceleration > 0.0 {
        value.min(limit)
    } else {
        value.max(limit)
    }
}

/// Advance one axis by `dt`, returning `(displacement, new_velocity)`.
///
/// With acceleration the displacement uses the midpoint velocity, and both
/// it and the new velocity stop at the limit instead of overshooting it.
pub fn advance(velocity: f64, acceleration: f64, limit: f64, dt: f64) -> (f64, f64) {
    if acceleration == 0.0 {
        return (velocity * dt, velocity);
    }
    let displacement = dt * clamp_toward(limit, acceleration, velocity + acceleration * 0.5 * dt);
    let velocity = clamp_toward(limit, acceleration, velocity + acceleration * dt);
    (displacement, velocity)
}

/// Constant downward pull capped at terminal velocity. Bodies already
/// falling faster than the cap are not slowed.
pub fn apply_gravity(velocity_y: f64, gravity: f64, max_fall_speed: f64, dt: f64) -> f64 {
    if velocity_y >= max_fall_speed {
        return velocity_y;
    }
    (velocity_y + gravity * dt).min(max_fall_speed)
}
