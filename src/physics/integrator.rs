//! Physics domain: one integration step for one body.

use bevy::log::{debug, trace};
use bevy::math::DVec2;

use crate::collision::{
    Axis, CollisionWorld, Side, Support, clamp_axis, ground_support_at, probe, sense_contacts,
    walk_until_blocked,
};
use crate::physics::kinematics::{advance, apply_gravity};
use crate::physics::{PhysicsBody, PhysicsTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    Land,
    HitCeiling,
    CollideX(Side),
    LeaveGround,
    LeaveCeiling,
}

/// What one step did to a body. Contact fields are set only on transitions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    pub displacement: DVec2,
    pub landed: bool,
    pub hit_ceiling: bool,
    pub collided_x: Option<Side>,
    pub left_ground: bool,
    pub left_ceiling: bool,
    /// The ledge guard cut horizontal motion short.
    pub stopped_at_ledge: bool,
    /// Downward speed carried into a landing, zero otherwise.
    pub impact_speed: f64,
}

impl StepReport {
    pub fn events(&self) -> impl Iterator<Item = ContactEvent> {
        [
            self.landed.then_some(ContactEvent::Land),
            self.hit_ceiling.then_some(ContactEvent::HitCeiling),
            self.collided_x.map(ContactEvent::CollideX),
            self.left_ground.then_some(ContactEvent::LeaveGround),
            self.left_ceiling.then_some(ContactEvent::LeaveCeiling),
        ]
        .into_iter()
        .flatten()
    }
}

/// Advance `body` by `dt` seconds against `world`.
///
/// `dt` must be finite; callers own that precondition.
pub fn step(
    body: &mut PhysicsBody,
    world: &CollisionWorld,
    tuning: &PhysicsTuning,
    dt: f64,
) -> StepReport {
    let before = body.contacts();
    let mut report = StepReport::default();

    // A grounded body with upward speed is leaving this frame and already
    // feels gravity.
    if body.gravity_affected && (!before.grounded || body.velocity.y < 0.0) {
        let fall_cap = body
            .fall_speed_cap
            .map_or(tuning.max_fall_speed, |cap| cap.min(tuning.max_fall_speed));
        body.velocity.y = apply_gravity(body.velocity.y, tuning.gravity, fall_cap, dt);
    }

    let (dx, vx) = advance(body.velocity.x, body.acceleration.x, body.velocity_limit.x, dt);
    let (dy, vy) = advance(body.velocity.y, body.acceleration.y, body.velocity_limit.y, dt);
    body.velocity = DVec2::new(vx, vy);
    let incoming_vy = vy;

    let mut candidate = DVec2::new(dx, dy);
    if let Some(carrier) = body.riding().and_then(|id| world.solid(id)) {
        candidate += carrier.displacement;
    }

    let clamped_y = clamp_axis(body, world, candidate.y, Axis::Y, 0.0);
    if clamped_y != candidate.y {
        trace!(
            "body {:?}: vertical motion {:.2} clamped to {:.2}",
            body.id, candidate.y, clamped_y
        );
        if body.velocity.y * candidate.y > 0.0 {
            body.velocity.y = 0.0;
        }
    }

    let mut clamped_x = clamp_axis(body, world, candidate.x, Axis::X, clamped_y);
    if clamped_x != candidate.x && body.velocity.x * candidate.x > 0.0 {
        body.velocity.x = 0.0;
    }

    if before.grounded && !body.moves_off_edges && clamped_x != 0.0 {
        let guarded = guard_ledge(body, world, clamped_x, clamped_y);
        if guarded != clamped_x {
            report.stopped_at_ledge = true;
            body.velocity.x = 0.0;
            clamped_x = guarded;
        }
    }

    let mut final_y = clamped_y;
    if before.grounded && body.sticks_to_surfaces && body.velocity.y >= 0.0 {
        final_y += stick_drop(body, world, DVec2::new(clamped_x, clamped_y), tuning.stick_distance);
    }

    let displacement = DVec2::new(clamped_x, final_y);
    body.commit(displacement);
    report.displacement = displacement;

    let (after, support) = sense_contacts(body, world);
    let riding = match support {
        Some(Support::Solid { id, dynamic: true }) => Some(id),
        _ => None,
    };
    body.set_contacts(after, riding);

    if after.grounded && body.velocity.y > 0.0 {
        body.velocity.y = 0.0;
    }
    if after.ceiling && body.velocity.y < 0.0 {
        body.velocity.y = 0.0;
    }

    report.landed = !before.grounded && after.grounded;
    if report.landed {
        report.impact_speed = incoming_vy.max(0.0);
    }
    report.left_ground = before.grounded && !after.grounded;
    report.hit_ceiling = !before.ceiling && after.ceiling;
    report.left_ceiling = before.ceiling && !after.ceiling;
    // Pressing into a wall already touched stays quiet.
    report.collided_x = if !before.wall_right && after.wall_right {
        Some(Side::Right)
    } else if !before.wall_left && after.wall_left {
        Some(Side::Left)
    } else {
        None
    };

    if report.landed {
        debug!("body {:?} landed at {:?}", body.id, body.position());
    } else if report.left_ground {
        debug!("body {:?} left ground at {:?}", body.id, body.position());
    }

    report
}

/// Cut `dx` short at the first pixel that would leave the body without
/// ground below it.
fn guard_ledge(body: &PhysicsBody, world: &CollisionWorld, dx: f64, dy: f64) -> f64 {
    walk_until_blocked(dx, |d| {
        let offset = DVec2::new(d, dy);
        probe(body, world, offset) || ground_support_at(body, world, offset).is_none()
    })
}

/// How far to pull a body down so it stays on a surface that dropped away
/// beneath it, or zero when it is still supported or no surface is in reach.
fn stick_drop(body: &PhysicsBody, world: &CollisionWorld, offset: DVec2, reach: u8) -> f64 {
    if ground_support_at(body, world, offset).is_some() {
        return 0.0;
    }
    for drop in 1..=reach {
        let lowered = offset + DVec2::new(0.0, drop as f64);
        if probe(body, world, lowered) {
            break;
        }
        if ground_support_at(body, world, lowered).is_some() {
            return drop as f64;
        }
    }
    0.0
}
