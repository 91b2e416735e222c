//! Movement domain: the per-frame ability update.
//!
//! Sub-machines run in a fixed order each frame: contact reactions, facing,
//! wall-slide, jump, dash, horizontal locomotion. Each one only writes
//! velocity, acceleration and limits on the body; positions are left to the
//! integrator.

use std::f64::consts::FRAC_1_SQRT_2;

use bevy::log::debug;
use bevy::math::DVec2;

use crate::collision::Side;
use crate::movement::{
    AbilityState, Action, ActionEdges, DashPhase, Facing, JumpGate, MovementTuning, WallSlideSide,
};
use crate::physics::{PhysicsBody, StepReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Midair,
    /// Launched off the wall on this side.
    Wall(Side),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashKind {
    Ground,
    Midair,
    /// Started from a wall-slide, heading away from the wall.
    WallReverse,
}

/// Presentation-facing transitions raised by the ability layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityEvent {
    Jumped(JumpKind),
    DashStarted(DashKind),
    DashEnded,
    DashReady,
    WallSlideStarted(Side),
    WallSlideEnded,
}

/// The four horizontal regimes of the locomotion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locomotion {
    Braking,
    Accelerating,
    OverSpeedDecay,
    Stopping,
}

/// Pick the acceleration/limit pair for held direction `dir` (-1, 0, 1) and
/// current horizontal velocity `vx`. Returns `(regime, acceleration, limit)`.
pub fn locomotion(dir: f64, vx: f64, tuning: &MovementTuning) -> (Locomotion, f64, f64) {
    let max = tuning.max_run_speed;
    if dir == 0.0 {
        let accel = if vx == 0.0 {
            0.0
        } else {
            -vx.signum() * tuning.stop_deceleration
        };
        return (Locomotion::Stopping, accel, 0.0);
    }
    if vx != 0.0 && vx.signum() != dir {
        (Locomotion::Braking, dir * tuning.brake_deceleration, dir * max)
    } else if vx.abs() <= max {
        (Locomotion::Accelerating, dir * tuning.run_acceleration, dir * max)
    } else {
        (Locomotion::OverSpeedDecay, -dir * tuning.over_speed_decay, dir * max)
    }
}

impl AbilityState {
    /// Advance all sub-machines by one frame.
    ///
    /// `last` is the integrator's report from the previous frame; contact
    /// changes are reacted to one tick after they happen.
    pub fn update(
        &mut self,
        body: &mut PhysicsBody,
        input: &ActionEdges,
        last: &StepReport,
        tuning: &MovementTuning,
        dt: f64,
    ) -> Vec<AbilityEvent> {
        let mut events = Vec::new();
        // Contact reactions see what was held before this frame's edges, so
        // a fresh press on the landing frame still counts.
        self.react_to_contacts(last, tuning, dt);
        self.held.apply(input);

        self.update_facing(input);
        self.update_wall_slide(body, tuning, &mut events);
        self.update_jump(body, input, tuning, &mut events);
        self.update_dash(body, input, tuning, dt, &mut events);
        self.update_locomotion(body, tuning, dt);
        body.fall_speed_cap = self.wall_slide.side().map(|_| tuning.wall_slide_speed);

        events
    }

    /// Full reset for respawn. Restores gravity if a dash was cut short.
    pub fn respawn(&mut self, body: &mut PhysicsBody, tuning: &MovementTuning) {
        if self.dash.is_active() {
            body.gravity_affected = self.gravity_before_dash;
        }
        body.fall_speed_cap = None;
        *self = Self::new(tuning);
    }

    /// -1, 0 or 1. When both directions are held the facing side wins.
    pub fn held_direction(&self) -> f64 {
        match (self.held.contains(Action::Left), self.held.contains(Action::Right)) {
            (true, true) => self.facing.sign(),
            (true, false) => -1.0,
            (false, true) => 1.0,
            (false, false) => 0.0,
        }
    }

    fn react_to_contacts(&mut self, last: &StepReport, tuning: &MovementTuning, dt: f64) {
        if last.landed {
            self.midair_jumps_remaining = tuning.max_midair_jumps;
            self.jump_gate = if self.held.contains(Action::Jump) {
                JumpGate::NotAllowed
            } else {
                JumpGate::Allowed
            };
            self.coyote_timer = 0.0;
            self.airborne_by_jump = false;
        } else if last.left_ground {
            self.dash_charges_remaining = tuning.midair_dash_charges;
            self.coyote_timer = if self.airborne_by_jump {
                0.0
            } else {
                tuning.coyote_time
            };
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }
    }

    fn update_facing(&mut self, input: &ActionEdges) {
        if self.dash.is_active() {
            return;
        }
        if input.pressed(Action::Left) {
            self.facing = Facing::Left;
        }
        if input.pressed(Action::Right) {
            self.facing = Facing::Right;
        }
    }

    fn update_wall_slide(
        &mut self,
        body: &mut PhysicsBody,
        tuning: &MovementTuning,
        events: &mut Vec<AbilityEvent>,
    ) {
        let contacts = body.contacts();
        let pressing = match self.held_direction() {
            d if d < 0.0 && contacts.wall_left => Some(Side::Left),
            d if d > 0.0 && contacts.wall_right => Some(Side::Right),
            _ => None,
        };
        let sliding = pressing.filter(|_| {
            !contacts.grounded && body.velocity.y >= 0.0 && !self.dash.is_active()
        });

        let next = WallSlideSide::from(sliding);
        if next != self.wall_slide {
            match sliding {
                Some(side) => events.push(AbilityEvent::WallSlideStarted(side)),
                None => events.push(AbilityEvent::WallSlideEnded),
            }
            self.wall_slide = next;
        }
        // The integrator keeps gravity under the same cap while sliding.
        if sliding.is_some() {
            body.velocity.y = body.velocity.y.min(tuning.wall_slide_speed);
        }
    }

    fn update_jump(
        &mut self,
        body: &mut PhysicsBody,
        input: &ActionEdges,
        tuning: &MovementTuning,
        events: &mut Vec<AbilityEvent>,
    ) {
        let dashing = self.dash.is_active();

        if input.pressed(Action::Jump) && self.jump_gate == JumpGate::Allowed && !dashing {
            if let Some(kind) = self.try_jump(body, tuning, events) {
                self.jump_gate = JumpGate::Holding;
                debug!("jump {:?} from {:?}", kind, body.position());
                events.push(AbilityEvent::Jumped(kind));
            }
        }

        if !self.held.contains(Action::Jump) && self.jump_gate != JumpGate::Allowed {
            self.jump_gate = JumpGate::Allowed;
        }

        if dashing {
            return;
        }
        // Variable height: letting go mid-rise bleeds upward speed toward zero.
        if body.velocity.y < 0.0 && !self.held.contains(Action::Jump) {
            body.acceleration.y = tuning.jump_release_decay;
            body.velocity_limit.y = 0.0;
        } else {
            body.acceleration.y = 0.0;
            body.velocity_limit.y = 0.0;
        }
    }

    fn try_jump(
        &mut self,
        body: &mut PhysicsBody,
        tuning: &MovementTuning,
        events: &mut Vec<AbilityEvent>,
    ) -> Option<JumpKind> {
        let kind = if body.contacts().grounded || self.coyote_timer > 0.0 {
            body.velocity.y = -tuning.jump_speed;
            JumpKind::Ground
        } else if let Some(wall) = self.wall_slide.side() {
            let away = wall.opposite();
            let component = tuning.wall_jump_speed * FRAC_1_SQRT_2;
            body.velocity = DVec2::new(away.sign() * component, -component);
            self.facing = Facing::from(away);
            self.wall_slide = WallSlideSide::None;
            self.wall_jump_lock = tuning.wall_jump_lock_time;
            events.push(AbilityEvent::WallSlideEnded);
            JumpKind::Wall(wall)
        } else if self.midair_jumps_remaining > 0 {
            self.midair_jumps_remaining -= 1;
            body.velocity.y = -tuning.midair_jump_speed;
            JumpKind::Midair
        } else {
            return None;
        };
        self.coyote_timer = 0.0;
        self.airborne_by_jump = true;
        Some(kind)
    }

    fn update_dash(
        &mut self,
        body: &mut PhysicsBody,
        input: &ActionEdges,
        tuning: &MovementTuning,
        dt: f64,
        events: &mut Vec<AbilityEvent>,
    ) {
        match self.dash {
            DashPhase::Allowed => {
                if input.pressed(Action::Dash) {
                    self.try_start_dash(body, tuning, events);
                }
            }
            DashPhase::Active { elapsed, direction } => {
                let elapsed = elapsed + dt;
                if !self.held.contains(Action::Dash) || elapsed >= tuning.dash_duration {
                    self.dash = DashPhase::CooldownLag { elapsed: 0.0 };
                    body.gravity_affected = self.gravity_before_dash;
                    debug!("dash ended after {:.3}s", elapsed);
                    events.push(AbilityEvent::DashEnded);
                } else {
                    self.dash = DashPhase::Active { elapsed, direction };
                    body.velocity = DVec2::new(direction.sign() * tuning.dash_speed, 0.0);
                    body.acceleration = DVec2::ZERO;
                }
            }
            DashPhase::CooldownLag { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= tuning.dash_lag && !self.held.contains(Action::Dash) {
                    self.dash = DashPhase::Allowed;
                    events.push(AbilityEvent::DashReady);
                } else {
                    self.dash = DashPhase::CooldownLag { elapsed };
                }
            }
        }
    }

    /// Start a dash if the current situation allows one. A refused dash
    /// leaves body and state untouched.
    fn try_start_dash(
        &mut self,
        body: &mut PhysicsBody,
        tuning: &MovementTuning,
        events: &mut Vec<AbilityEvent>,
    ) -> bool {
        let (kind, direction) = if body.contacts().grounded {
            (DashKind::Ground, self.facing)
        } else if let Some(wall) = self.wall_slide.side() {
            self.wall_slide = WallSlideSide::None;
            events.push(AbilityEvent::WallSlideEnded);
            (DashKind::WallReverse, Facing::from(wall.opposite()))
        } else if self.dash_charges_remaining != 0 {
            if self.dash_charges_remaining > 0 {
                self.dash_charges_remaining -= 1;
            }
            (DashKind::Midair, self.facing)
        } else {
            debug!("dash refused: no midair charges left");
            return false;
        };

        self.gravity_before_dash = body.gravity_affected;
        body.gravity_affected = false;
        body.velocity = DVec2::new(direction.sign() * tuning.dash_speed, 0.0);
        body.acceleration = DVec2::ZERO;
        self.facing = direction;
        self.dash = DashPhase::Active {
            elapsed: 0.0,
            direction,
        };
        debug!("dash {:?} toward {:?}", kind, direction);
        events.push(AbilityEvent::DashStarted(kind));
        true
    }

    fn update_locomotion(&mut self, body: &mut PhysicsBody, tuning: &MovementTuning, dt: f64) {
        if self.dash.is_active() {
            return;
        }
        if self.wall_jump_lock > 0.0 {
            self.wall_jump_lock = (self.wall_jump_lock - dt).max(0.0);
            body.acceleration.x = 0.0;
            return;
        }
        let (_, acceleration, limit) = locomotion(self.held_direction(), body.velocity.x, tuning);
        body.acceleration.x = acceleration;
        body.velocity_limit.x = limit;
    }
}
