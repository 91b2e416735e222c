//! Movement domain: player marker and ability state machine data.

use bevy::prelude::*;

use crate::collision::Side;
use crate::movement::{ActionSet, MovementTuning};

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f64 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

impl From<Side> for Facing {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => Facing::Left,
            Side::Right => Facing::Right,
        }
    }
}

/// Keeps one press of the jump button from producing more than one jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpGate {
    #[default]
    Allowed,
    /// A jump was made with this press and the button is still down.
    Holding,
    /// Landed with the button still down from an earlier press.
    NotAllowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSlideSide {
    #[default]
    None,
    Left,
    Right,
}

impl WallSlideSide {
    pub fn side(self) -> Option<Side> {
        match self {
            WallSlideSide::None => None,
            WallSlideSide::Left => Some(Side::Left),
            WallSlideSide::Right => Some(Side::Right),
        }
    }
}

impl From<Option<Side>> for WallSlideSide {
    fn from(side: Option<Side>) -> Self {
        match side {
            None => WallSlideSide::None,
            Some(Side::Left) => WallSlideSide::Left,
            Some(Side::Right) => WallSlideSide::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Allowed,
    Active { elapsed: f64, direction: Facing },
    /// Recovery window after a dash; re-dashing is refused until it ends.
    CooldownLag { elapsed: f64 },
}

impl DashPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, DashPhase::Active { .. })
    }
}

/// Player locomotion, jump, wall and dash state. Attached next to the
/// player's PhysicsBody and advanced once per frame before integration.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct AbilityState {
    pub facing: Facing,
    pub jump_gate: JumpGate,
    pub wall_slide: WallSlideSide,
    pub midair_jumps_remaining: u8,
    pub dash_charges_remaining: i8,
    pub dash: DashPhase,
    pub(crate) held: ActionSet,
    pub(crate) coyote_timer: f64,
    pub(crate) airborne_by_jump: bool,
    pub(crate) wall_jump_lock: f64,
    pub(crate) gravity_before_dash: bool,
}

impl AbilityState {
    pub fn new(tuning: &MovementTuning) -> Self {
        Self {
            facing: Facing::Right,
            jump_gate: JumpGate::Allowed,
            wall_slide: WallSlideSide::None,
            midair_jumps_remaining: tuning.max_midair_jumps,
            dash_charges_remaining: tuning.midair_dash_charges,
            dash: DashPhase::Allowed,
            held: ActionSet::default(),
            coyote_timer: 0.0,
            airborne_by_jump: false,
            wall_jump_lock: 0.0,
            gravity_before_dash: true,
        }
    }

    pub fn held(&self) -> ActionSet {
        self.held
    }

    pub fn is_dashing(&self) -> bool {
        self.dash.is_active()
    }
}

impl Default for AbilityState {
    fn default() -> Self {
        Self::new(&MovementTuning::default())
    }
}
