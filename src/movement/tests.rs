//! Movement domain: tests for input edges, locomotion and the ability machine.

use bevy::math::DVec2;
use bevy::prelude::*;
use std::time::Duration;

use super::{
    AbilityEvent, AbilityState, Action, ActionEdges, ActionSet, DashKind, DashPhase, EdgeDetector,
    Facing, JumpGate, JumpKind, Locomotion, MovementInput, MovementTuning, WallSlideSide,
    locomotion,
};
use crate::PlatformerMotionPlugin;
use crate::collision::{BodyId, CollisionField, CollisionWorld, Side};
use crate::physics::{Contacts, PhysicsBody, PhysicsTuning, StepReport, step};

const DT: f64 = 1.0 / 60.0;

fn player_at(x: f64, y: f64) -> PhysicsBody {
    PhysicsBody::boxed(BodyId(1), DVec2::new(x, y), 8, 16, 4)
}

fn grounded() -> Contacts {
    Contacts {
        grounded: true,
        fully_grounded: true,
        ..Contacts::default()
    }
}

fn against_wall(side: Side) -> Contacts {
    Contacts {
        wall_left: side == Side::Left,
        wall_right: side == Side::Right,
        ..Contacts::default()
    }
}

/// Ability update followed by an integration step, the way one frame runs.
fn frame(
    state: &mut AbilityState,
    body: &mut PhysicsBody,
    last: &mut StepReport,
    world: &CollisionWorld,
    edges: ActionEdges,
) -> Vec<AbilityEvent> {
    let events = state.update(body, &edges, last, &MovementTuning::default(), DT);
    *last = step(body, world, &PhysicsTuning::default(), DT);
    events
}

/// Ability update alone, for cases where contacts are set by hand.
fn update(state: &mut AbilityState, body: &mut PhysicsBody, edges: ActionEdges) -> Vec<AbilityEvent> {
    state.update(
        body,
        &edges,
        &StepReport::default(),
        &MovementTuning::default(),
        DT,
    )
}

/// 64x48 room with a floor from row 40 down and 4 px walls on both sides.
fn walled_room() -> CollisionField {
    let mut field = CollisionField::empty(64, 48).unwrap();
    field.fill_rect(0, 0, 3, 47);
    field.fill_rect(60, 0, 63, 47);
    field.fill_rect(0, 40, 63, 47);
    field
}

// -----------------------------------------------------------------------------
// Input tests
// -----------------------------------------------------------------------------

#[test]
fn test_edge_detector_reports_transitions_once() {
    let mut detector = EdgeDetector::default();

    let edges = detector.feed(ActionSet::of(&[Action::Left]));
    assert!(edges.pressed(Action::Left));
    assert!(!edges.released(Action::Left));

    let edges = detector.feed(ActionSet::of(&[Action::Left]));
    assert_eq!(edges, ActionEdges::none());

    let edges = detector.feed(ActionSet::default());
    assert!(edges.released(Action::Left));
    assert!(!edges.pressed(Action::Left));
}

#[test]
fn test_action_set_apply_edges() {
    let mut held = ActionSet::default();
    held.apply(&ActionEdges::press(&[Action::Jump, Action::Dash]));
    assert!(held.contains(Action::Jump));
    assert!(held.contains(Action::Dash));

    held.apply(&ActionEdges::release(&[Action::Jump]));
    assert!(!held.contains(Action::Jump));
    assert!(held.contains(Action::Dash));

    held.remove(Action::Dash);
    assert!(held.is_empty());
}

#[test]
fn test_held_direction_prefers_facing_when_both_held() {
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);

    update(&mut state, &mut body, ActionEdges::press(&[Action::Left]));
    assert_eq!(state.held_direction(), -1.0);

    // Right pressed last: facing flips and wins the tie.
    update(&mut state, &mut body, ActionEdges::press(&[Action::Right]));
    assert_eq!(state.facing, Facing::Right);
    assert_eq!(state.held_direction(), 1.0);
    assert_eq!(state.held(), ActionSet::of(&[Action::Left, Action::Right]));
}

// -----------------------------------------------------------------------------
// Locomotion tests
// -----------------------------------------------------------------------------

#[test]
fn test_locomotion_table() {
    let tuning = MovementTuning::default();

    assert_eq!(locomotion(0.0, 0.0, &tuning), (Locomotion::Stopping, 0.0, 0.0));
    assert_eq!(
        locomotion(0.0, 100.0, &tuning),
        (Locomotion::Stopping, -3600.0, 0.0)
    );
    assert_eq!(
        locomotion(1.0, -100.0, &tuning),
        (Locomotion::Braking, 4800.0, 480.0)
    );
    assert_eq!(
        locomotion(1.0, 0.0, &tuning),
        (Locomotion::Accelerating, 2700.0, 480.0)
    );
    assert_eq!(
        locomotion(1.0, 100.0, &tuning),
        (Locomotion::Accelerating, 2700.0, 480.0)
    );
    assert_eq!(
        locomotion(1.0, 600.0, &tuning),
        (Locomotion::OverSpeedDecay, -1200.0, 480.0)
    );
    assert_eq!(
        locomotion(-1.0, -600.0, &tuning),
        (Locomotion::OverSpeedDecay, 1200.0, -480.0)
    );
}

#[test]
fn test_locomotion_writes_body_targets() {
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);

    update(&mut state, &mut body, ActionEdges::press(&[Action::Left]));
    assert_eq!(body.acceleration.x, -2700.0);
    assert_eq!(body.velocity_limit.x, -480.0);

    update(&mut state, &mut body, ActionEdges::release(&[Action::Left]));
    assert_eq!(body.acceleration.x, 0.0);
}

#[test]
fn test_running_from_rest_matches_analytic_distance() {
    let mut field = CollisionField::empty(512, 48).unwrap();
    field.fill_rect(0, 40, 511, 47);
    let world = CollisionWorld::new(&field, &[]);
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 24.0);
    let mut last = StepReport::default();
    frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
    let start = body.position().x;

    frame(&mut state, &mut body, &mut last, &world, ActionEdges::press(&[Action::Right]));
    for _ in 1..30 {
        frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
        assert!(body.velocity.x <= 480.0);
    }

    let t_ramp = 480.0 / 2700.0;
    let expected = 0.5 * 480.0 * t_ramp + 480.0 * (0.5 - t_ramp);
    let travelled = body.position().x - start;
    assert!(
        (travelled - expected).abs() / expected < 0.01,
        "travelled {travelled}, expected {expected}"
    );
    assert!(body.contacts().grounded);
}

// -----------------------------------------------------------------------------
// Jump tests
// -----------------------------------------------------------------------------

#[test]
fn test_landing_restores_midair_jumps() {
    let field = walled_room();
    let world = CollisionWorld::new(&field, &[]);
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 24.0);
    let mut last = StepReport::default();

    frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
    assert!(body.contacts().grounded);

    let events = frame(&mut state, &mut body, &mut last, &world, ActionEdges::press(&[Action::Jump]));
    assert!(events.contains(&AbilityEvent::Jumped(JumpKind::Ground)));
    assert!(last.left_ground);

    frame(&mut state, &mut body, &mut last, &world, ActionEdges::release(&[Action::Jump]));
    let events = frame(&mut state, &mut body, &mut last, &world, ActionEdges::press(&[Action::Jump]));
    assert!(events.contains(&AbilityEvent::Jumped(JumpKind::Midair)));
    assert_eq!(state.midair_jumps_remaining, 0);

    frame(&mut state, &mut body, &mut last, &world, ActionEdges::release(&[Action::Jump]));
    let events = frame(&mut state, &mut body, &mut last, &world, ActionEdges::press(&[Action::Jump]));
    assert!(!events.iter().any(|e| matches!(e, AbilityEvent::Jumped(_))));
    frame(&mut state, &mut body, &mut last, &world, ActionEdges::release(&[Action::Jump]));

    let mut landings = 0;
    for _ in 0..300 {
        frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
        if last.landed {
            landings += 1;
        }
        if body.contacts().grounded && !last.landed {
            break;
        }
    }
    assert_eq!(landings, 1);
    assert_eq!(state.midair_jumps_remaining, 1);
    assert_eq!(state.jump_gate, JumpGate::Allowed);
}

#[test]
fn test_jump_gate_blocks_held_button_after_landing() {
    let field = walled_room();
    let world = CollisionWorld::new(&field, &[]);
    let mut state = AbilityState::default();
    state.midair_jumps_remaining = 0;
    let mut body = player_at(20.0, 10.0);
    let mut last = StepReport::default();

    // Pressed in midair with nothing left: refused, but still held.
    let events = frame(&mut state, &mut body, &mut last, &world, ActionEdges::press(&[Action::Jump]));
    assert!(events.is_empty());

    for _ in 0..120 {
        if last.landed {
            break;
        }
        frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
    }
    assert!(last.landed);

    frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
    assert_eq!(state.jump_gate, JumpGate::NotAllowed);

    frame(&mut state, &mut body, &mut last, &world, ActionEdges::release(&[Action::Jump]));
    assert_eq!(state.jump_gate, JumpGate::Allowed);

    let events = frame(&mut state, &mut body, &mut last, &world, ActionEdges::press(&[Action::Jump]));
    assert!(events.contains(&AbilityEvent::Jumped(JumpKind::Ground)));
    assert_eq!(state.jump_gate, JumpGate::Holding);
}

#[test]
fn test_releasing_jump_decays_rise() {
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    body.set_contacts(grounded(), None);

    update(&mut state, &mut body, ActionEdges::press(&[Action::Jump]));
    assert_eq!(body.velocity.y, -660.0);
    assert_eq!(body.acceleration.y, 0.0);

    body.set_contacts(Contacts::default(), None);
    update(&mut state, &mut body, ActionEdges::release(&[Action::Jump]));
    assert_eq!(body.acceleration.y, 3000.0);
    assert_eq!(body.velocity_limit.y, 0.0);
}

#[test]
fn test_held_ground_jump_reaches_full_height() {
    let mut field = CollisionField::empty(64, 200).unwrap();
    field.fill_rect(0, 190, 63, 199);
    let world = CollisionWorld::new(&field, &[]);
    let tuning = MovementTuning::default();
    let physics = PhysicsTuning::default();
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 174.0);
    let mut last = StepReport::default();
    frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
    assert!(body.contacts().grounded);
    let floor_y = body.position().y;

    frame(&mut state, &mut body, &mut last, &world, ActionEdges::press(&[Action::Jump]));
    let mut apex = floor_y;
    while body.velocity.y < 0.0 {
        frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
        apex = apex.min(body.position().y);
    }

    let rise = floor_y - apex;
    let expected = tuning.full_jump_height(physics.gravity);
    assert!(
        (rise - expected).abs() < tuning.jump_speed * DT,
        "rose {rise}, expected about {expected}"
    );
}

#[test]
fn test_coyote_time_allows_late_ground_jump() {
    let tuning = MovementTuning::default();
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    let walked_off = StepReport {
        left_ground: true,
        ..StepReport::default()
    };

    state.update(&mut body, &ActionEdges::none(), &walked_off, &tuning, DT);
    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Jump]));

    assert!(events.contains(&AbilityEvent::Jumped(JumpKind::Ground)));
    assert_eq!(state.midair_jumps_remaining, 1);
}

#[test]
fn test_coyote_time_expires() {
    let tuning = MovementTuning::default();
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    let walked_off = StepReport {
        left_ground: true,
        ..StepReport::default()
    };

    state.update(&mut body, &ActionEdges::none(), &walked_off, &tuning, DT);
    for _ in 0..10 {
        update(&mut state, &mut body, ActionEdges::none());
    }
    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Jump]));

    assert!(events.contains(&AbilityEvent::Jumped(JumpKind::Midair)));
}

#[test]
fn test_no_coyote_time_after_jumping() {
    let tuning = MovementTuning::default();
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    body.set_contacts(grounded(), None);
    update(&mut state, &mut body, ActionEdges::press(&[Action::Jump]));

    body.set_contacts(Contacts::default(), None);
    let jumped_off = StepReport {
        left_ground: true,
        ..StepReport::default()
    };
    state.update(
        &mut body,
        &ActionEdges::release(&[Action::Jump]),
        &jumped_off,
        &tuning,
        DT,
    );
    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Jump]));

    assert!(events.contains(&AbilityEvent::Jumped(JumpKind::Midair)));
}

// -----------------------------------------------------------------------------
// Wall tests
// -----------------------------------------------------------------------------

#[test]
fn test_wall_slide_caps_fall_speed() {
    let mut state = AbilityState::default();
    let mut body = player_at(4.0, 10.0);
    body.set_contacts(against_wall(Side::Left), None);
    body.velocity.y = 400.0;

    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Left]));
    assert!(events.contains(&AbilityEvent::WallSlideStarted(Side::Left)));
    assert_eq!(state.wall_slide, WallSlideSide::Left);
    assert_eq!(body.velocity.y, 150.0);

    let events = update(&mut state, &mut body, ActionEdges::release(&[Action::Left]));
    assert!(events.contains(&AbilityEvent::WallSlideEnded));
    assert_eq!(state.wall_slide, WallSlideSide::None);
}

#[test]
fn test_wall_slide_descends_at_slide_speed() {
    let mut field = CollisionField::empty(64, 400).unwrap();
    field.fill_rect(0, 0, 3, 399);
    let world = CollisionWorld::new(&field, &[]);
    let tuning = MovementTuning::default();
    let mut state = AbilityState::default();
    let mut body = player_at(4.0, 0.0);
    body.velocity.y = 400.0;
    let mut last = StepReport::default();

    frame(&mut state, &mut body, &mut last, &world, ActionEdges::press(&[Action::Left]));
    assert!(body.contacts().wall_left);

    for _ in 0..20 {
        frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
        assert_eq!(state.wall_slide, WallSlideSide::Left);
        assert_eq!(body.velocity.y, tuning.wall_slide_speed);
        assert!((last.displacement.y - tuning.wall_slide_speed * DT).abs() < 1e-9);
    }

    // Letting go of the wall hands the fall back to terminal velocity.
    frame(&mut state, &mut body, &mut last, &world, ActionEdges::release(&[Action::Left]));
    assert_eq!(body.fall_speed_cap, None);
    assert!(body.velocity.y > tuning.wall_slide_speed);
}

#[test]
fn test_no_wall_slide_while_rising() {
    let mut state = AbilityState::default();
    let mut body = player_at(4.0, 10.0);
    body.set_contacts(against_wall(Side::Left), None);
    body.velocity.y = -200.0;

    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Left]));
    assert!(events.is_empty());
    assert_eq!(state.wall_slide, WallSlideSide::None);
}

#[test]
fn test_wall_jump_from_left_wall() {
    let field = walled_room();
    let world = CollisionWorld::new(&field, &[]);
    let mut state = AbilityState::default();
    let mut body = player_at(4.0, 10.0);
    let mut last = StepReport::default();

    frame(&mut state, &mut body, &mut last, &world, ActionEdges::press(&[Action::Left]));
    assert!(body.contacts().wall_left);

    let events = frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());
    assert!(events.contains(&AbilityEvent::WallSlideStarted(Side::Left)));

    let events = state.update(
        &mut body,
        &ActionEdges::press(&[Action::Jump]),
        &last,
        &MovementTuning::default(),
        DT,
    );

    assert!(events.contains(&AbilityEvent::Jumped(JumpKind::Wall(Side::Left))));
    assert_eq!(state.facing, Facing::Right);
    assert!(body.velocity.x > 0.0);
    assert!(body.velocity.y < 0.0);
    assert!((body.velocity.x + body.velocity.y).abs() < 1e-9);
    assert_eq!(state.wall_slide, WallSlideSide::None);
}

#[test]
fn test_wall_jump_locks_locomotion() {
    let mut state = AbilityState::default();
    let mut body = player_at(4.0, 10.0);
    body.set_contacts(against_wall(Side::Left), None);
    body.velocity.y = 100.0;
    update(&mut state, &mut body, ActionEdges::press(&[Action::Left]));
    update(&mut state, &mut body, ActionEdges::press(&[Action::Jump]));
    let launch = body.velocity.x;

    // Still holding toward the wall: no steering for the lock window.
    update(&mut state, &mut body, ActionEdges::none());
    assert_eq!(body.acceleration.x, 0.0);
    assert_eq!(body.velocity.x, launch);

    for _ in 0..10 {
        update(&mut state, &mut body, ActionEdges::none());
    }
    assert_eq!(body.acceleration.x, -4800.0);
}

// -----------------------------------------------------------------------------
// Dash tests
// -----------------------------------------------------------------------------

#[test]
fn test_midair_dash_rejected_without_charges() {
    let mut state = AbilityState::default();
    state.dash_charges_remaining = 0;
    let mut body = player_at(20.0, 10.0);
    body.velocity = DVec2::new(120.0, 300.0);

    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Dash]));

    assert!(events.is_empty());
    assert_eq!(state.dash, DashPhase::Allowed);
    assert_eq!(state.dash_charges_remaining, 0);
    assert_eq!(body.velocity, DVec2::new(120.0, 300.0));
    assert!(body.gravity_affected);
}

#[test]
fn test_midair_dash_spends_a_charge() {
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    body.velocity = DVec2::new(0.0, 300.0);

    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Dash]));

    assert!(events.contains(&AbilityEvent::DashStarted(DashKind::Midair)));
    assert_eq!(state.dash_charges_remaining, 0);
    assert!(state.is_dashing());
    assert_eq!(body.velocity, DVec2::new(960.0, 0.0));
    assert!(!body.gravity_affected);
}

#[test]
fn test_ground_dash_is_free() {
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    body.set_contacts(grounded(), None);
    update(&mut state, &mut body, ActionEdges::press(&[Action::Left]));

    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Dash]));

    assert!(events.contains(&AbilityEvent::DashStarted(DashKind::Ground)));
    assert_eq!(state.dash_charges_remaining, 1);
    assert_eq!(body.velocity.x, -960.0);
}

#[test]
fn test_wall_dash_heads_away_from_wall() {
    let mut state = AbilityState::default();
    let mut body = player_at(4.0, 10.0);
    body.set_contacts(against_wall(Side::Left), None);
    body.velocity.y = 100.0;
    update(&mut state, &mut body, ActionEdges::press(&[Action::Left]));

    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Dash]));

    assert!(events.contains(&AbilityEvent::DashStarted(DashKind::WallReverse)));
    assert_eq!(state.facing, Facing::Right);
    assert_eq!(body.velocity.x, 960.0);
    assert_eq!(state.wall_slide, WallSlideSide::None);
}

#[test]
fn test_dash_runs_its_duration_then_lags() {
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    update(&mut state, &mut body, ActionEdges::press(&[Action::Dash]));

    let mut ended = 0;
    for _ in 0..20 {
        let events = update(&mut state, &mut body, ActionEdges::none());
        ended += events.iter().filter(|e| **e == AbilityEvent::DashEnded).count();
    }
    assert_eq!(ended, 1);
    assert!(body.gravity_affected);
    assert!(matches!(state.dash, DashPhase::CooldownLag { .. }));

    // Holding the button keeps the dash from re-arming.
    for _ in 0..20 {
        update(&mut state, &mut body, ActionEdges::none());
    }
    assert!(matches!(state.dash, DashPhase::CooldownLag { .. }));

    let events = update(&mut state, &mut body, ActionEdges::release(&[Action::Dash]));
    assert!(events.contains(&AbilityEvent::DashReady));
    assert_eq!(state.dash, DashPhase::Allowed);
}

#[test]
fn test_ground_dash_covers_dash_distance() {
    let mut field = CollisionField::empty(512, 48).unwrap();
    field.fill_rect(0, 40, 511, 47);
    let world = CollisionWorld::new(&field, &[]);
    let tuning = MovementTuning::default();
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 24.0);
    let mut last = StepReport::default();
    frame(&mut state, &mut body, &mut last, &world, ActionEdges::none());

    let mut travelled: f64 = 0.0;
    let mut edges = ActionEdges::press(&[Action::Dash]);
    loop {
        frame(&mut state, &mut body, &mut last, &world, edges);
        edges = ActionEdges::none();
        if !state.is_dashing() {
            break;
        }
        travelled += last.displacement.x;
    }

    assert!(
        (travelled - tuning.dash_distance()).abs() <= tuning.dash_speed * DT,
        "dashed {travelled}, expected about {}",
        tuning.dash_distance()
    );
    assert!(body.contacts().grounded);
}

#[test]
fn test_releasing_dash_ends_it_early() {
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    update(&mut state, &mut body, ActionEdges::press(&[Action::Dash]));
    update(&mut state, &mut body, ActionEdges::none());
    assert!(state.is_dashing());

    let events = update(&mut state, &mut body, ActionEdges::release(&[Action::Dash]));
    assert!(events.contains(&AbilityEvent::DashEnded));
    assert!(!state.is_dashing());
}

#[test]
fn test_facing_frozen_during_dash() {
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    update(&mut state, &mut body, ActionEdges::press(&[Action::Dash]));

    update(&mut state, &mut body, ActionEdges::press(&[Action::Left]));
    assert_eq!(state.facing, Facing::Right);
    assert_eq!(body.velocity.x, 960.0);
}

#[test]
fn test_no_jump_during_dash() {
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    update(&mut state, &mut body, ActionEdges::press(&[Action::Dash]));

    let events = update(&mut state, &mut body, ActionEdges::press(&[Action::Jump]));
    assert!(!events.iter().any(|e| matches!(e, AbilityEvent::Jumped(_))));
    assert_eq!(state.midair_jumps_remaining, 1);
}

#[test]
fn test_leaving_ground_restores_dash_charges() {
    let tuning = MovementTuning::default();
    let mut state = AbilityState::default();
    state.dash_charges_remaining = 0;
    let mut body = player_at(20.0, 10.0);
    let walked_off = StepReport {
        left_ground: true,
        ..StepReport::default()
    };

    state.update(&mut body, &ActionEdges::none(), &walked_off, &tuning, DT);
    assert_eq!(state.dash_charges_remaining, tuning.midair_dash_charges);
}

#[test]
fn test_respawn_mid_dash_restores_gravity() {
    let tuning = MovementTuning::default();
    let mut state = AbilityState::default();
    let mut body = player_at(20.0, 10.0);
    update(&mut state, &mut body, ActionEdges::press(&[Action::Dash]));
    assert!(!body.gravity_affected);

    state.respawn(&mut body, &tuning);
    assert!(body.gravity_affected);
    assert_eq!(state, AbilityState::new(&tuning));
}

// -----------------------------------------------------------------------------
// Plugin wiring tests
// -----------------------------------------------------------------------------

fn tick(app: &mut App) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f64(DT));
    app.update();
}

#[test]
fn test_keyboard_feeds_action_edges() {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<ButtonInput<KeyCode>>()
        .add_plugins(PlatformerMotionPlugin);

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    tick(&mut app);
    assert!(app.world().resource::<MovementInput>().edges.pressed(Action::Jump));

    tick(&mut app);
    assert_eq!(
        app.world().resource::<MovementInput>().edges,
        ActionEdges::none()
    );

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::Space);
    tick(&mut app);
    assert!(app.world().resource::<MovementInput>().edges.released(Action::Jump));
}

#[test]
fn test_queued_edges_last_one_frame() {
    let mut app = App::new();
    app.init_resource::<Time>()
        .add_plugins(PlatformerMotionPlugin);

    app.world_mut()
        .resource_mut::<MovementInput>()
        .queue(ActionEdges::press(&[Action::Jump]));
    tick(&mut app);
    assert!(app.world().resource::<MovementInput>().edges.pressed(Action::Jump));

    tick(&mut app);
    assert_eq!(
        app.world().resource::<MovementInput>().edges,
        ActionEdges::none()
    );
}
