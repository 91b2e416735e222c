//! Movement domain: drives the ability state machine for player bodies.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    AbilityEvent, AbilityState, DashEndedEvent, DashEvent, JumpEvent, MovementInput,
    MovementTuning, Player, RespawnEvent, WallSlideEvent,
};
use crate::physics::{LastStep, PhysicsBody};

pub(crate) fn update_abilities(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    mut players: Query<(Entity, &mut AbilityState, &mut PhysicsBody, &LastStep), With<Player>>,
    mut jumps: MessageWriter<JumpEvent>,
    mut dashes: MessageWriter<DashEvent>,
    mut dash_ends: MessageWriter<DashEndedEvent>,
    mut wall_slides: MessageWriter<WallSlideEvent>,
) {
    let dt = time.delta_secs_f64();

    for (entity, mut state, mut body, last) in &mut players {
        for event in state.update(&mut body, &input.edges, &last.0, &tuning, dt) {
            match event {
                AbilityEvent::Jumped(kind) => {
                    jumps.write(JumpEvent { entity, kind });
                }
                AbilityEvent::DashStarted(kind) => {
                    dashes.write(DashEvent { entity, kind });
                }
                AbilityEvent::DashEnded => {
                    dash_ends.write(DashEndedEvent { entity });
                }
                AbilityEvent::WallSlideStarted(side) => {
                    wall_slides.write(WallSlideEvent {
                        entity,
                        side: Some(side),
                    });
                }
                AbilityEvent::WallSlideEnded => {
                    wall_slides.write(WallSlideEvent { entity, side: None });
                }
                AbilityEvent::DashReady => {
                    trace!("dash ready for {:?}", entity);
                }
            }
        }
    }
}

/// Put a player back at a spawn point with fresh ability state.
pub(crate) fn handle_respawns(
    tuning: Res<MovementTuning>,
    mut respawns: MessageReader<RespawnEvent>,
    mut players: Query<(&mut AbilityState, &mut PhysicsBody, &mut LastStep), With<Player>>,
) {
    for respawn in respawns.read() {
        let Ok((mut state, mut body, mut last)) = players.get_mut(respawn.entity) else {
            warn!("respawn requested for non-player {:?}", respawn.entity);
            continue;
        };
        state.respawn(&mut body, &tuning);
        body.respawn_at(respawn.position);
        last.0 = Default::default();
        info!("player {:?} respawned at {:?}", respawn.entity, respawn.position);
    }
}
