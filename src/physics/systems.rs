//! Physics domain: systems that run the integrator over the room's bodies.

use bevy::ecs::message::MessageWriter;
use bevy::math::DVec2;
use bevy::prelude::*;

use crate::collision::{ActiveRoom, BodyId, CollisionWorld, SolidBody};
use crate::physics::{
    BecameAirborneEvent, HitCeilingEvent, LandedEvent, LastStep, LeftCeilingEvent, PhysicsBody,
    PhysicsTuning, Solid, SolidSnapshot, WallContactEvent, step,
};

/// Rebuild the solid list bodies resolve against this frame.
pub(crate) fn gather_solids(
    mut snapshot: ResMut<SolidSnapshot>,
    solids: Query<(&Solid, Option<&PhysicsBody>)>,
) {
    snapshot.0.clear();
    for (solid, body) in &solids {
        let (position, displacement) = match body {
            Some(body) => (body.position() + solid.origin, body.last_displacement()),
            None => (solid.origin, DVec2::ZERO),
        };
        snapshot.0.push(SolidBody {
            id: solid.id,
            position,
            width: solid.width,
            height: solid.height,
            is_solid: solid.is_solid,
            is_spawned: solid.is_spawned,
            is_dynamic: solid.is_dynamic,
            displacement,
        });
    }
    snapshot.0.sort_by_key(|s| s.id);
}

/// Step every body once, in id order, and forward contact transitions.
#[allow(clippy::too_many_arguments)]
pub(crate) fn integrate_bodies(
    time: Res<Time>,
    tuning: Res<PhysicsTuning>,
    room: Option<Res<ActiveRoom>>,
    snapshot: Res<SolidSnapshot>,
    mut bodies: Query<(Entity, &mut PhysicsBody, &mut LastStep)>,
    mut landed: MessageWriter<LandedEvent>,
    mut hit_ceiling: MessageWriter<HitCeilingEvent>,
    mut left_ceiling: MessageWriter<LeftCeilingEvent>,
    mut wall_contact: MessageWriter<WallContactEvent>,
    mut airborne: MessageWriter<BecameAirborneEvent>,
) {
    let Some(room) = room else {
        return;
    };
    let dt = time.delta_secs_f64();
    if dt <= 0.0 {
        return;
    }

    let world = CollisionWorld::new(&room.field, &snapshot.0);

    let mut order: Vec<(BodyId, Entity)> = bodies
        .iter()
        .map(|(entity, body, _)| (body.id, entity))
        .collect();
    order.sort_unstable();

    for (_, entity) in order {
        let Ok((_, mut body, mut last)) = bodies.get_mut(entity) else {
            continue;
        };
        let report = step(&mut body, &world, &tuning, dt);
        last.0 = report;

        if report.landed {
            landed.write(LandedEvent {
                entity,
                impact_speed: report.impact_speed,
            });
        }
        if report.left_ground {
            airborne.write(BecameAirborneEvent { entity });
        }
        if report.hit_ceiling {
            hit_ceiling.write(HitCeilingEvent { entity });
        }
        if report.left_ceiling {
            left_ceiling.write(LeftCeilingEvent { entity });
        }
        if let Some(side) = report.collided_x {
            wall_contact.write(WallContactEvent { entity, side });
        }
    }
}

/// Mirror pixel-space positions into Bevy's y-up world for presentation.
pub(crate) fn sync_transforms(mut query: Query<(&PhysicsBody, &mut Transform), Changed<PhysicsBody>>) {
    for (body, mut transform) in &mut query {
        let position = body.position();
        transform.translation.x = position.x as f32;
        transform.translation.y = -position.y as f32;
    }
}
