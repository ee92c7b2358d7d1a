//! Movement domain: per-frame controller driving, late pass and death handling.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::controller::{ButtonLatch, CharacterController, Facing};
use crate::movement::body::{AvianBody, apply_collision_change};
use crate::movement::systems::input::run_held;
use crate::movement::{DeathCause, MovementTuning, Player, PlayerDeathRequest};
use crate::sprites::SpriteAnimator;

pub(crate) fn drive_controller(
    mut commands: Commands,
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<MovementTuning>,
    mut latch: ResMut<ButtonLatch>,
    mut query: Query<
        (
            Entity,
            &mut CharacterController,
            &mut SpriteAnimator,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
            &mut Transform,
        ),
        With<Player>,
    >,
) {
    let Ok((entity, mut controller, mut animator, mut velocity, mut gravity, mass, mut transform)) =
        query.single_mut()
    else {
        return;
    };

    let input = latch.snapshot(run_held(&keyboard));
    let mut body = AvianBody::new(&mut velocity, &mut gravity, mass);
    let report = controller.tick(
        time.elapsed_secs_f64(),
        &input,
        &mut body,
        &mut *animator,
        &tuning,
    );
    apply_collision_change(&mut commands, entity, body.collision_change());

    if latch.settle(&report) {
        trace!("Holding latched pulses until the controller accepts input");
    }
    if report.flipped {
        face_sprite(&mut transform, controller.facing);
    }
    if report.attack_expired {
        debug!("Attack guard cleared");
    }
}

/// Mirror the sprite horizontally to match the facing.
pub(crate) fn face_sprite(transform: &mut Transform, facing: Facing) {
    let width = transform.scale.x.abs();
    transform.scale.x = match facing {
        Facing::Right => width,
        Facing::Left => -width,
    };
}

/// Runs after the update pass every frame, dead or not.
pub(crate) fn publish_grounded(
    mut query: Query<(&CharacterController, &mut SpriteAnimator), With<Player>>,
) {
    for (controller, mut animator) in &mut query {
        controller.late_tick(&mut *animator);
    }
}

pub(crate) fn apply_kill_plane(
    tuning: Res<MovementTuning>,
    query: Query<(&Transform, &CharacterController), With<Player>>,
    mut deaths: MessageWriter<PlayerDeathRequest>,
) {
    let Some(kill_plane_y) = tuning.kill_plane_y else {
        return;
    };

    for (transform, controller) in &query {
        if !controller.is_dead && transform.translation.y < kill_plane_y {
            deaths.write(PlayerDeathRequest {
                reason: DeathCause::KillPlane,
            });
        }
    }
}

pub(crate) fn handle_death_requests(
    mut commands: Commands,
    mut requests: MessageReader<PlayerDeathRequest>,
    mut query: Query<
        (
            Entity,
            &mut CharacterController,
            &mut SpriteAnimator,
            &mut LinearVelocity,
            &mut GravityScale,
            &ComputedMass,
        ),
        With<Player>,
    >,
) {
    let Some(request) = requests.read().last() else {
        return;
    };
    let Ok((entity, mut controller, mut animator, mut velocity, mut gravity, mass)) =
        query.single_mut()
    else {
        return;
    };
    if controller.is_dead {
        return;
    }

    info!("Death requested: {:?}", request.reason);
    let mut body = AvianBody::new(&mut velocity, &mut gravity, mass);
    controller.die(&mut body, &mut *animator);
    apply_collision_change(&mut commands, entity, body.collision_change());
}
