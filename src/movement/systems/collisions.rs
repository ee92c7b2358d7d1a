//! Movement domain: ground and wall contact reactions from collision events.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::controller::CharacterController;
use crate::movement::{Player, surface_of};
use crate::sprites::SpriteAnimator;

/// Feeds `CollisionStart`/`CollisionEnd` between the player and layered
/// surfaces into the controller. Unlayered colliders are ignored.
pub(crate) fn handle_surface_contacts(
    mut collision_start: MessageReader<CollisionStart>,
    mut collision_end: MessageReader<CollisionEnd>,
    layers: Query<&CollisionLayers, Without<Player>>,
    mut player_query: Query<(Entity, &mut CharacterController, &mut SpriteAnimator), With<Player>>,
) {
    let Ok((player_entity, mut controller, mut animator)) = player_query.single_mut() else {
        // Consume events if no player
        for _ in collision_start.read() {}
        for _ in collision_end.read() {}
        return;
    };

    for event in collision_start.read() {
        let Some(other) = other_collider(player_entity, event.collider1, event.collider2) else {
            continue;
        };
        let Some(surface) = layers.get(other).ok().and_then(surface_of) else {
            continue;
        };

        debug!("Contact enter: {:?} ({:?})", surface, other);
        controller.on_contact_enter(surface, &mut *animator);
    }

    for event in collision_end.read() {
        let Some(other) = other_collider(player_entity, event.collider1, event.collider2) else {
            continue;
        };
        let Some(surface) = layers.get(other).ok().and_then(surface_of) else {
            continue;
        };

        debug!("Contact exit: {:?} ({:?})", surface, other);
        controller.on_contact_exit(surface);
    }
}

/// The collider paired with the player, if the player is part of the pair.
pub(crate) fn other_collider(player: Entity, collider1: Entity, collider2: Entity) -> Option<Entity> {
    if collider1 == player {
        Some(collider2)
    } else if collider2 == player {
        Some(collider1)
    } else {
        None
    }
}
