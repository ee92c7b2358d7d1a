//! Movement domain: player spawn from loaded body settings.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::CharacterController;
use crate::movement::{GameLayer, MovementTuning, Player, PlayerBodySettings};
use crate::sprites::{ClipManifest, SpriteAnimator};

pub(crate) fn spawn_player(
    mut commands: Commands,
    settings: Res<PlayerBodySettings>,
    tuning: Res<MovementTuning>,
    gravity: Res<Gravity>,
    manifest: Res<ClipManifest>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let animator = SpriteAnimator::new(manifest.clips());
    info!(
        "Spawning player: size={:?}, mass={}, clips={}",
        settings.size,
        settings.mass,
        manifest.len()
    );
    let g = gravity.0.length();
    if g > 0.0 {
        info!(
            "Jump apex: single={:.0}px, with double jump={:.0}px",
            tuning.single_jump_height(g),
            tuning.max_reachable_height(g)
        );
    }

    commands.spawn((
        // Identity & control
        (Player, CharacterController::default(), animator),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(settings.size),
            ..default()
        },
        Transform::from_translation(settings.spawn.extend(1.0)),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(settings.size.x, settings.size.y),
            LockedAxes::ROTATION_LOCKED,
            Mass(settings.mass),
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}
