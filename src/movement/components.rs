//! Movement domain: components and physics layers for the player body.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::Surface;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Classify a collider by layer membership. Ground wins over wall; anything else is ignored.
pub fn surface_of(layers: &CollisionLayers) -> Option<Surface> {
    if layers.memberships.has_all(GameLayer::Ground) {
        Some(Surface::Ground)
    } else if layers.memberships.has_all(GameLayer::Wall) {
        Some(Surface::Wall)
    } else {
        None
    }
}
