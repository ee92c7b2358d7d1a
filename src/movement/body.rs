//! Movement domain: avian rigid body seen through the controller's `PhysicsBody`.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::controller::PhysicsBody;

/// Borrowed view over the player's avian components for one controller call.
pub(crate) struct AvianBody<'a> {
    velocity: &'a mut LinearVelocity,
    gravity_scale: &'a mut GravityScale,
    inverse_mass: f32,
    collision_enabled: Option<bool>,
}

impl<'a> AvianBody<'a> {
    pub(crate) fn new(
        velocity: &'a mut LinearVelocity,
        gravity_scale: &'a mut GravityScale,
        mass: &ComputedMass,
    ) -> Self {
        Self {
            velocity,
            gravity_scale,
            inverse_mass: mass.inverse(),
            collision_enabled: None,
        }
    }

    /// Collider toggle requested during this call, applied by the caller through commands.
    pub(crate) fn collision_change(&self) -> Option<bool> {
        self.collision_enabled
    }
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn set_collision_enabled(&mut self, enabled: bool) {
        self.collision_enabled = Some(enabled);
    }
}

/// Apply a collider toggle recorded by [`AvianBody`].
pub(crate) fn apply_collision_change(commands: &mut Commands, entity: Entity, change: Option<bool>) {
    match change {
        Some(false) => {
            commands.entity(entity).insert(ColliderDisabled);
        }
        Some(true) => {
            commands.entity(entity).remove::<ColliderDisabled>();
        }
        None => {}
    }
}
