//! Movement domain: tuning resources and player messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Speeds are in pixels per second, forces in pixel-scaled impulse units.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    /// Vertical speed below which the body counts as resting.
    pub vertical_rest_epsilon: f32,
    /// Falling below this height kills the player.
    pub kill_plane_y: Option<f32>,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 240.0,
            run_speed: 384.0,
            jump_force: 480.0,
            double_jump_force: 384.0,
            vertical_rest_epsilon: 5.0,
            kill_plane_y: Some(-600.0),
        }
    }
}

impl MovementTuning {
    /// Apex height of a ground jump for a unit-mass body under `gravity`.
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        self.jump_force * self.jump_force / (2.0 * gravity)
    }

    /// Apex height with the double jump taken at the top of the first.
    pub fn max_reachable_height(&self, gravity: f32) -> f32 {
        self.single_jump_height(gravity)
            + self.double_jump_force * self.double_jump_force / (2.0 * gravity)
    }
}

/// Body setup for the spawned player.
#[derive(Resource, Debug, Clone)]
pub struct PlayerBodySettings {
    pub size: Vec2,
    pub mass: f32,
    pub spawn: Vec2,
}

impl Default for PlayerBodySettings {
    fn default() -> Self {
        Self {
            size: Vec2::new(24.0, 48.0),
            mass: 1.0,
            spawn: Vec2::new(-300.0, -140.0),
        }
    }
}

/// Ask the controller to enter its terminal dead state.
#[derive(Debug)]
pub struct PlayerDeathRequest {
    pub reason: DeathCause,
}

impl Message for PlayerDeathRequest {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    KillPlane,
    #[cfg_attr(not(feature = "dev-tools"), allow(dead_code))]
    Debug,
}
