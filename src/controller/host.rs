//! Controller domain: capabilities the host engine provides to the controller.

use bevy::math::Vec2;

/// Animator parameter and clip names shared by the controller and the sprite animator.
pub mod params {
    pub const GROUNDED: &str = "grounded";
    pub const IS_RUNNING: &str = "IsRunning";
    pub const IS_JUMPING: &str = "IsJumping";
    pub const IS_DOUBLE_JUMPING: &str = "IsDoubleJumping";
    pub const IS_DEAD: &str = "IsDead";

    pub const TRIGGER_ATTACK_SWORD: &str = "AttackSword";
    pub const TRIGGER_ATTACK: &str = "Attack";

    pub const CLIP_JUMP_DOWN: &str = "Jump down";
}

/// Rigid body owned by the host physics engine.
pub trait PhysicsBody {
    fn velocity(&self) -> Vec2;

    fn set_velocity(&mut self, velocity: Vec2);

    /// Apply an instantaneous impulse (mass-scaled velocity change).
    fn apply_impulse(&mut self, impulse: Vec2);

    fn set_gravity_scale(&mut self, scale: f32);

    fn set_collision_enabled(&mut self, enabled: bool);
}

/// Animation state machine owned by the host engine.
pub trait Animator {
    fn set_bool(&mut self, name: &str, value: bool);

    fn get_bool(&self, name: &str) -> bool;

    fn set_trigger(&mut self, name: &str);

    fn reset_trigger(&mut self, name: &str);

    /// Length in seconds of the clip playing right now.
    fn current_clip_length(&self) -> f32;

    /// Force playback of a named clip, bypassing parameter-driven selection.
    fn play(&mut self, clip: &str);
}
