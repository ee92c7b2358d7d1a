//! Parameter-driven sprite animator and playback.
//!
//! `SpriteAnimator` is the host-side animation state machine the controller
//! talks to through the `Animator` trait: bool parameters pick a locomotion
//! clip, triggers start one-shot clips, and `play` forces a clip until the
//! parameters move on. A running one-shot is never interrupted by `play`.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::controller::{Animator, params};
use crate::sprites::ClipDef;

/// Clip names the animator selects on its own.
pub mod clips {
    pub const IDLE: &str = "Idle";
    pub const RUN: &str = "Run";
    pub const JUMP: &str = "Jump";
    pub const DOUBLE_JUMP: &str = "Double jump";
    pub const JUMP_DOWN: &str = crate::controller::params::CLIP_JUMP_DOWN;
    pub const SWORD_ATTACK: &str = "Sword attack";
    pub const ATTACK: &str = "Attack";
    pub const DEATH: &str = "Death";

    /// Clips picked by parameters or triggers.
    pub const REQUIRED: [&str; 8] = [
        IDLE,
        RUN,
        JUMP,
        DOUBLE_JUMP,
        JUMP_DOWN,
        SWORD_ATTACK,
        ATTACK,
        DEATH,
    ];
}

/// Animation state machine attached to the player sprite.
#[derive(Component, Debug, Clone)]
pub struct SpriteAnimator {
    clips: HashMap<String, ClipDef>,
    bools: HashMap<String, bool>,
    current: String,
    elapsed: f32,
    /// Current clip was forced by `play` and holds until parameters change it.
    forced: bool,
    /// Current clip was started by a trigger and holds until it finishes.
    one_shot: bool,
}

impl SpriteAnimator {
    pub fn new(defs: &[ClipDef]) -> Self {
        Self {
            clips: defs
                .iter()
                .map(|clip| (clip.name.clone(), clip.clone()))
                .collect(),
            bools: HashMap::new(),
            current: clips::IDLE.to_string(),
            elapsed: 0.0,
            forced: false,
            one_shot: false,
        }
    }

    pub fn current_clip(&self) -> &str {
        &self.current
    }

    pub fn current_def(&self) -> Option<&ClipDef> {
        self.clips.get(&self.current)
    }

    /// Zero-based frame index of the current clip.
    pub fn current_frame(&self) -> u32 {
        let Some(clip) = self.current_def() else {
            return 0;
        };
        if clip.frames == 0 || clip.frame_duration <= 0.0 {
            return 0;
        }

        let frame = (self.elapsed / clip.frame_duration) as u32;
        if clip.looping {
            frame % clip.frames
        } else {
            frame.min(clip.frames - 1)
        }
    }

    /// Non-looping clip has played to the end.
    pub fn is_finished(&self) -> bool {
        self.current_def()
            .is_some_and(|clip| !clip.looping && self.elapsed >= clip.length())
    }

    /// A trigger-started clip is still playing.
    pub fn in_one_shot(&self) -> bool {
        self.one_shot && !self.is_finished()
    }

    /// Advance playback and re-evaluate the parameter-driven clip.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        self.select();
    }

    fn select(&mut self) {
        if self.get_bool(params::IS_DEAD) {
            self.forced = false;
            self.one_shot = false;
            self.switch(clips::DEATH);
            return;
        }

        if self.one_shot {
            if !self.is_finished() {
                return;
            }
            self.one_shot = false;
        }

        let target = if self.get_bool(params::GROUNDED) {
            self.forced = false;
            if self.get_bool(params::IS_RUNNING) {
                clips::RUN
            } else {
                clips::IDLE
            }
        } else if self.get_bool(params::IS_DOUBLE_JUMPING) {
            self.forced = false;
            clips::DOUBLE_JUMP
        } else if self.forced {
            return;
        } else if self.get_bool(params::IS_JUMPING) {
            clips::JUMP
        } else {
            clips::JUMP_DOWN
        };

        self.switch(target);
    }

    /// Start `name` from its first frame unless it is already playing.
    fn switch(&mut self, name: &str) -> bool {
        if self.current == name {
            return true;
        }
        if !self.clips.contains_key(name) {
            return false;
        }

        debug!("Clip {:?} -> {:?}", self.current, name);
        self.current = name.to_string();
        self.elapsed = 0.0;
        true
    }

    fn restart(&mut self, name: &str) {
        if self.current == name {
            self.elapsed = 0.0;
        } else {
            self.switch(name);
        }
    }
}

impl Animator for SpriteAnimator {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }

    fn get_bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    fn set_trigger(&mut self, name: &str) {
        let clip = self
            .clips
            .values()
            .find(|clip| clip.trigger.as_deref() == Some(name))
            .map(|clip| clip.name.clone());

        let Some(clip) = clip else {
            warn!("Animator has no clip for trigger {:?}", name);
            return;
        };
        if self.get_bool(params::IS_DEAD) {
            debug!("Ignoring trigger {:?} while dead", name);
            return;
        }

        self.restart(&clip);
        self.one_shot = true;
        self.forced = false;
    }

    // Triggers are consumed the moment they are set, so there is never one
    // left waiting to cancel.
    fn reset_trigger(&mut self, _name: &str) {}

    fn current_clip_length(&self) -> f32 {
        self.current_def().map(ClipDef::length).unwrap_or(0.0)
    }

    fn play(&mut self, clip: &str) {
        if self.in_one_shot() {
            return;
        }
        if self.switch(clip) {
            self.forced = true;
            self.one_shot = false;
        } else {
            warn!("Animator has no clip named {:?}", clip);
        }
    }
}

/// System that advances animators based on time.
pub fn advance_animators(time: Res<Time>, mut query: Query<&mut SpriteAnimator>) {
    for mut animator in &mut query {
        animator.advance(time.delta_secs());
    }
}

/// System that colors sprites by their current clip and frame.
pub fn tint_sprites(mut query: Query<(&SpriteAnimator, &mut Sprite), Changed<SpriteAnimator>>) {
    for (animator, mut sprite) in &mut query {
        let Some(clip) = animator.current_def() else {
            continue;
        };
        // Alternate frames slightly darker so playback is visible without textures
        let shade = if animator.current_frame() % 2 == 0 {
            1.0
        } else {
            0.85
        };
        let [r, g, b] = clip.tint;
        sprite.color = Color::srgb(r * shade, g * shade, b * shade);
    }
}
