//! Sprites module for clip-based player animation.
//!
//! This module handles:
//! - Loading the clip manifest from JSON
//! - The parameter-driven animator the controller drives
//! - Clip playback and sprite tinting

pub mod animation;
pub mod manifest;
#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;

use crate::movement::PlayerSet;

pub const CLIP_MANIFEST_PATH: &str = "assets/sprites/player_clips.json";

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClipManifest>()
            .add_systems(PreStartup, load_clip_manifest)
            .add_systems(
                PostUpdate,
                (advance_animators, tint_sprites)
                    .chain()
                    .after(PlayerSet::Late),
            );
    }
}

/// System to load the clip manifest before the player spawns.
fn load_clip_manifest(mut manifest: ResMut<ClipManifest>) {
    manifest.load_from_file(CLIP_MANIFEST_PATH);

    let missing = manifest.missing(&clips::REQUIRED);
    if !missing.is_empty() {
        warn!("Clip manifest lacks clips the animator selects: {:?}", missing);
    }
}
