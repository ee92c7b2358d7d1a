//! Animation clip manifest loading.
//!
//! Loads the clip table JSON which defines every clip the player animator
//! can play: frame counts, frame timing, looping, and the trigger that
//! starts it (for one-shot attack clips).

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::sprites::animation::clips;

/// Definition of a single animation clip.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClipDef {
    pub name: String,
    /// Number of animation frames.
    pub frames: u32,
    /// Seconds per frame.
    pub frame_duration: f32,
    #[serde(default)]
    pub looping: bool,
    /// Animator trigger that starts this clip immediately.
    #[serde(default)]
    pub trigger: Option<String>,
    /// Sprite color while the clip plays (linear sRGB components).
    #[serde(default = "default_tint")]
    pub tint: [f32; 3],
}

fn default_tint() -> [f32; 3] {
    [0.9, 0.9, 0.9]
}

impl ClipDef {
    fn new(name: &str, frames: u32, frame_duration: f32, looping: bool, tint: [f32; 3]) -> Self {
        Self {
            name: name.to_string(),
            frames,
            frame_duration,
            looping,
            trigger: None,
            tint,
        }
    }

    fn triggered_by(mut self, trigger: &str) -> Self {
        self.trigger = Some(trigger.to_string());
        self
    }

    /// Clip length in seconds.
    pub fn length(&self) -> f32 {
        self.frames as f32 * self.frame_duration
    }
}

/// Raw manifest JSON structure.
#[derive(Debug, Deserialize)]
struct ManifestJson {
    version: u32,
    clips: Vec<ClipDef>,
}

/// Resource containing all loaded clip definitions.
#[derive(Resource, Debug, Clone)]
pub struct ClipManifest {
    /// Version of the manifest schema.
    pub version: u32,
    clips: Vec<ClipDef>,
}

impl Default for ClipManifest {
    fn default() -> Self {
        use crate::controller::params::{TRIGGER_ATTACK, TRIGGER_ATTACK_SWORD};

        Self {
            version: 1,
            clips: vec![
                ClipDef::new(clips::IDLE, 4, 0.15, true, [0.9, 0.9, 0.9]),
                ClipDef::new(clips::RUN, 6, 0.1, true, [0.8, 0.9, 1.0]),
                ClipDef::new(clips::JUMP, 2, 0.15, false, [0.7, 0.85, 1.0]),
                ClipDef::new(clips::DOUBLE_JUMP, 3, 0.1, false, [0.55, 0.75, 1.0]),
                ClipDef::new(clips::JUMP_DOWN, 2, 0.15, true, [0.6, 0.7, 0.9]),
                ClipDef::new(clips::SWORD_ATTACK, 5, 0.08, false, [1.0, 0.55, 0.4])
                    .triggered_by(TRIGGER_ATTACK_SWORD),
                ClipDef::new(clips::ATTACK, 3, 0.1, false, [1.0, 0.75, 0.35])
                    .triggered_by(TRIGGER_ATTACK),
                ClipDef::new(clips::DEATH, 4, 0.15, false, [0.5, 0.15, 0.15]),
            ],
        }
    }
}

impl ClipManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let manifest_json: ManifestJson = serde_json::from_str(contents)?;
        Ok(Self {
            version: manifest_json.version,
            clips: manifest_json.clips,
        })
    }

    /// Load the manifest from a JSON file, keeping the built-in clips on failure.
    pub fn load_from_file(&mut self, path: &str) {
        let manifest_path = Path::new(path);

        if !manifest_path.exists() {
            warn!(
                "Clip manifest not found at {:?}, using built-in clips",
                path
            );
            return;
        }

        let contents = match fs::read_to_string(manifest_path) {
            Ok(c) => c,
            Err(e) => {
                error!("Failed to read clip manifest: {}", e);
                return;
            }
        };

        match Self::from_json(&contents) {
            Ok(loaded) if loaded.is_empty() => {
                warn!("Clip manifest {:?} has no clips, using built-in clips", path);
            }
            Ok(loaded) => {
                *self = loaded;
                info!(
                    "Loaded clip manifest v{} with {} clips",
                    self.version,
                    self.clips.len()
                );
            }
            Err(e) => error!("Failed to parse clip manifest: {}", e),
        }
    }

    pub fn clips(&self) -> &[ClipDef] {
        &self.clips
    }

    /// Get a clip definition by name.
    pub fn get(&self, name: &str) -> Option<&ClipDef> {
        self.clips.iter().find(|clip| clip.name == name)
    }

    /// Names from `names` that have no clip.
    pub fn missing<'a>(&self, names: &[&'a str]) -> Vec<&'a str> {
        names
            .iter()
            .copied()
            .filter(|name| self.get(name).is_none())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
