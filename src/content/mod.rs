//! Content domain: controller tuning and arena layout loaded from RON.

mod data;
mod loader;
#[cfg(test)]
mod tests;

pub use data::{ControllerConfig, SurfaceDef, SurfaceKind, default_arena};
pub use loader::load_controller_config;

use avian2d::prelude::*;
use bevy::prelude::*;
use std::path::Path;

use crate::level::ArenaLayout;
use crate::movement::{MovementTuning, PlayerBodySettings};

pub const CONTROLLER_CONFIG_PATH: &str = "assets/data/controller.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load the controller config, falling back to built-in defaults on any error.
fn load_content(mut commands: Commands) {
    let config = match load_controller_config(Path::new(CONTROLLER_CONFIG_PATH)) {
        Ok(config) => {
            info!(
                "Loaded controller config: walk={}, run={}, jump={}, double_jump={}, surfaces={}",
                config.movement.walk_speed,
                config.movement.run_speed,
                config.movement.jump_force,
                config.movement.double_jump_force,
                config.arena.len()
            );
            config
        }
        Err(e) => {
            warn!("{}; using built-in controller defaults", e);
            ControllerConfig::default()
        }
    };

    apply_config(&mut commands, &config);
}

fn apply_config(commands: &mut Commands, config: &ControllerConfig) {
    commands.insert_resource(MovementTuning::from(&config.movement));
    commands.insert_resource(PlayerBodySettings::from(&config.physics));
    commands.insert_resource(Gravity(Vec2::NEG_Y * config.physics.gravity));
    commands.insert_resource(ArenaLayout {
        surfaces: config.arena.clone(),
    });
}
