//! Data definitions for the controller config file.

use serde::{Deserialize, Serialize};

use crate::movement::{MovementTuning, PlayerBodySettings};

/// Top-level layout of `controller.ron`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ControllerConfig {
    pub movement: MovementDef,
    pub physics: PhysicsDef,
    #[serde(default)]
    pub arena: Vec<SurfaceDef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovementDef {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_force: f32,
    pub double_jump_force: f32,
    #[serde(default = "default_rest_epsilon")]
    pub vertical_rest_epsilon: f32,
    #[serde(default)]
    pub kill_plane_y: Option<f32>,
}

fn default_rest_epsilon() -> f32 {
    MovementTuning::default().vertical_rest_epsilon
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PhysicsDef {
    /// Downward acceleration in pixels per second squared.
    pub gravity: f32,
    pub player_size: (f32, f32),
    pub player_mass: f32,
    pub player_spawn: (f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SurfaceKind {
    Ground,
    Wall,
}

/// One static collider of the test arena, centered at `position`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SurfaceDef {
    pub kind: SurfaceKind,
    pub position: (f32, f32),
    pub size: (f32, f32),
}

impl SurfaceDef {
    fn new(kind: SurfaceKind, position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            kind,
            position,
            size,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        let tuning = MovementTuning::default();
        let body = PlayerBodySettings::default();

        Self {
            movement: MovementDef {
                walk_speed: tuning.walk_speed,
                run_speed: tuning.run_speed,
                jump_force: tuning.jump_force,
                double_jump_force: tuning.double_jump_force,
                vertical_rest_epsilon: tuning.vertical_rest_epsilon,
                kill_plane_y: tuning.kill_plane_y,
            },
            physics: PhysicsDef {
                gravity: 470.0,
                player_size: (body.size.x, body.size.y),
                player_mass: body.mass,
                player_spawn: (body.spawn.x, body.spawn.y),
            },
            arena: default_arena(),
        }
    }
}

/// Two floor sections around a pit, side walls, three platforms and a pillar.
pub fn default_arena() -> Vec<SurfaceDef> {
    use SurfaceKind::{Ground, Wall};

    vec![
        SurfaceDef::new(Ground, (-230.0, -200.0), (340.0, 40.0)),
        SurfaceDef::new(Ground, (230.0, -200.0), (340.0, 40.0)),
        SurfaceDef::new(Wall, (-420.0, 50.0), (40.0, 500.0)),
        SurfaceDef::new(Wall, (420.0, 50.0), (40.0, 500.0)),
        SurfaceDef::new(Ground, (-250.0, -50.0), (150.0, 20.0)),
        SurfaceDef::new(Ground, (250.0, 50.0), (150.0, 20.0)),
        SurfaceDef::new(Ground, (0.0, 150.0), (120.0, 20.0)),
        SurfaceDef::new(Wall, (-100.0, -120.0), (30.0, 120.0)),
    ]
}

impl From<&MovementDef> for MovementTuning {
    fn from(def: &MovementDef) -> Self {
        Self {
            walk_speed: def.walk_speed,
            run_speed: def.run_speed,
            jump_force: def.jump_force,
            double_jump_force: def.double_jump_force,
            vertical_rest_epsilon: def.vertical_rest_epsilon,
            kill_plane_y: def.kill_plane_y,
        }
    }
}

impl From<&PhysicsDef> for PlayerBodySettings {
    fn from(def: &PhysicsDef) -> Self {
        Self {
            size: def.player_size.into(),
            mass: def.player_mass,
            spawn: def.player_spawn.into(),
        }
    }
}
