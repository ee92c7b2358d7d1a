//! Level domain: camera and the static test arena.


use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{SurfaceDef, SurfaceKind, default_arena};
use crate::movement::GameLayer;

/// Static surfaces to spawn at startup.
#[derive(Resource, Debug, Clone)]
pub struct ArenaLayout {
    pub surfaces: Vec<SurfaceDef>,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            surfaces: default_arena(),
        }
    }
}

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArenaLayout>()
            .add_systems(Startup, (setup_camera, spawn_arena));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn spawn_arena(mut commands: Commands, layout: Res<ArenaLayout>) {
    for surface in &layout.surfaces {
        let size = Vec2::from(surface.size);
        commands.spawn((
            Sprite {
                color: surface_color(surface.kind),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(Vec2::from(surface.position).extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Friction::new(0.0),
            surface_layers(surface.kind),
        ));
    }

    info!("Spawned arena with {} surfaces", layout.surfaces.len());
}

fn surface_color(kind: SurfaceKind) -> Color {
    match kind {
        SurfaceKind::Ground => Color::srgb(0.4, 0.5, 0.4),
        SurfaceKind::Wall => Color::srgb(0.3, 0.3, 0.4),
    }
}

/// Contacts are classified by layer membership alone.
pub(crate) fn surface_layers(kind: SurfaceKind) -> CollisionLayers {
    let layer = match kind {
        SurfaceKind::Ground => GameLayer::Ground,
        SurfaceKind::Wall => GameLayer::Wall,
    };
    CollisionLayers::new(layer, [GameLayer::Player])
}
