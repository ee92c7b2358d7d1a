//! Debug mode for fast iteration on controller feel (dev-tools feature).
//!
//! Features:
//! - Toggle a state overlay (F1)
//! - Kill the player (F2)

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::controller::CharacterController;
use crate::movement::{DeathCause, Player, PlayerDeathRequest};
use crate::sprites::SpriteAnimator;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the state overlay is visible
    pub show_info: bool,
}

/// Marker for the overlay text
#[derive(Component)]
pub struct DebugInfoText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_overlay)
            .add_systems(Update, (handle_debug_keys, update_debug_overlay));
    }
}

fn spawn_debug_overlay(mut commands: Commands) {
    commands.spawn((
        DebugInfoText,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            ..default()
        },
        Visibility::Hidden,
    ));
}

fn handle_debug_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut deaths: MessageWriter<PlayerDeathRequest>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        state.show_info = !state.show_info;
        info!("[DEBUG] Overlay {}", if state.show_info { "on" } else { "off" });
    }

    if keyboard.just_pressed(KeyCode::F2) {
        info!("[DEBUG] Killing player");
        deaths.write(PlayerDeathRequest {
            reason: DeathCause::Debug,
        });
    }
}

fn update_debug_overlay(
    state: Res<DebugState>,
    player_query: Query<(&CharacterController, &SpriteAnimator, &Transform), With<Player>>,
    mut text_query: Query<(&mut Text, &mut Visibility), With<DebugInfoText>>,
) {
    let Ok((mut text, mut visibility)) = text_query.single_mut() else {
        return;
    };

    if !state.show_info {
        *visibility = Visibility::Hidden;
        return;
    }
    *visibility = Visibility::Visible;

    let Ok((controller, animator, transform)) = player_query.single() else {
        text.0 = "no player".to_string();
        return;
    };

    text.0 = format!(
        "pos: ({:.0}, {:.0})\nphase: {:?}\nwall: {}\nfacing: {:?}\ninput: {:?}\nattack: {}\ndead: {}\nclip: {} [{}]",
        transform.translation.x,
        transform.translation.y,
        controller.phase,
        controller.touching_wall,
        controller.facing,
        controller.horizontal,
        controller
            .attack
            .map(|window| format!("{:?} until {:.2}s", window.kind, window.ends_at))
            .unwrap_or_else(|| "-".to_string()),
        controller.is_dead,
        animator.current_clip(),
        animator.current_frame(),
    );
}
