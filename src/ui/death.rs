//! UI domain: death overlay. Death is final, so there is no retry.

use bevy::prelude::*;

use crate::controller::CharacterController;
use crate::movement::Player;

/// Marker for the death screen overlay
#[derive(Component)]
pub struct DeathScreenUI;

pub(crate) fn show_death_overlay(
    mut commands: Commands,
    player_query: Query<&CharacterController, (With<Player>, Changed<CharacterController>)>,
    existing_death_screen: Query<(), With<DeathScreenUI>>,
) {
    let Ok(controller) = player_query.single() else {
        return;
    };

    if controller.is_dead && existing_death_screen.is_empty() {
        spawn_death_screen(&mut commands);
    }
}

fn spawn_death_screen(commands: &mut Commands) {
    commands
        .spawn((
            DeathScreenUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            ZIndex(100),
        ))
        .with_child((
            Text::new("YOU DIED"),
            TextFont {
                font_size: 72.0,
                ..default()
            },
            TextColor(Color::srgb(0.8, 0.15, 0.15)),
        ));
}
