//! UI domain: on-screen movement, jump and attack buttons.

use bevy::prelude::*;

use crate::controller::{ButtonLatch, ControlButton, InputSource};

const BUTTON_SIZE: f32 = 72.0;
const BUTTON_GAP: f32 = 12.0;
const EDGE_PADDING: f32 = 24.0;

const IDLE_COLOR: Color = Color::srgba(0.15, 0.15, 0.2, 0.6);
const PRESSED_COLOR: Color = Color::srgba(0.35, 0.35, 0.45, 0.8);

/// On-screen control bound to a controller button.
#[derive(Component, Debug)]
pub struct TouchButton {
    pub button: ControlButton,
    pressed: bool,
}

impl TouchButton {
    pub fn new(button: ControlButton) -> Self {
        Self {
            button,
            pressed: false,
        }
    }
}

/// Pointer event seen by a touch button. Each finger or mouse is its own
/// pointer, so a held direction survives taps elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointerPhase {
    Down,
    Up,
    Exit,
    /// Down and up on the same button.
    Click,
}

/// Edge forwarded to the latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonEdge {
    Press,
    Release,
    Click,
}

/// Held buttons press on pointer down and release on pointer up or exit.
/// Pulse buttons fire on click only.
pub(crate) fn pointer_edge(button: ControlButton, phase: PointerPhase) -> Option<ButtonEdge> {
    match phase {
        PointerPhase::Down if button.is_held() => Some(ButtonEdge::Press),
        PointerPhase::Up | PointerPhase::Exit if button.is_held() => Some(ButtonEdge::Release),
        PointerPhase::Click if !button.is_held() => Some(ButtonEdge::Click),
        _ => None,
    }
}

pub(crate) fn apply_edge(source: &mut impl InputSource, button: ControlButton, edge: ButtonEdge) {
    match edge {
        ButtonEdge::Press => source.press(button),
        ButtonEdge::Release => source.release(button),
        ButtonEdge::Click => source.click(button),
    }
}

/// Forward one pointer event on `button` to the latch and update its pressed look.
pub(crate) fn route_pointer(
    button: ControlButton,
    phase: PointerPhase,
    latch: &mut ButtonLatch,
    touches: &mut Query<&mut TouchButton>,
) {
    if let Some(edge) = pointer_edge(button, phase) {
        debug!("Touch {:?}: {:?}", button, edge);
        apply_edge(latch, button, edge);
    }

    let pressed = phase == PointerPhase::Down;
    for mut touch in touches.iter_mut().filter(|touch| touch.button == button) {
        if touch.pressed != pressed {
            touch.pressed = pressed;
        }
    }
}

pub(crate) fn paint_touch_buttons(
    mut query: Query<(&TouchButton, &mut BackgroundColor), Changed<TouchButton>>,
) {
    for (touch, mut background) in &mut query {
        background.0 = if touch.pressed {
            PRESSED_COLOR
        } else {
            IDLE_COLOR
        };
    }
}

pub(crate) fn spawn_touch_controls(mut commands: Commands) {
    // Movement pad, bottom-left
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(EDGE_PADDING),
            bottom: Val::Px(EDGE_PADDING),
            column_gap: Val::Px(BUTTON_GAP),
            ..default()
        })
        .with_children(|parent| {
            for button in [ControlButton::Left, ControlButton::Right] {
                spawn_button(parent, button);
            }
        });

    // Action buttons, bottom-right
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(EDGE_PADDING),
            bottom: Val::Px(EDGE_PADDING),
            column_gap: Val::Px(BUTTON_GAP),
            ..default()
        })
        .with_children(|parent| {
            for button in [
                ControlButton::PrimaryAttack,
                ControlButton::SecondaryAttack,
                ControlButton::Jump,
            ] {
                spawn_button(parent, button);
            }
        });
}

fn spawn_button(parent: &mut ChildSpawnerCommands, button: ControlButton) {
    parent
        .spawn((
            TouchButton::new(button),
            Button,
            Node {
                width: Val::Px(BUTTON_SIZE),
                height: Val::Px(BUTTON_SIZE),
                border: UiRect::all(Val::Px(2.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(IDLE_COLOR),
            BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
        ))
        .with_child((
            Text::new(button.label()),
            TextFont {
                font_size: 16.0,
                ..default()
            },
            TextColor(Color::srgb(0.9, 0.9, 0.9)),
            Pickable::IGNORE,
        ))
        .observe(
            move |_: On<Pointer<Press>>,
                  mut latch: ResMut<ButtonLatch>,
                  mut touches: Query<&mut TouchButton>| {
                route_pointer(button, PointerPhase::Down, &mut latch, &mut touches);
            },
        )
        .observe(
            move |_: On<Pointer<Release>>,
                  mut latch: ResMut<ButtonLatch>,
                  mut touches: Query<&mut TouchButton>| {
                route_pointer(button, PointerPhase::Up, &mut latch, &mut touches);
            },
        )
        .observe(
            move |_: On<Pointer<Out>>,
                  mut latch: ResMut<ButtonLatch>,
                  mut touches: Query<&mut TouchButton>| {
                route_pointer(button, PointerPhase::Exit, &mut latch, &mut touches);
            },
        )
        .observe(
            move |_: On<Pointer<Click>>,
                  mut latch: ResMut<ButtonLatch>,
                  mut touches: Query<&mut TouchButton>| {
                route_pointer(button, PointerPhase::Click, &mut latch, &mut touches);
            },
        );
}
