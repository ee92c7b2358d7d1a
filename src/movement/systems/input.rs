//! Movement domain: keyboard input routed into the button latch.

use bevy::prelude::*;

use crate::controller::{ButtonLatch, ControlButton, InputOrigin, InputSource};

/// Run modifier (walk speed otherwise).
pub(crate) const RUN_KEY: KeyCode = KeyCode::ShiftLeft;

/// Desktop mirrors of the on-screen buttons.
pub(crate) const KEY_BINDINGS: [(ControlButton, [KeyCode; 2]); 5] = [
    (ControlButton::Left, [KeyCode::KeyA, KeyCode::ArrowLeft]),
    (ControlButton::Right, [KeyCode::KeyD, KeyCode::ArrowRight]),
    (ControlButton::Jump, [KeyCode::Space, KeyCode::ArrowUp]),
    (ControlButton::PrimaryAttack, [KeyCode::KeyJ, KeyCode::KeyZ]),
    (ControlButton::SecondaryAttack, [KeyCode::KeyK, KeyCode::KeyX]),
];

pub(crate) fn read_keyboard_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut latch: ResMut<ButtonLatch>,
) {
    let mut source = latch.from_origin(InputOrigin::Keyboard);
    for (button, keys) in KEY_BINDINGS {
        route_key_edges(
            &mut source,
            button,
            keyboard.any_just_pressed(keys),
            keyboard.any_just_released(keys),
        );
    }
}

/// Held buttons follow press/release; pulse buttons fire on key down.
pub(crate) fn route_key_edges(
    source: &mut impl InputSource,
    button: ControlButton,
    just_pressed: bool,
    just_released: bool,
) {
    if button.is_held() {
        if just_pressed {
            source.press(button);
        }
        if just_released {
            source.release(button);
        }
    } else if just_pressed {
        source.click(button);
    }
}

pub(crate) fn run_held(keyboard: &ButtonInput<KeyCode>) -> bool {
    keyboard.pressed(RUN_KEY)
}
