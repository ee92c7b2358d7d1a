//! UI domain: touch controls and death overlay.

mod death;
#[cfg(test)]
mod tests;
mod touch_controls;

use bevy::prelude::*;

use crate::movement::PlayerSet;
use crate::ui::death::show_death_overlay;
use crate::ui::touch_controls::{paint_touch_buttons, spawn_touch_controls};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_touch_controls)
            .add_systems(Update, paint_touch_buttons)
            .add_systems(Update, show_death_overlay.after(PlayerSet::Control));
    }
}
