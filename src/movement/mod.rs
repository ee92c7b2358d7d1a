//! Movement domain: player body, controller driving and contact handling.

mod body;
mod bootstrap;
mod components;
mod resources;
mod systems;

pub use components::{GameLayer, Player, surface_of};
pub use resources::{DeathCause, MovementTuning, PlayerBodySettings, PlayerDeathRequest};

use bevy::prelude::*;

use crate::controller::ButtonLatch;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_kill_plane, drive_controller, handle_death_requests, handle_surface_contacts,
    publish_grounded, read_keyboard_input,
};

/// Ordering of the player pipeline within a frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlayerSet {
    /// Button and keyboard edges into the latch
    Input,
    /// Collision enter/exit reactions
    Contacts,
    /// Controller tick and death handling
    Control,
    /// Late pass (PostUpdate)
    Late,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<PlayerBodySettings>()
            .init_resource::<ButtonLatch>()
            .add_message::<PlayerDeathRequest>()
            .add_systems(Startup, spawn_player)
            .configure_sets(
                Update,
                (PlayerSet::Input, PlayerSet::Contacts, PlayerSet::Control).chain(),
            )
            .add_systems(Update, read_keyboard_input.in_set(PlayerSet::Input))
            .add_systems(Update, handle_surface_contacts.in_set(PlayerSet::Contacts))
            .add_systems(
                Update,
                (drive_controller, apply_kill_plane, handle_death_requests)
                    .chain()
                    .in_set(PlayerSet::Control),
            )
            .add_systems(PostUpdate, publish_grounded.in_set(PlayerSet::Late));
    }
}
