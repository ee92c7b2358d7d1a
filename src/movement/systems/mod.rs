//! Movement domain: system modules for the player controller.

pub(crate) mod collisions;
pub(crate) mod controller;
pub(crate) mod input;

pub(crate) use collisions::handle_surface_contacts;
pub(crate) use controller::{
    apply_kill_plane, drive_controller, handle_death_requests, publish_grounded,
};
pub(crate) use input::read_keyboard_input;
