//! Controller domain: engine-independent player state machine.
//!
//! The controller never touches Bevy or avian types directly. Host objects
//! (physics body, animator) are reached through the traits in [`host`], and
//! button input arrives through [`InputSource`] into a [`ButtonLatch`].

mod host;
mod latch;
mod state;

pub use host::{Animator, PhysicsBody, params};
pub use latch::{ButtonLatch, ControlButton, InputOrigin, InputSnapshot, InputSource};
pub use state::{
    AttackKind, AttackOutcome, AttackWindow, Axis, CharacterController, Facing, JumpOutcome,
    JumpPhase, Surface, TickReport,
};
