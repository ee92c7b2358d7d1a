//! Controller domain: latched button input and per-tick snapshots.

use bevy::prelude::*;

use crate::controller::state::{Axis, TickReport};

/// On-screen (or mirrored keyboard) control buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlButton {
    Left,
    Right,
    Jump,
    PrimaryAttack,
    SecondaryAttack,
}

impl ControlButton {
    pub const ALL: [ControlButton; 5] = [
        ControlButton::Left,
        ControlButton::Right,
        ControlButton::Jump,
        ControlButton::PrimaryAttack,
        ControlButton::SecondaryAttack,
    ];

    /// Held buttons track press/release; the rest fire a pulse on click.
    pub fn is_held(self) -> bool {
        matches!(self, ControlButton::Left | ControlButton::Right)
    }

    pub fn label(self) -> &'static str {
        match self {
            ControlButton::Left => "<",
            ControlButton::Right => ">",
            ControlButton::Jump => "JUMP",
            ControlButton::PrimaryAttack => "SWORD",
            ControlButton::SecondaryAttack => "ATK",
        }
    }
}

/// Anything that can receive button edges from the host UI.
pub trait InputSource {
    fn press(&mut self, button: ControlButton);

    fn release(&mut self, button: ControlButton);

    fn click(&mut self, button: ControlButton);
}

/// Device a held button edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOrigin {
    Touch,
    Keyboard,
}

/// Held state of a direction button, tracked per origin so one device
/// releasing does not cancel the other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hold {
    pub touch: bool,
    pub keyboard: bool,
}

impl Hold {
    pub fn is_down(self) -> bool {
        self.touch || self.keyboard
    }

    fn set(&mut self, origin: InputOrigin, down: bool) {
        match origin {
            InputOrigin::Touch => self.touch = down,
            InputOrigin::Keyboard => self.keyboard = down,
        }
    }
}

/// Pending button state between ticks. Last writer wins; nothing is queued.
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct ButtonLatch {
    pub left: Hold,
    pub right: Hold,
    pub jump_down: bool,
    pub primary_attack_down: bool,
    pub secondary_attack_down: bool,
}

impl ButtonLatch {
    /// Immutable view of the latch for one tick.
    pub fn snapshot(&self, run_held: bool) -> InputSnapshot {
        let axis = if self.left.is_down() {
            Axis::Left
        } else if self.right.is_down() {
            Axis::Right
        } else {
            Axis::Neutral
        };

        InputSnapshot {
            axis,
            run_held,
            jump: self.jump_down,
            primary_attack: self.primary_attack_down,
            secondary_attack: self.secondary_attack_down,
        }
    }

    /// Edge sink for one input device.
    pub fn from_origin(&mut self, origin: InputOrigin) -> OriginLatch<'_> {
        OriginLatch {
            latch: self,
            origin,
        }
    }

    /// Reset the one-shot pulses after a tick consumed them.
    pub fn clear_pulses(&mut self) {
        self.jump_down = false;
        self.primary_attack_down = false;
        self.secondary_attack_down = false;
    }

    pub fn has_pending_pulse(&self) -> bool {
        self.jump_down || self.primary_attack_down || self.secondary_attack_down
    }

    /// Apply the outcome of a tick. Pulses are cleared only when the tick
    /// read its input; otherwise they stay latched. Returns true when
    /// pulses are still waiting.
    pub fn settle(&mut self, report: &TickReport) -> bool {
        if report.input_consumed {
            self.clear_pulses();
            false
        } else {
            self.has_pending_pulse()
        }
    }

    fn hold_mut(&mut self, button: ControlButton) -> Option<&mut Hold> {
        match button {
            ControlButton::Left => Some(&mut self.left),
            ControlButton::Right => Some(&mut self.right),
            _ => None,
        }
    }
}

/// [`ButtonLatch`] borrowed for a single input device.
pub struct OriginLatch<'a> {
    latch: &'a mut ButtonLatch,
    origin: InputOrigin,
}

impl InputSource for OriginLatch<'_> {
    fn press(&mut self, button: ControlButton) {
        // Pulse buttons only react to clicks
        if let Some(hold) = self.latch.hold_mut(button) {
            hold.set(self.origin, true);
        }
    }

    fn release(&mut self, button: ControlButton) {
        if let Some(hold) = self.latch.hold_mut(button) {
            hold.set(self.origin, false);
        }
    }

    fn click(&mut self, button: ControlButton) {
        match button {
            ControlButton::Jump => self.latch.jump_down = true,
            ControlButton::PrimaryAttack => self.latch.primary_attack_down = true,
            ControlButton::SecondaryAttack => self.latch.secondary_attack_down = true,
            _ => {}
        }
    }
}

/// Edges fed straight into the latch count as touch input.
impl InputSource for ButtonLatch {
    fn press(&mut self, button: ControlButton) {
        self.from_origin(InputOrigin::Touch).press(button);
    }

    fn release(&mut self, button: ControlButton) {
        self.from_origin(InputOrigin::Touch).release(button);
    }

    fn click(&mut self, button: ControlButton) {
        self.from_origin(InputOrigin::Touch).click(button);
    }
}

/// Input seen by a single controller tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub axis: Axis,
    pub run_held: bool,
    pub jump: bool,
    pub primary_attack: bool,
    pub secondary_attack: bool,
}
