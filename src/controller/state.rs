//! Controller domain: player state, jump phases and the per-frame transition.

use bevy::prelude::*;

use crate::controller::host::{Animator, PhysicsBody, params};
use crate::controller::latch::InputSnapshot;
use crate::movement::MovementTuning;

/// Resolved horizontal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    Left,
    #[default]
    Neutral,
    Right,
}

impl Axis {
    pub fn value(self) -> f32 {
        match self {
            Axis::Left => -1.0,
            Axis::Neutral => 0.0,
            Axis::Right => 1.0,
        }
    }

    pub fn is_neutral(self) -> bool {
        self == Axis::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Where the character is in its jump cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    /// Airborne without a double jump available (walked off a ledge, touched a wall).
    Falling,
    /// Airborne after a ground jump; one double jump available.
    Jumped,
    DoubleJumped,
}

/// Collision surface classes the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Ground,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    /// Attack 1 button
    Sword,
    /// Attack 2 button
    Basic,
}

impl AttackKind {
    pub fn trigger(self) -> &'static str {
        match self {
            AttackKind::Sword => params::TRIGGER_ATTACK_SWORD,
            AttackKind::Basic => params::TRIGGER_ATTACK,
        }
    }
}

/// Active attack guard, cleared once `ends_at` is reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackWindow {
    pub kind: AttackKind,
    pub started_at: f64,
    pub ends_at: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Ground,
    Double,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Started,
    Rejected,
}

/// What a single tick did, for the host adapter and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// The tick ran its input pass; latched pulses must be cleared.
    pub input_consumed: bool,
    /// Orientation changed; the visual transform must be mirrored.
    pub flipped: bool,
    pub jump: Option<JumpOutcome>,
    pub attack_expired: bool,
}

/// Per-player state, updated every frame and by contact callbacks.
#[derive(Component, Debug, Clone, Default)]
pub struct CharacterController {
    pub phase: JumpPhase,
    pub touching_wall: bool,
    pub facing: Facing,
    pub is_dead: bool,
    pub attack: Option<AttackWindow>,
    pub horizontal: Axis,
}

impl CharacterController {
    pub fn grounded(&self) -> bool {
        self.phase == JumpPhase::Grounded
    }

    pub fn can_double_jump(&self) -> bool {
        self.phase == JumpPhase::Jumped
    }

    pub fn is_attacking(&self) -> bool {
        self.attack.is_some()
    }

    pub fn facing_right(&self) -> bool {
        self.facing == Facing::Right
    }

    /// Main per-frame update.
    ///
    /// Does nothing while dead or while an attack guard is active; in that
    /// case pulses stay latched and fire on the first tick after the guard
    /// clears.
    pub fn tick(
        &mut self,
        now: f64,
        input: &InputSnapshot,
        body: &mut impl PhysicsBody,
        animator: &mut impl Animator,
        tuning: &MovementTuning,
    ) -> TickReport {
        let mut report = TickReport {
            attack_expired: self.expire_attack(now),
            ..default()
        };

        if self.is_dead || self.is_attacking() {
            return report;
        }

        if self.grounded() {
            animator.set_bool(params::IS_DOUBLE_JUMPING, false);
        }

        self.horizontal = input.axis;
        let speed = if input.run_held {
            tuning.run_speed
        } else {
            tuning.walk_speed
        };
        let velocity = body.velocity();
        body.set_velocity(Vec2::new(self.horizontal.value() * speed, velocity.y));

        report.flipped = self.update_facing();
        report.input_consumed = true;

        if input.jump {
            report.jump = Some(self.handle_jump(body, animator, tuning));
        }
        if input.primary_attack {
            self.start_attack(AttackKind::Sword, now, animator);
        }
        if input.secondary_attack {
            self.start_attack(AttackKind::Basic, now, animator);
        }

        self.sync_animation(&*body, animator, tuning);
        report
    }

    /// Runs after every update pass, including while dead or attacking.
    pub fn late_tick(&self, animator: &mut impl Animator) {
        animator.set_bool(params::GROUNDED, self.grounded());
    }

    pub fn on_contact_enter(&mut self, surface: Surface, animator: &mut impl Animator) {
        match surface {
            Surface::Ground => {
                if !self.grounded() {
                    debug!("Landed from {:?}", self.phase);
                }
                self.phase = JumpPhase::Grounded;
                animator.set_bool(params::IS_JUMPING, false);
                animator.set_bool(params::IS_DOUBLE_JUMPING, false);
                animator.reset_trigger(params::TRIGGER_ATTACK_SWORD);
                animator.reset_trigger(params::TRIGGER_ATTACK);
            }
            Surface::Wall => {
                self.touching_wall = true;
                if self.phase == JumpPhase::Jumped {
                    self.phase = JumpPhase::Falling;
                }
            }
        }
    }

    /// Single enter/exit pair per surface class; overlapping contacts are not counted.
    pub fn on_contact_exit(&mut self, surface: Surface) {
        match surface {
            Surface::Ground => {
                if self.grounded() {
                    debug!("Left ground without jumping");
                    self.phase = JumpPhase::Falling;
                }
            }
            Surface::Wall => self.touching_wall = false,
        }
    }

    pub fn handle_jump(
        &mut self,
        body: &mut impl PhysicsBody,
        animator: &mut impl Animator,
        tuning: &MovementTuning,
    ) -> JumpOutcome {
        match self.phase {
            JumpPhase::Grounded => {
                launch(body, tuning.jump_force);
                self.phase = JumpPhase::Jumped;
                animator.set_bool(params::IS_JUMPING, true);
                debug!("Ground jump: force={}", tuning.jump_force);
                JumpOutcome::Ground
            }
            JumpPhase::Jumped if !self.touching_wall => {
                launch(body, tuning.double_jump_force);
                self.phase = JumpPhase::DoubleJumped;
                animator.set_bool(params::IS_DOUBLE_JUMPING, true);
                animator.set_bool(params::IS_JUMPING, false);
                debug!("Double jump: force={}", tuning.double_jump_force);
                JumpOutcome::Double
            }
            phase => {
                debug!(
                    "Jump rejected: phase={:?}, touching_wall={}",
                    phase, self.touching_wall
                );
                JumpOutcome::Rejected
            }
        }
    }

    pub fn start_attack(
        &mut self,
        kind: AttackKind,
        now: f64,
        animator: &mut impl Animator,
    ) -> AttackOutcome {
        if let Some(active) = self.attack {
            debug!("Attack {:?} rejected, {:?} still active", kind, active.kind);
            return AttackOutcome::Rejected;
        }

        animator.set_trigger(kind.trigger());
        let length = animator.current_clip_length().max(0.0) as f64;
        self.attack = Some(AttackWindow {
            kind,
            started_at: now,
            ends_at: now + length,
        });
        debug!("Attack {:?} started, guard for {:.3}s", kind, length);
        AttackOutcome::Started
    }

    /// Terminal state. Freezes the body and disables collision for good.
    pub fn die(&mut self, body: &mut impl PhysicsBody, animator: &mut impl Animator) {
        if !self.is_dead {
            info!("Player died");
        }
        self.is_dead = true;
        body.set_velocity(Vec2::ZERO);
        body.set_gravity_scale(0.0);
        body.set_collision_enabled(false);
        animator.set_bool(params::IS_DEAD, true);
    }

    fn expire_attack(&mut self, now: f64) -> bool {
        match self.attack {
            Some(window) if now >= window.ends_at => {
                debug!(
                    "Attack {:?} finished after {:.3}s",
                    window.kind,
                    now - window.started_at
                );
                self.attack = None;
                true
            }
            _ => false,
        }
    }

    fn update_facing(&mut self) -> bool {
        let disagrees = match self.horizontal {
            Axis::Right => self.facing == Facing::Left,
            Axis::Left => self.facing == Facing::Right,
            Axis::Neutral => false,
        };
        if disagrees {
            self.facing = self.facing.flipped();
        }
        disagrees
    }

    fn sync_animation(
        &mut self,
        body: &impl PhysicsBody,
        animator: &mut impl Animator,
        tuning: &MovementTuning,
    ) {
        let vy = body.velocity().y;
        let epsilon = tuning.vertical_rest_epsilon;

        animator.set_bool(
            params::IS_RUNNING,
            !self.horizontal.is_neutral() && self.grounded(),
        );

        if self.grounded() && vy.abs() < epsilon {
            animator.set_bool(params::IS_JUMPING, false);
            animator.set_bool(params::IS_DOUBLE_JUMPING, false);
        } else if !self.grounded()
            && vy < -epsilon
            && !animator.get_bool(params::IS_DOUBLE_JUMPING)
        {
            animator.play(params::CLIP_JUMP_DOWN);
        }
    }
}

/// Zero the vertical velocity, then push upward.
fn launch(body: &mut impl PhysicsBody, force: f32) {
    let velocity = body.velocity();
    body.set_velocity(Vec2::new(velocity.x, 0.0));
    body.apply_impulse(Vec2::Y * force);
}
