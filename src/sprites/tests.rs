//! Sprites module: tests for clip manifest parsing and animator selection.

use bevy::math::Vec2;

use super::{ClipManifest, SpriteAnimator, clips};
use crate::controller::{
    Animator, CharacterController, InputSnapshot, JumpPhase, PhysicsBody, params,
};
use crate::movement::MovementTuning;

fn animator() -> SpriteAnimator {
    SpriteAnimator::new(ClipManifest::default().clips())
}

fn grounded(animator: &mut SpriteAnimator) {
    animator.set_bool(params::GROUNDED, true);
}

/// Body that only holds a velocity.
struct FreeBody(Vec2);

impl PhysicsBody for FreeBody {
    fn velocity(&self) -> Vec2 {
        self.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.0 += impulse;
    }

    fn set_gravity_scale(&mut self, _scale: f32) {}

    fn set_collision_enabled(&mut self, _enabled: bool) {}
}

#[test]
fn test_default_manifest_has_trigger_clips() {
    let manifest = ClipManifest::default();
    let sword = manifest.get(clips::SWORD_ATTACK).expect("sword clip");

    assert_eq!(sword.trigger.as_deref(), Some(params::TRIGGER_ATTACK_SWORD));
    assert!((sword.length() - 0.4).abs() < 1e-6);
    assert!(manifest.get(clips::JUMP_DOWN).is_some());
    assert!(manifest.get(clips::DEATH).is_some());
}

#[test]
fn test_manifest_from_json_applies_defaults() {
    let json = r#"{
        "version": 2,
        "clips": [
            { "name": "Idle", "frames": 4, "frame_duration": 0.2, "looping": true },
            { "name": "Attack", "frames": 3, "frame_duration": 0.1, "trigger": "Attack",
              "tint": [1.0, 0.5, 0.5] }
        ]
    }"#;

    let manifest = ClipManifest::from_json(json).expect("valid manifest");
    assert_eq!(manifest.version, 2);
    assert_eq!(manifest.len(), 2);

    let idle = manifest.get("Idle").expect("idle clip");
    assert!(idle.looping);
    assert_eq!(idle.trigger, None);
    assert_eq!(idle.tint, [0.9, 0.9, 0.9]);

    let attack = manifest.get("Attack").expect("attack clip");
    assert!(!attack.looping);
    assert_eq!(attack.tint, [1.0, 0.5, 0.5]);
}

#[test]
fn test_manifest_from_json_rejects_missing_fields() {
    let json = r#"{ "version": 1, "clips": [ { "name": "Idle" } ] }"#;
    assert!(ClipManifest::from_json(json).is_err());
}

#[test]
fn test_manifest_reports_missing_clips() {
    assert!(ClipManifest::default().missing(&clips::REQUIRED).is_empty());

    let json = r#"{ "version": 1, "clips": [
        { "name": "Idle", "frames": 4, "frame_duration": 0.2, "looping": true }
    ] }"#;
    let manifest = ClipManifest::from_json(json).expect("valid manifest");
    let missing = manifest.missing(&clips::REQUIRED);
    assert_eq!(missing.len(), clips::REQUIRED.len() - 1);
    assert!(missing.contains(&clips::DEATH));
    assert!(!missing.contains(&clips::IDLE));
}

#[test]
fn test_missing_manifest_file_keeps_builtin_clips() {
    let mut manifest = ClipManifest::default();
    manifest.load_from_file("does/not/exist.json");
    assert_eq!(manifest.len(), ClipManifest::default().len());
}

#[test]
fn test_trigger_starts_clip_and_reports_its_length() {
    let mut animator = animator();
    grounded(&mut animator);
    animator.advance(0.0);
    assert_eq!(animator.current_clip(), clips::IDLE);

    animator.set_trigger(params::TRIGGER_ATTACK);
    assert_eq!(animator.current_clip(), clips::ATTACK);
    assert!((animator.current_clip_length() - 0.3).abs() < 1e-6);
    assert!(animator.in_one_shot());
}

#[test]
fn test_one_shot_holds_until_finished() {
    let mut animator = animator();
    grounded(&mut animator);
    animator.set_bool(params::IS_RUNNING, true);
    animator.set_trigger(params::TRIGGER_ATTACK_SWORD);

    animator.advance(0.2);
    assert_eq!(animator.current_clip(), clips::SWORD_ATTACK);
    assert!(!animator.is_finished());

    animator.advance(0.25);
    assert_eq!(animator.current_clip(), clips::RUN);
}

#[test]
fn test_unknown_trigger_is_ignored() {
    let mut animator = animator();
    animator.set_trigger("Taunt");
    assert_eq!(animator.current_clip(), clips::IDLE);
    assert!(!animator.in_one_shot());
}

#[test]
fn test_play_does_not_cut_running_one_shot() {
    let mut animator = animator();
    animator.set_trigger(params::TRIGGER_ATTACK_SWORD);

    animator.play(clips::JUMP_DOWN);
    assert_eq!(animator.current_clip(), clips::SWORD_ATTACK);

    // Sword attack is 0.4s; once over, play takes effect again
    animator.advance(0.45);
    animator.play(clips::JUMP_DOWN);
    assert_eq!(animator.current_clip(), clips::JUMP_DOWN);
}

#[test]
fn test_falling_attack_plays_its_clip() {
    let mut animator = animator();
    let mut controller = CharacterController {
        phase: JumpPhase::Falling,
        ..Default::default()
    };
    let mut body = FreeBody(Vec2::new(0.0, -50.0));
    let input = InputSnapshot {
        primary_attack: true,
        ..Default::default()
    };

    controller.tick(0.0, &input, &mut body, &mut animator, &MovementTuning::default());
    let guard = controller.attack.map(|window| window.ends_at).unwrap_or(0.0);
    assert!((guard - 0.4).abs() < 1e-5);

    for _ in 0..5 {
        animator.advance(0.05);
    }
    assert_eq!(animator.current_clip(), clips::SWORD_ATTACK);
}

#[test]
fn test_parameters_pick_locomotion_clips() {
    let mut animator = animator();

    animator.set_bool(params::IS_JUMPING, true);
    animator.advance(0.016);
    assert_eq!(animator.current_clip(), clips::JUMP);

    animator.set_bool(params::IS_JUMPING, false);
    animator.set_bool(params::IS_DOUBLE_JUMPING, true);
    animator.advance(0.016);
    assert_eq!(animator.current_clip(), clips::DOUBLE_JUMP);

    animator.set_bool(params::IS_DOUBLE_JUMPING, false);
    grounded(&mut animator);
    animator.advance(0.016);
    assert_eq!(animator.current_clip(), clips::IDLE);
}

#[test]
fn test_forced_clip_holds_while_airborne() {
    let mut animator = animator();
    animator.set_bool(params::IS_JUMPING, true);
    animator.play(clips::JUMP_DOWN);

    animator.advance(0.016);
    assert_eq!(animator.current_clip(), clips::JUMP_DOWN);

    // Landing releases the forced clip
    grounded(&mut animator);
    animator.advance(0.016);
    assert_eq!(animator.current_clip(), clips::IDLE);
}

#[test]
fn test_play_unknown_clip_is_ignored() {
    let mut animator = animator();
    animator.play("Cartwheel");
    assert_eq!(animator.current_clip(), clips::IDLE);
}

#[test]
fn test_dead_overrides_everything() {
    let mut animator = animator();
    grounded(&mut animator);
    animator.set_trigger(params::TRIGGER_ATTACK);
    animator.set_bool(params::IS_DEAD, true);

    animator.advance(0.016);
    assert_eq!(animator.current_clip(), clips::DEATH);

    // Triggers no longer start clips
    animator.set_trigger(params::TRIGGER_ATTACK_SWORD);
    assert_eq!(animator.current_clip(), clips::DEATH);
    assert!(!animator.in_one_shot());
}

#[test]
fn test_frames_loop_and_clamp() {
    let mut animator = animator();
    grounded(&mut animator);
    animator.advance(0.0);

    // Idle: 4 frames at 0.15s, looping
    animator.advance(0.65);
    assert_eq!(animator.current_frame(), 0);

    animator.set_trigger(params::TRIGGER_ATTACK);
    assert_eq!(animator.current_frame(), 0);
    assert_eq!(animator.current_clip(), clips::ATTACK);
}

#[test]
fn test_shipped_manifest_matches_builtin_clips() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(super::CLIP_MANIFEST_PATH);
    let contents = std::fs::read_to_string(path).expect("shipped manifest exists");
    let shipped = ClipManifest::from_json(&contents).expect("shipped manifest parses");

    assert_eq!(shipped.clips(), ClipManifest::default().clips());
}
