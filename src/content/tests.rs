//! Content domain: tests for config parsing, validation and conversion.

use std::path::Path;

use super::loader::{parse_controller_config, validate_config};
use super::{ControllerConfig, SurfaceKind, default_arena, load_controller_config};
use crate::movement::{MovementTuning, PlayerBodySettings};

const SAMPLE: &str = r#"
(
    movement: (
        walk_speed: 5.0,
        run_speed: 8.0,
        jump_force: 10.0,
        double_jump_force: 8.0,
        kill_plane_y: -20.0,
    ),
    physics: (
        gravity: 9.81,
        player_size: (0.5, 1.0),
        player_mass: 1.0,
        player_spawn: (0.0, 2.0),
    ),
    arena: [
        (kind: Ground, position: (0.0, 0.0), size: (20.0, 1.0)),
        (kind: Wall, position: (10.0, 5.0), size: (1.0, 10.0)),
    ],
)
"#;

#[test]
fn test_parse_sample_config() {
    let config = parse_controller_config(SAMPLE, "sample.ron").expect("sample parses");

    assert_eq!(config.movement.walk_speed, 5.0);
    assert_eq!(config.movement.run_speed, 8.0);
    // Implicit Some and the epsilon default
    assert_eq!(config.movement.kill_plane_y, Some(-20.0));
    assert_eq!(
        config.movement.vertical_rest_epsilon,
        MovementTuning::default().vertical_rest_epsilon
    );
    assert_eq!(config.arena.len(), 2);
    assert_eq!(config.arena[1].kind, SurfaceKind::Wall);
}

#[test]
fn test_config_converts_to_resources() {
    let config = parse_controller_config(SAMPLE, "sample.ron").expect("sample parses");

    let tuning = MovementTuning::from(&config.movement);
    assert_eq!(tuning.jump_force, 10.0);
    assert_eq!(tuning.double_jump_force, 8.0);

    let body = PlayerBodySettings::from(&config.physics);
    assert_eq!(body.size.x, 0.5);
    assert_eq!(body.spawn.y, 2.0);
}

#[test]
fn test_arena_is_optional() {
    let without_arena = SAMPLE.replace(
        r#"arena: [
        (kind: Ground, position: (0.0, 0.0), size: (20.0, 1.0)),
        (kind: Wall, position: (10.0, 5.0), size: (1.0, 10.0)),
    ],"#,
        "",
    );

    let config = parse_controller_config(&without_arena, "no_arena.ron").expect("parses");
    assert!(config.arena.is_empty());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_controller_config("(movement: oops)", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_validation_rejects_bad_values() {
    let bad = SAMPLE
        .replace("walk_speed: 5.0", "walk_speed: -5.0")
        .replace("gravity: 9.81", "gravity: 0.0");

    let err = parse_controller_config(&bad, "bad.ron").unwrap_err();
    assert!(err.message.contains("movement.walk_speed"));
    assert!(err.message.contains("physics.gravity"));
}

#[test]
fn test_validation_rejects_kill_plane_above_spawn() {
    let mut config = ControllerConfig::default();
    config.movement.kill_plane_y = Some(config.physics.player_spawn.1 + 1.0);

    let problems = validate_config(&config);
    assert_eq!(problems.len(), 1);
    assert!(problems[0].contains("kill_plane_y"));
}

#[test]
fn test_default_config_is_valid() {
    let config = ControllerConfig::default();
    assert!(validate_config(&config).is_empty());
    assert_eq!(config.arena, default_arena());
}

#[test]
fn test_default_arena_has_ground_and_walls() {
    let arena = default_arena();
    assert!(arena.iter().any(|s| s.kind == SurfaceKind::Ground));
    assert!(arena.iter().any(|s| s.kind == SurfaceKind::Wall));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_controller_config(Path::new("does/not/exist.ron")).unwrap_err();
    assert!(err.message.starts_with("IO error"));
}

#[test]
fn test_shipped_config_matches_defaults() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(super::CONTROLLER_CONFIG_PATH);
    let config = load_controller_config(&path).expect("shipped config loads");
    assert_eq!(config, ControllerConfig::default());
}
